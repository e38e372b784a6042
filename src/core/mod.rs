pub mod config;
pub mod error;
pub mod publishers;
pub mod types;
pub mod xml;

pub use error::AppError;
pub use types::*;
