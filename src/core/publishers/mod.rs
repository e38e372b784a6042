//! Publisher action registry and XML compiler.
//!
//! A job's `publishers` list is an ordered sequence of [`Action`]s. Each
//! action name resolves to a [`Publisher`] in the [`PublisherRegistry`],
//! which appends one plugin element to the `<publishers>` node.

pub mod action;
pub mod actions;
pub mod builders;
pub mod coerce;
pub mod diagnostics;
pub mod dispatch;
pub mod params;
pub mod registry;
pub mod schema;

pub use action::Action;
pub use diagnostics::{Diagnostic, Diagnostics};
pub use dispatch::{compile_actions, compile_publishers};
pub use registry::{Publisher, PublisherRegistry, PublisherRegistryBuilder, PUBLISHER_NAMESPACE};
pub use schema::{load_jobs, parse_jobs, JobDefinition};
