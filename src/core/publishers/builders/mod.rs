//! Subtree builders shared by more than one action handler.

pub mod transport;
pub mod violations;
pub mod xunit;

pub use transport::{build_publish_over, TransportConfig, TransportNodes, TransportSchema};
pub use violations::{build_type_configs, VIOLATION_SYSTEMS};
pub use xunit::{build_thresholds, build_types, threshold_mode, XUNIT_TYPES};
