#![allow(clippy::result_large_err)] // Publisher trait and registry return AppError directly for structured diagnostics without boxing.

use crate::core::error::AppError;
use crate::core::publishers::actions;
use crate::core::publishers::Diagnostics;
use crate::core::xml::XmlElement;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Namespace searched when resolving publisher action names.
pub const PUBLISHER_NAMESPACE: &str = "publishers";

/// Trait implemented by every post-build action handler.
pub trait Publisher: Send + Sync + 'static {
    /// Action name used in job definitions.
    fn name(&self) -> &'static str;

    /// Append this action's plugin element to `parent`.
    ///
    /// Implementations must only touch `parent` and `diagnostics`.
    fn compile(
        &self,
        parent: &mut XmlElement,
        config: &Value,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), AppError>;
}

/// Builder used to register publishers before compilation.
pub struct PublisherRegistryBuilder {
    publishers: HashMap<String, Arc<dyn Publisher>>,
}

impl Default for PublisherRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PublisherRegistryBuilder {
    pub fn new() -> Self {
        Self {
            publishers: HashMap::new(),
        }
    }

    pub fn register<T: Publisher>(&mut self, publisher: T) -> &mut Self {
        let name = publisher.name();
        if self.publishers.contains_key(name) {
            panic!("duplicate publisher registered: {}", name);
        }
        self.publishers.insert(name.to_string(), Arc::new(publisher));
        self
    }

    pub fn build(self) -> PublisherRegistry {
        PublisherRegistry {
            inner: Arc::new(self.publishers),
        }
    }
}

/// Immutable name to handler table.
#[derive(Clone)]
pub struct PublisherRegistry {
    inner: Arc<HashMap<String, Arc<dyn Publisher>>>,
}

impl Default for PublisherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<PublisherRegistry> = OnceLock::new();

impl PublisherRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        PublisherRegistryBuilder::new().build()
    }

    pub fn builder() -> PublisherRegistryBuilder {
        PublisherRegistryBuilder::new()
    }

    /// Registry holding every built-in action, built on first use.
    pub fn global() -> &'static PublisherRegistry {
        GLOBAL.get_or_init(|| {
            let mut builder = PublisherRegistryBuilder::new();
            actions::register_builtins(&mut builder);
            builder.build()
        })
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Publisher>> {
        self.inner.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.inner.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
