//! In-code configuration source.
//!
//! Responsibilities:
//! - Let configuration objects be registered in code and retrieved by type,
//!   so a worker can be run against hand-built configuration without any environment.
//!
//! Does NOT handle:
//! - Environment or file based configuration (see `loader`).
//!
//! Invariants:
//! - At most one configuration object is registered per type.
//! - Retrieved configurations are clones; the source itself is never mutated by lookups.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

use crate::loader::ConfigError;

/// Something that hands out configuration objects by type.
pub trait ConfigurationSource {
    /// Retrieve the configuration object of type `T`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigurationNotFound` if no object of that type is available.
    fn get_configuration<T>(&self) -> Result<T, ConfigError>
    where
        T: Any + Clone + Send + Sync;
}

/// A configuration source populated in code.
#[derive(Default)]
pub struct CodeConfigurationSource {
    configurations: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl CodeConfigurationSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration for constructing a source in one expression.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateConfiguration` if `T` is already registered.
    pub fn with<T>(mut self, configuration: T) -> Result<Self, ConfigError>
    where
        T: Any + Send + Sync,
    {
        self.add_configuration(configuration)?;
        Ok(self)
    }

    /// Register a configuration object.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateConfiguration` if `T` is already registered.
    pub fn add_configuration<T>(&mut self, configuration: T) -> Result<&mut Self, ConfigError>
    where
        T: Any + Send + Sync,
    {
        let key = TypeId::of::<T>();
        if self.configurations.contains_key(&key) {
            return Err(ConfigError::DuplicateConfiguration(type_name::<T>()));
        }
        self.configurations.insert(key, Box::new(configuration));
        Ok(self)
    }

    /// Register a configuration object, replacing any existing one of the same type.
    pub fn add_or_replace_configuration<T>(&mut self, configuration: T) -> &mut Self
    where
        T: Any + Send + Sync,
    {
        if self
            .configurations
            .insert(TypeId::of::<T>(), Box::new(configuration))
            .is_some()
        {
            tracing::debug!(config_type = type_name::<T>(), "Replaced configuration");
        }
        self
    }

    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }
}

impl ConfigurationSource for CodeConfigurationSource {
    fn get_configuration<T>(&self) -> Result<T, ConfigError>
    where
        T: Any + Clone + Send + Sync,
    {
        self.configurations
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .cloned()
            .ok_or(ConfigError::ConfigurationNotFound(type_name::<T>()))
    }
}
