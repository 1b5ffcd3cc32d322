//! Transformer registry
//!
//! Provides [`TransformerRegistry`], mapping recipe transformer names to
//! factories that build a ready-to-use [`Transformer`] from untyped config.

use crate::context::PipelineContext;
use crate::error::{PipelineError, PipelineResult};
use crate::transform::Transformer;
use std::collections::BTreeMap;

/// Factory building a transformer from raw config and the pipeline context
///
/// # Errors
/// Factories return [`PipelineError::Configuration`] when the config is
/// rejected.
pub type TransformerFactory =
    fn(&serde_json::Value, PipelineContext) -> PipelineResult<Box<dyn Transformer>>;

/// Name-keyed transformer factories
#[derive(Debug, Default, Clone)]
pub struct TransformerRegistry {
    factories: BTreeMap<String, TransformerFactory>,
}

impl TransformerRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Register a factory, replacing any earlier one with the same name
    pub fn register(&mut self, name: &str, factory: TransformerFactory) {
        if self.factories.insert(name.to_string(), factory).is_some() {
            tracing::debug!(transformer = name, "Replaced registered transformer factory");
        }
    }

    /// Check if a factory exists
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted
    #[inline]
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Get number of registered factories
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Build a transformer by name
    ///
    /// # Errors
    /// - [`PipelineError::UnknownTransformer`] if no factory is registered
    /// - whatever the factory returns for a rejected config
    pub fn create(
        &self,
        name: &str,
        config: &serde_json::Value,
        ctx: PipelineContext,
    ) -> PipelineResult<Box<dyn Transformer>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| PipelineError::UnknownTransformer(name.to_string()))?;
        factory(config, ctx)
    }
}
