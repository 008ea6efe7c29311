//! Shared collaborators handed to every component.

use std::sync::Arc;

use hwimpact_reference::{ArchetypeProvider, ImpactFactorProvider, ReferenceData};

use crate::completion::CompletionResolver;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};

/// Read-only reference data, providers and configuration.
///
/// Cloning is cheap; every clone points at the same data.
#[derive(Clone)]
pub struct ImpactContext {
    reference: Arc<ReferenceData>,
    archetypes: Arc<dyn ArchetypeProvider>,
    factors: Arc<dyn ImpactFactorProvider>,
    config: Arc<EngineConfig>,
}

impl ImpactContext {
    pub fn new(
        reference: Arc<ReferenceData>,
        archetypes: Arc<dyn ArchetypeProvider>,
        factors: Arc<dyn ImpactFactorProvider>,
    ) -> Self {
        Self {
            reference,
            archetypes,
            factors,
            config: Arc::new(EngineConfig::default()),
        }
    }

    /// Use the process-wide reference data installed at startup.
    pub fn from_installed(
        archetypes: Arc<dyn ArchetypeProvider>,
        factors: Arc<dyn ImpactFactorProvider>,
    ) -> EngineResult<Self> {
        let reference = hwimpact_reference::installed().ok_or_else(|| {
            EngineError::InvalidConfig("no reference data installed".into())
        })?;
        Ok(Self::new(reference, archetypes, factors))
    }

    /// Replace the configuration after validating it.
    pub fn with_config(mut self, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        self.config = Arc::new(config);
        Ok(self)
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn archetypes(&self) -> &dyn ArchetypeProvider {
        self.archetypes.as_ref()
    }

    pub fn factors(&self) -> &dyn ImpactFactorProvider {
        self.factors.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn resolver(&self) -> CompletionResolver<'_> {
        CompletionResolver::new(&self.reference, self.config.matching.min_score)
    }
}

impl std::fmt::Debug for ImpactContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImpactContext")
            .field("ram_rows", &self.reference.ram().len())
            .field("gpu_rows", &self.reference.gpu().len())
            .field("config", &self.config)
            .finish()
    }
}
