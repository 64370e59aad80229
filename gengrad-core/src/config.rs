use crate::error::{GenGradError, Result};

/// Node capacity of a freshly pushed generation.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// The reclamation discipline an engine commits to at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reclamation {
    /// Whole generations are discarded with `pop_scope`.
    #[default]
    ScopeStack,
    /// A single generation whose sub-graphs are returned to the free-list
    /// with `free_subgraph`.
    SubgraphFree,
}

/// Construction-time settings for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Slots allocated up front by every new generation.
    pub initial_capacity: usize,
    pub reclamation: Reclamation,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            reclamation: Reclamation::default(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_reclamation(mut self, reclamation: Reclamation) -> Self {
        self.reclamation = reclamation;
        self
    }

    /// Checks the settings before an engine is built from them.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(GenGradError::InvalidConfig(
                "initial_capacity must be at least 1".to_string(),
            ));
        }
        if u32::try_from(self.initial_capacity).is_err() {
            return Err(GenGradError::InvalidConfig(format!(
                "initial_capacity {} does not fit a 32-bit slot index",
                self.initial_capacity
            )));
        }
        Ok(())
    }
}
