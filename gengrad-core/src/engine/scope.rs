use super::{next_serial, Engine};
use crate::config::Reclamation;
use crate::error::{GenGradError, Result};
use crate::ops::traits::Scalar;
use crate::store::Generation;

/// Capability to pop one pushed generation.
///
/// Returned by [`Engine::push_scope`] and consumed by [`Engine::pop_scope`].
/// It is neither `Clone` nor `Copy`, so a generation cannot be popped twice.
#[must_use = "a scope that is never popped keeps every node built in it alive"]
#[derive(Debug, PartialEq, Eq)]
pub struct ScopeToken {
    depth: u32,
    serial: u64,
}

impl ScopeToken {
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl<T: Scalar> Engine<T> {
    fn require_scope_stack(&self, operation: &str) -> Result<()> {
        match self.config.reclamation {
            Reclamation::ScopeStack => Ok(()),
            policy => Err(GenGradError::ReclamationDisabled {
                operation: operation.to_string(),
                policy,
            }),
        }
    }

    /// Pushes a fresh, empty generation. New nodes go there until it is popped.
    pub fn push_scope(&mut self) -> Result<ScopeToken> {
        self.require_scope_stack("push_scope")?;
        let depth = u32::try_from(self.generations.len()).map_err(|_| {
            GenGradError::InternalError("generation stack depth overflow".to_string())
        })?;
        let serial = next_serial();
        let generation = Generation::new(serial, depth, self.config.initial_capacity)?;
        self.generations.push(generation);
        log::debug!("Pushed scope at depth {} (serial {})", depth, serial);
        Ok(ScopeToken { depth, serial })
    }

    /// Discards the generation named by `token` together with every
    /// generation pushed after it, and all their nodes.
    ///
    /// Normally the token names the top generation. If inner tokens were
    /// dropped without being popped, their generations sit above it and are
    /// unwound here too. Every handle into a discarded generation becomes
    /// stale; handles into older generations are untouched. A token whose
    /// generation is already gone fails with `ScopeMismatch`.
    pub fn pop_scope(&mut self, token: ScopeToken) -> Result<()> {
        self.require_scope_stack("pop_scope")?;
        if token.depth == 0 {
            return Err(GenGradError::BaseScopePop);
        }
        let top_depth = self.depth();
        let named = self
            .generations
            .get(token.depth as usize)
            .filter(|generation| generation.serial() == token.serial);
        if named.is_none() {
            return Err(GenGradError::ScopeMismatch {
                expected_depth: top_depth,
                actual_depth: token.depth,
            });
        }

        for popped in self.generations.drain(token.depth as usize..).rev() {
            if popped.depth() != token.depth {
                log::warn!(
                    "Unwinding scope at depth {} (serial {}) whose token was dropped, discarding {} live nodes",
                    popped.depth(),
                    popped.serial(),
                    popped.live_count()
                );
            } else {
                log::debug!(
                    "Popped scope at depth {} (serial {}), discarding {} live nodes",
                    popped.depth(),
                    popped.serial(),
                    popped.live_count()
                );
            }
        }
        Ok(())
    }

    /// Runs `body` inside a fresh scope and pops it afterwards, whether or not
    /// `body` succeeded. Scopes the body pushed and never popped are unwound
    /// with it. The body's error takes precedence over a pop error.
    pub fn with_scope<R, E, F>(&mut self, body: F) -> std::result::Result<R, E>
    where
        F: FnOnce(&mut Self) -> std::result::Result<R, E>,
        E: From<GenGradError>,
    {
        let token = self.push_scope()?;
        let outcome = body(self);
        let popped = self.pop_scope(token);
        let value = outcome?;
        popped?;
        Ok(value)
    }
}
