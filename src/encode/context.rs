use std::collections::HashSet;

use crate::encode::buffer::OutputBuffer;
use crate::error::{EncodeError, EncodeResult};

/// Recursion depth at which container identity tracking switches on.
pub(crate) const CYCLE_CHECK_THRESHOLD: usize = 1000;

/// Per-call encoding state: one output buffer plus cycle bookkeeping.
///
/// A context is exclusively owned by a single encode call; it is never
/// shared. Between calls it lives in the [`ContextPool`](crate::encode::pool::ContextPool).
#[derive(Debug, Default)]
pub(crate) struct EncodeContext {
    pub buffer: OutputBuffer,
    /// Identity keys of the containers on the active recursion path.
    seen: HashSet<usize>,
    depth: usize,
}

impl EncodeContext {
    /// Run a container encoder under the cycle/depth guard.
    ///
    /// Depth is counted for every container, but identities are only
    /// recorded once depth reaches [`CYCLE_CHECK_THRESHOLD`]: a cycle cannot
    /// trigger without first driving the traversal at least that deep, so
    /// the set bookkeeping is skipped where it could never fire. A true
    /// cycle whose traversal stays below the threshold is therefore not
    /// detected and recurses until the native stack is exhausted; this is a
    /// known, documented gap rather than a hard depth cap.
    ///
    /// `seen` and `depth` are unwound on every exit path, so the context
    /// stays reusable after an error.
    pub fn enter_container<F>(&mut self, id: usize, encoder: F) -> EncodeResult<()>
    where
        F: FnOnce(&mut EncodeContext) -> EncodeResult<()>,
    {
        self.depth += 1;
        let track = self.depth >= CYCLE_CHECK_THRESHOLD;

        if track && !self.seen.insert(id) {
            tracing::trace!(depth = self.depth, "circular reference found");
            self.depth -= 1;
            return Err(EncodeError::CircularReference);
        }

        let result = encoder(self);

        if track {
            self.seen.remove(&id);
        }
        self.depth -= 1;

        result
    }

    /// Prepare the context for reuse, retaining buffer capacity.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.seen.clear();
        self.depth = 0;
    }
}
