use parking_lot::Mutex;

use crate::encode::context::EncodeContext;

/// Maximum number of idle contexts retained.
const POOL_CAPACITY: usize = 5;

/// Contexts whose buffer grew beyond this are dropped instead of pooled,
/// so one pathological encode cannot pin memory for future ones.
const BUFFER_REUSE_CAP: usize = 30 * 1024 * 1024;

/// Bounded free-list of reusable encode contexts.
///
/// Amortizes buffer allocation across encode calls. The free-list mutex is
/// the only shared mutable state in the crate; every checked-out context is
/// exclusively owned by one in-flight call.
pub(crate) struct ContextPool {
    contexts: Mutex<Vec<EncodeContext>>,
}

/// Pool backing the public `encode` entry point.
pub(crate) static GLOBAL: ContextPool = ContextPool::new();

impl ContextPool {
    pub const fn new() -> ContextPool {
        ContextPool {
            contexts: Mutex::new(Vec::new()),
        }
    }

    /// Check out a context, creating one when the pool is empty.
    pub fn checkout(&self) -> EncodeContext {
        let context = self.contexts.lock().pop();

        match context {
            Some(context) => {
                tracing::trace!("got context from pool");
                context
            }
            None => {
                tracing::trace!("empty pool, creating context");
                EncodeContext::default()
            }
        }
    }

    /// Return a context, dropping it when the pool is saturated or its
    /// buffer grew beyond the reuse ceiling.
    pub fn release(&self, mut context: EncodeContext) {
        if context.buffer.capacity() > BUFFER_REUSE_CAP {
            tracing::debug!(capacity = context.buffer.capacity(), "dropping oversized context");
            return;
        }

        context.reset();

        let mut contexts = self.contexts.lock();
        if contexts.len() < POOL_CAPACITY {
            tracing::trace!("put context back to pool");
            contexts.push(context);
        } else {
            tracing::trace!("pool saturated, dropping context");
        }
    }
}
