//! Circular dependency detection infrastructure.

use std::cell::RefCell;

use crate::error::{DiError, DiResult};
use crate::key::Key;

const MAX_DEPTH: usize = 1024;

// Thread-local resolution stack for circular dependency detection.
// Resolution is call-stack-bound, so the in-resolution set is per thread.
thread_local! {
    static RESOLUTION_TLS: RefCell<Vec<Key>> = RefCell::new(Vec::new());
}

/// Guard for managing the thread-local resolution stack.
///
/// Entering with a key already on the stack fails with
/// [`DiError::Circular`] carrying the full dependency path. Keys are
/// compared as keys, not as display strings, so a name key spelling out a
/// type's path never collides with the type key itself. The guard pops
/// its frame on drop, including during error propagation.
#[derive(Debug)]
pub(crate) struct StackGuard {
    key: Key,
}

impl StackGuard {
    pub(crate) fn enter(key: &Key) -> DiResult<Self> {
        RESOLUTION_TLS.with(|tls| {
            let mut stack = tls.borrow_mut();

            // Circular detection BEFORE pushing the new key
            if stack.iter().any(|k| k == key) {
                let mut path: Vec<&'static str> =
                    stack.iter().map(Key::display_name).collect();
                path.push(key.display_name());
                return Err(DiError::Circular(path));
            }

            // Depth guard
            if stack.len() >= MAX_DEPTH {
                return Err(DiError::DepthExceeded(stack.len()));
            }

            stack.push(key.clone());
            Ok(())
        })?;

        Ok(Self { key: key.clone() })
    }
}

impl Drop for StackGuard {
    fn drop(&mut self) {
        RESOLUTION_TLS.with(|tls| {
            let last = tls.borrow_mut().pop();
            debug_assert_eq!(last.as_ref(), Some(&self.key));
        });
    }
}
