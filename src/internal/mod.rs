//! Internal implementation details.

mod stack;

pub(crate) use stack::StackGuard;
