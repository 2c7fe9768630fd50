use thiserror::Error;

/// Returned by [`Stack::pop`](crate::Stack::pop) and
/// [`Stack::peek`](crate::Stack::peek) when there is nothing on the stack.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("stack is empty")]
pub struct EmptyStackError;
