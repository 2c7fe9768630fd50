pub mod brackets;
pub mod error;
pub mod stack;

pub use brackets::{is_balanced, is_balanced_str};
pub use error::EmptyStackError;
pub use stack::Stack;
