use log::trace;

use crate::error::EmptyStackError;

/// A last-in-first-out container backed by a `Vec`.
///
/// The top of the stack is the end of the vector, so `push`, `pop` and
/// `peek` are all amortized O(1).
#[derive(Clone, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(size: usize) -> Self {
        Self {
            items: Vec::with_capacity(size),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes the most recently pushed item.
    ///
    /// Fails without touching the stack when it is empty.
    pub fn pop(&mut self) -> Result<T, EmptyStackError> {
        let item = self.items.pop().ok_or(EmptyStackError)?;
        trace!("pop: {} left", self.items.len());
        Ok(item)
    }

    /// Returns the most recently pushed item without removing it.
    pub fn peek(&self) -> Result<&T, EmptyStackError> {
        trace!("peek: size {}", self.items.len());
        self.items.last().ok_or(EmptyStackError)
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    /// Bottom to top, i.e. in push order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
