/// A LIFO buffer with an optional size ceiling.
///
/// Storage grows on demand. When a ceiling is configured, a push that would
/// make the stack longer than the ceiling fails with [`Overflow`] and leaves
/// the stack untouched. The converter also uses this type for its append-only
/// output sequence, reading the result back with [`BoundedStack::into_vec`].
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    limit: Option<usize>,
    name:  &'static str,
}

/// Raised when a push would exceed the ceiling of a [`BoundedStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow {
    /// Name of the buffer that overflowed.
    pub buffer: &'static str,
    /// The configured ceiling.
    pub limit:  usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack.
    ///
    /// # Parameters
    /// - `name`: Used in diagnostics when the stack overflows.
    /// - `limit`: Maximum number of entries, or `None` for no ceiling.
    #[must_use]
    pub const fn new(name: &'static str, limit: Option<usize>) -> Self {
        Self { items: Vec::new(),
               limit,
               name }
    }

    /// Pushes an item on top of the stack.
    ///
    /// # Errors
    /// Returns [`Overflow`] if the stack is already at its ceiling.
    pub fn push(&mut self, item: T) -> Result<(), Overflow> {
        if let Some(limit) = self.limit
           && self.items.len() >= limit
        {
            return Err(Overflow { buffer: self.name,
                                  limit });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the top item, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of items currently on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the stack, returning its items bottom first.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}
