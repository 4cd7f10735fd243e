use crate::error::StackError;
use log::debug;
use std::fmt::{self, Debug};

/// Number of slots on the calculator's stack.
pub const DEFAULT_CAPACITY: usize = 20;

/// Fixed-capacity LIFO stack of `f32` values.
///
/// The backing storage is an inline `[f32; N]`; nothing is ever allocated.
/// Slots at or above `len` hold stale values and are never read.
#[derive(Clone)]
pub struct Stack<const N: usize = DEFAULT_CAPACITY> {
    values: [f32; N],
    len: usize,
}

impl<const N: usize> Stack<N> {
    pub const fn new() -> Self {
        Self {
            values: [0.0; N],
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Fails with `Overflow` if the stack is full, in which case nothing changes.
    pub fn push(&mut self, value: f32) -> Result<(), StackError> {
        if self.is_full() {
            debug!("push({value}) rejected: all {N} slots in use");
            return Err(StackError::Overflow);
        }
        self.values[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Fails with `Underflow` if the stack is empty.
    pub fn pop(&mut self) -> Result<f32, StackError> {
        let value = self.peek()?;
        self.len -= 1;
        Ok(value)
    }

    /// Like `pop`, but leaves the value on the stack.
    pub fn peek(&self) -> Result<f32, StackError> {
        match self.len.checked_sub(1) {
            Some(top) => Ok(self.values[top]),
            None => {
                debug!("read from empty stack");
                Err(StackError::Underflow)
            }
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// The occupied slots, bottom first.
    pub fn as_slice(&self) -> &[f32] {
        &self.values[..self.len]
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f32> + '_ {
        self.as_slice().iter().copied()
    }
}

impl<const N: usize> Default for Stack<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Debug for Stack<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the live part; stale slots are noise.
        f.debug_list().entries(self.iter()).finish()
    }
}
