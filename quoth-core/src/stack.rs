use crate::errors::*;
use crate::value::Value;

/// A LIFO of runtime values. Depth-indexed operations count the top of the
/// stack as depth 0.
#[derive(Debug, Default)]
pub struct Stack {
    items: Vec<Value>,
}

impl Stack {
    pub fn new() -> Self {
        Stack { items: vec![] }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, val: Value) {
        self.items.push(val);
    }

    pub fn pop(&mut self) -> Result<Value> {
        self.items.pop().ok_or_else(|| ErrorKind::StackUnderflow.into())
    }

    pub fn peek(&self) -> Result<&Value> {
        self.items.last().ok_or_else(|| ErrorKind::StackUnderflow.into())
    }

    /// The element `depth` positions below the top, left in place.
    pub fn at(&self, depth: usize) -> Result<&Value> {
        let ix = self.index_from_top(depth)?;
        Ok(&self.items[ix])
    }

    /// Insert `val` immediately below the element at `depth`.
    pub fn insert_at(&mut self, depth: usize, val: Value) -> Result<()> {
        let ix = self.index_from_top(depth)?;
        self.items.insert(ix, val);
        Ok(())
    }

    /// Remove and return the element at `depth`.
    pub fn remove_at(&mut self, depth: usize) -> Result<Value> {
        let ix = self.index_from_top(depth)?;
        Ok(self.items.remove(ix))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Bottom-to-top view, for rendering and assertions.
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    fn index_from_top(&self, depth: usize) -> Result<usize> {
        if depth >= self.items.len() {
            return Err(ErrorKind::StackUnderflow.into());
        }
        Ok(self.items.len() - 1 - depth)
    }
}
