/// Last-in first-out working storage for hull construction.
///
/// Both algorithms keep their partial hull on a stack and read the finished
/// hull out of it from the bottom up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
  items: Vec<T>,
}

impl<T> Stack<T> {
  pub fn new() -> Stack<T> {
    Stack { items: Vec::new() }
  }

  pub fn with_capacity(capacity: usize) -> Stack<T> {
    Stack {
      items: Vec::with_capacity(capacity),
    }
  }

  pub fn push(&mut self, item: T) {
    self.items.push(item)
  }

  pub fn pop(&mut self) -> Option<T> {
    self.items.pop()
  }

  pub fn peek(&self) -> Option<&T> {
    self.items.last()
  }

  /// The element just below the top.
  pub fn peek_second(&self) -> Option<&T> {
    self.items.len().checked_sub(2).map(|idx| &self.items[idx])
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Iterate from the bottom of the stack to the top.
  pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
    self.items.iter()
  }

  /// Consume the stack, returning its elements bottom first.
  pub fn into_vec(self) -> Vec<T> {
    self.items
  }
}

impl<T> Default for Stack<T> {
  fn default() -> Stack<T> {
    Stack::new()
  }
}

impl<T> std::iter::FromIterator<T> for Stack<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Stack<T> {
    Stack {
      items: iter.into_iter().collect(),
    }
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  #[test]
  fn lifo() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.peek(), None);
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.peek(), Some(&3));
    assert_eq!(stack.peek_second(), Some(&2));
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.peek_second(), None);
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
  }

  #[test]
  fn bottom_up() {
    let stack: Stack<char> = "abc".chars().collect();
    assert_eq!(stack.peek(), Some(&'c'));
    assert_eq!(stack.iter().collect::<String>(), "abc");
    assert_eq!(stack.into_vec(), vec!['a', 'b', 'c']);
  }
}
