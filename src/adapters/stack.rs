use core::fmt;

use crate::error::{Error, Result};
use crate::lists::doubly_linked_list::{DoublyLinkedList, Iter};
use crate::utils::fmt_sequence;

/// LIFO stack on top of a [`DoublyLinkedList`]; the top is the list's tail.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// Creates a stack holding a single element.
    pub fn with_first(first: T) -> Self {
        let mut stack = Self::new();
        stack.push(first);
        stack
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.list.add_last(value);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.list.remove_last().map_err(|_| Error::EmptyStack)
    }

    pub fn peek(&self) -> Result<&T> {
        self.list.get_last().map_err(|_| Error::EmptyStack)
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_sequence(f, self.iter())
    }
}

/// Checks that every `(`, `[` and `{` in `expression` is closed in the right order.
///
/// Characters other than the six brackets are ignored.
///
/// ```
/// use linear_collections::is_balanced;
///
/// assert!(is_balanced("{[()]}"));
/// assert!(!is_balanced("([)]"));
/// ```
pub fn is_balanced(expression: &str) -> bool {
    let mut open = Stack::new();
    for c in expression.chars() {
        match c {
            '(' | '[' | '{' => open.push(c),
            ')' | ']' | '}' => match open.pop() {
                Ok(top) if closes(top, c) => {}
                _ => return false,
            },
            _ => {}
        }
    }
    open.is_empty()
}

#[inline(always)]
fn closes(open: char, close: char) -> bool {
    matches!((open, close), ('(', ')') | ('[', ']') | ('{', '}'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_push_pop_order() {
        let mut stack = Stack::with_first(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Ok(&3));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_stack_empty_errors() {
        let mut stack: Stack<u8> = Stack::new();
        assert_eq!(stack.pop(), Err(Error::EmptyStack));
        assert_eq!(stack.peek(), Err(Error::EmptyStack));
        stack.push(1);
        stack.pop().unwrap();
        assert_eq!(stack.pop(), Err(Error::EmptyStack));
    }

    #[test]
    fn test_stack_iter_bottom_to_top() {
        let mut stack = Stack::new();
        for c in ['a', 'b', 'c'] {
            stack.push(c);
        }
        let seen: String = stack.iter().collect();
        assert_eq!(seen, "abc");
        assert_eq!(stack.to_string(), "[a, b, c]");
        assert_eq!(format!("{stack:?}"), "['a', 'b', 'c']");
        assert_eq!((&stack).into_iter().count(), 3);
    }

    #[test]
    fn test_stack_is_balanced() {
        assert!(is_balanced(""));
        assert!(is_balanced("{[()]}"));
        assert!(is_balanced("fn main() { let v = [1, (2 + 3)]; }"));
        assert!(is_balanced("no brackets at all"));
        assert!(!is_balanced("([)]"));
        assert!(!is_balanced("(("));
        assert!(!is_balanced("())"));
        assert!(!is_balanced("}"));
    }
}
