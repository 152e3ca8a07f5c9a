#![deny(warnings)]
#![cfg_attr(test, deny(warnings))]

use std::fmt;

pub mod arena;
mod error;
mod node;

pub use arena::{ArenaList, NodeId};
pub use error::ArenaError;
pub use node::{from_values, iter, reverse, Iter, Link, Node};

pub struct List {
    size: usize,
    head: Link,
}

impl List {
    pub fn new() -> List {
        List {
            size: 0,
            head: None,
        }
    }

    pub fn from_values(values: &[i32]) -> List {
        List {
            size: values.len(),
            head: node::from_values(values),
        }
    }

    pub fn push_front(&mut self, value: i32) {
        let n = Node {
            value,
            next: self.head.take(),
        };
        self.head = Some(Box::new(n));
        self.size += 1;
    }

    pub fn pop_front(&mut self) -> Option<i32> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.size -= 1;
            node.value
        })
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        if index >= self.len() {
            return None;
        }
        self.iter().nth(index)
    }

    /// Reverses the list in place. No node is allocated or freed.
    pub fn reverse(&mut self) {
        self.head = node::reverse(self.head.take());
    }

    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    pub fn into_head(self) -> Link {
        self.head
    }

    pub fn iter(&self) -> Iter<'_> {
        node::iter(&self.head)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        if self.size == 0 {
            return true;
        }

        false
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<i32> for List {
    fn from_iter<I: IntoIterator<Item = i32>>(values: I) -> Self {
        let values: Vec<i32> = values.into_iter().collect();
        List::from_values(&values)
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value} ")?;
        }
        Ok(())
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Each value followed by a single space, e.g. `"5 4 3 2 1 "`.
pub fn render<I: IntoIterator<Item = i32>>(values: I) -> String {
    let mut out = String::new();
    for value in values {
        out.push_str(&value.to_string());
        out.push(' ');
    }
    out
}
