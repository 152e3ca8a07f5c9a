/// Owned successor link. `None` marks the end of a chain and doubles as the
/// empty-list head.
pub type Link = Option<Box<Node>>;

#[derive(Debug, PartialEq, Eq)]
pub struct Node {
    pub value: i32,
    pub next: Link,
}

impl Node {
    pub fn new(value: i32) -> Node {
        Node { value, next: None }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { next: Some(self) }
    }
}

// Unlink iteratively, otherwise a long chain recurses once per node.
impl Drop for Node {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Builds a chain whose traversal order matches `values`.
pub fn from_values(values: &[i32]) -> Link {
    let mut head = None;

    for &value in values.iter().rev() {
        head = Some(Box::new(Node { value, next: head }));
    }
    head
}

/// Reverses the chain starting at `head` by rewriting each node's `next`
/// link, and returns the new head.
///
/// Nodes are moved between links, never allocated or freed, so the box that
/// was passed in as `head` ends up as the tail of the returned chain. An empty
/// chain comes back as `None`.
pub fn reverse(head: Link) -> Link {
    let mut previous = None;
    let mut current = head;

    while let Some(mut node) = current {
        let next_node = node.next.take();
        node.next = previous;
        previous = Some(node);
        current = next_node;
    }

    previous
}

/// Lazily walks a chain from `head`, yielding values in link order.
pub fn iter(head: &Link) -> Iter<'_> {
    Iter {
        next: head.as_deref(),
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addresses(head: &Link) -> Vec<*const Node> {
        let mut out = Vec::new();
        let mut current = head.as_deref();
        while let Some(node) = current {
            out.push(node as *const Node);
            current = node.next.as_deref();
        }
        out
    }

    #[test]
    fn builds_in_order() {
        let head = from_values(&[1, 2, 3]);
        assert_eq!(iter(&head).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn reverses_five_nodes() {
        let head = reverse(from_values(&[1, 2, 3, 4, 5]));
        assert_eq!(iter(&head).collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn empty_stays_empty() {
        assert!(reverse(None).is_none());
        assert_eq!(iter(&None).count(), 0);
    }

    #[test]
    fn single_node_is_returned_as_is() {
        let head = from_values(&[7]);
        let before = addresses(&head);

        let head = reverse(head);

        assert_eq!(addresses(&head), before);
        assert_eq!(head, Some(Box::new(Node::new(7))));
    }

    #[test]
    fn nodes_are_relinked_not_reallocated() {
        let head = from_values(&[1, 2, 3, 4, 5]);
        let mut before = addresses(&head);

        let head = reverse(head);

        before.reverse();
        assert_eq!(addresses(&head), before);
    }

    #[test]
    fn old_head_becomes_tail() {
        let head = from_values(&[1, 2, 3]);
        let old_head = addresses(&head)[0];

        let head = reverse(head);

        let tail = addresses(&head).last().copied();
        assert_eq!(tail, Some(old_head));

        let mut node = head.as_deref();
        while let Some(n) = node.and_then(|n| n.next.as_deref()) {
            node = Some(n);
        }
        assert!(node.map_or(false, |n| n.next.is_none() && n.value == 1));
    }

    #[test]
    fn node_iter_starts_at_itself() {
        let head = from_values(&[4, 5]);
        let values: Vec<i32> = head.as_deref().map(|n| n.iter().collect()).unwrap_or_default();
        assert_eq!(values, vec![4, 5]);
    }

    #[test]
    fn dropping_a_long_chain_does_not_overflow() {
        let values: Vec<i32> = (0..1_000_000).collect();
        let head = reverse(from_values(&values));
        assert_eq!(iter(&head).next(), Some(999_999));
        drop(head);
    }
}
