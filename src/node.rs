use crate::state_id::{fail_id, StateID};

/// What a terminal node carries for the pattern that ends there.
///
/// `replacement` and `user_data` are independent: a node may have a static
/// replacement, an opaque callback handle, both (the callback is consulted
/// first; the static value is there as a host-chosen fallback), or neither,
/// in which case the pattern is tracked purely so it's reported by `scan`,
/// with nothing for `replace_*` to substitute; callers doing pure detection
/// use this.
pub(crate) struct Terminal<'p, D> {
    pub(crate) pattern: &'p [u8],
    pub(crate) replacement: Option<&'p [u8]>,
    pub(crate) user_data: Option<D>,
}

/// A single trie node in the arena.
///
/// `children` is a dense 256-slot byte table: every node pays for the full
/// table up front so that the next-state lookup is a single array index,
/// never a scan or a hash probe. `failure` and `output`
/// are filled in by [`crate::automaton::Automaton::compile`]; until then
/// `failure` points at the node itself and `output` is the null sentinel,
/// which is harmless because nothing walks them before compilation.
pub(crate) struct Node<'p, D, S: StateID> {
    children: Box<[S; 256]>,
    pub(crate) failure: S,
    pub(crate) output: S,
    pub(crate) depth: usize,
    pub(crate) terminal: Option<Terminal<'p, D>>,
}

impl<'p, D, S: StateID> Node<'p, D, S> {
    pub(crate) fn new(id: S, depth: usize) -> Self {
        Node {
            children: Box::new([fail_id(); 256]),
            failure: id,
            output: fail_id(),
            depth,
            terminal: None,
        }
    }

    #[inline]
    pub(crate) fn child(&self, byte: u8) -> Option<S> {
        let id = self.children[byte as usize];
        if id == fail_id() {
            None
        } else {
            Some(id)
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, byte: u8, id: S) {
        self.children[byte as usize] = id;
    }

    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    #[inline]
    pub(crate) fn has_output(&self) -> bool {
        self.output != fail_id()
    }

    pub(crate) fn heap_bytes(&self) -> usize {
        std::mem::size_of::<S>() * 256
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_node_has_no_children_and_is_not_terminal() {
        let node: Node<'_, (), u32> = Node::new(5u32, 2);
        assert_eq!(node.child(b'x'), None);
        assert!(!node.is_terminal());
        assert!(!node.has_output());
    }

    #[test]
    fn set_child_then_child_round_trips() {
        let mut node: Node<'_, (), u32> = Node::new(5u32, 0);
        node.set_child(b'a', 7u32);
        assert_eq!(node.child(b'a'), Some(7));
        assert_eq!(node.child(b'b'), None);
    }

    #[test]
    fn terminal_marks_node_as_terminal() {
        let mut node: Node<'_, (), u32> = Node::new(5u32, 3);
        node.terminal = Some(Terminal {
            pattern: b"abc",
            replacement: Some(b"xyz"),
            user_data: None,
        });
        assert!(node.is_terminal());
    }
}
