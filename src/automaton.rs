use std::collections::VecDeque;

use tracing::{debug, info, trace, warn};

use crate::error::{Error, Result};
use crate::node::{Node, Terminal};
use crate::state_id::{fail_id, usize_to_state_id, StateID};

/// Recommended arena size when a caller passes `capacity == 0` to
/// [`Automaton::new`]. A few thousand nodes is enough headroom for most
/// pattern sets without wasting much memory on tiny ones.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Node/pattern/byte counters reported by [`Automaton::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub nodes: usize,
    pub patterns: usize,
    pub capacity: usize,
    pub max_pattern_len: usize,
    pub heap_bytes: usize,
}

/// A precompiled multi-pattern matching automaton with per-pattern
/// replacement bindings.
///
/// `'p` is the lifetime of the pattern and replacement byte slices registered
/// with this automaton: they are referenced, never copied, so the host must
/// keep them alive for as long as the automaton is used. `D` is the opaque
/// per-pattern user-data type threaded through to the replacement callback;
/// it is never inspected by the engine. `S` is the state-identifier
/// representation, an index into a flat node arena rather than a pointer;
/// `u32` is the default and is enough for an arena well past what any
/// reasonable pattern set needs, while `u16`/`u8` let memory-tight callers
/// shrink a small automaton further.
pub struct Automaton<'p, D, S: StateID = u32> {
    pub(crate) nodes: Vec<Node<'p, D, S>>,
    capacity: usize,
    compiled: bool,
    pattern_count: usize,
    max_pattern_len: usize,
}

const ROOT: usize = 1;

impl<'p, D, S: StateID> Automaton<'p, D, S> {
    /// Create an empty automaton with room for `capacity` nodes.
    /// `capacity == 0` is translated to [`DEFAULT_CAPACITY`].
    ///
    /// The arena is fixed-size for the automaton's whole lifetime: `register`
    /// past `capacity` fails with [`Error::ArenaFull`] rather than
    /// reallocating.
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };

        let mut nodes = Vec::with_capacity(capacity.min(1 << 20));
        // index 0 is the null sentinel ("fail state"), never addressed by a
        // real transition; index 1 is the root. Keeping the null slot in the
        // arena lets every other id be used as a direct Vec index.
        nodes.push(Node::new(fail_id(), 0));
        nodes.push(Node::new(usize_to_state_id(ROOT).expect("capacity too small"), 0));

        Automaton {
            nodes,
            capacity,
            compiled: false,
            pattern_count: 0,
            max_pattern_len: 0,
        }
    }

    /// Root state id, used as the starting state for every scan.
    #[inline]
    pub(crate) fn root(&self) -> S {
        usize_to_state_id(ROOT).expect("root id always fits")
    }

    #[inline]
    pub(crate) fn node(&self, id: S) -> &Node<'p, D, S> {
        &self.nodes[id.to_usize()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: S) -> &mut Node<'p, D, S> {
        &mut self.nodes[id.to_usize()]
    }

    pub fn is_compiled(&self) -> bool {
        self.compiled
    }

    /// Register a pattern with a static replacement.
    ///
    /// Equivalent to `register_ex(pattern, replacement, None)`. Multiple
    /// registrations of the same pattern overwrite the terminal's binding
    /// (last-writer-wins).
    pub fn register(&mut self, pattern: &'p [u8], replacement: &'p [u8]) -> Result<()> {
        self.register_ex(pattern, Some(replacement), None)
    }

    /// Register a pattern with an optional static replacement and an
    /// optional opaque user-data handle for callback-driven replacement.
    pub fn register_ex(
        &mut self,
        pattern: &'p [u8],
        replacement: Option<&'p [u8]>,
        user_data: Option<D>,
    ) -> Result<()> {
        if pattern.is_empty() {
            warn!("register called with empty pattern");
            return Err(Error::EmptyPattern);
        }

        let mut current = self.root();
        for (depth, &byte) in pattern.iter().enumerate() {
            current = match self.node(current).child(byte) {
                Some(next) => next,
                None => {
                    let next = self.add_node(depth + 1)?;
                    self.node_mut(current).set_child(byte, next);
                    next
                }
            };
        }

        let was_new = !self.node(current).is_terminal();
        self.node_mut(current).terminal = Some(Terminal {
            pattern,
            replacement,
            user_data,
        });

        if was_new {
            self.pattern_count += 1;
        }
        self.max_pattern_len = self.max_pattern_len.max(pattern.len());
        self.compiled = false;

        trace!(
            pattern_len = pattern.len(),
            patterns = self.pattern_count,
            nodes = self.nodes.len(),
            "pattern registered"
        );
        Ok(())
    }

    fn add_node(&mut self, depth: usize) -> Result<S> {
        if self.nodes.len() >= self.capacity {
            warn!(capacity = self.capacity, "automaton arena is full");
            return Err(Error::ArenaFull);
        }
        let id = usize_to_state_id(self.nodes.len()).ok_or(Error::ArenaFull)?;
        self.nodes.push(Node::new(id, depth));
        Ok(id)
    }

    /// Build failure and output links over the registered trie.
    ///
    /// Standard Aho-Corasick BFS: a second call without an intervening
    /// [`Automaton::reset`] is a usage error, returned as
    /// [`Error::AlreadyCompiled`] rather than silently repeated.
    pub fn compile(&mut self) -> Result<()> {
        if self.compiled {
            return Err(Error::AlreadyCompiled);
        }

        let root = self.root();
        let mut queue = VecDeque::new();

        // Level 1: every direct child of the root has failure = root.
        for byte in 0..=255u8 {
            if let Some(child) = self.node(root).child(byte) {
                self.node_mut(child).failure = root;
                queue.push_back(child);
            }
        }

        while let Some(u) = queue.pop_front() {
            for byte in 0..=255u8 {
                let v = match self.node(u).child(byte) {
                    Some(v) => v,
                    None => continue,
                };
                queue.push_back(v);

                // Walk u's failure chain until a node with a transition on
                // `byte` is found; if the chain reaches root without one,
                // fall back to root itself.
                let mut f = self.node(u).failure;
                while f != root && self.node(f).child(byte).is_none() {
                    f = self.node(f).failure;
                }
                let target_fail = self.node(f).child(byte).unwrap_or(root);
                self.node_mut(v).failure = target_fail;

                self.node_mut(v).output = if self.node(target_fail).is_terminal() {
                    target_fail
                } else {
                    self.node(target_fail).output
                };
            }
        }

        self.compiled = true;
        info!(
            nodes = self.nodes.len(),
            patterns = self.pattern_count,
            "automaton compiled"
        );
        Ok(())
    }

    /// Node/pattern/byte counters.
    pub fn stats(&self) -> Stats {
        let heap_bytes = self.nodes.iter().map(Node::heap_bytes).sum::<usize>()
            + self.nodes.len() * std::mem::size_of::<Node<'p, D, S>>();
        Stats {
            nodes: self.nodes.len(),
            patterns: self.pattern_count,
            capacity: self.capacity,
            max_pattern_len: self.max_pattern_len,
            heap_bytes,
        }
    }

    /// Return the automaton to its empty, pre-compile state. Registered
    /// patterns are gone; the arena's fixed capacity is retained.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::new(fail_id(), 0));
        self.nodes
            .push(Node::new(usize_to_state_id(ROOT).expect("capacity too small"), 0));
        self.compiled = false;
        self.pattern_count = 0;
        self.max_pattern_len = 0;
        debug!("automaton reset");
    }
}
