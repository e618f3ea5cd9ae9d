use crate::automaton::Automaton;
use crate::error::{Error, Result};
use crate::state_id::StateID;

/// One occurrence found by [`Automaton::scan`].
///
/// `end` is exclusive (`text[start..end]` is the matched slice).
/// [`Match::end_inclusive`] is provided for callers that want the last
/// matched index instead.
#[derive(Clone, Copy)]
pub struct Match<'a, 'p, D> {
    start: usize,
    end: usize,
    pattern: &'p [u8],
    replacement: Option<&'p [u8]>,
    user_data: Option<&'a D>,
}

impl<'a, 'p, D> Match<'a, 'p, D> {
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn end_inclusive(&self) -> usize {
        self.end - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn pattern(&self) -> &'p [u8] {
        self.pattern
    }

    #[inline]
    pub fn replacement(&self) -> Option<&'p [u8]> {
        self.replacement
    }

    #[inline]
    pub fn user_data(&self) -> Option<&'a D> {
        self.user_data
    }
}

/// What a scan callback returns after seeing one match.
pub enum ScanControl {
    Continue,
    Stop,
}

impl<'p, D, S: StateID> Automaton<'p, D, S> {
    /// Step the automaton by one input byte from `state`, following failure
    /// links until a transition is found (or root is reached, which always
    /// has one: falling off the trie).
    #[inline]
    fn next_state(&self, mut state: S, byte: u8) -> S {
        let root = self.root();
        loop {
            if let Some(next) = self.node(state).child(byte) {
                return next;
            }
            if state == root {
                return root;
            }
            state = self.node(state).failure;
        }
    }

    /// Scan `text` for every occurrence of every registered pattern.
    /// `callback` is invoked once per match, in the order the output chain
    /// produces them (deepest terminal first, then its own output
    /// ancestors); returning [`ScanControl::Stop`] ends the scan early, with
    /// the returned count including the stopping match.
    ///
    /// Requires [`Automaton::is_compiled`]; otherwise returns
    /// [`Error::NotCompiled`].
    pub fn scan<F>(&self, text: &[u8], mut callback: F) -> Result<usize>
    where
        F: FnMut(Match<'_, 'p, D>) -> ScanControl,
    {
        if !self.is_compiled() {
            return Err(Error::NotCompiled);
        }

        let root = self.root();
        let mut state = root;
        let mut count = 0usize;

        for (i, &byte) in text.iter().enumerate() {
            state = self.next_state(state, byte);

            // Walk the output chain: `state` itself if terminal, then
            // repeatedly its output link.
            let mut terminal_id = if self.node(state).is_terminal() {
                Some(state)
            } else if self.node(state).has_output() {
                Some(self.node(state).output)
            } else {
                None
            };

            while let Some(id) = terminal_id {
                let node = self.node(id);
                let terminal = node
                    .terminal
                    .as_ref()
                    .expect("output chain only visits terminal nodes");
                let end = i + 1;
                let m = Match {
                    start: end - terminal.pattern.len(),
                    end,
                    pattern: terminal.pattern,
                    replacement: terminal.replacement,
                    user_data: terminal.user_data.as_ref(),
                };
                count += 1;
                match callback(m) {
                    ScanControl::Continue => {}
                    ScanControl::Stop => return Ok(count),
                }

                terminal_id = if node.has_output() {
                    Some(node.output)
                } else {
                    None
                };
            }
        }

        Ok(count)
    }
}
