//! Turns a planned schedule of matches into output bytes, in two modes that
//! share collection and planning but diverge in schedule direction and
//! selection strictness.

use crate::automaton::Automaton;
use crate::error::Result;
use crate::planner::{plan_forward, plan_reverse};
use crate::scan::{Match, ScanControl};
use crate::state_id::StateID;

impl<'p, D, S: StateID> Automaton<'p, D, S> {
    fn collect_matches(&self, text: &[u8]) -> Result<Vec<Match<'_, 'p, D>>> {
        let mut matches = Vec::with_capacity(16);
        self.scan(text, |m| {
            matches.push(m);
            ScanControl::Continue
        })?;
        Ok(matches)
    }

    /// Splice each kept match's static replacement into a freshly allocated
    /// copy of `text`.
    ///
    /// A match with no static replacement bound to its terminal node is
    /// deleted (replaced with nothing), the same as a callback returning a
    /// zero-length replacement in [`Automaton::replace_with_callback`].
    pub fn replace_alloc(&self, text: &[u8]) -> Result<Vec<u8>> {
        let matches = self.collect_matches(text)?;
        if matches.is_empty() {
            return Ok(text.to_vec());
        }
        let kept = plan_forward(matches);
        let replacements: Vec<&[u8]> = kept.iter().map(|m| m.replacement().unwrap_or(&[])).collect();
        Ok(materialize(text, &kept, &replacements))
    }

    /// Like [`Automaton::replace_alloc`], but every kept match's replacement
    /// is produced by `callback(pattern, user_data, context)` instead of the
    /// node's static binding (callbacks may still consult
    /// [`Match::replacement`] themselves if they want to fall back to it).
    ///
    /// The callback is invoked exactly once per *kept* match, not once per
    /// collected match; see DESIGN.md for the rationale. Returning an empty
    /// `Vec<u8>` deletes the match.
    pub fn replace_with_callback<C, F>(&self, text: &[u8], context: &C, mut callback: F) -> Result<Vec<u8>>
    where
        F: FnMut(&[u8], Option<&D>, &C) -> Vec<u8>,
    {
        let matches = self.collect_matches(text)?;
        if matches.is_empty() {
            return Ok(text.to_vec());
        }
        let kept = plan_forward(matches);
        let replacements: Vec<Vec<u8>> = kept
            .iter()
            .map(|m| callback(m.pattern(), m.user_data(), context))
            .collect();
        Ok(materialize(text, &kept, &replacements))
    }

    /// Rewrite `buffer[..current_len]` in place, without the result ever
    /// exceeding `capacity` bytes. Uses only static replacements; there is no
    /// callback variant, since dynamic replacement lengths would make a
    /// single-buffer schedule unsafe under a capacity bound.
    ///
    /// Matches are applied in descending-start order without a leftmost-wins
    /// pre-filter; a match whose end has fallen past the buffer's current
    /// length after an earlier (rightward) substitution shrank it is treated
    /// as stale and skipped, which is how overlap is actually resolved here.
    /// A match that would grow the buffer past `capacity` is likewise
    /// skipped, preserving the capacity bound rather than erroring.
    ///
    /// Returns `(new_len, applied)`. `buffer.len()` must be at least
    /// `capacity`.
    pub fn replace_inplace(
        &self,
        buffer: &mut [u8],
        current_len: usize,
        capacity: usize,
    ) -> Result<(usize, usize)> {
        debug_assert!(
            buffer.len() >= capacity && capacity >= current_len,
            "buffer must be at least `capacity` bytes long, and `capacity` at least `current_len`"
        );

        // Match holds only byte offsets and references into the automaton's
        // own pattern/replacement storage, never into `text` itself, so this
        // borrow of `buffer` ends before we start mutating it below.
        let matches = self.collect_matches(&buffer[..current_len])?;

        if matches.is_empty() {
            return Ok((current_len, 0));
        }

        let kept = plan_reverse(matches);
        let mut len = current_len;
        let mut applied = 0usize;

        for m in kept {
            if m.end() > len {
                continue; // stale: an earlier (rightward) edit shrank the buffer past this match
            }
            let replacement = m.replacement().unwrap_or(&[]);
            let new_len = len - m.len() + replacement.len();
            if new_len > capacity {
                continue;
            }

            let tail_start = m.end();
            let tail_len = len - tail_start;
            let dest = m.start() + replacement.len();
            buffer.copy_within(tail_start..tail_start + tail_len, dest);
            buffer[m.start()..m.start() + replacement.len()].copy_from_slice(replacement);

            len = new_len;
            applied += 1;
        }

        Ok((len, applied))
    }
}

/// Shared materialisation step for both allocating-mode variants: copy the
/// unmatched spans verbatim and splice in each kept match's resolved
/// replacement, left to right.
fn materialize<'a, 'p, D, R: AsRef<[u8]>>(text: &[u8], kept: &[Match<'a, 'p, D>], replacements: &[R]) -> Vec<u8> {
    debug_assert_eq!(kept.len(), replacements.len());

    let match_len: usize = kept.iter().map(Match::len).sum();
    let repl_len: usize = replacements.iter().map(|r| r.as_ref().len()).sum();
    let mut out = Vec::with_capacity(text.len() - match_len + repl_len);

    let mut cursor = 0usize;
    for (m, r) in kept.iter().zip(replacements) {
        out.extend_from_slice(&text[cursor..m.start()]);
        out.extend_from_slice(r.as_ref());
        cursor = m.end();
    }
    out.extend_from_slice(&text[cursor..]);
    out
}
