//! Turns raw scan output into a substitution schedule. Collection and
//! sorting are shared between the two replacement modes; only the sort
//! direction and the overlap filter differ.

use crate::scan::Match;

/// Sort ascending by start and apply leftmost-wins overlap resolution: among
/// matches whose ranges overlap, keep the one with the smallest start, and
/// drop any later-starting match until the cursor has passed its end.
/// `sort_by_key` is a stable sort, so matches tied on `start` keep the order
/// the scanner produced them in.
pub(crate) fn plan_forward<'a, 'p, D>(mut matches: Vec<Match<'a, 'p, D>>) -> Vec<Match<'a, 'p, D>> {
    matches.sort_by_key(Match::start);

    let mut kept = Vec::with_capacity(matches.len());
    let mut cursor = 0usize;
    for m in matches {
        if m.start() >= cursor {
            cursor = m.end();
            kept.push(m);
        }
    }
    kept
}

/// Sort descending by start, for the in-place mode: each substitution only
/// ever affects positions at or after its own start, so applying them
/// right-to-left keeps every not-yet-processed match's indices valid without
/// recomputation. No leftmost-wins pre-filter is applied here; overlap is
/// instead resolved at apply time by the stale-match check in
/// [`crate::replace::replace_inplace`].
pub(crate) fn plan_reverse<'a, 'p, D>(mut matches: Vec<Match<'a, 'p, D>>) -> Vec<Match<'a, 'p, D>> {
    matches.sort_by(|a, b| b.start().cmp(&a.start()));
    matches
}
