//! Callback contract for dynamic (per-invocation) replacement.
//!
//! A C-style contract would pass a function pointer plus an opaque `void*`
//! context and write the replacement through an out-parameter, since a null
//! return with a non-zero length has to be defended against. None of that is
//! representable in idiomatic Rust: a closure bound directly as
//! `FnMut(&[u8], Option<&D>, &C) -> Vec<u8>` cannot return a dangling
//! pointer, so there is no "malformed callback" to guard against. An empty
//! `Vec<u8>` simply means "delete the match," which callers express by
//! returning `Vec::new()`.
//!
//! `replace_with_callback` in [`crate::replace`] takes this closure directly
//! rather than through a named trait: the bound is the entire contract and a
//! wrapper trait would only add an indirection with no behaviour of its own.
