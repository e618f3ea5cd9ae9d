//! A multi-pattern streaming text-substitution engine built on a
//! precompiled Aho-Corasick automaton.
//!
//! Register a set of `(pattern, replacement)` rules, [`Automaton::compile`]
//! once, then reuse the result across many [`Automaton::replace_alloc`],
//! [`Automaton::replace_with_callback`], and [`Automaton::replace_inplace`]
//! calls. Each invocation is independent, and the automaton itself is never
//! mutated by searching or replacing.
//!
//! ```
//! use keyword_subst::Automaton;
//!
//! let mut ac: Automaton<'_, ()> = Automaton::new(0);
//! ac.register(b"hello", b"hi").unwrap();
//! ac.register(b"world", b"universe").unwrap();
//! ac.compile().unwrap();
//!
//! let out = ac.replace_alloc(b"hello world").unwrap();
//! assert_eq!(out, b"hi universe");
//! ```

mod automaton;
mod callback;
mod error;
mod node;
mod planner;
mod replace;
mod scan;
mod state_id;

pub use automaton::{Automaton, Stats, DEFAULT_CAPACITY};
pub use error::{Error, Result};
pub use scan::{Match, ScanControl};
