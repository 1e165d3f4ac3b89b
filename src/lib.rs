// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # diffable-hebrew
//!
//! Turns pointed and accented Hebrew text into comma-separated short codes, so
//! that two editions of a text can be compared line by line without combining
//! marks getting in the way.
//!
//! ## Architecture
//!
//! - **Curated tables** (`table`): hand-picked, collision-checked short codes
//! - **Cantillation taxonomy** (`cantillation`): placement and per-system role of each accent
//! - **Resolver** (`resolve`): curated code, else compressed Unicode name, else code point
//! - **Text** (`text`): lines → words → comma-joined tokens, plus a legend
//! - **Atomic writer** (`atomic`): temp file + rename, with backoff on transient locks
//!
//! ## Library usage
//!
//! ```no_run
//! use diffable_hebrew::resolve::Resolver;
//! use diffable_hebrew::table::ShortCodeTable;
//! use diffable_hebrew::text::join_short_names;
//!
//! let table = ShortCodeTable::standard().unwrap();
//! let resolver = Resolver::new(table);
//! assert_eq!(join_short_names(&resolver, "שָׁ", ","), "$,a,·sh");
//! ```

pub mod atomic;
pub mod cantillation;
pub mod chars;
pub mod config;
pub mod error;
pub mod resolve;
pub mod table;
pub mod text;
