//! # array-storage
//!
//! An insertion-ordered key/value collection with array-like ergonomics: a movable cursor,
//! stack/queue mutators, a sort family, and bracket-path reads into nested values.
//!
//! ## Design principles
//!
//! - **Order is the value.**
//!   Entries keep insertion order. Overwriting a key keeps its slot; removing and re-adding a key
//!   moves it to the end.
//! - **Two independent access modes.**
//!   The cursor ([`Collection::reset`], [`Collection::next`], [`Collection::prev`],
//!   [`Collection::end`], [`Collection::current`], [`Collection::key`]) is a single stateful
//!   read position. Stateless enumeration ([`Collection::iter`], `for (k, v) in &c`) never moves
//!   it.
//! - **Misses are not errors.**
//!   Absent keys, a cursor past either end, unmatched searches and dead-end or malformed bracket
//!   paths all return `None`. Only contract violations (an unknown raw sort mode, a non-mapping
//!   snapshot) produce an [`ArrayError`].
//!
//! ## Data model
//!
//! - [`Key`]: integer or text. Text spelling a canonical integer (`"5"`, `"-3"`) is stored as an
//!   integer key, so `"5"` and `5` address the same entry.
//! - [`Value`]: null, bool, int, float, text, list, or an ordered [`Map`]. `==` is identity-level:
//!   same kind and payload, no coercion.
//!
//! ## Cursor states
//!
//! The cursor is one of [`Cursor::BeforeFirst`], [`Cursor::At`], or [`Cursor::AfterLast`].
//! Removing the entry under the cursor moves it before the first entry; inserting or removing
//! elsewhere keeps it on the same entry; clearing and sorting move it before the first entry.
//!
//! ## Bracket paths
//!
//! [`Collection::fetch`] reads nested values with paths like `"Parent[Child][0]"`. Parsing is
//! exposed separately as [`PathSpec::parse`].
//!
//! ## Feature flags
//!
//! - `serde` *(default)*: `Serialize`/`Deserialize` for [`Collection`], [`Value`] and [`Key`].
//! - `shuffle` *(default)*: [`Collection::shuffle`] and [`Collection::shuffle_with`] via `rand`.
//! - `tracing` *(default)*: debug events for path misses and usage errors, trace events for
//!   cursor re-anchoring.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

#[macro_use]
mod trace;

mod collection;
mod cursor;
mod error;
mod key;
mod macros;
mod natural;
mod path;
#[cfg(feature = "serde")]
mod serde_impl;
mod sort;
mod value;

pub use crate::collection::{Collection, IntoIter, Iter, Keys, Values};
pub use crate::cursor::Cursor;
pub use crate::error::{ArrayError, ErrorCode};
pub use crate::key::Key;
pub use crate::natural::natural_cmp;
pub use crate::path::PathSpec;
pub use crate::sort::{IntoSortFlags, SortFlags, SortMode};
pub use crate::value::{Map, Value, ValueKind};
