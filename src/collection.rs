use core::mem;

use indexmap::IndexMap;

use crate::cursor::Cursor;
use crate::key::Key;
use crate::value::{Map, Value};
use crate::{ArrayError, ErrorCode};

/// Borrowing iterator over `(key, value)` pairs in collection order.
pub type Iter<'a> = indexmap::map::Iter<'a, Key, Value>;
/// Borrowing iterator over keys in collection order.
pub type Keys<'a> = indexmap::map::Keys<'a, Key, Value>;
/// Borrowing iterator over values in collection order.
pub type Values<'a> = indexmap::map::Values<'a, Key, Value>;
/// Owning iterator over `(key, value)` pairs in collection order.
pub type IntoIter = indexmap::map::IntoIter<Key, Value>;

/// An insertion-ordered key/value collection with a movable cursor.
///
/// Two independent access modes exist over the same entries:
///
/// - the **cursor** ([`reset`](Self::reset), [`next`](Self::next), [`prev`](Self::prev),
///   [`end`](Self::end), [`current`](Self::current), [`key`](Self::key)), a single stateful
///   read position that survives mutation, and
/// - **stateless enumeration** ([`iter`](Self::iter), `for (k, v) in &collection`), which
///   borrows the entries and never moves the cursor.
///
/// Soft misses are reported as `None`; nothing here fails because a key is absent.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub(crate) entries: Map,
    pub(crate) cursor: Cursor,
    // One past the largest integer key; `i64::MAX + 1` once the key space is used up.
    next_index: i128,
}

impl Collection {
    /// Construct an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty collection with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Insert or overwrite `key`.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        let key = key.into();
        self.note_key(&key);
        self.entries.insert(key, value.into());
    }

    /// Return the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Return the value stored under `key`, or `default` when absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: impl Into<Key>, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Return mutable access to the value stored under `key`.
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.entries.get_mut(&key.into())
    }

    /// Returns `true` iff `key` is present.
    #[must_use]
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Remove `key`, returning its value. Absent keys are a no-op.
    ///
    /// Entries after the removed one keep their relative order. A cursor resting on the removed
    /// entry falls back to before-first.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        let key = key.into();
        let (index, _, value) = self.entries.shift_remove_full(&key)?;
        self.reanchor_after_remove(index);
        Some(value)
    }

    /// Remove every entry and reset the cursor and the auto-increment key.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = Cursor::BeforeFirst;
        self.next_index = 0;
    }

    /// [`set`](Self::set) every pair of `items`, in iteration order.
    pub fn replace<I, K, V>(&mut self, items: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        for (key, value) in items {
            self.set(key, value);
        }
    }

    /// Return an owned snapshot of all entries in order.
    #[must_use]
    pub fn all(&self) -> Map {
        self.entries.clone()
    }

    /// Borrow the entries without copying.
    #[inline]
    #[must_use]
    pub const fn as_map(&self) -> &Map {
        &self.entries
    }

    /// Consume the collection, returning its entries.
    #[must_use]
    pub fn into_map(self) -> Map {
        self.entries
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` iff the collection holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, value)` pairs without touching the cursor.
    pub fn iter(&self) -> Iter<'_> {
        self.entries.iter()
    }

    /// Iterate keys in order.
    pub fn keys(&self) -> Keys<'_> {
        self.entries.keys()
    }

    /// Iterate values in order.
    pub fn values(&self) -> Values<'_> {
        self.entries.values()
    }

    // Cursor

    /// Current cursor state.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Move the cursor to the first entry and return its value.
    pub fn reset(&mut self) -> Option<&Value> {
        self.cursor = Cursor::first(self.len());
        self.current()
    }

    /// Alias of [`reset`](Self::reset).
    pub fn first(&mut self) -> Option<&Value> {
        self.reset()
    }

    /// Move the cursor to the last entry and return its value.
    pub fn end(&mut self) -> Option<&Value> {
        self.cursor = Cursor::last(self.len());
        self.current()
    }

    /// Alias of [`end`](Self::end).
    pub fn last(&mut self) -> Option<&Value> {
        self.end()
    }

    /// Key under the cursor.
    #[must_use]
    pub fn key(&self) -> Option<&Key> {
        let index = self.cursor.index()?;
        self.entries.get_index(index).map(|(k, _)| k)
    }

    /// Value under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Value> {
        let index = self.cursor.index()?;
        self.entries.get_index(index).map(|(_, v)| v)
    }

    /// Advance the cursor one position and return the new current value.
    ///
    /// From before-first this lands on the first entry. Past the last entry the cursor stays
    /// after-last and every further call returns `None`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&Value> {
        self.cursor = self.cursor.advance(self.len());
        self.current()
    }

    /// Retreat the cursor one position and return the new current value.
    pub fn prev(&mut self) -> Option<&Value> {
        self.cursor = self.cursor.retreat(self.len());
        self.current()
    }

    // Stack / queue

    /// Store `value` under a fresh auto-increment key and return the new count.
    ///
    /// This is list-style append; use [`push`](Self::push) to append under a chosen key.
    ///
    /// # Errors
    ///
    /// Returns `KeySpaceExhausted` when `i64::MAX` is already used as a key; nothing is stored.
    pub fn append(&mut self, value: impl Into<Value>) -> Result<usize, ArrayError> {
        self.increment(value)?;
        Ok(self.len())
    }

    /// Store `value` under a fresh auto-increment key and return that key.
    ///
    /// # Errors
    ///
    /// Returns `KeySpaceExhausted` when `i64::MAX` is already used as a key; nothing is stored.
    pub fn increment(&mut self, value: impl Into<Value>) -> Result<Key, ArrayError> {
        let Ok(index) = i64::try_from(self.next_index) else {
            debug_event!("auto-increment key space exhausted");
            return Err(ArrayError::usage(ErrorCode::KeySpaceExhausted));
        };
        let key = Key::Int(index);
        self.set(key.clone(), value);
        Ok(key)
    }

    /// Remove any entry under `key`, then insert `(key, value)` at the end. Returns `key`.
    pub fn push(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Key {
        let key = key.into();
        self.remove(key.clone());
        self.set(key.clone(), value);
        key
    }

    /// Insert `value` at the front and renumber integer keys from `0`.
    ///
    /// Text keys are kept. Returns the new count.
    pub fn prepend(&mut self, value: impl Into<Value>) -> usize {
        let old = mem::take(&mut self.entries);
        self.renumber(Some(value.into()), old);
        self.cursor = self.cursor.on_insert(0);
        self.len()
    }

    /// Remove any entry under `key`, then insert `(key, value)` at the front. Returns `key`.
    ///
    /// Unlike [`prepend`](Self::prepend), no keys are renumbered.
    pub fn unshift(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Key {
        let key = key.into();
        self.remove(key.clone());
        self.note_key(&key);
        self.entries.shift_insert(0, key.clone(), value.into());
        self.cursor = self.cursor.on_insert(0);
        key
    }

    /// Remove and return the last value.
    pub fn pop(&mut self) -> Option<Value> {
        let (key, value) = self.entries.pop()?;
        self.reanchor_after_remove(self.entries.len());
        if key.as_int().map(i128::from) == Some(self.next_index - 1) && self.next_index > 0 {
            self.next_index -= 1;
        }
        Some(value)
    }

    /// Remove and return the first value, then renumber integer keys from `0`.
    pub fn shift(&mut self) -> Option<Value> {
        let (_, value) = self.entries.shift_remove_index(0)?;
        self.reanchor_after_remove(0);
        let rest = mem::take(&mut self.entries);
        self.renumber(None, rest);
        Some(value)
    }

    // Queries

    /// Entries whose value is identical to `needle`, in order.
    #[must_use]
    pub fn filter(&self, needle: &Value) -> Map {
        self.filter_by(|_, value| value == needle)
    }

    /// Entries for which `predicate` holds, in order.
    pub fn filter_by<F>(&self, mut predicate: F) -> Map
    where
        F: FnMut(&Key, &Value) -> bool,
    {
        self.entries
            .iter()
            .filter(|(k, v)| predicate(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns `true` iff some value is identical to `needle`.
    #[must_use]
    pub fn contain(&self, needle: &Value) -> bool {
        self.entries.values().any(|v| v == needle)
    }

    /// Key of the first value identical to `needle`.
    #[must_use]
    pub fn index_of(&self, needle: &Value) -> Option<Key> {
        self.entries
            .iter()
            .find(|(_, v)| *v == needle)
            .map(|(k, _)| k.clone())
    }

    // Internal bookkeeping

    fn note_key(&mut self, key: &Key) {
        if let Key::Int(i) = *key {
            let after = i128::from(i) + 1;
            if after > self.next_index {
                self.next_index = after;
            }
        }
    }

    fn reanchor_after_remove(&mut self, index: usize) {
        let before = self.cursor;
        self.cursor = before.on_remove(index);
        if before.index() == Some(index) {
            trace_event!(index, "cursor entry removed, cursor moved before first");
        }
    }

    /// Rebuild entries from `head` followed by `rest`, numbering integer keys from `0`.
    fn renumber(&mut self, head: Option<Value>, rest: Map) {
        let mut entries = IndexMap::with_capacity(rest.len() + usize::from(head.is_some()));
        let mut next = 0_i64;
        if let Some(value) = head {
            entries.insert(Key::Int(next), value);
            next += 1;
        }
        for (key, value) in rest {
            match key {
                Key::Int(_) => {
                    entries.insert(Key::Int(next), value);
                    next += 1;
                }
                Key::Text(_) => {
                    entries.insert(key, value);
                }
            }
        }
        self.entries = entries;
        self.next_index = i128::from(next);
    }

    /// Replace all entries with `values` under keys `0..`, cursor before first.
    pub(crate) fn reindex_from(&mut self, values: Vec<Value>) {
        self.entries = (0_i64..).map(Key::Int).zip(values).collect();
        self.next_index = i128::try_from(self.entries.len()).unwrap_or(i128::MAX);
        self.cursor = Cursor::BeforeFirst;
    }
}

/// Collections are equal when they hold the same pairs in the same order.
///
/// The cursor is not part of a collection's value.
impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .zip(other.entries.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl From<Map> for Collection {
    fn from(entries: Map) -> Self {
        let mut out = Self::with_capacity(entries.len());
        out.replace(entries);
        out
    }
}

impl From<Collection> for Value {
    fn from(value: Collection) -> Self {
        Self::Map(value.entries)
    }
}

/// A map becomes a collection as-is; a list becomes a collection keyed `0..`.
impl TryFrom<Value> for Collection {
    type Error = ArrayError;

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(map) => Ok(Self::from(map)),
            Value::List(items) => Ok(items.into_iter().collect()),
            other => {
                debug_event!(kind = ?other.kind(), "rejected non-mapping collection input");
                Err(ArrayError::usage(ErrorCode::NotAMapping))
            }
        }
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Collection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        out.replace(iter);
        out
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut out = Self::new();
        out.reindex_from(iter.into_iter().collect());
        out
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Collection {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.replace(iter);
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
