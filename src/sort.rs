//! Sort family for [`Collection`].
//!
//! Every sort is stable and leaves the cursor before the first entry. Value sorts come in two
//! flavors:
//!
//! - positional ([`Collection::sort`], [`Collection::rsort`], [`Collection::usort`]): original
//!   keys are dropped and values are re-keyed `0..`;
//! - associative ([`Collection::asort`], [`Collection::arsort`], [`Collection::uasort`],
//!   [`Collection::nat_sort`], [`Collection::nat_case_sort`]): each key travels with its value.
//!
//! Key sorts ([`Collection::ksort`], [`Collection::krsort`], [`Collection::uksort`]) are always
//! associative.

use core::cmp::Ordering;

use crate::collection::Collection;
use crate::cursor::Cursor;
use crate::key::Key;
use crate::natural::natural_cmp;
use crate::value::Value;
use crate::{ArrayError, ErrorCode};

/// Comparison mode for the flag-driven sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Loose comparison inside a type rank (`null < bool < number < text < list < map`):
    /// numbers and numeric text compare by exact value, other text bytewise, containers by
    /// size then contents.
    #[default]
    Regular,
    /// Both sides converted to numbers and compared exactly.
    Numeric,
    /// Both sides converted to text and compared bytewise.
    String,
    /// Both sides converted to text and compared in natural order.
    Natural,
}

/// A validated comparison mode plus the case-folding switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortFlags {
    /// The comparison mode.
    pub mode: SortMode,
    /// Compare text case-insensitively. Only meaningful for `String` and `Natural`.
    pub fold_case: bool,
}

impl SortFlags {
    /// Raw bit that requests case folding.
    pub const FOLD_CASE_BIT: i64 = 8;

    /// Loose comparison.
    pub const REGULAR: Self = Self::new(SortMode::Regular, false);
    /// Numeric comparison.
    pub const NUMERIC: Self = Self::new(SortMode::Numeric, false);
    /// Bytewise text comparison.
    pub const STRING: Self = Self::new(SortMode::String, false);
    /// Case-insensitive text comparison.
    pub const STRING_FOLD_CASE: Self = Self::new(SortMode::String, true);
    /// Natural order.
    pub const NATURAL: Self = Self::new(SortMode::Natural, false);
    /// Case-insensitive natural order.
    pub const NATURAL_FOLD_CASE: Self = Self::new(SortMode::Natural, true);

    /// Construct flags from parts.
    #[must_use]
    pub const fn new(mode: SortMode, fold_case: bool) -> Self {
        Self { mode, fold_case }
    }

    /// Decode a raw integer mode.
    ///
    /// Accepted values: `0` regular, `1` numeric, `2` string, `5` locale string (compared as
    /// string), `6` natural, and `2`/`5`/`6` combined with [`Self::FOLD_CASE_BIT`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidSortFlags` for any other value.
    pub fn from_bits(bits: i64) -> Result<Self, ArrayError> {
        let fold_case = bits & Self::FOLD_CASE_BIT != 0;
        let mode = match bits & !Self::FOLD_CASE_BIT {
            0 if !fold_case => SortMode::Regular,
            1 if !fold_case => SortMode::Numeric,
            2 | 5 => SortMode::String,
            6 => SortMode::Natural,
            _ => {
                debug_event!(bits, "rejected sort flags");
                return Err(ArrayError::usage(ErrorCode::InvalidSortFlags));
            }
        };
        Ok(Self::new(mode, fold_case))
    }

    /// Encode as a raw integer mode.
    #[must_use]
    pub const fn bits(self) -> i64 {
        let mode = match self.mode {
            SortMode::Regular => 0,
            SortMode::Numeric => 1,
            SortMode::String => 2,
            SortMode::Natural => 6,
        };
        if self.fold_case {
            mode | Self::FOLD_CASE_BIT
        } else {
            mode
        }
    }

    /// Compare two values under these flags.
    #[must_use]
    pub fn compare(self, a: &Value, b: &Value) -> Ordering {
        match self.mode {
            SortMode::Regular => regular_cmp(a, b),
            SortMode::Numeric => numeric_cmp(a, b),
            SortMode::String => text_cmp(&a.to_text(), &b.to_text(), self.fold_case),
            SortMode::Natural => natural_cmp(&a.to_text(), &b.to_text(), self.fold_case),
        }
    }
}

impl TryFrom<i64> for SortFlags {
    type Error = ArrayError;

    fn try_from(bits: i64) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<SortMode> for SortFlags {
    fn from(mode: SortMode) -> Self {
        Self::new(mode, false)
    }
}

/// Anything accepted as a sort mode argument.
///
/// Typed flags always convert; raw integers are validated here, before any entry moves.
pub trait IntoSortFlags {
    /// Convert into validated flags.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSortFlags` when a raw mode is not recognized.
    fn into_sort_flags(self) -> Result<SortFlags, ArrayError>;
}

impl IntoSortFlags for SortFlags {
    fn into_sort_flags(self) -> Result<SortFlags, ArrayError> {
        Ok(self)
    }
}

impl IntoSortFlags for SortMode {
    fn into_sort_flags(self) -> Result<SortFlags, ArrayError> {
        Ok(self.into())
    }
}

impl IntoSortFlags for i64 {
    fn into_sort_flags(self) -> Result<SortFlags, ArrayError> {
        SortFlags::from_bits(self)
    }
}

impl IntoSortFlags for i32 {
    fn into_sort_flags(self) -> Result<SortFlags, ArrayError> {
        SortFlags::from_bits(i64::from(self))
    }
}

impl<T: IntoSortFlags> IntoSortFlags for Option<T> {
    fn into_sort_flags(self) -> Result<SortFlags, ArrayError> {
        self.map_or(Ok(SortFlags::default()), IntoSortFlags::into_sort_flags)
    }
}

fn text_cmp(a: &str, b: &str, fold_case: bool) -> Ordering {
    if fold_case {
        a.chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase))
    } else {
        a.cmp(b)
    }
}

/// A number as seen by the numeric and regular modes, kept exact.
#[derive(Debug, Clone, Copy)]
enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    /// Integral text stays an integer; anything else goes through `f64`.
    fn from_text(t: &str) -> Option<Self> {
        t.parse::<i64>()
            .map(Self::Int)
            .or_else(|_| t.parse::<f64>().map(Self::Float))
            .ok()
    }

    const fn from_bool(b: bool) -> Self {
        Self::Int(if b { 1 } else { 0 })
    }
}

/// NaNs sit outside every number: negative NaN below, positive NaN above.
fn nan_rank(f: f64) -> i8 {
    match (f.is_nan(), f.is_sign_negative()) {
        (false, _) => 0,
        (true, true) => -1,
        (true, false) => 1,
    }
}

fn float_cmp(a: f64, b: f64) -> Ordering {
    nan_rank(a)
        .cmp(&nan_rank(b))
        .then_with(|| a.partial_cmp(&b).unwrap_or(Ordering::Equal))
}

/// Exact comparison of an integer against a float, without rounding the integer.
#[allow(clippy::cast_possible_truncation)]
fn int_float_cmp(i: i64, f: f64) -> Ordering {
    // 2^63, exactly representable.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    match nan_rank(f) {
        0 => {}
        r => return 0.cmp(&r),
    }
    if f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    i.cmp(&(whole as i64)).then_with(|| {
        if f > whole {
            Ordering::Less
        } else if f < whole {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

fn num_cmp(a: Num, b: Num) -> Ordering {
    match (a, b) {
        (Num::Int(x), Num::Int(y)) => x.cmp(&y),
        (Num::Float(x), Num::Float(y)) => float_cmp(x, y),
        (Num::Int(x), Num::Float(y)) => int_float_cmp(x, y),
        (Num::Float(x), Num::Int(y)) => int_float_cmp(y, x).reverse(),
    }
}

/// Numeric view: text by its leading number, containers by "non-empty", null as zero.
fn numeric_view(v: &Value) -> Num {
    match v {
        Value::Null => Num::Int(0),
        Value::Bool(b) => Num::from_bool(*b),
        Value::Int(i) => Num::Int(*i),
        Value::Float(f) => Num::Float(*f),
        Value::Text(s) => Value::leading_numeric_prefix(s)
            .and_then(Num::from_text)
            .unwrap_or(Num::Int(0)),
        Value::List(_) | Value::Map(_) => Num::from_bool(v.child_count() > 0),
    }
}

fn numeric_cmp(a: &Value, b: &Value) -> Ordering {
    num_cmp(numeric_view(a), numeric_view(b))
}

/// Rank classes of the regular mode. Values of different classes never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Null,
    Bool,
    Number,
    Text,
    List,
    Map,
}

fn regular_rank(v: &Value) -> (Rank, Option<Num>) {
    match v {
        Value::Null => (Rank::Null, None),
        Value::Bool(_) => (Rank::Bool, None),
        Value::Int(i) => (Rank::Number, Some(Num::Int(*i))),
        Value::Float(f) => (Rank::Number, Some(Num::Float(*f))),
        Value::Text(s) => match Value::numeric_text(s).and_then(Num::from_text) {
            Some(n) => (Rank::Number, Some(n)),
            None => (Rank::Text, None),
        },
        Value::List(_) => (Rank::List, None),
        Value::Map(_) => (Rank::Map, None),
    }
}

/// Regular mode: rank first (`null < bool < number < text < list < map`), then a loose
/// comparison inside the rank. Numbers and numeric text compare by exact value, other text
/// bytewise, containers by size then contents.
fn regular_cmp(a: &Value, b: &Value) -> Ordering {
    let (ra, na) = regular_rank(a);
    let (rb, nb) = regular_rank(b);
    ra.cmp(&rb).then_with(|| match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Text(x), Value::Text(y)) if ra == Rank::Text => x.cmp(y),
        (Value::List(x), Value::List(y)) => x.len().cmp(&y.len()).then_with(|| {
            x.iter()
                .zip(y.iter())
                .map(|(p, q)| regular_cmp(p, q))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        }),
        (Value::Map(x), Value::Map(y)) => x.len().cmp(&y.len()).then_with(|| {
            x.iter()
                .zip(y.iter())
                .map(|((kx, vx), (ky, vy))| kx.cmp(ky).then_with(|| regular_cmp(vx, vy)))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        }),
        _ => match (na, nb) {
            (Some(x), Some(y)) => num_cmp(x, y),
            _ => Ordering::Equal,
        },
    })
}

/// Stable order of `0..len` under `cmp`.
///
/// Only the index vector is sorted, so a panicking comparator leaves the entries untouched.
fn sorted_order<F>(len: usize, mut cmp: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut order: Vec<usize> = (0..len).collect();
    order.sort_by(|&a, &b| cmp(a, b));
    order
}

impl Collection {
    /// Sort values ascending and re-key them `0..`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSortFlags` for an unrecognized raw mode; the collection is untouched.
    pub fn sort(&mut self, flags: impl IntoSortFlags) -> Result<(), ArrayError> {
        let flags = flags.into_sort_flags()?;
        self.usort(|a, b| flags.compare(a, b));
        Ok(())
    }

    /// Sort values descending and re-key them `0..`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSortFlags` for an unrecognized raw mode; the collection is untouched.
    pub fn rsort(&mut self, flags: impl IntoSortFlags) -> Result<(), ArrayError> {
        let flags = flags.into_sort_flags()?;
        self.usort(|a, b| flags.compare(b, a));
        Ok(())
    }

    /// Sort values ascending, keeping each key with its value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSortFlags` for an unrecognized raw mode; the collection is untouched.
    pub fn asort(&mut self, flags: impl IntoSortFlags) -> Result<(), ArrayError> {
        let flags = flags.into_sort_flags()?;
        self.uasort(|a, b| flags.compare(a, b));
        Ok(())
    }

    /// Sort values descending, keeping each key with its value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSortFlags` for an unrecognized raw mode; the collection is untouched.
    pub fn arsort(&mut self, flags: impl IntoSortFlags) -> Result<(), ArrayError> {
        let flags = flags.into_sort_flags()?;
        self.uasort(|a, b| flags.compare(b, a));
        Ok(())
    }

    /// Sort by key ascending.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSortFlags` for an unrecognized raw mode; the collection is untouched.
    pub fn ksort(&mut self, flags: impl IntoSortFlags) -> Result<(), ArrayError> {
        let flags = flags.into_sort_flags()?;
        self.sort_keys_as_values(|a, b| flags.compare(a, b));
        Ok(())
    }

    /// Sort by key descending.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSortFlags` for an unrecognized raw mode; the collection is untouched.
    pub fn krsort(&mut self, flags: impl IntoSortFlags) -> Result<(), ArrayError> {
        let flags = flags.into_sort_flags()?;
        self.sort_keys_as_values(|a, b| flags.compare(b, a));
        Ok(())
    }

    /// Sort values in natural order, keeping keys.
    pub fn nat_sort(&mut self) {
        self.uasort(|a, b| SortFlags::NATURAL.compare(a, b));
    }

    /// Sort values in case-insensitive natural order, keeping keys.
    pub fn nat_case_sort(&mut self) {
        self.uasort(|a, b| SortFlags::NATURAL_FOLD_CASE.compare(a, b));
    }

    /// Sort values with `cmp` and re-key them `0..`.
    ///
    /// # Panics
    ///
    /// Panics if `cmp` panics, or may panic if it does not implement a total order. The
    /// collection is unchanged when that happens.
    pub fn usort<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        let values: Vec<&Value> = self.entries.values().collect();
        let order = sorted_order(values.len(), |a, b| cmp(values[a], values[b]));
        self.apply_order(&order, true);
    }

    /// Sort values with `cmp`, keeping keys.
    ///
    /// # Panics
    ///
    /// Panics if `cmp` panics, or may panic if it does not implement a total order. The
    /// collection is unchanged when that happens.
    pub fn uasort<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        let values: Vec<&Value> = self.entries.values().collect();
        let order = sorted_order(values.len(), |a, b| cmp(values[a], values[b]));
        self.apply_order(&order, false);
    }

    /// Sort keys with `cmp`, keeping values.
    ///
    /// # Panics
    ///
    /// Panics if `cmp` panics, or may panic if it does not implement a total order. The
    /// collection is unchanged when that happens.
    pub fn uksort<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&Key, &Key) -> Ordering,
    {
        let keys: Vec<&Key> = self.entries.keys().collect();
        let order = sorted_order(keys.len(), |a, b| cmp(keys[a], keys[b]));
        self.apply_order(&order, false);
    }

    /// Shuffle with the thread-local RNG and re-key values `0..`.
    #[cfg(feature = "shuffle")]
    #[cfg_attr(docsrs, doc(cfg(feature = "shuffle")))]
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffle with `rng` and re-key values `0..`.
    #[cfg(feature = "shuffle")]
    #[cfg_attr(docsrs, doc(cfg(feature = "shuffle")))]
    pub fn shuffle_with<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        use rand::seq::SliceRandom;

        let mut order: Vec<usize> = (0..self.len()).collect();
        order.shuffle(rng);
        self.apply_order(&order, true);
    }

    /// Key sorts compare keys through their value view so every mode applies to them.
    fn sort_keys_as_values<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        let views: Vec<Value> = self.entries.keys().cloned().map(Value::from).collect();
        let order = sorted_order(views.len(), |a, b| cmp(&views[a], &views[b]));
        self.apply_order(&order, false);
    }

    /// Rebuild the entries in `order` (a permutation of `0..len`), cursor before first.
    ///
    /// With `rekey` the original keys are dropped and values are keyed `0..`.
    fn apply_order(&mut self, order: &[usize], rekey: bool) {
        let mut slots: Vec<Option<(Key, Value)>> = core::mem::take(&mut self.entries)
            .into_iter()
            .map(Some)
            .collect();
        let sorted = order.iter().filter_map(|&i| slots.get_mut(i).and_then(Option::take));
        if rekey {
            let values: Vec<Value> = sorted.map(|(_, v)| v).collect();
            self.reindex_from(values);
        } else {
            self.entries = sorted.collect();
            self.cursor = Cursor::BeforeFirst;
        }
    }
}
