use core::cmp::Ordering;
use core::fmt;

/// A collection key: an integer or a text string.
///
/// Text that is the canonical decimal spelling of an `i64` is stored as [`Key::Int`] when the
/// key is built from a string, so `"5"` and `5` address the same entry. Canonical means an
/// optional leading `-`, at least one digit, no leading zeros, no `+`, and not `-0`.
/// Everything else (`"05"`, `" 5"`, `"1.5"`, `"+5"`) stays text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer key.
    Int(i64),
    /// Text key that is not a canonical integer.
    Text(String),
}

impl Key {
    /// Build a key from text, canonicalizing integer spellings.
    #[must_use]
    pub fn from_text(s: &str) -> Self {
        parse_canonical_int(s).map_or_else(|| Self::Text(s.to_owned()), Self::Int)
    }

    /// Return the integer value if this is an integer key.
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Text(_) => None,
        }
    }

    /// Return the text if this is a text key.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// Returns `true` iff this is an integer key.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }
}

/// Parse `s` as a canonical decimal `i64`.
pub(crate) fn parse_canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let bytes = digits.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    if s.starts_with('-') && digits == "0" {
        return None;
    }
    s.parse().ok()
}

/// Integer keys sort before text keys; within a kind the natural order applies.
///
/// This is the structural order used for deterministic tie-breaking. The sort family uses
/// the mode-aware comparisons in [`crate::SortFlags`] instead.
impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Int(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Int(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Int)
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Self::from_text(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match parse_canonical_int(&value) {
            Some(i) => Self::Int(i),
            None => Self::Text(value),
        }
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}
