/// The collection's logical read position.
///
/// `At(i)` always satisfies `i < len` for the collection that owns it; structural mutations
/// re-anchor the cursor through the `on_*` transitions below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Before the first entry. Fresh, cleared, sorted and decoded collections start here.
    #[default]
    BeforeFirst,
    /// Positioned at the entry with this index.
    At(usize),
    /// Past the last entry.
    AfterLast,
}

impl Cursor {
    /// Position at the first entry, or `BeforeFirst` when there is none.
    pub(crate) const fn first(len: usize) -> Self {
        if len == 0 {
            Self::BeforeFirst
        } else {
            Self::At(0)
        }
    }

    /// Position at the last entry, or `BeforeFirst` when there is none.
    pub(crate) const fn last(len: usize) -> Self {
        if len == 0 {
            Self::BeforeFirst
        } else {
            Self::At(len - 1)
        }
    }

    /// Index of the entry under the cursor.
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::At(i) => Some(i),
            Self::BeforeFirst | Self::AfterLast => None,
        }
    }

    /// Returns `true` when the cursor is on a sentinel.
    #[inline]
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        !matches!(self, Self::At(_))
    }

    pub(crate) const fn advance(self, len: usize) -> Self {
        match self {
            Self::BeforeFirst => Self::first_or_after(len),
            Self::At(i) if i + 1 < len => Self::At(i + 1),
            Self::At(_) | Self::AfterLast => Self::AfterLast,
        }
    }

    pub(crate) const fn retreat(self, len: usize) -> Self {
        match self {
            Self::AfterLast => Self::last(len),
            Self::At(i) if i > 0 => Self::At(i - 1),
            Self::At(_) | Self::BeforeFirst => Self::BeforeFirst,
        }
    }

    const fn first_or_after(len: usize) -> Self {
        if len == 0 {
            Self::AfterLast
        } else {
            Self::At(0)
        }
    }

    /// The entry at `removed` is gone.
    pub(crate) const fn on_remove(self, removed: usize) -> Self {
        match self {
            Self::At(i) if i == removed => Self::BeforeFirst,
            Self::At(i) if i > removed => Self::At(i - 1),
            other => other,
        }
    }

    /// A new entry now lives at `inserted`; entries at and after it moved one slot right.
    pub(crate) const fn on_insert(self, inserted: usize) -> Self {
        match self {
            Self::At(i) if i >= inserted => Self::At(i + 1),
            other => other,
        }
    }
}
