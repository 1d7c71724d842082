//! Bracket paths for nested reads.
//!
//! A bracket path names a top-level key followed by any number of bracketed sub-keys:
//!
//! ```text
//! path    := segment ( '[' segment ']' )*
//! segment := one or more characters other than '[' and ']'
//! ```
//!
//! `"Data Array[Key]"` names the top-level key `Data Array` and then its child `Key`.
//! Whitespace belongs to the segment it appears in.
//!
//! Parsing and resolution are separate steps. [`PathSpec::parse`] reports exactly why a path
//! is malformed; [`Collection::fetch`] folds every failure (malformed path, missing key,
//! non-container in the middle) into `None`.

use core::fmt;

use crate::collection::Collection;
use crate::key::{parse_canonical_int, Key};
use crate::value::Value;
use crate::{ArrayError, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Segment(&'a str),
    Open,
    Close,
}

/// Splits a path into segments and brackets, remembering each token's byte offset.
struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let rest = &self.input[start..];
        let token = match rest.as_bytes().first()? {
            b'[' => {
                self.pos += 1;
                Token::Open
            }
            b']' => {
                self.pos += 1;
                Token::Close
            }
            _ => {
                let len = rest.find(['[', ']']).unwrap_or(rest.len());
                self.pos += len;
                Token::Segment(&rest[..len])
            }
        };
        Some((start, token))
    }
}

/// A parsed bracket path: the root key followed by sub-keys. Every segment is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec<'a> {
    segments: Vec<&'a str>,
}

impl<'a> PathSpec<'a> {
    /// Parse `input`.
    ///
    /// # Errors
    ///
    /// Returns an error carrying the byte offset where parsing stopped:
    /// - `EmptyPath` for `""`,
    /// - `EmptySegment` for an empty root (`"[a]"`) or an empty bracket (`"a[]"`),
    /// - `UnterminatedBracket` for a `[` that is never closed (`"a[b"`),
    /// - `UnexpectedCharacter` for a stray `]`, a nested `[`, or text after `]` that does not
    ///   start a new bracket (`"a]"`, `"a[b[c]]"`, `"a[b]c"`).
    pub fn parse(input: &'a str) -> Result<Self, ArrayError> {
        let mut lexer = Lexer::new(input);
        let mut segments = Vec::new();

        match lexer.next() {
            None => return Err(ArrayError::new(ErrorCode::EmptyPath, 0)),
            Some((_, Token::Segment(root))) => segments.push(root),
            Some((off, Token::Open)) => return Err(ArrayError::new(ErrorCode::EmptySegment, off)),
            Some((off, Token::Close)) => {
                return Err(ArrayError::new(ErrorCode::UnexpectedCharacter, off))
            }
        }

        while let Some((open_off, token)) = lexer.next() {
            if token != Token::Open {
                return Err(ArrayError::new(ErrorCode::UnexpectedCharacter, open_off));
            }
            match lexer.next() {
                Some((_, Token::Segment(seg))) => segments.push(seg),
                Some((off, Token::Close)) => {
                    return Err(ArrayError::new(ErrorCode::EmptySegment, off))
                }
                Some((off, Token::Open)) => {
                    return Err(ArrayError::new(ErrorCode::UnexpectedCharacter, off))
                }
                None => return Err(ArrayError::new(ErrorCode::UnterminatedBracket, open_off)),
            }
            match lexer.next() {
                Some((_, Token::Close)) => {}
                Some((off, _)) => return Err(ArrayError::new(ErrorCode::UnexpectedCharacter, off)),
                None => return Err(ArrayError::new(ErrorCode::UnterminatedBracket, open_off)),
            }
        }

        Ok(Self { segments })
    }

    /// The top-level key.
    #[must_use]
    pub fn root(&self) -> &'a str {
        self.segments[0]
    }

    /// Bracketed sub-keys, outermost first.
    #[must_use]
    pub fn subkeys(&self) -> &[&'a str] {
        &self.segments[1..]
    }

    /// All segments, root first.
    #[must_use]
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }
}

impl fmt::Display for PathSpec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root())?;
        for sub in self.subkeys() {
            write!(f, "[{sub}]")?;
        }
        Ok(())
    }
}

impl Value {
    /// Look up one sub-key.
    ///
    /// Maps are indexed by the key `segment` spells (`"0"` reaches `Key::Int(0)`); lists by a
    /// canonical non-negative index. Scalars have no children.
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            Self::Map(map) => map.get(&Key::from_text(segment)),
            Self::List(items) => parse_canonical_int(segment)
                .and_then(|i| usize::try_from(i).ok())
                .and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Walk `segments` starting at this value.
    ///
    /// Returns `None` as soon as a segment is missing or the current value is not a container.
    #[must_use]
    pub fn at<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Self> {
        segments
            .iter()
            .try_fold(self, |cur, seg| cur.child(seg.as_ref()))
    }

    /// Resolve a bracket path whose root is a child of this value.
    #[must_use]
    pub fn fetch(&self, path: &str) -> Option<&Self> {
        let spec = parse_for_fetch(path)?;
        self.at(spec.segments())
    }
}

impl Collection {
    /// Resolve a bracket path such as `"Parent[Child][0]"`.
    ///
    /// Malformed paths, missing keys and non-container intermediates all return `None`. This is
    /// a pure read: the cursor does not move.
    #[must_use]
    pub fn fetch(&self, path: &str) -> Option<&Value> {
        let spec = parse_for_fetch(path)?;
        self.resolve(&spec)
    }

    /// [`fetch`](Self::fetch), falling back to `default`.
    #[must_use]
    pub fn fetch_or<'a>(&'a self, path: &str, default: &'a Value) -> &'a Value {
        self.fetch(path).unwrap_or(default)
    }

    /// Resolve an already-parsed path.
    #[must_use]
    pub fn resolve(&self, spec: &PathSpec<'_>) -> Option<&Value> {
        let found = self
            .get(spec.root())
            .and_then(|root| root.at(spec.subkeys()));
        if found.is_none() {
            debug_event!(path = %spec, "bracket path did not resolve");
        }
        found
    }
}

fn parse_for_fetch(path: &str) -> Option<PathSpec<'_>> {
    PathSpec::parse(path)
        .map_err(|err| {
            debug_event!(path, error = %err, "malformed bracket path");
            err
        })
        .ok()
}
