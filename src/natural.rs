//! Natural ("human") string ordering.
//!
//! Runs of ASCII digits compare by numeric magnitude, so `img2` sorts before `img10`. Every
//! other character compares one at a time, optionally case-folded. Leading whitespace is
//! ignored. When two strings are equal under these rules, the one whose digit runs carry fewer
//! leading zeros sorts first, then plain byte order decides.

use core::cmp::Ordering;
use core::iter::Peekable;
use core::str::Chars;

/// Compare `a` and `b` in natural order.
#[must_use]
pub fn natural_cmp(a: &str, b: &str, fold_case: bool) -> Ordering {
    let mut ia = a.trim_start().chars().peekable();
    let mut ib = b.trim_start().chars().peekable();
    let mut zeros_tiebreak = Ordering::Equal;

    loop {
        match (ia.peek().copied(), ib.peek().copied()) {
            (None, None) => return zeros_tiebreak.then_with(|| a.cmp(b)),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let ra = take_digits(&mut ia);
                let rb = take_digits(&mut ib);
                let na = ra.trim_start_matches('0');
                let nb = rb.trim_start_matches('0');
                let by_value = na.len().cmp(&nb.len()).then_with(|| na.cmp(nb));
                if by_value != Ordering::Equal {
                    return by_value;
                }
                if zeros_tiebreak == Ordering::Equal {
                    zeros_tiebreak = ra.len().cmp(&rb.len());
                }
            }
            (Some(ca), Some(cb)) => {
                let ord = if fold_case {
                    ca.to_lowercase().cmp(cb.to_lowercase())
                } else {
                    ca.cmp(&cb)
                };
                if ord != Ordering::Equal {
                    return ord;
                }
                ia.next();
                ib.next();
            }
        }
    }
}

fn take_digits(it: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = it.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}
