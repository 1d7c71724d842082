//! Construction macros.
//!
//! [`value!`] builds a [`crate::Value`] tree from a JSON-like literal and [`collection!`] builds
//! a [`crate::Collection`] from the same map syntax. Both are infallible.
//!
//! Map key rules (same ergonomics as `serde_json::json!`):
//! - `{ a: 1 }` uses the literal key `"a"` (identifier stringized)
//! - `{ "a": 1 }` uses the literal string key `"a"`; `{ 0: 1 }` the integer key `0`
//! - `{ (k): 1 }` uses the expression `k` as the key (anything `Into<Key>`)
//!
//! Values are single token trees; wrap anything longer, such as `-1` or a method call, in
//! parentheses.
//!
//! ```
//! use array_storage::{collection, value};
//!
//! let dynamic = "Data 2";
//! let c = collection! {
//!     "Data 1": "Value 1",
//!     (dynamic): (-2),
//!     "Data Array": { Key: "end value", list: [1, null, true] },
//! };
//! assert_eq!(c.fetch("Data Array[Key]"), Some(&value!("end value")));
//! ```

/// Construct a [`crate::Value`] using a JSON-like literal syntax.
///
/// Supported forms:
/// - `value!(null)`, `value!(true)`, `value!(false)`
/// - `value!([ ... ])`
/// - `value!({ key: value, "key": value, 0: value, (expr_key): value, ... })`
/// - `value!(expr)` where `expr` implements `Into<Value>`
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };
    (true) => {
        $crate::Value::Bool(true)
    };
    (false) => {
        $crate::Value::Bool(false)
    };

    // List literal: value!([ ... ])
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(::std::vec![ $($crate::value!($elem)),* ])
    };

    // Map literal: value!({ ... })
    ({ $($key:tt : $value:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut map = $crate::Map::new();
        $(
            map.insert($crate::__value_key!($key), $crate::value!($value));
        )*
        $crate::Value::Map(map)
    }};

    // Fallback: convert an expression into a Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Construct a [`crate::Collection`] from `key: value` pairs, using [`value!`] key rules.
///
/// Entries are inserted in the order written.
#[macro_export]
macro_rules! collection {
    ($($key:tt : $value:tt),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut c = $crate::Collection::new();
        $(
            c.set($crate::__value_key!($key), $crate::value!($value));
        )*
        c
    }};
}

/// Internal helper for map keys.
///
/// - `ident` becomes `"ident"`
/// - a literal goes through `Key::from`
/// - `(expr)` uses the runtime expression as key
#[doc(hidden)]
#[macro_export]
macro_rules! __value_key {
    ($key:ident) => {
        $crate::Key::from(::core::stringify!($key))
    };
    (($key:expr)) => {
        $crate::Key::from($key)
    };
    ($key:literal) => {
        $crate::Key::from($key)
    };
}
