use core::cmp::Ordering;

use array_storage::{
    collection, natural_cmp, value, Collection, Cursor, ErrorCode, Key, SortFlags, SortMode, Value,
};

fn values(c: &Collection) -> Vec<Value> {
    c.values().cloned().collect()
}

fn keys(c: &Collection) -> Vec<Key> {
    c.keys().cloned().collect()
}

fn positional_keys(n: i64) -> Vec<Key> {
    (0..n).map(Key::Int).collect()
}

#[test]
fn raw_modes_decode_or_fail() {
    assert_eq!(SortFlags::from_bits(0).unwrap(), SortFlags::REGULAR);
    assert_eq!(SortFlags::from_bits(1).unwrap(), SortFlags::NUMERIC);
    assert_eq!(SortFlags::from_bits(2).unwrap(), SortFlags::STRING);
    assert_eq!(SortFlags::from_bits(5).unwrap(), SortFlags::STRING);
    assert_eq!(SortFlags::from_bits(6).unwrap(), SortFlags::NATURAL);
    assert_eq!(SortFlags::from_bits(2 | 8).unwrap(), SortFlags::STRING_FOLD_CASE);
    assert_eq!(SortFlags::from_bits(6 | 8).unwrap(), SortFlags::NATURAL_FOLD_CASE);

    for bad in [3_i64, 4, 7, 8, 9, 1 | 8, 42, -1] {
        let err = SortFlags::try_from(bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSortFlags, "mode {bad}");
    }
}

#[test]
fn typed_flags_roundtrip_through_bits() {
    for flags in [
        SortFlags::REGULAR,
        SortFlags::NUMERIC,
        SortFlags::STRING,
        SortFlags::STRING_FOLD_CASE,
        SortFlags::NATURAL,
        SortFlags::NATURAL_FOLD_CASE,
    ] {
        assert_eq!(SortFlags::from_bits(flags.bits()).unwrap(), flags);
    }
    assert_eq!(SortFlags::from(SortMode::Numeric), SortFlags::NUMERIC);
}

#[test]
fn invalid_mode_leaves_the_collection_untouched() {
    let mut c = collection! { b: 3, a: 1, c: 2 };
    c.reset();
    c.next();
    let before = c.clone();

    assert_eq!(c.sort(3).unwrap_err().code, ErrorCode::InvalidSortFlags);
    assert_eq!(c.rsort(3).unwrap_err().code, ErrorCode::InvalidSortFlags);
    assert_eq!(c.asort(99_i64).unwrap_err().code, ErrorCode::InvalidSortFlags);
    assert_eq!(c.arsort(-1).unwrap_err().code, ErrorCode::InvalidSortFlags);
    assert_eq!(c.ksort(8).unwrap_err().code, ErrorCode::InvalidSortFlags);
    assert_eq!(c.krsort(Some(7)).unwrap_err().code, ErrorCode::InvalidSortFlags);

    assert_eq!(c, before);
    assert_eq!(c.key(), Some(&Key::from("a")));
}

#[test]
fn sort_regular_compares_numeric_text_as_numbers_and_reindexes() {
    let mut c = collection! { w: 3, x: "10", y: 1, z: "2" };
    c.sort(SortFlags::REGULAR).unwrap();

    assert_eq!(values(&c), [value!(1), value!("2"), value!(3), value!("10")]);
    assert_eq!(keys(&c), positional_keys(4));
}

#[test]
fn sort_defaults_to_regular() {
    let mut a = collection! { a: "b", b: "a", c: "c" };
    let mut b = a.clone();
    a.sort(None::<SortFlags>).unwrap();
    b.sort(SortFlags::default()).unwrap();

    assert_eq!(a, b);
    assert_eq!(values(&a), [value!("a"), value!("b"), value!("c")]);
}

#[test]
fn sort_string_mode_compares_text_forms() {
    let mut c: Collection = [10, 9, 2, 1].into_iter().map(Value::from).collect();
    c.sort(SortFlags::STRING).unwrap();

    assert_eq!(values(&c), [value!(1), value!(10), value!(2), value!(9)]);
}

#[test]
fn sort_string_fold_case() {
    let mut c: Collection = ["b", "A", "a", "B"].into_iter().map(Value::from).collect();
    c.sort(SortFlags::STRING_FOLD_CASE).unwrap();

    assert_eq!(values(&c), [value!("A"), value!("a"), value!("b"), value!("B")]);
}

#[test]
fn numeric_mode_uses_leading_numbers() {
    let mut c = collection! { a: "10 apples", b: "9", c: 1.5 };
    c.sort(SortFlags::NUMERIC).unwrap();

    assert_eq!(values(&c), [value!(1.5), value!("9"), value!("10 apples")]);
}

#[test]
fn rsort_sorts_descending_and_reindexes() {
    let mut c = collection! { a: 1, b: 3, c: 2 };
    c.rsort(SortFlags::NUMERIC).unwrap();

    assert_eq!(values(&c), [value!(3), value!(2), value!(1)]);
    assert_eq!(keys(&c), positional_keys(3));
}

#[test]
fn asort_and_arsort_keep_associations() {
    let mut c = collection! { b: 2, a: 3, c: 1 };

    c.asort(SortFlags::REGULAR).unwrap();
    assert_eq!(keys(&c), [Key::from("c"), Key::from("b"), Key::from("a")]);
    assert_eq!(c.get("a"), Some(&Value::Int(3)));

    c.arsort(SortFlags::REGULAR).unwrap();
    assert_eq!(keys(&c), [Key::from("a"), Key::from("b"), Key::from("c")]);
    assert_eq!(c.get("c"), Some(&Value::Int(1)));
}

#[test]
fn ksort_orders_keys_under_each_mode() {
    let mut c = Collection::new();
    c.set(10, "x");
    c.set(9, "y");
    c.set("a", "z");
    c.set(2, "w");

    c.ksort(SortFlags::REGULAR).unwrap();
    assert_eq!(keys(&c), [Key::Int(2), Key::Int(9), Key::Int(10), Key::from("a")]);
    assert_eq!(c.get(9), Some(&value!("y")));

    c.ksort(SortFlags::STRING).unwrap();
    assert_eq!(keys(&c), [Key::Int(10), Key::Int(2), Key::Int(9), Key::from("a")]);

    c.krsort(SortFlags::REGULAR).unwrap();
    assert_eq!(keys(&c), [Key::from("a"), Key::Int(10), Key::Int(9), Key::Int(2)]);
}

#[test]
fn natural_sorts_keep_keys() {
    let mut c: Collection = ["img12.png", "img10.png", "IMG2.png", "img1.png"]
        .into_iter()
        .map(Value::from)
        .collect();

    c.nat_sort();
    assert_eq!(
        values(&c),
        [value!("IMG2.png"), value!("img1.png"), value!("img10.png"), value!("img12.png")]
    );
    assert_eq!(keys(&c), [Key::Int(2), Key::Int(3), Key::Int(1), Key::Int(0)]);

    c.nat_case_sort();
    assert_eq!(
        values(&c),
        [value!("img1.png"), value!("IMG2.png"), value!("img10.png"), value!("img12.png")]
    );
    assert_eq!(c.get(2), Some(&value!("IMG2.png")));
}

#[test]
fn natural_order_compares_digit_runs_by_magnitude() {
    assert_eq!(natural_cmp("a2", "a10", false), Ordering::Less);
    assert_eq!(natural_cmp("a10", "a2", false), Ordering::Greater);
    assert_eq!(natural_cmp("x9y", "x09y", false), Ordering::Less);
    assert_eq!(natural_cmp("B1", "a1", true), Ordering::Greater);
    assert_eq!(natural_cmp("B1", "a1", false), Ordering::Less);
    assert_eq!(natural_cmp("  a1", "  a1", false), Ordering::Equal);
    assert_eq!(natural_cmp("", "a", false), Ordering::Less);
}

#[test]
fn user_comparators() {
    let mut c = collection! { a: 1, b: 3, c: 2 };
    c.usort(|x, y| y.as_int().cmp(&x.as_int()));
    assert_eq!(values(&c), [value!(3), value!(2), value!(1)]);
    assert_eq!(keys(&c), positional_keys(3));

    let mut c = collection! { a: "ccc", b: "a", c: "bb" };
    c.uasort(|x, y| x.to_text().len().cmp(&y.to_text().len()));
    assert_eq!(keys(&c), [Key::from("b"), Key::from("c"), Key::from("a")]);

    c.uksort(|x, y| y.cmp(x));
    assert_eq!(keys(&c), [Key::from("c"), Key::from("b"), Key::from("a")]);
    assert_eq!(c.get("a"), Some(&value!("ccc")));
}

#[test]
fn user_sorts_are_stable() {
    let mut c = collection! { d: 1, a: 1, c: 1, b: 1 };
    c.uasort(|_, _| Ordering::Equal);

    assert_eq!(
        keys(&c),
        [Key::from("d"), Key::from("a"), Key::from("c"), Key::from("b")]
    );
}

#[test]
fn regular_mode_orders_mixed_kinds() {
    let mut c: Collection = vec![
        value!([1, 2]),
        value!("b"),
        value!(null),
        value!([1]),
    ]
    .into_iter()
    .collect();

    c.usort(|a, b| SortFlags::REGULAR.compare(a, b));
    assert_eq!(
        values(&c),
        [Value::Null, value!("b"), value!([1]), value!([1, 2])]
    );
}

#[test]
fn regular_mode_ranks_kinds_before_comparing() {
    let mut c: Collection = vec![
        value!(true),
        value!(2),
        value!(""),
        value!(null),
        value!(1),
        value!(false),
        value!("x"),
        value!(0.5),
        value!("1.5"),
    ]
    .into_iter()
    .collect();

    c.sort(SortFlags::REGULAR).unwrap();
    assert_eq!(
        values(&c),
        [
            Value::Null,
            value!(false),
            value!(true),
            value!(0.5),
            value!(1),
            value!("1.5"),
            value!(2),
            value!(""),
            value!("x"),
        ]
    );

    c.asort(SortFlags::REGULAR).unwrap();
    c.arsort(SortFlags::REGULAR).unwrap();
    assert_eq!(c.count(), 9);
    assert_eq!(c.get(0), Some(&Value::Null));
}

#[test]
fn numeric_mode_compares_large_integers_exactly() {
    let big = 1_i64 << 53;
    #[allow(clippy::cast_precision_loss)]
    let as_float = big as f64;
    let mut c: Collection = vec![
        Value::Float(as_float),
        Value::Int(big + 1),
        Value::Int(big),
        Value::Text((big + 2).to_string()),
    ]
    .into_iter()
    .collect();

    c.sort(SortFlags::NUMERIC).unwrap();
    assert_eq!(
        values(&c),
        [
            Value::Float(as_float),
            Value::Int(big),
            Value::Int(big + 1),
            Value::Text((big + 2).to_string()),
        ]
    );

    c.rsort(SortFlags::REGULAR).unwrap();
    assert_eq!(values(&c)[0], Value::Text((big + 2).to_string()));
}

#[test]
fn panicking_comparator_leaves_entries_in_place() {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    let mut c = collection! { b: 2, a: 1, c: 3 };
    c.reset();
    let before = c.clone();

    let positional = catch_unwind(AssertUnwindSafe(|| {
        c.usort(|_, _| panic!("comparator failed"));
    }));
    assert!(positional.is_err());
    assert_eq!(c, before);

    let by_value = catch_unwind(AssertUnwindSafe(|| {
        c.uasort(|_, _| panic!("comparator failed"));
    }));
    assert!(by_value.is_err());

    let by_key = catch_unwind(AssertUnwindSafe(|| {
        c.uksort(|_, _| panic!("comparator failed"));
    }));
    assert!(by_key.is_err());

    assert_eq!(c, before);
    assert_eq!(c.get("a"), Some(&Value::Int(1)));
    assert_eq!(c.key(), Some(&Key::from("b")));
    c.append(4).unwrap();
    assert_eq!(c.get(0), Some(&Value::Int(4)));
}

#[cfg(feature = "shuffle")]
#[test]
fn shuffle_reindexes_and_keeps_values() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut c = collection! { a: 1, b: 2, c: 3, d: 4, e: 5 };
    c.end();
    let mut rng = StdRng::seed_from_u64(7);

    c.shuffle_with(&mut rng);

    assert_eq!(keys(&c), positional_keys(5));
    let mut seen: Vec<i64> = c.values().filter_map(Value::as_int).collect();
    seen.sort_unstable();
    assert_eq!(seen, [1, 2, 3, 4, 5]);
    assert_eq!(c.cursor(), Cursor::BeforeFirst);

    c.shuffle();
    assert_eq!(c.count(), 5);
}
