use array_storage::{collection, value, Collection, Key, Map, Value};

#[test]
fn value_macro_primitives() {
    assert_eq!(value!(null), Value::Null);
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
    assert_eq!(value!("hi"), Value::Text("hi".into()));
    assert_eq!(value!(42), Value::Int(42));
    assert_eq!(value!(1.5), Value::Float(1.5));
    assert_eq!(value!((-7)), Value::Int(-7));
}

#[test]
fn value_macro_lists_and_maps_keep_written_order() {
    let v = value!([1, true, null]);
    assert_eq!(v, Value::List(vec![Value::Int(1), Value::Bool(true), Value::Null]));

    let v = value!({ b: 2, a: 1, 0: "zero" });
    let keys: Vec<&Key> = v.as_map().unwrap().keys().collect();
    assert_eq!(keys, [&Key::from("b"), &Key::from("a"), &Key::Int(0)]);
}

#[test]
fn string_literal_keys_canonicalize() {
    let v = value!({ "5": "five", "05": "padded" });
    let map = v.as_map().unwrap();

    assert_eq!(map.get(&Key::Int(5)), Some(&value!("five")));
    assert_eq!(map.get(&Key::Text("05".into())), Some(&value!("padded")));
}

#[test]
fn expression_keys_and_values() {
    let name = String::from("dynamic");
    let count = 3_i64;
    let v = value!({ (name.as_str()): (count * 2), (count): [] });

    assert_eq!(v.child("dynamic"), Some(&Value::Int(6)));
    assert_eq!(v.child("3"), Some(&Value::List(Vec::new())));
}

#[test]
fn duplicate_keys_keep_the_first_position_and_last_value() {
    let v = value!({ a: 1, b: 2, a: 3 });
    let map: &Map = v.as_map().unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get_index(0), Some((&Key::from("a"), &Value::Int(3))));
}

#[test]
fn collection_macro_matches_manual_construction() {
    let built = collection! {
        "Data 1": "Value 1",
        "Data Array": { Key: "end value" },
    };

    let mut manual = Collection::new();
    manual.set("Data 1", "Value 1");
    manual.set("Data Array", value!({ Key: "end value" }));

    assert_eq!(built, manual);
    assert_eq!(collection! {}, Collection::new());
}
