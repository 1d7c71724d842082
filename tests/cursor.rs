use array_storage::{collection, value, Collection, Cursor, Key, SortFlags, Value};

fn abc() -> Collection {
    collection! { a: 1, b: 2, c: 3 }
}

fn seeded() -> Collection {
    collection! {
        "Data 1": "Value 1",
        "Data 2": "Value 2",
        "Data 3": "Value 3",
        "Data 4": "Value 4",
        "Data Array": { Key: "end value" },
    }
}

#[test]
fn empty_collection_only_yields_sentinels() {
    let mut c = Collection::new();

    assert!(c.reset().is_none());
    assert!(c.end().is_none());
    assert!(c.current().is_none());
    assert!(c.key().is_none());
    assert!(c.next().is_none());
    assert!(c.prev().is_none());
    assert!(c.cursor().is_sentinel());
}

#[test]
fn fresh_cursor_starts_before_first() {
    let mut c = abc();

    assert_eq!(c.cursor(), Cursor::BeforeFirst);
    assert!(c.current().is_none());
    assert_eq!(c.next(), Some(&Value::Int(1)));
    assert_eq!(c.key(), Some(&Key::from("a")));
}

#[test]
fn forward_walk_visits_every_entry_once() {
    let mut c = abc();

    assert_eq!(c.reset(), Some(&Value::Int(1)));
    assert_eq!(c.next(), Some(&Value::Int(2)));
    assert_eq!(c.next(), Some(&Value::Int(3)));
    assert!(c.next().is_none());
    assert!(c.next().is_none());
    assert_eq!(c.cursor(), Cursor::AfterLast);

    assert_eq!(c.prev(), Some(&Value::Int(3)));
}

#[test]
fn backward_walk_visits_every_entry_once() {
    let mut c = abc();

    assert_eq!(c.end(), Some(&Value::Int(3)));
    assert_eq!(c.prev(), Some(&Value::Int(2)));
    assert_eq!(c.prev(), Some(&Value::Int(1)));
    assert!(c.prev().is_none());
    assert!(c.prev().is_none());
    assert_eq!(c.cursor(), Cursor::BeforeFirst);

    assert_eq!(c.next(), Some(&Value::Int(1)));
}

#[test]
fn first_and_last_alias_reset_and_end() {
    let mut c = abc();

    assert_eq!(c.last(), Some(&Value::Int(3)));
    assert_eq!(c.key(), Some(&Key::from("c")));
    assert_eq!(c.first(), Some(&Value::Int(1)));
    assert_eq!(c.key(), Some(&Key::from("a")));
}

#[test]
fn keyed_unshift_push_and_walk_scenario() {
    let mut c = seeded();

    let extended = value!(["Extended Data"]);
    assert_eq!(c.unshift("Extended", vec!["Extended Data"]), Key::from("Extended"));
    assert_eq!(c.reset(), Some(&extended));

    let extended2 = value!(["Extended Data 2"]);
    c.push("Extended2", vec!["Extended Data 2"]);
    assert_eq!(c.end(), Some(&extended2));

    let at_end = c.end().cloned();
    assert_eq!(c.current().cloned(), at_end);

    assert!(c.next().is_none());

    c.end();
    let all = c.all();
    let (_, second_to_last) = all.get_index(all.len() - 2).unwrap();
    assert_eq!(c.prev(), Some(second_to_last));
    assert_eq!(second_to_last, &value!({ Key: "end value" }));
}

#[test]
fn keyed_push_of_an_existing_key_moves_it_to_the_end() {
    let mut c = seeded();
    c.unshift("Extended", vec!["Extended Data"]);
    c.push("Extended", vec!["Extended Data 2"]);

    assert_eq!(c.count(), 6);
    assert_eq!(c.reset(), Some(&value!("Value 1")));
    assert_eq!(c.end(), Some(&value!(["Extended Data 2"])));
}

#[test]
fn removing_the_cursor_entry_moves_before_first() {
    let mut c = abc();
    c.reset();
    c.next();
    assert_eq!(c.key(), Some(&Key::from("b")));

    c.remove("b");
    assert_eq!(c.cursor(), Cursor::BeforeFirst);
    assert!(c.current().is_none());
    assert_eq!(c.next(), Some(&Value::Int(1)));
}

#[test]
fn removing_before_the_cursor_keeps_its_entry() {
    let mut c = abc();
    c.end();

    c.remove("a");
    assert_eq!(c.key(), Some(&Key::from("c")));
    assert_eq!(c.prev(), Some(&Value::Int(2)));
}

#[test]
fn inserting_at_the_front_keeps_the_cursor_entry() {
    let mut c = abc();
    c.reset();

    c.unshift("z", 0);
    assert_eq!(c.key(), Some(&Key::from("a")));
    assert_eq!(c.prev(), Some(&Value::Int(0)));

    c.next();
    c.prepend("p");
    assert_eq!(c.key(), Some(&Key::from("a")));
}

#[test]
fn appending_after_the_end_keeps_the_cursor_past_the_end() {
    let mut c = abc();
    c.end();
    assert!(c.next().is_none());

    c.append(4).unwrap();
    assert_eq!(c.cursor(), Cursor::AfterLast);
    assert!(c.current().is_none());
    assert_eq!(c.prev(), Some(&Value::Int(4)));
}

#[test]
fn pop_and_shift_reanchor_the_cursor() {
    let mut c = abc();
    c.end();
    assert_eq!(c.pop(), Some(Value::Int(3)));
    assert_eq!(c.cursor(), Cursor::BeforeFirst);

    let mut c = abc();
    c.reset();
    c.next();
    assert_eq!(c.shift(), Some(Value::Int(1)));
    assert_eq!(c.cursor(), Cursor::At(0));
    assert_eq!(c.key(), Some(&Key::from("b")));
}

#[test]
fn sorting_moves_the_cursor_before_first() {
    let mut c = abc();
    c.end();
    c.asort(SortFlags::REGULAR).unwrap();
    assert_eq!(c.cursor(), Cursor::BeforeFirst);

    c.end();
    c.uksort(|a, b| b.cmp(a));
    assert_eq!(c.cursor(), Cursor::BeforeFirst);
}

#[test]
fn lookups_do_not_move_the_cursor() {
    let mut c = abc();
    c.reset();
    c.next();

    let _ = c.get("c");
    let _ = c.has("a");
    let _ = c.all();
    let _ = c.index_of(&Value::Int(3));

    assert_eq!(c.key(), Some(&Key::from("b")));
}
