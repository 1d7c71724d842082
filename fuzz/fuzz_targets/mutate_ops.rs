#![no_main]

use libfuzzer_sys::fuzz_target;

use array_storage::{Collection, Cursor, Value};

// Each input byte selects one operation; the collection must stay internally consistent.
fuzz_target!(|data: &[u8]| {
    let mut c = Collection::new();

    for (i, op) in data.iter().take(512).enumerate() {
        let key = i64::from(op >> 4);
        match op & 0x0f {
            0 => {
                c.set(key, i64::try_from(i).unwrap_or(0));
            }
            1 => {
                let _ = c.append(Value::from(key));
            }
            2 => {
                c.prepend(Value::from(key));
            }
            3 => {
                let _ = c.pop();
            }
            4 => {
                let _ = c.shift();
            }
            5 => {
                let _ = c.remove(key);
            }
            6 => {
                c.push(key, "pushed");
            }
            7 => {
                c.unshift(key, "unshifted");
            }
            8 => {
                let _ = c.next();
            }
            9 => {
                let _ = c.prev();
            }
            10 => {
                let _ = c.reset();
            }
            11 => {
                let _ = c.end();
            }
            12 => {
                let _ = c.sort(i64::from(op >> 4));
            }
            13 => {
                let _ = c.ksort(i64::from(op >> 4));
            }
            14 => c.nat_case_sort(),
            _ => c.clear(),
        }

        if let Cursor::At(idx) = c.cursor() {
            assert!(idx < c.count());
            assert!(c.current().is_some());
        }
        assert_eq!(c.keys().count(), c.count());
    }
});
