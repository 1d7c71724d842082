#![no_main]

use libfuzzer_sys::fuzz_target;

use array_storage::{collection, PathSpec};

fuzz_target!(|data: &[u8]| {
    let Ok(path) = std::str::from_utf8(data) else {
        return;
    };

    let c = collection! {
        a: { b: [1, 2, { c: "deep" }] },
        "Data Array": { Key: "end value" },
        0: "zero",
    };

    match PathSpec::parse(path) {
        Ok(spec) => {
            assert!(!spec.segments().is_empty());
            assert!(spec.segments().iter().all(|s| !s.is_empty()));
            assert_eq!(c.fetch(path), c.resolve(&spec));

            let shown = spec.to_string();
            assert_eq!(PathSpec::parse(&shown).as_ref(), Ok(&spec));
        }
        Err(err) => {
            assert!(err.is_path_error());
            assert!(err.offset <= path.len());
            assert!(c.fetch(path).is_none());
        }
    }
});
