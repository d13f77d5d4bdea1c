//! Property-based tests for wrapping and resolution

use objx::{Obj, Value};
use proptest::prelude::*;

/// Arbitrary JSON-shaped values a few levels deep
fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::I64),
        any::<u8>().prop_map(Value::U8),
        "[a-z]{0,8}".prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..8).prop_map(Value::Object),
        ]
    })
}

/// Dotted selectors built from short keys, some with indices
fn selector_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        ("[a-z]{1,4}", prop::option::of(0usize..4)).prop_map(|(key, idx)| match idx {
            Some(i) => format!("{}[{}]", key, i),
            None => key,
        }),
        1..5,
    )
    .prop_map(|segments| segments.join("."))
}

proptest! {
    #[test]
    fn construct_keeps_value(value in value_strategy()) {
        let obj = Obj::new(value.clone());
        prop_assert_eq!(obj.value(), &value);
        prop_assert_eq!(obj.is_nil(), value == Value::Null);
    }

    #[test]
    fn resolution_is_idempotent(value in value_strategy(), selector in selector_strategy()) {
        let obj = Obj::new(value);
        let first = obj.try_get(selector.as_str());
        let second = obj.try_get(selector.as_str());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn resolution_never_mutates_root(value in value_strategy(), selector in selector_strategy()) {
        let obj = Obj::new(value.clone());
        let _ = obj.try_get(selector.as_str());
        prop_assert_eq!(obj.value(), &value);
    }

    #[test]
    fn plain_keys_on_scalars_are_no_ops(n in any::<i64>(), selector in "[a-z]{1,4}(\\.[a-z]{1,4}){0,4}") {
        let obj = Obj::new(n);
        prop_assert_eq!(obj.get(selector.as_str()), obj);
    }

    #[test]
    fn integer_selector_matches_slice_index(items in prop::collection::vec(any::<i64>(), 1..32), seed in any::<usize>()) {
        let idx = seed % items.len();
        let obj = Obj::new(items.clone());
        let got = obj.get(idx);
        prop_assert_eq!(got.value(), &Value::I64(items[idx]));
    }

    #[test]
    fn render_is_marker_delimited(value in value_strategy()) {
        let rendered = Obj::new(value.clone()).render();
        prop_assert!(rendered.starts_with('•'));
        prop_assert!(rendered.ends_with('•'));
        prop_assert_eq!(rendered, format!("•{}•", value));
    }
}
