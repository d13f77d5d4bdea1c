//! End-to-end selector resolution through `Obj`

use objx::{Kind, Obj, ObjxError, Value};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn nested_keys() {
    let root = Obj::from(json!({"a": {"b": {"c": 42}}}));
    assert_eq!(root.get("a.b.c").value(), &Value::I64(42));
}

#[test]
fn indexed_segment() {
    let root = Obj::from(json!({"a": {"list": [10, 20, 30]}}));
    assert_eq!(root.get("a.list[1]").value(), &Value::I64(20));
}

#[test]
fn indexed_segment_then_key() {
    let root = Obj::from(json!({
        "users": [
            {"name": "alice", "roles": ["admin"]},
            {"name": "bob", "roles": ["dev", "ops"]}
        ]
    }));

    assert_eq!(root.get("users[1].name").value(), &Value::from("bob"));
    assert_eq!(root.get("users[1].roles[1]").value(), &Value::from("ops"));
}

#[test]
fn missing_segments_leave_current_unchanged() {
    init_tracing();
    let root = Obj::from(json!({"a": {}}));

    // "missing" yields null, "deeper" on null is skipped
    let got = root.get("a.missing.deeper");
    assert_eq!(got, Obj::nil());

    // Indexed access on a missing key is skipped entirely
    let got = root.get("a.missing[0].deeper[1]");
    assert_eq!(got, Obj::from(json!({})));
}

#[test]
fn missing_plain_key_on_map_is_nil() {
    let root = Obj::from(json!({"a": {"b": 1}}));
    assert!(root.get("a.c").is_nil());
    assert!(root.get("zzz").is_nil());
}

#[test]
fn key_on_non_map_is_skipped() {
    let root = Obj::from(json!({"a": [1, 2, 3]}));
    let got = root.get("a.b.c");
    assert_eq!(got, Obj::from(json!([1, 2, 3])));
}

#[test]
fn indexed_on_non_array_is_skipped() {
    let root = Obj::from(json!({"a": {"list": "not an array", "x": 1}}));
    let got = root.get("a.list[0]");
    assert_eq!(got, Obj::from(json!({"list": "not an array", "x": 1})));

    // The walk continues after the skipped segment
    assert_eq!(root.get("a.list[0].x").value(), &Value::I64(1));
}

#[test]
fn empty_selector_looks_up_empty_key() {
    let root = Obj::from(json!({"": "blank", "a": 1}));
    assert_eq!(root.get("").value(), &Value::from("blank"));

    let root = Obj::from(json!({"a": 1}));
    assert!(root.get("").is_nil());

    // Empty selector against a scalar is a no-op
    assert_eq!(Obj::new(5i32).get(""), Obj::new(5i32));
}

#[test]
#[should_panic(expected = "index out of range")]
fn indexed_out_of_range_panics() {
    let root = Obj::from(json!({"a": {"list": [10, 20, 30]}}));
    root.get("a.list[99]");
}

#[test]
fn indexed_out_of_range_try_get() {
    let root = Obj::from(json!({"a": {"list": [10, 20, 30]}}));
    assert_eq!(
        root.try_get("a.list[99]"),
        Err(ObjxError::IndexOutOfRange {
            index: 99,
            len: 3,
            segment: "list[99]".to_string()
        })
    );
}

#[test]
fn integer_selector() {
    let root = Obj::from(json!(["x", "y", "z"]));
    assert_eq!(root.get(2).value(), &Value::from("z"));
    assert_eq!(root.get(0u8).value(), &Value::from("x"));
    assert_eq!(root.get(1i64).value(), &Value::from("y"));
    assert_eq!(root.get(1usize).value(), &Value::from("y"));
}

#[test]
#[should_panic(expected = "index out of range")]
fn integer_selector_out_of_range_panics() {
    Obj::from(json!(["x", "y", "z"])).get(3);
}

#[test]
#[should_panic(expected = "index out of range")]
fn negative_integer_selector_panics() {
    Obj::from(json!(["x", "y", "z"])).get(-1);
}

#[test]
#[should_panic(expected = "expected an array")]
fn integer_selector_on_map_panics() {
    Obj::from(json!({"0": "zero"})).get(0);
}

#[test]
fn integer_selector_on_map_try_get() {
    let err = Obj::from(json!({"0": "zero"})).try_get(0).unwrap_err();
    assert_eq!(
        err,
        ObjxError::NotASequence {
            index: 0,
            found: Kind::Object
        }
    );
}

#[test]
#[should_panic(expected = "not a valid integer")]
fn overflowing_index_digits_panic() {
    Obj::from(json!({"a": [1]})).get("a[184467440737095516160]");
}

#[test]
#[should_panic(expected = "invalid selector kind: float64")]
fn float_selector_value_panics() {
    Obj::from(json!([1, 2])).get_dyn(&Value::F64(1.0));
}

#[test]
fn dynamic_selector_from_document() {
    let root = Obj::from(json!({
        "config": {"lookup": "servers[1].host"},
        "servers": [{"host": "a.local"}, {"host": "b.local"}]
    }));

    let selector = root.get("config.lookup");
    assert_eq!(root.get_dyn(selector.value()).value(), &Value::from("b.local"));

    assert!(matches!(
        root.try_get_dyn(&Value::Null),
        Err(ObjxError::InvalidSelectorKind { kind: Kind::Null })
    ));
}

#[test]
fn resolving_twice_is_idempotent() {
    let root = Obj::from(json!({"a": {"list": [{"b": true}]}}));
    let first = root.get("a.list[0].b");
    let second = root.get("a.list[0].b");
    assert_eq!(first, second);
    assert_eq!(first.value(), &Value::Bool(true));
}

#[test]
fn chained_gets_match_single_path() {
    let root = Obj::from(json!({"a": {"b": {"c": [7, 8]}}}));
    assert_eq!(root.get("a").get("b").get("c[1]"), root.get("a.b.c[1]"));
}

#[test]
fn render_resolved_values() {
    let root = Obj::from(json!({"name": "hi", "n": 3, "tags": ["x", "y"], "none": null}));
    assert_eq!(root.get("name").render(), "•hi•");
    assert_eq!(root.get("n").render(), "•3•");
    assert_eq!(root.get("tags").render(), "•[x y]•");
    assert_eq!(root.get("none").render(), "•<nil>•");
    assert_eq!(root.get("tags").to_string(), root.get("tags").render());
}
