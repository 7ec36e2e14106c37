//! Runtime behavior of synthesized methods, executed by the reference
//! interpreter.

use recsynth_config::SynthConfig;
use recsynth_core::model::{MethodKind, RecordDescriptor};
use recsynth_eval::{Arg, EvalError, Runtime, Structural, Value};

// Both fields are defaultable, so `copy` may omit either.
fn point_runtime() -> Runtime {
    let mut rt = Runtime::new();
    rt.define(
        RecordDescriptor::new("Point")
            .defaulted_field("x")
            .defaulted_field("y"),
    )
    .unwrap();
    rt
}

fn point(rt: &Runtime, x: i32, y: i32) -> Value {
    rt.construct("Point", vec![x.into(), y.into()]).unwrap()
}

fn int(value: &Value) -> i64 {
    match value {
        Value::Int(n) => *n,
        other => panic!("expected int, got {other:?}"),
    }
}

#[test]
fn point_renders_and_hashes() {
    let rt = point_runtime();
    let p = point(&rt, 3, 4);

    assert_eq!(p.stringify(&rt).unwrap(), "Point(x=3, y=4)");
    assert_eq!(p.hash_code(&rt).unwrap(), 97);
}

#[test]
fn field_order_changes_hash() {
    let rt = point_runtime();

    assert_eq!(point(&rt, 1, 2).hash_code(&rt).unwrap(), 33);
    assert_eq!(point(&rt, 2, 1).hash_code(&rt).unwrap(), 63);
}

#[test]
fn hash_wraps_to_32_bits() {
    let rt = point_runtime();
    let p = point(&rt, i32::MAX, 0);

    assert_eq!(p.hash_code(&rt).unwrap(), 2_147_483_617);
}

#[test]
fn equals_is_reflexive_and_structural() {
    let rt = point_runtime();
    let a = point(&rt, 1, 2);
    let b = point(&rt, 1, 2);
    let c = point(&rt, 1, 3);

    assert!(a.structural_eq(&a, &rt).unwrap());
    assert!(a.structural_eq(&b, &rt).unwrap());
    assert!(b.structural_eq(&a, &rt).unwrap());
    assert!(!a.structural_eq(&c, &rt).unwrap());
    assert_eq!(a.hash_code(&rt).unwrap(), b.hash_code(&rt).unwrap());
}

#[test]
fn equals_rejects_null_primitives_and_lists() {
    let rt = point_runtime();
    let a = point(&rt, 1, 2);

    assert!(!a.structural_eq(&Value::Null, &rt).unwrap());
    assert!(!a.structural_eq(&Value::Int(1), &rt).unwrap());
    assert!(!a.structural_eq(&Value::text("Point(x=1, y=2)"), &rt).unwrap());
    assert!(
        !a.structural_eq(&Value::List(vec![Value::Int(1), Value::Int(2)]), &rt)
            .unwrap()
    );
}

#[test]
fn equals_rejects_other_record_variants() {
    let mut rt = point_runtime();
    rt.define(RecordDescriptor::new("Pair").field("x").field("y"))
        .unwrap();

    let p = point(&rt, 1, 2);
    let q = rt.construct("Pair", vec![1.into(), 2.into()]).unwrap();

    assert!(!p.structural_eq(&q, &rt).unwrap());
    assert!(!q.structural_eq(&p, &rt).unwrap());
}

#[test]
fn copy_without_arguments_is_equal_but_distinct() {
    let rt = point_runtime();
    let a = point(&rt, 5, 6);
    let before = rt.constructions("Point");

    let b = rt.copy(&a, Vec::new()).unwrap();

    assert_eq!(rt.constructions("Point"), before + 1);
    assert!(!a.identical(&b));
    assert!(a.structural_eq(&b, &rt).unwrap());
}

#[test]
fn copy_replaces_only_supplied_fields() {
    let rt = point_runtime();
    let a = point(&rt, 5, 6);

    let b = rt.copy(&a, vec![Arg::Absent, Arg::value(9)]).unwrap();

    assert_eq!(int(&rt.component(&b, 0).unwrap()), 5);
    assert_eq!(int(&rt.component(&b, 1).unwrap()), 9);
    assert_eq!(b.stringify(&rt).unwrap(), "Point(x=5, y=9)");
}

#[test]
fn copy_keeps_explicit_null() {
    let rt = point_runtime();
    let a = point(&rt, 5, 6);

    let b = rt.copy(&a, vec![Arg::Value(Value::Null)]).unwrap();

    assert!(matches!(rt.component(&b, 0).unwrap(), Value::Null));
    assert_eq!(b.stringify(&rt).unwrap(), "Point(x=null, y=6)");
}

#[test]
fn components_follow_identity_order() {
    let rt = point_runtime();
    let p = point(&rt, 7, 8);

    assert_eq!(int(&rt.component(&p, 0).unwrap()), 7);
    assert_eq!(int(&rt.component(&p, 1).unwrap()), 8);
    assert_eq!(int(&rt.invoke(&p, "component2", Vec::new()).unwrap()), 8);
    assert!(matches!(
        rt.component(&p, 2).unwrap_err(),
        EvalError::NoSuchMethod { .. }
    ));
}

#[test]
fn plain_params_are_forwarded_but_not_stored() {
    let mut rt = Runtime::new();
    rt.define(
        RecordDescriptor::new("Money")
            .field("amount")
            .plain("rounding")
            .defaulted_field("currency"),
    )
    .unwrap();

    let m = rt
        .construct(
            "Money",
            vec![Value::Int(100), Value::text("half-up"), Value::text("EUR")],
        )
        .unwrap();

    assert_eq!(m.stringify(&rt).unwrap(), "Money(amount=100, currency=EUR)");
    assert!(matches!(rt.component(&m, 1).unwrap(), Value::Text(c) if c == "EUR"));

    let n = rt
        .copy(&m, vec![Arg::value(250), Arg::value("floor")])
        .unwrap();
    assert_eq!(n.stringify(&rt).unwrap(), "Money(amount=250, currency=EUR)");

    let err = rt.copy(&m, vec![Arg::value(250)]).unwrap_err();
    assert!(matches!(err, EvalError::MissingArgument { param, .. } if param == "rounding"));
}

#[test]
fn nested_records_stringify_recursively() {
    let mut rt = point_runtime();
    rt.define(RecordDescriptor::new("Line").field("from").field("to"))
        .unwrap();

    let line = rt
        .construct("Line", vec![point(&rt, 0, 0), point(&rt, 1, 2)])
        .unwrap();
    let same = rt
        .construct("Line", vec![point(&rt, 0, 0), point(&rt, 1, 2)])
        .unwrap();

    assert_eq!(
        line.stringify(&rt).unwrap(),
        "Line(from=Point(x=0, y=0), to=Point(x=1, y=2))"
    );
    assert!(line.structural_eq(&same, &rt).unwrap());
    assert_eq!(line.hash_code(&rt).unwrap(), same.hash_code(&rt).unwrap());
}

#[test]
fn reserved_field_names_still_round_trip() {
    let mut rt = Runtime::new();
    rt.define(RecordDescriptor::new("Ctor").field("new").field("class"))
        .unwrap();

    let c = rt
        .construct("Ctor", vec![Value::Int(1), Value::Int(2)])
        .unwrap();

    assert_eq!(c.stringify(&rt).unwrap(), "Ctor(new=1, class=2)");
    assert_eq!(int(&rt.component(&c, 1).unwrap()), 2);
}

#[test]
fn declared_methods_fall_back_to_identity() {
    let mut rt = Runtime::new();
    rt.define(
        RecordDescriptor::new("Token")
            .field("v")
            .with_declared(MethodKind::Equals),
    )
    .unwrap();

    let a = rt.construct("Token", vec![Value::Int(1)]).unwrap();
    let b = rt.construct("Token", vec![Value::Int(1)]).unwrap();

    assert!(!a.structural_eq(&b, &rt).unwrap());
    assert_eq!(a.hash_code(&rt).unwrap(), b.hash_code(&rt).unwrap());
}

#[test]
fn renamed_methods_are_dispatched() {
    let config: SynthConfig = SynthConfig::from_toml_str(
        r#"
        [naming]
        to_string = "describe"
        hash_code = "hash"
        "#,
    )
    .unwrap();

    let mut rt = Runtime::with_config(config);
    rt.define(RecordDescriptor::new("Point").field("x").field("y"))
        .unwrap();
    let p = rt
        .construct("Point", vec![Value::Int(3), Value::Int(4)])
        .unwrap();

    assert_eq!(p.stringify(&rt).unwrap(), "Point(x=3, y=4)");
    assert_eq!(p.hash_code(&rt).unwrap(), 97);
    assert!(rt.class("Point").unwrap().method("describe").is_some());
}

#[test]
fn records_without_identity_fields_are_not_defined() {
    let mut rt = Runtime::new();

    let err = rt
        .define(RecordDescriptor::new("Empty").plain("seed"))
        .unwrap_err();

    assert!(matches!(err, EvalError::Synth(_)));
    assert!(rt.class("Empty").is_none());
}
