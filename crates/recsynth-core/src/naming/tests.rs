use crate::{
    error::InvariantViolation,
    model::{MethodKind, RecordDescriptor},
    naming::NamingContext,
};
use recsynth_config::NamingConfig;

#[test]
fn plain_names_pass_through() {
    let record = RecordDescriptor::new("Point").field("x").field("y");
    let cx = NamingContext::new(&record, &NamingConfig::default());

    assert_eq!(cx.field("x").unwrap(), "x");
    assert_eq!(cx.field("y").unwrap(), "y");
    assert_eq!(cx.record(), "Point");
}

#[test]
fn reserved_field_names_are_mangled_without_stealing_declared_names() {
    let record = RecordDescriptor::new("Odd").field("new").field("new$");
    let cx = NamingContext::new(&record, &NamingConfig::default());

    assert_eq!(cx.field("new$").unwrap(), "new$");
    assert_eq!(cx.field("new").unwrap(), "new$$");
}

#[test]
fn configured_reserved_words_and_suffix_apply() {
    let config = NamingConfig {
        reserved: vec!["value".to_string()],
        mangle_suffix: "_".to_string(),
        ..NamingConfig::default()
    };
    let record = RecordDescriptor::new("Box").field("value");
    let cx = NamingContext::new(&record, &config);

    assert_eq!(cx.field("value").unwrap(), "value_");
}

#[test]
fn empty_suffix_falls_back() {
    let config = NamingConfig {
        mangle_suffix: String::new(),
        ..NamingConfig::default()
    };
    let record = RecordDescriptor::new("Kw").field("class");
    let cx = NamingContext::new(&record, &config);

    assert_eq!(cx.field("class").unwrap(), "class$");
}

#[test]
fn unknown_field_is_an_invariant_failure() {
    let record = RecordDescriptor::new("Point").field("x");
    let cx = NamingContext::new(&record, &NamingConfig::default());

    let err = cx.field("z").unwrap_err();
    assert_eq!(err.record, "Point");
    assert_eq!(
        err.violation,
        InvariantViolation::UnknownField {
            field: "z".to_string()
        }
    );
}

#[test]
fn method_names_follow_config() {
    let config = NamingConfig {
        component_prefix: "get".to_string(),
        to_string: "describe".to_string(),
        ..NamingConfig::default()
    };
    let record = RecordDescriptor::new("Point").field("x");
    let cx = NamingContext::new(&record, &config);

    assert_eq!(cx.component_name(0), "get1");
    assert_eq!(cx.component_name(2), "get3");
    assert_eq!(cx.method_name(MethodKind::ToString), "describe");
    assert_eq!(cx.method_name(MethodKind::HashCode), "hashCode");
}

#[test]
fn method_scope_hands_out_distinct_locals() {
    let record = RecordDescriptor::new("Point").field("x");
    let cx = NamingContext::new(&record, &NamingConfig::default());
    let mut scope = cx.method_scope();

    assert_eq!(scope.declare("result"), "result");
    assert_eq!(scope.declare("result"), "result$");
    assert_eq!(scope.declare("this"), "this$");

    // scopes are independent
    let mut other = cx.method_scope();
    assert_eq!(other.declare("result"), "result");
}
