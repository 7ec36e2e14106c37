use crate::{
    error::InvariantViolation,
    model::{ConstructorParam, FunctionDescriptor, MethodKind, RecordDescriptor},
};

// ---- helpers -----------------------------------------------------------

fn interleaved() -> RecordDescriptor {
    RecordDescriptor::new("Sample")
        .field("a")
        .plain("scale")
        .defaulted_field("b")
}

#[test]
fn identity_fields_skip_plain_params_and_keep_order() {
    let record = interleaved();
    let fields: Vec<(usize, &str)> = record
        .identity_fields()
        .map(|f| (f.ordinal, f.name()))
        .collect();

    assert_eq!(fields, vec![(0, "a"), (1, "b")]);
    assert_eq!(record.identity_count(), 2);
    assert_eq!(record.identity_field(1).map(|f| f.name()), Some("b"));
    assert!(record.identity_field(2).is_none());
}

#[test]
fn constructor_path_falls_back_to_name() {
    let record = RecordDescriptor::new("Point");
    assert_eq!(record.constructor_path(), "Point");

    let record = record.with_path("geo.Point");
    assert_eq!(record.constructor_path(), "geo.Point");
}

#[test]
fn validate_accepts_interleaved_record() {
    assert!(interleaved().validate().is_ok());
}

#[test]
fn validate_rejects_default_on_plain_param() {
    let record = RecordDescriptor::new("Bad").field("a").param(ConstructorParam {
        name: "scale".to_string(),
        identity: false,
        has_default: true,
    });

    let err = record.validate().unwrap_err();
    assert_eq!(err.record, "Bad");
    assert_eq!(
        err.violation,
        InvariantViolation::DefaultOnPlainParam {
            param: "scale".to_string()
        }
    );
}

#[test]
fn validate_rejects_duplicates_and_empty_names() {
    let dup = RecordDescriptor::new("Dup").field("a").plain("a");
    assert_eq!(
        dup.validate().unwrap_err().violation,
        InvariantViolation::DuplicateParam {
            param: "a".to_string()
        }
    );

    let empty = RecordDescriptor::new("Empty").field("a").field("");
    assert_eq!(
        empty.validate().unwrap_err().violation,
        InvariantViolation::EmptyName { position: 1 }
    );

    let nameless = RecordDescriptor::new("").field("a");
    assert_eq!(
        nameless.validate().unwrap_err().violation,
        InvariantViolation::EmptyRecordName
    );
}

#[test]
fn function_descriptor_arity_follows_constructor() {
    let record = interleaved();

    let copy = FunctionDescriptor::for_record(MethodKind::Copy, &record);
    assert_eq!(copy.params, vec!["a", "scale", "b"]);
    assert!(copy.check_arity(&record).is_ok());

    let short = FunctionDescriptor::new(MethodKind::Copy, vec!["a".to_string()]);
    let err = short.check_arity(&record).unwrap_err();
    assert_eq!(err.method, Some(MethodKind::Copy));
    assert_eq!(
        err.violation,
        InvariantViolation::ParamCountMismatch {
            expected: 3,
            actual: 1
        }
    );
    assert_eq!(
        err.to_string(),
        "cannot synthesize 'copy' for record 'Sample': function declares 1 parameters but 3 are required"
    );
}

#[test]
fn descriptor_reads_from_json() {
    let record: RecordDescriptor = serde_json::from_str(
        r#"{
            "name": "Point",
            "path": "geo.Point",
            "params": [
                { "name": "x", "identity": true, "has_default": true },
                { "name": "tag" }
            ],
            "declared": ["to_string"]
        }"#,
    )
    .unwrap();

    assert_eq!(
        record,
        RecordDescriptor::new("Point")
            .with_path("geo.Point")
            .defaulted_field("x")
            .plain("tag")
            .with_declared(MethodKind::ToString)
    );
}
