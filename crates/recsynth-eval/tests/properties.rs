use proptest::prelude::*;
use recsynth_core::model::RecordDescriptor;
use recsynth_eval::{Runtime, Structural, Value};

fn runtime(arity: usize) -> Runtime {
    let record = (0..arity).fold(RecordDescriptor::new("Tuple"), |record, i| {
        record.defaulted_field(format!("f{i}"))
    });

    let mut rt = Runtime::new();
    rt.define(record).unwrap();
    rt
}

fn tuple(rt: &Runtime, values: &[i32]) -> Value {
    rt.construct("Tuple", values.iter().map(|v| Value::from(*v)).collect())
        .unwrap()
}

fn expected_hash(values: &[i32]) -> i32 {
    values
        .iter()
        .fold(0i32, |acc, v| acc.wrapping_mul(31).wrapping_add(*v))
}

proptest! {
    #[test]
    fn hash_is_wrapping_polynomial(values in prop::collection::vec(any::<i32>(), 1..6)) {
        let rt = runtime(values.len());
        let t = tuple(&rt, &values);

        prop_assert_eq!(t.hash_code(&rt).unwrap(), expected_hash(&values));
    }

    #[test]
    fn equal_values_hash_alike(values in prop::collection::vec(any::<i32>(), 1..6)) {
        let rt = runtime(values.len());
        let a = tuple(&rt, &values);
        let b = tuple(&rt, &values);

        prop_assert!(a.structural_eq(&a, &rt).unwrap());
        prop_assert!(a.structural_eq(&b, &rt).unwrap());
        prop_assert!(b.structural_eq(&a, &rt).unwrap());
        prop_assert_eq!(a.hash_code(&rt).unwrap(), b.hash_code(&rt).unwrap());
    }

    #[test]
    fn equality_tracks_every_field(
        values in prop::collection::vec(any::<i32>(), 1..6),
        index in any::<prop::sample::Index>(),
        delta in 1i32..1000,
    ) {
        let rt = runtime(values.len());
        let mut changed = values.clone();
        let i = index.index(changed.len());
        changed[i] = changed[i].wrapping_add(delta);

        let a = tuple(&rt, &values);
        let b = tuple(&rt, &changed);

        prop_assert!(!a.structural_eq(&b, &rt).unwrap());
    }

    #[test]
    fn string_lists_fields_in_order(values in prop::collection::vec(any::<i32>(), 1..6)) {
        let rt = runtime(values.len());
        let t = tuple(&rt, &values);

        let body = values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("f{i}={v}"))
            .collect::<Vec<_>>()
            .join(", ");

        prop_assert_eq!(t.stringify(&rt).unwrap(), format!("Tuple({body})"));
    }

    #[test]
    fn copy_is_equal_not_identical(values in prop::collection::vec(any::<i32>(), 1..6)) {
        let rt = runtime(values.len());
        let t = tuple(&rt, &values);
        let before = rt.constructions("Tuple");

        let c = rt.copy(&t, Vec::new()).unwrap();

        prop_assert_eq!(rt.constructions("Tuple"), before + 1);
        prop_assert!(!t.identical(&c));
        prop_assert!(t.structural_eq(&c, &rt).unwrap());
    }
}
