use proptest::prelude::*;
use recsynth_ast::{MethodDef, Stmt};
use recsynth_core::{
    model::{ConstructorParam, RecordDescriptor},
    synth::RecordSynthesizer,
};

// ---- strategies --------------------------------------------------------

fn arb_param(index: usize) -> impl Strategy<Value = ConstructorParam> {
    let name = format!("p{index}");

    prop_oneof![
        Just(ConstructorParam::field(name.clone())),
        Just(ConstructorParam::defaulted_field(name.clone())),
        Just(ConstructorParam::plain(name)),
    ]
}

fn arb_record() -> impl Strategy<Value = RecordDescriptor> {
    (1usize..8)
        .prop_flat_map(|len| (0..len).map(arb_param).collect::<Vec<_>>())
        .prop_map(|params| {
            params
                .into_iter()
                .fold(RecordDescriptor::new("Gen"), RecordDescriptor::param)
        })
}

fn find<'a>(methods: &'a [MethodDef], name: &str) -> Option<&'a MethodDef> {
    methods.iter().find(|m| m.name == name)
}

proptest! {
    #[test]
    fn shape_follows_descriptor(record in arb_record()) {
        let mut out = Vec::new();
        let result = RecordSynthesizer::default().synthesize(&record, &mut out);
        let identity = record.identity_count();

        if identity == 0 {
            prop_assert!(result.is_err());
            prop_assert!(out.is_empty());
        } else {
            prop_assert!(result.is_ok());

            let components = out
                .iter()
                .filter(|m| m.name.starts_with("component"))
                .count();
            prop_assert_eq!(components, identity);

            let copy = find(&out, "copy").unwrap();
            prop_assert_eq!(copy.arity(), record.params.len());
            for (param, generated) in record.params.iter().zip(&copy.params) {
                prop_assert_eq!(generated.optional, param.identity && param.has_default);
                prop_assert_eq!(generated.name.as_str(), param.name.as_str());
            }

            // let + one update per identity field + return
            let hash = find(&out, "hashCode").unwrap();
            prop_assert_eq!(hash.body.len(), identity + 2);
            prop_assert!(matches!(hash.body.last(), Some(Stmt::Return(_))));

            let equals = find(&out, "equals").unwrap();
            prop_assert_eq!(equals.arity(), 1);
        }
    }
}
