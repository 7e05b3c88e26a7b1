//! Registry properties checked with the testkit generators.

use encreg_core::EncodingName;
use encreg_testkit::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

proptest! {
    #![proptest_config(PropTestConfig::quick().to_proptest_config())]

    #[test]
    fn case_variants_load_the_same_encoding((name, variant) in case_variant_strategy()) {
        with_registry(|registry| {
            let a = registry.load_encoding(name.as_bytes()).unwrap();
            let b = registry.load_encoding(variant.as_bytes()).unwrap();
            assert!(Arc::ptr_eq(&a, &b));

            let ha = registry.get_encoding(&a).unwrap();
            let hb = registry.get_encoding(&b).unwrap();
            assert!(Arc::ptr_eq(&ha, &hb));
        });
    }

    #[test]
    fn lookup_sequences_stay_consistent(ops in lookup_sequence_strategy(1, 40)) {
        with_registry(|registry| {
            let external = registry.default_external().unwrap();
            for op in &ops {
                match op {
                    LookupOperation::Load { name } => {
                        let encoding = registry.load_encoding(name.as_bytes()).unwrap();
                        let handle = registry.get_encoding(&encoding).unwrap();
                        assert_eq!(handle.name(), encoding.name());
                    }
                    LookupOperation::Find { name } => {
                        if let Err(err) = registry.find_encoding(&EncodingName::from(name.as_str())) {
                            assert!(err.is_argument_error());
                        }
                    }
                    LookupOperation::DefaultExternal => {
                        assert!(Arc::ptr_eq(&registry.default_external().unwrap(), &external));
                    }
                }
            }
            assert_eq!(registry.stats().snapshot().cache_misses, 0);
        });
    }

    #[test]
    fn raw_names_never_panic(name in raw_name_strategy()) {
        with_registry(|registry| {
            let _ = registry.find_encoding(&EncodingName::new(name.clone()));
            let _ = registry.load_encoding(&name);
        });
    }
}

#[test]
fn recorded_constants_match_vectors() {
    with_recording_registry(|_, host| {
        let names: Vec<_> = host.definitions().into_iter().map(|d| d.name).collect();
        for vector in constant_vectors() {
            let name = vector.name();
            if name.is_empty() {
                continue;
            }
            let is_builtin = builtin_names().iter().any(|n| n.as_bytes() == name.as_slice());
            if is_builtin {
                for constant in &vector.expected {
                    assert!(names.contains(constant), "{} missing", constant);
                }
            }
        }
    });
}

#[test]
fn synthetic_database_grows_cache() {
    let test_registry = TestRegistry::open(
        scenarios::synthetic_database(64),
        RecordingHost::new(),
        Default::default(),
    );
    let result = stress_sequential_loads(&test_registry, &StressConfig { operations: 66, threads: 1 });
    assert_eq!(result.failed_ops, 0);

    let stats = test_registry.cache_stats();
    assert_eq!(stats.populated, 66);
    assert!(test_registry.stats().snapshot().cache_grows > 1);
}
