#[cfg(test)]
mod tests {
    use crate::error::TransformError;
    use crate::options::TransformOptions;
    use crate::transform::PrivateMembersTransform;
    use oxc_allocator::Allocator;
    use oxc_codegen::Codegen;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn run(transform: &mut PrivateMembersTransform, code: &str) -> String {
        transform
            .transform_source(code, SourceType::mjs())
            .unwrap()
            .code
    }

    fn print(code: &str) -> String {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, code, SourceType::mjs()).parse();
        Codegen::new().build(&ret.program).code
    }

    #[test]
    fn test_runs_restart_without_memoize() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut transform = PrivateMembersTransform::new(TransformOptions::default()).unwrap();

        assert_eq!(run(&mut transform, "class A { _foo }"), print("class A { $1 }"));
        assert!(transform.names().is_empty());
        assert_eq!(run(&mut transform, "class B { _bar; _foo }"), print("class B { $1; $2 }"));
        assert_eq!(transform.names().next_id(), 1);
    }

    #[test]
    fn test_runs_share_aliases_with_memoize() {
        let options = TransformOptions {
            memoize: true,
            ..TransformOptions::default()
        };
        let mut transform = PrivateMembersTransform::new(options).unwrap();

        assert_eq!(run(&mut transform, "class A { _foo }"), print("class A { $1 }"));
        assert_eq!(run(&mut transform, "class B { _bar; _foo }"), print("class B { $2; $1 }"));
        assert_eq!(transform.names().get("_foo"), Some("$1"));
        assert_eq!(transform.names().get("_bar"), Some("$2"));

        transform.reset();
        assert_eq!(run(&mut transform, "class C { _bar }"), print("class C { $1 }"));
    }

    #[test]
    fn test_separate_instances_do_not_share_names() {
        let options = TransformOptions {
            memoize: true,
            ..TransformOptions::default()
        };
        let mut first = PrivateMembersTransform::new(options.clone()).unwrap();
        let mut second = PrivateMembersTransform::new(options).unwrap();

        run(&mut first, "class A { _a; _b }");
        assert_eq!(run(&mut second, "class A { _b }"), print("class A { $1 }"));
    }

    #[test]
    fn test_report_counts_renames() {
        let mut transform = PrivateMembersTransform::new(TransformOptions::default()).unwrap();
        let output = transform
            .transform_source(
                "class A { _foo; _bar() { return this._foo + other._foo } }",
                SourceType::mjs(),
            )
            .unwrap();

        assert_eq!(output.report.renamed_declarations, 2);
        assert_eq!(output.report.renamed_accesses, 1);
        assert_eq!(
            output.report.aliases,
            vec![
                ("_foo".to_string(), "$1".to_string()),
                ("_bar".to_string(), "$2".to_string())
            ]
        );
    }

    #[test]
    fn test_options_from_json() {
        let options = TransformOptions::from_json(
            r#"{ "blacklist": ["_keep", { "regex": "^_tmp.*" }], "memoize": true, "onlyClassMembers": false }"#,
        )
        .unwrap();
        assert_eq!(options.blacklist.len(), 2);
        assert!(options.memoize);
        assert!(!options.only_class_members);

        let aliased =
            TransformOptions::from_json(r#"{ "exclusions": [], "restrictToAggregateMembers": false }"#)
                .unwrap();
        assert!(!aliased.only_class_members);

        let defaults = TransformOptions::from_json("{}").unwrap();
        assert!(defaults.blacklist.is_empty());
        assert!(!defaults.memoize);
        assert!(defaults.only_class_members);
    }

    #[test]
    fn test_json_blacklist_applies() {
        let mut transform = PrivateMembersTransform::from_json(
            r#"{ "blacklist": [{ "regex": "^_tmp.*" }, "_keep"] }"#,
        )
        .unwrap();
        assert_eq!(
            run(&mut transform, "class A { _tmpValue; _keep; _x }"),
            print("class A { _tmpValue; _keep; $1 }")
        );
    }

    #[test]
    fn test_invalid_pattern_kind_is_fatal() {
        let err = PrivateMembersTransform::from_json(r#"{ "blacklist": ["_ok", 42] }"#).err();
        match err {
            Some(TransformError::InvalidPatternKind(value)) => assert_eq!(value, "42"),
            other => panic!("expected InvalidPatternKind, got {:?}", other.map(|e| e.to_string())),
        }
    }

    #[test]
    fn test_malformed_options() {
        let err = PrivateMembersTransform::from_json(r#"{ "memoize": "yes" }"#).err();
        assert!(matches!(err, Some(TransformError::Options(_))));
    }

    #[test]
    fn test_destructuring_assignment_keys_follow_renames() {
        let mut transform = PrivateMembersTransform::new(TransformOptions::default()).unwrap();

        assert_eq!(
            run(&mut transform, "class A { _x; m() { let y; ({ _x: y } = this); } }"),
            print("class A { $1; m() { let y; ({ $1: y } = this); } }")
        );
        assert_eq!(
            run(&mut transform, "class A { _x; m() { let _x; ({ _x } = this); return _x } }"),
            print("class A { $1; m() { let _x; ({ $1: _x } = this); return _x } }")
        );
        assert_eq!(
            run(&mut transform, "class A { _x; m() { let _x; ({ _x = 1 } = this); } }"),
            print("class A { $1; m() { let _x; ({ $1: _x = 1 } = this); } }")
        );
    }

    #[test]
    fn test_destructuring_assignment_keeps_public_keys() {
        let mut transform = PrivateMembersTransform::new(TransformOptions::default()).unwrap();
        let code = "let a, b; ({ a, b: c, ['_d']: d } = obj);";
        assert_eq!(run(&mut transform, code), print(code));
    }

    #[test]
    fn test_accessor_properties_are_renamed() {
        let mut transform = PrivateMembersTransform::new(TransformOptions::default()).unwrap();
        assert_eq!(
            run(&mut transform, "class A { accessor _x = 1; m() { this._x } }"),
            print("class A { accessor $1 = 1; m() { this.$1 } }")
        );
    }

    #[test]
    fn test_parse_errors_abort_the_run() {
        let options = TransformOptions {
            memoize: true,
            ..TransformOptions::default()
        };
        let mut transform = PrivateMembersTransform::new(options).unwrap();

        let err = transform
            .transform_source("class A { _foo( }", SourceType::mjs())
            .unwrap_err();
        assert!(matches!(err, TransformError::Parse { ref errors } if !errors.is_empty()));
        assert!(transform.names().is_empty());
    }
}
