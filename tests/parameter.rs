use php_codegen::{
    Docblock, Parameter, ParameterSignature, PhpConstant, ReflectedValue, Value,
};

#[test]
fn test_create_sets_name() {
    let param = Parameter::create("foo");
    assert_eq!(param.name(), Some("foo"));

    let unnamed = Parameter::new();
    assert_eq!(unnamed.name(), None);
}

#[test]
fn test_passed_by_reference_round_trips() {
    let mut param = Parameter::create("foo");
    assert!(!param.is_passed_by_reference());

    param.set_passed_by_reference(true);
    assert!(param.is_passed_by_reference());

    param.set_passed_by_reference(false);
    assert!(!param.is_passed_by_reference());
}

#[test]
fn test_value_and_expression_are_mutually_exclusive() {
    let mut param = Parameter::create("foo");

    param.set_value(42i64);
    param.set_expression("self::DEFAULT");
    assert_eq!(param.value(), None);
    assert_eq!(param.expression(), Some("self::DEFAULT"));

    param.set_value("bar");
    assert_eq!(param.expression(), None);
    assert_eq!(param.value(), Some(&Value::Str("bar".to_string())));
}

#[test]
fn test_docblock_tag_reflects_current_state() {
    let mut param = Parameter::create("foo");
    param.set_type("int").set_type_description("the foo");

    assert_eq!(param.docblock_tag().to_string(), "@param int $foo the foo");

    // The projection tracks later mutation.
    param.set_type("string");
    assert_eq!(
        param.docblock_tag().to_string(),
        "@param string $foo the foo"
    );
}

#[test]
fn test_type_description_matches_underlying_part_accessors() {
    let mut param = Parameter::create("foo");
    param.set_type_description("a description");
    assert_eq!(param.type_description(), Some("a description"));

    // Same field the tag projection reads.
    assert_eq!(param.docblock_tag().description(), Some("a description"));
}

#[test]
fn test_signature_builds_fluently() {
    let sig = ParameterSignature::new("foo")
        .by_ref(true)
        .default_value(ReflectedValue::Int(42))
        .class_hint("Countable");

    assert_eq!(
        sig,
        ParameterSignature {
            name: "foo".to_string(),
            by_ref: true,
            default_value: Some(ReflectedValue::Int(42)),
            class_hint: Some("Countable".to_string()),
            ..Default::default()
        }
    );

    let param = Parameter::from_reflection(&sig, &Docblock::new());
    assert!(param.is_passed_by_reference());
    assert_eq!(param.value(), Some(&Value::Int(42)));
    assert_eq!(param.type_name(), Some("Countable"));
}

#[test]
fn test_from_reflection_without_docblock_or_hints() {
    let sig = ParameterSignature {
        name: "foo".to_string(),
        by_ref: true,
        default_value: Some(ReflectedValue::Int(42)),
        ..Default::default()
    };
    let param = Parameter::from_reflection(&sig, &Docblock::new());

    assert_eq!(param.name(), Some("foo"));
    assert!(param.is_passed_by_reference());
    assert_eq!(param.value(), Some(&Value::Int(42)));
    assert_eq!(param.expression(), None);
    assert_eq!(param.type_name(), None);
}

#[test]
fn test_from_reflection_docblock_tag_beats_array_hint() {
    let sig = ParameterSignature {
        name: "foo".to_string(),
        by_ref: true,
        default_value: Some(ReflectedValue::Int(42)),
        array_hint: true,
        ..Default::default()
    };
    let docblock = Docblock::parse(
        "/**\n\
         * @param int $foo the foo\n\
         */",
    )
    .unwrap();
    let param = Parameter::from_reflection(&sig, &docblock);

    assert_eq!(param.type_name(), Some("int"));
    assert_eq!(param.type_description(), Some("the foo"));
}

#[test]
fn test_from_reflection_hint_fallback_order() {
    let docblock = Docblock::new();

    let array_and_class = ParameterSignature {
        name: "a".to_string(),
        array_hint: true,
        class_hint: Some("Traversable".to_string()),
        ..Default::default()
    };
    let param = Parameter::from_reflection(&array_and_class, &docblock);
    assert_eq!(param.type_name(), Some("array"));

    let class_and_callable = ParameterSignature {
        name: "b".to_string(),
        class_hint: Some("Closure".to_string()),
        is_callable: true,
        ..Default::default()
    };
    let param = Parameter::from_reflection(&class_and_callable, &docblock);
    assert_eq!(param.type_name(), Some("Closure"));

    let callable_only = ParameterSignature {
        name: "c".to_string(),
        is_callable: true,
        ..Default::default()
    };
    let param = Parameter::from_reflection(&callable_only, &docblock);
    assert_eq!(param.type_name(), Some("callable"));
}

#[test]
fn test_from_reflection_literal_kinds() {
    let docblock = Docblock::new();
    let cases = [
        (ReflectedValue::Null, Value::Null),
        (ReflectedValue::Bool(false), Value::Bool(false)),
        (ReflectedValue::Float(1.5), Value::Float(1.5)),
        (
            ReflectedValue::Str("x".to_string()),
            Value::Str("x".to_string()),
        ),
        (
            ReflectedValue::Constant("PHP_EOL".to_string()),
            Value::from(PhpConstant::create("PHP_EOL")),
        ),
    ];

    for (reflected, expected) in cases {
        let sig = ParameterSignature {
            name: "foo".to_string(),
            default_value: Some(reflected),
            ..Default::default()
        };
        let param = Parameter::from_reflection(&sig, &docblock);
        assert_eq!(param.value(), Some(&expected));
        assert_eq!(param.expression(), None);
    }
}

#[test]
fn test_from_reflection_non_literal_default_becomes_expression() {
    let sig = ParameterSignature {
        name: "options".to_string(),
        default_value: Some(ReflectedValue::Expr("['a' => 1]".to_string())),
        ..Default::default()
    };
    let param = Parameter::from_reflection(&sig, &Docblock::new());

    assert_eq!(param.value(), None);
    assert_eq!(param.expression(), Some("['a' => 1]"));
}

#[test]
fn test_from_reflection_no_default() {
    let sig = ParameterSignature {
        name: "foo".to_string(),
        ..Default::default()
    };
    let param = Parameter::from_reflection(&sig, &Docblock::new());
    assert!(!param.has_value());
}

#[test]
fn test_docblock_tag_lookup_ignores_other_params() {
    let sig = ParameterSignature {
        name: "bar".to_string(),
        ..Default::default()
    };
    let docblock = Docblock::parse(
        "/**\n\
         * @param int $foo the foo\n\
         * @param string $bar the bar\n\
         */",
    )
    .unwrap();
    let param = Parameter::from_reflection(&sig, &docblock);

    assert_eq!(param.type_name(), Some("string"));
    assert_eq!(param.type_description(), Some("the bar"));
}

#[test]
fn test_parameter_serializes() {
    let mut param = Parameter::create("foo");
    param.set_type("int").set_value(7i64);

    let json = serde_json::to_value(&param).unwrap();
    assert_eq!(json["name"]["name"], "foo");
    assert_eq!(json["ty"]["type_name"], "int");
    assert_eq!(json["value"]["value"]["Int"], 7);
}
