use shopdal::{
    Error,
    config::Config,
    load,
    schema::{
        Error as SchemaError,
        build::BuildError,
        node::{FieldKind, FlagKind},
        types::ScalarKind,
    },
};

fn config(toml: &str) -> Config {
    Config::from_toml_str(toml).unwrap()
}

#[test]
fn default_config_loads_catalog() {
    let schema = load(&Config::default()).unwrap();

    assert!(schema.contains("category"));
    assert!(schema.contains("listing_sorting"));
}

#[test]
fn configured_fields_are_appended() {
    let schema = load(&config(
        r#"
        [[extensions]]
        entity = "listing_sorting"

        [[extensions.fields]]
        storage = "icon"
        kind = "string"

        [[extensions.fields]]
        storage = "valid_until"
        kind = "date"
        required = true
        "#,
    ))
    .unwrap();

    let listing = schema.get("listing_sorting").unwrap();
    assert_eq!(listing.fields().len(), 13);

    let valid_until = listing.field("validUntil").unwrap();
    assert_eq!(valid_until.kind(), &FieldKind::Scalar(ScalarKind::Date));
    assert!(valid_until.is(FlagKind::Required));
}

#[test]
fn unknown_extension_target_fails() {
    let result = load(&config(
        r#"
        [[extensions]]
        entity = "customer"
        fields = [{ storage = "vip", kind = "bool" }]
        "#,
    ));

    assert!(matches!(
        result,
        Err(Error::Schema(SchemaError::BuildError(BuildError::UnknownExtensionTarget(name)))) if name == "customer"
    ));
}

#[test]
fn strictness_follows_config() {
    let invalid = r#"
        [[extensions]]
        entity = "category"
        fields = [{ storage = "path", property = "altPath", kind = "string" }]
    "#;

    let strict = load(&config(invalid));
    match strict {
        Err(Error::Schema(SchemaError::BuildError(BuildError::Validation(errs)))) => {
            assert!(errs.contains("column 'path'"), "{errs}");
        }
        other => panic!("expected validation failure, got {other:?}"),
    }

    let lenient = format!("[schema]\nstrict = false\n{invalid}");
    let lenient = load(&config(&lenient)).unwrap();
    assert!(lenient.get("category").unwrap().field("altPath").is_some());
}

#[test]
fn configured_ranking_is_serialized() {
    let schema = load(&config(
        r#"
        [[extensions]]
        entity = "category"
        fields = [{ storage = "teaser", kind = "long_text", search_ranking = 80.0 }]
        "#,
    ))
    .unwrap();

    let category = schema.get("category").unwrap();
    let json = serde_json::to_value(category).unwrap();
    let teaser = json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["property"] == "teaser")
        .unwrap();

    assert_eq!(teaser["storage"], "teaser");
    let flags = serde_json::json!([{ "SearchRanking": 80.0 }]);
    assert_eq!(teaser["flags"], flags);
}
