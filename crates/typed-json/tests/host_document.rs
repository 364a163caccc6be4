use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use serde_json::json;
use typed_json::{CanonicalPair, Envelope, TypeTag, TypedValue};

#[derive(Debug, Serialize, Deserialize)]
struct Optional {
    #[serde(skip_serializing_if = "Option::is_none")]
    one: Option<Envelope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    two: Option<Envelope>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Job {
    name: String,
    retries: Envelope,
    timeout: Envelope,
    tags: Envelope,
}

#[test]
fn test_omit_empty_preserved() {
    let raw = r#"{"one":{"Type":"_int","Value":"4"}}"#;
    let doc: Optional = serde_json::from_str(raw).unwrap();

    let one = doc.one.as_ref().expect("one must be present");
    assert_eq!(one.tag, TypeTag::INT);
    assert_eq!(one.value, TypedValue::Int(4));
    assert!(doc.two.is_none());

    assert_eq!(serde_json::to_string(&doc).unwrap(), raw);
}

#[test]
fn test_nested_document_round_trip() {
    let job = Job {
        name: "nightly".into(),
        retries: Envelope::new(TypeTag::UINT8, 3u8, None),
        timeout: Envelope::new(TypeTag::DURATION, TimeDelta::minutes(90), None),
        tags: Envelope::new(TypeTag::STRING_LIST, vec!["a,b", "c"], None),
    };

    let value = serde_json::to_value(&job).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "nightly",
            "retries": {"Type": "_uint8", "Value": "3"},
            "timeout": {"Type": "_duration", "Value": "1h30m0s"},
            "tags": {"Type": "_string_array", "Value": "YSxi,Yw=="},
        })
    );

    let back: Job = serde_json::from_value(value).unwrap();
    assert_eq!(back, job);
}

#[test]
fn test_value_must_be_a_string() {
    let err = serde_json::from_str::<Envelope>(r#"{"Type":"_int","Value":4}"#).unwrap_err();
    assert!(err.is_data(), "{err}");

    let err = serde_json::from_str::<Envelope>(r#"{"Type":"_int","Value":["4"]}"#).unwrap_err();
    assert!(err.is_data(), "{err}");
}

#[test]
fn test_codec_errors_surface_through_serde() {
    let err = serde_json::from_str::<Envelope>(r#"{"Type":"_int","Value":"nope"}"#).unwrap_err();
    assert!(err.to_string().starts_with("failed to convert 'nope' to an int"), "{err}");

    let err = serde_json::to_string(&Envelope::new(TypeTag::INT, "nope", None)).unwrap_err();
    assert_eq!(err.to_string(), "failed to cast 'nope' to an int");

    let raw = r#"{"two":{"Type":"Test","Value":"10"}}"#;
    let err = serde_json::from_str::<Optional>(raw).unwrap_err();
    assert!(err.to_string().starts_with("unknown type 'Test' to decode"), "{err}");
}

#[test]
fn test_canonical_pair_field_names() {
    let pair = CanonicalPair::new(TypeTag::BOOL, "true");
    assert_eq!(
        serde_json::to_value(&pair).unwrap(),
        json!({"Type": "_bool", "Value": "true"})
    );
    let back: CanonicalPair = serde_json::from_value(json!({"Type": "x", "Value": ""})).unwrap();
    assert_eq!(back, CanonicalPair::new("x", ""));
}

#[test]
fn test_empty_list_comes_back_empty_not_nil() {
    let doc = json!({"one": {"Type": "_duration_array", "Value": ""}});
    let parsed: Optional = serde_json::from_value(doc).unwrap();
    let one = parsed.one.expect("one must be present");
    assert_eq!(one.value, TypedValue::DurationList(vec![]));
    assert!(!one.value.is_nil());
}
