use forwarded_header::{parse, ForwardedElement, Node};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn test_elements_serialize_to_json() {
    let elements = parse([r#"for="192.0.2.43:47011";proto=https, by=_proxy"#]).unwrap();
    let value = serde_json::to_value(&elements).unwrap();
    assert_eq!(
        value,
        json!([
            {
                "by_node": "Unknown",
                "for_node": {"Address": {"ip": "192.0.2.43", "port": {"Numeric": 47011}}},
                "host": null,
                "proto": "https"
            },
            {
                "by_node": {"Obfuscated": {"id": "_proxy", "port": null}},
                "for_node": "Unknown",
                "host": null,
                "proto": null
            }
        ])
    );
}

#[rstest]
fn test_json_round_trip() {
    let elements = vec![
        ForwardedElement::new()
            .with_for(Node::obfuscated("_gazonk").with_obfuscated_port("_p"))
            .with_host("example.com"),
        ForwardedElement::new(),
    ];
    let text = serde_json::to_string(&elements).unwrap();
    let back: Vec<ForwardedElement> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, elements);
}
