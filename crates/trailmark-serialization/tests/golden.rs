use trailmark_attributes::Attribute;
use trailmark_serialization::{serialize, serialize_from_untyped, SerializableEvent};

#[test]
fn string_attributes_produce_golden_bytes() {
    let bytes = serialize(
        vec![
            ("sugar".to_string(), Attribute::new_string("250g")),
            ("flour".to_string(), Attribute::new_string("500g")),
        ],
        vec!["cake".to_string(), "sponge".to_string()],
    )
    .unwrap();

    assert_eq!(
        bytes,
        &br#"73:{"attributes":{"flour":"500g","sugar":"250g"},"trails":["cake","sponge"]}"#[..]
    );
}

#[test]
fn all_attribute_kinds_produce_golden_bytes() {
    let bytes = serialize(
        vec![
            ("flour".to_string(), Attribute::new_string("500g")),
            (
                "method".to_string(),
                Attribute::new_list(vec![
                    vec![("1", "put flour sugar into mixing bowl")],
                    vec![("2", "put in eggs and mix")],
                    vec![("3", "put in milk and mix")],
                ]),
            ),
            (
                "baking time".to_string(),
                Attribute::new_dict(vec![("oven time", "30 mins")]),
            ),
        ],
        vec!["cake".to_string(), "viccy sponge".to_string()],
    )
    .unwrap();

    assert_eq!(
        bytes,
        &br#"210:{"attributes":{"baking time":{"oven time":"30 mins"},"flour":"500g","method":[{"1":"put flour sugar into mixing bowl"},{"2":"put in eggs and mix"},{"3":"put in milk and mix"}]},"trails":["cake","viccy sponge"]}"#[..]
    );
}

#[test]
fn event_type_produces_golden_bytes() {
    let bytes = SerializableEvent::new(
        vec![
            ("flour".to_string(), Attribute::new_string("500g")),
            ("sugar".to_string(), Attribute::new_string("250g")),
        ],
        vec!["cake".to_string(), "sponge".to_string()],
    )
    .with_event_type("recipe")
    .serialize()
    .unwrap();

    assert_eq!(
        bytes,
        &br#"95:{"attributes":{"flour":"500g","sugar":"250g"},"event_type":"recipe","trails":["cake","sponge"]}"#[..]
    );
}

#[test]
fn absent_event_type_leaves_no_trace() {
    let bytes = serialize(
        vec![("flour".to_string(), Attribute::new_string("500g"))],
        vec!["cake".to_string()],
    )
    .unwrap();

    let needle = b"event_type";
    let found = bytes
        .windows(needle.len())
        .any(|window| window == needle);
    assert!(!found);
}

#[test]
fn numeric_looking_strings_stay_quoted() {
    let bytes = serialize(
        vec![("eggs".to_string(), Attribute::new_string("2"))],
        Vec::new(),
    )
    .unwrap();

    assert_eq!(bytes, &br#"39:{"attributes":{"eggs":"2"},"trails":[]}"#[..]);
}

#[test]
fn list_elements_keep_order_while_each_is_key_sorted() {
    let document = br#"{
        "attributes": {
            "method": [{"1": "mix"}, {"2": "bake"}]
        },
        "trails": []
    }"#;
    let bytes = serialize_from_untyped(document).unwrap();

    assert_eq!(
        bytes,
        &br#"64:{"attributes":{"method":[{"1":"mix"},{"2":"bake"}]},"trails":[]}"#[..]
    );
}

#[test]
fn untyped_event_type_produces_golden_bytes() {
    let document = br#"{
        "trails": ["cake", "sponge"],
        "event_type": "recipe",
        "attributes": {"sugar": "250g", "flour": "500g"}
    }"#;
    let bytes = serialize_from_untyped(document).unwrap();

    assert_eq!(
        bytes,
        &br#"95:{"attributes":{"flour":"500g","sugar":"250g"},"event_type":"recipe","trails":["cake","sponge"]}"#[..]
    );
}
