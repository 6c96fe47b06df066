use poly_demo::{announce_any, announce_typed, Cat, Cow, DemoEngine, Dog, Human, Vector2D};

#[test]
fn test_end_to_end_demo_transcript() {
    let engine = DemoEngine::new();
    let transcript = engine.run().unwrap();

    let expected: Vec<&str> = vec![
        "Dog says: Woof!",
        "Cat says: Meow!",
        "Cow says: Moo!",
        "",
        "Duck Typing Example:",
        "Human says: Hello!",
        "Dog says: Woof!",
        "Cat says: Meow!",
        "",
        "Operator Overloading Example:",
        "Vector(6, 8)",
    ];

    assert_eq!(transcript, expected);

    // Running again produces the same transcript; nothing is stateful.
    assert_eq!(engine.run().unwrap(), expected);
}

#[test]
fn test_dispatch_paths_match_across_the_public_api() {
    assert_eq!(announce_typed(&Dog).unwrap(), announce_any(&Dog).unwrap());
    assert_eq!(announce_typed(&Cat).unwrap(), announce_any(&Cat).unwrap());
    assert_eq!(announce_typed(&Cow).unwrap(), announce_any(&Cow).unwrap());
    assert_eq!(announce_any(&Human).unwrap(), "Human says: Hello!");
}

#[test]
fn test_vector_addition_end_to_end() {
    let v1 = Vector2D::new(2.0, 3.0);
    let v2 = Vector2D::new(4.0, 5.0);
    assert_eq!((v1 + v2).to_string(), "Vector(6, 8)");

    // The checked form agrees with the operator.
    assert_eq!(v1.add(&v2).unwrap(), v1 + v2);
}

#[test]
fn test_vector_serializes_with_plain_fields() {
    let v = Vector2D::new(2.0, 3.0);
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json, serde_json::json!({"x": 2.0, "y": 3.0}));
}
