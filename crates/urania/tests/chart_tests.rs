use urania::{load_chart_from_json, Body, ChartInputError};

#[test]
fn test_load_chart_valid() {
    let json = r#"
    {
      "bodies": [
        {"name": "Sun", "degree": 15.5, "house": 1},
        {"name": "Moon", "degree": 200.25, "isRetrograde": false},
        {"name": "North Node", "degree": 88.0, "isRetrograde": true},
        {"name": "Pluto", "degree": null}
      ],
      "ascendant": 10.0,
      "houseCusps": [10, 40, 70, 100, 130, 160, 190, 220, 250, 280, 310, 340],
      "patterns": [
        {"type": "stellium", "planets": ["Sun", "Moon"]}
      ]
    }
    "#;

    let chart = load_chart_from_json(json).unwrap();
    assert_eq!(chart.bodies.len(), 4);
    assert_eq!(chart.ascendant, 10.0);
    assert_eq!(chart.house_cusps.as_ref().map(Vec::len), Some(12));
    assert_eq!(chart.patterns.len(), 1);

    let node = chart.body(Body::NorthNode).unwrap();
    assert!(node.is_retrograde);
    assert_eq!(chart.body(Body::Pluto).unwrap().degree, None);
    assert_eq!(chart.body(Body::Sun).unwrap().house, Some(1));
}

#[test]
fn test_load_chart_ascendant_from_body() {
    let json = r#"
    {
      "bodies": [
        {"name": "Sun", "degree": 15.5},
        {"name": "Ascendant", "degree": 372.0}
      ]
    }
    "#;
    let chart = load_chart_from_json(json).unwrap();
    assert_eq!(chart.ascendant, 12.0);
    assert!(chart.patterns.is_empty());
}

#[test]
fn test_load_chart_missing_ascendant() {
    let json = r#"{"bodies": [{"name": "Sun", "degree": 15.5}]}"#;
    match load_chart_from_json(json) {
        Err(ChartInputError::MissingField(field)) => assert_eq!(field, "ascendant"),
        other => panic!("expected missing ascendant, got {:?}", other),
    }
}

#[test]
fn test_load_chart_missing_bodies() {
    let result = load_chart_from_json(r#"{"ascendant": 0}"#);
    assert!(matches!(result, Err(ChartInputError::MissingField(_))));
}

#[test]
fn test_load_chart_invalid_json() {
    let result = load_chart_from_json("{ not json");
    assert!(matches!(result, Err(ChartInputError::InvalidJson(_))));
}

#[test]
fn test_load_chart_rejects_bad_values() {
    let cases = [
        r#"{"bodies": [{"name": "Chiron", "degree": 1}], "ascendant": 0}"#,
        r#"{"bodies": [{"name": "Sun", "degree": "ten"}], "ascendant": 0}"#,
        r#"{"bodies": [{"name": "Sun", "house": 13}], "ascendant": 0}"#,
        r#"{"bodies": "Sun", "ascendant": 0}"#,
        r#"{"bodies": [], "ascendant": "east"}"#,
        r#"{"bodies": [], "ascendant": 0, "houseCusps": [0, 30]}"#,
        r#"{"bodies": [], "ascendant": 0, "patterns": {"type": "yod"}}"#,
    ];
    for json in cases {
        let result = load_chart_from_json(json);
        assert!(
            matches!(result, Err(ChartInputError::InvalidFieldValue(_))),
            "expected invalid field for {}, got {:?}",
            json,
            result
        );
    }
}

#[test]
fn test_load_chart_keeps_unrecognized_patterns() {
    let json = r#"
    {
      "bodies": [{"name": "Sun", "degree": 1}],
      "ascendant": 0,
      "patterns": [{"type": "bowl_shape"}, {"type": "Yod", "description": "no planets here"}]
    }
    "#;
    let chart = load_chart_from_json(json).unwrap();
    assert_eq!(chart.patterns.len(), 2);
    assert!(chart.resolved_patterns(true).is_empty());
}
