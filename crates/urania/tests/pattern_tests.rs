use urania::patterns::{derive::kite_lines, PatternKind};
use urania::{
    derive_lines, AspectEdge, AspectType, Body, CelestialBody, ChartSnapshot, Pattern,
    PatternInput, PatternRecord,
};

fn chart() -> Vec<CelestialBody> {
    vec![
        CelestialBody::new(Body::Sun, 0.0),
        CelestialBody::new(Body::Moon, 190.0),
        CelestialBody::new(Body::Mercury, 100.0),
        CelestialBody::new(Body::Venus, 60.0),
        CelestialBody::new(Body::Mars, 120.0),
        CelestialBody::new(Body::Jupiter, 240.0),
        CelestialBody::new(Body::Saturn, 180.0),
        CelestialBody::new(Body::Pluto, 280.0),
    ]
}

fn get(bodies: &[CelestialBody], name: Body) -> &CelestialBody {
    bodies.iter().find(|b| b.name == name).unwrap()
}

fn edge(from: Body, to: Body, aspect_type: AspectType) -> AspectEdge {
    AspectEdge::new(from, to, aspect_type)
}

#[test]
fn test_t_square_edges_in_order() {
    let bodies = chart();
    let pattern = Pattern::TSquare {
        vertex1: vec![get(&bodies, Body::Mercury)],
        vertex2: vec![get(&bodies, Body::Pluto)],
        apex: vec![get(&bodies, Body::Moon)],
    };

    assert_eq!(
        derive_lines(&pattern),
        vec![
            edge(Body::Mercury, Body::Pluto, AspectType::Opposition),
            edge(Body::Moon, Body::Mercury, AspectType::Square),
            edge(Body::Moon, Body::Pluto, AspectType::Square),
        ]
    );
}

#[test]
fn test_roles_use_first_body_only() {
    let bodies = chart();
    let pattern = Pattern::TSquare {
        vertex1: vec![get(&bodies, Body::Mercury), get(&bodies, Body::Venus)],
        vertex2: vec![get(&bodies, Body::Pluto)],
        apex: vec![get(&bodies, Body::Moon), get(&bodies, Body::Sun)],
    };
    let edges = derive_lines(&pattern);
    assert_eq!(edges.len(), 3);
    assert!(edges
        .iter()
        .all(|e| e.from != Body::Venus && e.to != Body::Venus && e.from != Body::Sun));
}

#[test]
fn test_yod_edges() {
    let bodies = chart();
    let pattern = Pattern::Yod {
        base1: vec![get(&bodies, Body::Sun)],
        base2: vec![get(&bodies, Body::Venus)],
        apex: vec![get(&bodies, Body::Jupiter)],
    };
    assert_eq!(
        derive_lines(&pattern),
        vec![
            edge(Body::Sun, Body::Venus, AspectType::Sextile),
            edge(Body::Jupiter, Body::Sun, AspectType::Quincunx),
            edge(Body::Jupiter, Body::Venus, AspectType::Quincunx),
        ]
    );
}

#[test]
fn test_grand_trine_edges() {
    let bodies = chart();
    let pattern = Pattern::GrandTrine {
        vertices: vec![
            vec![get(&bodies, Body::Sun)],
            vec![get(&bodies, Body::Mars)],
            vec![get(&bodies, Body::Jupiter)],
        ],
    };
    assert_eq!(
        derive_lines(&pattern),
        vec![
            edge(Body::Sun, Body::Mars, AspectType::Trine),
            edge(Body::Mars, Body::Jupiter, AspectType::Trine),
            edge(Body::Jupiter, Body::Sun, AspectType::Trine),
        ]
    );
}

#[test]
fn test_grand_cross_edges() {
    let bodies = vec![
        CelestialBody::new(Body::Sun, 10.0),
        CelestialBody::new(Body::Moon, 100.0),
        CelestialBody::new(Body::Mars, 190.0),
        CelestialBody::new(Body::Saturn, 280.0),
    ];
    let pattern = Pattern::GrandCross {
        vertices: bodies.iter().map(|b| vec![b]).collect(),
    };
    let edges = derive_lines(&pattern);

    assert_eq!(edges.len(), 6);
    assert_eq!(edges[0], edge(Body::Sun, Body::Mars, AspectType::Opposition));
    assert_eq!(edges[1], edge(Body::Moon, Body::Saturn, AspectType::Opposition));
    assert_eq!(
        edges[2..],
        [
            edge(Body::Sun, Body::Moon, AspectType::Square),
            edge(Body::Moon, Body::Mars, AspectType::Square),
            edge(Body::Mars, Body::Saturn, AspectType::Square),
            edge(Body::Saturn, Body::Sun, AspectType::Square),
        ]
    );
}

#[test]
fn test_kite_apex_opposes_one_vertex() {
    let bodies = chart();
    // Sun 0, Mars 120, Jupiter 240 trine; Venus at 60 faces Jupiter
    let pattern = Pattern::Kite {
        vertices: vec![
            vec![get(&bodies, Body::Sun)],
            vec![get(&bodies, Body::Mars)],
            vec![get(&bodies, Body::Jupiter)],
        ],
        apex: vec![get(&bodies, Body::Venus)],
    };
    let edges = derive_lines(&pattern);

    assert_eq!(edges.len(), 6);
    assert!(edges[..3].iter().all(|e| e.aspect_type == AspectType::Trine));
    assert_eq!(
        edges[3..],
        [
            edge(Body::Venus, Body::Sun, AspectType::Sextile),
            edge(Body::Venus, Body::Mars, AspectType::Sextile),
            edge(Body::Venus, Body::Jupiter, AspectType::Opposition),
        ]
    );
    let oppositions = edges
        .iter()
        .filter(|e| e.aspect_type == AspectType::Opposition)
        .count();
    assert_eq!(oppositions, 1);
}

#[test]
fn test_kite_without_degrees_falls_back_to_sextiles() {
    let trine: Vec<CelestialBody> = [Body::Sun, Body::Mars, Body::Jupiter]
        .iter()
        .map(|name| CelestialBody::new(*name, 0.0))
        .collect();
    let apex = CelestialBody {
        name: Body::Venus,
        degree: None,
        house: None,
        is_retrograde: false,
    };
    let vertices: Vec<Vec<&CelestialBody>> = trine.iter().map(|b| vec![b]).collect();

    let edges = kite_lines(&vertices, &vec![&apex]);
    assert_eq!(edges.len(), 6);
    assert!(edges[3..]
        .iter()
        .all(|e| e.aspect_type == AspectType::Sextile));
}

#[test]
fn test_mystic_rectangle_edges() {
    let bodies = vec![
        CelestialBody::new(Body::Sun, 0.0),
        CelestialBody::new(Body::Moon, 60.0),
        CelestialBody::new(Body::Mars, 180.0),
        CelestialBody::new(Body::Saturn, 240.0),
    ];
    let pattern = Pattern::MysticRectangle {
        vertices: bodies.iter().map(|b| vec![b]).collect(),
    };
    assert_eq!(
        derive_lines(&pattern),
        vec![
            edge(Body::Sun, Body::Mars, AspectType::Opposition),
            edge(Body::Moon, Body::Saturn, AspectType::Opposition),
            edge(Body::Sun, Body::Moon, AspectType::Sextile),
            edge(Body::Moon, Body::Mars, AspectType::Trine),
            edge(Body::Mars, Body::Saturn, AspectType::Sextile),
            edge(Body::Saturn, Body::Sun, AspectType::Trine),
        ]
    );
}

#[test]
fn test_mystic_rectangle_sides_follow_measured_separation() {
    // First side is the trine here, so plain alternation would mislabel it
    let bodies = vec![
        CelestialBody::new(Body::Sun, 0.0),
        CelestialBody::new(Body::Moon, 120.0),
        CelestialBody::new(Body::Mars, 180.0),
        CelestialBody::new(Body::Saturn, 300.0),
    ];
    let pattern = Pattern::MysticRectangle {
        vertices: bodies.iter().map(|b| vec![b]).collect(),
    };
    let sides: Vec<AspectType> = derive_lines(&pattern)[2..]
        .iter()
        .map(|e| e.aspect_type)
        .collect();
    assert_eq!(
        sides,
        vec![
            AspectType::Trine,
            AspectType::Sextile,
            AspectType::Trine,
            AspectType::Sextile
        ]
    );
}

#[test]
fn test_missing_roles_yield_no_edges() {
    let bodies = chart();
    let sun = get(&bodies, Body::Sun);
    let patterns = vec![
        Pattern::TSquare {
            vertex1: vec![sun],
            vertex2: vec![],
            apex: vec![sun],
        },
        Pattern::Yod {
            base1: vec![],
            base2: vec![],
            apex: vec![],
        },
        Pattern::GrandTrine {
            vertices: vec![vec![sun], vec![sun]],
        },
        Pattern::GrandCross {
            vertices: vec![vec![sun], vec![], vec![sun], vec![sun]],
        },
        Pattern::Kite {
            vertices: vec![vec![sun], vec![sun], vec![sun]],
            apex: vec![],
        },
        Pattern::MysticRectangle { vertices: vec![] },
        Pattern::Stellium {
            bodies: vec![sun, get(&bodies, Body::Venus)],
        },
        Pattern::ChartShape {
            shape: Some("bowl".to_string()),
            bodies: bodies.iter().collect(),
        },
    ];
    for pattern in &patterns {
        assert!(
            derive_lines(pattern).is_empty(),
            "{} should draw no lines",
            pattern.kind()
        );
    }
}

#[test]
fn test_pattern_bodies_are_deduplicated() {
    let bodies = chart();
    let sun = get(&bodies, Body::Sun);
    let pattern = Pattern::Kite {
        vertices: vec![vec![sun], vec![get(&bodies, Body::Mars)], vec![sun]],
        apex: vec![get(&bodies, Body::Venus)],
    };
    let names: Vec<Body> = pattern.bodies().iter().map(|b| b.name).collect();
    assert_eq!(names, vec![Body::Sun, Body::Mars, Body::Venus]);
}

#[test]
fn test_pattern_kind_labels() {
    assert_eq!(PatternKind::from_label("T-Square"), Some(PatternKind::TSquare));
    assert_eq!(PatternKind::from_label("t_square"), Some(PatternKind::TSquare));
    assert_eq!(
        PatternKind::from_label("Mystic Rectangle"),
        Some(PatternKind::MysticRectangle)
    );
    assert_eq!(PatternKind::from_label("hexagram"), None);
    assert_eq!(PatternKind::GrandTrine.to_string(), "Grand Trine");
}

#[test]
fn test_pattern_input_structured_record() {
    let input: PatternInput = serde_json::from_str(
        r#"{"type": "t_square", "apex": ["Moon"], "vertex1": ["Mercury"], "vertex2": ["Pluto"]}"#,
    )
    .unwrap();
    assert_eq!(
        input,
        PatternInput::Structured(PatternRecord::TSquare {
            apex: vec!["Moon".to_string()],
            vertex1: vec!["Mercury".to_string()],
            vertex2: vec!["Pluto".to_string()],
        })
    );

    let bodies = chart();
    let pattern = input.resolve(&bodies).unwrap();
    assert_eq!(pattern.kind(), PatternKind::TSquare);
    assert_eq!(pattern.edges().len(), 3);
}

#[test]
fn test_pattern_input_legacy_and_unknown() {
    let legacy: PatternInput = serde_json::from_str(
        r#"{"type": "T-Square", "description": "Mercury opposite Pluto, both square Moon"}"#,
    )
    .unwrap();
    assert!(legacy.is_legacy());

    let unknown: PatternInput = serde_json::from_str(r#"{"type": "bowl_shape"}"#).unwrap();
    assert_eq!(
        unknown,
        PatternInput::Unrecognized {
            kind: Some("bowl_shape".to_string())
        }
    );

    let unknown_roles: PatternInput =
        serde_json::from_str(r#"{"type": "hexagram", "planets": ["Sun"]}"#).unwrap();
    assert!(matches!(unknown_roles, PatternInput::Unrecognized { .. }));
    assert!(unknown_roles.resolve(&chart()).is_none());
}

#[test]
fn test_pattern_record_drops_unknown_body_names() {
    let record = PatternRecord::Stellium {
        planets: vec![
            "Sun".to_string(),
            "Chiron".to_string(),
            "Venus".to_string(),
        ],
    };
    let bodies = chart();
    let names: Vec<Body> = record
        .resolve(&bodies)
        .bodies()
        .iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec![Body::Sun, Body::Venus]);
}

#[test]
fn test_chart_shape_without_planets_covers_chart() {
    let bodies = chart();
    let record = PatternRecord::ChartShape {
        shape: Some("bucket".to_string()),
        planets: vec![],
    };
    let pattern = record.resolve(&bodies);
    assert_eq!(pattern.bodies().len(), bodies.len());
    assert!(pattern.span().is_some());
}

#[test]
fn test_snapshot_edges_skip_legacy_when_disabled() {
    let patterns: Vec<PatternInput> = serde_json::from_str(
        r#"[
            {"type": "grand_trine", "vertices": [["Sun"], ["Mars"], ["Jupiter"]]},
            {"type": "T-Square", "description": "Mercury opposite Pluto, both square Moon"}
        ]"#,
    )
    .unwrap();
    let snapshot = ChartSnapshot::new(chart(), 0.0).with_patterns(patterns);

    assert_eq!(snapshot.edges(true).len(), 6);
    assert_eq!(snapshot.edges(false).len(), 3);
}

#[test]
fn test_pattern_record_accepts_single_names() {
    let input: PatternInput = serde_json::from_str(
        r#"{"type": "t_square", "apex": "Moon", "vertex1": ["Mercury"], "vertex2": "Pluto"}"#,
    )
    .unwrap();
    assert_eq!(
        input,
        PatternInput::Structured(PatternRecord::TSquare {
            apex: vec!["Moon".to_string()],
            vertex1: vec!["Mercury".to_string()],
            vertex2: vec!["Pluto".to_string()],
        })
    );

    let bodies = chart();
    assert_eq!(
        input.resolve(&bodies).unwrap().edges(),
        vec![
            edge(Body::Mercury, Body::Pluto, AspectType::Opposition),
            edge(Body::Moon, Body::Mercury, AspectType::Square),
            edge(Body::Moon, Body::Pluto, AspectType::Square),
        ]
    );

    let kite: PatternInput = serde_json::from_str(
        r#"{"type": "kite", "apex": "Venus", "vertices": ["Sun", ["Mars"], "Jupiter"]}"#,
    )
    .unwrap();
    assert_eq!(kite.resolve(&bodies).unwrap().edges().len(), 6);
}

#[test]
fn test_pattern_record_accepts_display_labels() {
    let input: PatternInput = serde_json::from_str(
        r#"{"type": "T-Square", "apex": ["Moon"], "vertex1": ["Mercury"], "vertex2": ["Pluto"]}"#,
    )
    .unwrap();
    assert!(matches!(
        input,
        PatternInput::Structured(PatternRecord::TSquare { .. })
    ));
    assert_eq!(input.resolve(&chart()).unwrap().edges().len(), 3);

    let trine: PatternInput = serde_json::from_str(
        r#"{"type": "Grand Trine", "vertices": [["Sun"], ["Mars"], ["Jupiter"]]}"#,
    )
    .unwrap();
    let trine_chart = chart();
    let pattern = trine.resolve(&trine_chart).unwrap();
    assert_eq!(pattern.kind(), PatternKind::GrandTrine);
    assert_eq!(pattern.edges().len(), 3);
}

#[test]
fn test_kite_opposition_needs_measured_opposite() {
    // The vertex facing the apex has no degree; neither sextile vertex may
    // take its place
    let sun = CelestialBody::new(Body::Sun, 0.0);
    let moon = CelestialBody::new(Body::Moon, 60.0);
    let mars = CelestialBody {
        name: Body::Mars,
        degree: None,
        house: None,
        is_retrograde: false,
    };
    let venus = CelestialBody::new(Body::Venus, 300.0);

    let edges = kite_lines(&[vec![&moon], vec![&mars], vec![&venus]], &vec![&sun]);
    assert_eq!(
        edges[3..],
        [
            edge(Body::Sun, Body::Moon, AspectType::Sextile),
            edge(Body::Sun, Body::Mars, AspectType::Sextile),
            edge(Body::Sun, Body::Venus, AspectType::Sextile),
        ]
    );
}
