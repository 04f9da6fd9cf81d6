use urania::{Body, CelestialBody, Sign};

#[test]
fn test_body_name_parsing() {
    assert_eq!("Sun".parse::<Body>().unwrap(), Body::Sun);
    assert_eq!("north_node".parse::<Body>().unwrap(), Body::NorthNode);
    assert_eq!("North Node".parse::<Body>().unwrap(), Body::NorthNode);
    assert_eq!("ASC".parse::<Body>().unwrap(), Body::Ascendant);
    assert_eq!("mc".parse::<Body>().unwrap(), Body::Midheaven);
    assert!("Chiron".parse::<Body>().is_err());
}

#[test]
fn test_body_serde_uses_display_name() {
    let json = serde_json::to_string(&Body::NorthNode).unwrap();
    assert_eq!(json, "\"North Node\"");
    let body: Body = serde_json::from_str("\"pluto\"").unwrap();
    assert_eq!(body, Body::Pluto);
    assert!(serde_json::from_str::<Body>("\"Vulcan\"").is_err());
}

#[test]
fn test_classical_planets() {
    let planets = Body::ALL.iter().filter(|b| b.is_classical_planet()).count();
    assert_eq!(planets, 10);
    assert!(!Body::Ascendant.is_classical_planet());
}

#[test]
fn test_sign_from_degree() {
    assert_eq!(Sign::from_degree(0.0), Sign::Aries);
    assert_eq!(Sign::from_degree(30.0), Sign::Taurus);
    assert_eq!(Sign::from_degree(359.99), Sign::Pisces);
    assert_eq!(Sign::from_degree(-1.0), Sign::Pisces);
    assert_eq!(Sign::from_degree(720.0 + 95.0), Sign::Cancer);
}

#[test]
fn test_celestial_body_longitude() {
    let body = CelestialBody::new(Body::Venus, 395.0);
    assert_eq!(body.longitude(), Some(35.0));
    assert_eq!(body.sign(), Some(Sign::Taurus));
    assert_eq!(body.sign_degree(), Some(5.0));

    let broken = CelestialBody {
        name: Body::Mars,
        degree: Some(f64::NAN),
        house: None,
        is_retrograde: false,
    };
    assert_eq!(broken.longitude(), None);
    assert_eq!(broken.sign(), None);
}
