//! Parser for free-text pattern descriptions from older chart payloads.
//!
//! Grammar, over the token stream produced by [`tokenize`]:
//!
//! ```text
//! apex   := Planet ApexMarker | Both(aspect) Word* Planet
//! member := Planet
//! ```
//!
//! The apex role is only ever filled by one of the two apex forms; every other
//! planet fills the remaining roles in order of first appearance. Text with no
//! recognizable planet names yields no pattern.

use super::input::find_body;
use super::types::{Pattern, PatternKind, Role};
use crate::aspects::AspectType;
use crate::bodies::{Body, CelestialBody};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(
        r"(?i)\(\s*apex\s*\)|\bboth\s+(conjunct|conjunction|sextile|square|trine|opposite|opposition|quincunx|inconjunct)\b|\bnorth\s+node\b|[a-z]+"
    )
    .expect("legacy pattern token regex is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Planet(Body),
    /// `(apex)` written right after a planet.
    ApexMarker,
    /// `both square`, `both quincunx`, ...: the next planet is the apex.
    Both(AspectType),
    Word,
}

/// Fixed planet vocabulary. Abbreviations such as "asc" or "mc" are not
/// recognized in prose; "node" alone is read as the North Node.
fn planet_word(word: &str) -> Option<Body> {
    let body = match word.to_ascii_lowercase().as_str() {
        "sun" => Body::Sun,
        "moon" => Body::Moon,
        "mercury" => Body::Mercury,
        "venus" => Body::Venus,
        "mars" => Body::Mars,
        "jupiter" => Body::Jupiter,
        "saturn" => Body::Saturn,
        "uranus" => Body::Uranus,
        "neptune" => Body::Neptune,
        "pluto" => Body::Pluto,
        "ascendant" => Body::Ascendant,
        "midheaven" => Body::Midheaven,
        "node" => Body::NorthNode,
        _ => return None,
    };
    Some(body)
}

fn aspect_word(word: &str) -> Option<AspectType> {
    let aspect = match word.to_ascii_lowercase().as_str() {
        "conjunct" | "conjunction" => AspectType::Conjunction,
        "sextile" => AspectType::Sextile,
        "square" => AspectType::Square,
        "trine" => AspectType::Trine,
        "opposite" | "opposition" => AspectType::Opposition,
        "quincunx" | "inconjunct" => AspectType::Quincunx,
        _ => return None,
    };
    Some(aspect)
}

pub fn tokenize(text: &str) -> Vec<Token> {
    TOKEN_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?.as_str();
            if whole.starts_with('(') {
                return Some(Token::ApexMarker);
            }
            if let Some(aspect) = caps.get(1) {
                return Some(aspect_word(aspect.as_str()).map_or(Token::Word, Token::Both));
            }
            if whole.to_ascii_lowercase().starts_with("north") && whole.contains(char::is_whitespace) {
                return Some(Token::Planet(Body::NorthNode));
            }
            Some(planet_word(whole).map_or(Token::Word, Token::Planet))
        })
        .collect()
}

/// Planets named in a description, split into the apex (if marked) and the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyRoles {
    pub apex: Option<Body>,
    /// Every distinct planet in order of first appearance, apex included.
    pub ordered: Vec<Body>,
}

impl LegacyRoles {
    /// Planets other than the apex, in order of appearance.
    pub fn members(&self) -> Vec<Body> {
        self.ordered
            .iter()
            .copied()
            .filter(|b| Some(*b) != self.apex)
            .collect()
    }
}

pub fn parse_roles(tokens: &[Token]) -> LegacyRoles {
    let mut roles = LegacyRoles::default();
    let mut expecting_apex = false;

    for (i, token) in tokens.iter().enumerate() {
        match *token {
            Token::Planet(body) => {
                if !roles.ordered.contains(&body) {
                    roles.ordered.push(body);
                }
                let marked = tokens.get(i + 1) == Some(&Token::ApexMarker);
                if roles.apex.is_none() && (expecting_apex || marked) {
                    roles.apex = Some(body);
                }
                expecting_apex = false;
            }
            Token::Both(_) => expecting_apex = true,
            Token::ApexMarker | Token::Word => {}
        }
    }
    roles
}

/// Build a pattern from a legacy `(type, description)` pair.
///
/// Returns `None` for an unknown type or a description without planet names.
#[deprecated(note = "free-text descriptions are a fallback; send structured pattern records")]
pub fn parse_legacy_pattern<'a>(
    kind: &str,
    description: &str,
    bodies: &'a [CelestialBody],
) -> Option<Pattern<'a>> {
    let Some(kind) = PatternKind::from_label(kind) else {
        log::debug!("Unknown legacy pattern type {:?}", kind);
        return None;
    };

    let roles = parse_roles(&tokenize(description));
    if roles.ordered.is_empty() {
        log::debug!("No planet names found in {} description", kind);
        return None;
    }

    let single = |body: Option<Body>| -> Role<'a> {
        body.and_then(|b| find_body(b, bodies)).into_iter().collect()
    };
    let each = |list: &[Body]| -> Vec<Role<'a>> { list.iter().map(|b| single(Some(*b))).collect() };
    let group = |list: &[Body]| -> Role<'a> {
        list.iter().filter_map(|b| find_body(*b, bodies)).collect()
    };

    let members = roles.members();
    let nth = |i: usize| members.get(i).copied();

    let pattern = match kind {
        PatternKind::ChartShape => Pattern::ChartShape {
            shape: None,
            bodies: group(&roles.ordered),
        },
        PatternKind::Stellium => Pattern::Stellium {
            bodies: group(&roles.ordered),
        },
        PatternKind::TSquare => Pattern::TSquare {
            vertex1: single(nth(0)),
            vertex2: single(nth(1)),
            apex: single(roles.apex),
        },
        PatternKind::Yod => Pattern::Yod {
            base1: single(nth(0)),
            base2: single(nth(1)),
            apex: single(roles.apex),
        },
        PatternKind::Kite => Pattern::Kite {
            vertices: each(&members[..members.len().min(3)]),
            apex: single(roles.apex),
        },
        PatternKind::GrandTrine => Pattern::GrandTrine {
            vertices: each(&roles.ordered[..roles.ordered.len().min(3)]),
        },
        PatternKind::GrandCross => Pattern::GrandCross {
            vertices: each(&roles.ordered[..roles.ordered.len().min(4)]),
        },
        PatternKind::MysticRectangle => Pattern::MysticRectangle {
            vertices: each(&roles.ordered[..roles.ordered.len().min(4)]),
        },
    };
    Some(pattern)
}
