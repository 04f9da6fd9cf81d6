//! Wire forms of a pattern and their normalization into [`Pattern`].

use super::legacy;
use super::types::{Pattern, PatternKind, Role};
use crate::bodies::{Body, CelestialBody};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A role written either as one name or as a list of names.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(names: OneOrMany) -> Self {
        match names {
            OneOrMany::One(name) => vec![name],
            OneOrMany::Many(names) => names,
        }
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    OneOrMany::deserialize(deserializer).map(Vec::from)
}

fn each_one_or_many<'de, D>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let vertices = Vec::<OneOrMany>::deserialize(deserializer)?;
    Ok(vertices.into_iter().map(Vec::from).collect())
}

/// Structured pattern record as produced by the backend pattern detector.
///
/// Every role is a body name or a list of body names; only the first name is
/// drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PatternRecord {
    ChartShape {
        #[serde(default)]
        shape: Option<String>,
        #[serde(default, deserialize_with = "one_or_many")]
        planets: Vec<String>,
    },
    Stellium {
        #[serde(default, deserialize_with = "one_or_many")]
        planets: Vec<String>,
    },
    TSquare {
        #[serde(default, deserialize_with = "one_or_many")]
        apex: Vec<String>,
        #[serde(default, deserialize_with = "one_or_many")]
        vertex1: Vec<String>,
        #[serde(default, deserialize_with = "one_or_many")]
        vertex2: Vec<String>,
    },
    GrandTrine {
        #[serde(default, deserialize_with = "each_one_or_many")]
        vertices: Vec<Vec<String>>,
    },
    GrandCross {
        #[serde(default, deserialize_with = "each_one_or_many")]
        vertices: Vec<Vec<String>>,
    },
    Yod {
        #[serde(default, deserialize_with = "one_or_many")]
        apex: Vec<String>,
        #[serde(default, deserialize_with = "one_or_many")]
        base1: Vec<String>,
        #[serde(default, deserialize_with = "one_or_many")]
        base2: Vec<String>,
    },
    Kite {
        #[serde(default, deserialize_with = "one_or_many")]
        apex: Vec<String>,
        #[serde(default, deserialize_with = "each_one_or_many")]
        vertices: Vec<Vec<String>>,
    },
    MysticRectangle {
        #[serde(default, deserialize_with = "each_one_or_many")]
        vertices: Vec<Vec<String>>,
    },
}

/// Older payloads describe a pattern only in prose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyPattern {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// A pattern entry exactly as it came over the wire.
///
/// Deserializing never fails: anything that is neither a structured record
/// nor a legacy description ends up as `Unrecognized` and draws nothing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum PatternInput {
    Structured(PatternRecord),
    Legacy(LegacyPattern),
    Unrecognized { kind: Option<String> },
}

/// Keys that mark an entry as a structured record.
const ROLE_KEYS: &[&str] = &[
    "planets", "apex", "vertex1", "vertex2", "base1", "base2", "vertices",
];

impl From<Value> for PatternInput {
    fn from(mut value: Value) -> Self {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string);
        let description = value
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string);
        let has_roles = value
            .as_object()
            .map_or(false, |obj| ROLE_KEYS.iter().any(|key| obj.contains_key(*key)));

        let legacy = |description: String| {
            PatternInput::Legacy(LegacyPattern {
                kind: kind.clone().unwrap_or_default(),
                description,
            })
        };

        if !has_roles {
            if let Some(description) = description.clone() {
                return legacy(description);
            }
        }

        // structured records take the same labels as legacy ones ("T-Square")
        if let Some(canonical) = kind.as_deref().and_then(PatternKind::from_label) {
            if let Some(obj) = value.as_object_mut() {
                obj.insert("type".to_string(), Value::from(canonical.key()));
            }
        }

        match serde_json::from_value::<PatternRecord>(value) {
            Ok(record) => PatternInput::Structured(record),
            Err(err) => match description {
                Some(description) => legacy(description),
                None => {
                    log::debug!("Unrecognized pattern entry {:?}: {}", kind, err);
                    PatternInput::Unrecognized { kind: kind.clone() }
                }
            },
        }
    }
}

impl PatternInput {
    pub fn is_legacy(&self) -> bool {
        matches!(self, PatternInput::Legacy(_))
    }

    /// Normalize into the canonical pattern, borrowing from `bodies`.
    pub fn resolve<'a>(&self, bodies: &'a [CelestialBody]) -> Option<Pattern<'a>> {
        match self {
            PatternInput::Structured(record) => Some(record.resolve(bodies)),
            PatternInput::Legacy(pattern) => {
                #[allow(deprecated)]
                let resolved = legacy::parse_legacy_pattern(&pattern.kind, &pattern.description, bodies);
                resolved
            }
            PatternInput::Unrecognized { kind } => {
                log::debug!("Skipping unrecognized pattern type {:?}", kind);
                None
            }
        }
    }
}

impl PatternRecord {
    pub fn resolve<'a>(&self, bodies: &'a [CelestialBody]) -> Pattern<'a> {
        let role = |names: &[String]| lookup(names, bodies);
        let roles = |vertices: &[Vec<String>]| -> Vec<Role<'a>> {
            vertices.iter().map(|v| lookup(v, bodies)).collect()
        };

        match self {
            PatternRecord::ChartShape { shape, planets } => {
                // no planet list means the shape covers the whole chart
                let bodies = if planets.is_empty() {
                    bodies.iter().collect()
                } else {
                    role(planets)
                };
                Pattern::ChartShape {
                    shape: shape.clone(),
                    bodies,
                }
            }
            PatternRecord::Stellium { planets } => Pattern::Stellium {
                bodies: role(planets),
            },
            PatternRecord::TSquare {
                apex,
                vertex1,
                vertex2,
            } => Pattern::TSquare {
                vertex1: role(vertex1),
                vertex2: role(vertex2),
                apex: role(apex),
            },
            PatternRecord::GrandTrine { vertices } => Pattern::GrandTrine {
                vertices: roles(vertices),
            },
            PatternRecord::GrandCross { vertices } => Pattern::GrandCross {
                vertices: roles(vertices),
            },
            PatternRecord::Yod { apex, base1, base2 } => Pattern::Yod {
                base1: role(base1),
                base2: role(base2),
                apex: role(apex),
            },
            PatternRecord::Kite { apex, vertices } => Pattern::Kite {
                vertices: roles(vertices),
                apex: role(apex),
            },
            PatternRecord::MysticRectangle { vertices } => Pattern::MysticRectangle {
                vertices: roles(vertices),
            },
        }
    }
}

/// Find a body in the snapshot by name.
pub(crate) fn find_body(body: Body, bodies: &[CelestialBody]) -> Option<&CelestialBody> {
    bodies.iter().find(|b| b.name == body)
}

/// Resolve role names against the snapshot, dropping names that are unknown
/// or absent from the chart.
fn lookup<'a>(names: &[String], bodies: &'a [CelestialBody]) -> Role<'a> {
    names
        .iter()
        .filter_map(|name| {
            let found = name
                .parse::<Body>()
                .ok()
                .and_then(|body| find_body(body, bodies));
            if found.is_none() {
                log::debug!("Pattern role references unknown body {:?}", name);
            }
            found
        })
        .collect()
}
