//! Celestial bodies and zodiac signs as delivered by the chart service.

use crate::geometry::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every point a chart can place on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Ascendant,
    Midheaven,
    NorthNode,
}

impl Body {
    pub const ALL: [Body; 13] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::Ascendant,
        Body::Midheaven,
        Body::NorthNode,
    ];

    /// Display name as used by the chart service ("North Node", not "NorthNode").
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Ascendant => "Ascendant",
            Body::Midheaven => "Midheaven",
            Body::NorthNode => "North Node",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Body::Sun => "☉",
            Body::Moon => "☽",
            Body::Mercury => "☿",
            Body::Venus => "♀",
            Body::Mars => "♂",
            Body::Jupiter => "♃",
            Body::Saturn => "♄",
            Body::Uranus => "♅",
            Body::Neptune => "♆",
            Body::Pluto => "♇",
            Body::Ascendant => "As",
            Body::Midheaven => "Mc",
            Body::NorthNode => "☊",
        }
    }

    /// The ten planets. Chart angles and the lunar node are excluded.
    pub fn is_classical_planet(&self) -> bool {
        !matches!(self, Body::Ascendant | Body::Midheaven | Body::NorthNode)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name is not one of the known bodies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown body name: {0}")]
pub struct UnknownBody(pub String);

impl FromStr for Body {
    type Err = UnknownBody;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "North Node", "north_node" and "NorthNode" all collapse to "northnode"
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let body = match key.as_str() {
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
            "ascendant" | "asc" => Body::Ascendant,
            "midheaven" | "mc" => Body::Midheaven,
            "northnode" | "node" | "truenode" => Body::NorthNode,
            _ => return Err(UnknownBody(s.to_string())),
        };
        Ok(body)
    }
}

impl TryFrom<String> for Body {
    type Error = UnknownBody;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Body> for String {
    fn from(body: Body) -> Self {
        body.name().to_string()
    }
}

/// Zodiac signs in ecliptic order, starting at 0° Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Sign containing the given ecliptic longitude.
    pub fn from_degree(degree: f64) -> Self {
        let index = (normalize_degrees(degree) / 30.0).floor() as usize;
        Self::ALL[index.min(11)]
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Longitude at which the sign begins.
    pub fn start_degree(&self) -> f64 {
        self.index() as f64 * 30.0
    }

    pub fn name(&self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Sign::Aries => "♈",
            Sign::Taurus => "♉",
            Sign::Gemini => "♊",
            Sign::Cancer => "♋",
            Sign::Leo => "♌",
            Sign::Virgo => "♍",
            Sign::Libra => "♎",
            Sign::Scorpio => "♏",
            Sign::Sagittarius => "♐",
            Sign::Capricorn => "♑",
            Sign::Aquarius => "♒",
            Sign::Pisces => "♓",
        }
    }
}

/// A body's placement in one chart snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    pub name: Body,
    /// Ecliptic longitude. `None` when the service did not supply one.
    #[serde(default)]
    pub degree: Option<f64>,
    #[serde(default)]
    pub house: Option<u8>,
    #[serde(default)]
    pub is_retrograde: bool,
}

impl CelestialBody {
    pub fn new(name: Body, degree: f64) -> Self {
        Self {
            name,
            degree: Some(degree),
            house: None,
            is_retrograde: false,
        }
    }

    /// Normalized longitude in [0, 360), or `None` for a missing or non-finite degree.
    pub fn longitude(&self) -> Option<f64> {
        self.degree
            .filter(|d| d.is_finite())
            .map(normalize_degrees)
    }

    pub fn sign(&self) -> Option<Sign> {
        self.longitude().map(Sign::from_degree)
    }

    /// Position inside the sign, 0-30.
    pub fn sign_degree(&self) -> Option<f64> {
        self.longitude().map(|lon| lon % 30.0)
    }
}
