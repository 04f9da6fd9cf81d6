use crate::bodies::{Body, CelestialBody, Sign};
use crate::geometry::normalize_degrees;

/// Get house index (0-11) for a longitude given the twelve cusps.
pub fn get_house_index(lon: f64, cusps: &[f64]) -> Option<u8> {
    if cusps.len() != 12 {
        return None;
    }
    let lon = normalize_degrees(lon);

    for i in 0..12 {
        let current_cusp = normalize_degrees(cusps[i]);
        let next_cusp = normalize_degrees(cusps[(i + 1) % 12]);

        // Handle wrap-around (next cusp < current cusp)
        let inside = if next_cusp < current_cusp {
            lon >= current_cusp || lon < next_cusp
        } else {
            lon >= current_cusp && lon < next_cusp
        };
        if inside {
            return Some(i as u8);
        }
    }

    // Degenerate cusps (all equal); default to house 1
    Some(0)
}

/// Equal 30° houses starting at the ascendant.
pub fn equal_house_cusps(ascendant: f64) -> Vec<f64> {
    (0..12)
        .map(|i| normalize_degrees(ascendant + i as f64 * 30.0))
        .collect()
}

/// Sign ring item
#[derive(Debug, Clone, PartialEq)]
pub struct SignRingItem {
    pub sign: Sign,
    pub start_lon: f64,
    pub end_lon: f64,
}

/// House ring item
#[derive(Debug, Clone, PartialEq)]
pub struct HouseRingItem {
    /// 1-12
    pub house: u8,
    pub lon: f64,
    /// Longitude halfway to the next cusp, where the house number goes.
    pub mid_lon: f64,
}

/// Planet ring item
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetRingItem {
    pub body: Body,
    pub lon: f64,
    pub retrograde: bool,
    pub sign: Sign,
    pub sign_degree: f64,
    /// 1-12; taken from the chart service when given, else from the cusps.
    pub house: Option<u8>,
}

/// Build static zodiac items (12 signs)
pub fn build_static_zodiac_items() -> Vec<SignRingItem> {
    Sign::ALL
        .iter()
        .map(|sign| SignRingItem {
            sign: *sign,
            start_lon: sign.start_degree(),
            end_lon: sign.start_degree() + 30.0,
        })
        .collect()
}

/// Build house cusp items. `cusps` falls back to equal houses when it does not
/// hold exactly twelve entries.
pub fn build_house_items(cusps: Option<&[f64]>, ascendant: f64) -> Vec<HouseRingItem> {
    let cusps: Vec<f64> = match cusps {
        Some(c) if c.len() == 12 => c.iter().copied().map(normalize_degrees).collect(),
        _ => equal_house_cusps(ascendant),
    };

    cusps
        .iter()
        .enumerate()
        .map(|(i, lon)| {
            let next = cusps[(i + 1) % 12];
            let diff = if next < *lon {
                360.0 + next - lon
            } else {
                next - lon
            };
            HouseRingItem {
                house: (i + 1) as u8,
                lon: *lon,
                mid_lon: normalize_degrees(lon + diff / 2.0),
            }
        })
        .collect()
}

/// Build planet items for every body with a usable degree.
pub fn build_planet_items(bodies: &[CelestialBody], cusps: &[f64]) -> Vec<PlanetRingItem> {
    bodies
        .iter()
        .filter_map(|body| {
            let lon = body.longitude()?;
            Some(PlanetRingItem {
                body: body.name,
                lon,
                retrograde: body.is_retrograde,
                sign: Sign::from_degree(lon),
                sign_degree: lon % 30.0,
                house: body
                    .house
                    .or_else(|| get_house_index(lon, cusps).map(|i| i + 1)),
            })
        })
        .collect()
}
