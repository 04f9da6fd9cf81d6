use crate::bodies::{Body, CelestialBody};
use crate::chart::snapshot::ChartSnapshot;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when loading a chart payload
#[derive(Error, Debug)]
pub enum ChartInputError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid field value: {0}")]
    InvalidFieldValue(String),
}

/// Load a chart snapshot from the chart service's JSON payload.
///
/// A missing `ascendant` is taken from the Ascendant body when the body list
/// carries one.
pub fn load_chart_from_json(json: &str) -> Result<ChartSnapshot, ChartInputError> {
    let mut parsed: Value =
        serde_json::from_str(json).map_err(|e| ChartInputError::InvalidJson(e.to_string()))?;

    validate_chart(&parsed)?;
    fill_ascendant(&mut parsed)?;

    let snapshot: ChartSnapshot = serde_json::from_value(parsed)
        .map_err(|e| ChartInputError::ValidationError(e.to_string()))?;

    let legacy = snapshot.patterns.iter().filter(|p| p.is_legacy()).count();
    if legacy > 0 {
        log::warn!(
            "Chart carries {} free-text pattern description(s); structured records are preferred",
            legacy
        );
    }
    log::debug!(
        "Loaded chart: {} bodies, {} patterns, ascendant {:.2}",
        snapshot.bodies.len(),
        snapshot.patterns.len(),
        snapshot.ascendant
    );

    Ok(snapshot)
}

/// Validate a chart payload
fn validate_chart(chart: &Value) -> Result<(), ChartInputError> {
    let obj = chart.as_object().ok_or_else(|| {
        ChartInputError::ValidationError("Chart payload must be an object".to_string())
    })?;

    let bodies = obj
        .get("bodies")
        .ok_or_else(|| ChartInputError::MissingField("bodies".to_string()))?;
    let bodies_array = bodies.as_array().ok_or_else(|| {
        ChartInputError::InvalidFieldValue("bodies must be an array".to_string())
    })?;
    for (index, body) in bodies_array.iter().enumerate() {
        validate_body(body, index)?;
    }

    if let Some(ascendant) = obj.get("ascendant") {
        if !ascendant.is_null() && !ascendant.as_f64().map_or(false, f64::is_finite) {
            return Err(ChartInputError::InvalidFieldValue(
                "ascendant must be a finite number".to_string(),
            ));
        }
    }

    if let Some(cusps) = obj.get("houseCusps") {
        if !cusps.is_null() {
            let cusps_array = cusps.as_array().ok_or_else(|| {
                ChartInputError::InvalidFieldValue("houseCusps must be an array".to_string())
            })?;
            if cusps_array.len() != 12 {
                return Err(ChartInputError::InvalidFieldValue(format!(
                    "houseCusps must have 12 entries, got {}",
                    cusps_array.len()
                )));
            }
            if !cusps_array.iter().all(Value::is_number) {
                return Err(ChartInputError::InvalidFieldValue(
                    "houseCusps must be an array of numbers".to_string(),
                ));
            }
        }
    }

    if let Some(patterns) = obj.get("patterns") {
        if !patterns.is_null() && !patterns.is_array() {
            return Err(ChartInputError::InvalidFieldValue(
                "patterns must be an array".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validate a body entry
fn validate_body(body: &Value, index: usize) -> Result<(), ChartInputError> {
    let body_obj = body.as_object().ok_or_else(|| {
        ChartInputError::InvalidFieldValue(format!("Body at index {} must be an object", index))
    })?;

    let name = body_obj
        .get("name")
        .ok_or_else(|| ChartInputError::MissingField(format!("bodies[{}].name", index)))?;
    let name_str = name.as_str().ok_or_else(|| {
        ChartInputError::InvalidFieldValue(format!("bodies[{}].name must be a string", index))
    })?;
    if name_str.parse::<Body>().is_err() {
        return Err(ChartInputError::InvalidFieldValue(format!(
            "bodies[{}].name is not a known body: {}",
            index, name_str
        )));
    }

    // an undefined degree is allowed; the body is simply not placed
    if let Some(degree) = body_obj.get("degree") {
        if !degree.is_null() && !degree.is_number() {
            return Err(ChartInputError::InvalidFieldValue(format!(
                "bodies[{}].degree must be a number",
                index
            )));
        }
    }

    if let Some(house) = body_obj.get("house") {
        if !house.is_null() {
            let in_range = house.as_u64().map_or(false, |h| (1..=12).contains(&h));
            if !in_range {
                return Err(ChartInputError::InvalidFieldValue(format!(
                    "bodies[{}].house must be between 1 and 12",
                    index
                )));
            }
        }
    }

    Ok(())
}

/// Default the ascendant from the Ascendant body when the field is absent.
fn fill_ascendant(chart: &mut Value) -> Result<(), ChartInputError> {
    let has_ascendant = chart.get("ascendant").map_or(false, |v| !v.is_null());
    if has_ascendant {
        return Ok(());
    }

    let from_body = chart
        .get("bodies")
        .and_then(Value::as_array)
        .and_then(|bodies| {
            bodies.iter().find_map(|body| {
                let parsed: CelestialBody = serde_json::from_value(body.clone()).ok()?;
                (parsed.name == Body::Ascendant)
                    .then(|| parsed.longitude())
                    .flatten()
            })
        })
        .ok_or_else(|| ChartInputError::MissingField("ascendant".to_string()))?;

    if let Some(obj) = chart.as_object_mut() {
        obj.insert("ascendant".to_string(), Value::from(from_body));
    }
    Ok(())
}
