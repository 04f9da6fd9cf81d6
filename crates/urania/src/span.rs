//! Arc measurements over groups of bodies: the occupied arc of the chart
//! (chart shape) and the arc a stellium covers.

use crate::bodies::CelestialBody;
use serde::{Deserialize, Serialize};

/// An arc measured in zodiacal degrees, running from `start_deg` to `end_deg`
/// in increasing longitude. `end_deg` may exceed 360 when the arc crosses 0°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngularSpan {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl AngularSpan {
    /// Degrees covered going from start to end.
    pub fn extent(&self) -> f64 {
        let extent = self.end_deg - self.start_deg;
        if extent < 0.0 {
            extent + 360.0
        } else {
            extent
        }
    }

    pub fn crosses_zero(&self) -> bool {
        self.end_deg >= 360.0 || self.end_deg < self.start_deg
    }
}

/// Largest empty arc between consecutive sorted longitudes.
struct Gap {
    start: f64,
    end: f64,
    wraps: bool,
}

/// Adjacent gaps are checked first, then the wrap gap; a later gap only wins
/// when strictly larger.
fn largest_gap(sorted: &[f64]) -> Option<Gap> {
    let (first, last) = (*sorted.first()?, *sorted.last()?);

    let mut best: Option<(f64, Gap)> = None;
    for pair in sorted.windows(2) {
        let size = pair[1] - pair[0];
        if best.as_ref().map_or(true, |(max, _)| size > *max) {
            best = Some((
                size,
                Gap {
                    start: pair[0],
                    end: pair[1],
                    wraps: false,
                },
            ));
        }
    }

    let wrap_size = first + 360.0 - last;
    match best {
        Some((max, gap)) if wrap_size <= max => Some(gap),
        _ => Some(Gap {
            start: last,
            end: first,
            wraps: true,
        }),
    }
}

fn sorted_longitudes<'a>(bodies: impl IntoIterator<Item = &'a CelestialBody>) -> Vec<f64> {
    let mut degrees: Vec<f64> = bodies
        .into_iter()
        .filter_map(CelestialBody::longitude)
        .collect();
    degrees.sort_by(|a, b| a.total_cmp(b));
    degrees
}

/// Occupied arc of the chart: the complement of the widest empty gap between
/// the ten classical planets.
///
/// Returns `None` with fewer than two qualifying planets.
pub fn occupied_span<'a>(bodies: impl IntoIterator<Item = &'a CelestialBody>) -> Option<AngularSpan> {
    let sorted = sorted_longitudes(
        bodies
            .into_iter()
            .filter(|body| body.name.is_classical_planet()),
    );
    if sorted.len() < 2 {
        return None;
    }

    let gap = largest_gap(&sorted)?;
    if gap.wraps {
        Some(AngularSpan {
            start_deg: sorted[0],
            end_deg: sorted[sorted.len() - 1],
        })
    } else {
        Some(AngularSpan {
            start_deg: gap.end % 360.0,
            end_deg: gap.start + 360.0,
        })
    }
}

/// Plain min/max of the stellium's degrees.
///
/// This does not know about the 0° boundary: bodies at 355° and 5° give
/// `5..355`. Use [`stellium_span_circular`] for the arc that actually
/// contains the group.
pub fn stellium_span<'a>(bodies: impl IntoIterator<Item = &'a CelestialBody>) -> Option<AngularSpan> {
    let sorted = sorted_longitudes(bodies);
    if sorted.len() < 2 {
        return None;
    }
    Some(AngularSpan {
        start_deg: sorted[0],
        end_deg: sorted[sorted.len() - 1],
    })
}

/// Smallest arc containing every body of the group.
pub fn stellium_span_circular<'a>(
    bodies: impl IntoIterator<Item = &'a CelestialBody>,
) -> Option<AngularSpan> {
    let sorted = sorted_longitudes(bodies);
    if sorted.len() < 2 {
        return None;
    }

    let gap = largest_gap(&sorted)?;
    let span = if gap.wraps {
        AngularSpan {
            start_deg: gap.end,
            end_deg: gap.start,
        }
    } else {
        AngularSpan {
            start_deg: gap.end,
            end_deg: gap.start + 360.0,
        }
    };
    Some(span)
}
