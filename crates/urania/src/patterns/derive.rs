//! Pattern to edge-list projection, one function per pattern variant.

use super::types::{Pattern, Role};
use crate::aspects::{AspectEdge, AspectType};
use crate::bodies::CelestialBody;
use crate::geometry::angular_separation;

/// Project a pattern into the aspect lines that draw it.
///
/// Each role contributes only its first body. A missing or empty role yields
/// an empty list rather than a partial figure.
pub fn derive_lines(pattern: &Pattern<'_>) -> Vec<AspectEdge> {
    match pattern {
        Pattern::ChartShape { .. } | Pattern::Stellium { .. } => Vec::new(),
        Pattern::TSquare {
            vertex1,
            vertex2,
            apex,
        } => t_square_lines(vertex1, vertex2, apex),
        Pattern::Yod { base1, base2, apex } => yod_lines(base1, base2, apex),
        Pattern::GrandTrine { vertices } => grand_trine_lines(vertices),
        Pattern::GrandCross { vertices } => grand_cross_lines(vertices),
        Pattern::Kite { vertices, apex } => kite_lines(vertices, apex),
        Pattern::MysticRectangle { vertices } => mystic_rectangle_lines(vertices),
    }
}

fn first<'a>(role: &Role<'a>) -> Option<&'a CelestialBody> {
    role.first().copied()
}

/// First body of each of the first `count` vertices.
fn representatives<'a>(vertices: &[Role<'a>], count: usize) -> Option<Vec<&'a CelestialBody>> {
    if vertices.len() < count {
        return None;
    }
    vertices[..count].iter().map(first).collect()
}

fn edge(from: &CelestialBody, to: &CelestialBody, aspect_type: AspectType) -> AspectEdge {
    AspectEdge::new(from.name, to.name, aspect_type)
}

/// Opposition across the base, squares from the apex.
pub fn t_square_lines(vertex1: &Role<'_>, vertex2: &Role<'_>, apex: &Role<'_>) -> Vec<AspectEdge> {
    let (Some(v1), Some(v2), Some(apex)) = (first(vertex1), first(vertex2), first(apex)) else {
        return Vec::new();
    };
    vec![
        edge(v1, v2, AspectType::Opposition),
        edge(apex, v1, AspectType::Square),
        edge(apex, v2, AspectType::Square),
    ]
}

/// Sextile across the base, quincunxes from the apex.
pub fn yod_lines(base1: &Role<'_>, base2: &Role<'_>, apex: &Role<'_>) -> Vec<AspectEdge> {
    let (Some(b1), Some(b2), Some(apex)) = (first(base1), first(base2), first(apex)) else {
        return Vec::new();
    };
    vec![
        edge(b1, b2, AspectType::Sextile),
        edge(apex, b1, AspectType::Quincunx),
        edge(apex, b2, AspectType::Quincunx),
    ]
}

fn trine_ring(tri: &[&CelestialBody]) -> Vec<AspectEdge> {
    (0..tri.len())
        .map(|i| edge(tri[i], tri[(i + 1) % tri.len()], AspectType::Trine))
        .collect()
}

pub fn grand_trine_lines(vertices: &[Role<'_>]) -> Vec<AspectEdge> {
    match representatives(vertices, 3) {
        Some(tri) => trine_ring(&tri),
        None => Vec::new(),
    }
}

/// Oppositions across both diagonals, then squares around the cross.
pub fn grand_cross_lines(vertices: &[Role<'_>]) -> Vec<AspectEdge> {
    let Some(quad) = representatives(vertices, 4) else {
        return Vec::new();
    };

    let mut edges = vec![
        edge(quad[0], quad[2], AspectType::Opposition),
        edge(quad[1], quad[3], AspectType::Opposition),
    ];
    for i in 0..4 {
        edges.push(edge(quad[i], quad[(i + 1) % 4], AspectType::Square));
    }
    edges
}

/// Grand trine plus the apex tied to each trine vertex.
///
/// The apex sits opposite one of the three vertices; that edge is typed as an
/// opposition, found by measuring which vertex lies closest to 180° from the
/// apex. The other two apex edges are sextiles.
pub fn kite_lines(vertices: &[Role<'_>], apex: &Role<'_>) -> Vec<AspectEdge> {
    let (Some(tri), Some(apex)) = (representatives(vertices, 3), first(apex)) else {
        return Vec::new();
    };

    let opposite = opposite_vertex(apex, &tri);
    if opposite.is_none() {
        log::debug!(
            "Kite apex {} has no vertex measured in opposition; typing all apex edges as sextile",
            apex.name
        );
    }

    let mut edges = trine_ring(&tri);
    for (i, vertex) in tri.iter().enumerate() {
        let aspect_type = if opposite == Some(i) {
            AspectType::Opposition
        } else {
            AspectType::Sextile
        };
        edges.push(edge(apex, vertex, aspect_type));
    }
    edges
}

/// Index of the vertex whose separation from the apex is nearest 180°.
///
/// A vertex only qualifies when its separation lies closer to an opposition
/// than to a sextile, so a vertex without a degree is never replaced by one
/// of the sextile vertices.
fn opposite_vertex(apex: &CelestialBody, tri: &[&CelestialBody]) -> Option<usize> {
    let apex_lon = apex.longitude()?;
    tri.iter()
        .enumerate()
        .filter_map(|(i, v)| v.longitude().map(|lon| (i, angular_separation(apex_lon, lon))))
        .filter(|(_, sep)| {
            AspectType::nearest(*sep, &[AspectType::Sextile, AspectType::Opposition])
                == Some(AspectType::Opposition)
        })
        .min_by(|a, b| (180.0 - a.1).total_cmp(&(180.0 - b.1)))
        .map(|(i, _)| i)
}

/// Oppositions across both diagonals, then the four sides.
///
/// Sides alternate sextile/trine. When both ends have degrees the side is
/// typed by its measured separation; otherwise the alternation starts with a
/// sextile on the first side.
pub fn mystic_rectangle_lines(vertices: &[Role<'_>]) -> Vec<AspectEdge> {
    let Some(quad) = representatives(vertices, 4) else {
        return Vec::new();
    };

    let mut edges = vec![
        edge(quad[0], quad[2], AspectType::Opposition),
        edge(quad[1], quad[3], AspectType::Opposition),
    ];
    for i in 0..4 {
        let (a, b) = (quad[i], quad[(i + 1) % 4]);
        let alternating = if i % 2 == 0 {
            AspectType::Sextile
        } else {
            AspectType::Trine
        };
        let aspect_type = match (a.longitude(), b.longitude()) {
            (Some(la), Some(lb)) => AspectType::nearest(
                angular_separation(la, lb),
                &[AspectType::Sextile, AspectType::Trine],
            )
            .unwrap_or(alternating),
            _ => alternating,
        };
        edges.push(edge(a, b, aspect_type));
    }
    edges
}
