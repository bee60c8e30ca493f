//! In-memory administrative boundary data.

use std::collections::BTreeMap;
use std::fmt;

use geo::{BoundingRect, LineString, MultiPolygon, Polygon, Rect, coord};
use serde::Serialize;

/// One attribute value from a boundary feature's table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    Integer(i64),
    Boolean(bool),
    Null,
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(value) => write!(f, "{value}"),
            AttributeValue::Number(value) => write!(f, "{value}"),
            AttributeValue::Integer(value) => write!(f, "{value}"),
            AttributeValue::Boolean(value) => write!(f, "{value}"),
            AttributeValue::Null => write!(f, "null"),
        }
    }
}

/// A single administrative unit: attribute row plus polygon geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub attributes: BTreeMap<String, AttributeValue>,
    pub geometry: MultiPolygon<f64>,
}

impl BoundaryFeature {
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}

/// All features of one layer in a CodAB archive.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryDataset {
    pub layer: String,
    pub features: Vec<BoundaryFeature>,
}

impl BoundaryDataset {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Union of attribute names across all features, sorted.
    pub fn attribute_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .features
            .iter()
            .flat_map(|feature| feature.attributes.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Bounding box of every feature geometry; `None` when all are empty.
    pub fn bounding_box(&self) -> Option<Rect<f64>> {
        self.features
            .iter()
            .filter_map(|feature| feature.geometry.bounding_rect())
            .reduce(|acc, rect| {
                Rect::new(
                    coord! { x: acc.min().x.min(rect.min().x), y: acc.min().y.min(rect.min().y) },
                    coord! { x: acc.max().x.max(rect.max().x), y: acc.max().y.max(rect.max().y) },
                )
            })
    }
}

/// A ring as stored in a polygon record, tagged with its role.
#[derive(Debug, Clone, PartialEq)]
pub enum Ring {
    Outer(Vec<(f64, f64)>),
    Inner(Vec<(f64, f64)>),
}

/// Group rings into polygons: each outer ring opens a polygon and the inner
/// rings that follow it become its holes.
pub fn assemble_polygons(rings: Vec<Ring>) -> Result<MultiPolygon<f64>, String> {
    let mut polygons: Vec<(LineString<f64>, Vec<LineString<f64>>)> = Vec::new();

    for (index, ring) in rings.into_iter().enumerate() {
        match ring {
            Ring::Outer(points) => polygons.push((LineString::from(points), Vec::new())),
            Ring::Inner(points) => match polygons.last_mut() {
                Some((_, holes)) => holes.push(LineString::from(points)),
                None => return Err(format!("inner ring {index} appears before any outer ring")),
            },
        }
    }

    Ok(MultiPolygon::new(
        polygons.into_iter().map(|(exterior, holes)| Polygon::new(exterior, holes)).collect(),
    ))
}
