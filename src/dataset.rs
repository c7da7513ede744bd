use std::io::Read;

use crate::{
    error::{SpheruleError, SpheruleResult},
    geo::GeoPoint,
};

/// The fixed, ordered set of marker coordinates for one session.
///
/// Mirrors the `{"points": [{"x": ..., "y": ...}, ...]}` layout of the
/// source dataset file. Loaded once before setup and never mutated.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GeoDataset {
    pub points: Vec<GeoPoint>,
}

impl GeoDataset {
    pub fn from_reader(r: impl Read) -> SpheruleResult<Self> {
        let dataset: Self = serde_json::from_reader(r)
            .map_err(|e| SpheruleError::dataset(format!("parse points JSON: {e}")))?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn from_slice(bytes: &[u8]) -> SpheruleResult<Self> {
        Self::from_reader(bytes)
    }

    pub fn validate(&self) -> SpheruleResult<()> {
        if self.points.is_empty() {
            return Err(SpheruleError::dataset("dataset has no points"));
        }
        for (i, p) in self.points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(SpheruleError::dataset(format!(
                    "point {i} has non-finite coordinates ({}, {})",
                    p.x, p.y
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points_layout() {
        let json = br#"{"points": [{"x": 0.0, "y": 0.0}, {"x": 1024.5, "y": 512.0}]}"#;
        let dataset = GeoDataset::from_slice(json).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.points[1].x, 1024.5);
    }

    #[test]
    fn rejects_empty_dataset() {
        let err = GeoDataset::from_slice(br#"{"points": []}"#).unwrap_err();
        assert!(err.to_string().contains("no points"));
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let dataset = GeoDataset {
            points: vec![GeoPoint {
                x: f64::NAN,
                y: 1.0,
            }],
        };
        let err = dataset.validate().unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn malformed_json_is_a_dataset_error() {
        let err = GeoDataset::from_slice(b"{").unwrap_err();
        assert!(err.to_string().contains("dataset error:"));
    }
}
