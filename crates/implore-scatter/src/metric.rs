//! Distance metrics and distance-to-color encoding
//!
//! Metrics disagree on which direction means "close" and on scale, so each
//! metric carries its own normalization rule. The normalized value is fed
//! through the nearest-neighbor color scale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorScale};
use crate::error::ScatterError;

/// How a raw neighbor distance is turned into a closeness score
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceNormalization {
    /// `min_dist / d`: the closest neighbor scores 1.0
    RelativeToNearest,
    /// `1 - d`: distances already live in [0, 1]
    Complement,
}

impl DistanceNormalization {
    /// Normalize a raw distance given the smallest distance in the neighbor set
    pub fn normalize(&self, distance: f64, min_distance: f64) -> f64 {
        match self {
            DistanceNormalization::RelativeToNearest => {
                if distance <= 0.0 {
                    1.0
                } else {
                    min_distance / distance
                }
            }
            DistanceNormalization::Complement => 1.0 - distance,
        }
    }
}

/// Distance metric used for nearest-neighbor ranking
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum DistanceMetric {
    /// Cosine distance on normalized vectors
    #[default]
    Cosine,
    /// Euclidean distance
    Euclidean,
}

impl DistanceMetric {
    /// All supported metrics
    pub const ALL: [DistanceMetric; 2] = [DistanceMetric::Cosine, DistanceMetric::Euclidean];

    /// Normalization rule for this metric
    pub fn normalization(&self) -> DistanceNormalization {
        match self {
            DistanceMetric::Cosine => DistanceNormalization::RelativeToNearest,
            DistanceMetric::Euclidean => DistanceNormalization::Complement,
        }
    }

    /// Short name used in configuration and logs
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Cosine => "cosine",
            DistanceMetric::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceMetric {
    type Err = ScatterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cosine" | "cos" => Ok(DistanceMetric::Cosine),
            "euclidean" | "euclid" | "l2" => Ok(DistanceMetric::Euclidean),
            _ => Err(ScatterError::UnknownDistanceMetric {
                name: s.to_string(),
            }),
        }
    }
}

/// Color for a neighbor at `distance`, given the nearest distance in the set
pub fn dist_to_color(
    metric: DistanceMetric,
    distance: f64,
    min_distance: f64,
    scale: &ColorScale,
) -> Color {
    scale.sample(metric.normalization().normalize(distance, min_distance))
}
