//! Camera bookmarks
//!
//! The renderer owns the live camera. The adapter only passes a `CameraDef`
//! through, to and from bookmark JSON, and asks for the default camera of
//! the new dimensionality when the projection changes.

use serde::{Deserialize, Serialize};

use crate::error::ScatterResult;
use crate::projection::Dimensionality;

/// 3D vector type
pub type Vec3 = [f32; 3];

/// Serializable camera definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraDef {
    /// Whether the camera uses an orthographic projection
    pub orthographic: bool,

    /// Camera position in world space
    pub position: Vec3,

    /// Look-at target
    pub target: Vec3,

    /// Zoom factor
    pub zoom: f32,
}

impl CameraDef {
    /// Create a perspective camera definition
    pub fn perspective(position: Vec3, target: Vec3) -> Self {
        Self {
            orthographic: false,
            position,
            target,
            zoom: 1.0,
        }
    }

    /// Create an orthographic camera definition
    pub fn orthographic(position: Vec3, target: Vec3) -> Self {
        Self {
            orthographic: true,
            position,
            target,
            zoom: 1.0,
        }
    }

    /// Starting camera for the given dimensionality
    ///
    /// 2D looks straight down the Z axis; 3D looks at the origin from above
    /// and in front.
    pub fn default_for(dimensionality: Dimensionality) -> Self {
        match dimensionality {
            Dimensionality::Two => Self::orthographic([0.0, 0.0, 4.0], [0.0, 0.0, 0.0]),
            Dimensionality::Three => Self::perspective([0.45, 0.9, 1.6], [0.0, 0.0, 0.0]),
        }
    }

    /// Get distance from camera to target
    pub fn distance(&self) -> f32 {
        let d = [
            self.target[0] - self.position[0],
            self.target[1] - self.position[1],
            self.target[2] - self.position[2],
        ];
        (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
    }

    /// Serialize for a bookmark
    pub fn to_json(&self) -> ScatterResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore from a bookmark
    pub fn from_json(json: &str) -> ScatterResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for CameraDef {
    fn default() -> Self {
        Self::default_for(Dimensionality::Three)
    }
}
