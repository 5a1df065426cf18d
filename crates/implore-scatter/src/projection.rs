//! The active projection: which named components map onto X, Y and Z

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, ProjectionType};
use crate::error::{ScatterError, ScatterResult};

/// Number of displayed dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Dimensionality {
    Two,
    Three,
}

impl Dimensionality {
    /// Dimension count as a number
    pub fn count(&self) -> u8 {
        match self {
            Dimensionality::Two => 2,
            Dimensionality::Three => 3,
        }
    }
}

/// Component names selected for each axis; Z is absent for 2D projections
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionComponents {
    pub x: String,
    pub y: String,
    pub z: Option<String>,
}

impl ProjectionComponents {
    /// Two-component (planar) selection
    pub fn planar(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: None,
        }
    }

    /// Three-component selection
    pub fn spatial(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: Some(z.into()),
        }
    }

    /// Build from a list of 2 or 3 component names
    pub fn from_names(names: &[&str]) -> ScatterResult<Self> {
        match names {
            [x, y] => Ok(Self::planar(*x, *y)),
            [x, y, z] => Ok(Self::spatial(*x, *y, *z)),
            _ => Err(ScatterError::InvalidProjection {
                message: format!("expected 2 or 3 components, got {}", names.len()),
            }),
        }
    }

    /// Dimensionality implied by the selection
    pub fn dimensionality(&self) -> Dimensionality {
        if self.z.is_some() {
            Dimensionality::Three
        } else {
            Dimensionality::Two
        }
    }
}

/// A projection of a dataset onto 2 or 3 named components
#[derive(Clone, Debug)]
pub struct Projection {
    pub projection_type: ProjectionType,
    pub components: ProjectionComponents,
    pub dataset: Arc<Dataset>,
}

impl Projection {
    /// Create a projection over a dataset
    pub fn new(
        projection_type: ProjectionType,
        components: ProjectionComponents,
        dataset: Arc<Dataset>,
    ) -> Self {
        Self {
            projection_type,
            components,
            dataset,
        }
    }

    /// Number of displayed dimensions
    pub fn dimensionality(&self) -> Dimensionality {
        self.components.dimensionality()
    }

    /// Attach a fresh dataset to this projection
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        self.dataset = dataset;
    }

    /// Whether the dataset has finished computing this projection
    pub fn can_be_rendered(&self) -> bool {
        self.dataset.projection_can_be_rendered(self.projection_type)
    }
}
