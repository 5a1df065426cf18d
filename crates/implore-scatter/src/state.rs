//! Interaction state owned by the scatter adapter
//!
//! Each facet is changed only by its own event handler. "Nothing selected"
//! and "nothing hovered" are explicit variants so every consumer handles them.

use serde::{Deserialize, Serialize};

use crate::metric::DistanceMetric;

/// Current multi-selection; the first selected point is the primary one
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Empty,
    Points { primary: usize, rest: Vec<usize> },
}

impl Selection {
    /// Build a selection from an ordered index list (empty list = no selection)
    pub fn from_indices(indices: Vec<usize>) -> Self {
        let mut iter = indices.into_iter();
        match iter.next() {
            None => Selection::Empty,
            Some(primary) => Selection::Points {
                primary,
                rest: iter.collect(),
            },
        }
    }

    /// Primary (first) selected point
    pub fn primary(&self) -> Option<usize> {
        match self {
            Selection::Empty => None,
            Selection::Points { primary, .. } => Some(*primary),
        }
    }

    /// Selected indices in selection order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        let (head, tail): (Option<usize>, &[usize]) = match self {
            Selection::Empty => (None, &[]),
            Selection::Points { primary, rest } => (Some(*primary), rest.as_slice()),
        };
        head.into_iter().chain(tail.iter().copied())
    }

    /// Number of selected points
    pub fn len(&self) -> usize {
        match self {
            Selection::Empty => 0,
            Selection::Points { rest, .. } => 1 + rest.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }
}

/// Point currently under the cursor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hover {
    #[default]
    Empty,
    Point(usize),
}

impl Hover {
    pub fn from_index(index: Option<usize>) -> Self {
        index.map_or(Hover::Empty, Hover::Point)
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Hover::Empty => None,
            Hover::Point(i) => Some(*i),
        }
    }
}

/// A ranked nearest neighbor of the primary selection
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f64,
}

impl Neighbor {
    pub fn new(index: usize, distance: f64) -> Self {
        Self { index, distance }
    }
}

/// How point labels are drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum LabelMode {
    /// Point sprites plus a 2D canvas label overlay
    #[default]
    SpriteCanvas,
    /// Text labels placed in the 3D scene
    Text3D,
}

impl LabelMode {
    pub fn from_flag(render_labels_in_3d: bool) -> Self {
        if render_labels_in_3d {
            LabelMode::Text3D
        } else {
            LabelMode::SpriteCanvas
        }
    }

    pub fn is_3d(&self) -> bool {
        matches!(self, LabelMode::Text3D)
    }
}

/// All interaction facets the attribute generators read
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    pub hover: Hover,
    pub selection: Selection,
    /// Neighbors of the primary selection, ascending by distance
    pub neighbors: Vec<Neighbor>,
    pub distance_metric: DistanceMetric,
    /// Metadata field used as label text
    pub label_point_accessor: Option<String>,
    pub label_mode: LabelMode,
}

impl InteractionState {
    /// Smallest distance in the neighbor set (the first entry), or 0
    pub fn min_neighbor_distance(&self) -> f64 {
        self.neighbors.first().map_or(0.0, |n| n.distance)
    }
}
