//! Dataset model consumed by the scatter adapter
//!
//! A `Dataset` is an ordered list of points (order = identity), the
//! sequences threading through them, and optional sprite atlas metadata.
//! The adapter only ever reads it.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Metadata fields that hold the index of the next point in a sequence
pub const SEQUENCE_METADATA_FIELDS: [&str; 2] = ["__next__", "__seq_next__"];

/// A single metadata value attached to a point
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Number(f64),
    Text(String),
}

impl MetadataValue {
    /// Interpret the value as a point index, if it is a non-negative integer
    pub fn as_index(&self) -> Option<usize> {
        match self {
            MetadataValue::Number(n) if n.is_finite() && *n >= 0.0 && n.fract() == 0.0 => {
                Some(*n as usize)
            }
            MetadataValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Number(n) => write!(f, "{}", n),
            MetadataValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::Text(s.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::Text(s)
    }
}

impl From<f64> for MetadataValue {
    fn from(n: f64) -> Self {
        MetadataValue::Number(n)
    }
}

/// One point of the dataset
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DataPoint {
    /// Stable index into every per-point array
    pub index: usize,

    /// Projection component name -> value
    #[serde(default)]
    pub projections: HashMap<String, f64>,

    /// Metadata field name -> value
    #[serde(default)]
    pub metadata: HashMap<String, MetadataValue>,

    /// Sequence this point belongs to, if any
    #[serde(default)]
    pub sequence_index: Option<usize>,
}

impl DataPoint {
    /// Create an empty point
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    /// Builder: set a projection component value
    pub fn with_projection(mut self, component: impl Into<String>, value: f64) -> Self {
        self.projections.insert(component.into(), value);
        self
    }

    /// Builder: set a metadata field
    pub fn with_metadata(mut self, field: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(field.into(), value.into());
        self
    }

    /// Value of a projection component, NaN when missing
    pub fn component(&self, name: &str) -> f64 {
        self.projections.get(name).copied().unwrap_or(f64::NAN)
    }
}

/// An ordered trajectory of point indices, drawn as a polyline
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub point_indices: Vec<usize>,
}

impl Sequence {
    pub fn new(point_indices: Vec<usize>) -> Self {
        Self { point_indices }
    }

    /// Number of line segments in this sequence
    pub fn segment_count(&self) -> usize {
        self.point_indices.len().saturating_sub(1)
    }
}

/// Sprite atlas attached to a dataset; sprite index = point index
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpriteMetadata {
    /// Location of the atlas image
    pub image_path: String,

    /// Pixel size of a single sprite [width, height]
    pub single_image_dim: [u32; 2],
}

/// Projection families a dataset may carry values for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum ProjectionType {
    Pca,
    Tsne,
    Umap,
    Custom,
}

/// Ordered collection of points plus sequences and sprite metadata
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub points: Vec<DataPoint>,

    #[serde(default)]
    pub sequences: Vec<Sequence>,

    #[serde(default)]
    pub sprite_metadata: Option<SpriteMetadata>,

    /// Completed t-SNE iterations
    #[serde(default)]
    pub tsne_iteration: u32,

    /// Whether a UMAP run has finished
    #[serde(default)]
    pub umap_complete: bool,
}

impl Dataset {
    /// Create a dataset from points; sequences are left empty
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the dataset has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the given projection family has values that can be drawn
    pub fn projection_can_be_rendered(&self, projection_type: ProjectionType) -> bool {
        match projection_type {
            ProjectionType::Pca | ProjectionType::Custom => true,
            ProjectionType::Tsne => self.tsne_iteration > 0,
            ProjectionType::Umap => self.umap_complete,
        }
    }

    /// Sequence the given point belongs to, if it resolves to a real sequence
    pub fn sequence_of(&self, point_index: usize) -> Option<usize> {
        self.points
            .get(point_index)
            .and_then(|p| p.sequence_index)
            .filter(|&s| s < self.sequences.len())
    }

    /// Label text for a point using a metadata accessor
    ///
    /// Falls back to `Unknown #<index>` when the field (or accessor) is absent.
    pub fn label_text(&self, point_index: usize, accessor: Option<&str>) -> String {
        accessor
            .and_then(|field| self.points.get(point_index)?.metadata.get(field))
            .map(|value| value.to_string())
            .unwrap_or_else(|| format!("Unknown #{}", point_index))
    }

    /// Rebuild `sequences` from the `__next__` / `__seq_next__` metadata links
    ///
    /// Each chain is followed from its head (a linked point nobody links to).
    /// Out-of-range links end a chain and revisiting a point stops a cycle.
    /// Every member point gets its `sequence_index` set.
    pub fn compute_sequences(&mut self) {
        let n = self.points.len();
        let next: Vec<Option<usize>> = self
            .points
            .iter()
            .map(|p| {
                SEQUENCE_METADATA_FIELDS
                    .iter()
                    .find_map(|field| p.metadata.get(*field))
                    .and_then(MetadataValue::as_index)
                    .filter(|&i| i < n)
            })
            .collect();

        let mut has_predecessor = vec![false; n];
        for target in next.iter().flatten() {
            has_predecessor[*target] = true;
        }

        let mut visited = vec![false; n];
        let mut sequences = Vec::new();
        for head in 0..n {
            if has_predecessor[head] || next[head].is_none() || visited[head] {
                continue;
            }
            let mut indices = Vec::new();
            let mut current = Some(head);
            while let Some(i) = current {
                if visited[i] {
                    break;
                }
                visited[i] = true;
                indices.push(i);
                current = next[i];
            }
            sequences.push(Sequence::new(indices));
        }

        for point in &mut self.points {
            point.sequence_index = None;
        }
        for (seq_index, sequence) in sequences.iter().enumerate() {
            for &i in &sequence.point_indices {
                self.points[i].sequence_index = Some(seq_index);
            }
        }
        self.sequences = sequences;
    }
}
