//! Renderer sub-visualizers and label-mode composition
//!
//! Two mutually exclusive label modes decide which visualizers are attached:
//! - SpriteCanvas: point sprites + 2D canvas label overlay
//! - Text3D: 3D text labels, one string per point
//!
//! A polyline visualizer is attached in both modes. Every visualizer accepts
//! `set_dataset(None)` and stays valid but empty.

use serde::{Deserialize, Serialize};

use crate::attributes::generate_3d_label_strings;
use crate::dataset::Dataset;
use crate::state::LabelMode;

/// Which sub-visualizer a `Visualizer` is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualizerKind {
    PointSprites,
    CanvasLabels,
    Labels3D,
    Polylines,
}

/// Sprite atlas texture owned by the sprite visualizer
///
/// The image loads asynchronously in the host; when it lands the host calls
/// `image_loaded`, which only flags the texture for re-upload.
#[derive(Clone, Debug, PartialEq)]
pub struct AtlasTexture {
    pub image_path: String,
    pub single_image_dim: [u32; 2],
    /// Sprite cell for each point
    pub sprite_indices: Vec<u32>,
    needs_update: bool,
}

impl AtlasTexture {
    /// Mark the atlas image as loaded
    pub fn image_loaded(&mut self) {
        self.needs_update = true;
    }

    /// Whether the texture must be re-uploaded before the next frame
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Clear the re-upload flag once the renderer has uploaded the texture
    pub fn mark_uploaded(&mut self) {
        self.needs_update = false;
    }
}

/// Draws points as sprites from the dataset's atlas
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpriteVisualizer {
    pub point_count: usize,
    pub atlas: Option<AtlasTexture>,
}

impl SpriteVisualizer {
    fn set_dataset(&mut self, dataset: Option<&Dataset>) {
        self.point_count = dataset.map_or(0, Dataset::len);
        self.atlas = dataset.and_then(|ds| {
            ds.sprite_metadata.as_ref().map(|meta| AtlasTexture {
                image_path: meta.image_path.clone(),
                single_image_dim: meta.single_image_dim,
                sprite_indices: (0..ds.len() as u32).collect(),
                needs_update: false,
            })
        });
    }
}

/// 2D canvas overlay for the visible label set
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasLabelVisualizer {
    pub point_count: usize,
}

/// 3D text labels, one string per point
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels3DVisualizer {
    pub accessor: Option<String>,
    pub label_strings: Vec<String>,
}

/// Sequence polylines
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolylineVisualizer {
    pub sequences: Vec<Vec<usize>>,
}

/// A sub-visualizer attached to the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum Visualizer {
    PointSprites(SpriteVisualizer),
    CanvasLabels(CanvasLabelVisualizer),
    Labels3D(Labels3DVisualizer),
    Polylines(PolylineVisualizer),
}

impl Visualizer {
    pub fn kind(&self) -> VisualizerKind {
        match self {
            Visualizer::PointSprites(_) => VisualizerKind::PointSprites,
            Visualizer::CanvasLabels(_) => VisualizerKind::CanvasLabels,
            Visualizer::Labels3D(_) => VisualizerKind::Labels3D,
            Visualizer::Polylines(_) => VisualizerKind::Polylines,
        }
    }

    /// Push a dataset (or none) into the visualizer
    pub fn set_dataset(&mut self, dataset: Option<&Dataset>) {
        match self {
            Visualizer::PointSprites(v) => v.set_dataset(dataset),
            Visualizer::CanvasLabels(v) => v.point_count = dataset.map_or(0, Dataset::len),
            Visualizer::Labels3D(v) => {
                v.label_strings = generate_3d_label_strings(dataset, v.accessor.as_deref());
            }
            Visualizer::Polylines(v) => {
                v.sequences = dataset
                    .map(|ds| {
                        ds.sequences
                            .iter()
                            .map(|s| s.point_indices.clone())
                            .collect()
                    })
                    .unwrap_or_default();
            }
        }
    }
}

/// Build the visualizer set for a label mode, each already holding `dataset`
pub fn compose_visualizers(
    mode: LabelMode,
    dataset: Option<&Dataset>,
    label_accessor: Option<&str>,
) -> Vec<Visualizer> {
    let mut visualizers = match mode {
        LabelMode::Text3D => vec![Visualizer::Labels3D(Labels3DVisualizer {
            accessor: label_accessor.map(str::to_string),
            label_strings: Vec::new(),
        })],
        LabelMode::SpriteCanvas => vec![
            Visualizer::PointSprites(SpriteVisualizer::default()),
            Visualizer::CanvasLabels(CanvasLabelVisualizer::default()),
        ],
    };
    visualizers.push(Visualizer::Polylines(PolylineVisualizer::default()));

    for visualizer in &mut visualizers {
        visualizer.set_dataset(dataset);
    }
    visualizers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DataPoint, Sequence, SpriteMetadata};

    fn kinds(visualizers: &[Visualizer]) -> Vec<VisualizerKind> {
        visualizers.iter().map(Visualizer::kind).collect()
    }

    fn dataset() -> Dataset {
        let mut ds = Dataset::new(
            (0..3)
                .map(|i| DataPoint::new(i).with_metadata("word", format!("w{}", i)))
                .collect(),
        );
        ds.sequences = vec![Sequence::new(vec![0, 1, 2])];
        ds.sprite_metadata = Some(SpriteMetadata {
            image_path: "sprites.png".to_string(),
            single_image_dim: [28, 28],
        });
        ds
    }

    #[test]
    fn test_sprite_mode_composition() {
        let v = compose_visualizers(LabelMode::SpriteCanvas, None, None);
        assert_eq!(
            kinds(&v),
            vec![
                VisualizerKind::PointSprites,
                VisualizerKind::CanvasLabels,
                VisualizerKind::Polylines
            ]
        );
    }

    #[test]
    fn test_3d_mode_composition() {
        let ds = dataset();
        let v = compose_visualizers(LabelMode::Text3D, Some(&ds), Some("word"));
        assert_eq!(kinds(&v), vec![VisualizerKind::Labels3D, VisualizerKind::Polylines]);
        match &v[0] {
            Visualizer::Labels3D(labels) => assert_eq!(labels.label_strings, vec!["w0", "w1", "w2"]),
            other => panic!("unexpected visualizer {:?}", other),
        }
    }

    #[test]
    fn test_dataset_pushed_into_each_visualizer() {
        let ds = dataset();
        let v = compose_visualizers(LabelMode::SpriteCanvas, Some(&ds), None);
        match &v[0] {
            Visualizer::PointSprites(s) => {
                let atlas = s.atlas.as_ref().unwrap();
                assert_eq!(atlas.sprite_indices, vec![0, 1, 2]);
                assert!(!atlas.needs_update());
            }
            other => panic!("unexpected visualizer {:?}", other),
        }
        assert_eq!(
            v[2],
            Visualizer::Polylines(PolylineVisualizer {
                sequences: vec![vec![0, 1, 2]]
            })
        );
    }

    #[test]
    fn test_no_dataset_leaves_visualizers_empty() {
        for mode in [LabelMode::SpriteCanvas, LabelMode::Text3D] {
            for v in compose_visualizers(mode, None, Some("word")) {
                match v {
                    Visualizer::PointSprites(s) => assert!(s.atlas.is_none() && s.point_count == 0),
                    Visualizer::CanvasLabels(c) => assert_eq!(c.point_count, 0),
                    Visualizer::Labels3D(l) => assert!(l.label_strings.is_empty()),
                    Visualizer::Polylines(p) => assert!(p.sequences.is_empty()),
                }
            }
        }
    }

    #[test]
    fn test_atlas_load_flags_update() {
        let ds = dataset();
        let mut sprites = SpriteVisualizer::default();
        sprites.set_dataset(Some(&ds));
        let atlas = sprites.atlas.as_mut().unwrap();
        atlas.image_loaded();
        assert!(atlas.needs_update());
        atlas.mark_uploaded();
        assert!(!atlas.needs_update());
    }
}
