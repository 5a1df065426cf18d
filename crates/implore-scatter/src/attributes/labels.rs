use crate::color::Color;
use crate::config::ScatterStyle;
use crate::dataset::Dataset;
use crate::state::InteractionState;

/// Parallel arrays describing every visible label, handed to the label backend
///
/// All per-label vectors have the same length; colors are packed RGB bytes.
/// Entries are not deduplicated, so a hovered and selected point appears twice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelRenderParams {
    pub point_indices: Vec<usize>,
    pub label_strings: Vec<String>,
    pub scale_factors: Vec<f32>,
    /// `true` when the label blends with scene opacity (translucent / stacked)
    pub blend_flags: Vec<bool>,
    pub default_font_size: f32,
    pub fill_colors: Vec<u8>,
    pub stroke_colors: Vec<u8>,
}

impl LabelRenderParams {
    fn with_font_size(default_font_size: f32) -> Self {
        Self {
            default_font_size,
            ..Default::default()
        }
    }

    /// Number of visible labels
    pub fn len(&self) -> usize {
        self.point_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.point_indices.is_empty()
    }

    fn push(&mut self, entry: LabelEntry) {
        self.point_indices.push(entry.index);
        self.label_strings.push(entry.text);
        self.scale_factors.push(entry.scale);
        self.blend_flags.push(entry.blend);
        self.fill_colors.extend_from_slice(&entry.fill.to_rgb_bytes());
        self.stroke_colors.extend_from_slice(&entry.stroke.to_rgb_bytes());
    }
}

struct LabelEntry {
    index: usize,
    text: String,
    scale: f32,
    blend: bool,
    fill: Color,
    stroke: Color,
}

/// Build the visible label set: hover, then selected points, then neighbors
pub fn generate_visible_labels(
    dataset: &Dataset,
    state: &InteractionState,
    style: &ScatterStyle,
) -> LabelRenderParams {
    let labels = &style.labels;
    let accessor = state.label_point_accessor.as_deref();
    let in_range = |i: usize| i < dataset.len();
    let mut params = LabelRenderParams::with_font_size(labels.default_font_size);

    if let Some(hover) = state.hover.index().filter(|&h| in_range(h)) {
        params.push(LabelEntry {
            index: hover,
            text: dataset.label_text(hover, accessor),
            scale: labels.scale_large,
            blend: false,
            fill: labels.fill_hover,
            stroke: labels.stroke_hover,
        });
    }

    // A lone selection gets an opaque label; several stack translucently.
    let blend_selected = state.selection.len() != 1;
    for i in state.selection.iter().filter(|&i| in_range(i)) {
        params.push(LabelEntry {
            index: i,
            text: dataset.label_text(i, accessor),
            scale: labels.scale_large,
            blend: blend_selected,
            fill: labels.fill_selected,
            stroke: labels.stroke_selected,
        });
    }

    for neighbor in state.neighbors.iter().filter(|n| in_range(n.index)) {
        params.push(LabelEntry {
            index: neighbor.index,
            text: dataset.label_text(neighbor.index, accessor),
            scale: labels.scale_default,
            blend: true,
            fill: labels.fill_neighbor,
            stroke: labels.stroke_neighbor,
        });
    }

    params
}

/// One label string per point for the 3D label visualizer
pub fn generate_3d_label_strings(dataset: Option<&Dataset>, accessor: Option<&str>) -> Vec<String> {
    match dataset {
        Some(ds) => (0..ds.len()).map(|i| ds.label_text(i, accessor)).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DataPoint;
    use crate::state::{Hover, Neighbor, Selection};

    fn dataset() -> Dataset {
        Dataset::new(
            (0..4)
                .map(|i| DataPoint::new(i).with_metadata("name", format!("p{}", i)))
                .collect(),
        )
    }

    fn state() -> InteractionState {
        InteractionState {
            label_point_accessor: Some("name".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_state_has_no_labels() {
        let labels = generate_visible_labels(&dataset(), &state(), &ScatterStyle::default());
        assert!(labels.is_empty());
        assert_eq!(labels.default_font_size, 10.0);
    }

    #[test]
    fn test_pass_order_and_flags() {
        let style = ScatterStyle::default();
        let state = InteractionState {
            hover: Hover::Point(3),
            selection: Selection::from_indices(vec![1]),
            neighbors: vec![Neighbor::new(2, 0.3)],
            ..state()
        };
        let labels = generate_visible_labels(&dataset(), &state, &style);

        assert_eq!(labels.point_indices, vec![3, 1, 2]);
        assert_eq!(labels.label_strings, vec!["p3", "p1", "p2"]);
        assert_eq!(labels.blend_flags, vec![false, false, true]);
        assert_eq!(labels.scale_factors, vec![2.0, 2.0, 1.0]);
        assert_eq!(labels.fill_colors.len(), 9);
        assert_eq!(labels.stroke_colors, vec![255; 9]);
    }

    #[test]
    fn test_multi_selection_blends() {
        let state = InteractionState {
            selection: Selection::from_indices(vec![0, 2]),
            ..state()
        };
        let labels = generate_visible_labels(&dataset(), &state, &ScatterStyle::default());
        assert_eq!(labels.blend_flags, vec![true, true]);
    }

    #[test]
    fn test_hovered_selection_is_duplicated() {
        let state = InteractionState {
            hover: Hover::Point(0),
            selection: Selection::from_indices(vec![0]),
            ..state()
        };
        let labels = generate_visible_labels(&dataset(), &state, &ScatterStyle::default());
        assert_eq!(labels.point_indices, vec![0, 0]);
    }

    #[test]
    fn test_missing_field_uses_placeholder() {
        let state = InteractionState {
            selection: Selection::from_indices(vec![2]),
            label_point_accessor: Some("missing".to_string()),
            ..Default::default()
        };
        let labels = generate_visible_labels(&dataset(), &state, &ScatterStyle::default());
        assert_eq!(labels.label_strings, vec!["Unknown #2"]);
    }

    #[test]
    fn test_3d_label_strings() {
        let ds = dataset();
        assert_eq!(
            generate_3d_label_strings(Some(&ds), Some("name")),
            vec!["p0", "p1", "p2", "p3"]
        );
        assert!(generate_3d_label_strings(None, Some("name")).is_empty());
    }
}
