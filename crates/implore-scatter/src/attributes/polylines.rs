use crate::color::Color;
use crate::config::{PolylineStyle, ScatterStyle};
use crate::dataset::Dataset;
use crate::state::Selection;

use super::{put_rgb, PointColorer};

/// Hue-ramp color for the `index`-th of `total` points in a sequence
fn ramp_color(style: &PolylineStyle, index: usize, total: usize) -> Color {
    let t = if total > 0 {
        index as f32 / total as f32
    } else {
        0.0
    };
    let hue = style.start_hue + (style.end_hue - style.start_hue) * t;
    Color::from_hsl(hue, style.saturation, style.lightness)
}

/// Generate segment endpoint colors for every sequence
///
/// Each sequence gets two RGB triples per consecutive point pair. Endpoints
/// come from the point colorer when present, otherwise from the hue ramp.
pub fn generate_polyline_colors(
    dataset: &Dataset,
    style: &ScatterStyle,
    point_colorer: Option<&PointColorer>,
) -> Vec<Vec<f32>> {
    let ramp = &style.polylines;
    dataset
        .sequences
        .iter()
        .map(|sequence| {
            let indices = &sequence.point_indices;
            let total = indices.len();
            let endpoint = |position: usize| match point_colorer {
                Some(colorer) => colorer(dataset, indices[position]),
                None => ramp_color(ramp, position, total),
            };

            let mut colors = vec![0.0f32; sequence.segment_count() * 2 * 3];
            for j in 0..sequence.segment_count() {
                put_rgb(&mut colors, 2 * j, &endpoint(j));
                put_rgb(&mut colors, 2 * j + 1, &endpoint(j + 1));
            }
            colors
        })
        .collect()
}

/// Generate per-sequence opacities
///
/// With a selection every sequence dims, except the one holding the primary
/// selected point.
pub fn generate_polyline_opacities(
    dataset: &Dataset,
    selection: &Selection,
    style: &ScatterStyle,
) -> Vec<f32> {
    let p = &style.polylines;
    let Some(primary) = selection.primary() else {
        return vec![p.default_opacity; dataset.sequences.len()];
    };

    let mut opacities = vec![p.deselected_opacity; dataset.sequences.len()];
    if let Some(s) = dataset.sequence_of(primary) {
        opacities[s] = p.selected_opacity;
    }
    opacities
}

/// Generate per-sequence line widths; the primary selection's sequence is bold
pub fn generate_polyline_widths(
    dataset: &Dataset,
    selection: &Selection,
    style: &ScatterStyle,
) -> Vec<f32> {
    let p = &style.polylines;
    let mut widths = vec![p.default_width; dataset.sequences.len()];
    if let Some(s) = selection.primary().and_then(|i| dataset.sequence_of(i)) {
        widths[s] = p.selected_width;
    }
    widths
}
