use crate::color::nearest_neighbor_scale;
use crate::config::ScatterStyle;
use crate::dataset::Dataset;
use crate::metric::dist_to_color;
use crate::state::InteractionState;

use super::{put_rgb, PointColorer};

/// Generate packed RGB point colors, one triple per point
///
/// Layers, later wins: baseline (unselected / colorer / no-selection),
/// selected, neighbors tinted by closeness, then hover.
pub fn generate_point_colors(
    dataset: &Dataset,
    state: &InteractionState,
    style: &ScatterStyle,
    point_colorer: Option<&PointColorer>,
    sprite_mode: bool,
) -> Vec<f32> {
    let palette = &style.points;
    let mut colors = vec![0.0f32; dataset.len() * 3];

    let (mut unselected, mut no_selection) = (palette.unselected, palette.no_selection);
    if state.label_mode.is_3d() {
        unselected = palette.labels_3d_unselected;
        no_selection = palette.labels_3d_no_selection;
    }
    if sprite_mode {
        unselected = palette.sprite_unselected;
        no_selection = palette.sprite_no_selection;
    }

    if !state.selection.is_empty() {
        for i in 0..dataset.len() {
            put_rgb(&mut colors, i, &unselected);
        }
    } else if let Some(colorer) = point_colorer {
        for i in 0..dataset.len() {
            put_rgb(&mut colors, i, &colorer(dataset, i));
        }
    } else {
        for i in 0..dataset.len() {
            put_rgb(&mut colors, i, &no_selection);
        }
    }

    for i in state.selection.iter() {
        put_rgb(&mut colors, i, &palette.selected);
    }

    if !state.neighbors.is_empty() {
        let scale = nearest_neighbor_scale();
        let min_distance = state.min_neighbor_distance();
        for neighbor in &state.neighbors {
            let color = dist_to_color(
                state.distance_metric,
                neighbor.distance,
                min_distance,
                &scale,
            );
            put_rgb(&mut colors, neighbor.index, &color);
        }
    }

    if let Some(hover) = state.hover.index() {
        put_rgb(&mut colors, hover, &palette.hover);
    }

    colors
}
