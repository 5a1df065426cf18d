//! Per-point and per-sequence attribute buffers
//!
//! Every generator here is a pure function of its arguments: the dataset,
//! the interaction state, the style and (for colors) an optional external
//! point colorer. Buffers are freshly allocated on every call.
//!
//! Out-of-range indices in the selection, neighbor list or hover are skipped.

mod colors;
mod labels;
mod polylines;
mod scales;

use std::sync::Arc;

pub use colors::*;
pub use labels::*;
pub use polylines::*;
pub use scales::*;

use crate::color::Color;
use crate::config::ScatterStyle;
use crate::dataset::Dataset;
use crate::state::InteractionState;

/// External per-point colorer (e.g. a legend keyed on a metadata field)
pub type PointColorer = Arc<dyn Fn(&Dataset, usize) -> Color + Send + Sync>;

/// Write a color into a packed RGB buffer, ignoring out-of-range indices
pub(crate) fn put_rgb(buffer: &mut [f32], index: usize, color: &Color) {
    let Some(start) = index.checked_mul(3) else {
        return;
    };
    if let Some(slot) = buffer.get_mut(start..start.saturating_add(3)) {
        slot.copy_from_slice(&color.to_array());
    }
}

/// All attribute buffers recomputed on any interaction change
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterAttributes {
    pub point_colors: Vec<f32>,
    pub point_scale_factors: Vec<f32>,
    pub labels: LabelRenderParams,
    pub polyline_colors: Vec<Vec<f32>>,
    pub polyline_opacities: Vec<f32>,
    pub polyline_widths: Vec<f32>,
}

impl ScatterAttributes {
    /// Run every attribute generator against the same inputs
    pub fn generate(
        dataset: &Dataset,
        state: &InteractionState,
        style: &ScatterStyle,
        point_colorer: Option<&PointColorer>,
        sprite_mode: bool,
    ) -> Self {
        Self {
            point_colors: generate_point_colors(dataset, state, style, point_colorer, sprite_mode),
            point_scale_factors: generate_point_scale_factors(dataset, state, style),
            labels: generate_visible_labels(dataset, state, style),
            polyline_colors: generate_polyline_colors(dataset, style, point_colorer),
            polyline_opacities: generate_polyline_opacities(dataset, &state.selection, style),
            polyline_widths: generate_polyline_widths(dataset, &state.selection, style),
        }
    }
}
