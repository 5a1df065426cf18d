use crate::config::ScatterStyle;
use crate::dataset::Dataset;
use crate::state::InteractionState;

/// Generate per-point scale factors
///
/// Overwrite order: selected, then neighbors, then hover.
pub fn generate_point_scale_factors(
    dataset: &Dataset,
    state: &InteractionState,
    style: &ScatterStyle,
) -> Vec<f32> {
    let scales = &style.scales;
    let mut factors = vec![scales.default; dataset.len()];

    for i in state.selection.iter() {
        if let Some(f) = factors.get_mut(i) {
            *f = scales.selected;
        }
    }

    for neighbor in &state.neighbors {
        if let Some(f) = factors.get_mut(neighbor.index) {
            *f = scales.neighbor;
        }
    }

    if let Some(f) = state.hover.index().and_then(|h| factors.get_mut(h)) {
        *f = scales.hover;
    }

    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DataPoint;
    use crate::state::{Hover, Neighbor, Selection};

    fn distinct_style() -> ScatterStyle {
        let mut style = ScatterStyle::default();
        style.scales.selected = 2.0;
        style.scales.neighbor = 3.0;
        style.scales.hover = 4.0;
        style
    }

    #[test]
    fn test_overwrite_order() {
        let ds = Dataset::new((0..5).map(DataPoint::new).collect());
        let state = InteractionState {
            selection: Selection::from_indices(vec![0, 1]),
            neighbors: vec![Neighbor::new(1, 0.1), Neighbor::new(2, 0.2)],
            hover: Hover::Point(2),
            ..Default::default()
        };
        let factors = generate_point_scale_factors(&ds, &state, &distinct_style());
        assert_eq!(factors, vec![2.0, 3.0, 4.0, 1.0, 1.0]);
    }

    #[test]
    fn test_defaults_without_interaction() {
        let ds = Dataset::new((0..3).map(DataPoint::new).collect());
        let factors =
            generate_point_scale_factors(&ds, &InteractionState::default(), &distinct_style());
        assert_eq!(factors, vec![1.0; 3]);
    }
}
