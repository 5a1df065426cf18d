//! Point position buffer generation
//!
//! Each selected component is scaled from its extent across the dataset onto
//! the symmetric cube `[-L/2, +L/2]`. 2D projections get Z = 0 everywhere.

use crate::dataset::Dataset;
use crate::projection::ProjectionComponents;
use crate::scale::{extent, LinearScale};

/// Edge length of the cube the points are fitted into
pub const SCATTER_PLOT_CUBE_LENGTH: f64 = 2.0;

fn axis_scale(dataset: &Dataset, component: &str) -> LinearScale {
    let half = SCATTER_PLOT_CUBE_LENGTH / 2.0;
    let domain = extent(dataset.points.iter().map(|p| p.component(component)))
        .unwrap_or((0.0, 0.0));
    LinearScale::new(domain, (-half, half))
}

/// Generate packed `[x0, y0, z0, x1, y1, z1, ...]` positions, one triple per point
///
/// Returns `None` when there is no dataset.
pub fn generate_point_positions(
    dataset: Option<&Dataset>,
    components: &ProjectionComponents,
) -> Option<Vec<f32>> {
    let dataset = dataset?;

    let x_scale = axis_scale(dataset, &components.x);
    let y_scale = axis_scale(dataset, &components.y);
    let z_axis = components
        .z
        .as_deref()
        .map(|z| (z, axis_scale(dataset, z)));

    let mut positions = Vec::with_capacity(dataset.len() * 3);
    for point in &dataset.points {
        positions.push(x_scale.apply(point.component(&components.x)) as f32);
        positions.push(y_scale.apply(point.component(&components.y)) as f32);
        let z = match &z_axis {
            Some((name, scale)) => scale.apply(point.component(name)) as f32,
            None => 0.0,
        };
        positions.push(z);
    }

    Some(positions)
}
