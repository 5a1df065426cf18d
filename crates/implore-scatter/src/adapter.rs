//! Scatter adapter: interaction state + dataset -> renderer buffers
//!
//! Each handler follows the same shape: mutate one facet, recompute, push
//! to the renderer, then render. Positions are only regenerated when the
//! projection or dataset changes. Every other handler regenerates the
//! attribute buffers (colors, scales, labels, polylines).
//!
//! Handlers are expected to be called serially from one thread.

use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use crate::attributes::{PointColorer, ScatterAttributes};
use crate::camera::CameraDef;
use crate::config::ScatterStyle;
use crate::dataset::Dataset;
use crate::error::ScatterResult;
use crate::metric::DistanceMetric;
use crate::positions::generate_point_positions;
use crate::projection::Projection;
use crate::renderer::ScatterRenderer;
use crate::state::{Hover, InteractionState, LabelMode, Neighbor, Selection};
use crate::visualizer::compose_visualizers;

/// Owns interaction state and drives a `ScatterRenderer`
pub struct ScatterAdapter<R: ScatterRenderer> {
    renderer: R,
    style: ScatterStyle,
    projection: Option<Projection>,
    state: InteractionState,
    legend_point_colorer: Option<PointColorer>,
}

impl<R: ScatterRenderer> ScatterAdapter<R> {
    /// Create an adapter with the default style
    pub fn new(renderer: R) -> Self {
        Self::with_style(renderer, ScatterStyle::default())
    }

    /// Create an adapter with a custom style
    pub fn with_style(renderer: R, style: ScatterStyle) -> Self {
        let mut adapter = Self {
            renderer,
            style,
            projection: None,
            state: InteractionState::default(),
            legend_point_colorer: None,
        };
        adapter.create_visualizers();
        adapter
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn style(&self) -> &ScatterStyle {
        &self.style
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    fn dataset(&self) -> Option<&Dataset> {
        self.projection.as_ref().map(|p| p.dataset.as_ref())
    }

    // MARK: - Event handlers

    /// A new projection (or none) became active
    pub fn on_projection_changed(&mut self, projection: Option<Projection>) {
        let dataset_changed = match (&self.projection, &projection) {
            (Some(old), Some(new)) => !Arc::ptr_eq(&old.dataset, &new.dataset),
            _ => true,
        };
        self.projection = projection;

        let Some(projection) = &self.projection else {
            debug!("projection cleared");
            self.create_visualizers();
            self.renderer.render();
            return;
        };

        let dimensionality = projection.dimensionality();
        let projection_type = projection.projection_type;
        let renderable = projection.can_be_rendered();
        debug!(
            points = projection.dataset.len(),
            sequences = projection.dataset.sequences.len(),
            dimensions = dimensionality.count(),
            "projection changed"
        );

        if dataset_changed {
            self.create_visualizers();
        }
        self.renderer.set_dimensions(dimensionality);

        if renderable {
            self.update_attributes();
            self.update_positions();
        } else {
            warn!(
                projection_type = ?projection_type,
                "projection cannot be rendered yet; skipping buffer update"
            );
        }

        self.renderer.set_camera_def(None);
        self.renderer.render();
    }

    /// A fresh dataset was attached to the current projection
    pub fn on_dataset_changed(&mut self, dataset: Arc<Dataset>) {
        let Some(projection) = self.projection.as_mut() else {
            debug!("dataset changed with no active projection; ignoring");
            return;
        };
        debug!(points = dataset.len(), "dataset changed");
        projection.set_dataset(dataset);
        let renderable = projection.can_be_rendered();

        self.create_visualizers();
        if renderable {
            self.update_attributes();
            self.update_positions();
        }
        self.renderer.render();
    }

    /// Selection and the neighbors of its primary point changed
    pub fn on_selection_changed(&mut self, selected: Vec<usize>, neighbors: Vec<Neighbor>) {
        debug!(
            selected = selected.len(),
            neighbors = neighbors.len(),
            primary = ?selected.first(),
            "selection changed"
        );
        if let Some(ds) = self.dataset() {
            let n = ds.len();
            let bad = selected.iter().filter(|&&i| i >= n).count()
                + neighbors.iter().filter(|nb| nb.index >= n).count();
            if bad > 0 {
                warn!(count = bad, points = n, "ignoring out-of-range selection indices");
            }
        }

        self.state.selection = Selection::from_indices(selected);
        self.state.neighbors = neighbors;
        self.update_attributes();
        self.renderer.render();
    }

    /// The hovered point changed
    pub fn on_hover_changed(&mut self, hover: Option<usize>) {
        debug!(hover = ?hover, "hover changed");
        if let (Some(h), Some(ds)) = (hover, self.dataset()) {
            if h >= ds.len() {
                warn!(index = h, points = ds.len(), "ignoring out-of-range hover index");
            }
        }

        self.state.hover = Hover::from_index(hover);
        self.update_attributes();
        self.renderer.render();
    }

    /// The distance metric used to rank neighbors changed
    pub fn on_distance_metric_changed(&mut self, metric: DistanceMetric) {
        debug!(metric = %metric, "distance metric changed");
        self.state.distance_metric = metric;
        self.update_attributes();
        self.renderer.render();
    }

    /// Set or clear the external per-point colorer
    pub fn set_legend_point_colorer(&mut self, colorer: Option<PointColorer>) {
        debug!(enabled = colorer.is_some(), "legend point colorer changed");
        self.legend_point_colorer = colorer;
        self.update_attributes();
        self.renderer.render();
    }

    /// Change the metadata field used as label text
    pub fn set_label_point_accessor(&mut self, accessor: Option<String>) {
        debug!(accessor = ?accessor, "label accessor changed");
        self.state.label_point_accessor = accessor;
        if self.state.label_mode.is_3d() {
            // 3D labels hold one string per point; rebuild them.
            self.create_visualizers();
        }
        self.update_attributes();
        self.renderer.render();
    }

    /// Switch between sprite + canvas labels and 3D text labels
    pub fn set_render_labels_in_3d(&mut self, render_in_3d: bool) {
        let mode = LabelMode::from_flag(render_in_3d);
        info!(from = ?self.state.label_mode, to = ?mode, "label mode changed");
        self.state.label_mode = mode;
        self.create_visualizers();
        self.update_attributes();
        self.renderer.render();
    }

    // MARK: - Renderer pass-through

    pub fn render(&mut self) {
        self.renderer.render();
    }

    pub fn resize(&mut self) {
        self.renderer.resize();
    }

    /// Current camera, for bookmarks
    pub fn camera_def(&self) -> CameraDef {
        self.renderer.camera_def()
    }

    /// Restore a camera; `None` resets to the default for the current dimensions
    pub fn set_camera_def(&mut self, camera: Option<CameraDef>) {
        self.renderer.set_camera_def(camera);
    }

    /// Current camera as bookmark JSON
    pub fn camera_def_json(&self) -> ScatterResult<String> {
        self.camera_def().to_json()
    }

    /// Restore a camera from bookmark JSON and redraw
    pub fn restore_camera_def_json(&mut self, json: &str) -> ScatterResult<()> {
        let camera = CameraDef::from_json(json)?;
        self.renderer.set_camera_def(Some(camera));
        self.renderer.render();
        Ok(())
    }

    // MARK: - Recompute + push

    fn sprite_mode(&self) -> bool {
        !self.state.label_mode.is_3d()
            && self
                .dataset()
                .is_some_and(|ds| ds.sprite_metadata.is_some())
    }

    fn create_visualizers(&mut self) {
        self.renderer.remove_all_visualizers();
        let visualizers = compose_visualizers(
            self.state.label_mode,
            self.dataset(),
            self.state.label_point_accessor.as_deref(),
        );
        for visualizer in visualizers {
            self.renderer.add_visualizer(visualizer);
        }
    }

    fn update_positions(&mut self) {
        let Some(projection) = &self.projection else {
            return;
        };
        if let Some(positions) =
            generate_point_positions(Some(projection.dataset.as_ref()), &projection.components)
        {
            trace!(floats = positions.len(), "pushing point positions");
            self.renderer.set_point_positions(positions);
        }
    }

    fn update_attributes(&mut self) {
        let sprite_mode = self.sprite_mode();
        let Some(dataset) = self.dataset() else {
            return;
        };
        let attributes = ScatterAttributes::generate(
            dataset,
            &self.state,
            &self.style,
            self.legend_point_colorer.as_ref(),
            sprite_mode,
        );
        trace!(
            colors = attributes.point_colors.len(),
            scales = attributes.point_scale_factors.len(),
            labels = attributes.labels.len(),
            sequences = attributes.polyline_opacities.len(),
            "pushing attribute buffers"
        );

        self.renderer.set_point_colors(attributes.point_colors);
        self.renderer.set_point_scale_factors(attributes.point_scale_factors);
        self.renderer.set_labels(attributes.labels);
        self.renderer.set_polyline_colors(attributes.polyline_colors);
        self.renderer.set_polyline_opacities(attributes.polyline_opacities);
        self.renderer.set_polyline_widths(attributes.polyline_widths);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DataPoint, ProjectionType, Sequence};
    use crate::projection::{Dimensionality, ProjectionComponents};
    use crate::renderer::RecordingRenderer;
    use crate::visualizer::{Visualizer, VisualizerKind};

    fn dataset() -> Arc<Dataset> {
        let mut ds = Dataset::new(
            (0..4)
                .map(|i| {
                    DataPoint::new(i)
                        .with_projection("x", i as f64)
                        .with_projection("y", (i * i) as f64)
                        .with_metadata("label", format!("pt{}", i))
                })
                .collect(),
        );
        ds.sequences = vec![Sequence::new(vec![0, 1, 2])];
        for i in 0..3 {
            ds.points[i].sequence_index = Some(0);
        }
        Arc::new(ds)
    }

    fn projection(ds: Arc<Dataset>) -> Projection {
        Projection::new(
            ProjectionType::Pca,
            ProjectionComponents::planar("x", "y"),
            ds,
        )
    }

    fn adapter() -> ScatterAdapter<RecordingRenderer> {
        let mut adapter = ScatterAdapter::new(RecordingRenderer::new());
        adapter.on_projection_changed(Some(projection(dataset())));
        adapter.renderer_mut().clear_calls();
        adapter
    }

    fn kinds(renderer: &RecordingRenderer) -> Vec<VisualizerKind> {
        renderer.visualizers.iter().map(Visualizer::kind).collect()
    }

    #[test]
    fn test_new_attaches_sprite_mode_visualizers() {
        let adapter = ScatterAdapter::new(RecordingRenderer::new());
        assert_eq!(
            kinds(adapter.renderer()),
            vec![
                VisualizerKind::PointSprites,
                VisualizerKind::CanvasLabels,
                VisualizerKind::Polylines
            ]
        );
    }

    #[test]
    fn test_projection_change_pushes_everything() {
        let adapter = adapter();
        let r = adapter.renderer();
        assert_eq!(r.positions.as_ref().unwrap().len(), 12);
        assert_eq!(r.colors.as_ref().unwrap().len(), 12);
        assert_eq!(r.scale_factors.as_ref().unwrap().len(), 4);
        assert_eq!(r.polyline_opacities.as_ref().unwrap().len(), 1);
        assert_eq!(r.dimensions, Some(Dimensionality::Two));
        assert_eq!(r.render_count, 1);
    }

    #[test]
    fn test_hover_regenerates_attributes_not_positions() {
        let mut adapter = adapter();
        adapter.on_hover_changed(Some(2));
        let r = adapter.renderer();
        assert!(!r.calls.contains(&"set_point_positions"));
        assert!(r.calls.contains(&"set_point_colors"));
        assert_eq!(r.calls.last(), Some(&"render"));
        assert_eq!(adapter.state().hover, Hover::Point(2));
    }

    #[test]
    fn test_render_comes_after_pushes() {
        let mut adapter = adapter();
        adapter.on_selection_changed(vec![1], vec![Neighbor::new(2, 0.3)]);
        let calls = &adapter.renderer().calls;
        let render_at = calls.iter().position(|c| *c == "render").unwrap();
        assert_eq!(render_at, calls.len() - 1);
        assert!(calls[..render_at].contains(&"set_polyline_widths"));
    }

    #[test]
    fn test_cleared_projection_still_renders() {
        let mut adapter = adapter();
        adapter.on_projection_changed(None);
        let r = adapter.renderer();
        assert_eq!(r.calls.last(), Some(&"render"));
        assert!(!r.calls.contains(&"set_point_colors"));
        assert!(adapter.projection().is_none());
    }

    #[test]
    fn test_events_without_projection_only_render() {
        let mut adapter = ScatterAdapter::new(RecordingRenderer::new());
        adapter.renderer_mut().clear_calls();
        adapter.on_selection_changed(vec![0], vec![]);
        adapter.on_hover_changed(Some(0));
        adapter.on_distance_metric_changed(DistanceMetric::Euclidean);
        assert_eq!(adapter.renderer().calls, vec!["render", "render", "render"]);
        assert_eq!(adapter.state().distance_metric, DistanceMetric::Euclidean);
    }

    #[test]
    fn test_unrenderable_projection_skips_buffers() {
        let mut adapter = ScatterAdapter::new(RecordingRenderer::new());
        adapter.on_projection_changed(Some(Projection::new(
            ProjectionType::Tsne,
            ProjectionComponents::planar("x", "y"),
            dataset(),
        )));
        let r = adapter.renderer();
        assert!(r.positions.is_none());
        assert!(r.colors.is_none());
        assert_eq!(r.render_count, 1);
    }

    #[test]
    fn test_same_dataset_keeps_visualizers() {
        let ds = dataset();
        let mut adapter = ScatterAdapter::new(RecordingRenderer::new());
        adapter.on_projection_changed(Some(projection(ds.clone())));
        adapter.renderer_mut().clear_calls();

        adapter.on_projection_changed(Some(projection(ds)));
        assert!(!adapter.renderer().calls.contains(&"remove_all_visualizers"));

        adapter.on_projection_changed(Some(projection(dataset())));
        assert!(adapter.renderer().calls.contains(&"remove_all_visualizers"));
    }

    #[test]
    fn test_dataset_change_reattaches_and_repositions() {
        let mut adapter = adapter();
        let mut bigger = (*dataset()).clone();
        bigger.points.push(DataPoint::new(4).with_projection("x", 9.0).with_projection("y", 1.0));
        adapter.on_dataset_changed(Arc::new(bigger));

        let r = adapter.renderer();
        assert_eq!(r.positions.as_ref().unwrap().len(), 15);
        assert_eq!(adapter.projection().unwrap().dataset.len(), 5);
        assert!(r.calls.contains(&"remove_all_visualizers"));
    }

    #[test]
    fn test_switch_to_3d_labels() {
        let mut adapter = adapter();
        adapter.set_label_point_accessor(Some("label".to_string()));
        adapter.set_render_labels_in_3d(true);

        let r = adapter.renderer();
        assert_eq!(kinds(r), vec![VisualizerKind::Labels3D, VisualizerKind::Polylines]);
        match &r.visualizers[0] {
            Visualizer::Labels3D(v) => assert_eq!(v.label_strings[3], "pt3"),
            other => panic!("unexpected visualizer {:?}", other),
        }
        // 3D palette applies to the baseline
        let white = adapter.style().points.labels_3d_no_selection.to_array();
        assert_eq!(&r.colors.as_ref().unwrap()[0..3], &white);
    }

    #[test]
    fn test_accessor_change_in_3d_rebuilds_labels() {
        let mut adapter = adapter();
        adapter.set_render_labels_in_3d(true);
        adapter.set_label_point_accessor(Some("label".to_string()));
        match &adapter.renderer().visualizers[0] {
            Visualizer::Labels3D(v) => assert_eq!(v.label_strings[0], "pt0"),
            other => panic!("unexpected visualizer {:?}", other),
        }
    }

    #[test]
    fn test_mode_switch_without_dataset() {
        let mut adapter = ScatterAdapter::new(RecordingRenderer::new());
        adapter.set_render_labels_in_3d(true);
        adapter.set_render_labels_in_3d(false);
        assert_eq!(adapter.renderer().visualizers.len(), 3);
    }

    #[test]
    fn test_legend_colorer_applies() {
        let mut adapter = adapter();
        let colorer: PointColorer =
            Arc::new(|_: &Dataset, _: usize| crate::color::Color::rgb(0.0, 1.0, 0.0));
        adapter.set_legend_point_colorer(Some(colorer));
        let colors = adapter.renderer().colors.clone().unwrap();
        assert_eq!(&colors[0..3], &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_camera_bookmark_round_trip() {
        let mut adapter = adapter();
        let cam = CameraDef::perspective([2.0, 2.0, 2.0], [0.0, 0.0, 0.0]);
        adapter.set_camera_def(Some(cam.clone()));
        let json = adapter.camera_def_json().unwrap();

        adapter.set_camera_def(None);
        assert_eq!(adapter.camera_def(), CameraDef::default_for(Dimensionality::Two));

        adapter.restore_camera_def_json(&json).unwrap();
        assert_eq!(adapter.camera_def(), cam);
        assert!(adapter.restore_camera_def_json("nope").is_err());
    }

    #[test]
    fn test_resize_forwards() {
        let mut adapter = adapter();
        adapter.resize();
        assert_eq!(adapter.renderer().resize_count, 1);
    }
}
