//! The renderer boundary
//!
//! The renderer owns the scene, camera and frame loop. The adapter pushes
//! freshly generated buffers into it by value, then asks it to render.

use crate::attributes::LabelRenderParams;
use crate::camera::CameraDef;
use crate::projection::Dimensionality;
use crate::visualizer::Visualizer;

/// Sink for scatter plot buffers
pub trait ScatterRenderer {
    /// Packed XYZ positions, one triple per point
    fn set_point_positions(&mut self, positions: Vec<f32>);

    /// Packed RGB colors, one triple per point
    fn set_point_colors(&mut self, colors: Vec<f32>);

    /// One scale factor per point
    fn set_point_scale_factors(&mut self, scale_factors: Vec<f32>);

    /// Visible label set
    fn set_labels(&mut self, labels: LabelRenderParams);

    /// Segment endpoint colors, one buffer per sequence
    fn set_polyline_colors(&mut self, colors: Vec<Vec<f32>>);

    /// One opacity per sequence
    fn set_polyline_opacities(&mut self, opacities: Vec<f32>);

    /// One line width per sequence
    fn set_polyline_widths(&mut self, widths: Vec<f32>);

    fn add_visualizer(&mut self, visualizer: Visualizer);

    fn remove_all_visualizers(&mut self);

    fn set_dimensions(&mut self, dimensionality: Dimensionality);

    /// Current camera
    fn camera_def(&self) -> CameraDef;

    /// Camera to use from now on; `None` means the default for the current dimensions
    fn set_camera_def(&mut self, camera: Option<CameraDef>);

    /// Draw a frame with the current buffers
    fn render(&mut self);

    /// React to a container size change
    fn resize(&mut self);
}

/// A renderer that keeps the last value of every buffer it was handed
///
/// Useful for headless hosts (snapshot export, golden tests) and as a
/// reference for what a real renderer receives. `calls` logs the order of
/// every trait call.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub positions: Option<Vec<f32>>,
    pub colors: Option<Vec<f32>>,
    pub scale_factors: Option<Vec<f32>>,
    pub labels: Option<LabelRenderParams>,
    pub polyline_colors: Option<Vec<Vec<f32>>>,
    pub polyline_opacities: Option<Vec<f32>>,
    pub polyline_widths: Option<Vec<f32>>,
    pub visualizers: Vec<Visualizer>,
    pub dimensions: Option<Dimensionality>,
    pub camera: Option<CameraDef>,
    pub render_count: usize,
    pub resize_count: usize,
    pub calls: Vec<&'static str>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the call log, keeping the buffers
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl ScatterRenderer for RecordingRenderer {
    fn set_point_positions(&mut self, positions: Vec<f32>) {
        self.calls.push("set_point_positions");
        self.positions = Some(positions);
    }

    fn set_point_colors(&mut self, colors: Vec<f32>) {
        self.calls.push("set_point_colors");
        self.colors = Some(colors);
    }

    fn set_point_scale_factors(&mut self, scale_factors: Vec<f32>) {
        self.calls.push("set_point_scale_factors");
        self.scale_factors = Some(scale_factors);
    }

    fn set_labels(&mut self, labels: LabelRenderParams) {
        self.calls.push("set_labels");
        self.labels = Some(labels);
    }

    fn set_polyline_colors(&mut self, colors: Vec<Vec<f32>>) {
        self.calls.push("set_polyline_colors");
        self.polyline_colors = Some(colors);
    }

    fn set_polyline_opacities(&mut self, opacities: Vec<f32>) {
        self.calls.push("set_polyline_opacities");
        self.polyline_opacities = Some(opacities);
    }

    fn set_polyline_widths(&mut self, widths: Vec<f32>) {
        self.calls.push("set_polyline_widths");
        self.polyline_widths = Some(widths);
    }

    fn add_visualizer(&mut self, visualizer: Visualizer) {
        self.calls.push("add_visualizer");
        self.visualizers.push(visualizer);
    }

    fn remove_all_visualizers(&mut self) {
        self.calls.push("remove_all_visualizers");
        self.visualizers.clear();
    }

    fn set_dimensions(&mut self, dimensionality: Dimensionality) {
        self.calls.push("set_dimensions");
        self.dimensions = Some(dimensionality);
    }

    fn camera_def(&self) -> CameraDef {
        match (&self.camera, self.dimensions) {
            (Some(camera), _) => camera.clone(),
            (None, Some(dims)) => CameraDef::default_for(dims),
            (None, None) => CameraDef::default(),
        }
    }

    fn set_camera_def(&mut self, camera: Option<CameraDef>) {
        self.calls.push("set_camera_def");
        self.camera = camera;
    }

    fn render(&mut self) {
        self.calls.push("render");
        self.render_count += 1;
    }

    fn resize(&mut self) {
        self.calls.push("resize");
        self.resize_count += 1;
    }
}
