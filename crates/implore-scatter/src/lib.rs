//! implore-scatter - Scatter plot adapter for embedding projections
//!
//! This crate turns a projected dataset plus interaction state into the flat
//! buffers a GPU scatter renderer consumes, and keeps the renderer's
//! sub-visualizers in step with the current label mode.
//!
//! # Key Components
//!
//! - **ScatterAdapter**: Event handlers for projection, selection, hover, metric and label mode
//! - **ScatterRenderer**: The renderer boundary; buffers are handed over by value
//! - **Attributes**: Pure generators for point colors, scales, labels and polylines
//! - **DistanceMetric**: Cosine and Euclidean metrics with per-metric normalization
//! - **ScatterStyle**: Palette, scales, label and polyline styling loaded from TOML or JSON
//!
//! # Label Modes
//!
//! - **SpriteCanvas**: Point sprites with a 2D canvas label overlay
//! - **Text3D**: 3D text labels, one per point

pub mod adapter;
pub mod attributes;
pub mod camera;
pub mod color;
pub mod config;
pub mod dataset;
pub mod error;
pub mod metric;
pub mod positions;
pub mod projection;
pub mod renderer;
pub mod scale;
pub mod state;
pub mod visualizer;

pub use adapter::ScatterAdapter;
pub use attributes::{LabelRenderParams, PointColorer, ScatterAttributes};
pub use camera::*;
pub use color::{Color, ColorScale};
pub use config::*;
pub use dataset::*;
pub use error::{ScatterError, ScatterResult};
pub use metric::*;
pub use positions::{generate_point_positions, SCATTER_PLOT_CUBE_LENGTH};
pub use projection::*;
pub use renderer::{RecordingRenderer, ScatterRenderer};
pub use state::*;
pub use visualizer::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
