//! Guided tour over career locations on a 3D globe.
//!
//! [`navigator`] is the pure cursor state machine. [`tour::JourneyTour`] drives
//! it and pushes the resulting frame (points, arcs, camera, controls) into a
//! [`render::GlobeRenderer`]; the renderer itself lives in the host.

pub mod arcs;
pub mod error;
pub mod navigator;
pub mod render;
pub mod tour;

pub use arcs::{Arc, ArcStyle, connecting_arcs};
pub use error::JourneyError;
pub use navigator::{
    Direction, Navigator, NavigatorState, ProgressDot, advance, initialize, jump_to, progress,
    visible_records,
};
pub use render::{
    CameraTarget, ControlMode, GlobeCommand, GlobePoint, GlobeRenderer, RecordingRenderer,
};
pub use tour::{JourneyTour, TourConfig};
