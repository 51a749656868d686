use content::LocationRecord;
use foundation::LatLng;
use serde::Serialize;

use crate::arcs::Arc;

/// A pin with its hover label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobePoint {
    pub id: String,
    pub position: LatLng,
    pub label: String,
    pub color: String,
}

impl From<&LocationRecord> for GlobePoint {
    fn from(record: &LocationRecord) -> Self {
        Self {
            id: record.id.clone(),
            position: record.coordinates,
            label: record.location.clone(),
            color: record.color.clone(),
        }
    }
}

/// Point of view to animate to. Altitude is in globe radii.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraTarget {
    pub position: LatLng,
    pub altitude: f64,
    pub duration_ms: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlMode {
    pub auto_rotate: bool,
    pub auto_rotate_speed: f64,
    /// Zoom, pan and drag-rotate.
    pub input_enabled: bool,
}

/// The globe widget, seen from the tour.
pub trait GlobeRenderer {
    fn set_visible_points(&mut self, points: &[GlobePoint]);
    fn set_arcs(&mut self, arcs: &[Arc]);
    fn retarget(&mut self, camera: CameraTarget);
    fn set_control_mode(&mut self, mode: ControlMode);
}

impl<R: GlobeRenderer + ?Sized> GlobeRenderer for &mut R {
    fn set_visible_points(&mut self, points: &[GlobePoint]) {
        (**self).set_visible_points(points)
    }

    fn set_arcs(&mut self, arcs: &[Arc]) {
        (**self).set_arcs(arcs)
    }

    fn retarget(&mut self, camera: CameraTarget) {
        (**self).retarget(camera)
    }

    fn set_control_mode(&mut self, mode: ControlMode) {
        (**self).set_control_mode(mode)
    }
}

impl<R: GlobeRenderer + ?Sized> GlobeRenderer for Box<R> {
    fn set_visible_points(&mut self, points: &[GlobePoint]) {
        (**self).set_visible_points(points)
    }

    fn set_arcs(&mut self, arcs: &[Arc]) {
        (**self).set_arcs(arcs)
    }

    fn retarget(&mut self, camera: CameraTarget) {
        (**self).retarget(camera)
    }

    fn set_control_mode(&mut self, mode: ControlMode) {
        (**self).set_control_mode(mode)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", content = "args", rename_all = "camelCase")]
pub enum GlobeCommand {
    SetVisiblePoints(Vec<GlobePoint>),
    SetArcs(Vec<Arc>),
    Retarget(CameraTarget),
    SetControlMode(ControlMode),
}

/// Keeps every command it receives. Used by tests and the CLI preview.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<GlobeCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[GlobeCommand] {
        &self.commands
    }

    pub fn drain(&mut self) -> Vec<GlobeCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn last_camera(&self) -> Option<CameraTarget> {
        self.commands.iter().rev().find_map(|c| match c {
            GlobeCommand::Retarget(camera) => Some(*camera),
            _ => None,
        })
    }

    pub fn last_control_mode(&self) -> Option<ControlMode> {
        self.commands.iter().rev().find_map(|c| match c {
            GlobeCommand::SetControlMode(mode) => Some(*mode),
            _ => None,
        })
    }

    pub fn last_points(&self) -> Option<&[GlobePoint]> {
        self.commands.iter().rev().find_map(|c| match c {
            GlobeCommand::SetVisiblePoints(points) => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn last_arcs(&self) -> Option<&[Arc]> {
        self.commands.iter().rev().find_map(|c| match c {
            GlobeCommand::SetArcs(arcs) => Some(arcs.as_slice()),
            _ => None,
        })
    }
}

impl GlobeRenderer for RecordingRenderer {
    fn set_visible_points(&mut self, points: &[GlobePoint]) {
        self.commands.push(GlobeCommand::SetVisiblePoints(points.to_vec()));
    }

    fn set_arcs(&mut self, arcs: &[Arc]) {
        self.commands.push(GlobeCommand::SetArcs(arcs.to_vec()));
    }

    fn retarget(&mut self, camera: CameraTarget) {
        self.commands.push(GlobeCommand::Retarget(camera));
    }

    fn set_control_mode(&mut self, mode: ControlMode) {
        self.commands.push(GlobeCommand::SetControlMode(mode));
    }
}
