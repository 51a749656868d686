use content::LocationRecord;
use foundation::LatLng;
use serde::{Deserialize, Serialize};

use crate::arcs::{ArcStyle, connecting_arcs};
use crate::error::JourneyError;
use crate::navigator::{Direction, Navigator, ProgressDot, initialize};
use crate::render::{CameraTarget, ControlMode, GlobePoint, GlobeRenderer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TourConfig {
    /// Camera altitude in globe radii.
    pub camera_altitude: f64,
    pub transition_ms: u32,
    pub auto_rotate_speed: f64,
    pub arcs: ArcStyle,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            camera_altitude: 2.5,
            transition_ms: 1000,
            auto_rotate_speed: 2.0,
            arcs: ArcStyle::default(),
        }
    }
}

/// Navigator wired to a globe.
///
/// Every cursor change pushes a full frame to the renderer. Moves that leave
/// the cursor where it was push nothing.
#[derive(Debug)]
pub struct JourneyTour<R> {
    navigator: Navigator,
    renderer: R,
    config: TourConfig,
}

impl<R: GlobeRenderer> JourneyTour<R> {
    pub fn new(
        records: Vec<LocationRecord>,
        renderer: R,
        config: TourConfig,
    ) -> Result<Self, JourneyError> {
        let navigator = initialize(records)?;
        Ok(Self {
            navigator,
            renderer,
            config,
        })
    }

    /// Push the first frame without a camera animation.
    pub fn start(&mut self) {
        self.render(0);
    }

    pub fn next(&mut self) -> bool {
        self.advance(Direction::Next)
    }

    pub fn previous(&mut self) -> bool {
        self.advance(Direction::Previous)
    }

    pub fn advance(&mut self, direction: Direction) -> bool {
        let moved = self.navigator.advance(direction);
        self.after_move(moved)
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        let moved = self.navigator.jump_to(index);
        self.after_move(moved)
    }

    pub fn current(&self) -> &LocationRecord {
        self.navigator.current()
    }

    pub fn can_go_previous(&self) -> bool {
        self.navigator.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.navigator.can_go_next()
    }

    pub fn progress(&self) -> Vec<ProgressDot> {
        self.navigator.progress()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn after_move(&mut self, moved: bool) -> bool {
        if moved {
            self.render(self.config.transition_ms);
        }
        moved
    }

    fn render(&mut self, duration_ms: u32) {
        let visible = self.navigator.visible();
        let points: Vec<GlobePoint> = visible.iter().map(|r| GlobePoint::from(*r)).collect();
        let arcs = connecting_arcs(&visible, &self.config.arcs);

        let current = self.navigator.current();
        let global = current.is_global();
        let camera = CameraTarget {
            position: if global { LatLng::ORIGIN } else { current.coordinates },
            altitude: self.config.camera_altitude,
            duration_ms,
        };
        let mode = ControlMode {
            auto_rotate: global,
            auto_rotate_speed: self.config.auto_rotate_speed,
            input_enabled: false,
        };

        tracing::trace!(
            index = self.navigator.state().index(),
            id = %current.id,
            points = points.len(),
            arcs = arcs.len(),
            "journey frame"
        );

        self.renderer.set_visible_points(&points);
        self.renderer.set_arcs(&arcs);
        self.renderer.retarget(camera);
        self.renderer.set_control_mode(mode);
    }
}
