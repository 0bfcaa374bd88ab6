//! Scene system with compile-time known scene variants.
//!
//! All scenes are stored in an enum to avoid heap allocations. Each scene
//! implements the `Scene` trait; the engine dispatches events to whichever
//! slot sits on top of its stack and applies the returned transition.

mod alarming;
mod boot;
mod clock;
mod configure_alarm;

use embassy_time::Instant;

pub use alarming::{
    ALARM_CLEARED_POST, AlarmingScene, DEFAULT_SHAKE_GOAL, DEFAULT_TIME_BUDGET, OVERSLEPT_POST,
};
pub use boot::BootScene;
pub use clock::ClockScene;
pub use configure_alarm::{ConfigureAlarmScene, Cursor};

use crate::event::ButtonEvent;
use crate::platform::Platform;

/// What the engine should do with the stack after a handler runs.
///
/// Carried scenes are owned by the result and handed over to the stack
/// wholesale; there is no way to keep a handle to a scene that was
/// replaced or finished.
#[derive(Debug, Clone)]
pub enum EventResult {
    /// Keep the current scene active.
    Continue,
    /// Pop the current scene and return to the one below it.
    Finish,
    /// Suspend the current scene and activate the carried one on top.
    PushScene(SceneSlot),
    /// Destroy the current scene and activate the carried one instead.
    ReplaceScene(SceneSlot),
}

/// Behavior shared by every scene.
///
/// Handlers run on the UI task with exclusive access to both the scene
/// and the platform facade; they never block. Every handler defaults to
/// [`EventResult::Continue`], so scenes implement only what they react
/// to.
pub trait Scene<P: Platform> {
    /// Called whenever the scene becomes the active top of the stack:
    /// once when it first lands there and again each time a scene above
    /// it finishes.
    fn activated(&mut self, _hw: &mut P, _now: Instant) -> EventResult {
        EventResult::Continue
    }

    /// Periodic heartbeat, nominally every 100 ms.
    fn tick(&mut self, _hw: &mut P, _now: Instant) -> EventResult {
        EventResult::Continue
    }

    /// A button edge or autorepeat.
    fn button_event(&mut self, _hw: &mut P, _event: ButtonEvent) -> EventResult {
        EventResult::Continue
    }

    /// Informational notice that the armed alarm fired. The engine brings
    /// up the alarm UI on its own; scenes only use this to tidy up.
    fn alarm(&mut self, _hw: &mut P) -> EventResult {
        EventResult::Continue
    }
}

/// Scene slot - enum containing all possible scenes.
#[derive(Debug, Clone)]
pub enum SceneSlot {
    /// Waits for the wall clock to synchronize.
    Boot(BootScene),
    /// Idle time display.
    Clock(ClockScene),
    /// Alarm time editor.
    ConfigureAlarm(ConfigureAlarmScene),
    /// Shake-to-silence challenge.
    Alarming(AlarmingScene),
}

impl SceneSlot {
    /// Dispatch [`Scene::activated`] to the stored scene.
    pub fn activated<P: Platform>(&mut self, hw: &mut P, now: Instant) -> EventResult {
        match self {
            Self::Boot(scene) => scene.activated(hw, now),
            Self::Clock(scene) => scene.activated(hw, now),
            Self::ConfigureAlarm(scene) => scene.activated(hw, now),
            Self::Alarming(scene) => scene.activated(hw, now),
        }
    }

    /// Dispatch [`Scene::tick`] to the stored scene.
    pub fn tick<P: Platform>(&mut self, hw: &mut P, now: Instant) -> EventResult {
        match self {
            Self::Boot(scene) => scene.tick(hw, now),
            Self::Clock(scene) => scene.tick(hw, now),
            Self::ConfigureAlarm(scene) => scene.tick(hw, now),
            Self::Alarming(scene) => scene.tick(hw, now),
        }
    }

    /// Dispatch [`Scene::button_event`] to the stored scene.
    pub fn button_event<P: Platform>(&mut self, hw: &mut P, event: ButtonEvent) -> EventResult {
        match self {
            Self::Boot(scene) => scene.button_event(hw, event),
            Self::Clock(scene) => scene.button_event(hw, event),
            Self::ConfigureAlarm(scene) => scene.button_event(hw, event),
            Self::Alarming(scene) => scene.button_event(hw, event),
        }
    }

    /// Dispatch [`Scene::alarm`] to the stored scene.
    pub fn alarm<P: Platform>(&mut self, hw: &mut P) -> EventResult {
        match self {
            Self::Boot(scene) => scene.alarm(hw),
            Self::Clock(scene) => scene.alarm(hw),
            Self::ConfigureAlarm(scene) => scene.alarm(hw),
            Self::Alarming(scene) => scene.alarm(hw),
        }
    }

    /// Short scene name for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boot(_) => "boot",
            Self::Clock(_) => "clock",
            Self::ConfigureAlarm(_) => "configure_alarm",
            Self::Alarming(_) => "alarming",
        }
    }
}
