//! Boot scene: waits for the wall clock to synchronize.

use embassy_time::Instant;

use crate::event::{Button, ButtonEvent, ButtonPress};
use crate::platform::{FontSize, Platform, Screen, WallClock};
use crate::scene::{ClockScene, EventResult, Scene, SceneSlot};

/// First scene after power-up.
///
/// Kicks off wall-clock synchronization and holds the screen until it
/// completes, then replaces itself with the clock display. Button A skips
/// the wait for use away from any network; the clock then shows whatever
/// the RTC last held.
#[derive(Debug, Clone, Default)]
pub struct BootScene;

impl BootScene {
    pub const fn new() -> Self {
        Self
    }
}

impl<P: Platform> Scene<P> for BootScene {
    fn activated(&mut self, hw: &mut P, _now: Instant) -> EventResult {
        hw.clock_mut().start_sync();
        let screen = hw.screen();
        screen.clear();
        screen.text(10, 10, FontSize::Medium, "Syncing clock...");
        screen.text(10, 40, FontSize::Small, "A: skip");
        EventResult::Continue
    }

    fn tick(&mut self, hw: &mut P, _now: Instant) -> EventResult {
        if hw.clock().synced() {
            EventResult::ReplaceScene(SceneSlot::Clock(ClockScene::new()))
        } else {
            EventResult::Continue
        }
    }

    fn button_event(&mut self, _hw: &mut P, event: ButtonEvent) -> EventResult {
        match (event.button, event.press) {
            (Button::A, ButtonPress::Pressed) => {
                EventResult::ReplaceScene(SceneSlot::Clock(ClockScene::new()))
            }
            _ => EventResult::Continue,
        }
    }
}
