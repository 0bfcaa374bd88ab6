//! Clock scene: the idle time display.

use core::fmt::Write as _;

use embassy_time::Instant;
use heapless::String;

use crate::event::{Button, ButtonEvent, ButtonPress};
use crate::platform::{FontSize, Platform, Screen, WallClock};
use crate::scene::{AlarmingScene, ConfigureAlarmScene, EventResult, Scene, SceneSlot};
use crate::time_of_day::TimeOfDay;

/// Time display the device idles on.
///
/// Redraws only when the displayed second changes, so nine out of ten
/// ticks leave the screen untouched. Button A opens the alarm editor,
/// button B starts the shake challenge by hand.
#[derive(Debug, Clone, Default)]
pub struct ClockScene {
    shown: Option<(u8, u8, u8)>,
}

impl ClockScene {
    pub const fn new() -> Self {
        Self { shown: None }
    }

    fn draw<P: Platform>(&self, hw: &mut P, now: TimeOfDay) {
        let mut line: String<20> = String::new();
        let _ = write!(line, "{}", now);
        hw.screen().text_centered(160, 100, FontSize::Huge, &line);

        line.clear();
        match hw.armed_alarm() {
            Some(alarm) => {
                let _ = write!(line, "alarm {}", alarm);
            }
            None => {
                let _ = line.push_str("no alarm");
            }
        }
        hw.screen().text_centered(160, 180, FontSize::Small, &line);
    }
}

impl<P: Platform> Scene<P> for ClockScene {
    fn activated(&mut self, hw: &mut P, _now: Instant) -> EventResult {
        self.shown = None;
        hw.screen().clear();
        EventResult::Continue
    }

    fn tick(&mut self, hw: &mut P, _now: Instant) -> EventResult {
        let now = hw.clock().now();
        let hms = (now.hour(), now.minute(), now.second());
        if self.shown != Some(hms) {
            self.shown = Some(hms);
            self.draw(hw, now);
        }
        EventResult::Continue
    }

    fn button_event(&mut self, _hw: &mut P, event: ButtonEvent) -> EventResult {
        match (event.button, event.press) {
            (Button::A, ButtonPress::Pressed) => {
                EventResult::PushScene(SceneSlot::ConfigureAlarm(ConfigureAlarmScene::new()))
            }
            (Button::B, ButtonPress::Pressed) => {
                EventResult::PushScene(SceneSlot::Alarming(AlarmingScene::new()))
            }
            _ => EventResult::Continue,
        }
    }
}
