//! Alarm time editor.

use core::fmt::Write as _;

use embassy_time::{Duration, Instant};
use heapless::String;

use crate::event::{Button, ButtonEvent, ButtonPress};
use crate::platform::{FontSize, Platform, Screen, WallClock};
use crate::scene::{EventResult, Scene};
use crate::time_of_day::TimeOfDay;

/// Field the editor is currently changing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cursor {
    #[default]
    Hour,
    Minute,
    Second,
}

impl Cursor {
    const fn step(self) -> Duration {
        match self {
            Self::Hour => Duration::from_secs(60 * 60),
            Self::Minute => Duration::from_secs(60),
            Self::Second => Duration::from_secs(1),
        }
    }
}

/// Scene for arming the alarm.
///
/// Starts from the current time. Button B moves the cursor across hour,
/// minute and second; moving past the second commits the edited time
/// through the alarm setter and finishes back to the scene below. Buttons
/// C and A step the selected field up and down, autorepeating while
/// held. Steps wrap through the whole day, so backing an hour out of
/// 00:30 lands on 23:30.
#[derive(Debug, Clone, Default)]
pub struct ConfigureAlarmScene {
    edit: TimeOfDay,
    cursor: Cursor,
}

impl ConfigureAlarmScene {
    pub const fn new() -> Self {
        Self {
            edit: TimeOfDay::MIDNIGHT,
            cursor: Cursor::Hour,
        }
    }

    /// Field currently under the cursor.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Time as currently edited.
    pub const fn edited(&self) -> TimeOfDay {
        self.edit
    }

    fn draw<P: Platform>(&self, hw: &mut P) {
        let mut line: String<20> = String::new();
        let _ = write!(line, "{}", self.edit);
        let screen = hw.screen();
        screen.text_centered(160, 100, FontSize::Huge, &line);

        let marker = match self.cursor {
            Cursor::Hour => "--      ",
            Cursor::Minute => "   --   ",
            Cursor::Second => "      --",
        };
        screen.text_centered(160, 140, FontSize::Huge, marker);
    }
}

impl<P: Platform> Scene<P> for ConfigureAlarmScene {
    fn activated(&mut self, hw: &mut P, _now: Instant) -> EventResult {
        self.edit = hw.clock().now();
        self.cursor = Cursor::Hour;
        let screen = hw.screen();
        screen.clear();
        screen.text(10, 10, FontSize::Medium, "Set alarm");
        self.draw(hw);
        EventResult::Continue
    }

    fn button_event(&mut self, hw: &mut P, event: ButtonEvent) -> EventResult {
        match (event.button, event.press) {
            (Button::B, ButtonPress::Pressed) => {
                match self.cursor {
                    Cursor::Hour => self.cursor = Cursor::Minute,
                    Cursor::Minute => self.cursor = Cursor::Second,
                    Cursor::Second => {
                        let _ = hw.set_alarm(self.edit);
                        return EventResult::Finish;
                    }
                }
                self.draw(hw);
                EventResult::Continue
            }
            (Button::C, ButtonPress::Pressed | ButtonPress::Repeated) => {
                self.edit += self.cursor.step();
                self.draw(hw);
                EventResult::Continue
            }
            (Button::A, ButtonPress::Pressed | ButtonPress::Repeated) => {
                self.edit -= self.cursor.step();
                self.draw(hw);
                EventResult::Continue
            }
            _ => EventResult::Continue,
        }
    }
}
