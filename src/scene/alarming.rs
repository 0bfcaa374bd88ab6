//! Shake-to-silence challenge.

use core::fmt::Write as _;

use embassy_time::{Duration, Instant};
use heapless::String;

use crate::platform::{FontSize, Platform, Poster, Screen, Speaker, Track};
use crate::scene::{EventResult, Scene};

/// Shakes required to silence the alarm.
pub const DEFAULT_SHAKE_GOAL: u32 = 5;

/// Time allowed to reach the goal.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(10);

/// Message posted when the challenge is cleared in time.
pub const ALARM_CLEARED_POST: &str = "Shook myself awake before the deadline. Good morning!";

/// Message posted when the time budget runs out.
pub const OVERSLEPT_POST: &str = "Slept through the shake alarm again...";

/// The wake-up challenge.
///
/// Rings the speaker in a one-second-on/one-second-off cadence and counts
/// shakes until either the goal is met or the budget runs out. Both ways
/// out stop the audio and the counter, clear the armed-alarm display and
/// post the outcome. The deadline is measured on the monotonic clock, so
/// a wall-clock resync mid-challenge cannot stretch or cut it.
#[derive(Debug, Clone)]
pub struct AlarmingScene {
    goal: u32,
    budget: Duration,
    deadline: Option<Instant>,
    ticks: u32,
    beeping: bool,
}

impl AlarmingScene {
    pub const fn new() -> Self {
        Self::with_challenge(DEFAULT_SHAKE_GOAL, DEFAULT_TIME_BUDGET)
    }

    /// Create with a custom goal and time budget.
    pub const fn with_challenge(goal: u32, budget: Duration) -> Self {
        Self {
            goal,
            budget,
            deadline: None,
            ticks: 0,
            beeping: false,
        }
    }

    fn stop_alarm<P: Platform>(&mut self, hw: &mut P) {
        hw.speaker().stop();
        let shake = hw.shake();
        shake.stop();
        shake.reset_count();
        hw.clear_armed_alarm();
        self.beeping = false;
    }

    fn draw<P: Platform>(&self, hw: &mut P, count: u32, deadline: Instant, now: Instant) {
        let remaining = if now < deadline {
            deadline - now
        } else {
            Duration::from_millis(0)
        };
        let left = self.goal.saturating_sub(count);

        let mut line: String<20> = String::new();
        let _ = write!(line, "{} to go", left);
        let screen = hw.screen();
        screen.text_centered(160, 100, FontSize::Huge, &line);

        line.clear();
        let _ = write!(line, "{}s left", remaining.as_secs());
        screen.text_centered(160, 170, FontSize::Medium, &line);
    }
}

impl Default for AlarmingScene {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Platform> Scene<P> for AlarmingScene {
    fn activated(&mut self, hw: &mut P, now: Instant) -> EventResult {
        self.deadline = Some(now + self.budget);
        self.ticks = 0;
        self.beeping = true;

        let shake = hw.shake();
        shake.reset_count();
        shake.start();
        hw.speaker().play(Track::Alarm);

        let screen = hw.screen();
        screen.clear();
        screen.text_centered(160, 30, FontSize::Medium, "Shake to stop the alarm!");
        EventResult::Continue
    }

    fn tick(&mut self, hw: &mut P, now: Instant) -> EventResult {
        let deadline = match self.deadline {
            Some(deadline) => deadline,
            // Inert until activated puts us on top of the stack.
            None => return EventResult::Continue,
        };

        // Beep cadence: one second on, one second off.
        let phase_on = (self.ticks / 10) % 2 == 0;
        if phase_on != self.beeping {
            self.beeping = phase_on;
            if phase_on {
                hw.speaker().play(Track::Alarm);
            } else {
                hw.speaker().stop();
            }
        }
        self.ticks = self.ticks.wrapping_add(1);

        let count = hw.shake().count();
        if count >= self.goal {
            self.stop_alarm(hw);
            hw.poster().post(ALARM_CLEARED_POST);
            return EventResult::Finish;
        }

        self.draw(hw, count, deadline, now);

        if now >= deadline {
            self.stop_alarm(hw);
            hw.poster().post(OVERSLEPT_POST);
            return EventResult::Finish;
        }

        EventResult::Continue
    }
}
