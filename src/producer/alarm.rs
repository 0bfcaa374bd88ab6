//! Alarm clock-compare producer.
//!
//! The alarm task owns the armed target time outright. Other tasks never
//! touch it directly: arming goes through a dedicated setter queue that
//! this producer drains at the start of every period, so concurrent
//! updates serialize cleanly and the last one wins.

use embassy_time::Duration;

use crate::bus::{Channel, Receiver, Sender};
use crate::event::{Event, EventSender};
use crate::time_of_day::TimeOfDay;

/// Polling period of the alarm task.
pub const ALARM_PERIOD: Duration = Duration::from_millis(100);

/// How far past the target a poll may land and still fire.
///
/// Just under ten polling periods: even with scheduling jitter a poll
/// cannot step over the window, and a window this small cannot wrap far
/// enough to rematch on a later day.
pub const ALARM_FIRE_WINDOW: Duration = Duration::from_millis(990);

/// Capacity of the alarm-time setter queue.
pub const ALARM_SETTER_QUEUE_SIZE: usize = 16;

/// Type alias for the setter channel.
pub type AlarmTimeChannel<const SIZE: usize> = Channel<TimeOfDay, SIZE>;

/// Type alias for the alarm task's end of the setter channel.
pub type AlarmTimeReceiver<'a, const SIZE: usize> = Receiver<'a, TimeOfDay, SIZE>;

/// UI-side handle that arms the alarm.
#[derive(Clone, Copy)]
pub struct AlarmTimeSetter<'a, const SIZE: usize> {
    updates: Sender<'a, TimeOfDay, SIZE>,
}

impl<'a, const SIZE: usize> AlarmTimeSetter<'a, SIZE> {
    /// Create a setter over the update channel.
    pub const fn new(updates: Sender<'a, TimeOfDay, SIZE>) -> Self {
        Self { updates }
    }

    /// Queue `time` as the new alarm target.
    ///
    /// Returns `false` if the queue rejected the update; the previously
    /// armed time then stays in effect.
    pub fn set(&self, time: TimeOfDay) -> bool {
        self.updates.try_send(time).is_ok()
    }
}

/// Compares the wall clock against the armed time and fires the alarm.
pub struct AlarmClock<'a, const QUEUE: usize, const SETTER: usize> {
    armed: Option<TimeOfDay>,
    updates: AlarmTimeReceiver<'a, SETTER>,
    events: EventSender<'a, QUEUE>,
}

impl<'a, const QUEUE: usize, const SETTER: usize> AlarmClock<'a, QUEUE, SETTER> {
    /// Create a disarmed alarm clock.
    pub const fn new(
        updates: AlarmTimeReceiver<'a, SETTER>,
        events: EventSender<'a, QUEUE>,
    ) -> Self {
        Self {
            armed: None,
            updates,
            events,
        }
    }

    /// Run one compare period against the current wall-clock time.
    ///
    /// Call every [`ALARM_PERIOD`]. Queued setter updates apply first;
    /// then, if armed and `now` lies at the target or within
    /// [`ALARM_FIRE_WINDOW`] after it, one [`Event::Alarm`] is emitted
    /// and the clock disarms until the next setter update.
    pub fn poll(&mut self, now: TimeOfDay) {
        while let Ok(time) = self.updates.try_receive() {
            #[cfg(feature = "defmt")]
            defmt::debug!("alarm armed for {}", time);
            self.armed = Some(time);
        }

        if let Some(target) = self.armed {
            if now.is_within_after(target, ALARM_FIRE_WINDOW) {
                self.armed = None;
                let _ = self.events.try_send(Event::Alarm);
            }
        }
    }

    /// Currently armed target, if any.
    pub const fn armed(&self) -> Option<TimeOfDay> {
        self.armed
    }
}
