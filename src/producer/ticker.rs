//! Periodic UI heartbeat.

use embassy_time::Duration;

use crate::event::{Event, EventSender};

/// Period between ticks.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Pushes one [`Event::Tick`] per period onto the bus.
///
/// Scenes derive every redraw and every animation step from these ticks,
/// so a stalled consumer shows up as a frozen display rather than a
/// wedged producer.
pub struct Ticker<'a, const SIZE: usize> {
    events: EventSender<'a, SIZE>,
}

impl<'a, const SIZE: usize> Ticker<'a, SIZE> {
    /// Create a ticker feeding `events`.
    pub const fn new(events: EventSender<'a, SIZE>) -> Self {
        Self { events }
    }

    /// Emit one tick. Call every [`TICK_PERIOD`].
    pub fn poll(&mut self) {
        let _ = self.events.try_send(Event::Tick);
    }
}
