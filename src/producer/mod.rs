//! Event producer tasks.
//!
//! Each producer owns one hardware concern, runs at its own fixed period
//! and pushes [`Event`](crate::Event)s onto the shared bus. Sends are
//! non-blocking best-effort: a full bus drops the event and counts it,
//! never stalling the producing task. The caller is responsible for
//! sleeping between polls (see the period constant on each producer).

mod alarm;
mod button;
mod ticker;

pub use alarm::{
    ALARM_FIRE_WINDOW, ALARM_PERIOD, ALARM_SETTER_QUEUE_SIZE, AlarmClock, AlarmTimeChannel,
    AlarmTimeReceiver, AlarmTimeSetter,
};
pub use button::{
    BUTTON_PERIOD, ButtonMonitor, ButtonProbe, REPEAT_DELAY_POLLS, REPEAT_INTERVAL_POLLS,
};
pub use ticker::{TICK_PERIOD, Ticker};
