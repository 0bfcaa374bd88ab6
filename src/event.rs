//! Event vocabulary shared by the producers and the scene engine.
//!
//! Producer tasks (ticker, button monitor, alarm clock) translate hardware
//! activity into [`Event`] values and push them onto one shared bus; the
//! scene engine is the single consumer. Payloads are carried by value, so
//! exactly one side owns an event at any instant.

use crate::bus::{Channel, Receiver, Sender};

/// Physical buttons on the face of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    A,
    B,
    C,
}

/// How a button event was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonPress {
    /// Released-to-pressed edge.
    Pressed,
    /// Pressed-to-released edge.
    Released,
    /// Autorepeat while the button stays held.
    Repeated,
}

/// A single button edge or autorepeat report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub button: Button,
    pub press: ButtonPress,
}

/// An event delivered to the scene engine over the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Periodic UI heartbeat, nominally every 100 ms.
    Tick,
    /// A button edge or autorepeat.
    Button(ButtonEvent),
    /// The armed alarm time has been reached.
    Alarm,
}

impl Event {
    /// Shorthand for a button event.
    pub const fn button(button: Button, press: ButtonPress) -> Self {
        Self::Button(ButtonEvent { button, press })
    }
}

/// Recommended capacity of the shared event queue.
///
/// Steady state is light (a tick every 100 ms plus occasional button
/// edges), so 128 slots absorb a consumer stall of several seconds before
/// the bus starts dropping. Late events are preferable to blocked
/// producers.
pub const EVENT_QUEUE_SIZE: usize = 128;

/// Type alias for the event channel.
pub type EventChannel<const SIZE: usize> = Channel<Event, SIZE>;

/// Type alias for an event sender handle.
pub type EventSender<'a, const SIZE: usize> = Sender<'a, Event, SIZE>;

/// Type alias for an event receiver handle.
pub type EventReceiver<'a, const SIZE: usize> = Receiver<'a, Event, SIZE>;
