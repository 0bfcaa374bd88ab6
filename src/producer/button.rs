//! Button edge detection and autorepeat.

use embassy_time::Duration;

use crate::event::{Button, ButtonPress, Event, EventSender};

/// Polling period of the button task.
pub const BUTTON_PERIOD: Duration = Duration::from_millis(10);

/// Polls a button must stay held before the first `Repeated` (500 ms).
pub const REPEAT_DELAY_POLLS: u16 = 50;

/// Polls between `Repeated` events while held (100 ms).
pub const REPEAT_INTERVAL_POLLS: u16 = 10;

/// Raw state of the three face buttons.
pub trait ButtonProbe {
    /// Whether `button` is physically held down right now.
    ///
    /// Implementations debounce if the raw line is noisy; at a 10 ms
    /// polling period a single clean sample per poll is enough.
    fn is_pressed(&mut self, button: Button) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct HoldState {
    held: bool,
    held_polls: u16,
}

const RELEASED: HoldState = HoldState {
    held: false,
    held_polls: 0,
};

const BUTTONS: [Button; 3] = [Button::A, Button::B, Button::C];

/// Polls the face buttons and reports edges and autorepeats.
///
/// Emits `Pressed` and `Released` exactly once per edge. While a button
/// stays held it emits `Repeated` after [`REPEAT_DELAY_POLLS`] and then
/// every [`REPEAT_INTERVAL_POLLS`], which is what lets scenes scrub
/// values by holding a button.
pub struct ButtonMonitor<'a, B: ButtonProbe, const SIZE: usize> {
    probe: B,
    held: [HoldState; 3],
    events: EventSender<'a, SIZE>,
}

impl<'a, B: ButtonProbe, const SIZE: usize> ButtonMonitor<'a, B, SIZE> {
    /// Create a monitor over `probe`, feeding `events`.
    pub const fn new(probe: B, events: EventSender<'a, SIZE>) -> Self {
        Self {
            probe,
            held: [RELEASED; 3],
            events,
        }
    }

    /// Run one polling period. Call every [`BUTTON_PERIOD`].
    pub fn poll(&mut self) {
        for (slot, button) in self.held.iter_mut().zip(BUTTONS) {
            let down = self.probe.is_pressed(button);
            if down && !slot.held {
                slot.held = true;
                slot.held_polls = 0;
                let _ = self
                    .events
                    .try_send(Event::button(button, ButtonPress::Pressed));
            } else if !down && slot.held {
                slot.held = false;
                let _ = self
                    .events
                    .try_send(Event::button(button, ButtonPress::Released));
            } else if down {
                slot.held_polls += 1;
                if slot.held_polls >= REPEAT_DELAY_POLLS {
                    // Roll back one interval so the next repeat lands
                    // exactly one interval from now; the counter stays
                    // bounded no matter how long the button is held.
                    slot.held_polls -= REPEAT_INTERVAL_POLLS;
                    let _ = self
                        .events
                        .try_send(Event::button(button, ButtonPress::Repeated));
                }
            }
        }
    }
}
