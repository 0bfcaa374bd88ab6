//! Scene stack engine.
//!
//! The single consumer of the event bus. Each pass drains the events that
//! were already queued, dispatches them one at a time to the scene on top
//! of the stack and applies the returned transition fully before the next
//! event is touched. Stack violations are fatal and reported, never
//! papered over.

use core::fmt;

use embassy_time::Instant;
use heapless::Vec;

use crate::event::{Event, EventReceiver};
use crate::platform::Platform;
use crate::scene::{AlarmingScene, EventResult, SceneSlot};

/// Suggested scene stack depth.
///
/// Nesting deeper than clock, editor and a couple of stacked alarm UIs
/// does not happen in practice; 8 leaves slack without costing anything.
pub const SCENE_STACK_DEPTH: usize = 8;

/// Fatal stack violations. The engine must not be driven further once
/// one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// The bottom scene finished; there is nothing left to show.
    StackUnderflow,
    /// A transition pushed past the fixed stack capacity.
    StackOverflow,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackUnderflow => write!(f, "scene stack underflow: the bottom scene finished"),
            Self::StackOverflow => write!(f, "scene stack overflow: nesting exceeded capacity"),
        }
    }
}

impl core::error::Error for EngineError {}

fn underflow() -> EngineError {
    #[cfg(feature = "defmt")]
    defmt::error!("scene stack underflow");
    EngineError::StackUnderflow
}

fn overflow() -> EngineError {
    #[cfg(feature = "defmt")]
    defmt::error!("scene stack overflow");
    EngineError::StackOverflow
}

/// The scene stack and its event pump.
///
/// `QUEUE` is the bus capacity, `DEPTH` the maximum scene nesting
/// (see [`SCENE_STACK_DEPTH`]). The last element of the stack is the
/// active scene; everything below it is suspended and receives nothing
/// until it is exposed again.
pub struct SceneStack<'a, const QUEUE: usize, const DEPTH: usize> {
    events: EventReceiver<'a, QUEUE>,
    scenes: Vec<SceneSlot, DEPTH>,
}

impl<'a, const QUEUE: usize, const DEPTH: usize> SceneStack<'a, QUEUE, DEPTH> {
    /// Create an engine with an empty stack.
    pub const fn new(events: EventReceiver<'a, QUEUE>) -> Self {
        Self {
            events,
            scenes: Vec::new(),
        }
    }

    /// Push the first scene and run its activation chain.
    pub fn initialize<P: Platform>(
        &mut self,
        hw: &mut P,
        now: Instant,
        initial: SceneSlot,
    ) -> Result<(), EngineError> {
        self.apply(hw, now, EventResult::PushScene(initial))
    }

    /// Drain the events that were queued when the call began.
    ///
    /// Returns the number of events processed. Later arrivals wait for
    /// the next call, which keeps one pass bounded even while producers
    /// keep writing.
    pub fn process_available_events<P: Platform>(
        &mut self,
        hw: &mut P,
        now: Instant,
    ) -> Result<usize, EngineError> {
        let pending = self.events.len();
        for processed in 0..pending {
            match self.events.try_receive() {
                Ok(event) => self.dispatch(hw, now, event)?,
                // Single consumer, so the queue cannot shrink under us;
                // stop the pass anyway rather than spin.
                Err(_) => return Ok(processed),
            }
        }
        Ok(pending)
    }

    /// Number of scenes on the stack.
    pub fn depth(&self) -> usize {
        self.scenes.len()
    }

    /// The active scene, if the stack has been initialized.
    pub fn active(&self) -> Option<&SceneSlot> {
        self.scenes.last()
    }

    fn dispatch<P: Platform>(
        &mut self,
        hw: &mut P,
        now: Instant,
        event: Event,
    ) -> Result<(), EngineError> {
        let scene = self.scenes.last_mut().ok_or_else(underflow)?;
        let result = match event {
            Event::Tick => scene.tick(hw, now),
            Event::Button(button) => scene.button_event(hw, button),
            Event::Alarm => scene.alarm(hw),
        };
        self.apply(hw, now, result)?;

        if matches!(event, Event::Alarm) {
            // The scene was only notified; bringing up the alarm UI is
            // the engine's job. By now the notified scene's transition
            // has settled, so the fresh challenge lands on whatever the
            // stack looks like after it.
            let alarming = SceneSlot::Alarming(AlarmingScene::new());
            self.apply(hw, now, EventResult::PushScene(alarming))?;
        }

        Ok(())
    }

    /// Apply a transition and every follow-up it triggers.
    ///
    /// Runs as an explicit work list: each pop, push or swap exposes a
    /// scene whose `activated` result feeds back into the loop, until
    /// one settles on `Continue`.
    fn apply<P: Platform>(
        &mut self,
        hw: &mut P,
        now: Instant,
        first: EventResult,
    ) -> Result<(), EngineError> {
        let mut next = first;
        loop {
            match next {
                EventResult::Continue => return Ok(()),
                EventResult::Finish => {
                    self.scenes.pop();
                    if self.scenes.is_empty() {
                        return Err(underflow());
                    }
                }
                EventResult::PushScene(scene) => {
                    if self.scenes.push(scene).is_err() {
                        return Err(overflow());
                    }
                }
                EventResult::ReplaceScene(scene) => match self.scenes.last_mut() {
                    Some(top) => *top = scene,
                    None => return Err(underflow()),
                },
            }

            // Whatever sits on top now was just created or re-exposed;
            // it takes over before the next event is considered.
            let top = self.scenes.last_mut().ok_or_else(underflow)?;
            next = top.activated(hw, now);
        }
    }
}
