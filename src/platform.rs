//! Hardware collaborator seams.
//!
//! Everything a scene touches on the device goes through the small traits
//! here, composed behind the [`Platform`] facade. The facade replaces
//! inheritance with plain composition: one struct owns one instance of
//! each collaborator and hands out accessors. Hosts implement the traits
//! over real peripherals; tests implement them over recording mocks.

use crate::producer::AlarmTimeSetter;
use crate::shake::ShakeCounter;
use crate::time_of_day::TimeOfDay;

/// Text sizes the screen can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    Small,
    Medium,
    Large,
    Huge,
}

/// Text output on the LCD.
///
/// Pixel-level drawing stays inside the implementation; scenes only clear
/// the screen and place text.
pub trait Screen {
    /// Blank the whole screen.
    fn clear(&mut self);
    /// Draw `text` with its top-left corner at `(x, y)`.
    fn text(&mut self, x: i32, y: i32, size: FontSize, text: &str);
    /// Draw `text` horizontally centered on `x` at height `y`.
    fn text_centered(&mut self, x: i32, y: i32, size: FontSize, text: &str);
}

/// Audio tracks the speaker knows how to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Track {
    Alarm,
}

/// Alarm audio output.
///
/// Both calls are fire-and-forget commands handled on the audio task;
/// `play` keeps looping the track until `stop`.
pub trait Speaker {
    fn play(&mut self, track: Track);
    fn stop(&mut self);
}

/// Best-effort message posting on challenge outcome.
///
/// Delivery is asynchronous: implementations queue the message and keep
/// retrying on transport failure instead of reporting errors back to the
/// UI task.
pub trait Poster {
    fn post(&mut self, message: &str);
}

/// Synchronized wall-clock time.
pub trait WallClock {
    /// Current time of day.
    fn now(&self) -> TimeOfDay;
    /// Whether the clock has been synchronized since power-up.
    fn synced(&self) -> bool;
    /// Kick off (re)synchronization in the background; returns
    /// immediately.
    fn start_sync(&mut self);
}

/// Facade over every collaborator a scene can reach.
///
/// Scenes receive `&mut impl Platform` with each dispatch. Besides the
/// collaborator accessors the facade owns the UI task's own record of the
/// armed alarm, which is plain owned state here rather than anything
/// shared with the alarm task.
pub trait Platform {
    type Screen: Screen;
    type Speaker: Speaker;
    type Poster: Poster;
    type Clock: WallClock;

    fn screen(&mut self) -> &mut Self::Screen;
    fn speaker(&mut self) -> &mut Self::Speaker;
    fn poster(&mut self) -> &mut Self::Poster;
    fn clock(&self) -> &Self::Clock;
    fn clock_mut(&mut self) -> &mut Self::Clock;

    /// Shared shake counter handle.
    fn shake(&self) -> &ShakeCounter;

    /// Arm the alarm clock at `time`.
    ///
    /// Records the time for display and hands it to the alarm task
    /// through its setter queue. Returns `false` if the queue rejected
    /// the update.
    fn set_alarm(&mut self, time: TimeOfDay) -> bool;

    /// The UI task's record of the armed alarm, if any.
    fn armed_alarm(&self) -> Option<TimeOfDay>;

    /// Forget the armed alarm. Display bookkeeping only; the alarm task
    /// disarms itself when it fires.
    fn clear_armed_alarm(&mut self);
}

/// Ready-made [`Platform`] composition over owned collaborators.
///
/// Hosts build one per UI task from their concrete peripheral types;
/// tests build one from mocks. The shake reference and setter handle tie
/// it to the producer half of the system.
pub struct Services<'a, S, A, P, C, const SETTER: usize> {
    pub screen: S,
    pub speaker: A,
    pub poster: P,
    pub clock: C,
    shake: &'a ShakeCounter,
    alarm_setter: AlarmTimeSetter<'a, SETTER>,
    armed: Option<TimeOfDay>,
}

impl<'a, S, A, P, C, const SETTER: usize> Services<'a, S, A, P, C, SETTER>
where
    S: Screen,
    A: Speaker,
    P: Poster,
    C: WallClock,
{
    /// Compose a platform from its parts.
    pub const fn new(
        screen: S,
        speaker: A,
        poster: P,
        clock: C,
        shake: &'a ShakeCounter,
        alarm_setter: AlarmTimeSetter<'a, SETTER>,
    ) -> Self {
        Self {
            screen,
            speaker,
            poster,
            clock,
            shake,
            alarm_setter,
            armed: None,
        }
    }
}

impl<'a, S, A, P, C, const SETTER: usize> Platform for Services<'a, S, A, P, C, SETTER>
where
    S: Screen,
    A: Speaker,
    P: Poster,
    C: WallClock,
{
    type Screen = S;
    type Speaker = A;
    type Poster = P;
    type Clock = C;

    fn screen(&mut self) -> &mut S {
        &mut self.screen
    }

    fn speaker(&mut self) -> &mut A {
        &mut self.speaker
    }

    fn poster(&mut self) -> &mut P {
        &mut self.poster
    }

    fn clock(&self) -> &C {
        &self.clock
    }

    fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    fn shake(&self) -> &ShakeCounter {
        self.shake
    }

    fn set_alarm(&mut self, time: TimeOfDay) -> bool {
        if self.alarm_setter.set(time) {
            self.armed = Some(time);
            true
        } else {
            false
        }
    }

    fn armed_alarm(&self) -> Option<TimeOfDay> {
        self.armed
    }

    fn clear_armed_alarm(&mut self) {
        self.armed = None;
    }
}
