#![no_std]

pub mod bus;
pub mod engine;
pub mod event;
pub mod platform;
pub mod producer;
pub mod scene;
pub mod shake;
pub mod time_of_day;

pub use bus::{Channel, Receiver, Sender, TryReceiveError, TrySendError};
pub use engine::{EngineError, SCENE_STACK_DEPTH, SceneStack};
pub use event::{
    Button, ButtonEvent, ButtonPress, EVENT_QUEUE_SIZE, Event, EventChannel, EventReceiver,
    EventSender,
};
pub use platform::{FontSize, Platform, Poster, Screen, Services, Speaker, Track, WallClock};
pub use producer::{
    ALARM_FIRE_WINDOW, ALARM_PERIOD, ALARM_SETTER_QUEUE_SIZE, AlarmClock, AlarmTimeChannel,
    AlarmTimeReceiver, AlarmTimeSetter, BUTTON_PERIOD, ButtonMonitor, ButtonProbe, TICK_PERIOD,
    Ticker,
};
pub use scene::{
    AlarmingScene, BootScene, ClockScene, ConfigureAlarmScene, Cursor, EventResult, Scene,
    SceneSlot,
};
pub use shake::{
    MotionSense, SAMPLE_PERIOD, SWING_THRESHOLD, ShakeCounter, ShakeDetector, ShakeSampler,
};
pub use time_of_day::TimeOfDay;

pub use embassy_time::{Duration, Instant};
