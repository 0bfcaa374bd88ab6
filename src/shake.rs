//! Shake counting across the motion and UI concurrency domains.
//!
//! The motion task owns all per-axis detection state through
//! [`ShakeSampler`]; scenes on the UI task see only the [`ShakeCounter`]
//! aggregate. Nothing but atomics crosses the task boundary, so neither
//! side can block or tear the other's state.

use embassy_time::Duration;
use portable_atomic::{AtomicBool, AtomicU32, Ordering};

/// Sampling period of the motion task.
pub const SAMPLE_PERIOD: Duration = Duration::from_millis(100);

/// Acceleration magnitude (sensor units) that counts as a swing.
pub const SWING_THRESHOLD: f32 = 1.6;

/// Access to the three-axis accelerometer.
pub trait MotionSense {
    /// Read the current acceleration of the X, Y and Z axes.
    ///
    /// `None` means the sensor could not be read this period; the sampler
    /// reuses the previous values so counting degrades instead of
    /// stalling.
    fn read_axes(&mut self) -> Option<[f32; 3]>;
}

/// Which half of a swing an axis is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Swing {
    Upper,
    Lower,
}

#[derive(Debug, Clone, Copy)]
struct AxisState {
    swing: Swing,
    count: u32,
}

const IDLE_AXIS: AxisState = AxisState {
    swing: Swing::Upper,
    count: 0,
};

/// Threshold-crossing swing detector for the three accelerometer axes.
///
/// Owned exclusively by the sampler task; nothing in here is shared.
pub struct ShakeDetector {
    axes: [AxisState; 3],
    threshold: f32,
}

impl ShakeDetector {
    /// Create a detector with the default [`SWING_THRESHOLD`].
    pub const fn new() -> Self {
        Self::with_threshold(SWING_THRESHOLD)
    }

    /// Create a detector with a custom threshold.
    pub const fn with_threshold(threshold: f32) -> Self {
        Self {
            axes: [IDLE_AXIS; 3],
            threshold,
        }
    }

    /// Feed one sample per axis and return the aggregate count.
    ///
    /// An axis counts when it crosses `+threshold` while waiting for its
    /// upper swing; crossing `-threshold` afterwards re-arms it without
    /// counting. The aggregate is the maximum across the axes, and every
    /// axis is resynchronized to it, so whichever axis swings next
    /// continues from the shared total instead of catching up first.
    pub fn feed(&mut self, sample: [f32; 3]) -> u32 {
        let threshold = self.threshold;
        for (axis, value) in self.axes.iter_mut().zip(sample) {
            match axis.swing {
                Swing::Upper if value > threshold => {
                    axis.count += 1;
                    axis.swing = Swing::Lower;
                }
                Swing::Lower if value < -threshold => {
                    axis.swing = Swing::Upper;
                }
                _ => {}
            }
        }

        let top = self.axes.iter().map(|axis| axis.count).max().unwrap_or(0);
        for axis in &mut self.axes {
            axis.count = top;
        }
        top
    }

    /// Drop all per-axis progress.
    pub fn reset(&mut self) {
        self.axes = [IDLE_AXIS; 3];
    }
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared shake state: the aggregate count plus control flags.
///
/// One instance lives wherever both tasks can reach it (typically a
/// `static`). Scenes drive the control methods from the UI task while the
/// sampler publishes counts from the motion task; every field is an
/// atomic, so no lock is ever taken.
pub struct ShakeCounter {
    count: AtomicU32,
    counting: AtomicBool,
    epoch: AtomicU32,
}

impl ShakeCounter {
    /// Create a stopped counter at zero.
    pub const fn new() -> Self {
        Self {
            count: AtomicU32::new(0),
            counting: AtomicBool::new(false),
            epoch: AtomicU32::new(0),
        }
    }

    /// Current aggregate count.
    ///
    /// Monotonically non-decreasing between resets.
    pub fn count(&self) -> u32 {
        self.count.load(Ordering::Relaxed)
    }

    /// Whether samples are currently being counted.
    pub fn is_counting(&self) -> bool {
        self.counting.load(Ordering::Relaxed)
    }

    /// Start counting; takes effect at the sampler's next period.
    pub fn start(&self) {
        self.counting.store(true, Ordering::Relaxed);
    }

    /// Stop counting; the count keeps its last value.
    pub fn stop(&self) {
        self.counting.store(false, Ordering::Relaxed);
    }

    /// Reset the count to zero.
    ///
    /// Readers observe zero immediately; the sampler drops its per-axis
    /// progress before its next feed. A reset racing a publish from a
    /// still-counting sampler settles to zero at that next sample.
    pub fn reset_count(&self) {
        self.count.store(0, Ordering::Relaxed);
        self.epoch.fetch_add(1, Ordering::Release);
    }

    fn publish(&self, count: u32) {
        self.count.store(count, Ordering::Relaxed);
    }

    fn epoch(&self) -> u32 {
        self.epoch.load(Ordering::Acquire)
    }
}

impl Default for ShakeCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Motion-task half of shake counting.
///
/// Owns the sensor handle and the per-axis detector, publishing only the
/// aggregate into the shared [`ShakeCounter`].
pub struct ShakeSampler<'a, M: MotionSense> {
    sensor: M,
    counter: &'a ShakeCounter,
    detector: ShakeDetector,
    last_axes: [f32; 3],
    seen_epoch: u32,
}

impl<'a, M: MotionSense> ShakeSampler<'a, M> {
    /// Create a sampler publishing into `counter`.
    pub fn new(sensor: M, counter: &'a ShakeCounter) -> Self {
        Self {
            sensor,
            counter,
            detector: ShakeDetector::new(),
            last_axes: [0.0; 3],
            seen_epoch: counter.epoch(),
        }
    }

    /// Run one sampling period.
    ///
    /// Call every [`SAMPLE_PERIOD`] from the motion task. Never blocks: a
    /// failed sensor read reuses the last known values, and a stopped
    /// counter skips detection entirely.
    pub fn sample(&mut self) {
        if let Some(axes) = self.sensor.read_axes() {
            self.last_axes = axes;
        }

        let epoch = self.counter.epoch();
        if epoch != self.seen_epoch {
            self.seen_epoch = epoch;
            self.detector.reset();
        }

        if !self.counter.is_counting() {
            return;
        }

        let top = self.detector.feed(self.last_axes);
        self.counter.publish(top);
    }
}
