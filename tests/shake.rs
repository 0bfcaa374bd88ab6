mod tests {
    use std::collections::VecDeque;

    use shakewake_core::{MotionSense, ShakeCounter, ShakeDetector, ShakeSampler};

    const UP: [f32; 3] = [2.0, 0.0, 0.0];
    const DOWN: [f32; 3] = [-2.0, 0.0, 0.0];

    struct ScriptedMotion {
        samples: VecDeque<Option<[f32; 3]>>,
    }

    impl ScriptedMotion {
        fn new(samples: &[Option<[f32; 3]>]) -> Self {
            Self {
                samples: samples.iter().copied().collect(),
            }
        }
    }

    impl MotionSense for ScriptedMotion {
        fn read_axes(&mut self) -> Option<[f32; 3]> {
            self.samples.pop_front().flatten()
        }
    }

    #[test]
    fn test_upswing_counts_downswing_rearms() {
        let mut detector = ShakeDetector::new();
        assert_eq!(detector.feed(UP), 1);
        // Staying high is still the same swing.
        assert_eq!(detector.feed(UP), 1);
        // The downswing re-arms without counting.
        assert_eq!(detector.feed(DOWN), 1);
        assert_eq!(detector.feed(UP), 2);
    }

    #[test]
    fn test_threshold_crossing_is_strict() {
        let mut detector = ShakeDetector::new();
        assert_eq!(detector.feed([1.6, 0.0, 0.0]), 0);
        assert_eq!(detector.feed([1.7, 0.0, 0.0]), 1);
        // Sitting at exactly -threshold does not re-arm.
        assert_eq!(detector.feed([-1.6, 0.0, 0.0]), 1);
        assert_eq!(detector.feed([1.7, 0.0, 0.0]), 1);
    }

    #[test]
    fn test_diagonal_shake_counts_once() {
        let mut detector = ShakeDetector::new();
        // All three axes cross together; the max aggregate reads 1, not 3.
        assert_eq!(detector.feed([2.0, 2.0, 2.0]), 1);
    }

    #[test]
    fn test_axes_resync_to_max() {
        let mut detector = ShakeDetector::new();
        assert_eq!(detector.feed(UP), 1);
        // A swing on another axis continues from the shared total: axis 1
        // was resynced to 1, so its own crossing makes 2.
        assert_eq!(detector.feed([-2.0, 2.0, 0.0]), 2);
        assert_eq!(detector.feed([2.0, -2.0, 0.0]), 3);
    }

    #[test]
    fn test_sampler_publishes_into_counter() {
        let counter = ShakeCounter::new();
        let motion = ScriptedMotion::new(&[Some(UP), Some(DOWN), Some(UP)]);
        let mut sampler = ShakeSampler::new(motion, &counter);

        counter.start();
        sampler.sample();
        assert_eq!(counter.count(), 1);
        sampler.sample();
        assert_eq!(counter.count(), 1);
        sampler.sample();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_stopped_counter_ignores_motion() {
        let counter = ShakeCounter::new();
        let motion = ScriptedMotion::new(&[Some(UP), Some(UP)]);
        let mut sampler = ShakeSampler::new(motion, &counter);

        assert!(!counter.is_counting());
        sampler.sample();
        assert_eq!(counter.count(), 0);

        // Starting mid-stream picks up from an armed detector.
        counter.start();
        sampler.sample();
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_sensor_failure_reuses_last_sample() {
        let counter = ShakeCounter::new();
        let motion = ScriptedMotion::new(&[
            None, // nothing known yet; axes rest at zero
            Some(UP),
            None, // still high, same swing
            Some(DOWN),
            None, // still low
            Some(UP),
        ]);
        let mut sampler = ShakeSampler::new(motion, &counter);
        counter.start();

        sampler.sample();
        assert_eq!(counter.count(), 0);
        sampler.sample();
        assert_eq!(counter.count(), 1);
        sampler.sample();
        assert_eq!(counter.count(), 1);
        sampler.sample();
        sampler.sample();
        assert_eq!(counter.count(), 1);
        sampler.sample();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_reset_zeroes_count_and_axis_state() {
        let counter = ShakeCounter::new();
        let motion = ScriptedMotion::new(&[Some(UP), Some(UP), Some(UP)]);
        let mut sampler = ShakeSampler::new(motion, &counter);
        counter.start();

        sampler.sample();
        assert_eq!(counter.count(), 1);

        counter.reset_count();
        assert_eq!(counter.count(), 0);

        // The axis had flipped to its lower swing; after the reset it is
        // armed again, so the very next high sample counts from zero.
        sampler.sample();
        assert_eq!(counter.count(), 1);
        sampler.sample();
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_stop_freezes_count() {
        let counter = ShakeCounter::new();
        let motion = ScriptedMotion::new(&[Some(UP), Some(DOWN), Some(UP)]);
        let mut sampler = ShakeSampler::new(motion, &counter);
        counter.start();

        sampler.sample();
        counter.stop();
        sampler.sample();
        sampler.sample();
        assert_eq!(counter.count(), 1);
    }
}
