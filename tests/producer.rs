mod tests {
    use core::cell::Cell;

    use embassy_time::Duration;
    use shakewake_core::bus::Channel;
    use shakewake_core::producer::{
        AlarmClock, AlarmTimeChannel, AlarmTimeSetter, ButtonMonitor, ButtonProbe,
        REPEAT_DELAY_POLLS, REPEAT_INTERVAL_POLLS, Ticker,
    };
    use shakewake_core::{Button, ButtonPress, Event, TimeOfDay};

    #[derive(Default)]
    struct ButtonPad {
        down: [Cell<bool>; 3],
    }

    impl ButtonPad {
        fn set(&self, button: Button, down: bool) {
            self.down[button as usize].set(down);
        }
    }

    impl ButtonProbe for &ButtonPad {
        fn is_pressed(&mut self, button: Button) -> bool {
            self.down[button as usize].get()
        }
    }

    #[test]
    fn test_ticker_emits_one_tick_per_poll() {
        let events: Channel<Event, 4> = Channel::new();
        let mut ticker = Ticker::new(events.sender());

        ticker.poll();
        assert_eq!(events.try_receive(), Ok(Event::Tick));
        assert!(events.is_empty());
    }

    #[test]
    fn test_button_edges_fire_once() {
        let events: Channel<Event, 8> = Channel::new();
        let pad = ButtonPad::default();
        let mut monitor = ButtonMonitor::new(&pad, events.sender());

        monitor.poll();
        assert!(events.is_empty());

        pad.set(Button::B, true);
        monitor.poll();
        assert_eq!(
            events.try_receive(),
            Ok(Event::button(Button::B, ButtonPress::Pressed))
        );

        // Held (below the repeat delay): no further events.
        monitor.poll();
        monitor.poll();
        assert!(events.is_empty());

        pad.set(Button::B, false);
        monitor.poll();
        assert_eq!(
            events.try_receive(),
            Ok(Event::button(Button::B, ButtonPress::Released))
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_buttons_report_independently() {
        let events: Channel<Event, 8> = Channel::new();
        let pad = ButtonPad::default();
        let mut monitor = ButtonMonitor::new(&pad, events.sender());

        pad.set(Button::A, true);
        pad.set(Button::C, true);
        monitor.poll();
        assert_eq!(
            events.try_receive(),
            Ok(Event::button(Button::A, ButtonPress::Pressed))
        );
        assert_eq!(
            events.try_receive(),
            Ok(Event::button(Button::C, ButtonPress::Pressed))
        );

        pad.set(Button::A, false);
        monitor.poll();
        assert_eq!(
            events.try_receive(),
            Ok(Event::button(Button::A, ButtonPress::Released))
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_hold_autorepeats_at_interval() {
        let events: Channel<Event, 16> = Channel::new();
        let pad = ButtonPad::default();
        let mut monitor = ButtonMonitor::new(&pad, events.sender());

        pad.set(Button::C, true);
        monitor.poll();
        assert_eq!(
            events.try_receive(),
            Ok(Event::button(Button::C, ButtonPress::Pressed))
        );

        // One poll short of the delay: still quiet.
        for _ in 0..REPEAT_DELAY_POLLS - 1 {
            monitor.poll();
        }
        assert!(events.is_empty());

        monitor.poll();
        assert_eq!(
            events.try_receive(),
            Ok(Event::button(Button::C, ButtonPress::Repeated))
        );

        for _ in 0..REPEAT_INTERVAL_POLLS {
            monitor.poll();
        }
        assert_eq!(
            events.try_receive(),
            Ok(Event::button(Button::C, ButtonPress::Repeated))
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_alarm_fires_once_inside_window_then_disarms() {
        let events: Channel<Event, 8> = Channel::new();
        let updates: AlarmTimeChannel<4> = Channel::new();
        let setter = AlarmTimeSetter::new(updates.sender());
        let mut alarm = AlarmClock::new(updates.receiver(), events.sender());

        // Disarmed: nothing fires.
        alarm.poll(TimeOfDay::from_hms(7, 30, 0));
        assert!(events.is_empty());

        assert!(setter.set(TimeOfDay::from_hms(7, 30, 0)));
        alarm.poll(TimeOfDay::from_hms(7, 29, 59));
        assert_eq!(alarm.armed(), Some(TimeOfDay::from_hms(7, 30, 0)));
        assert!(events.is_empty());

        let in_window = TimeOfDay::from_hms(7, 30, 0) + Duration::from_millis(400);
        alarm.poll(in_window);
        assert_eq!(events.try_receive(), Ok(Event::Alarm));
        assert_eq!(alarm.armed(), None);

        // Still inside the window, but already disarmed.
        alarm.poll(in_window);
        assert!(events.is_empty());
    }

    #[test]
    fn test_alarm_window_edges() {
        let events: Channel<Event, 8> = Channel::new();
        let updates: AlarmTimeChannel<4> = Channel::new();
        let setter = AlarmTimeSetter::new(updates.sender());
        let mut alarm = AlarmClock::new(updates.receiver(), events.sender());
        let target = TimeOfDay::from_hms(7, 30, 0);

        setter.set(target);
        alarm.poll(target + Duration::from_millis(990));
        assert_eq!(events.try_receive(), Ok(Event::Alarm));

        // One millisecond past the window: no fire, stays armed.
        setter.set(target);
        alarm.poll(target + Duration::from_millis(991));
        assert!(events.is_empty());
        assert_eq!(alarm.armed(), Some(target));
    }

    #[test]
    fn test_alarm_window_spans_midnight() {
        let events: Channel<Event, 8> = Channel::new();
        let updates: AlarmTimeChannel<4> = Channel::new();
        let setter = AlarmTimeSetter::new(updates.sender());
        let mut alarm = AlarmClock::new(updates.receiver(), events.sender());

        let target = TimeOfDay::MIDNIGHT - Duration::from_millis(500);
        setter.set(target);
        alarm.poll(TimeOfDay::MIDNIGHT + Duration::from_millis(200));
        assert_eq!(events.try_receive(), Ok(Event::Alarm));
    }

    #[test]
    fn test_queued_updates_last_write_wins() {
        let events: Channel<Event, 8> = Channel::new();
        let updates: AlarmTimeChannel<4> = Channel::new();
        let setter = AlarmTimeSetter::new(updates.sender());
        let mut alarm = AlarmClock::new(updates.receiver(), events.sender());

        setter.set(TimeOfDay::from_hms(8, 0, 0));
        setter.set(TimeOfDay::from_hms(9, 0, 0));
        alarm.poll(TimeOfDay::from_hms(6, 0, 0));
        assert_eq!(alarm.armed(), Some(TimeOfDay::from_hms(9, 0, 0)));

        // The superseded 08:00 target never fires.
        alarm.poll(TimeOfDay::from_hms(8, 0, 0));
        assert!(events.is_empty());
        alarm.poll(TimeOfDay::from_hms(9, 0, 0));
        assert_eq!(events.try_receive(), Ok(Event::Alarm));
    }

    #[test]
    fn test_full_setter_queue_rejects_update() {
        let updates: AlarmTimeChannel<2> = Channel::new();
        let setter = AlarmTimeSetter::new(updates.sender());

        assert!(setter.set(TimeOfDay::from_hms(1, 0, 0)));
        assert!(setter.set(TimeOfDay::from_hms(2, 0, 0)));
        assert!(!setter.set(TimeOfDay::from_hms(3, 0, 0)));
    }
}
