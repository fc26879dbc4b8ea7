mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chaser_light_engine::math8::Fraction;
    use chaser_light_engine::renderer::{EngineConfig, FrameTimings, Renderer};
    use chaser_light_engine::scheduler::{DEFAULT_POLL_INTERVAL, TickScheduler};
    use chaser_light_engine::trigger::TriggerChannel;
    use chaser_light_engine::{EntropySource, InputDriver, Instant, OutputDriver, Rgb};

    struct Floor;

    impl EntropySource for Floor {
        fn uniform(&mut self, low: u32, _high: u32) -> u32 {
            low
        }
    }

    struct ReleasedButton;

    impl InputDriver for ReleasedButton {
        fn read(&mut self) -> bool {
            // Active-high wiring in these configs: false = released.
            false
        }
    }

    #[derive(Default)]
    struct Recording {
        frames: usize,
        last_len: usize,
    }

    struct RecordingStrip(Rc<RefCell<Recording>>);

    impl OutputDriver for RecordingStrip {
        fn write(&mut self, colors: &[Rgb]) {
            let mut rec = self.0.borrow_mut();
            rec.frames += 1;
            rec.last_len = colors.len();
        }
    }

    fn config(timings: FrameTimings) -> EngineConfig {
        let mut config = EngineConfig::strip_60();
        config.chaser_len = 10;
        config.sparkle.chance = Fraction::ZERO;
        config.idle.enabled = false;
        config.idle.active_low = false;
        config.timings = timings;
        config
    }

    #[test]
    fn test_flushes_once_per_due_frame() {
        let channel = TriggerChannel::<4>::new();
        let config = config(FrameTimings {
            fast_ms: 0,
            slow_ms: 0,
        });
        let renderer = Renderer::<16, 4>::new(channel.receiver(), &config).unwrap();
        let recording = Rc::new(RefCell::new(Recording::default()));
        let mut scheduler = TickScheduler::new(
            renderer,
            ReleasedButton,
            RecordingStrip(Rc::clone(&recording)),
            Floor,
        );

        let result = scheduler.tick(Instant::from_millis(0));
        assert!(result.flushed);
        assert_eq!(result.sleep_duration, DEFAULT_POLL_INTERVAL);
        assert_eq!(result.next_deadline, Instant::from_millis(5));
        assert_eq!(recording.borrow().frames, 1);
        assert_eq!(recording.borrow().last_len, 10);

        let result = scheduler.tick(Instant::from_millis(5));
        assert!(result.flushed);
        assert_eq!(recording.borrow().frames, 2);
    }

    #[test]
    fn test_pacing_skips_the_flush_between_frames() {
        let channel = TriggerChannel::<4>::new();
        let config = config(FrameTimings {
            fast_ms: 1000,
            slow_ms: 1000,
        });
        let renderer = Renderer::<16, 4>::new(channel.receiver(), &config).unwrap();
        let recording = Rc::new(RefCell::new(Recording::default()));
        let mut scheduler = TickScheduler::new(
            renderer,
            ReleasedButton,
            RecordingStrip(Rc::clone(&recording)),
            Floor,
        );

        assert!(scheduler.tick(Instant::from_millis(0)).flushed);
        // The loop keeps polling, but no frame is due yet.
        assert!(!scheduler.tick(Instant::from_millis(5)).flushed);
        assert!(!scheduler.tick(Instant::from_millis(500)).flushed);
        assert_eq!(recording.borrow().frames, 1);

        assert!(scheduler.tick(Instant::from_millis(1000)).flushed);
        assert_eq!(recording.borrow().frames, 2);
    }

    #[test]
    fn test_renderer_access() {
        let channel = TriggerChannel::<4>::new();
        let config = config(FrameTimings::default());
        let renderer = Renderer::<16, 4>::new(channel.receiver(), &config).unwrap();
        let recording = Rc::new(RefCell::new(Recording::default()));
        let mut scheduler = TickScheduler::new(
            renderer,
            ReleasedButton,
            RecordingStrip(Rc::clone(&recording)),
            Floor,
        );

        assert_eq!(scheduler.renderer().layout().total(), 10);
        scheduler.tick(Instant::from_millis(0));
        assert!(scheduler.renderer_mut().chasers().any_active());
    }
}
