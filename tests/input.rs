mod tests {
    use chaser_light_engine::input::{IdleCheck, IdleConfig, IdleController};
    use chaser_light_engine::tick::Tick;

    fn controller(delta_secs: u64, max_horizon_secs: u64) -> IdleController {
        IdleController::new(IdleConfig {
            enabled: true,
            delta_secs,
            max_horizon_secs,
            debounce_ms: 200,
            active_low: false,
        })
    }

    #[test]
    fn test_debounce_window() {
        let mut ctl = controller(10, 60);
        // Held pressed level: accepted once, suppressed 50 ms later.
        assert!(ctl.poll_button(true, Tick::ZERO));
        assert!(!ctl.poll_button(true, Tick::ZERO.add(50)));
        assert!(!ctl.poll_button(true, Tick::ZERO.add(199)));
        assert!(ctl.poll_button(true, Tick::ZERO.add(200)));
    }

    #[test]
    fn test_unpressed_level_never_clicks() {
        let mut ctl = controller(10, 60);
        assert!(!ctl.poll_button(false, Tick::ZERO));
        assert!(!ctl.poll_button(false, Tick::ZERO.add(500)));
    }

    #[test]
    fn test_active_low_polarity() {
        let mut ctl = IdleController::new(IdleConfig {
            active_low: true,
            ..IdleConfig::default()
        });
        assert!(!ctl.poll_button(true, Tick::ZERO));
        assert!(ctl.poll_button(false, Tick::ZERO));
    }

    #[test]
    fn test_idle_after_max_horizon_without_presses() {
        let mut ctl = controller(10, 60);
        for now in 0..60 {
            assert_eq!(ctl.check(now), IdleCheck::Active);
            assert!(!ctl.is_idle());
        }
        assert_eq!(ctl.check(60), IdleCheck::Entered);
        assert!(ctl.is_idle());
        assert_eq!(ctl.check(61), IdleCheck::Idle);
    }

    #[test]
    fn test_activity_extends_deadline() {
        let mut ctl = controller(10, 60);
        assert_eq!(ctl.check(0), IdleCheck::Active);
        // Deadline 60; a press at t=30 pushes it to 70.
        ctl.note_activity(30);
        assert_eq!(ctl.check(69), IdleCheck::Active);
        assert_eq!(ctl.check(70), IdleCheck::Entered);
    }

    #[test]
    fn test_extension_clamped_to_horizon() {
        let mut ctl = controller(1000, 60);
        assert_eq!(ctl.check(0), IdleCheck::Active);
        // A huge delta still cannot push past now + horizon.
        ctl.note_activity(0);
        assert_eq!(ctl.check(59), IdleCheck::Active);
        assert_eq!(ctl.check(60), IdleCheck::Entered);
    }

    #[test]
    fn test_wake_from_idle() {
        let mut ctl = controller(10, 60);
        assert_eq!(ctl.check(0), IdleCheck::Active);
        assert_eq!(ctl.check(60), IdleCheck::Entered);
        ctl.note_activity(100);
        assert!(!ctl.is_idle());
        assert_eq!(ctl.check(105), IdleCheck::Active);
        // max(stale deadline, now) + delta.
        assert_eq!(ctl.check(110), IdleCheck::Entered);
    }

    #[test]
    fn test_disabled_idle_tracking() {
        let mut ctl = IdleController::new(IdleConfig {
            enabled: false,
            ..IdleConfig::default()
        });
        assert_eq!(ctl.check(1_000_000), IdleCheck::Active);
        assert!(!ctl.is_idle());
    }
}
