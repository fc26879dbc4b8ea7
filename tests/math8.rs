mod tests {
    use chaser_light_engine::EntropySource;
    use chaser_light_engine::math8::{Fraction, scale8};

    /// Always draws the bottom of the range: every chance fires.
    struct Floor;

    impl EntropySource for Floor {
        fn uniform(&mut self, low: u32, _high: u32) -> u32 {
            low
        }
    }

    /// Always draws the top of the range: no chance below 1 ever fires.
    struct Ceil;

    impl EntropySource for Ceil {
        fn uniform(&mut self, low: u32, high: u32) -> u32 {
            high.saturating_sub(1).max(low)
        }
    }

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale_down_floors() {
        // Truncating division: 5 * 1 / 2 = 2, not 3.
        assert_eq!(Fraction::new(1, 2).scale_down(5), 2);
        assert_eq!(Fraction::new(3, 4).scale_down(255), 191);
        assert_eq!(Fraction::new(1, 2).scale_down(1), 0);
    }

    #[test]
    fn test_scale_down_zero_denominator_is_identity() {
        assert_eq!(Fraction::new(1, 0).scale_down(200), 200);
        assert_eq!(Fraction::ZERO.scale_down(200), 200);
    }

    #[test]
    fn test_scale_down_clamps_above_one() {
        assert_eq!(Fraction::new(4, 1).scale_down(100), 255);
    }

    #[test]
    fn test_roll() {
        assert!(Fraction::new(1, 4).roll(&mut Floor));
        assert!(!Fraction::new(1, 4).roll(&mut Ceil));
        // A full ratio fires on any draw.
        assert!(Fraction::new(4, 4).roll(&mut Ceil));
    }

    #[test]
    fn test_roll_zero_never_fires() {
        assert!(!Fraction::ZERO.roll(&mut Floor));
        assert!(!Fraction::new(0, 4).roll(&mut Floor));
        assert!(!Fraction::new(1, 0).roll(&mut Floor));
    }
}
