mod tests {
    use chaser_light_engine::EntropySource;
    use chaser_light_engine::color::Rgb;
    use chaser_light_engine::effect::{SparkleConfig, SparkleEngine};
    use chaser_light_engine::math8::Fraction;

    /// Always draws the bottom of the range.
    struct Floor;

    impl EntropySource for Floor {
        fn uniform(&mut self, low: u32, _high: u32) -> u32 {
            low
        }
    }

    /// Always draws the top of the range.
    struct Ceil;

    impl EntropySource for Ceil {
        fn uniform(&mut self, low: u32, high: u32) -> u32 {
            high.saturating_sub(1).max(low)
        }
    }

    fn always_firing(max_value: u8) -> SparkleEngine {
        let config = SparkleConfig {
            slots: 1,
            chance: Fraction::new(1, 1),
            max_value,
            ..SparkleConfig::default()
        };
        SparkleEngine::new(&config, 10)
    }

    #[test]
    fn test_ignites_and_accumulates_additively() {
        let mut engine = always_firing(100);
        let mut pixels = [Rgb::default(); 10];
        let mut rng = Floor;

        // Floor entropy: position 0, every channel at the dim minimum.
        engine.tick(&mut pixels, &mut rng);
        assert_eq!(pixels[0], Rgb { r: 32, g: 32, b: 32 });
        assert!(engine.any_active());
        assert_eq!(engine.claims().as_slice(), &[0]);

        engine.tick(&mut pixels, &mut rng);
        assert_eq!(pixels[0], Rgb { r: 64, g: 64, b: 64 });
        engine.tick(&mut pixels, &mut rng);
        assert_eq!(pixels[0], Rgb { r: 96, g: 96, b: 96 });
        assert!(engine.any_active());
    }

    #[test]
    fn test_retires_past_cap_leaving_pixel_hot() {
        let mut engine = always_firing(100);
        let mut pixels = [Rgb::default(); 10];
        let mut rng = Floor;

        for _ in 0..3 {
            engine.tick(&mut pixels, &mut rng);
        }
        assert!(engine.any_active());

        // Fourth accumulation crosses the cap: the slot retires within
        // the same tick, the pixel keeps the hot value for decay to
        // pull down.
        engine.tick(&mut pixels, &mut rng);
        assert!(!engine.any_active());
        assert!(engine.claims().is_empty());
        assert_eq!(pixels[0], Rgb { r: 128, g: 128, b: 128 });
    }

    #[test]
    fn test_channels_saturate_at_255() {
        let mut engine = always_firing(250);
        let mut pixels = [Rgb::default(); 10];
        pixels[0] = Rgb { r: 250, g: 250, b: 250 };
        let mut rng = Floor;

        engine.tick(&mut pixels, &mut rng);
        // Unclamped sum 282 exceeds the cap; the stored value clamps.
        assert_eq!(pixels[0], Rgb { r: 255, g: 255, b: 255 });
        assert!(!engine.any_active());
    }

    #[test]
    fn test_never_fires_when_chance_misses() {
        let config = SparkleConfig {
            slots: 1,
            chance: Fraction::new(1, 8),
            ..SparkleConfig::default()
        };
        let mut engine = SparkleEngine::new(&config, 10);
        let mut pixels = [Rgb::default(); 10];
        let mut rng = Ceil;

        for _ in 0..50 {
            engine.tick(&mut pixels, &mut rng);
        }
        assert!(!engine.any_active());
        assert!(pixels.iter().all(|px| *px == Rgb::default()));
    }

    #[test]
    fn test_zero_chance_is_inert() {
        let config = SparkleConfig {
            slots: 1,
            chance: Fraction::ZERO,
            ..SparkleConfig::default()
        };
        let mut engine = SparkleEngine::new(&config, 10);
        let mut pixels = [Rgb::default(); 10];
        let mut rng = Floor;

        engine.tick(&mut pixels, &mut rng);
        assert!(!engine.any_active());
        assert!(pixels.iter().all(|px| *px == Rgb::default()));
    }
}
