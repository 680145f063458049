mod tests {
    use aqua_light_composer::color::{color_temperature_to_rgb, planck_radiance};

    #[test]
    fn test_radiance_overflow_guard() {
        // Deep Wien regime: exponent above 50 is defined as zero radiance.
        assert_eq!(planck_radiance(436.0, 500.0), 0.0);
        assert_eq!(planck_radiance(700.0, 300.0), 0.0);
    }

    #[test]
    fn test_radiance_positive_in_working_range() {
        for temp in [1500.0, 2000.0, 4000.0, 5500.0, 6500.0] {
            assert!(planck_radiance(700.0, temp) > 0.0, "temp {temp}");
            assert!(planck_radiance(546.0, temp) > 0.0, "temp {temp}");
            assert!(planck_radiance(436.0, temp) > 0.0, "temp {temp}");
        }
    }

    #[test]
    fn test_all_channels_dark_maps_to_black() {
        let color = color_temperature_to_rgb(300.0);
        assert_eq!((color.r, color.g, color.b), (0, 0, 0));
    }

    #[test]
    fn test_brightest_channel_saturates() {
        // Warm temperatures are red-dominant, cool ones blue-dominant;
        // the dominant channel always normalizes to 255.
        assert_eq!(color_temperature_to_rgb(2000.0).r, 255);
        assert_eq!(color_temperature_to_rgb(6500.0).b, 255);
    }

    #[test]
    fn test_channels_in_range_and_warm_to_cool_trend() {
        let red_share = |temp: f32| {
            let c = color_temperature_to_rgb(temp);
            let total = f32::from(c.r) + f32::from(c.g) + f32::from(c.b);
            f32::from(c.r) / total
        };

        let mut temp = 1500.0;
        while temp <= 6500.0 {
            let c = color_temperature_to_rgb(temp);
            let total = u16::from(c.r) + u16::from(c.g) + u16::from(c.b);
            assert!(total > 0, "temp {temp} produced black");
            temp += 250.0;
        }

        // Red share shrinks as the temperature climbs toward neutral white.
        assert!(red_share(2000.0) > red_share(3500.0));
        assert!(red_share(3500.0) > red_share(5000.0));
        // Near-plateau past 5500 K.
        assert!((red_share(5500.0) - red_share(6000.0)).abs() < 0.05);
    }
}
