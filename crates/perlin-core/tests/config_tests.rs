//! Property-based tests for configuration validation

use perlin_core::*;
use proptest::prelude::*;

proptest! {
    // Property: frequencies in [0, 1] are accepted, everything else rejected
    #[test]
    fn prop_frequency_range(frequency in -10.0f64..10.0) {
        let result = NoiseConfig::builder().size(8, 8).frequency(frequency).build();
        prop_assert_eq!(result.is_ok(), (0.0..=1.0).contains(&frequency));
    }

    // Property: negative extents are always rejected
    #[test]
    fn prop_negative_extent_rejected(width in i64::MIN..0, height in 0i64..1000) {
        prop_assert!(matches!(
            NoiseConfig::new(width, height, 0).validate(false),
            Err(Error::InvalidConfiguration(_))
        ));
        prop_assert!(NoiseConfig::new(height, width, 0).validate(false).is_err());
    }

    // Property: JSON serialization preserves every field
    #[test]
    fn prop_json_preserves_config(
        width in 0i64..4096,
        height in 0i64..4096,
        millis in 0u32..=1000,
        seed in any::<u64>(),
        octaves in 1u32..16
    ) {
        let config = NoiseConfig::builder()
            .size(width, height)
            .frequency(f64::from(millis) / 1000.0)
            .seed(seed)
            .octaves(octaves)
            .build()
            .unwrap();
        let parsed = NoiseConfig::from_json(&config.to_json().unwrap()).unwrap();
        prop_assert_eq!(parsed, config);
    }
}

#[test]
fn test_missing_fields_take_defaults() {
    let config = NoiseConfig::from_json("{}").unwrap();
    assert_eq!(config, NoiseConfig::default());
    assert_eq!(config.fractal, FractalParams::default());
}

#[test]
fn test_malformed_json_is_config_error() {
    assert!(matches!(
        NoiseConfig::from_json("{ \"width\": "),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        NoiseConfig::from_json("{ \"width\": \"wide\" }"),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_fractal_setters_enable_fractal_validation() {
    assert!(NoiseConfig::builder().size(4, 4).build().is_ok());
    assert!(NoiseConfig::builder().size(4, 4).octaves(0).build().is_err());
    assert!(NoiseConfig::builder()
        .size(4, 4)
        .persistence(f64::INFINITY)
        .build()
        .is_err());
}
