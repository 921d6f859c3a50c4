//! Tests for the severity color encoder.

use proptest::prelude::*;

use epimap_render::encode;

#[test]
fn zero_severity_is_palest() {
    let color = encode(0, 0);
    assert_eq!(color.lightness, 95);
    assert_eq!(color.hue, 240);
    assert_eq!(color.to_string(), "hsl(240, 100, 95)");
}

#[test]
fn deaths_shift_hue_toward_red() {
    assert!(encode(5, 5).hue > encode(5, 0).hue);
    assert!(encode(0, 10).hue > encode(10, 10).hue);
    assert_eq!(encode(5, 0).hue, 240);
    assert_eq!(encode(5, 5).hue, 300);
    assert_eq!(encode(0, 5).hue, 360);
}

#[test]
fn known_encodings() {
    insta::assert_snapshot!(encode(10, 0).to_string(), @"hsl(240, 100, 79)");
    insta::assert_snapshot!(encode(100, 10).to_string(), @"hsl(250, 100, 56)");
    insta::assert_snapshot!(encode(1000, 100).to_string(), @"hsl(250, 100, 39)");
}

proptest! {
    // Lightness depends only on confirmed + 20 * deaths, and never rises
    // with it.
    #[test]
    fn severity_never_raises_lightness(
        confirmed_a in 0u64..1_000_000,
        deaths_a in 0u64..1_000_000,
        confirmed_b in 0u64..1_000_000,
        deaths_b in 0u64..1_000_000,
    ) {
        let severity_a = confirmed_a + 20 * deaths_a;
        let severity_b = confirmed_b + 20 * deaths_b;
        let ((lo_c, lo_d), (hi_c, hi_d)) = if severity_a <= severity_b {
            ((confirmed_a, deaths_a), (confirmed_b, deaths_b))
        } else {
            ((confirmed_b, deaths_b), (confirmed_a, deaths_a))
        };
        prop_assert!(encode(lo_c, lo_d).lightness >= encode(hi_c, hi_d).lightness);
    }

    #[test]
    fn hue_stays_between_blue_and_red(
        confirmed in 0u64..1_000_000,
        deaths in 0u64..1_000_000,
    ) {
        let hue = encode(confirmed, deaths).hue;
        prop_assert!((240..=360).contains(&hue));
    }

    #[test]
    fn saturation_is_constant(
        confirmed in 0u64..1_000_000,
        deaths in 0u64..1_000_000,
    ) {
        prop_assert_eq!(encode(confirmed, deaths).saturation, 100);
    }
}
