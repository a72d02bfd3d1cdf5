// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use approx::assert_relative_eq;
use mockup_geom::{compute, DeviceSpec, RotationMode, SizeTier};
use proptest::prelude::*;

fn spec_strategy() -> impl Strategy<Value = DeviceSpec> {
    (
        0.01f64..500.0,
        0.01f64..500.0,
        0.01f64..50.0,
        0.01f64..5.0,
        0.01f64..5.0,
        0.01f64..50.0,
    )
        .prop_map(
            |(height, width, corner_radius, outer_padding, inner_padding, inner_border_radius)| {
                DeviceSpec {
                    height,
                    width,
                    corner_radius,
                    outer_padding,
                    inner_padding,
                    inner_border_radius,
                }
            },
        )
}

fn tier_strategy() -> impl Strategy<Value = SizeTier> {
    prop::sample::select(SizeTier::ALL.to_vec())
}

fn rotation_strategy() -> impl Strategy<Value = RotationMode> {
    prop_oneof![Just(RotationMode::Portrait), Just(RotationMode::Landscape)]
}

#[test]
fn iphone_lg_portrait_matches_reference_values() {
    let out = compute(DeviceSpec::APPLE_IPHONE, SizeTier::Lg, RotationMode::Portrait);
    assert_relative_eq!(out.height, 50.8375, max_relative = 1e-12);
    assert_relative_eq!(out.width, 24.5875, max_relative = 1e-12);
    assert_relative_eq!(out.corner_radius, 3.675, max_relative = 1e-12);
    assert_relative_eq!(out.outer_padding, 0.13125, max_relative = 1e-12);
    assert_relative_eq!(out.inner_padding, 0.875, max_relative = 1e-12);
    assert_relative_eq!(out.inner_border_radius, 3.0625, max_relative = 1e-12);
}

#[test]
fn iphone_xs_landscape_halves_and_swaps() {
    let out = compute(DeviceSpec::APPLE_IPHONE, SizeTier::Xs, RotationMode::Landscape);
    assert_relative_eq!(out.height, 7.025, max_relative = 1e-12);
    assert_relative_eq!(out.width, 14.525, max_relative = 1e-12);
    assert_relative_eq!(out.corner_radius, 1.05, max_relative = 1e-12);
}

#[test]
fn unknown_tier_name_computes_like_md() {
    let tier = SizeTier::from_name("gigantic");
    let out = compute(DeviceSpec::APPLE_IPHONE, tier, RotationMode::Portrait);
    assert_eq!(out, DeviceSpec::APPLE_IPHONE);
}

proptest! {
    #[test]
    fn md_portrait_is_identity(base in spec_strategy()) {
        prop_assert_eq!(compute(base, SizeTier::Md, RotationMode::Portrait), base);
    }

    #[test]
    fn landscape_is_portrait_with_axes_swapped(base in spec_strategy(), tier in tier_strategy()) {
        let portrait = compute(base, tier, RotationMode::Portrait);
        let landscape = compute(base, tier, RotationMode::Landscape);
        prop_assert_eq!(landscape.height, portrait.width);
        prop_assert_eq!(landscape.width, portrait.height);
        prop_assert_eq!(landscape.corner_radius, portrait.corner_radius);
        prop_assert_eq!(landscape.outer_padding, portrait.outer_padding);
        prop_assert_eq!(landscape.inner_padding, portrait.inner_padding);
        prop_assert_eq!(landscape.inner_border_radius, portrait.inner_border_radius);
    }

    #[test]
    fn every_field_scales_by_the_tier_multiplier(
        base in spec_strategy(),
        tier in tier_strategy(),
        rotation in rotation_strategy(),
    ) {
        let oriented = base.oriented(rotation);
        let out = compute(base, tier, rotation);
        for (scaled, original) in out.fields().iter().zip(oriented.fields()) {
            let ratio = scaled / original;
            prop_assert!((ratio - tier.multiplier()).abs() <= 1e-12 * tier.multiplier());
        }
    }
}
