// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::rotation::RotationMode;
use crate::spec::DeviceSpec;
use crate::tier::{scale, SizeTier};

/// Computes scaled chrome dimensions.
///
/// Landscape swaps `height` and `width` of `base` first; every field of the
/// oriented spec is then multiplied by the tier's canonical multiplier.
/// Pure and deterministic; `compute(base, SizeTier::Md, RotationMode::Portrait)`
/// returns `base` unchanged.
pub fn compute(base: DeviceSpec, tier: SizeTier, rotation: RotationMode) -> DeviceSpec {
    base.oriented(rotation).map(|value| scale(value, tier))
}
