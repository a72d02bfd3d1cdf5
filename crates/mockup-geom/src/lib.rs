// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry for device mockups.

This crate provides:
- Discrete size tiers (`SizeTier`) and the canonical multiplier table.
- The shared `scale` utility every scalable quantity routes through.
- Rotation modes (`RotationMode`).
- Unscaled base chrome dimensions (`DeviceSpec`) and the dimension model
  (`compute`) deriving scaled chrome from a base spec, tier and rotation.

Design notes:
- Pure and total: unrecognised tier or rotation names fall back to `md` and
  `portrait` instead of failing.
- Proportions between spec fields survive scaling for every tier.
"]

/// Dimension model: base spec + tier + rotation -> scaled spec.
pub mod dimensions;
/// Rotation modes.
pub mod rotation;
/// Base device specifications.
pub mod spec;
/// Size tiers, the multiplier table and `scale`.
pub mod tier;
pub mod wire;

pub use dimensions::compute;
pub use rotation::RotationMode;
pub use spec::DeviceSpec;
pub use tier::{scale, MultiplierTable, SizeTier, CANONICAL_MULTIPLIERS};
pub use wire::WireName;
