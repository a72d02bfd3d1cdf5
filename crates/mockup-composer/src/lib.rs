// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Device composition: chrome geometry plus the resolved app subtree.
//!
//! [`DeviceComposer::compose`] is the trust boundary of the mockup core. It
//! never fails: an app config that cannot be resolved is logged, recorded in
//! [`RenderDescriptor::error`], and the device renders with an empty app slot.

pub mod chrome;
mod composer;
mod descriptor;
mod device;

pub use chrome::NotchGeometry;
pub use composer::DeviceComposer;
pub use descriptor::RenderDescriptor;
pub use device::DeviceConfig;
