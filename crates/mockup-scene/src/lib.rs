// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Layout vocabulary shared by device chrome, apps and renderers.
//!
//! This crate defines the contract between the mockup core and rendering
//! surfaces (DOM, canvas, terminal). It carries structure, scaled numbers and
//! colors only; it never touches pixels or markup.
//!
//! # Design Principles
//!
//! - **Surfaces are dumb**: They receive a finished tree and draw it. No domain logic.
//! - **Units are abstract**: Lengths are unit-less; the surface picks the physical unit.
//! - **Trees are owned values**: Every node owns its children; no shared state.

mod color;
mod node;
mod outline;
mod port;
mod types;

pub use color::ColorRgba8;
pub use node::{LayoutNode, NodeRole};
pub use outline::{render_outline, OutlineSurface};
pub use port::SurfacePort;
pub use types::{Align, Flow, Insets, Length, Position, Rounding, Shadow, Stroke};
