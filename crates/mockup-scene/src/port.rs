// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Surface port trait defining the renderer contract.

use crate::node::LayoutNode;

/// Rendering surface port.
///
/// The mockup core produces a finished layout tree; adapters (DOM, canvas,
/// terminal) implement this trait to draw it. Each call is independent: a
/// surface must not expect deltas or rely on a previous tree.
pub trait SurfacePort {
    /// Draw `root` and everything beneath it.
    fn present(&mut self, root: &LayoutNode);
}
