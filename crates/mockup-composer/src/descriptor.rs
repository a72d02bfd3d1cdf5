// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use mockup_geom::{DeviceSpec, RotationMode, SizeTier};
use mockup_registry::{AppInstance, ColorMode, ResolveError};
use mockup_scene::{LayoutNode, NodeRole, SurfacePort};
use serde::Serialize;

/// Everything a surface needs to draw one device mockup.
///
/// `app` and `error` are never both `Some`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDescriptor {
    /// Scaled and oriented device dimensions.
    pub dimensions: DeviceSpec,
    /// Palette the chrome and app were built for.
    pub color_mode: ColorMode,
    /// Size tier the dimensions were scaled by.
    pub size_tier: SizeTier,
    /// Orientation.
    pub rotation: RotationMode,
    /// Chrome tree with an empty app slot.
    pub chrome: LayoutNode,
    /// Resolved app, if one was requested and resolved.
    pub app: Option<AppInstance>,
    /// Why the requested app was dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResolveError>,
}

impl RenderDescriptor {
    /// Chrome with the app root spliced into the app slot.
    pub fn tree(&self) -> LayoutNode {
        let mut root = self.chrome.clone();
        if let (Some(app), Some(slot)) = (&self.app, root.find_mut(NodeRole::AppSlot)) {
            slot.children.push(app.root.clone());
        }
        root
    }

    /// Hands the composed tree to `surface`.
    pub fn present(&self, surface: &mut impl SurfacePort) {
        surface.present(&self.tree());
    }
}
