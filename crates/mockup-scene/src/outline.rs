// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Indented text outline of a layout tree.

use crate::node::LayoutNode;
use crate::port::SurfacePort;
use crate::types::{Length, Position, Rounding};

/// Surface that records an indented outline, one node per line.
#[derive(Debug, Default, Clone)]
pub struct OutlineSurface {
    out: String,
}

impl OutlineSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Outline of everything presented so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the surface and return its outline.
    pub fn into_string(self) -> String {
        self.out
    }
}

impl SurfacePort for OutlineSurface {
    fn present(&mut self, root: &LayoutNode) {
        self.out.push_str(&render_outline(root));
    }
}

/// Renders `root` as an indented outline (two spaces per depth level).
pub fn render_outline(root: &LayoutNode) -> String {
    let mut out = String::new();
    write_node(&mut out, root, 0);
    out
}

fn write_node(out: &mut String, node: &LayoutNode, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&describe(node));
    out.push('\n');
    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}

fn describe(node: &LayoutNode) -> String {
    let mut parts = vec![format!("{:?}", node.role)];
    if !node.width.is_auto() || !node.height.is_auto() {
        parts.push(format!("{}x{}", node.width, node.height));
    }
    if let Position::Absolute { top, left } = node.position {
        parts.push(format!("at({top},{left})"));
    }
    match node.rounding {
        Rounding::Square => {}
        Rounding::Uniform(r) => parts.push(format!("r={r}")),
        Rounding::Corners {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        } => parts.push(format!(
            "r=[{top_left},{top_right},{bottom_right},{bottom_left}]"
        )),
        Rounding::Pill => parts.push("pill".to_owned()),
    }
    if let Some(fill) = node.fill {
        parts.push(format!("fill={fill}"));
    }
    if let Some(fg) = node.foreground {
        parts.push(format!("fg={fg}"));
    }
    if let Some(size) = node.font_size {
        parts.push(format!("font={size}"));
    }
    if node.gap != 0.0 {
        parts.push(format!("gap={}", node.gap));
    }
    if let Some(Length::Percent(p)) = node.max_width {
        parts.push(format!("max-w={p}%"));
    }
    if let Some(src) = &node.source {
        parts.push(format!("src={src}"));
    }
    if let Some(text) = &node.text {
        parts.push(format!("{text:?}"));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorRgba8, NodeRole};

    #[test]
    fn outline_indents_children() {
        let tree = LayoutNode::new(NodeRole::Bezel)
            .fill(ColorRgba8::BLACK)
            .child(LayoutNode::new(NodeRole::SensorNotch).rounding(Rounding::Pill));
        let mut surface = OutlineSurface::new();
        surface.present(&tree);
        assert_eq!(surface.as_str(), "Bezel fill=#000000\n  SensorNotch pill\n");
    }
}
