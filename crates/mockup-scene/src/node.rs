// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Layout tree nodes.

use serde::Serialize;

use crate::color::ColorRgba8;
use crate::types::{Align, Flow, Insets, Length, Position, Rounding, Shadow, Stroke};

/// What a node represents. Surfaces may style by role; layout never depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeRole {
    /// Outer device frame.
    Frame,
    /// Dark bezel inside the frame.
    Bezel,
    /// Screen area inside the bezel.
    Screen,
    /// Camera/sensor cutout drawn over the screen.
    SensorNotch,
    /// Placeholder the resolved app subtree is spliced into.
    AppSlot,
    /// Root of an app subtree.
    AppRoot,
    /// Title bar at the top of an app.
    Header,
    /// Scrollable list of messages.
    MessageList,
    /// One message, aligned to its sender's side.
    MessageRow,
    /// Message bubble.
    Bubble,
    /// Plain text run.
    Text,
    /// Inline image.
    Image,
    /// Inline video player.
    Video,
    /// Inline audio player.
    Audio,
    /// Downloadable attachment link.
    Link,
    /// Input bar at the bottom of a chat.
    ComposerBar,
    /// Text field inside the composer bar.
    ComposerField,
    /// Bottom strip below the composer.
    Footer,
}

/// A node in the render descriptor tree.
///
/// Fields left at their defaults are omitted when serialized.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    /// Semantic role.
    pub role: NodeRole,
    /// Width.
    #[serde(skip_serializing_if = "Length::is_auto")]
    pub width: Length,
    /// Height.
    #[serde(skip_serializing_if = "Length::is_auto")]
    pub height: Length,
    /// Upper bound on width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Length>,
    /// Upper bound on height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<Length>,
    /// Inner spacing.
    #[serde(skip_serializing_if = "Insets::is_zero")]
    pub padding: Insets,
    /// Outer spacing.
    #[serde(skip_serializing_if = "Insets::is_zero")]
    pub margin: Insets,
    /// Corner treatment.
    #[serde(skip_serializing_if = "Rounding::is_square")]
    pub rounding: Rounding,
    /// Background fill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<ColorRgba8>,
    /// Text/foreground color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<ColorRgba8>,
    /// Border outline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    /// Drop shadow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    /// Font size in abstract units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Main-axis direction for children.
    pub flow: Flow,
    /// Distribution along the main axis.
    pub justify: Align,
    /// Alignment along the cross axis.
    pub align: Align,
    /// Spacing between children in abstract units.
    #[serde(skip_serializing_if = "is_zero")]
    pub gap: f64,
    /// Placement relative to the parent.
    #[serde(skip_serializing_if = "Position::is_flow")]
    pub position: Position,
    /// Children are clipped to this node's bounds.
    #[serde(skip_serializing_if = "is_false")]
    pub clip: bool,
    /// Overflowing children scroll instead of spilling.
    #[serde(skip_serializing_if = "is_false")]
    pub scroll: bool,
    /// Text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Media or link target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Children in paint order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayoutNode>,
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl LayoutNode {
    /// Empty auto-sized node with `role`.
    pub fn new(role: NodeRole) -> Self {
        Self {
            role,
            width: Length::Auto,
            height: Length::Auto,
            max_width: None,
            max_height: None,
            padding: Insets::ZERO,
            margin: Insets::ZERO,
            rounding: Rounding::Square,
            fill: None,
            foreground: None,
            stroke: None,
            shadow: None,
            font_size: None,
            flow: Flow::Row,
            justify: Align::Start,
            align: Align::Start,
            gap: 0.0,
            position: Position::Flow,
            clip: false,
            scroll: false,
            text: None,
            source: None,
            children: Vec::new(),
        }
    }

    /// Sets width and height.
    #[must_use]
    pub fn size(mut self, width: Length, height: Length) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets height only.
    #[must_use]
    pub fn height(mut self, height: Length) -> Self {
        self.height = height;
        self
    }

    /// Sets the background fill.
    #[must_use]
    pub fn fill(mut self, color: ColorRgba8) -> Self {
        self.fill = Some(color);
        self
    }

    /// Sets the foreground color.
    #[must_use]
    pub fn foreground(mut self, color: ColorRgba8) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Sets the corner treatment.
    #[must_use]
    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Sets inner spacing.
    #[must_use]
    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Sets outer spacing.
    #[must_use]
    pub fn margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    /// Sets flow direction and main/cross alignment.
    #[must_use]
    pub fn flow(mut self, flow: Flow, justify: Align, align: Align) -> Self {
        self.flow = flow;
        self.justify = justify;
        self.align = align;
        self
    }

    /// Sets placement.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the media or link target.
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, child: LayoutNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends children.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = LayoutNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first search for the first node with `role`, including `self`.
    pub fn find(&self, role: NodeRole) -> Option<&LayoutNode> {
        if self.role == role {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(role))
    }

    /// Mutable variant of [`LayoutNode::find`].
    pub fn find_mut(&mut self, role: NodeRole) -> Option<&mut LayoutNode> {
        if self.role == role {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(role))
    }

    /// Number of nodes with `role` in this subtree, including `self`.
    pub fn count(&self, role: NodeRole) -> usize {
        usize::from(self.role == role) + self.children.iter().map(|c| c.count(role)).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_omitted_from_json() {
        let node = LayoutNode::new(NodeRole::Text).text("hi");
        let json = serde_json::to_value(&node).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["role"], "text");
        assert_eq!(obj["text"], "hi");
        assert!(!obj.contains_key("width"));
        assert!(!obj.contains_key("children"));
        assert!(!obj.contains_key("clip"));
    }

    #[test]
    fn find_and_count_walk_the_subtree() {
        let tree = LayoutNode::new(NodeRole::MessageList)
            .child(LayoutNode::new(NodeRole::MessageRow).child(LayoutNode::new(NodeRole::Bubble)))
            .child(LayoutNode::new(NodeRole::MessageRow).child(LayoutNode::new(NodeRole::Bubble)));
        assert_eq!(tree.count(NodeRole::Bubble), 2);
        assert!(tree.find(NodeRole::Bubble).is_some());
        assert!(tree.find(NodeRole::Link).is_none());
    }

    #[test]
    fn lengths_serialize_tagged() {
        let node = LayoutNode::new(NodeRole::Frame).size(Length::Units(14.05), Length::Percent(80.0));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["width"]["units"], 14.05);
        assert_eq!(json["height"]["percent"], 80.0);
    }
}
