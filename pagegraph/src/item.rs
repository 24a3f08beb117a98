// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page items: shapes, lines, and text frames.

use peniko::kurbo::{Affine, Point, Rect};

use crate::attrs::VerticalJustification;
use crate::document::{LayerId, PageId};
use crate::handle::Handle;
use crate::story::StoryId;

/// Handle to a [`PageItem`].
pub type PageItemId = Handle<PageItem>;

/// Handle to a [`TextPath`].
pub type TextPathId = Handle<TextPath>;

/// The closed shapes a page can hold.
///
/// Geometry beyond the bounding box is irrelevant here; any closed shape can
/// be adopted as a text holder, and its bounds become the frame bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemShape {
    /// A rectangle.
    Rectangle,
    /// An oval inscribed in its bounds.
    Oval,
    /// A polygon inscribed in its bounds.
    Polygon,
}

/// An open straight path between two points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GraphicLine {
    /// Start point in document coordinates.
    pub p0: Point,
    /// End point in document coordinates.
    pub p1: Point,
}

/// A container composing a story within rectangular bounds.
#[derive(Clone, Debug)]
pub struct TextFrame {
    /// Frame bounds in document coordinates.
    pub bounds: Rect,
    /// Vertical justification of the composed text.
    pub vertical_justification: VerticalJustification,
    /// The frame's coordinate-space transform.
    pub transform: Affine,
    /// The story composed into this frame.
    pub story: StoryId,
}

/// Text running along a [`GraphicLine`].
#[derive(Clone, Debug)]
pub struct TextPath {
    /// The line the text runs along.
    pub line: PageItemId,
    /// The story composed along the line.
    pub story: StoryId,
}

/// What a page item is.
#[derive(Clone, Debug)]
pub enum PageItemKind {
    /// A closed shape with no text.
    Shape {
        /// The shape variant.
        shape: ItemShape,
        /// Bounding box in document coordinates.
        bounds: Rect,
    },
    /// An open line, optionally carrying a text path.
    Line(GraphicLine),
    /// A text frame.
    TextFrame(TextFrame),
}

/// One item on a page, belonging to exactly one layer.
#[derive(Clone, Debug)]
pub struct PageItem {
    /// The page this item sits on.
    pub page: PageId,
    /// The layer this item belongs to.
    pub layer: LayerId,
    /// The item's shape or text role.
    pub kind: PageItemKind,
    /// A text path attached to this item, if it is a line with text.
    pub text_path: Option<TextPathId>,
}
