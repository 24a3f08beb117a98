// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text placement: turning coordinates or existing items into text holders.

use peniko::kurbo::Rect;

use pagegraph::{PageItemId, PageItemKind, TextPathId, TransformAnchor};

use crate::attrs::AttributeSet;
use crate::context::ScriptContext;
use crate::error::Error;
use crate::propagate::TextTarget;

/// How the four numbers of a placement call are interpreted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RectMode {
    /// `(x, y)` is the top-left corner; `(w, h)` are width and height.
    #[default]
    Corner,
    /// `(x, y)` and `(w, h)` are two opposite corners.
    Corners,
    /// `(x, y)` is the center; `(w, h)` are full width and height.
    Center,
    /// `(x, y)` is the center; `(w, h)` are half-width and half-height.
    Radius,
}

impl RectMode {
    /// The bounds denoted by `(x, y, w, h)` under this mode.
    pub fn bounds(self, x: f64, y: f64, w: f64, h: f64) -> Rect {
        match self {
            Self::Corner => Rect::new(x, y, x + w, y + h),
            Self::Corners => Rect::new(x, y, w, h),
            Self::Center => Rect::new(x - w / 2.0, y - h / 2.0, x + w / 2.0, y + h / 2.0),
            Self::Radius => Rect::new(x - w, y - h, x + w, y + h),
        }
    }

    /// The anchor the placement transform is applied around.
    pub(crate) fn anchor(self) -> TransformAnchor {
        match self {
            Self::Corner | Self::Corners => TransformAnchor::TopLeft,
            Self::Center | Self::Radius => TransformAnchor::Center,
        }
    }
}

/// A placed text holder: a frame or a text path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextUnit {
    /// A text frame.
    Frame(PageItemId),
    /// Text along a graphic line.
    Path(TextPathId),
}

impl ScriptContext<'_> {
    /// Places `text` in a new frame whose bounds are computed from
    /// `(x, y, w, h)` under the active [`RectMode`].
    ///
    /// The frame is created on the current page and layer, takes the current
    /// vertical justification, is positioned by the current transform matrix
    /// (anchored top-left in corner modes, at the center otherwise), and is
    /// stamped with the full set of current typography attributes.
    pub fn place_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    ) -> Result<TextUnit, Error> {
        if ![x, y, w, h].iter().all(|value| value.is_finite()) {
            return Err(Error::invalid_argument(
                "placement coordinates must be finite",
            ));
        }
        let bounds = self.rect_mode.bounds(x, y, w, h);
        let frame = self
            .doc
            .create_text_frame(self.page, self.layer, bounds)
            .map_err(Error::host)?;
        self.doc
            .set_frame_vertical_justification(frame, self.vertical)
            .map_err(Error::host)?;
        self.doc
            .transform_frame(frame, self.rect_mode.anchor(), self.matrix)
            .map_err(Error::host)?;
        let story = self.doc.frame_story(frame).map_err(Error::host)?;
        self.doc.set_story_text(story, text).map_err(Error::host)?;

        let unit = TextUnit::Frame(frame);
        self.stamp_current(unit)?;
        Ok(unit)
    }

    /// Places `text` into an existing page item.
    ///
    /// Closed shapes (and frames) are adopted as text frames; a graphic line
    /// takes a text path running along it. The resulting holder is stamped
    /// with the current typography attributes. Anything else is a usage
    /// error.
    pub fn place_text_in(&mut self, text: &str, item: PageItemId) -> Result<TextUnit, Error> {
        let is_line = match self.doc.item(item) {
            Some(entry) => matches!(entry.kind, PageItemKind::Line(_)),
            None => {
                return Err(Error::invalid_argument(
                    "placement target is not a live page item",
                ));
            }
        };

        let unit = if is_line {
            let path = self.doc.attach_text_path(item).map_err(Error::host)?;
            let story = self.doc.path_story(path).map_err(Error::host)?;
            self.doc.set_story_text(story, text).map_err(Error::host)?;
            TextUnit::Path(path)
        } else {
            let story = self.doc.convert_to_text_frame(item).map_err(Error::host)?;
            self.doc.set_story_text(story, text).map_err(Error::host)?;
            TextUnit::Frame(item)
        };

        self.stamp_current(unit)?;
        Ok(unit)
    }

    /// Stamps the full current attribute record onto a placed holder.
    fn stamp_current(&mut self, unit: TextUnit) -> Result<(), Error> {
        let set = AttributeSet::from(&self.attrs);
        self.write_set(&TextTarget::from(unit), &set)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_mode_bounds() {
        let bounds = RectMode::Corner.bounds(50.0, 50.0, 100.0, 200.0);
        assert_eq!(bounds, Rect::new(50.0, 50.0, 150.0, 250.0));
        assert_eq!(bounds.y1 - bounds.y0, 200.0);
    }

    #[test]
    fn corners_mode_bounds() {
        let bounds = RectMode::Corners.bounds(10.0, 20.0, 110.0, 220.0);
        assert_eq!(bounds, Rect::new(10.0, 20.0, 110.0, 220.0));
        // `(w, h)` are absolute coordinates, not extents.
        assert_eq!(bounds.y1 - bounds.y0, 200.0);
    }

    #[test]
    fn center_mode_bounds() {
        let bounds = RectMode::Center.bounds(100.0, 100.0, 40.0, 60.0);
        assert_eq!(bounds, Rect::new(80.0, 70.0, 120.0, 130.0));
        assert_eq!(bounds.y1 - bounds.y0, 60.0);
    }

    #[test]
    fn radius_mode_bounds() {
        let bounds = RectMode::Radius.bounds(100.0, 100.0, 40.0, 60.0);
        assert_eq!(bounds, Rect::new(60.0, 40.0, 140.0, 160.0));
        assert_eq!(bounds.y1 - bounds.y0, 120.0);
    }
}
