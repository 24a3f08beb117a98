// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed vocabulary of text attributes a document understands.

use alloc::string::String;
use peniko::Color;
use peniko::color::palette;

use crate::error::HostError;

/// A font reference by family and style name, e.g. `("Helvetica", "Bold")`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontSelector {
    /// The family name, matched exactly against the installed-font table.
    pub family: String,
    /// The style name within the family, e.g. `"Regular"` or `"Bold Italic"`.
    pub style: String,
}

impl FontSelector {
    /// Creates a selector from a family and style name.
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl core::fmt::Display for FontSelector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.family, self.style)
    }
}

/// Horizontal justification of a paragraph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Justification {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center between the edges.
    Center,
    /// Align to the right edge.
    Right,
    /// Justify to both edges.
    Justify,
}

/// Vertical justification of text within a frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum VerticalJustification {
    /// Align to the top inset.
    #[default]
    Top,
    /// Center between the insets.
    Center,
    /// Align to the bottom inset.
    Bottom,
    /// Distribute lines between the insets.
    Justify,
}

/// Baseline-to-baseline distance for a paragraph.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Leading {
    /// Derive leading from the font size.
    #[default]
    Auto,
    /// A fixed distance in points.
    Points(f64),
}

/// A single text attribute value.
///
/// This is the unit of propagation: reads return these, writes accept them.
#[derive(Clone, Debug, PartialEq)]
pub enum TextAttribute {
    /// Font family and style.
    Font(FontSelector),
    /// Font size in points.
    FontSize(f64),
    /// Fill color of the glyphs.
    FillColor(Color),
    /// Horizontal justification.
    Justification(Justification),
    /// Baseline-to-baseline distance.
    Leading(Leading),
    /// Kerning adjustment in thousandths of an em.
    Kerning(f64),
    /// Tracking adjustment in thousandths of an em.
    Tracking(f64),
}

impl TextAttribute {
    /// The discriminant of this attribute.
    pub fn kind(&self) -> TextAttributeKind {
        match self {
            Self::Font(_) => TextAttributeKind::Font,
            Self::FontSize(_) => TextAttributeKind::FontSize,
            Self::FillColor(_) => TextAttributeKind::FillColor,
            Self::Justification(_) => TextAttributeKind::Justification,
            Self::Leading(_) => TextAttributeKind::Leading,
            Self::Kerning(_) => TextAttributeKind::Kerning,
            Self::Tracking(_) => TextAttributeKind::Tracking,
        }
    }

    /// Checks that the carried value is one the document will accept.
    pub fn validate(&self) -> Result<(), HostError> {
        match self {
            Self::FontSize(size) => {
                if !(size.is_finite() && *size > 0.0) {
                    return Err(HostError::invalid_value(
                        "font size must be a positive, finite number of points",
                    ));
                }
            }
            Self::Leading(Leading::Points(points)) => {
                if !(points.is_finite() && *points > 0.0) {
                    return Err(HostError::invalid_value(
                        "fixed leading must be a positive, finite number of points",
                    ));
                }
            }
            Self::Kerning(value) | Self::Tracking(value) => {
                if !value.is_finite() {
                    return Err(HostError::invalid_value(
                        "kerning and tracking must be finite",
                    ));
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Field-less discriminant of [`TextAttribute`], used to select what to read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextAttributeKind {
    /// Font family and style.
    Font,
    /// Font size in points.
    FontSize,
    /// Fill color of the glyphs.
    FillColor,
    /// Horizontal justification.
    Justification,
    /// Baseline-to-baseline distance.
    Leading,
    /// Kerning adjustment.
    Kerning,
    /// Tracking adjustment.
    Tracking,
}

impl TextAttributeKind {
    /// Whether changing this attribute recomposes the story it is applied
    /// to, invalidating paragraph references after the written paragraph.
    pub fn affects_reflow(self) -> bool {
        matches!(self, Self::Font | Self::FontSize | Self::Leading)
    }
}

/// The full attribute record carried by every paragraph.
#[derive(Clone, Debug, PartialEq)]
pub struct TextAttrs {
    /// Font family and style.
    pub font: FontSelector,
    /// Font size in points.
    pub size: f64,
    /// Fill color of the glyphs.
    pub fill: Color,
    /// Horizontal justification.
    pub justification: Justification,
    /// Baseline-to-baseline distance.
    pub leading: Leading,
    /// Kerning adjustment in thousandths of an em.
    pub kerning: f64,
    /// Tracking adjustment in thousandths of an em.
    pub tracking: f64,
}

impl Default for TextAttrs {
    fn default() -> Self {
        Self {
            font: FontSelector::new("sans-serif", "Regular"),
            size: 12.0,
            fill: palette::css::BLACK,
            justification: Justification::default(),
            leading: Leading::default(),
            kerning: 0.0,
            tracking: 0.0,
        }
    }
}

impl TextAttrs {
    /// Reads the current value of one attribute.
    pub fn get(&self, kind: TextAttributeKind) -> TextAttribute {
        match kind {
            TextAttributeKind::Font => TextAttribute::Font(self.font.clone()),
            TextAttributeKind::FontSize => TextAttribute::FontSize(self.size),
            TextAttributeKind::FillColor => TextAttribute::FillColor(self.fill),
            TextAttributeKind::Justification => TextAttribute::Justification(self.justification),
            TextAttributeKind::Leading => TextAttribute::Leading(self.leading),
            TextAttributeKind::Kerning => TextAttribute::Kerning(self.kerning),
            TextAttributeKind::Tracking => TextAttribute::Tracking(self.tracking),
        }
    }

    /// Overwrites one attribute with the given value.
    ///
    /// The value is not validated here; callers go through
    /// [`TextAttribute::validate`] first.
    pub fn apply(&mut self, attribute: TextAttribute) {
        match attribute {
            TextAttribute::Font(font) => self.font = font,
            TextAttribute::FontSize(size) => self.size = size,
            TextAttribute::FillColor(fill) => self.fill = fill,
            TextAttribute::Justification(justification) => self.justification = justification,
            TextAttribute::Leading(leading) => self.leading = leading,
            TextAttribute::Kerning(kerning) => self.kerning = kerning,
            TextAttribute::Tracking(tracking) => self.tracking = tracking,
        }
    }
}
