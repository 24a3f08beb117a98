// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The session context: current typography attributes and document cursor.

use alloc::vec::Vec;
use peniko::Color;
use peniko::kurbo::Affine;

use pagegraph::{
    Document, FontSelector, Justification, LayerId, Leading, PageId, TextAttribute, TextAttrs,
    VerticalJustification,
};

use crate::error::{Error, Warning};
use crate::place::RectMode;

/// A scripting session over one document.
///
/// Holds the current typography attributes stamped onto newly placed text,
/// the active rectangle-interpretation mode and transform matrix, the page
/// and layer new items land on, and the session's warning sink. All state is
/// explicit and per-session: two contexts over the same document do not
/// observe each other's settings.
///
/// Attribute state is initialized from the document's defaults and mutated
/// only through the setters below; each setter changes exactly one attribute
/// for all subsequently placed text.
#[derive(Debug)]
pub struct ScriptContext<'a> {
    pub(crate) doc: &'a mut Document,
    pub(crate) attrs: TextAttrs,
    pub(crate) vertical: VerticalJustification,
    pub(crate) rect_mode: RectMode,
    pub(crate) matrix: Affine,
    pub(crate) page: PageId,
    pub(crate) layer: LayerId,
    warnings: Vec<Warning>,
}

impl<'a> ScriptContext<'a> {
    /// Opens a session on `doc`, seeded from the document defaults and
    /// positioned on the document's first page and layer.
    pub fn new(doc: &'a mut Document) -> Self {
        let attrs = doc.defaults().clone();
        let vertical = doc.default_vertical_justification();
        let page = doc.default_page();
        let layer = doc.default_layer();
        Self {
            doc,
            attrs,
            vertical,
            rect_mode: RectMode::default(),
            matrix: Affine::IDENTITY,
            page,
            layer,
            warnings: Vec::new(),
        }
    }

    /// Borrows the underlying document.
    pub fn document(&self) -> &Document {
        self.doc
    }

    /// Mutably borrows the underlying document.
    pub fn document_mut(&mut self) -> &mut Document {
        self.doc
    }

    // --- current typography attributes ---

    /// The current font.
    pub fn font(&self) -> &FontSelector {
        &self.attrs.font
    }

    /// Sets the current font by family and style name.
    ///
    /// If the font is not installed in the document the current font is kept
    /// and a [`Warning::FontNotInstalled`] is recorded; this is not an error.
    pub fn set_font(&mut self, family: &str, style: &str) {
        let font = FontSelector::new(family, style);
        if !self.doc.font_available(&font) {
            self.warn(Warning::FontNotInstalled(font));
            return;
        }
        self.attrs.font = font;
    }

    /// The current font size in points.
    pub fn font_size(&self) -> f64 {
        self.attrs.size
    }

    /// Sets the current font size in points.
    ///
    /// Zero, negative, and non-finite sizes are rejected and the current
    /// size is left unchanged.
    pub fn set_font_size(&mut self, size: f64) -> Result<(), Error> {
        TextAttribute::FontSize(size)
            .validate()
            .map_err(|err| Error::invalid_argument(err.detail()))?;
        self.attrs.size = size;
        Ok(())
    }

    /// The current fill color.
    pub fn fill_color(&self) -> Color {
        self.attrs.fill
    }

    /// Sets the current fill color.
    pub fn set_fill_color(&mut self, fill: Color) {
        self.attrs.fill = fill;
    }

    /// The current horizontal justification.
    pub fn justification(&self) -> Justification {
        self.attrs.justification
    }

    /// Sets the current horizontal justification.
    pub fn set_justification(&mut self, justification: Justification) {
        self.attrs.justification = justification;
    }

    /// The current vertical justification for new frames.
    pub fn vertical_justification(&self) -> VerticalJustification {
        self.vertical
    }

    /// Sets the vertical justification applied to newly placed frames.
    pub fn set_vertical_justification(&mut self, vertical: VerticalJustification) {
        self.vertical = vertical;
    }

    /// The current leading.
    pub fn leading(&self) -> Leading {
        self.attrs.leading
    }

    /// Sets the current leading.
    ///
    /// Fixed leading must be a positive, finite number of points.
    pub fn set_leading(&mut self, leading: Leading) -> Result<(), Error> {
        TextAttribute::Leading(leading)
            .validate()
            .map_err(|err| Error::invalid_argument(err.detail()))?;
        self.attrs.leading = leading;
        Ok(())
    }

    /// The current kerning adjustment in thousandths of an em.
    pub fn kerning(&self) -> f64 {
        self.attrs.kerning
    }

    /// Sets the current kerning adjustment.
    pub fn set_kerning(&mut self, kerning: f64) -> Result<(), Error> {
        TextAttribute::Kerning(kerning)
            .validate()
            .map_err(|err| Error::invalid_argument(err.detail()))?;
        self.attrs.kerning = kerning;
        Ok(())
    }

    /// The current tracking adjustment in thousandths of an em.
    pub fn tracking(&self) -> f64 {
        self.attrs.tracking
    }

    /// Sets the current tracking adjustment.
    pub fn set_tracking(&mut self, tracking: f64) -> Result<(), Error> {
        TextAttribute::Tracking(tracking)
            .validate()
            .map_err(|err| Error::invalid_argument(err.detail()))?;
        self.attrs.tracking = tracking;
        Ok(())
    }

    // --- placement state ---

    /// The active rectangle-interpretation mode.
    pub fn rect_mode(&self) -> RectMode {
        self.rect_mode
    }

    /// Sets how the four numbers of [`place_text`](Self::place_text) are
    /// interpreted.
    pub fn set_rect_mode(&mut self, mode: RectMode) {
        self.rect_mode = mode;
    }

    /// The active transform matrix.
    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    /// Sets the transform matrix applied to newly placed frames.
    pub fn set_matrix(&mut self, matrix: Affine) {
        self.matrix = matrix;
    }

    /// The page new items are placed on.
    pub fn page(&self) -> PageId {
        self.page
    }

    /// Sets the page new items are placed on.
    pub fn set_page(&mut self, page: PageId) -> Result<(), Error> {
        if !self.doc.page_is_valid(page) {
            return Err(Error::invalid_argument("page is not a live page"));
        }
        self.page = page;
        Ok(())
    }

    /// The layer new items are placed on.
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    /// Sets the layer new items are placed on.
    pub fn set_layer(&mut self, layer: LayerId) -> Result<(), Error> {
        if !self.doc.layer_is_valid(layer) {
            return Err(Error::invalid_argument("layer is not a live layer"));
        }
        self.layer = layer;
        Ok(())
    }

    // --- diagnostics ---

    /// Warnings recorded by this session, oldest first.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Clears the recorded warnings.
    pub fn clear_warnings(&mut self) {
        self.warnings.clear();
    }

    pub(crate) fn warn(&mut self, warning: Warning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }
}
