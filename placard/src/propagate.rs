// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute propagation over text targets.
//!
//! A [`TextTarget`] names anything that can be resolved to paragraphs: the
//! whole document, a spread, a page, a layer, a story, a frame, a text path,
//! or a single paragraph reference. The propagator expands the target to its
//! paragraph list and then reads or writes attributes on every element.
//!
//! Writes always run **back-to-front** over the resolved list. Writing a
//! reflow-affecting attribute to a paragraph recomposes the story after it,
//! so a forward pass would invalidate the references it has not visited yet;
//! visiting the last paragraph first means every recomposition only touches
//! paragraphs that have already been written.

use alloc::vec;
use alloc::vec::Vec;

use pagegraph::{
    HostErrorKind, LayerId, PageId, PageItemId, ParagraphRef, SpreadId, StoryId, TextAttribute,
    TextAttributeKind, TextPathId,
};

use crate::attrs::AttributeSet;
use crate::context::ScriptContext;
use crate::error::{Error, Warning};
use crate::place::TextUnit;

/// Anything attributes can be propagated over.
///
/// A closed sum over the text-bearing shapes of the document graph. Raw text
/// is not a member: text content can never be a mutation target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TextTarget {
    /// Every text-bearing item in the document.
    Document,
    /// Every text-bearing item on the spread's pages.
    Spread(SpreadId),
    /// Every text-bearing item on the page.
    Page(PageId),
    /// Every text-bearing item on the layer, in document traversal order.
    Layer(LayerId),
    /// Every paragraph of the story.
    Story(StoryId),
    /// Every paragraph of a text frame's story.
    Frame(PageItemId),
    /// Every paragraph of a text path's story.
    Path(TextPathId),
    /// A single paragraph.
    Range(ParagraphRef),
}

impl From<TextUnit> for TextTarget {
    fn from(unit: TextUnit) -> Self {
        match unit {
            TextUnit::Frame(frame) => Self::Frame(frame),
            TextUnit::Path(path) => Self::Path(path),
        }
    }
}

impl From<ParagraphRef> for TextTarget {
    fn from(paragraph: ParagraphRef) -> Self {
        Self::Range(paragraph)
    }
}

/// The outcome of expanding a target, before soft-condition policy applies.
enum Resolution {
    /// The target's paragraphs, in document order.
    Paragraphs(Vec<ParagraphRef>),
    /// The target no longer denotes a live object.
    Stale,
    /// The target denotes a live object that does not hold text.
    NotText(&'static str),
}

impl ScriptContext<'_> {
    /// Expands `target` to its paragraphs, in document order.
    ///
    /// A stale target is a soft condition: one [`Warning::StaleTarget`] is
    /// recorded and an empty list returned. A live target that cannot hold
    /// text is a usage error.
    pub fn resolve_target(&mut self, target: &TextTarget) -> Result<Vec<ParagraphRef>, Error> {
        match self.expand(target) {
            Resolution::Paragraphs(refs) => Ok(refs),
            Resolution::Stale => {
                self.warn(Warning::StaleTarget);
                Ok(Vec::new())
            }
            Resolution::NotText(detail) => Err(Error::invalid_argument(detail)),
        }
    }

    fn expand(&self, target: &TextTarget) -> Resolution {
        match target {
            TextTarget::Document => {
                let mut refs = Vec::new();
                for &spread in self.doc.spreads() {
                    self.collect_spread(spread, None, &mut refs);
                }
                Resolution::Paragraphs(refs)
            }
            TextTarget::Spread(spread) => {
                if !self.doc.spread_is_valid(*spread) {
                    return Resolution::Stale;
                }
                let mut refs = Vec::new();
                self.collect_spread(*spread, None, &mut refs);
                Resolution::Paragraphs(refs)
            }
            TextTarget::Page(page) => {
                if !self.doc.page_is_valid(*page) {
                    return Resolution::Stale;
                }
                let mut refs = Vec::new();
                self.collect_page(*page, None, &mut refs);
                Resolution::Paragraphs(refs)
            }
            TextTarget::Layer(layer) => {
                if !self.doc.layer_is_valid(*layer) {
                    return Resolution::Stale;
                }
                let mut refs = Vec::new();
                for &spread in self.doc.spreads() {
                    self.collect_spread(spread, Some(*layer), &mut refs);
                }
                Resolution::Paragraphs(refs)
            }
            TextTarget::Story(story) => self.story_paragraphs(*story),
            TextTarget::Frame(frame) => match self.doc.item(*frame) {
                None => Resolution::Stale,
                Some(_) => match self.doc.frame_story(*frame) {
                    Ok(story) => self.story_paragraphs(story),
                    Err(_) => Resolution::NotText("item does not hold text"),
                },
            },
            TextTarget::Path(path) => match self.doc.path_story(*path) {
                Ok(story) => self.story_paragraphs(story),
                Err(_) => Resolution::Stale,
            },
            TextTarget::Range(paragraph) => {
                if self.doc.paragraph_is_valid(*paragraph) {
                    Resolution::Paragraphs(vec![*paragraph])
                } else {
                    Resolution::Stale
                }
            }
        }
    }

    fn story_paragraphs(&self, story: StoryId) -> Resolution {
        match self.doc.paragraph_refs(story) {
            Ok(refs) => Resolution::Paragraphs(refs),
            Err(_) => Resolution::Stale,
        }
    }

    fn collect_spread(&self, spread: SpreadId, layer: Option<LayerId>, out: &mut Vec<ParagraphRef>) {
        let Ok(pages) = self.doc.spread_pages(spread) else {
            return;
        };
        for &page in pages {
            self.collect_page(page, layer, out);
        }
    }

    fn collect_page(&self, page: PageId, layer: Option<LayerId>, out: &mut Vec<ParagraphRef>) {
        let Ok(items) = self.doc.page_items(page) else {
            return;
        };
        for &item in items {
            if let Some(layer) = layer {
                match self.doc.item(item) {
                    Some(entry) if entry.layer == layer => {}
                    _ => continue,
                }
            }
            if let Some(story) = self.doc.item_story(item) {
                if let Ok(refs) = self.doc.paragraph_refs(story) {
                    out.extend(refs);
                }
            }
        }
    }

    /// Writes one attribute to every paragraph the target resolves to.
    ///
    /// Paragraphs are written back-to-front (see the module docs); the
    /// returned references are re-resolved afterwards and are therefore live
    /// and in document order. A font that is not installed is skipped with a
    /// warning and nothing is written.
    pub fn write(
        &mut self,
        target: &TextTarget,
        attribute: TextAttribute,
    ) -> Result<Vec<ParagraphRef>, Error> {
        attribute
            .validate()
            .map_err(|err| Error::invalid_argument(err.detail()))?;
        if let TextAttribute::Font(font) = &attribute {
            if !self.doc.font_available(font) {
                let font = font.clone();
                self.warn(Warning::FontNotInstalled(font));
                return Ok(Vec::new());
            }
        }
        let refs = self.resolve_target(target)?;
        if refs.is_empty() {
            return Ok(refs);
        }
        for paragraph in refs.iter().rev() {
            self.write_one(*paragraph, attribute.clone())?;
        }
        self.resolve_target(target)
    }

    /// Writes every attribute of `attributes`, in set order, to every
    /// paragraph the target resolves to.
    ///
    /// If two entries touch the same underlying property the later one wins;
    /// that is a property of the set, not validated here. Uninstalled fonts
    /// are skipped with a warning; the remaining attributes are still
    /// written.
    pub fn write_set(
        &mut self,
        target: &TextTarget,
        attributes: &AttributeSet,
    ) -> Result<Vec<ParagraphRef>, Error> {
        for attribute in attributes.iter() {
            attribute
                .validate()
                .map_err(|err| Error::invalid_argument(err.detail()))?;
        }
        let mut to_apply: Vec<TextAttribute> = Vec::with_capacity(attributes.len());
        for attribute in attributes.iter() {
            if let TextAttribute::Font(font) = attribute {
                if !self.doc.font_available(font) {
                    let font = font.clone();
                    self.warn(Warning::FontNotInstalled(font));
                    continue;
                }
            }
            to_apply.push(attribute.clone());
        }
        let refs = self.resolve_target(target)?;
        if refs.is_empty() || to_apply.is_empty() {
            return Ok(refs);
        }
        for paragraph in refs.iter().rev() {
            for attribute in &to_apply {
                self.write_one(*paragraph, attribute.clone())?;
            }
        }
        self.resolve_target(target)
    }

    fn write_one(&mut self, paragraph: ParagraphRef, attribute: TextAttribute) -> Result<(), Error> {
        match self.doc.write_attribute(paragraph, attribute) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == HostErrorKind::Stale => {
                // Cannot happen under the back-to-front discipline; kept as
                // a soft skip because the document can be edited between
                // resolution and write through `document_mut`.
                self.warn(Warning::StaleTarget);
                Ok(())
            }
            Err(err) => Err(Error::host(err)),
        }
    }

    /// Reads the current value of one attribute from every paragraph the
    /// target resolves to, in document order.
    pub fn read(
        &mut self,
        target: &TextTarget,
        kind: TextAttributeKind,
    ) -> Result<Vec<TextAttribute>, Error> {
        let refs = self.resolve_target(target)?;
        let mut values = Vec::with_capacity(refs.len());
        for paragraph in refs {
            match self.doc.read_attribute(paragraph, kind) {
                Ok(value) => values.push(value),
                Err(err) if err.kind() == HostErrorKind::Stale => {
                    self.warn(Warning::StaleTarget);
                }
                Err(err) => return Err(Error::host(err)),
            }
        }
        Ok(values)
    }
}
