// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document: the root of the object graph.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashSet;
use peniko::kurbo::{Affine, Point, Rect};

use crate::attrs::{FontSelector, TextAttribute, TextAttributeKind, TextAttrs, VerticalJustification};
use crate::error::HostError;
use crate::handle::{Arena, Handle};
use crate::item::{GraphicLine, ItemShape, PageItem, PageItemId, PageItemKind, TextFrame, TextPath, TextPathId};
use crate::story::{CharacterRun, Paragraph, ParagraphRef, Story, StoryId};
use crate::style::{CharacterStyle, CharacterStyleId, ParagraphStyle, ParagraphStyleId};

/// Handle to a [`Spread`].
pub type SpreadId = Handle<Spread>;

/// Handle to a [`Page`].
pub type PageId = Handle<Page>;

/// Handle to a [`Layer`].
pub type LayerId = Handle<Layer>;

/// An ordered run of pages viewed together.
#[derive(Clone, Debug)]
pub struct Spread {
    pub(crate) pages: Vec<PageId>,
}

/// One page, holding items in creation order.
#[derive(Clone, Debug)]
pub struct Page {
    pub(crate) items: Vec<PageItemId>,
}

/// A named layer; every page item belongs to exactly one.
#[derive(Clone, Debug)]
pub struct Layer {
    pub(crate) name: String,
}

/// The anchor a coordinate-space transform is applied around.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransformAnchor {
    /// The top-left corner of the item's bounds.
    TopLeft,
    /// The center of the item's bounds.
    Center,
}

/// A live, mutable page-layout document.
///
/// Owns every entity of the graph. All access goes through generational
/// handles; see [`Handle`] for the staleness model.
#[derive(Debug)]
pub struct Document {
    spreads: Arena<Spread>,
    spread_order: Vec<SpreadId>,
    pages: Arena<Page>,
    layers: Arena<Layer>,
    layer_order: Vec<LayerId>,
    items: Arena<PageItem>,
    stories: Arena<Story>,
    text_paths: Arena<TextPath>,
    character_styles: Arena<CharacterStyle>,
    character_style_order: Vec<CharacterStyleId>,
    paragraph_styles: Arena<ParagraphStyle>,
    paragraph_style_order: Vec<ParagraphStyleId>,
    fonts: HashSet<FontSelector>,
    defaults: TextAttrs,
    default_vertical: VerticalJustification,
    default_page: PageId,
    default_layer: LayerId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document with one spread, one page, and one layer.
    ///
    /// The document's default font is pre-installed so that freshly created
    /// text is always resolvable.
    pub fn new() -> Self {
        let mut spreads = Arena::new();
        let mut pages = Arena::new();
        let mut layers = Arena::new();
        let page = pages.insert(Page { items: Vec::new() });
        let spread = spreads.insert(Spread { pages: vec![page] });
        let layer = layers.insert(Layer {
            name: String::from("Layer 1"),
        });
        let defaults = TextAttrs::default();
        let mut fonts = HashSet::new();
        fonts.insert(defaults.font.clone());
        Self {
            spreads,
            spread_order: vec![spread],
            pages,
            layers,
            layer_order: vec![layer],
            items: Arena::new(),
            stories: Arena::new(),
            text_paths: Arena::new(),
            character_styles: Arena::new(),
            character_style_order: Vec::new(),
            paragraph_styles: Arena::new(),
            paragraph_style_order: Vec::new(),
            fonts,
            defaults,
            default_vertical: VerticalJustification::default(),
            default_page: page,
            default_layer: layer,
        }
    }

    /// The page created with the document.
    pub fn default_page(&self) -> PageId {
        self.default_page
    }

    /// The layer created with the document.
    pub fn default_layer(&self) -> LayerId {
        self.default_layer
    }

    /// Document-default text attributes, used to seed new stories.
    pub fn defaults(&self) -> &TextAttrs {
        &self.defaults
    }

    /// Document-default vertical justification for new frames.
    pub fn default_vertical_justification(&self) -> VerticalJustification {
        self.default_vertical
    }

    // --- structure ---

    /// Appends an empty spread.
    pub fn add_spread(&mut self) -> SpreadId {
        let spread = self.spreads.insert(Spread { pages: Vec::new() });
        self.spread_order.push(spread);
        spread
    }

    /// Appends an empty page to a spread.
    pub fn add_page(&mut self, spread: SpreadId) -> Result<PageId, HostError> {
        if !self.spreads.contains(spread) {
            return Err(HostError::stale("spread no longer exists"));
        }
        let page = self.pages.insert(Page { items: Vec::new() });
        if let Some(spread) = self.spreads.get_mut(spread) {
            spread.pages.push(page);
        }
        Ok(page)
    }

    /// Creates a named layer.
    pub fn add_layer(&mut self, name: impl Into<String>) -> LayerId {
        let layer = self.layers.insert(Layer { name: name.into() });
        self.layer_order.push(layer);
        layer
    }

    /// Spreads in document order.
    pub fn spreads(&self) -> &[SpreadId] {
        &self.spread_order
    }

    /// Layers in creation order.
    pub fn layers(&self) -> &[LayerId] {
        &self.layer_order
    }

    /// A layer's name.
    pub fn layer_name(&self, layer: LayerId) -> Option<&str> {
        self.layers.get(layer).map(|layer| layer.name.as_str())
    }

    /// Pages of a spread in order.
    pub fn spread_pages(&self, spread: SpreadId) -> Result<&[PageId], HostError> {
        self.spreads
            .get(spread)
            .map(|spread| spread.pages.as_slice())
            .ok_or_else(|| HostError::stale("spread no longer exists"))
    }

    /// Items on a page in creation order.
    pub fn page_items(&self, page: PageId) -> Result<&[PageItemId], HostError> {
        self.pages
            .get(page)
            .map(|page| page.items.as_slice())
            .ok_or_else(|| HostError::stale("page no longer exists"))
    }

    /// Whether a spread handle still resolves.
    pub fn spread_is_valid(&self, spread: SpreadId) -> bool {
        self.spreads.contains(spread)
    }

    /// Whether a page handle still resolves.
    pub fn page_is_valid(&self, page: PageId) -> bool {
        self.pages.contains(page)
    }

    /// Whether a layer handle still resolves.
    pub fn layer_is_valid(&self, layer: LayerId) -> bool {
        self.layers.contains(layer)
    }

    // --- fonts ---

    /// Adds a font to the installed-font table.
    pub fn install_font(&mut self, family: impl Into<String>, style: impl Into<String>) {
        self.fonts.insert(FontSelector::new(family, style));
    }

    /// Whether a font is installed, by exact family and style name.
    pub fn font_available(&self, font: &FontSelector) -> bool {
        self.fonts.contains(font)
    }

    // --- page items ---

    /// Creates a rectangle on a page and layer.
    pub fn create_rectangle(
        &mut self,
        page: PageId,
        layer: LayerId,
        bounds: Rect,
    ) -> Result<PageItemId, HostError> {
        self.create_item(
            page,
            layer,
            PageItemKind::Shape {
                shape: ItemShape::Rectangle,
                bounds,
            },
        )
    }

    /// Creates an oval on a page and layer.
    pub fn create_oval(
        &mut self,
        page: PageId,
        layer: LayerId,
        bounds: Rect,
    ) -> Result<PageItemId, HostError> {
        self.create_item(
            page,
            layer,
            PageItemKind::Shape {
                shape: ItemShape::Oval,
                bounds,
            },
        )
    }

    /// Creates a polygon on a page and layer.
    pub fn create_polygon(
        &mut self,
        page: PageId,
        layer: LayerId,
        bounds: Rect,
    ) -> Result<PageItemId, HostError> {
        self.create_item(
            page,
            layer,
            PageItemKind::Shape {
                shape: ItemShape::Polygon,
                bounds,
            },
        )
    }

    /// Creates a graphic line on a page and layer.
    pub fn create_graphic_line(
        &mut self,
        page: PageId,
        layer: LayerId,
        p0: Point,
        p1: Point,
    ) -> Result<PageItemId, HostError> {
        self.create_item(page, layer, PageItemKind::Line(GraphicLine { p0, p1 }))
    }

    /// Creates an empty text frame on a page and layer.
    pub fn create_text_frame(
        &mut self,
        page: PageId,
        layer: LayerId,
        bounds: Rect,
    ) -> Result<PageItemId, HostError> {
        self.check_page_layer(page, layer)?;
        let story = self.stories.insert(Story::new(self.defaults.clone()));
        self.create_item(
            page,
            layer,
            PageItemKind::TextFrame(TextFrame {
                bounds,
                vertical_justification: self.default_vertical,
                transform: Affine::IDENTITY,
                story,
            }),
        )
    }

    fn check_page_layer(&self, page: PageId, layer: LayerId) -> Result<(), HostError> {
        if !self.pages.contains(page) {
            return Err(HostError::stale("page no longer exists"));
        }
        if !self.layers.contains(layer) {
            return Err(HostError::stale("layer no longer exists"));
        }
        Ok(())
    }

    fn create_item(
        &mut self,
        page: PageId,
        layer: LayerId,
        kind: PageItemKind,
    ) -> Result<PageItemId, HostError> {
        self.check_page_layer(page, layer)?;
        let id = self.items.insert(PageItem {
            page,
            layer,
            kind,
            text_path: None,
        });
        if let Some(page) = self.pages.get_mut(page) {
            page.items.push(id);
        }
        Ok(id)
    }

    /// Borrows a page item.
    pub fn item(&self, item: PageItemId) -> Option<&PageItem> {
        self.items.get(item)
    }

    /// Whether an item handle still resolves.
    pub fn item_is_valid(&self, item: PageItemId) -> bool {
        self.items.contains(item)
    }

    /// Removes an item, invalidating its handle and any story it carried.
    pub fn remove_item(&mut self, item: PageItemId) -> Result<(), HostError> {
        let removed = self
            .items
            .remove(item)
            .ok_or_else(|| HostError::stale("item no longer exists"))?;
        if let Some(page) = self.pages.get_mut(removed.page) {
            page.items.retain(|candidate| *candidate != item);
        }
        if let PageItemKind::TextFrame(frame) = &removed.kind {
            self.stories.remove(frame.story);
        }
        if let Some(path_id) = removed.text_path {
            if let Some(path) = self.text_paths.remove(path_id) {
                self.stories.remove(path.story);
            }
        }
        Ok(())
    }

    /// Adopts a closed shape as a text frame in place.
    ///
    /// Idempotent on frames: converting a frame returns its existing story.
    pub fn convert_to_text_frame(&mut self, item: PageItemId) -> Result<StoryId, HostError> {
        let defaults = self.defaults.clone();
        let default_vertical = self.default_vertical;
        let entry = self
            .items
            .get_mut(item)
            .ok_or_else(|| HostError::stale("item no longer exists"))?;
        match &entry.kind {
            PageItemKind::TextFrame(frame) => Ok(frame.story),
            PageItemKind::Shape { bounds, .. } => {
                let bounds = *bounds;
                let story = self.stories.insert(Story::new(defaults));
                entry.kind = PageItemKind::TextFrame(TextFrame {
                    bounds,
                    vertical_justification: default_vertical,
                    transform: Affine::IDENTITY,
                    story,
                });
                Ok(story)
            }
            PageItemKind::Line(_) => Err(HostError::wrong_item_kind(
                "a graphic line cannot become a text frame; attach a text path instead",
            )),
        }
    }

    /// Attaches a text path to a graphic line.
    ///
    /// Returns the already attached path if the line has one.
    pub fn attach_text_path(&mut self, item: PageItemId) -> Result<TextPathId, HostError> {
        let defaults = self.defaults.clone();
        let entry = self
            .items
            .get_mut(item)
            .ok_or_else(|| HostError::stale("item no longer exists"))?;
        match entry.kind {
            PageItemKind::Line(_) => {
                if let Some(existing) = entry.text_path {
                    return Ok(existing);
                }
                let story = self.stories.insert(Story::new(defaults));
                let path = self.text_paths.insert(TextPath { line: item, story });
                entry.text_path = Some(path);
                Ok(path)
            }
            _ => Err(HostError::wrong_item_kind(
                "text paths attach to graphic lines",
            )),
        }
    }

    /// Borrows a text path.
    pub fn text_path(&self, path: TextPathId) -> Option<&TextPath> {
        self.text_paths.get(path)
    }

    /// A text path's story.
    pub fn path_story(&self, path: TextPathId) -> Result<StoryId, HostError> {
        self.text_paths
            .get(path)
            .map(|path| path.story)
            .ok_or_else(|| HostError::stale("text path no longer exists"))
    }

    /// Whether a text path handle still resolves.
    pub fn path_is_valid(&self, path: TextPathId) -> bool {
        self.text_paths.contains(path)
    }

    /// The story a page item bears, if it bears one.
    ///
    /// Text frames bear their own story; a graphic line bears the story of
    /// its attached text path.
    pub fn item_story(&self, item: PageItemId) -> Option<StoryId> {
        let entry = self.items.get(item)?;
        match &entry.kind {
            PageItemKind::TextFrame(frame) => Some(frame.story),
            PageItemKind::Line(_) => {
                let path = entry.text_path?;
                Some(self.text_paths.get(path)?.story)
            }
            PageItemKind::Shape { .. } => None,
        }
    }

    // --- frames ---

    fn frame(&self, item: PageItemId) -> Result<&TextFrame, HostError> {
        let entry = self
            .items
            .get(item)
            .ok_or_else(|| HostError::stale("item no longer exists"))?;
        match &entry.kind {
            PageItemKind::TextFrame(frame) => Ok(frame),
            _ => Err(HostError::wrong_item_kind("item is not a text frame")),
        }
    }

    fn frame_mut(&mut self, item: PageItemId) -> Result<&mut TextFrame, HostError> {
        let entry = self
            .items
            .get_mut(item)
            .ok_or_else(|| HostError::stale("item no longer exists"))?;
        match &mut entry.kind {
            PageItemKind::TextFrame(frame) => Ok(frame),
            _ => Err(HostError::wrong_item_kind("item is not a text frame")),
        }
    }

    /// A frame's bounds in document coordinates.
    pub fn frame_bounds(&self, item: PageItemId) -> Result<Rect, HostError> {
        self.frame(item).map(|frame| frame.bounds)
    }

    /// A frame's story.
    pub fn frame_story(&self, item: PageItemId) -> Result<StoryId, HostError> {
        self.frame(item).map(|frame| frame.story)
    }

    /// A frame's vertical justification.
    pub fn frame_vertical_justification(
        &self,
        item: PageItemId,
    ) -> Result<VerticalJustification, HostError> {
        self.frame(item).map(|frame| frame.vertical_justification)
    }

    /// Sets a frame's vertical justification.
    pub fn set_frame_vertical_justification(
        &mut self,
        item: PageItemId,
        vertical: VerticalJustification,
    ) -> Result<(), HostError> {
        self.frame_mut(item)?.vertical_justification = vertical;
        Ok(())
    }

    /// A frame's coordinate-space transform.
    pub fn frame_transform(&self, item: PageItemId) -> Result<Affine, HostError> {
        self.frame(item).map(|frame| frame.transform)
    }

    /// Applies a transform matrix to a frame, anchored at the given point of
    /// its bounds.
    pub fn transform_frame(
        &mut self,
        item: PageItemId,
        anchor: TransformAnchor,
        matrix: Affine,
    ) -> Result<(), HostError> {
        let frame = self.frame_mut(item)?;
        let anchor = match anchor {
            TransformAnchor::TopLeft => frame.bounds.origin().to_vec2(),
            TransformAnchor::Center => frame.bounds.center().to_vec2(),
        };
        frame.transform = Affine::translate(anchor) * matrix * Affine::translate(-anchor);
        Ok(())
    }

    // --- stories and paragraphs ---

    /// Whether a story handle still resolves.
    pub fn story_is_valid(&self, story: StoryId) -> bool {
        self.stories.contains(story)
    }

    /// Replaces a story's contents, splitting on `\n` into paragraphs.
    ///
    /// Every previously issued paragraph reference into the story goes stale.
    pub fn set_story_text(&mut self, story: StoryId, text: &str) -> Result<(), HostError> {
        self.stories
            .get_mut(story)
            .ok_or_else(|| HostError::stale("story no longer exists"))?
            .set_text(text);
        Ok(())
    }

    /// The number of paragraphs in a story.
    pub fn story_paragraph_count(&self, story: StoryId) -> Result<usize, HostError> {
        self.stories
            .get(story)
            .map(|story| story.paragraphs.len())
            .ok_or_else(|| HostError::stale("story no longer exists"))
    }

    /// Current references to every paragraph of a story, in index order.
    pub fn paragraph_refs(&self, story: StoryId) -> Result<Vec<ParagraphRef>, HostError> {
        let entry = self
            .stories
            .get(story)
            .ok_or_else(|| HostError::stale("story no longer exists"))?;
        Ok(entry
            .paragraphs
            .iter()
            .enumerate()
            .map(|(index, paragraph)| ParagraphRef {
                story,
                index,
                revision: paragraph.revision,
            })
            .collect())
    }

    fn paragraph(&self, paragraph: ParagraphRef) -> Result<&Paragraph, HostError> {
        let story = self
            .stories
            .get(paragraph.story)
            .ok_or_else(|| HostError::stale("story no longer exists"))?;
        let entry = story
            .paragraphs
            .get(paragraph.index)
            .ok_or_else(|| HostError::stale("paragraph index out of range"))?;
        if entry.revision != paragraph.revision {
            return Err(HostError::stale("paragraph was recomposed"));
        }
        Ok(entry)
    }

    fn paragraph_mut(&mut self, paragraph: ParagraphRef) -> Result<&mut Paragraph, HostError> {
        let story = self
            .stories
            .get_mut(paragraph.story)
            .ok_or_else(|| HostError::stale("story no longer exists"))?;
        let entry = story
            .paragraphs
            .get_mut(paragraph.index)
            .ok_or_else(|| HostError::stale("paragraph index out of range"))?;
        if entry.revision != paragraph.revision {
            return Err(HostError::stale("paragraph was recomposed"));
        }
        Ok(entry)
    }

    /// Whether a paragraph reference is still live.
    pub fn paragraph_is_valid(&self, paragraph: ParagraphRef) -> bool {
        self.paragraph(paragraph).is_ok()
    }

    /// A paragraph's text.
    pub fn paragraph_text(&self, paragraph: ParagraphRef) -> Result<&str, HostError> {
        self.paragraph(paragraph).map(|entry| entry.text.as_str())
    }

    /// Reads one attribute of a paragraph.
    pub fn read_attribute(
        &self,
        paragraph: ParagraphRef,
        kind: TextAttributeKind,
    ) -> Result<TextAttribute, HostError> {
        self.paragraph(paragraph).map(|entry| entry.attrs.get(kind))
    }

    /// Writes one attribute of a paragraph.
    ///
    /// Writing a reflow-affecting attribute (font, size, leading) recomposes
    /// the story: references to paragraphs after the written one go stale.
    /// The reference written through stays live.
    pub fn write_attribute(
        &mut self,
        paragraph: ParagraphRef,
        attribute: TextAttribute,
    ) -> Result<(), HostError> {
        attribute.validate()?;
        let reflow = attribute.kind().affects_reflow();
        let entry = self.paragraph_mut(paragraph)?;
        entry.attrs.apply(attribute);
        if reflow {
            if let Some(story) = self.stories.get_mut(paragraph.story) {
                story.recompose_after(paragraph.index);
            }
        }
        Ok(())
    }

    /// Sets the applied paragraph style of a paragraph.
    pub fn set_applied_paragraph_style(
        &mut self,
        paragraph: ParagraphRef,
        style: ParagraphStyleId,
    ) -> Result<(), HostError> {
        if !self.paragraph_styles.contains(style) {
            return Err(HostError::stale("paragraph style no longer exists"));
        }
        self.paragraph_mut(paragraph)?.applied_style = Some(style);
        Ok(())
    }

    /// The applied paragraph style of a paragraph, if any.
    pub fn applied_paragraph_style(
        &self,
        paragraph: ParagraphRef,
    ) -> Result<Option<ParagraphStyleId>, HostError> {
        self.paragraph(paragraph).map(|entry| entry.applied_style)
    }

    /// Applies a character style to the full span of a paragraph.
    pub fn apply_character_style_run(
        &mut self,
        paragraph: ParagraphRef,
        style: CharacterStyleId,
    ) -> Result<(), HostError> {
        if !self.character_styles.contains(style) {
            return Err(HostError::stale("character style no longer exists"));
        }
        let entry = self.paragraph_mut(paragraph)?;
        let range = 0..entry.text.len();
        entry.character_runs.retain(|run| run.range != range);
        entry.character_runs.push(CharacterRun { range, style });
        Ok(())
    }

    /// The character style runs of a paragraph, in application order.
    pub fn character_style_runs(
        &self,
        paragraph: ParagraphRef,
    ) -> Result<&[CharacterRun], HostError> {
        self.paragraph(paragraph)
            .map(|entry| entry.character_runs.as_slice())
    }

    // --- style collections ---

    /// Finds a character style by exact name.
    pub fn find_character_style(&self, name: &str) -> Option<CharacterStyleId> {
        self.character_style_order.iter().copied().find(|id| {
            self.character_styles
                .get(*id)
                .is_some_and(|style| style.name() == name)
        })
    }

    /// Creates a character style with the given name.
    pub fn create_character_style(&mut self, name: impl Into<String>) -> CharacterStyleId {
        let id = self.character_styles.insert(CharacterStyle::new(name));
        self.character_style_order.push(id);
        id
    }

    /// Borrows a character style.
    pub fn character_style(&self, style: CharacterStyleId) -> Option<&CharacterStyle> {
        self.character_styles.get(style)
    }

    /// Assigns one property onto a character style.
    pub fn set_character_style_property(
        &mut self,
        style: CharacterStyleId,
        attribute: TextAttribute,
    ) -> Result<(), HostError> {
        self.character_styles
            .get_mut(style)
            .ok_or_else(|| HostError::stale("character style no longer exists"))?
            .set_property(attribute)
    }

    /// Finds a paragraph style by exact name.
    pub fn find_paragraph_style(&self, name: &str) -> Option<ParagraphStyleId> {
        self.paragraph_style_order.iter().copied().find(|id| {
            self.paragraph_styles
                .get(*id)
                .is_some_and(|style| style.name() == name)
        })
    }

    /// Creates a paragraph style with the given name.
    pub fn create_paragraph_style(&mut self, name: impl Into<String>) -> ParagraphStyleId {
        let id = self.paragraph_styles.insert(ParagraphStyle::new(name));
        self.paragraph_style_order.push(id);
        id
    }

    /// Borrows a paragraph style.
    pub fn paragraph_style(&self, style: ParagraphStyleId) -> Option<&ParagraphStyle> {
        self.paragraph_styles.get(style)
    }

    /// Assigns one property onto a paragraph style.
    pub fn set_paragraph_style_property(
        &mut self,
        style: ParagraphStyleId,
        attribute: TextAttribute,
    ) -> Result<(), HostError> {
        self.paragraph_styles
            .get_mut(style)
            .ok_or_else(|| HostError::stale("paragraph style no longer exists"))?
            .set_property(attribute)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use peniko::kurbo::{Point, Rect};

    use super::*;
    use crate::attrs::Leading;
    use crate::error::HostErrorKind;

    fn doc_with_frame() -> (Document, PageItemId, StoryId) {
        let mut doc = Document::new();
        let frame = doc
            .create_text_frame(
                doc.default_page(),
                doc.default_layer(),
                Rect::new(0.0, 0.0, 200.0, 100.0),
            )
            .unwrap();
        let story = doc.frame_story(frame).unwrap();
        (doc, frame, story)
    }

    #[test]
    fn story_text_splits_into_paragraphs() {
        let (mut doc, _frame, story) = doc_with_frame();
        doc.set_story_text(story, "one\ntwo\nthree").unwrap();
        assert_eq!(doc.story_paragraph_count(story).unwrap(), 3);
        let refs = doc.paragraph_refs(story).unwrap();
        let texts: Vec<_> = refs
            .iter()
            .map(|r| doc.paragraph_text(*r).unwrap())
            .collect();
        assert_eq!(texts, ["one", "two", "three"]);
    }

    #[test]
    fn reflow_write_invalidates_later_references() {
        let (mut doc, _frame, story) = doc_with_frame();
        doc.set_story_text(story, "a\nb\nc").unwrap();
        let refs = doc.paragraph_refs(story).unwrap();

        // Forward iteration faults: the first write recomposes everything
        // after it.
        doc.write_attribute(refs[0], TextAttribute::FontSize(24.0))
            .unwrap();
        let err = doc
            .write_attribute(refs[1], TextAttribute::FontSize(24.0))
            .unwrap_err();
        assert_eq!(err.kind(), HostErrorKind::Stale);

        // Back-to-front succeeds for every paragraph.
        doc.set_story_text(story, "a\nb\nc").unwrap();
        let refs = doc.paragraph_refs(story).unwrap();
        for r in refs.iter().rev() {
            doc.write_attribute(*r, TextAttribute::Leading(Leading::Points(18.0)))
                .unwrap();
        }
        for r in doc.paragraph_refs(story).unwrap() {
            assert_eq!(
                doc.read_attribute(r, TextAttributeKind::Leading).unwrap(),
                TextAttribute::Leading(Leading::Points(18.0))
            );
        }
    }

    #[test]
    fn non_reflow_writes_keep_references_live() {
        let (mut doc, _frame, story) = doc_with_frame();
        doc.set_story_text(story, "a\nb").unwrap();
        let refs = doc.paragraph_refs(story).unwrap();
        doc.write_attribute(refs[0], TextAttribute::Tracking(10.0))
            .unwrap();
        assert!(doc.paragraph_is_valid(refs[1]));
    }

    #[test]
    fn removing_an_item_invalidates_it_and_its_story() {
        let (mut doc, frame, story) = doc_with_frame();
        assert!(doc.item_is_valid(frame));
        doc.remove_item(frame).unwrap();
        assert!(!doc.item_is_valid(frame));
        assert!(!doc.story_is_valid(story));
        assert_eq!(
            doc.remove_item(frame).unwrap_err().kind(),
            HostErrorKind::Stale
        );
    }

    #[test]
    fn shapes_convert_to_frames_and_lines_take_paths() {
        let mut doc = Document::new();
        let page = doc.default_page();
        let layer = doc.default_layer();

        let rect = doc
            .create_rectangle(page, layer, Rect::new(10.0, 10.0, 50.0, 50.0))
            .unwrap();
        let story = doc.convert_to_text_frame(rect).unwrap();
        assert!(doc.story_is_valid(story));
        // Conversion is idempotent.
        assert_eq!(doc.convert_to_text_frame(rect).unwrap(), story);

        let line = doc
            .create_graphic_line(page, layer, Point::new(0.0, 0.0), Point::new(100.0, 0.0))
            .unwrap();
        let path = doc.attach_text_path(line).unwrap();
        assert_eq!(doc.attach_text_path(line).unwrap(), path);
        assert_eq!(doc.item_story(line), Some(doc.text_path(path).unwrap().story));

        assert_eq!(
            doc.convert_to_text_frame(line).unwrap_err().kind(),
            HostErrorKind::WrongItemKind
        );
        assert_eq!(
            doc.attach_text_path(rect).unwrap_err().kind(),
            HostErrorKind::WrongItemKind
        );
    }

    #[test]
    fn style_collections_find_and_create() {
        let mut doc = Document::new();
        assert!(doc.find_character_style("Emphasis").is_none());
        let id = doc.create_character_style("Emphasis");
        assert_eq!(doc.find_character_style("Emphasis"), Some(id));

        doc.set_character_style_property(id, TextAttribute::Tracking(50.0))
            .unwrap();
        assert_eq!(
            doc.character_style(id).unwrap().overrides(),
            &[TextAttribute::Tracking(50.0)]
        );
        assert_eq!(
            doc.set_character_style_property(id, TextAttribute::FontSize(0.0))
                .unwrap_err()
                .kind(),
            HostErrorKind::InvalidValue
        );
    }

    #[test]
    fn structure_grows_by_spread_page_and_layer() {
        let mut doc = Document::new();
        assert_eq!(doc.spreads().len(), 1);
        assert_eq!(doc.layers().len(), 1);
        assert_eq!(doc.layer_name(doc.default_layer()), Some("Layer 1"));

        let spread = doc.add_spread();
        let page = doc.add_page(spread).unwrap();
        let overlay = doc.add_layer("Overlay");
        assert_eq!(doc.spread_pages(spread).unwrap(), [page]);
        assert_eq!(doc.layer_name(overlay), Some("Overlay"));

        let frame = doc
            .create_text_frame(page, overlay, Rect::new(0.0, 0.0, 10.0, 10.0))
            .unwrap();
        assert_eq!(doc.page_items(page).unwrap(), [frame]);
    }

    #[test]
    fn font_table_lookup_is_exact() {
        let mut doc = Document::new();
        doc.install_font("Helvetica", "Bold");
        assert!(doc.font_available(&FontSelector::new("Helvetica", "Bold")));
        assert!(!doc.font_available(&FontSelector::new("Helvetica", "Italic")));
        // The document default font is always installed.
        assert!(doc.font_available(&doc.defaults().font));
    }
}
