// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stories and paragraphs.
//!
//! A story is the text content of one frame or path: an ordered list of
//! paragraphs. Paragraph references carry the revision the paragraph had when
//! the reference was issued; recomposition bumps revisions, so references to
//! paragraphs after a reflow-affecting edit go stale exactly the way live
//! paragraph indices do in a real layout host.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;
use smallvec::SmallVec;

use crate::attrs::TextAttrs;
use crate::handle::Handle;
use crate::style::{CharacterStyleId, ParagraphStyleId};

/// Handle to a [`Story`].
pub type StoryId = Handle<Story>;

/// A span of characters within a paragraph with a character style applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterRun {
    /// Byte range within the paragraph text.
    pub range: Range<usize>,
    /// The applied character style.
    pub style: CharacterStyleId,
}

/// One paragraph of a story.
#[derive(Clone, Debug)]
pub struct Paragraph {
    pub(crate) text: String,
    pub(crate) attrs: TextAttrs,
    pub(crate) applied_style: Option<ParagraphStyleId>,
    pub(crate) character_runs: SmallVec<[CharacterRun; 2]>,
    pub(crate) revision: u32,
}

impl Paragraph {
    pub(crate) fn new(text: String, attrs: TextAttrs, revision: u32) -> Self {
        Self {
            text,
            attrs,
            applied_style: None,
            character_runs: SmallVec::new(),
            revision,
        }
    }
}

/// The text content of a frame or path.
#[derive(Clone, Debug)]
pub struct Story {
    pub(crate) paragraphs: Vec<Paragraph>,
    pub(crate) base_attrs: TextAttrs,
    next_revision: u32,
}

impl Story {
    pub(crate) fn new(base_attrs: TextAttrs) -> Self {
        let mut story = Self {
            paragraphs: Vec::new(),
            base_attrs,
            next_revision: 0,
        };
        // A story is never without at least one (possibly empty) paragraph.
        let revision = story.alloc_revision();
        let attrs = story.base_attrs.clone();
        story.paragraphs.push(Paragraph::new(String::new(), attrs, revision));
        story
    }

    pub(crate) fn alloc_revision(&mut self) -> u32 {
        let revision = self.next_revision;
        self.next_revision += 1;
        revision
    }

    /// Replaces the story contents, splitting `text` into paragraphs on `\n`.
    ///
    /// Every previously issued paragraph reference into this story goes
    /// stale.
    pub(crate) fn set_text(&mut self, text: &str) {
        let base = self.base_attrs.clone();
        self.paragraphs.clear();
        for piece in text.split('\n') {
            let revision = self.alloc_revision();
            self.paragraphs
                .push(Paragraph::new(String::from(piece), base.clone(), revision));
        }
    }

    /// Bumps the revision of every paragraph after `index`.
    ///
    /// Models recomposition: an edit that reflows paragraph `index` rebuilds
    /// the composed representation of everything after it.
    pub(crate) fn recompose_after(&mut self, index: usize) {
        for i in (index + 1)..self.paragraphs.len() {
            let revision = self.next_revision;
            self.next_revision += 1;
            self.paragraphs[i].revision = revision;
        }
    }
}

/// A revisioned reference to one paragraph of a story.
///
/// Valid only while the story is live and the paragraph has not been
/// recomposed since the reference was issued.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParagraphRef {
    /// The owning story.
    pub story: StoryId,
    /// The paragraph index within the story.
    pub index: usize,
    /// The paragraph revision this reference was issued against.
    pub revision: u32,
}
