// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory page-layout document object graph.
//!
//! `pagegraph` models the host side of a desktop-publishing scripting
//! surface: documents, spreads, pages, layers, page items, stories,
//! paragraphs, and named styles, all addressed through generational handles
//! that go stale when the object they point to is removed or recomposed.
//!
//! The crate deliberately stops short of layout: there is no shaping, no
//! metrics, no line breaking. What it does model is the *consequence* of
//! layout that scripting clients must cope with: writing a reflow-affecting
//! attribute to a paragraph recomposes the story and invalidates references
//! to every later paragraph, exactly the hazard that makes back-to-front
//! attribute application necessary in [`placard`].
//!
//! [`placard`]: https://docs.rs/placard
//!
//! ## Features
//!
//! - `std` (enabled by default): passes `std` through to `peniko`.
//! - `libm`: required for `no_std` builds, passes `libm` through to `peniko`.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod attrs;
mod document;
mod error;
mod handle;
mod item;
mod story;
mod style;

pub use crate::attrs::{
    FontSelector, Justification, Leading, TextAttribute, TextAttributeKind, TextAttrs,
    VerticalJustification,
};
pub use crate::document::{
    Document, Layer, LayerId, Page, PageId, Spread, SpreadId, TransformAnchor,
};
pub use crate::error::{HostError, HostErrorKind};
pub use crate::handle::Handle;
pub use crate::item::{
    GraphicLine, ItemShape, PageItem, PageItemId, PageItemKind, TextFrame, TextPath, TextPathId,
};
pub use crate::story::{CharacterRun, Paragraph, ParagraphRef, Story, StoryId};
pub use crate::style::{CharacterStyle, CharacterStyleId, ParagraphStyle, ParagraphStyleId};
