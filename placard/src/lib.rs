// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Processing-style text placement and attribute propagation over a
//! page-layout document graph.
//!
//! - [`ScriptContext`] is a session over one [`pagegraph::Document`]: it
//!   carries the current typography attributes (font, size, fill,
//!   justification, leading, kerning, tracking), the active
//!   rectangle-interpretation mode and transform matrix, and a warning sink.
//! - [`ScriptContext::place_text`] and [`ScriptContext::place_text_in`]
//!   create or adopt text holders and stamp the current attributes onto
//!   them.
//! - [`TextTarget`] names anything resolvable to paragraphs (document,
//!   spread, page, layer, story, frame, path, or a single paragraph), and
//!   [`ScriptContext::write`]/[`ScriptContext::read`] propagate attributes
//!   over it.
//! - [`ScriptContext::resolve_character_style`] gets-or-creates named
//!   styles; [`ScriptContext::apply_character_style`] applies them and
//!   requires the name to exist.
//!
//! ## Scope
//!
//! This crate does no layout of its own: composition, metrics, and reflow
//! live in the document graph. What it owns is the scripting contract on
//! top: coordinate-mode bounds, target resolution, the back-to-front write
//! discipline that keeps paragraph references live across reflow, and the
//! soft-warning policy for stale targets and missing fonts.
//!
//! ## Example
//!
//! ```
//! use pagegraph::Document;
//! use placard::{ScriptContext, TextAttribute, TextAttributeKind, TextTarget};
//!
//! let mut doc = Document::new();
//! let mut ctx = ScriptContext::new(&mut doc);
//! ctx.set_font_size(18.0).unwrap();
//!
//! let unit = ctx.place_text("Hello", 50.0, 50.0, 100.0, 200.0).unwrap();
//! let sizes = ctx
//!     .read(&TextTarget::from(unit), TextAttributeKind::FontSize)
//!     .unwrap();
//! assert_eq!(sizes, vec![TextAttribute::FontSize(18.0)]);
//! ```
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
mod context;
mod error;
mod place;
mod propagate;
mod style;

#[cfg(test)]
mod tests;

pub use crate::attrs::AttributeSet;
pub use crate::context::ScriptContext;
pub use crate::error::{Error, ErrorKind, Warning};
pub use crate::place::{RectMode, TextUnit};
pub use crate::propagate::TextTarget;
pub use crate::style::{CharacterStyleRef, ParagraphStyleRef};

pub use pagegraph::{
    Document, FontSelector, Justification, Leading, ParagraphRef, TextAttribute,
    TextAttributeKind, TextAttrs, VerticalJustification,
};
