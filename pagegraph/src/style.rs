// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named character and paragraph styles.
//!
//! A style is a named, ordered set of attribute overrides stored in one of
//! the document's two style collections. Lookup is by exact name.

use alloc::string::String;
use alloc::vec::Vec;

use crate::attrs::TextAttribute;
use crate::error::HostError;
use crate::handle::Handle;

/// Handle to a [`CharacterStyle`] in a document's character style collection.
pub type CharacterStyleId = Handle<CharacterStyle>;

/// Handle to a [`ParagraphStyle`] in a document's paragraph style collection.
pub type ParagraphStyleId = Handle<ParagraphStyle>;

/// A named style applied to runs of characters.
#[derive(Clone, Debug)]
pub struct CharacterStyle {
    name: String,
    overrides: Vec<TextAttribute>,
}

impl CharacterStyle {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overrides: Vec::new(),
        }
    }

    /// The style name used for collection lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute overrides this style carries, in assignment order.
    pub fn overrides(&self) -> &[TextAttribute] {
        &self.overrides
    }

    pub(crate) fn set_property(&mut self, attribute: TextAttribute) -> Result<(), HostError> {
        set_property(&mut self.overrides, attribute)
    }
}

/// A named style applied to whole paragraphs.
#[derive(Clone, Debug)]
pub struct ParagraphStyle {
    name: String,
    overrides: Vec<TextAttribute>,
}

impl ParagraphStyle {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overrides: Vec::new(),
        }
    }

    /// The style name used for collection lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute overrides this style carries, in assignment order.
    pub fn overrides(&self) -> &[TextAttribute] {
        &self.overrides
    }

    pub(crate) fn set_property(&mut self, attribute: TextAttribute) -> Result<(), HostError> {
        set_property(&mut self.overrides, attribute)
    }
}

/// Validates and stores one override, replacing any prior value of the same
/// kind in place.
fn set_property(
    overrides: &mut Vec<TextAttribute>,
    attribute: TextAttribute,
) -> Result<(), HostError> {
    attribute.validate()?;
    if let Some(existing) = overrides
        .iter_mut()
        .find(|existing| existing.kind() == attribute.kind())
    {
        *existing = attribute;
    } else {
        overrides.push(attribute);
    }
    Ok(())
}
