// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered attribute sets for bulk application.

use smallvec::SmallVec;

use pagegraph::{TextAttribute, TextAttributeKind, TextAttrs};

/// An insertion-ordered collection of [`TextAttribute`]s, containing at most
/// one value per attribute kind.
///
/// Application order is insertion order, so when two inserts touch the same
/// kind the later one wins: the earlier value is dropped and the survivor
/// moves to the end of the set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeSet {
    entries: SmallVec<[TextAttribute; 8]>,
}

impl AttributeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `attribute` to the set, returning any replaced value of the same
    /// kind.
    pub fn insert(&mut self, attribute: TextAttribute) -> Option<TextAttribute> {
        let kind = attribute.kind();
        let replaced = self
            .entries
            .iter()
            .position(|existing| existing.kind() == kind)
            .map(|position| self.entries.remove(position));
        self.entries.push(attribute);
        replaced
    }

    /// The value held for `kind`, if any.
    pub fn get(&self, kind: TextAttributeKind) -> Option<&TextAttribute> {
        self.entries.iter().find(|entry| entry.kind() == kind)
    }

    /// Iterates the set in application order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TextAttribute> {
        self.entries.iter()
    }

    /// The number of attributes in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<TextAttribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = TextAttribute>>(iter: I) -> Self {
        let mut set = Self::new();
        for attribute in iter {
            set.insert(attribute);
        }
        set
    }
}

/// The full attribute record as a set, in a fixed canonical order.
impl From<&TextAttrs> for AttributeSet {
    fn from(attrs: &TextAttrs) -> Self {
        [
            TextAttribute::Font(attrs.font.clone()),
            TextAttribute::FontSize(attrs.size),
            TextAttribute::FillColor(attrs.fill),
            TextAttribute::Justification(attrs.justification),
            TextAttribute::Leading(attrs.leading),
            TextAttribute::Kerning(attrs.kerning),
            TextAttribute::Tracking(attrs.tracking),
        ]
        .into_iter()
        .collect()
    }
}
