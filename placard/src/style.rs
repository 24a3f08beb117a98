// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named style resolution and application.
//!
//! Resolution ("give me the style object for this name") creates missing
//! styles; application ("apply this named style to this text") requires the
//! name to already exist and fails with [`ErrorKind::NotFound`] otherwise.
//! The asymmetry is deliberate: resolution is how scripts *define* styles,
//! application is how they *use* them, and silently defining a style at a
//! use site would hide typos.
//!
//! [`ErrorKind::NotFound`]: crate::ErrorKind::NotFound

use alloc::string::String;
use alloc::vec::Vec;

use pagegraph::{CharacterStyleId, HostErrorKind, ParagraphRef, ParagraphStyleId};

use crate::attrs::AttributeSet;
use crate::context::ScriptContext;
use crate::error::{Error, Warning};
use crate::propagate::TextTarget;

/// A character style, by id or by name.
#[derive(Clone, Debug, PartialEq)]
pub enum CharacterStyleRef {
    /// An already resolved style.
    Id(CharacterStyleId),
    /// A style name, matched exactly against the document collection.
    Name(String),
}

impl From<CharacterStyleId> for CharacterStyleRef {
    fn from(id: CharacterStyleId) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for CharacterStyleRef {
    fn from(name: &str) -> Self {
        Self::Name(name.into())
    }
}

impl From<String> for CharacterStyleRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// A paragraph style, by id or by name.
#[derive(Clone, Debug, PartialEq)]
pub enum ParagraphStyleRef {
    /// An already resolved style.
    Id(ParagraphStyleId),
    /// A style name, matched exactly against the document collection.
    Name(String),
}

impl From<ParagraphStyleId> for ParagraphStyleRef {
    fn from(id: ParagraphStyleId) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ParagraphStyleRef {
    fn from(name: &str) -> Self {
        Self::Name(name.into())
    }
}

impl From<String> for ParagraphStyleRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl ScriptContext<'_> {
    /// Resolves a character style by exact name, creating it if absent.
    ///
    /// Resolution is idempotent: the same name always yields the same id.
    pub fn resolve_character_style(&mut self, name: &str) -> CharacterStyleId {
        match self.doc.find_character_style(name) {
            Some(id) => id,
            None => self.doc.create_character_style(name),
        }
    }

    /// Resolves a character style by name and assigns `properties` onto it,
    /// in set order.
    ///
    /// A property the document rejects surfaces as a hard
    /// [`HostRejection`](crate::ErrorKind::HostRejection) error.
    pub fn resolve_character_style_with(
        &mut self,
        name: &str,
        properties: &AttributeSet,
    ) -> Result<CharacterStyleId, Error> {
        let id = self.resolve_character_style(name);
        for attribute in properties.iter() {
            self.doc
                .set_character_style_property(id, attribute.clone())
                .map_err(Error::host)?;
        }
        Ok(id)
    }

    /// Applies a character style to every character of the target's
    /// paragraphs.
    ///
    /// By-name application requires the style to already exist. Returns the
    /// paragraphs the style was applied to.
    pub fn apply_character_style(
        &mut self,
        target: &TextTarget,
        style: impl Into<CharacterStyleRef>,
    ) -> Result<Vec<ParagraphRef>, Error> {
        let id = match style.into() {
            CharacterStyleRef::Id(id) => {
                if self.doc.character_style(id).is_none() {
                    return Err(Error::invalid_argument(
                        "character style is no longer live",
                    ));
                }
                id
            }
            CharacterStyleRef::Name(name) => self
                .doc
                .find_character_style(&name)
                .ok_or_else(|| Error::style_not_found(&name))?,
        };
        let refs = self.resolve_target(target)?;
        for paragraph in refs.iter().rev() {
            match self.doc.apply_character_style_run(*paragraph, id) {
                Ok(()) => {}
                Err(err) if err.kind() == HostErrorKind::Stale => {
                    self.warn(Warning::StaleTarget);
                }
                Err(err) => return Err(Error::host(err)),
            }
        }
        Ok(refs)
    }

    /// Resolves a paragraph style by exact name, creating it if absent.
    pub fn resolve_paragraph_style(&mut self, name: &str) -> ParagraphStyleId {
        match self.doc.find_paragraph_style(name) {
            Some(id) => id,
            None => self.doc.create_paragraph_style(name),
        }
    }

    /// Resolves a paragraph style by name and assigns `properties` onto it,
    /// in set order.
    pub fn resolve_paragraph_style_with(
        &mut self,
        name: &str,
        properties: &AttributeSet,
    ) -> Result<ParagraphStyleId, Error> {
        let id = self.resolve_paragraph_style(name);
        for attribute in properties.iter() {
            self.doc
                .set_paragraph_style_property(id, attribute.clone())
                .map_err(Error::host)?;
        }
        Ok(id)
    }

    /// Applies a paragraph style to every paragraph of the target.
    ///
    /// By-name application requires the style to already exist. Returns the
    /// paragraphs the style was applied to.
    pub fn apply_paragraph_style(
        &mut self,
        target: &TextTarget,
        style: impl Into<ParagraphStyleRef>,
    ) -> Result<Vec<ParagraphRef>, Error> {
        let id = match style.into() {
            ParagraphStyleRef::Id(id) => {
                if self.doc.paragraph_style(id).is_none() {
                    return Err(Error::invalid_argument(
                        "paragraph style is no longer live",
                    ));
                }
                id
            }
            ParagraphStyleRef::Name(name) => self
                .doc
                .find_paragraph_style(&name)
                .ok_or_else(|| Error::style_not_found(&name))?,
        };
        let refs = self.resolve_target(target)?;
        for paragraph in refs.iter().rev() {
            match self.doc.set_applied_paragraph_style(*paragraph, id) {
                Ok(()) => {}
                Err(err) if err.kind() == HostErrorKind::Stale => {
                    self.warn(Warning::StaleTarget);
                }
                Err(err) => return Err(Error::host(err)),
            }
        }
        Ok(refs)
    }
}
