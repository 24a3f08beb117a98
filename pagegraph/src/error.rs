// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error raised when a document operation cannot be performed.
///
/// Carries a non-exhaustive [`HostErrorKind`] plus a short static detail
/// string describing the rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostError {
    kind: HostErrorKind,
    detail: &'static str,
}

impl HostError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> HostErrorKind {
        self.kind
    }

    /// A short description of the rejected operation.
    pub fn detail(&self) -> &'static str {
        self.detail
    }

    pub(crate) fn stale(detail: &'static str) -> Self {
        Self {
            kind: HostErrorKind::Stale,
            detail,
        }
    }

    pub(crate) fn invalid_value(detail: &'static str) -> Self {
        Self {
            kind: HostErrorKind::InvalidValue,
            detail,
        }
    }

    pub(crate) fn wrong_item_kind(detail: &'static str) -> Self {
        Self {
            kind: HostErrorKind::WrongItemKind,
            detail,
        }
    }
}

impl core::fmt::Display for HostError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            HostErrorKind::Stale => write!(f, "stale reference: {}", self.detail),
            HostErrorKind::InvalidValue => write!(f, "invalid value: {}", self.detail),
            HostErrorKind::WrongItemKind => write!(f, "wrong item kind: {}", self.detail),
        }
    }
}

impl core::error::Error for HostError {}

/// The non-exhaustive category of a [`HostError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum HostErrorKind {
    /// The referenced object no longer exists, or the referenced paragraph
    /// has been recomposed since the reference was issued.
    Stale,

    /// A property value was rejected (non-positive size, non-finite number).
    InvalidValue,

    /// The operation is not defined for this kind of page item.
    WrongItemKind,
}
