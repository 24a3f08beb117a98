// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

use pagegraph::{FontSelector, HostError};

/// Error raised by facade entry points.
///
/// Carries a non-exhaustive [`ErrorKind`] plus a human-readable detail
/// string. Soft conditions never surface here; they are recorded as
/// [`Warning`]s on the session context instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    detail: String,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// A description of what was rejected.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub(crate) fn invalid_argument(detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            detail: detail.into(),
        }
    }

    pub(crate) fn style_not_found(name: &str) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            detail: name.into(),
        }
    }

    pub(crate) fn host(err: HostError) -> Self {
        Self {
            kind: ErrorKind::HostRejection,
            detail: err.to_string(),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidArgument => write!(f, "invalid argument: {}", self.detail),
            ErrorKind::NotFound => write!(f, "no style named \"{}\"", self.detail),
            ErrorKind::HostRejection => write!(f, "rejected by the document: {}", self.detail),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A malformed call: wrong value range, non-finite number, or an
    /// argument that does not denote what the operation requires.
    InvalidArgument,

    /// A named style does not exist where existence was required.
    ///
    /// Only style *application* raises this; style *resolution* creates
    /// missing styles instead.
    NotFound,

    /// The document rejected a property assignment.
    HostRejection,
}

/// A recoverable condition recorded on the session context.
///
/// Warnings are also emitted through [`log::warn!`]; the operation that
/// raised one completes with a safe no-op result rather than an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Warning {
    /// A target no longer denotes a live object; the operation resolved to
    /// nothing and was skipped.
    StaleTarget,

    /// A requested font is not installed; the previously active font was
    /// kept.
    FontNotInstalled(FontSelector),
}

impl core::fmt::Display for Warning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::StaleTarget => {
                write!(f, "target is no longer live; nothing to apply to")
            }
            Self::FontNotInstalled(font) => {
                write!(f, "font {font} is not installed; keeping the current font")
            }
        }
    }
}
