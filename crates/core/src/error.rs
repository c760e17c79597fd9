// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use leadscope_domain::DomainError;

/// Errors raised while loading grid input or writing exports.
///
/// Filter and grid transitions themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input could not be turned into domain values.
    DomainViolation(DomainError),
    /// A grid config or record file was malformed.
    InvalidInput(String),
    /// Writing an export failed.
    Export(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::Export(msg) => write!(f, "Export failed: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<csv::Error> for CoreError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
