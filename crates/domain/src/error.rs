// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised at the parsing boundary of the domain types.
///
/// The filter and grid operations themselves are total; these only occur
/// when turning untyped input (flags, config files, query strings) into
/// domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The name does not match any filter field.
    UnknownFilterKey(String),
    /// A page size was zero, negative, or not a number.
    InvalidPageSize(String),
    /// A column value kind was not one of `numeric`, `text`, `date`.
    InvalidValueKind(String),
    /// Failed to parse an ISO date.
    InvalidDate {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A record field held a value that cannot be represented as a cell.
    UnsupportedCellValue {
        /// The field name.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFilterKey(key) => write!(f, "Unknown filter key: '{key}'"),
            Self::InvalidPageSize(value) => {
                write!(
                    f,
                    "Invalid page size: '{value}'. Must be a positive integer or 'all'"
                )
            }
            Self::InvalidValueKind(value) => {
                write!(
                    f,
                    "Invalid value kind: '{value}'. Must be one of numeric, text, date"
                )
            }
            Self::InvalidDate { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::UnsupportedCellValue { field, reason } => {
                write!(f, "Unsupported value in field '{field}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
