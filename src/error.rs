//! Unified error type for sirengen.

use thiserror::Error;

/// Errors that can occur while building or rendering a poster.
#[derive(Debug, Error)]
pub enum PosterError {
    /// A member record failed validation and was not stored.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The renderer was invoked with no members.
    #[error("No family members to render. Add at least one member first.")]
    EmptyInput,

    /// Rendering failed and no fallback path was possible.
    #[error("Rendering error: {0}")]
    Render(String),

    /// A roster file could not be read or parsed.
    #[error("Roster error: {0}")]
    Roster(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a family member record is rejected at insertion time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name field was empty or whitespace.
    #[error("Name is required")]
    NameRequired,

    /// The first-siren year predates the birth year.
    #[error("First siren year {siren_year} cannot be before birth year {birth_year}")]
    SirenBeforeBirth {
        /// Year of birth.
        birth_year: i32,
        /// Year of first siren.
        siren_year: i32,
    },

    /// A year field is outside the accepted range.
    #[error("{field} {year} is out of range (1900..={max})")]
    YearOutOfRange {
        /// Which field was rejected ("Birth year" or "First siren year").
        field: &'static str,
        /// The rejected value.
        year: i32,
        /// Upper bound (the current year).
        max: i32,
    },
}
