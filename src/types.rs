//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Form Types** - the generation form state
//! - **Submission Types** - submit lifecycle tracking
//! - **Error Types** - frontend error handling

use std::fmt;

use web_sys::File;

// =============================================================================
// Form Types
// =============================================================================

/// State of the generation form.
///
/// Both fields start empty and are filled by the file inputs. The struct is
/// read once at submit time and never persisted.
///
/// Generic over the file handle type so the validation logic can be
/// exercised off-wasm; application code always uses [`web_sys::File`].
#[derive(Clone, Debug)]
pub struct FormValues<F = File> {
    /// MIDI file supplying pitch and chord content.
    pub pitch_file: Option<F>,
    /// MIDI file supplying the rhythm.
    pub rhythm_file: Option<F>,
}

impl<F> Default for FormValues<F> {
    fn default() -> Self {
        Self {
            pitch_file: None,
            rhythm_file: None,
        }
    }
}

/// Per-field validation messages for the generation form.
///
/// Produced by [`crate::validation::validate`]; a `None` entry means the
/// field is valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub pitch_file: Option<&'static str>,
    pub rhythm_file: Option<&'static str>,
}

impl FieldErrors {
    /// True when no field is in error, i.e. submission may proceed.
    pub fn is_empty(&self) -> bool {
        self.pitch_file.is_none() && self.rhythm_file.is_none()
    }
}

// =============================================================================
// Submission Types
// =============================================================================

/// Lifecycle of a form submission.
///
/// An explicit tri-state rather than a boolean: the submit handler reads it
/// to drop re-entrant submits while a request is in flight, and the button
/// is disabled for as long as it reports [`SubmitStatus::is_submitting`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    /// No submission attempted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Submitting,
    /// The last request finished, successfully or not.
    Done,
}

impl SubmitStatus {
    /// True while a request is in flight.
    pub fn is_submitting(self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for the generation request. Every variant is handled
/// the same way by the caller (logged to the console); the variants exist so
/// the log line says what actually went wrong.
#[derive(Clone, Debug)]
pub enum AppError {
    /// The request could not be built or sent.
    Request(String),
    /// The server answered with a non-success status.
    Server { status: u16, body: String },
    /// The response body could not be read.
    Response(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Request(msg) => write!(f, "Request error: {}", msg),
            AppError::Server { status, body } => {
                write!(f, "Server error ({}): {}", status, body)
            }
            AppError::Response(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_status_flags() {
        assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
        assert!(!SubmitStatus::Idle.is_submitting());
        assert!(SubmitStatus::Submitting.is_submitting());
        assert!(!SubmitStatus::Done.is_submitting());
    }

    #[test]
    fn test_field_errors_empty() {
        assert!(FieldErrors::default().is_empty());

        let errors = FieldErrors {
            pitch_file: Some("required"),
            rhythm_file: None,
        };
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Server {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (502): bad gateway");

        let err = AppError::Request("connection refused".to_string());
        assert_eq!(err.to_string(), "Request error: connection refused");
    }
}
