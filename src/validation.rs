//! Client-side form validation.
//!
//! Pure functions, called by the components before any side effect.

use crate::config::SUPPORTED_AUDIO_TYPES;
use crate::types::{FieldErrors, FormValues};

/// Message shown under the pitch input when it is empty at submit time.
pub const PITCH_FILE_REQUIRED: &str = "A pitch reference file is required.";

/// Message shown under the rhythm input when it is empty at submit time.
pub const RHYTHM_FILE_REQUIRED: &str = "A rhythm reference file is required.";

/// Validate the generation form.
///
/// Each field is in error iff it is empty. A non-empty result blocks
/// submission; the caller must not issue the network call.
pub fn validate<F>(values: &FormValues<F>) -> FieldErrors {
    FieldErrors {
        pitch_file: values.pitch_file.is_none().then_some(PITCH_FILE_REQUIRED),
        rhythm_file: values.rhythm_file.is_none().then_some(RHYTHM_FILE_REQUIRED),
    }
}

/// Whether a MIME type is accepted by the standalone audio picker.
pub fn is_supported_audio_type(mime: &str) -> bool {
    SUPPORTED_AUDIO_TYPES.contains(&mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_form() {
        let values = FormValues::<()>::default();
        let errors = validate(&values);

        assert!(!errors.is_empty());
        assert_eq!(errors.pitch_file, Some(PITCH_FILE_REQUIRED));
        assert_eq!(errors.rhythm_file, Some(RHYTHM_FILE_REQUIRED));
    }

    #[test]
    fn test_validate_partial_form() {
        let values = FormValues {
            pitch_file: Some(()),
            rhythm_file: None,
        };
        let errors = validate(&values);

        assert!(!errors.is_empty());
        assert_eq!(errors.pitch_file, None);
        assert_eq!(errors.rhythm_file, Some(RHYTHM_FILE_REQUIRED));
    }

    #[test]
    fn test_validate_complete_form() {
        let values = FormValues {
            pitch_file: Some(()),
            rhythm_file: Some(()),
        };

        assert!(validate(&values).is_empty());
    }

    #[test]
    fn test_supported_audio_types() {
        assert!(is_supported_audio_type("audio/mpeg"));
        assert!(is_supported_audio_type("video/mp4"));
        assert!(is_supported_audio_type("audio/wav"));
    }

    #[test]
    fn test_unsupported_audio_types() {
        assert!(!is_supported_audio_type("audio/midi"));
        assert!(!is_supported_audio_type("text/plain"));
        assert!(!is_supported_audio_type("audio/mpeg3"));
        assert!(!is_supported_audio_type(""));
    }
}
