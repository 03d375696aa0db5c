//! UI Components for the PolydisVae application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadForm`] - the generation form (two MIDI inputs + submit)
//! - [`AudioFilePicker`] - standalone audio picker with type warning

mod audio_picker;
mod footer;
mod form;
mod header;
mod hero;

pub use audio_picker::*;
pub use footer::*;
pub use form::*;
pub use header::*;
pub use hero::*;
