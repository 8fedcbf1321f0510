#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod cli;
pub mod composer;
pub mod config;
pub mod error;
#[doc(hidden)]
pub mod persona;
pub mod prompt;
pub mod providers;
pub mod ui;
pub mod utils;

pub use composer::{GenerationRequest, GenerationSettings, PoemComposer, PoemState, StyleRule};
pub use config::Config;
pub use error::{Result, VerseError};
