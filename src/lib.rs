//! Token form validation and its terminal front end
//!
//! The core is [`validation`], which turns raw address and amount strings into
//! verdicts, and [`state::FormController`], which owns the two-field form state,
//! re-validates on every change and hands accepted values to a
//! [`state::SubmitSink`]. The [`app`] and [`ui`] modules drive it from a
//! Ratatui terminal UI.

pub mod app;
pub mod config;
pub mod platform;
pub mod state;
pub mod ui;
pub mod validation;
