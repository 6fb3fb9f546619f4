//! Form rendering module
//!
//! This module contains UI components for rendering the token forms:
//! - `field_renderer`: Field rendering utilities
//! - `error_message`: Per-field rejection line
//! - `preview`: Read-only view of the current values
//! - `token_form`: One complete form pane

mod error_message;
mod field_renderer;
mod preview;
mod token_form;

pub use token_form::draw as draw_token_form;
