//! Record-to-Markdown rendering.
//!
//! A render is a pure function of the input lines and [`RenderOptions`]:
//!
//! - **Header scan**: first timestamp becomes the session date, first `cwd` gives the
//!   display name
//! - **Turn pass**: each user/assistant record is built into an isolated turn buffer
//!   and committed only if it has something to show under the mode
//! - **Footer**: turn counts, plus a filtering note in clean mode
//!
//! Turns are separated by [`TURN_SEPARATOR`]; the search module relies on it.
//!
//! [`RenderOptions`]: crate::models::RenderOptions

pub mod blocks;
pub mod renderer;
pub mod timestamps;

pub use renderer::{
    CLEAN_MODE_NOTE, DEFAULT_DISPLAY_NAME, TURN_SEPARATOR, render, render_log, render_with,
};
