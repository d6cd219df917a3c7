//! Testing helpers: a recording backend and HTML snapshot rendering.
//!
//! Use the [`Recorder`] to assert the exact sequence of backend calls a
//! template produces. Use [`render_to_string`] to capture built output as
//! HTML for snapshot-style assertions.

pub mod recorder;
pub mod snapshot;

pub use recorder::{Call, Recorder, RecorderError};
pub use snapshot::{render_str_to_string, render_to_string};
