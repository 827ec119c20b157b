//! Rendering module
//!
//! The core never draws. Each tick it hands out a `RenderSnapshot` (grid
//! asset keys plus instruction and status text); `text` turns a snapshot
//! into a terminal frame.

pub mod snapshot;
pub mod text;

pub use snapshot::{RenderSnapshot, asset_key, instruction_text};
pub use text::render_text;
