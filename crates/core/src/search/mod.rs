//! Search strings for locating kept captures in the game inventory.
//!
//! Each string reads `{species}&cp{n1},cp{n2},...`. Everything after the `&`
//! stays within a character limit; tags that do not fit start a new string.

mod packer;

pub use packer::{pack_search_strings, DEFAULT_CHAR_LIMIT};
