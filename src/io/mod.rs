//! I/O layer: decoding source images and writing the generated assets.
//! Provides the `reader` (existence checks + RGBA8 decode) and `writers`
//! for optimized PNG outputs and the JSON manifest sidecar.
pub mod reader;
pub use reader::{ensure_source_exists, load_rgba};

pub mod writers;
