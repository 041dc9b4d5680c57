pub mod manifest;
pub mod png;
