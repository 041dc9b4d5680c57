pub mod crop;
pub mod geometry;
pub mod pipeline;
pub mod resize;
