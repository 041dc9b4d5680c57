//! Core processing building blocks: parameters, resize/crop geometry, the
//! Lanczos resizer and the logo/mark pipelines. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
