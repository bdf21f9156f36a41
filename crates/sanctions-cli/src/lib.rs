//! Library side of the sanctions list CLI: logging setup and the staged pipeline.

pub mod logging;
pub mod pipeline;
