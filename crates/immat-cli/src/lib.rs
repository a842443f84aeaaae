//! CLI library components for the `immat` plate checker.

pub mod batch;
pub mod logging;
pub mod render;
pub mod report;
