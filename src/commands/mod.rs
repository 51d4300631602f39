//! CLI commands for perfindex

pub mod dispatch;
pub mod features;
pub mod input;
pub mod model;
pub mod predict;
pub mod validate;
