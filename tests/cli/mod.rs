mod config;
mod features;
mod logging;
mod misc;
mod model;
mod predict;
pub mod support;
