//! movmp4 - QuickTime to MP4 conversion
//!
//! Validates a `.mov` path, hands it to ffmpeg with a fixed H.264/AAC
//! invocation and reports the outcome, either on the console or in a
//! small window.

pub mod cli;
pub mod config;
pub mod error;
pub mod gui;
pub mod media;
pub mod report;
pub mod request;
pub mod workflow;
