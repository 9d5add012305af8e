//! Wolt Report - Heartbeat over the wolt network
//!
//! Orchestrates the read side of the protocol into a single best-effort
//! plain-text report: probes the watched sites, pulls the trailing window of
//! relay messages, verifies them with bounded concurrency, and renders three
//! sections (site health, network digest, and a placeholder for the issue
//! feed the calling workflow merges in). Partial failure degrades the
//! affected section; [`ReportPipeline::build_report`] itself never fails.

#![forbid(unsafe_code)]

/// Site liveness probes
pub mod health;

/// Report orchestration
pub mod pipeline;

/// Plain-text rendering
pub mod render;

pub use health::SiteStatus;
pub use pipeline::ReportPipeline;
pub use render::MessageDigest;
