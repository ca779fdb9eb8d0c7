//! # Audit Narrative
//!
//! The narrative side of Call of Audit. It ingests the signals emitted by
//! dialogue timelines, keeps the session's fear gauge and NPC roster through
//! `audit_rules`, and renders the end-of-session interaction report.
//!
//! ## Core Components
//!
//! - **signals**: Signal keys, the catalog of report texts and the session ledger
//! - **report**: Classification and rendering of the end-of-session report
//! - **engine**: The session coordinator that owns all narrative state
//!
//! Every runtime operation is total. Failure only exists while loading
//! configuration; gameplay calls report what happened through outcome enums.

pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod signals;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use report::*;
pub use signals::*;
