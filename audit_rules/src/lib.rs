//! # Audit Rules
//!
//! Game rules for Call of Audit: the fear gauge, the NPC roster and the
//! dialogue timeline routing. This crate holds no narrative knowledge; the
//! dialogue signals and the end-of-session report live in `audit_narrative`.

pub mod config;
pub mod entities;
pub mod error;
pub mod mechanics;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use mechanics::*;
