//! Dialogue signals - what the player's conversations produced.
//!
//! - **Keys**: normalized `<speaker>_<outcome>` identifiers, parsed once
//! - **Catalog**: fixed report text for every recognized key
//! - **Ledger**: the session's accepted keys, deduplicated, in arrival order

mod catalog;
mod key;
mod ledger;

pub use catalog::*;
pub use key::*;
pub use ledger::*;
