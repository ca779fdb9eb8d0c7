//! Game mechanics: the fear gauge and the NPC roster.

mod fear;
mod roster;

pub use fear::*;
pub use roster::*;
