//! Data structures for the scoreboard: player records, remote payloads, tracker state.

mod payload;
mod player;
mod tracker;

pub use payload::{AdvancementData, Contact, ContactData, ExtraData, PlayerData, UsernameLookup};
pub use player::{PlayerId, PlayerRecord, PlayerStats};
pub use tracker::{Tracker, UNRESOLVED_NAME};
