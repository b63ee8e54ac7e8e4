//! URL layout of the data host and the name lookup service.

use crate::models::PlayerId;

pub const DEFAULT_DATA_BASE: &str = "http://127.0.0.1:5000";
pub const DEFAULT_NAME_BASE: &str = "https://api.ashcon.app/mojang/v2/user";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Endpoints {
    data_base: String,
    name_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_BASE, DEFAULT_NAME_BASE)
    }
}

impl Endpoints {
    pub fn new(data_base: impl Into<String>, name_base: impl Into<String>) -> Self {
        Self {
            data_base: data_base.into().trim_end_matches('/').to_string(),
            name_base: name_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Listing of every identifier the data host has a stat file for.
    pub fn discovery_url(&self) -> String {
        format!("{}/get-uuids", self.data_base)
    }

    /// Stat file, sharded by the first two characters of the identifier.
    pub fn player_url(&self, id: &PlayerId) -> String {
        format!(
            "{}/world/cobblemonplayerdata/{}/{}.json",
            self.data_base,
            id.shard_prefix(),
            id
        )
    }

    pub fn name_url(&self, id: &PlayerId) -> String {
        format!("{}/{}", self.name_base, id)
    }
}
