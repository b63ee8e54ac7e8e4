//! Wire shapes returned by the data host and the name lookup service.

use crate::models::player::PlayerStats;
use serde::Deserialize;

/// One player's stat file. Only the fields the scoreboard reads are modeled.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerData {
    pub advancement_data: AdvancementData,
    #[serde(default)]
    pub extra_data: Option<ExtraData>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancementData {
    #[serde(default)]
    pub total_capture_count: Option<u32>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraData {
    #[serde(default)]
    pub cobblenav_contact_data: Option<ContactData>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ContactData {
    #[serde(default)]
    pub contacts: Option<Vec<Contact>>,
}

/// Win/loss counters attached to a player.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub winnings: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
}

impl PlayerData {
    /// First contact entry, if the payload carries any.
    pub fn first_contact(&self) -> Option<&Contact> {
        self.extra_data
            .as_ref()?
            .cobblenav_contact_data
            .as_ref()?
            .contacts
            .as_ref()?
            .first()
    }

    /// Counters the scoreboard tracks. Absent fields count as zero.
    pub fn stats(&self) -> PlayerStats {
        let contact = self.first_contact();
        PlayerStats {
            capture_count: self.advancement_data.total_capture_count.unwrap_or(0),
            winnings: contact.and_then(|c| c.winnings).unwrap_or(0),
            losses: contact.and_then(|c| c.losses).unwrap_or(0),
        }
    }
}

/// Response of the name lookup service.
#[derive(Clone, Debug, Deserialize)]
pub struct UsernameLookup {
    #[serde(default)]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_payload_reads_first_contact() {
        let data: PlayerData = serde_json::from_value(json!({
            "advancementData": { "totalCaptureCount": 42, "totalShinyCaptureCount": 1 },
            "extraData": { "cobblenavContactData": { "contacts": [
                { "winnings": 5, "losses": 3 },
                { "winnings": 99, "losses": 99 }
            ] } }
        }))
        .unwrap();
        assert_eq!(
            data.stats(),
            PlayerStats {
                capture_count: 42,
                winnings: 5,
                losses: 3
            }
        );
    }

    #[test]
    fn missing_contacts_default_to_zero() {
        let data: PlayerData = serde_json::from_value(json!({
            "advancementData": { "totalCaptureCount": 4 },
            "extraData": { "cobblenavContactData": { "contacts": [] } }
        }))
        .unwrap();
        assert_eq!(data.stats().winnings, 0);
        assert_eq!(data.stats().losses, 0);

        let bare: PlayerData =
            serde_json::from_value(json!({ "advancementData": {} })).unwrap();
        assert_eq!(bare.stats(), PlayerStats::default());
    }

    #[test]
    fn missing_advancement_data_is_rejected() {
        let res = serde_json::from_value::<PlayerData>(json!({ "extraData": {} }));
        assert!(res.is_err());
    }
}
