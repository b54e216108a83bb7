use bevy::math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use loot_data::{CreatureType, ItemId};

use crate::messages::{LootId, PlayerId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureDeath {
    pub creature_type: CreatureType,
    pub position: Vec3,
    #[serde(default)]
    pub killer_id: Option<PlayerId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualDropRequest {
    pub player_id: PlayerId,
    pub item_id: ItemId,
    pub quantity: u32,
    pub position: Vec3,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupRequest {
    pub player_id: PlayerId,
    pub drop_id: LootId,
    pub player_position: Vec3,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyLootQuery {
    pub player_id: PlayerId,
    pub position: Vec3,
    pub radius: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ClientMessage {
    CreatureDeath(CreatureDeath),
    ManualDropRequest(ManualDropRequest),
    PickupRequest(PickupRequest),
    NearbyLootQuery(NearbyLootQuery),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientMessageError {
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("position must be finite")]
    InvalidPosition,

    #[error("radius must be finite and not negative")]
    InvalidRadius,
}

fn check_position(position: Vec3) -> Result<(), ClientMessageError> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(ClientMessageError::InvalidPosition)
    }
}

impl ClientMessage {
    pub fn validate(&self) -> Result<(), ClientMessageError> {
        match self {
            ClientMessage::CreatureDeath(message) => check_position(message.position),
            ClientMessage::ManualDropRequest(message) => {
                if message.quantity == 0 {
                    return Err(ClientMessageError::InvalidQuantity);
                }
                check_position(message.position)
            }
            ClientMessage::PickupRequest(message) => check_position(message.player_position),
            ClientMessage::NearbyLootQuery(message) => {
                if !message.radius.is_finite() || message.radius < 0.0 {
                    return Err(ClientMessageError::InvalidRadius);
                }
                check_position(message.position)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_creature_death() {
        let message: ClientMessage = serde_json::from_str(
            r#"{ "event": "creatureDeath", "creatureType": "goblin", "position": [10.0, 0.0, 10.0], "killerId": 7 }"#,
        )
        .unwrap();

        assert_eq!(
            message,
            ClientMessage::CreatureDeath(CreatureDeath {
                creature_type: CreatureType::from("goblin"),
                position: Vec3::new(10.0, 0.0, 10.0),
                killer_id: Some(PlayerId::new(7)),
            })
        );
        assert!(message.validate().is_ok());
    }

    #[test]
    fn killer_is_optional() {
        let message: ClientMessage = serde_json::from_str(
            r#"{ "event": "creatureDeath", "creatureType": "bat", "position": [0, 0, 0] }"#,
        )
        .unwrap();

        assert!(matches!(
            message,
            ClientMessage::CreatureDeath(CreatureDeath {
                killer_id: None,
                ..
            })
        ));
    }

    #[test]
    fn decodes_pickup_request() {
        let message: ClientMessage = serde_json::from_str(
            r#"{ "event": "pickupRequest", "playerId": 3, "dropId": 42, "playerPosition": [1, 2, 3] }"#,
        )
        .unwrap();

        assert_eq!(
            message,
            ClientMessage::PickupRequest(PickupRequest {
                player_id: PlayerId::new(3),
                drop_id: LootId::new(42),
                player_position: Vec3::new(1.0, 2.0, 3.0),
            })
        );
    }

    #[test]
    fn rejects_unknown_event() {
        let result = serde_json::from_str::<ClientMessage>(r#"{ "event": "teleport", "x": 1 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_zero_quantity() {
        let message = ClientMessage::ManualDropRequest(ManualDropRequest {
            player_id: PlayerId::new(1),
            item_id: ItemId::from("coins"),
            quantity: 0,
            position: Vec3::ZERO,
        });

        assert_eq!(message.validate(), Err(ClientMessageError::InvalidQuantity));
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let message = ClientMessage::PickupRequest(PickupRequest {
            player_id: PlayerId::new(1),
            drop_id: LootId::new(1),
            player_position: Vec3::new(f32::NAN, 0.0, 0.0),
        });
        assert_eq!(message.validate(), Err(ClientMessageError::InvalidPosition));

        let message = ClientMessage::NearbyLootQuery(NearbyLootQuery {
            player_id: PlayerId::new(1),
            position: Vec3::ZERO,
            radius: -1.0,
        });
        assert_eq!(message.validate(), Err(ClientMessageError::InvalidRadius));
    }
}
