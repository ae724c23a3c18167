use serde::{Deserialize, Serialize};

use crate::domain::events::GameEvent;
use crate::state::player::{Facing, Player};

// Websocket frame DTOs

/// One inbound frame: `{"type": ..., "data": {...}}`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InboundMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: PlayerData,
}

/// Player-shaped payload; each event kind reads only what it needs
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerData {
    pub x: i32,
    pub y: i32,
    pub name: String,
    pub health: i32,
    pub stamina: i32,
    pub facing: Option<Facing>,
    pub is_attacking: bool,
    pub is_walking: bool,
    pub is_dodging: bool,
    pub skin: String,
}

impl From<PlayerData> for Player {
    fn from(data: PlayerData) -> Self {
        let mut player = Player::new(data.name, data.x, data.y)
            .with_health(data.health)
            .with_stamina(data.stamina)
            .with_facing(data.facing.unwrap_or_default());
        player.skin = data.skin;
        player.is_attacking = data.is_attacking;
        player.is_walking = data.is_walking;
        player.is_dodging = data.is_dodging;
        player
    }
}

impl InboundMessage {
    /// Narrow the frame to its event. Unknown kinds, and walks without
    /// a direction, yield `None`.
    pub fn into_event(self) -> Option<GameEvent> {
        let data = self.data;
        match self.kind.as_str() {
            "refresh" => Some(GameEvent::Refresh),
            "attack" => Some(GameEvent::Attack { name: data.name }),
            "dodge" => Some(GameEvent::Dodge { name: data.name }),
            "leave" => Some(GameEvent::Leave { name: data.name }),
            "join" => Some(GameEvent::Join(data.into())),
            "walk" => match data.facing {
                Some(facing) => Some(GameEvent::Walk { name: data.name, facing }),
                None => {
                    log::debug!("walk from {} without facing ignored", data.name);
                    None
                }
            },
            other => {
                log::debug!("Unknown event type: {}", other);
                None
            }
        }
    }
}

pub fn decode_frame(text: &str) -> Result<InboundMessage, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_walk_frame() {
        let frame = r#"{"type":"walk","data":{"name":"p1","facing":"up","x":999,"health":1}}"#;
        let event = decode_frame(frame).unwrap().into_event();
        assert_eq!(
            event,
            Some(GameEvent::Walk { name: "p1".to_string(), facing: Facing::Up })
        );
    }

    #[test]
    fn test_parse_join_frame() {
        let frame = serde_json::json!({
            "type": "join",
            "data": {
                "x": 10, "y": 20, "name": "p1", "health": 100, "stamina": 100,
                "facing": "right", "isAttacking": false, "isWalking": false,
                "isDodging": false, "skin": "skin1"
            }
        })
        .to_string();

        let Some(GameEvent::Join(player)) = decode_frame(&frame).unwrap().into_event() else {
            panic!("Expected Join event");
        };
        assert_eq!(player.name, "p1");
        assert_eq!((player.x, player.y), (10, 20));
        assert_eq!(player.facing, Facing::Right);
        assert_eq!(player.skin, "skin1");
        assert_eq!(player.last_attack, None);
    }

    #[test]
    fn test_parse_refresh_without_data() {
        let event = decode_frame(r#"{"type":"refresh"}"#).unwrap().into_event();
        assert_eq!(event, Some(GameEvent::Refresh));
    }

    #[test]
    fn test_unknown_kind_is_ignored() {
        let event = decode_frame(r#"{"type":"teleport","data":{"name":"p1"}}"#)
            .unwrap()
            .into_event();
        assert!(event.is_none());
    }

    #[test]
    fn test_walk_without_facing_is_ignored() {
        let event = decode_frame(r#"{"type":"walk","data":{"name":"p1"}}"#)
            .unwrap()
            .into_event();
        assert!(event.is_none());
    }

    #[test]
    fn test_bad_facing_fails_decode() {
        assert!(decode_frame(r#"{"type":"walk","data":{"name":"p1","facing":"north"}}"#).is_err());
        assert!(decode_frame("not json").is_err());
    }
}
