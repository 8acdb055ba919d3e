use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::id::ContentId;

/// Events emitted after every store mutation, consumed by SSE listeners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentEvent {
    Welcome,
    Changed(ChangeEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKind {
    Image,
    Video,
    Collection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub kind: ContentKind,
    pub action: ChangeAction,
    pub id: ContentId,
    pub timestamp: DateTime<Utc>,
}

impl ChangeEvent {
    pub fn now(kind: ContentKind, action: ChangeAction, id: ContentId) -> Self {
        Self {
            kind,
            action,
            id,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn change_event_wire_shape() {
        let event = ContentEvent::Changed(ChangeEvent::now(
            ContentKind::Video,
            ChangeAction::Deleted,
            "v1".into(),
        ));
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], json!("changed"));
        assert_eq!(value["kind"], json!("video"));
        assert_eq!(value["action"], json!("deleted"));
        assert_eq!(value["id"], json!("v1"));

        let welcome = serde_json::to_value(ContentEvent::Welcome).unwrap();
        assert_eq!(welcome, json!({ "type": "welcome" }));
    }
}
