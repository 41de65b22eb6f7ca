//! Notification domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::user::UserId;

/// Unique identifier for a Notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Creates a new random NotificationId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a NotificationId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for NotificationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A message sent to a user. Not coupled to the payment lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    /// Unique identifier
    pub id: NotificationId,
    /// Notification category, e.g. `PAGO_APROBADO`
    #[serde(rename = "type")]
    pub kind: String,
    /// Message body
    pub message: String,
    /// When the notification was sent
    pub sent_at: DateTime<Utc>,
    /// User the notification was addressed to
    pub recipient_user_id: UserId,
}

impl Notification {
    /// Creates a new notification stamped with the current time.
    pub fn new(
        kind: impl Into<String>,
        message: impl Into<String>,
        recipient_user_id: UserId,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind: kind.into(),
            message: message.into(),
            sent_at: Utc::now(),
            recipient_user_id,
        }
    }

    /// Reconstructs a notification from database fields.
    pub fn from_parts(
        id: NotificationId,
        kind: String,
        message: String,
        sent_at: DateTime<Utc>,
        recipient_user_id: UserId,
    ) -> Self {
        Self {
            id,
            kind,
            message,
            sent_at,
            recipient_user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_type() {
        let n = Notification::new("PAGO_APROBADO", "pago aprobado", UserId::new());
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["type"], "PAGO_APROBADO");
        assert!(json.get("kind").is_none());
    }
}
