use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор уведомления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub Uuid);

impl NotificationId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

// ============================================================================
// Kind
// ============================================================================

/// Вид уведомления.
///
/// `Action` требует действия от получателя (например, отправить проданный
/// товар), `Info` только сообщает о событии (товар отправлен).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Action,
    Info,
}

impl NotificationKind {
    pub fn from_is_action(is_action: bool) -> Self {
        if is_action {
            Self::Action
        } else {
            Self::Info
        }
    }

    /// Value of the `isAction` query parameter selecting this kind.
    pub fn query_value(&self) -> &'static str {
        match self {
            Self::Action => "true",
            Self::Info => "false",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Уведомление пользователя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub product_name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new_for_insert(
        kind: NotificationKind,
        product_name: String,
        message: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::new_v4(),
            kind,
            product_name,
            message,
            created_at,
        }
    }

    pub fn from_dto(dto: &NotificationDto, created_at: DateTime<Utc>) -> Self {
        Self::new_for_insert(
            NotificationKind::from_is_action(dto.is_action),
            dto.product_name.trim().to_string(),
            dto.message.trim().to_string(),
            created_at,
        )
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Данные для создания уведомления
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub is_action: bool,
    pub product_name: String,
    pub message: String,
}

impl NotificationDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.product_name.trim().is_empty() {
            return Err("Название товара не может быть пустым".into());
        }
        if self.message.trim().is_empty() {
            return Err("Текст уведомления не может быть пустым".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_is_action() {
        assert_eq!(NotificationKind::from_is_action(true), NotificationKind::Action);
        assert_eq!(NotificationKind::from_is_action(false), NotificationKind::Info);
        assert_eq!(NotificationKind::Action.query_value(), "true");
        assert_eq!(NotificationKind::Info.query_value(), "false");
    }

    #[test]
    fn test_dto_validation() {
        let dto = NotificationDto {
            is_action: true,
            product_name: "  ".into(),
            message: "発送してください".into(),
        };
        assert!(dto.validate().is_err());

        let dto = NotificationDto {
            is_action: true,
            product_name: "ノートPC".into(),
            message: "\n".into(),
        };
        assert!(dto.validate().is_err());

        let dto = NotificationDto {
            is_action: false,
            product_name: "ノートPC".into(),
            message: "発送されました".into(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_dto_json_shape() {
        let dto: NotificationDto = serde_json::from_str(
            r#"{"isAction":true,"productName":" Camera ","message":"Ship it"}"#,
        )
        .unwrap();
        let notification = Notification::from_dto(&dto, Utc::now());
        assert_eq!(notification.kind, NotificationKind::Action);
        assert_eq!(notification.product_name, "Camera");

        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json["kind"], "action");
        assert_eq!(json["productName"], "Camera");
        assert!(json.get("createdAt").is_some());
    }
}
