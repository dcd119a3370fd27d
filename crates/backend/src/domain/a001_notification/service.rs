use super::repository::NotificationStore;
use crate::shared::config::SeedNotification;
use crate::shared::error::AppError;
use chrono::{Duration, Utc};
use contracts::domain::a001_notification::aggregate::{
    Notification, NotificationDto, NotificationKind,
};
use contracts::domain::a001_notification::query::{NotificationFilter, NotificationQuery};

/// Выборка уведомлений по параметру `isAction`
pub async fn list(
    store: &NotificationStore,
    query: &NotificationQuery,
) -> Result<(NotificationFilter, Vec<Notification>), AppError> {
    let filter = NotificationFilter::from_query(query)?;
    let notifications = store.list_by_kind(filter.kind()).await;
    tracing::debug!(
        "isAction={:?}: {} notifications",
        query.is_action,
        notifications.len()
    );
    Ok((filter, notifications))
}

/// Создание нового уведомления
pub async fn create(
    store: &NotificationStore,
    dto: NotificationDto,
) -> Result<Notification, AppError> {
    // Валидация
    dto.validate().map_err(AppError::Validation)?;

    let notification = Notification::from_dto(&dto, Utc::now());
    store.insert(notification.clone()).await;
    tracing::info!(
        "Created {:?} notification {} for {}",
        notification.kind,
        notification.id.value(),
        notification.product_name
    );
    Ok(notification)
}

/// Уведомления из конфигурации.
///
/// Entries without `created_at` get consecutive timestamps one minute apart,
/// the first entry being the newest, so config order is display order.
pub fn seed_notifications(seeds: &[SeedNotification]) -> Vec<Notification> {
    let now = Utc::now();
    seeds
        .iter()
        .enumerate()
        .map(|(index, seed)| {
            let created_at = seed
                .created_at
                .unwrap_or_else(|| now - Duration::minutes(index as i64));
            Notification::new_for_insert(
                NotificationKind::from_is_action(seed.is_action),
                seed.product_name.clone(),
                seed.message.clone(),
                created_at,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_notification::query::FilterError;

    fn seed(is_action: bool, name: &str) -> SeedNotification {
        SeedNotification {
            is_action,
            product_name: name.into(),
            message: "msg".into(),
            created_at: None,
        }
    }

    fn store() -> NotificationStore {
        NotificationStore::new(seed_notifications(&[
            seed(true, "first"),
            seed(false, "info"),
            seed(true, "third"),
        ]))
    }

    #[tokio::test]
    async fn test_list_defaults_to_action() {
        let (filter, items) = list(&store(), &NotificationQuery::default()).await.unwrap();
        assert_eq!(filter, NotificationFilter::Action);
        let names: Vec<&str> = items.iter().map(|n| n.product_name.as_str()).collect();
        assert_eq!(names, vec!["first", "third"]);
    }

    #[tokio::test]
    async fn test_list_info() {
        let (filter, items) = list(&store(), &NotificationQuery::new("false"))
            .await
            .unwrap();
        assert_eq!(filter, NotificationFilter::Info);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_name, "info");
    }

    #[tokio::test]
    async fn test_list_invalid_filter() {
        let err = list(&store(), &NotificationQuery::new("undefined"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidFilter(FilterError::InvalidValue(ref v)) if v == "undefined"
        ));
    }

    #[tokio::test]
    async fn test_create_validates_and_stores() {
        let store = NotificationStore::default();
        let err = create(
            &store,
            NotificationDto {
                is_action: true,
                product_name: "".into(),
                message: "x".into(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.count().await, 0);

        let created = create(
            &store,
            NotificationDto {
                is_action: false,
                product_name: "本".into(),
                message: "発送されました".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(created.kind, NotificationKind::Info);
        assert_eq!(store.count().await, 1);
    }
}
