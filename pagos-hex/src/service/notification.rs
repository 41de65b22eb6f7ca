//! Notification service.

use std::sync::Arc;

use pagos_types::{AppError, Notification, NotificationId, NotificationStore};

/// Plain CRUD over notifications. Not coupled to the payment lifecycle.
pub struct NotificationService {
    notifications: Arc<dyn NotificationStore>,
}

impl NotificationService {
    /// Creates the service with an explicit store handle.
    pub fn new(notifications: Arc<dyn NotificationStore>) -> Self {
        Self { notifications }
    }

    pub async fn get_by_id(&self, id: NotificationId) -> Result<Option<Notification>, AppError> {
        self.notifications.find_by_id(id).await.map_err(Into::into)
    }

    pub async fn find_all(&self) -> Result<Vec<Notification>, AppError> {
        self.notifications.find_all().await.map_err(Into::into)
    }

    pub async fn save(&self, notification: Notification) -> Result<Notification, AppError> {
        self.notifications.save(notification).await.map_err(Into::into)
    }

    pub async fn delete_by_id(&self, id: NotificationId) -> Result<(), AppError> {
        self.notifications.delete_by_id(id).await.map_err(Into::into)
    }
}
