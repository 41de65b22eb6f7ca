//! User service.

use std::sync::Arc;

use pagos_types::{AppError, User, UserId, UserStore};

/// Plain CRUD over users. Deleting a user does not cascade to payments.
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates the service with an explicit store handle.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, AppError> {
        self.users.find_by_id(id).await.map_err(Into::into)
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.users.find_all().await.map_err(Into::into)
    }

    pub async fn save(&self, user: User) -> Result<User, AppError> {
        self.users.save(user).await.map_err(Into::into)
    }

    pub async fn delete_by_id(&self, id: UserId) -> Result<(), AppError> {
        self.users.delete_by_id(id).await.map_err(Into::into)
    }
}
