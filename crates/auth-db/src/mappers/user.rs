//! User model -> entity mapper

use auth_core::{User, UserId};

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::from_uuid(model.id),
            email: model.email,
            name: model.name,
            password_hash: model.password_hash,
            created_at: model.created_at,
        }
    }
}
