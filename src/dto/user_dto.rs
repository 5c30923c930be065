use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{User, UserType};
use crate::utils::validation::PHONE_REGEX;

// Request para crear un usuario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(regex = "PHONE_REGEX")]
    pub phone: String,

    pub user_type: UserType,
}

// Filtros del listado
#[derive(Debug, Default, Deserialize)]
pub struct UserFilters {
    pub user_type: Option<UserType>,
}

// Response de usuario
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            user_type: user.user_type,
            created_at: user.created_at,
        }
    }
}
