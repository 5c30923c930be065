//! Modelo de User
//!
//! Riders y drivers comparten la tabla `users`; el rol lo fija `user_type`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;

/// Tipo de usuario - mapea al CHECK de `users.user_type`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Rider,
    Driver,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Rider => "rider",
            UserType::Driver => "driver",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User principal - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_driver(&self) -> bool {
        self.user_type == UserType::Driver
    }

    pub fn is_rider(&self) -> bool {
        self.user_type == UserType::Rider
    }
}
