#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Profile fields of the resume owner used as personal-info fallbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct UserProfileRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub portfolio_url: Option<String>,
    pub linkedin_url: Option<String>,
}
