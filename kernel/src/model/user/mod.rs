use crate::model::{id::UserId, role::Role};

pub mod event;

/// Profile of an agent; the principal behind every authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub avatar_url: Option<String>,
}
