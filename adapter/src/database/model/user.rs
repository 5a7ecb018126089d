use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub avatar_url: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            email,
            full_name,
            role,
            avatar_url,
        } = value;
        Ok(User {
            user_id,
            email,
            full_name,
            role: Role::from_str(role.as_str())
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
            avatar_url,
        })
    }
}
