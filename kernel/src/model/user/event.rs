use derive_new::new;

use crate::model::id::UserId;

#[derive(Debug, new)]
pub struct CreateUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, new)]
pub struct UpdateProfile {
    pub user_id: UserId,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, new)]
pub struct UpdateUserPassword {
    pub user_id: UserId,
    pub current_password: String,
    pub new_password: String,
}
