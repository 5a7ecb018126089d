use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::UserId,
        role::Role,
        user::{
            event::{CreateUser, UpdateProfile, UpdateUserPassword},
            User,
        },
    },
    repository::user::UserRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT user_id, email, full_name, role, avatar_url
                FROM profiles
                WHERE user_id = $1
            "#,
        )
        .bind(current_user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let hashed_password = hash_password(&event.password)?;
        let role = Role::Agent;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO profiles (email, full_name, role, password_hash)
                VALUES ($1, $2, $3, $4)
                RETURNING user_id, email, full_name, role, avatar_url
            "#,
        )
        .bind(&event.email)
        .bind(&event.full_name)
        .bind(role.as_ref())
        .bind(hashed_password)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| AppError::persistence("sign up", e))?;

        User::try_from(row)
    }

    async fn update_profile(&self, event: UpdateProfile) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE profiles
                SET full_name = $1, email = $2
                WHERE user_id = $3
            "#,
        )
        .bind(&event.full_name)
        .bind(&event.email)
        .bind(event.user_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| AppError::persistence("update profile", e))?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified user not found".into()));
        }

        Ok(())
    }

    async fn update_password(&self, event: UpdateUserPassword) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let original_password_hash = sqlx::query_scalar::<_, String>(
            r#"
                SELECT password_hash FROM profiles WHERE user_id = $1
                FOR UPDATE
            "#,
        )
        .bind(event.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        verify_password(&event.current_password, &original_password_hash)?;

        let new_password_hash = hash_password(&event.new_password)?;
        sqlx::query(
            r#"
                UPDATE profiles SET password_hash = $2 WHERE user_id = $1;
            "#,
        )
        .bind(event.user_id)
        .bind(new_password_hash)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::persistence("update password", e))?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}

fn hash_password(password: &str) -> AppResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(AppError::from)
}

fn verify_password(password: &str, hash: &str) -> AppResult<()> {
    let valid = bcrypt::verify(password, hash)?;
    if !valid {
        return Err(AppError::UnauthenticatedError);
    }
    Ok(())
}
