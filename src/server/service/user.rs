//! User service for registration and profile management.
//!
//! Usernames are restricted to ASCII letters, digits and underscores with at least two
//! characters. Passwords are hashed with Argon2id before they reach the repository.

use regex::Regex;
use sea_orm::DatabaseConnection;
use std::sync::LazyLock;

use crate::server::{
    data::{is_unique_violation, user::UserRepository},
    error::{validation::ValidationErrors, AppError},
    model::user::{
        CreateUserParams, RegisterUserParams, UpdateProfileParams, UpdateUserParams, User,
    },
    service::auth::password::{hash_password, MIN_PASSWORD_LENGTH},
};

static USERNAME_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{2,}$"));

pub const USERNAME_MESSAGE: &str =
    "Username must be at least 2 characters and contain only letters, digits and underscores.";
pub const USERNAME_TAKEN_MESSAGE: &str = "A user with that username already exists.";

/// Checks a username against the allowed pattern.
pub fn is_valid_username(username: &str) -> bool {
    match USERNAME_PATTERN.as_ref() {
        Ok(pattern) => pattern.is_match(username),
        Err(_) => false,
    }
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a regular user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Validation)` - Bad username, password or email, or a taken username
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let mut errors = ValidationErrors::new();
        check_username(&mut errors, &params.username);
        check_password(&mut errors, &params.password);
        if !params.email.is_empty() && !params.email.contains('@') {
            errors.add("email", "Enter a valid email address.");
        }
        errors.into_result()?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.username_taken(&params.username, None).await? {
            return Err(ValidationErrors::single("username", USERNAME_TAKEN_MESSAGE).into());
        }

        let password_hash = hash_password(&params.password)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

        let user = user_repo
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                password_hash,
                first_name: params.first_name,
                last_name: params.last_name,
                is_staff: false,
            })
            .await
            .map_err(username_conflict)?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    pub async fn get(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(User::from_entity)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    /// Updates the caller's own profile. `email` and `is_staff` cannot be changed here.
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        let mut errors = ValidationErrors::new();
        if let Some(username) = &params.username {
            check_username(&mut errors, username);
        }
        if let Some(password) = &params.password {
            check_password(&mut errors, password);
        }
        errors.into_result()?;

        let user_repo = UserRepository::new(self.db);
        if let Some(username) = &params.username {
            if user_repo.username_taken(username, Some(user_id)).await? {
                return Err(ValidationErrors::single("username", USERNAME_TAKEN_MESSAGE).into());
            }
        }

        let password_hash = params
            .password
            .as_deref()
            .map(hash_password)
            .transpose()
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

        user_repo
            .update(
                user_id,
                UpdateUserParams {
                    username: params.username,
                    password_hash,
                    first_name: params.first_name,
                    last_name: params.last_name,
                },
            )
            .await
            .map_err(username_conflict)?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    /// Deletes the account together with its orders and refresh tokens.
    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(user_id).await? {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        tracing::info!("Deleted user {}", user_id);

        Ok(())
    }
}

fn check_username(errors: &mut ValidationErrors, username: &str) {
    if !is_valid_username(username) {
        errors.add("username", USERNAME_MESSAGE);
    }
}

fn check_password(errors: &mut ValidationErrors, password: &str) {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.add(
            "password",
            format!(
                "Ensure this field has at least {} characters.",
                MIN_PASSWORD_LENGTH
            ),
        );
    }
}

fn username_conflict(err: sea_orm::DbErr) -> AppError {
    if is_unique_violation(&err) {
        ValidationErrors::single("username", USERNAME_TAKEN_MESSAGE).into()
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_digits_and_underscores() {
        assert!(is_valid_username("john_doe42"));
        assert!(is_valid_username("ab"));
    }

    #[test]
    fn rejects_spaces_punctuation_cyrillic_and_short_names() {
        assert!(!is_valid_username("john doe"));
        assert!(!is_valid_username("john.doe!"));
        assert!(!is_valid_username("иван"));
        assert!(!is_valid_username("a"));
        assert!(!is_valid_username(""));
    }
}
