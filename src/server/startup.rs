use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError,
    service::auth::password::hash_password,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the configured staff account if the database has no staff user yet.
///
/// Does nothing when `ADMIN_USERNAME` or `ADMIN_PASSWORD` is unset. Logs a warning in
/// that case if no staff user exists, since the admin-only endpoints would be
/// unreachable.
pub async fn ensure_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.staff_exists().await? {
        return Ok(());
    }

    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password)
    else {
        tracing::warn!(
            "No staff user exists; set ADMIN_USERNAME and ADMIN_PASSWORD to create one at startup"
        );
        return Ok(());
    };

    if user_repo.find_by_username(username).await?.is_some() {
        tracing::warn!(
            "ADMIN_USERNAME '{}' belongs to an existing non-staff user, not promoting it",
            username
        );
        return Ok(());
    }

    let password_hash =
        hash_password(password).map_err(|e| AppError::InternalError(e.to_string()))?;

    let admin = user_repo
        .create(crate::server::model::user::CreateUserParams {
            username: username.clone(),
            email: String::new(),
            password_hash,
            first_name: String::new(),
            last_name: String::new(),
            is_staff: true,
        })
        .await?;

    tracing::info!("Created staff user '{}' (id {})", admin.username, admin.id);

    Ok(())
}
