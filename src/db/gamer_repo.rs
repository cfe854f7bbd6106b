use sqlx::SqlitePool;

use crate::db::models::{AuthUser, ProfileGamer};

/// Fields persisted when a new account registers. The password arrives
/// already hashed; the HTTP layer owns the hashing scheme.
pub struct NewAccount<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub salt: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub bio: &'a str,
}

/// Creates the User row and its 1:1 Gamer row in one transaction.
/// Returns (user_id, gamer_id).
pub async fn create_account(
    db: &SqlitePool,
    account: &NewAccount<'_>,
) -> Result<(i64, i64), sqlx::Error> {
    let mut tx = db.begin().await?;

    let user_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO users (username, email, password_hash, salt, first_name, last_name)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(account.username)
    .bind(account.email)
    .bind(account.password_hash)
    .bind(account.salt)
    .bind(account.first_name)
    .bind(account.last_name)
    .fetch_one(&mut *tx)
    .await?;

    let gamer_id: i64 =
        sqlx::query_scalar("INSERT INTO gamers (user_id, bio) VALUES (?, ?) RETURNING id")
            .bind(user_id)
            .bind(account.bio)
            .fetch_one(&mut *tx)
            .await?;

    tx.commit().await?;
    Ok((user_id, gamer_id))
}

/// Credential lookup for login; `None` when the username is unknown.
pub async fn find_credentials(
    db: &SqlitePool,
    username: &str,
) -> Result<Option<AuthUser>, sqlx::Error> {
    sqlx::query_as::<_, AuthUser>("SELECT id, password_hash, salt FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(db)
        .await
}

/// Gamer id for a user account, if the profile row exists.
pub async fn gamer_id_for_user(db: &SqlitePool, user_id: i64) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT id FROM gamers WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(db)
        .await
}

/// Profile columns for the viewing gamer.
pub async fn find_profile(
    db: &SqlitePool,
    gamer_id: i64,
) -> Result<Option<ProfileGamer>, sqlx::Error> {
    sqlx::query_as::<_, ProfileGamer>(
        r#"
        SELECT u.first_name, u.last_name, u.username, g.bio
          FROM gamers g
          JOIN users u ON g.user_id = u.id
         WHERE g.id = ?
        "#,
    )
    .bind(gamer_id)
    .fetch_optional(db)
    .await
}
