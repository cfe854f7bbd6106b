//! Registration, login, and bearer-token validation.

use actix_web::{post, web, HttpResponse};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;
use std::env;

use crate::config::settings;
use crate::db::gamer_repo::{self, NewAccount};
use crate::error::ApiError;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // user id
    gid: String, // gamer id
    exp: usize,
}

fn jwt_secret() -> String {
    env::var("JWT_SECRET").unwrap_or_else(|_| "gamenight-dev-secret".into())
}

pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn issue_token(user_id: i64, gamer_id: i64) -> Result<String, ApiError> {
    let exp = Utc::now()
        .checked_add_signed(Duration::minutes(settings().token_ttl_minutes))
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("token expiry overflow")))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        gid: gamer_id.to_string(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
    .map_err(|e| ApiError::Internal(e.into()))
}

//////////////////////////////////////////////////
// ─────────────  JwtAuth extractor  ─────────────
//////////////////////////////////////////////////

pub mod extractor {
    use super::{jwt_secret, Claims};
    use actix_web::{
        dev::Payload, error::ErrorUnauthorized, FromRequest, HttpRequest, Result as ActixResult,
    };
    use futures_util::future::{ready, Ready};
    use jsonwebtoken::{decode, DecodingKey, Validation};

    /// Extracts and validates the bearer JWT, exposing user & gamer ids.
    #[derive(Debug, Clone)]
    pub struct JwtAuth {
        pub user_id: i64,
        pub gamer_id: i64,
    }

    impl FromRequest for JwtAuth {
        type Error = actix_web::Error;
        type Future = Ready<ActixResult<Self, Self::Error>>;

        fn from_request(req: &HttpRequest, _pl: &mut Payload) -> Self::Future {
            let res = (|| {
                // Expect:  Authorization: Bearer <JWT>
                let hdr = req
                    .headers()
                    .get("Authorization")
                    .and_then(|v| v.to_str().ok())
                    .ok_or_else(|| ErrorUnauthorized("missing Authorization header"))?;

                let token = hdr
                    .strip_prefix("Bearer ")
                    .ok_or_else(|| ErrorUnauthorized("malformed Authorization header"))?;

                let data = decode::<Claims>(
                    token,
                    &DecodingKey::from_secret(jwt_secret().as_bytes()),
                    &Validation::default(),
                )
                .map_err(|_| ErrorUnauthorized("invalid / expired token"))?;

                let user_id = data
                    .claims
                    .sub
                    .parse::<i64>()
                    .map_err(|_| ErrorUnauthorized("bad sub"))?;
                let gamer_id = data
                    .claims
                    .gid
                    .parse::<i64>()
                    .map_err(|_| ErrorUnauthorized("bad gid"))?;

                Ok(JwtAuth { user_id, gamer_id })
            })();

            ready(res)
        }
    }
}
pub use extractor::JwtAuth;

//////////////////////////////////////////////////
// POST /register
//////////////////////////////////////////////////
#[post("/register")]
pub async fn register(
    info: web::Json<RegisterRequest>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    if info.username.trim().is_empty() {
        return Err(ApiError::Validation("username must not be empty".into()));
    }
    if info.password.is_empty() {
        return Err(ApiError::Validation("password must not be empty".into()));
    }

    let salt = hex::encode(rand::rng().random::<[u8; 16]>());
    let password_hash = hash_password(&salt, &info.password);

    let account = NewAccount {
        username: &info.username,
        email: &info.email,
        password_hash: &password_hash,
        salt: &salt,
        first_name: &info.first_name,
        last_name: &info.last_name,
        bio: &info.bio,
    };

    let (user_id, gamer_id) = match gamer_repo::create_account(&db, &account).await {
        Ok(ids) => ids,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(ApiError::Validation("username already taken".into()));
        }
        Err(e) => return Err(e.into()),
    };

    let token = issue_token(user_id, gamer_id)?;
    Ok(HttpResponse::Created().json(json!({ "token": token })))
}

//////////////////////////////////////////////////
// POST /login
//////////////////////////////////////////////////
#[post("/login")]
pub async fn login(
    info: web::Json<LoginRequest>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let invalid = || HttpResponse::Ok().json(json!({ "valid": false }));

    // Unknown username and wrong password are the same non-error outcome.
    let user = match gamer_repo::find_credentials(&db, &info.username).await? {
        Some(user) => user,
        None => return Ok(invalid()),
    };

    if hash_password(&user.salt, &info.password) != user.password_hash {
        return Ok(invalid());
    }

    let gamer_id = match gamer_repo::gamer_id_for_user(&db, user.id).await? {
        Some(id) => id,
        None => return Ok(invalid()),
    };

    let token = issue_token(user.id, gamer_id)?;
    Ok(HttpResponse::Ok().json(json!({ "valid": true, "token": token })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register).service(login);
}
