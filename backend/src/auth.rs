//! Bearer-token access gate for the protected endpoints.
//!
//! Tokens are HS256 JWTs issued by the login endpoint. Protected handlers
//! take an [`AuthedAdmin`] extractor argument; requests without an
//! `Authorization: Bearer` header are rejected with 401, requests whose
//! token fails verification (bad signature, expired) with 403. Handlers
//! never look at the claims beyond "authenticated".

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, FromRequest, HttpRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};

use crate::error::ApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

/// Signing material plus token lifetime, built from the config at startup
/// and shared with the app as `web::Data`.
#[derive(Clone)]
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl AuthKeys {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs: ttl_secs as i64,
        }
    }

    pub fn issue(&self, user_id: &str, role: &str) -> Result<String, ApiError> {
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            exp: (Utc::now() + Duration::seconds(self.ttl_secs)).timestamp() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApiError::Internal(format!("token signing failed: {}", e)))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &Validation::default()).map(|data| data.claims)
    }
}

/// Proof that the request carried a valid bearer token.
pub struct AuthedAdmin {
    pub user_id: String,
}

impl FromRequest for AuthedAdmin {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthedAdmin, ApiError> {
    let keys = req
        .app_data::<web::Data<AuthKeys>>()
        .ok_or_else(|| ApiError::Internal("auth keys not configured".to_string()))?;
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized)?;
    let claims = keys.verify(token).map_err(|_| ApiError::Forbidden)?;
    Ok(AuthedAdmin {
        user_id: claims.sub,
    })
}
