//! Seam to the external sign-in flow.
//!
//! Sign-in itself happens elsewhere; this module only turns the opaque token
//! the browser presents into a [`Session`] for the handlers.

use std::{collections::HashMap, path::Path};

use async_trait::async_trait;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::{error::AppError, models::User, serializers, state::AppState};

pub const SESSION_COOKIE: &str = "session_token";

/// The signed-in caller. Passed explicitly to every handler and gateway call.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[async_trait]
pub trait SessionResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Option<User>, AppError>;
}

/// Fixed token table, loaded once at startup.
#[derive(Debug, Default, Clone)]
pub struct StaticSessions {
    users: HashMap<String, User>,
}

impl StaticSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: impl Into<String>, user: User) -> Self {
        self.users.insert(token.into(), user);
        self
    }

    /// Reads a JSON object mapping tokens to user records.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
            .map_err(|e| AppError::Configuration(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(text: &str) -> Result<Self, AppError> {
        let entries: HashMap<String, Value> = serde_json::from_str(text).map_err(|e| {
            AppError::Configuration(format!("Failed to parse session table: {}", e))
        })?;
        let users = entries
            .into_iter()
            .map(|(token, record)| (token, serializers::deserialize_user(&record)))
            .collect();
        Ok(Self { users })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl SessionResolver for StaticSessions {
    async fn resolve(&self, token: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.get(token).cloned())
    }
}

/// Used when no session source is configured; every request is anonymous.
pub struct NoSessions;

#[async_trait]
impl SessionResolver for NoSessions {
    async fn resolve(&self, _token: &str) -> Result<Option<User>, AppError> {
        Ok(None)
    }
}

pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = session_token(req.headers()) else {
        debug!("{} {} rejected: no session token", req.method(), req.uri());
        return Err(AppError::Unauthorized);
    };

    let Some(user) = state.sessions.resolve(&token).await? else {
        info!("{} {} rejected: unknown session", req.method(), req.uri());
        return Err(AppError::Unauthorized);
    };

    req.extensions_mut().insert(Session { token, user });
    Ok(next.run(req).await)
}

/// Token from the session cookie, falling back to a bearer header.
fn session_token(headers: &HeaderMap) -> Option<String> {
    let from_cookie = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().to_string());

    from_cookie
        .or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.strip_prefix("Bearer "))
                .map(|v| v.trim().to_string())
        })
        .filter(|token| !token.is_empty())
}
