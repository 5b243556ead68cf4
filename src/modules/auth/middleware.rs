use super::service;
use crate::modules::user;
use crate::modules::user::repository::{Role, User};
use crate::types::Context;
use async_graphql::{Context as GraphQLContext, Guard};
use axum::http::HeaderMap;
use serde::Deserialize;
use std::sync::Arc;

/// Header (and websocket `connection_init` key) carrying the signed token.
pub const AUTH_HEADER: &str = "x-jwt";

#[derive(Debug)]
enum Error {
    InvalidSession,
}

#[derive(Clone, Debug)]
pub struct Auth {
    pub user: User,
}

impl Auth {
    pub fn from_graphql(gql: &GraphQLContext<'_>) -> async_graphql::Result<Self> {
        gql.data::<Auth>().cloned()
    }
}

async fn get_user_from_token(ctx: Arc<Context>, token: String) -> Result<User, Error> {
    let claims = service::jwt::verify(&ctx.jwt, &token).map_err(|_| Error::InvalidSession)?;

    user::repository::find_by_id(&ctx.db_conn.pool, claims.id)
        .await
        .map_err(|_| Error::InvalidSession)?
        .ok_or(Error::InvalidSession)
}

async fn resolve(ctx: Arc<Context>, token: Option<String>) -> Option<Auth> {
    let token = token?;

    match get_user_from_token(ctx, token).await {
        Ok(user) => Some(Auth { user }),
        Err(err) => {
            tracing::debug!("Ignoring access token: {:?}", err);
            None
        }
    }
}

pub async fn from_headers(ctx: Arc<Context>, headers: &HeaderMap) -> Option<Auth> {
    let token = headers
        .get(AUTH_HEADER)
        .and_then(|header| header.to_str().ok())
        .map(|header| header.to_string());

    resolve(ctx, token).await
}

#[derive(Deserialize)]
struct ConnectionInitPayload {
    #[serde(rename = "x-jwt")]
    token: Option<String>,
}

pub async fn from_connection_payload(ctx: Arc<Context>, payload: serde_json::Value) -> Option<Auth> {
    let token = serde_json::from_value::<ConnectionInitPayload>(payload)
        .ok()
        .and_then(|payload| payload.token);

    resolve(ctx, token).await
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AllowedRole {
    Any,
    Client,
    Owner,
    Delivery,
}

/// Rejects the field unless the caller is signed in with one of `roles`.
pub struct RoleGuard {
    roles: &'static [AllowedRole],
}

impl RoleGuard {
    pub fn new(roles: &'static [AllowedRole]) -> Self {
        Self { roles }
    }

    pub fn any() -> Self {
        Self::new(&[AllowedRole::Any])
    }

    pub fn allows(&self, role: Role) -> bool {
        self.roles.iter().any(|allowed| match allowed {
            AllowedRole::Any => true,
            AllowedRole::Client => role == Role::Client,
            AllowedRole::Owner => role == Role::Owner,
            AllowedRole::Delivery => role == Role::Delivery,
        })
    }
}

impl Guard for RoleGuard {
    async fn check(&self, gql: &GraphQLContext<'_>) -> async_graphql::Result<()> {
        match gql.data_opt::<Auth>() {
            Some(auth) if self.allows(auth.user.role) => Ok(()),
            _ => Err(async_graphql::Error::new("Forbidden")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_admits_every_role() {
        let guard = RoleGuard::any();

        assert!(guard.allows(Role::Client));
        assert!(guard.allows(Role::Owner));
        assert!(guard.allows(Role::Delivery));
    }

    #[test]
    fn specific_roles_admit_only_themselves() {
        let guard = RoleGuard::new(&[AllowedRole::Owner]);
        assert!(guard.allows(Role::Owner));
        assert!(!guard.allows(Role::Client));
        assert!(!guard.allows(Role::Delivery));

        let guard = RoleGuard::new(&[AllowedRole::Client, AllowedRole::Delivery]);
        assert!(guard.allows(Role::Client));
        assert!(guard.allows(Role::Delivery));
        assert!(!guard.allows(Role::Owner));
    }

    #[tokio::test]
    async fn missing_token_resolves_to_anonymous() {
        let ctx = Arc::new(Context::for_tests());

        assert!(from_headers(ctx.clone(), &HeaderMap::new()).await.is_none());
        assert!(from_connection_payload(ctx, serde_json::json!({}))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn invalid_token_resolves_to_anonymous_without_touching_the_database() {
        let ctx = Arc::new(Context::for_tests());
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, "garbage".parse().unwrap());

        assert!(from_headers(ctx, &headers).await.is_none());
    }
}
