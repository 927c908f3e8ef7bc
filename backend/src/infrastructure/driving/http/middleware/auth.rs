use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::domain::value_objects::{UserId, UserRole};
use crate::infrastructure::AppState;

/// Identity from the hosted auth provider's bearer token. This server only
/// verifies tokens; it never issues them.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
    pub roles: Vec<UserRole>,
}

impl AuthenticatedUser {
    pub fn require(&self, role: UserRole) -> Result<(), (StatusCode, String)> {
        self.require_any(&[role])
    }

    pub fn require_any(&self, roles: &[UserRole]) -> Result<(), (StatusCode, String)> {
        if roles.iter().any(|r| self.roles.contains(r)) {
            Ok(())
        } else {
            Err((
                StatusCode::FORBIDDEN,
                "Your account does not have access to this area".to_string(),
            ))
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct Claims {
    sub: String,
    email: String,
    roles: Vec<String>,
    #[allow(dead_code)]
    exp: usize,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        extract(parts, state)
    }
}

fn extract(parts: &mut Parts, state: &AppState) -> Result<AuthenticatedUser, (StatusCode, String)> {
    let auth_header = parts
        .headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .ok_or((
            StatusCode::UNAUTHORIZED,
            "Missing or invalid Authorization header".to_string(),
        ))?;

    let token_data = decode::<Claims>(
        auth_header,
        &DecodingKey::from_secret(state.settings.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid token".to_string()))?;

    let claims = token_data.claims;
    let id = UserId::from_uuid(
        uuid::Uuid::parse_str(&claims.sub)
            .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid user id in token".to_string()))?,
    );
    let roles = claims
        .roles
        .iter()
        .filter_map(|r| UserRole::parse(r))
        .collect();

    Ok(AuthenticatedUser {
        id,
        email: claims.email,
        roles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_gate() {
        let user = AuthenticatedUser {
            id: UserId::new(),
            email: "host@example.com".to_string(),
            roles: vec![UserRole::Host],
        };
        assert!(user.require(UserRole::Host).is_ok());
        assert!(user.require(UserRole::Admin).is_err());
        assert!(user
            .require_any(&[UserRole::Finance, UserRole::Host])
            .is_ok());
        let (status, _) = user
            .require_any(&[UserRole::Finance, UserRole::Admin])
            .unwrap_err();
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
