//! Typed view of the claims embedded in the storefront's bearer token.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Role carried by the token. Anything else makes the token malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// Claims the storefront service puts in its tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireClaims")]
pub struct Claims {
    /// Subject id. Tokens may carry it as `id`, `_id` or the registered `sub`.
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// Claims as found in the payload, before the subject id is settled.
#[derive(Deserialize)]
struct WireClaims {
    id: Option<String>,
    #[serde(rename = "_id")]
    underscore_id: Option<String>,
    sub: Option<String>,
    name: String,
    email: String,
    role: Role,
    exp: i64,
    #[serde(default)]
    iat: Option<i64>,
}

impl TryFrom<WireClaims> for Claims {
    type Error = String;

    // `id` wins over `_id`, which wins over `sub`.
    fn try_from(wire: WireClaims) -> Result<Self, Self::Error> {
        let id = wire
            .id
            .or(wire.underscore_id)
            .or(wire.sub)
            .ok_or_else(|| "missing field `id`".to_string())?;
        Ok(Claims {
            id,
            name: wire.name,
            email: wire.email,
            role: wire.role,
            exp: wire.exp,
            iat: wire.iat,
        })
    }
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// True when the expiry is at or before `now`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }
}

/// Decodes the payload of `token` into [`Claims`] without checking the signature.
///
/// The client has no key material; the server stays the authority on whether a
/// token is genuine. Expiry is also left to the caller so that it can be reported
/// separately from structural problems.
pub fn decode_claims(token: &str) -> Result<Claims, String> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| format!("Failed to decode token claims: {}", e))
}
