#![allow(dead_code)]

use std::sync::Arc;

use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use storefront_client::config::{extract_config, ConfigV1};
use storefront_client::startup::build_state;
use storefront_client::state::AppState;

/// Parses an inline YAML config pointed at `base_url`, with an in-memory token store.
pub fn test_config(base_url: &str) -> ConfigV1 {
    let yaml = format!(
        r#"
version: "1.0.0"
api:
  base_url: "{}"
store:
  type: memory
logging:
  level: debug
  format: json
"#,
        base_url
    );
    extract_config(Figment::new().merge(Yaml::string(&yaml))).expect("test config should parse")
}

pub fn build_app(base_url: &str) -> AppState {
    build_state(Arc::new(test_config(base_url))).expect("state should build")
}

/// A signed token for `role` that expires `ttl` seconds from now (negative for the past).
pub fn mint_token(id: &str, role: &str, ttl: i64) -> String {
    encode(
        &Header::default(),
        &json!({
            "id": id,
            "name": format!("{} name", id),
            "email": format!("{}@example.com", id),
            "role": role,
            "iat": Utc::now().timestamp(),
            "exp": Utc::now().timestamp() + ttl
        }),
        &EncodingKey::from_secret(b"server-side-secret"),
    )
    .expect("failed to mint token")
}

/// Token-shaped string whose signature segment is junk. Claims are still readable.
pub fn unsigned_token(claims: serde_json::Value) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.not-a-signature", header, payload)
}
