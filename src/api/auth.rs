use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::{AuthResponse, SignInRequest, SignUpRequest};

/// `/user` endpoints. Neither call needs a token, though one is attached if stored.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<AuthResponse, ApiError> {
        self.client
            .send_json(Method::POST, "/user/signIn", request)
            .await
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse, ApiError> {
        self.client
            .send_json(Method::POST, "/user/signUp", request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::client_for;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_sign_in_returns_token() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/user/signIn")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "email": "ada@example.com",
                "password": "pw"
            })))
            .with_status(200)
            .with_body(r#"{"token": "abc.def.ghi"}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server.url(), None);
        let response = client
            .auth()
            .sign_in(&SignInRequest {
                email: "ada@example.com".into(),
                password: "pw".into(),
            })
            .await
            .unwrap();

        m.assert_async().await;
        assert_eq!(response.token, "abc.def.ghi");
    }

    #[tokio::test]
    async fn test_sign_up_sends_name() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/user/signUp")
            .match_body(Matcher::PartialJson(json!({"name": "Ada"})))
            .with_status(201)
            .with_body(r#"{"token": "t"}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server.url(), None);
        let response = client
            .auth()
            .sign_up(&SignUpRequest {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                password: "pw".into(),
            })
            .await
            .unwrap();

        m.assert_async().await;
        assert_eq!(response.token, "t");
    }
}
