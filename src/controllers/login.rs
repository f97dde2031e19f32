use tracing::{info, warn};

use super::ViewState;
use crate::api::ApiClient;
use crate::models::{SignInRequest, SignUpRequest};
use crate::routes::Route;

const AUTH_FAILED: &str = "Authentication failed. Please check your credentials.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign-in / sign-up page.
pub struct LoginController {
    api: ApiClient,
    mode: AuthMode,
    form: LoginForm,
    pub view: ViewState,
}

impl LoginController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            mode: AuthMode::SignIn,
            form: LoginForm::default(),
            view: ViewState::default(),
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
    }

    /// Edits the form. Any error from a previous attempt is cleared.
    pub fn edit(&mut self, change: impl FnOnce(&mut LoginForm)) {
        change(&mut self.form);
        self.view.error = None;
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.mode == AuthMode::SignUp && self.form.name.trim().is_empty() {
            missing.push("name");
        }
        if self.form.email.trim().is_empty() {
            missing.push("email");
        }
        if self.form.password.is_empty() {
            missing.push("password");
        }
        missing
    }

    /// Submits the form. On success the returned token is stored verbatim and the
    /// dashboard route is returned.
    pub async fn submit(&mut self) -> Option<Route> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            self.view.error = Some(format!("Please fill in: {}", missing.join(", ")));
            return None;
        }

        self.view.start();
        let result = match self.mode {
            AuthMode::SignIn => {
                self.api
                    .auth()
                    .sign_in(&SignInRequest {
                        email: self.form.email.trim().to_string(),
                        password: self.form.password.clone(),
                    })
                    .await
            }
            AuthMode::SignUp => {
                self.api
                    .auth()
                    .sign_up(&SignUpRequest {
                        name: self.form.name.trim().to_string(),
                        email: self.form.email.trim().to_string(),
                        password: self.form.password.clone(),
                    })
                    .await
            }
        };
        self.view.finish();

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                self.view.fail("Authentication failed", &e, AUTH_FAILED);
                return None;
            }
        };

        if let Err(e) = self.api.session().sign_in_with(&response.token) {
            warn!("Signed in but the token could not be stored: {}", e);
            self.view.error = Some(AUTH_FAILED.to_string());
            return None;
        }
        info!("Signed in as '{}'", self.form.email.trim());
        self.form.password.clear();
        Some(Route::Dashboard)
    }
}
