//! Users resource: login and operator registration.

use std::sync::Arc;

use serde::Serialize;

use super::ApiClient;
use crate::errors::{ChancesError, Result};
use crate::models::LoginResponse;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Credentials<'a> {
    user_name: &'a str,
    password: &'a str,
}

pub struct UsersClient {
    api: Arc<ApiClient>,
}

impl UsersClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Authenticate and persist the session on success.
    pub async fn login(&self, user_name: &str, password: &str) -> Result<LoginResponse> {
        let response: LoginResponse = self
            .api
            .post_json(
                "/Users/Login",
                &Credentials {
                    user_name,
                    password,
                },
            )
            .await?;
        if !response.is_success {
            return Err(ChancesError::auth("invalid user name or password"));
        }
        self.api
            .session()
            .set(response.token.clone(), response.roles, user_name.to_string())?;
        Ok(response)
    }

    pub async fn register(&self, user_name: &str, password: &str) -> Result<()> {
        self.api
            .post_json_discard(
                "/Users/Register",
                &Credentials {
                    user_name,
                    password,
                },
            )
            .await
    }
}
