//! Blocking client for the identity provider's account REST endpoints.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::runtime::{Builder, Runtime};

use crate::{
    domain::{
        auth_error::{ProviderError, ProviderErrorKind},
        session::Session,
    },
    infra::config::IdentityConfig,
};

const SIGN_IN_ENDPOINT: &str = "accounts:signInWithPassword";
const SIGN_UP_ENDPOINT: &str = "accounts:signUp";
const SEND_OOB_CODE_ENDPOINT: &str = "accounts:sendOobCode";
const PASSWORD_RESET_REQUEST: &str = "PASSWORD_RESET";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest<'a> {
    request_type: &'a str,
    email: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
}

#[derive(Debug, Deserialize)]
struct OobCodeResponse {}

#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub(super) struct RestAuthBackend {
    rt: Runtime,
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestAuthBackend {
    pub(super) fn new(config: &IdentityConfig) -> Result<Self, ProviderError> {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| {
                ProviderError::new(
                    ProviderErrorKind::Other,
                    format!("failed to initialize async runtime: {error}"),
                )
            })?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(map_transport_error)?;

        Ok(Self {
            rt,
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
        })
    }

    pub(super) fn sign_in(&self, email: &str, password: &str) -> Result<Session, ProviderError> {
        self.password_call(SIGN_IN_ENDPOINT, email, password)
    }

    pub(super) fn sign_up(&self, email: &str, password: &str) -> Result<Session, ProviderError> {
        self.password_call(SIGN_UP_ENDPOINT, email, password)
    }

    pub(super) fn send_password_reset(&self, email: &str) -> Result<(), ProviderError> {
        let body = OobCodeRequest {
            request_type: PASSWORD_RESET_REQUEST,
            email,
        };

        let _: OobCodeResponse = self.rt.block_on(self.post(SEND_OOB_CODE_ENDPOINT, &body))?;
        Ok(())
    }

    fn password_call(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, ProviderError> {
        let body = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };

        let account: AccountResponse = self.rt.block_on(self.post(endpoint, &body))?;
        Ok(Session::new(account.local_id))
    }

    async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R, ProviderError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = endpoint_url(&self.base_url, endpoint, &self.api_key);

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(map_error_body(status, &body_text));
        }

        response.json().await.map_err(|error| {
            ProviderError::new(
                ProviderErrorKind::Other,
                format!("unexpected identity response: {}", error.without_url()),
            )
        })
    }
}

fn endpoint_url(base_url: &str, endpoint: &str, api_key: &str) -> String {
    format!("{base_url}/v1/{endpoint}?key={api_key}")
}

// Request URLs carry the API key; error text must never include them.
fn map_transport_error(error: reqwest::Error) -> ProviderError {
    ProviderError::new(
        ProviderErrorKind::NetworkRequestFailed,
        format!("identity request failed: {}", error.without_url()),
    )
}

/// Maps an error response to a categorized provider error. The REST API puts a
/// machine code first in `error.message`, optionally followed by ` : detail`.
pub(super) fn map_error_body(status: StatusCode, body: &str) -> ProviderError {
    let Some(message) = serde_json::from_str::<ErrorWrapper>(body)
        .ok()
        .and_then(|wrapper| wrapper.error.message)
    else {
        return ProviderError::new(
            ProviderErrorKind::Other,
            format!("identity service returned HTTP {}", status.as_u16()),
        );
    };

    let code = message.split(" : ").next().unwrap_or_default().trim();
    ProviderError::new(kind_for_code(code), message.clone())
}

fn kind_for_code(code: &str) -> ProviderErrorKind {
    match code {
        "INVALID_LOGIN_CREDENTIALS" => ProviderErrorKind::InvalidCredential,
        "EMAIL_NOT_FOUND" => ProviderErrorKind::UserNotFound,
        "INVALID_PASSWORD" => ProviderErrorKind::WrongPassword,
        "INVALID_EMAIL" | "MISSING_EMAIL" => ProviderErrorKind::InvalidEmail,
        "EMAIL_EXISTS" => ProviderErrorKind::EmailAlreadyInUse,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => ProviderErrorKind::TooManyRequests,
        "USER_DISABLED" => ProviderErrorKind::UserDisabled,
        code if code.starts_with("WEAK_PASSWORD") => ProviderErrorKind::WeakPassword,
        _ => ProviderErrorKind::Other,
    }
}
