//! src/waitlist_client.rs

use reqwest::{Client, StatusCode};

/// HTTP client for the waitlist signup endpoint.
#[derive(Debug, Clone)]
pub struct WaitlistClient {
    http_client: Client,
    base_url: String,
}

/// JSON body sent to `POST /waitlist`.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
}

#[derive(serde::Deserialize)]
struct SignupResponseBody {
    message: Option<String>,
    error: Option<String>,
}

/// Status and decoded body of a signup response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupResponse {
    pub status: StatusCode,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl SignupResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl WaitlistClient {
    pub fn new(base_url: String) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http_client: Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Send one signup request.
    ///
    /// Every response the server sends back is `Ok`, whatever its status.
    /// `Err` means no usable response arrived: the connection failed or the
    /// body was not JSON.
    #[tracing::instrument(name = "Sending a waitlist signup request", skip(self, request))]
    pub async fn join(&self, request: &SignupRequest) -> Result<SignupResponse, reqwest::Error> {
        let url = format!("{}/waitlist", self.base_url);
        let response = self.http_client.post(&url).json(request).send().await?;
        let status = response.status();
        let body: SignupResponseBody = response.json().await?;
        Ok(SignupResponse {
            status,
            message: body.message,
            error: body.error,
        })
    }
}
