//! Face service HTTP client.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use facefind_models::{DetectedFace, SimilarFace};

use crate::error::{FaceError, FaceResult};
use crate::types::{DetectOptions, FindSimilarRequest, ImageUrl};

pub(crate) const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

const DEFAULT_ENDPOINT: &str = "https://eastus.api.cognitive.microsoft.com";

/// Configuration for the face client.
#[derive(Debug, Clone)]
pub struct FaceClientConfig {
    /// Base URL of the regional service deployment
    pub endpoint: String,
    /// Subscription key sent with every request
    pub key: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for FaceClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            key: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl FaceClientConfig {
    /// Create config from environment variables.
    ///
    /// An absent subscription key is passed along as-is; the service rejects
    /// it, this client does not.
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("FACE_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            key: std::env::var("FACE_SUBSCRIPTION_KEY").unwrap_or_default(),
            timeout: Duration::from_secs(
                std::env::var("FACE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

/// Client for the remote face service.
pub struct FaceClient {
    pub(crate) http: Client,
    pub(crate) config: FaceClientConfig,
}

impl FaceClient {
    /// Create a new face client.
    pub fn new(config: FaceClientConfig) -> FaceResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FaceError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> FaceResult<Self> {
        Self::new(FaceClientConfig::from_env())
    }

    /// Detect faces in a remotely hosted image.
    pub async fn detect_with_url(
        &self,
        image_url: &str,
        options: &DetectOptions,
    ) -> FaceResult<Vec<DetectedFace>> {
        let url = self.api_url("detect");

        debug!("Sending detect request to {}", url);

        let response = self
            .http
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.key)
            .query(&[("returnFaceId", options.return_face_id)])
            .json(&ImageUrl {
                url: image_url.to_string(),
            })
            .send()
            .await
            .map_err(FaceError::Network)?;

        self.parse_json(response).await
    }

    /// Detect faces in an image supplied as raw bytes.
    pub async fn detect_with_stream(
        &self,
        image: Vec<u8>,
        options: &DetectOptions,
    ) -> FaceResult<Vec<DetectedFace>> {
        let url = self.api_url("detect");

        debug!("Sending detect request ({} bytes) to {}", image.len(), url);

        let response = self
            .http
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .query(&[("returnFaceId", options.return_face_id)])
            .body(image)
            .send()
            .await
            .map_err(FaceError::Network)?;

        self.parse_json(response).await
    }

    /// Find faces similar to a probe face.
    pub async fn find_similar(
        &self,
        request: &FindSimilarRequest,
    ) -> FaceResult<Vec<SimilarFace>> {
        let url = self.api_url("findsimilars");

        debug!("Sending find-similar request to {}", url);

        let response = self
            .http
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.key)
            .json(request)
            .send()
            .await
            .map_err(FaceError::Network)?;

        self.parse_json(response).await
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!(
            "{}/face/v1.0/{}",
            self.config.endpoint.trim_end_matches('/'),
            path
        )
    }

    /// Map a response to its JSON body, or a `RequestFailed` carrying the
    /// service's status and error text.
    pub(crate) async fn parse_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> FaceResult<T> {
        let response = self.check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Same mapping for operations whose success response has no body.
    pub(crate) async fn expect_no_content(&self, response: reqwest::Response) -> FaceResult<()> {
        self.check_status(response).await?;
        Ok(())
    }

    async fn check_status(&self, response: reqwest::Response) -> FaceResult<reqwest::Response> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Face service returned {}", status);
            return Err(FaceError::RequestFailed(format!(
                "face service returned {}: {}",
                status, body
            )));
        }
        Ok(response)
    }
}
