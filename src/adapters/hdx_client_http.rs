//! HDX CKAN API client implementation using reqwest.

use std::io::Write;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderValue, RETRY_AFTER};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::{AppError, HdxApiConfig};
use crate::ports::HdxClient;

const PACKAGE_SHOW_ACTION: &str = "package_show";
const DEFAULT_STATUS_MESSAGE: &str = "HDX request failed";
const USER_AGENT: &str = concat!("codab/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for the HDX CKAN API.
///
/// This client performs a single request per call. Retry behavior is implemented
/// by a dedicated retry wrapper adapter.
#[derive(Debug, Clone)]
pub struct HttpHdxClient {
    api_url: Url,
    client: Client,
}

impl HttpHdxClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: &HdxApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::HdxApiError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        let mut api_url = config.api_url.clone();
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }

        Ok(Self { api_url, client })
    }

    fn package_show_url(&self, dataset: &str) -> Result<Url, AppError> {
        let mut url = self.api_url.join(PACKAGE_SHOW_ACTION).map_err(|e| {
            AppError::config_error(format!("Invalid HDX API URL '{}': {}", self.api_url, e))
        })?;
        url.query_pairs_mut().append_pair("id", dataset);
        Ok(url)
    }

    fn get(&self, url: &Url) -> Result<Response, AppError> {
        let response = self.client.get(url.clone()).send().map_err(|e| AppError::HdxApiError {
            message: format!("HTTP request failed: {}", e),
            status: None,
        })?;

        if response.status().is_success() {
            return Ok(response);
        }
        Err(error_from_response(response))
    }
}

#[derive(Debug, Deserialize)]
struct PackageShowResponse {
    success: bool,
    #[serde(default)]
    result: Option<Package>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Package {
    #[serde(default)]
    resources: Vec<Resource>,
}

#[derive(Debug, Deserialize)]
struct Resource {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let retry_after_ms = response.headers().get(RETRY_AFTER).and_then(parse_retry_after_ms);
    let body_text = response.text().unwrap_or_default();

    let mut message = extract_error_message(&body_text).unwrap_or_else(|| {
        if !body_text.trim().is_empty() {
            body_text.clone()
        } else if status.as_u16() == 429 {
            "Rate limited".to_string()
        } else if status.is_server_error() {
            "Server error".to_string()
        } else {
            DEFAULT_STATUS_MESSAGE.to_string()
        }
    });

    if let Some(value) = retry_after_ms {
        message.push_str(&format!(" (retry_after_ms={})", value));
    }

    AppError::HdxApiError { message, status: Some(status.as_u16()) }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn parse_retry_after_ms(value: &HeaderValue) -> Option<u64> {
    let raw = value.to_str().ok()?.trim();
    let seconds = raw.parse::<u64>().ok()?;
    Some(seconds.saturating_mul(1000))
}

impl HdxClient for HttpHdxClient {
    fn resource_url(&self, dataset: &str, resource: &str) -> Result<Url, AppError> {
        let url = self.package_show_url(dataset)?;
        debug!(%url, dataset, resource, "Looking up HDX resource");

        let response = self.get(&url)?;
        let status = response.status().as_u16();
        let body: PackageShowResponse = response.json().map_err(|e| AppError::HdxApiError {
            message: format!("Failed to parse response: {}", e),
            status: Some(status),
        })?;

        if !body.success {
            let message = body
                .error
                .and_then(|error| error.message)
                .unwrap_or_else(|| format!("package_show for '{}' was not successful", dataset));
            return Err(AppError::HdxApiError { message, status: Some(status) });
        }

        let resource_entry = body
            .result
            .into_iter()
            .flat_map(|package| package.resources)
            .find(|entry| entry.name == resource)
            .ok_or_else(|| AppError::HdxResourceNotFound {
                dataset: dataset.to_string(),
                resource: resource.to_string(),
            })?;

        Url::parse(&resource_entry.url).map_err(|e| AppError::HdxApiError {
            message: format!("Invalid resource URL '{}': {}", resource_entry.url, e),
            status: Some(status),
        })
    }

    fn download(&self, url: &Url, destination: &mut dyn Write) -> Result<u64, AppError> {
        let mut response = self.get(url)?;
        let status = response.status().as_u16();
        response.copy_to(destination).map_err(|e| AppError::HdxApiError {
            message: format!("Download interrupted: {}", e),
            status: Some(status),
        })
    }
}
