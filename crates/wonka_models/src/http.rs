//! Response handling shared by all vendor clients.

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::error;
use wonka_error::{ProviderError, ProviderErrorKind, ProviderResult};

/// Joins a base URL and a path without doubling slashes.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Converts a reqwest send failure into a provider error.
pub(crate) fn transport_error(provider: &str, err: reqwest::Error) -> ProviderError {
    error!(provider, error = ?err, "HTTP request failed");
    ProviderError::new(ProviderErrorKind::Http(err.to_string()))
}

/// Passes successful responses through and classifies the rest by status.
pub(crate) async fn ensure_success(provider: &str, response: Response) -> ProviderResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!(provider, status = %status, error = %body, "API error");
    Err(ProviderError::new(ProviderErrorKind::from_status(
        status.as_u16(),
        body,
    )))
}

/// Decodes a JSON body into a vendor DTO.
pub(crate) async fn decode<T: DeserializeOwned>(
    provider: &str,
    response: Response,
) -> ProviderResult<T> {
    response.json::<T>().await.map_err(|e| {
        error!(provider, error = ?e, "Failed to parse response");
        ProviderError::new(ProviderErrorKind::ResponseParsing(format!(
            "Failed to parse JSON: {}",
            e
        )))
    })
}

/// Sorts model identifiers newest-looking first and drops duplicates.
pub(crate) fn sort_descending(mut models: Vec<String>) -> Vec<String> {
    models.sort_unstable_by(|a, b| b.cmp(a));
    models.dedup();
    models
}
