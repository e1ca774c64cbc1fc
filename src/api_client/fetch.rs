//! Request plumbing shared by every API operation: bearer-token
//! decoration, status-to-error mapping, and response body parsing.
//!
//! Each call issues exactly one request. There is no retry and no
//! response caching; a failure of any kind propagates to the caller.

use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use crate::error::AppError;

/// Attaches the admin bearer token to a request when one is present.
///
/// This is a pure decoration step: the base request and the credential go
/// in, the (possibly) authorized request comes out. With no token the
/// request is sent without an Authorization header at all and the backend
/// treats it as anonymous.
pub(super) fn with_bearer(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) if !token.is_empty() => request.bearer_auth(token),
        _ => request,
    }
}

/// Issues a GET with the given query parameters and parses the JSON body.
#[instrument(skip(client, token))]
pub(super) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&'static str, String)],
    token: Option<&str>,
) -> Result<T, AppError> {
    let request = with_bearer(client.get(url).query(query), token);
    send(request, url).await
}

/// Issues a POST with a JSON body and parses the JSON response.
#[instrument(skip(client, body, token))]
pub(super) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, AppError> {
    let request = with_bearer(client.post(url).json(body), token);
    send(request, url).await
}

async fn send<T: DeserializeOwned>(request: RequestBuilder, url: &str) -> Result<T, AppError> {
    debug!("Requesting {url}");

    let response = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        // Return specific error types based on HTTP status code
        return Err(match status_code {
            401 | 403 => AppError::api_unauthorized(status_code, url),
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            // Distinguish malformed JSON from a JSON body of the wrong shape
            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
