//! REST helpers for the external collaborators (auth + donation processing).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so failures surface as form messages or a
//! dismissible banner instead of panics.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{DonationReceipt, DonationSubmission, LoginRequest, RegisterRequest, User};

/// Sign in through `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the request fails or credentials are rejected.
pub async fn login(request: &LoginRequest) -> Result<User, String> {
    post_json("/api/auth/login", request).await
}

/// Create an account through `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an error string if the request fails or the account is rejected.
pub async fn register(request: &RegisterRequest) -> Result<User, String> {
    post_json("/api/auth/register", request).await
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Hand a validated donation to the processing service via `POST /api/donations`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-2xx response.
pub async fn submit_donation(submission: &DonationSubmission) -> Result<DonationReceipt, String> {
    post_json("/api/donations", submission).await
}

async fn post_json<B, T>(url: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("request failed: {} {}", resp.status(), resp.status_text()));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err("not available on server".to_owned())
    }
}
