//! Backend endpoint contracts
//!
//! The marketplace backend answers auth form POSTs with a
//! `{success, error?}` envelope and the listings endpoint with
//! `{projects: [...]}`. Decoding is plain serde over the response text so
//! the contracts are testable natively; the fetch plumbing is WASM-only.
//! Nothing here retries: failures are surfaced to the caller once.

use serde::Deserialize;

/// Registration endpoint (form-encoded POST)
pub const REGISTER_URL: &str = "/accounts/register/";
/// Login endpoint (form-encoded POST)
pub const LOGIN_URL: &str = "/accounts/login/";
/// Open-project listings endpoint (JSON GET)
pub const PROJECTS_URL: &str = "/projects/";

/// Outcome envelope for the auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Server-supplied failure message, or a generic fallback.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Unknown error")
    }
}

/// One open project in the listings feed.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
}

impl Project {
    /// Detail page for this project.
    pub fn detail_url(&self) -> String {
        format!("/projects/{}/", self.id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectList {
    pub projects: Vec<Project>,
}

pub fn parse_api_response(body: &str) -> serde_json::Result<ApiResponse> {
    serde_json::from_str(body)
}

pub fn parse_project_list(body: &str) -> serde_json::Result<ProjectList> {
    serde_json::from_str(body)
}

#[cfg(target_arch = "wasm32")]
mod fetch {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{FormData, Request, RequestInit, Response};

    use super::{ApiResponse, parse_api_response};

    /// POST a form body and decode the `{success, error?}` envelope.
    pub async fn post_form(url: &str, form: &FormData) -> Result<ApiResponse, JsValue> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(form.as_ref());

        let request = Request::new_with_str_and_init(url, &opts)?;
        let body = fetch_text(&request).await?;
        parse_api_response(&body)
            .map_err(|err| JsValue::from_str(&format!("bad response body: {err}")))
    }

    /// GET a response body as text.
    pub async fn get_text(url: &str) -> Result<String, JsValue> {
        let request = Request::new_with_str(url)?;
        fetch_text(&request).await
    }

    async fn fetch_text(request: &Request) -> Result<String, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let response: Response = JsFuture::from(window.fetch_with_request(request))
            .await?
            .dyn_into()?;
        let text = JsFuture::from(response.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }
}

#[cfg(target_arch = "wasm32")]
pub use fetch::{get_text, post_form};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_response() {
        let response = parse_api_response(r#"{"success": true}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.error, None);
    }

    #[test]
    fn test_parse_failure_response_carries_message() {
        let response =
            parse_api_response(r#"{"success": false, "error": "Email already taken"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error_message(), "Email already taken");
    }

    #[test]
    fn test_failure_without_message_gets_fallback() {
        let response = parse_api_response(r#"{"success": false}"#).unwrap();
        assert_eq!(response.error_message(), "Unknown error");
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(parse_api_response("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_parse_project_list() {
        let body = r#"{
            "projects": [
                {"id": 7, "title": "Logo design", "description": "A logo for a bakery"},
                {"id": 12, "title": "Landing page", "description": "One-pager"}
            ]
        }"#;
        let list = parse_project_list(body).unwrap();
        assert_eq!(list.projects.len(), 2);
        assert_eq!(list.projects[0].title, "Logo design");
        assert_eq!(list.projects[1].detail_url(), "/projects/12/");
    }

    #[test]
    fn test_parse_empty_project_list() {
        let list = parse_project_list(r#"{"projects": []}"#).unwrap();
        assert!(list.projects.is_empty());
    }
}
