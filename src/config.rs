//! Remote List Configuration
//!
//! Service base URL and user identity, injected instead of hardcoded.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::TodoId;

pub const DEFAULT_API_BASE: &str = "https://playground.4geeks.com/todo";
pub const DEFAULT_USER: &str = "Gemini";

/// `<meta>` names read by `ApiConfig::from_document`
pub const META_API_BASE: &str = "todos-api-base";
pub const META_USER: &str = "todos-user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub user: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_USER)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str, user: &str) -> Self {
        let user = user.trim();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            user: if user.is_empty() { DEFAULT_USER } else { user }.to_string(),
        }
    }

    /// Build from optional overrides, falling back to the defaults
    pub fn with_overrides(base_url: Option<String>, user: Option<String>) -> Self {
        let base_url = base_url
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self::new(&base_url, user.as_deref().unwrap_or(DEFAULT_USER))
    }

    /// Read overrides from `<meta name=... content=...>` tags in the page
    #[cfg(target_arch = "wasm32")]
    pub fn from_document() -> Self {
        Self::with_overrides(meta_content(META_API_BASE), meta_content(META_USER))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_document() -> Self {
        Self::default()
    }

    /// `{base}/users/{user}`
    pub fn user_url(&self) -> String {
        format!("{}/users/{}", self.base_url, self.encoded_user())
    }

    /// `{base}/todos/{user}`
    pub fn user_todos_url(&self) -> String {
        format!("{}/todos/{}", self.base_url, self.encoded_user())
    }

    /// `{base}/todos/{id}`
    pub fn todo_url(&self, id: TodoId) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }

    fn encoded_user(&self) -> String {
        utf8_percent_encode(&self.user, NON_ALPHANUMERIC).to_string()
    }
}

#[cfg(target_arch = "wasm32")]
fn meta_content(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}
