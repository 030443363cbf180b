use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

use crate::api::hetzner::API_BASE_URL;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "API token cannot be empty"))]
    #[serde(default)]
    pub api_token: Cow<'static, str>,

    #[validate(url(message = "Base URL must be a valid URL"))]
    #[serde(default = "default_base_url")]
    pub base_url: Cow<'static, str>,

    // Delay before a search string is applied. 0 filters on every input.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    #[validate(range(min = 1, message = "Request timeout must be greater than 0"))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: Cow::Borrowed(""),
            base_url: default_base_url(),
            search_debounce_ms: default_search_debounce_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_base_url() -> Cow<'static, str> {
    Cow::Borrowed(API_BASE_URL)
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_request_timeout_secs() -> u64 {
    30
}
