//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::callback::CallbackParams;
use crate::domain::claims::IdTokenClaims;

// ============================================================================
// Callback
// ============================================================================

/// Query string the provider redirects back with
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl From<CallbackQuery> for CallbackParams {
    fn from(query: CallbackQuery) -> Self {
        Self {
            code: query.code,
            state: query.state,
            error: query.error,
            error_description: query.error_description,
        }
    }
}

// ============================================================================
// User
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    #[serde(default)]
    pub fetch_user_info: bool,
}

/// `GET /api/logto/user` response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogtoUserResponse {
    pub is_authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<IdTokenClaims>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info: Option<Value>,
}

// ============================================================================
// Manual Sign Out
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ManualSignOutResponse {
    pub success: bool,
}

/// Plain `{ "error": ... }` body used where the problem format is not expected
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

// ============================================================================
// Debug Cookies
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieSummary {
    pub name: String,
    pub has_value: bool,
    pub value_length: usize,
}

/// Cookie names and sizes only; values never leave the server.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugCookiesResponse {
    pub cookie_names: Vec<String>,
    pub count: usize,
    pub cookies: Vec<CookieSummary>,
}
