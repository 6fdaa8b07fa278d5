use serde::Serialize;

pub mod contact;

/// Response envelope of the JSON endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl ApiResult {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: &'static str) -> Self {
        Self {
            success: false,
            error: Some(error),
        }
    }
}
