use serde::{Deserialize, Serialize};
use std::fmt;

/// Access level of an API token; the appliance encodes it as 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TokenStatus {
    ReadOnly,
    #[default]
    ReadWrite,
}

impl TokenStatus {
    pub fn from_readonly(readonly: bool) -> Self {
        if readonly {
            TokenStatus::ReadOnly
        } else {
            TokenStatus::ReadWrite
        }
    }

    pub fn is_readonly(self) -> bool {
        self == TokenStatus::ReadOnly
    }
}

impl TryFrom<u8> for TokenStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TokenStatus::ReadOnly),
            2 => Ok(TokenStatus::ReadWrite),
            other => Err(format!("unknown token status {}", other)),
        }
    }
}

impl From<TokenStatus> for u8 {
    fn from(value: TokenStatus) -> Self {
        match value {
            TokenStatus::ReadOnly => 1,
            TokenStatus::ReadWrite => 2,
        }
    }
}

impl fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenStatus::ReadOnly => f.write_str("read only"),
            TokenStatus::ReadWrite => f.write_str("read/write"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ApiToken {
    pub token: String,
    pub status: TokenStatus,
    pub description: String,
    pub level: String,
}

impl ApiToken {
    /// Placeholder rows the appliance returns carry short or empty tokens.
    pub fn is_manageable(&self) -> bool {
        self.token.len() > 10
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct TokenRequest<'a> {
    pub description: &'a str,
    pub status: TokenStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenListResponse {
    #[serde(rename = "Device")]
    pub device: TokenListDevice,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenListDevice {
    #[serde(rename = "Programs")]
    pub programs: TokenListContext,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenListContext {
    #[serde(rename = "TokenList", default)]
    pub token_list: Vec<ApiToken>,
}
