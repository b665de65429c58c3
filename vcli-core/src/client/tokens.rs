//! API token endpoints

use reqwest::{Method, StatusCode};
use tracing::info;

use super::envelope::decode_envelope;
use super::session::ApplianceClient;
use crate::error::{VcliError, VcliResult};
use crate::types::token::{TokenListResponse, TokenRequest};
use crate::types::{ApiToken, TokenStatus};
use crate::validation::validate_token_description;

pub(crate) const TOKEN: &str = "Token";

impl ApplianceClient {
    pub async fn tokens(&self) -> VcliResult<Vec<ApiToken>> {
        let response: TokenListResponse = self.get_json("get api tokens", TOKEN).await?;
        Ok(response.device.programs.token_list)
    }

    async fn submit_token(
        &self,
        method: Method,
        operation: &str,
        request: &TokenRequest<'_>,
    ) -> VcliResult<ApiToken> {
        validate_token_description(request.description)?;

        let body = self
            .send(operation, self.request(method, TOKEN).json(request))
            .await?;
        let token: ApiToken = decode_envelope(body.code, operation, &body.bytes)?.object()?;

        info!(status = %token.status, description = %token.description, "{}", operation);
        Ok(token)
    }

    pub async fn create_token(&self, readonly: bool, description: &str) -> VcliResult<ApiToken> {
        let request = TokenRequest {
            description,
            status: TokenStatus::from_readonly(readonly),
            token: None,
        };
        self.submit_token(Method::POST, "create api token", &request).await
    }

    pub async fn edit_token(
        &self,
        readonly: bool,
        description: &str,
        token: &str,
    ) -> VcliResult<ApiToken> {
        let request = TokenRequest {
            description,
            status: TokenStatus::from_readonly(readonly),
            token: Some(token),
        };
        self.submit_token(Method::PUT, "edit api token", &request).await
    }

    /// A non-200 answer is returned as the status error unchanged.
    pub async fn delete_token(&self, token: &str) -> VcliResult<()> {
        let path = format!("{}/{}", TOKEN, token);
        let response = self
            .request(Method::DELETE, &path)
            .send()
            .await
            .map_err(|e| VcliError::transport(format!("delete api token: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(VcliError::status(status.as_u16(), "failed to delete api token"));
        }

        info!("api token deleted");
        Ok(())
    }
}
