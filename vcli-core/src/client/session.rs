//! HTTP session with the appliance
//!
//! Two transports exist: loopback HTTP without authentication, and HTTPS to a
//! remote host with a static `Authorization` header. Remote appliances
//! commonly run self-signed certificates, so certificate validation is off in
//! that mode. Every request shares one timeout and nothing is retried.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{Endpoint, VcliConfig};
use crate::error::{VcliError, VcliResult};

/// A 200 response body together with its status code.
#[derive(Debug)]
pub(crate) struct Body {
    pub code: u16,
    pub bytes: Vec<u8>,
}

/// Client for the appliance REST API.
#[derive(Debug, Clone)]
pub struct ApplianceClient {
    http: Client,
    base_url: String,
    remote: bool,
}

impl ApplianceClient {
    pub fn new(config: &VcliConfig) -> VcliResult<Self> {
        config.validate()?;

        let mut builder = Client::builder().timeout(config.request_timeout);

        if let Endpoint::Remote { token, .. } = &config.endpoint {
            let mut headers = HeaderMap::new();
            let value = HeaderValue::from_str(token)
                .map_err(|e| VcliError::configuration("token", e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
            builder = builder
                .default_headers(headers)
                .danger_accept_invalid_certs(true);
        }

        let http = builder
            .build()
            .map_err(|e| VcliError::configuration("http client", e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url(),
            remote: config.endpoint.is_remote(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_remote(&self) -> bool {
        self.remote
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "appliance request");
        self.http.request(method, url)
    }

    /// Send a request and return the body of a 200 response.
    pub(crate) async fn send(&self, operation: &str, request: RequestBuilder) -> VcliResult<Body> {
        let response = request
            .send()
            .await
            .map_err(|e| VcliError::transport(format!("{}: {}", operation, e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(VcliError::status(
                status.as_u16(),
                format!("failed to {}", operation),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| VcliError::decode(status.as_u16(), operation, e))?;

        Ok(Body {
            code: status.as_u16(),
            bytes: bytes.to_vec(),
        })
    }

    /// GET `path` and decode its JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
    ) -> VcliResult<T> {
        let body = self.send(operation, self.request(Method::GET, path)).await?;
        serde_json::from_slice(&body.bytes).map_err(|e| VcliError::decode(body.code, operation, e))
    }
}
