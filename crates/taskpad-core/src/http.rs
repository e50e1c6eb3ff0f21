//! Native transport over `reqwest`,
//! for running the client outside the
//! browser.

use reqwest::header::{
  ACCEPT,
  CONTENT_TYPE
};

use crate::api::{
  ApiRequest,
  ApiResponse,
  JSON_CONTENT_TYPE,
  Method,
  Transport
};
use crate::error::ApiError;

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
  client: reqwest::Client
}

impl ReqwestTransport {
  pub fn with_client(
    client: reqwest::Client
  ) -> Self {
    Self { client }
  }
}

impl Transport for ReqwestTransport {
  async fn send(
    &self,
    request: ApiRequest
  ) -> Result<ApiResponse, ApiError> {
    let method = match request.method {
      | Method::Get => reqwest::Method::GET,
      | Method::Post => {
        reqwest::Method::POST
      }
      | Method::Put => reqwest::Method::PUT,
      | Method::Patch => {
        reqwest::Method::PATCH
      }
      | Method::Delete => {
        reqwest::Method::DELETE
      }
    };

    let mut builder = self
      .client
      .request(method, request.url.as_str())
      .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
      .header(ACCEPT, JSON_CONTENT_TYPE);
    if let Some(body) = &request.body {
      let bytes = serde_json::to_vec(body)
        .map_err(|err| {
          ApiError::Encode(err.to_string())
        })?;
      builder = builder.body(bytes);
    }

    let response =
      builder.send().await.map_err(
        |err| {
          ApiError::Transport(
            err.to_string()
          )
        }
      )?;
    let status = response.status().as_u16();
    let body =
      response.text().await.map_err(
        |err| {
          ApiError::Transport(
            err.to_string()
          )
        }
      )?;

    Ok(ApiResponse { status, body })
  }
}
