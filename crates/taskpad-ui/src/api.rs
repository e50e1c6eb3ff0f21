use gloo::net::http::Request;
use taskpad_core::api::JSON_CONTENT_TYPE;
use taskpad_core::{
  ApiError,
  ApiRequest,
  ApiResponse,
  Method,
  Transport
};

/// Browser `fetch` transport. Relative
/// urls resolve against the page
/// origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
  async fn send(
    &self,
    request: ApiRequest
  ) -> Result<ApiResponse, ApiError> {
    let url = request.url.as_str();
    let builder = match request.method {
      | Method::Get => Request::get(url),
      | Method::Post => Request::post(url),
      | Method::Put => Request::put(url),
      | Method::Patch => Request::patch(url),
      | Method::Delete => {
        Request::delete(url)
      }
    }
    .header("Content-Type", JSON_CONTENT_TYPE)
    .header("Accept", JSON_CONTENT_TYPE);

    let prepared = match &request.body {
      | Some(body) => builder.json(body),
      | None => builder.build()
    }
    .map_err(|e| {
      ApiError::Encode(format!(
        "failed to build request: {e}"
      ))
    })?;

    let response =
      prepared.send().await.map_err(|e| {
        ApiError::Transport(format!(
          "fetch error: {e}"
        ))
      })?;
    let status = response.status();
    let body =
      response.text().await.map_err(|e| {
        ApiError::Transport(format!(
          "failed to read body: {e}"
        ))
      })?;

    Ok(ApiResponse { status, body })
  }
}
