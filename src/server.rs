//! HTTP surface: one CORS-enabled JSON endpoint

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use log::{debug, error};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::client::{ChatGateway, Verb};
use crate::error::Error;
use crate::request::ErrorBody;

pub const CHAT_ROUTE: &str = "/api/chat";

/// Build the router; every response carries the CORS headers
pub fn router(gateway: ChatGateway) -> Router
{   Router::new()
      .route(CHAT_ROUTE, any(chat_handler))
      .layer(SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN
      , HeaderValue::from_static("*")
      ))
      .layer(SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_METHODS
      , HeaderValue::from_static("POST, OPTIONS")
      ))
      .layer(SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_HEADERS
      , HeaderValue::from_static("Content-Type")
      ))
      .with_state(gateway)
}

/// `ANY /api/chat`
async fn chat_handler(
  State(gateway): State<ChatGateway>
, method: Method
, body: Bytes
) -> Response
{   debug!("{} {}", method, CHAT_ROUTE);
    match gateway.handle(Verb::from_method(method.as_str()), &body).await
    {   Ok(None) => StatusCode::OK.into_response()
      , Ok(Some(reply)) => (StatusCode::OK, Json(reply)).into_response()
      , Err(e) => e.into_response()
    }
}

impl IntoResponse for Error
{   fn into_response(self) -> Response
    {   let status = match &self
        {   Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED
          , e if e.is_client_error() => StatusCode::BAD_REQUEST
          , other => {
              // ChatGateway downgrades these before they get here
              error!("Unexpected error reached HTTP layer: {}", other);
              StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(ErrorBody
        {   error: self.to_string()
        });
        (status, body).into_response()
    }
}
