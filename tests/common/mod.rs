#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use lumi_gateway::GatewayConfig;
use lumi_gateway::persona::ReplySelector;

/// What the fake upstream saw
#[derive(Clone, Default)]
pub struct Recorded
{   pub hits: Arc<AtomicUsize>
  , pub body: Arc<Mutex<Option<serde_json::Value>>>
  , pub auth: Arc<Mutex<Option<String>>>
}

impl Recorded
{   pub fn hits(&self) -> usize
    {   self.hits.load(Ordering::SeqCst)
    }

    pub fn body(&self) -> serde_json::Value
    {   self.body.lock().unwrap().clone().expect("no request recorded")
    }

    pub fn auth(&self) -> Option<String>
    {   self.auth.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct Canned
{   status: StatusCode
  , body: String
  , delay: Duration
  , recorded: Recorded
}

async fn completions(
  State(canned): State<Canned>
, headers: HeaderMap
, body: Bytes
) -> impl IntoResponse
{   canned.recorded.hits.fetch_add(1, Ordering::SeqCst);
    *canned.recorded.auth.lock().unwrap() = headers
      .get(header::AUTHORIZATION)
      .and_then(|v| v.to_str().ok())
      .map(str::to_string);
    *canned.recorded.body.lock().unwrap()
      = serde_json::from_slice(&body).ok();

    tokio::time::sleep(canned.delay).await;
    (
      canned.status
    , [(header::CONTENT_TYPE, "application/json")]
    , canned.body
    )
}

/// Serve a fake chat-completion endpoint, returning its base URL
pub async fn spawn_upstream(
  status: u16
, body: &str
, delay: Duration
) -> (String, Recorded)
{   let recorded = Recorded::default();
    let canned = Canned
    {   status: StatusCode::from_u16(status).unwrap()
      , body: body.to_string()
      , delay
      , recorded: recorded.clone()
    };
    let app = Router::new()
      .route("/chat/completions", post(completions))
      .with_state(canned);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
      .await
      .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
      axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), recorded)
}

/// Base URL of a port nothing listens on
pub fn dead_upstream() -> String
{   let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn live_config(api_base: &str) -> GatewayConfig
{   GatewayConfig
    {   api_key: Some("test-key".to_string())
      , api_base: api_base.to_string()
      , timeout_ms: 2_000
      , ..GatewayConfig::default()
    }
}

pub fn dev_config() -> GatewayConfig
{   GatewayConfig::default()
}

/// Always picks the same index
pub struct FixedSelector(pub usize);

impl ReplySelector for FixedSelector
{   fn select(&self, _len: usize) -> usize
    {   self.0
    }
}

pub const LIVE_BODY: &str = r#"{
  "id": "chatcmpl-1",
  "choices": [
    {
      "index": 0,
      "message": { "role": "assistant", "content": "🎯 Faça 25 minutos de foco!" },
      "finish_reason": "stop"
    }
  ],
  "usage": { "prompt_tokens": 30, "completion_tokens": 12, "total_tokens": 42 }
}"#;

/// Raw upstream that promises `content_length` bytes, sends
/// `body` and then closes the connection
pub async fn spawn_truncating_upstream(
  content_length: usize
, body: &str
) -> String
{   use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
      .await
      .unwrap();
    let addr = listener.local_addr().unwrap();
    let body = body.to_string();
    tokio::spawn(async move {
      let (mut socket, _) = listener.accept().await.unwrap();

      // Consume the whole request before answering
      let mut request = Vec::new();
      let mut buf = [0u8; 4096];
      loop
      {   let n = socket.read(&mut buf).await.unwrap();
          if n == 0
          {   break;
          }
          request.extend_from_slice(&buf[..n]);
          if request_complete(&request)
          {   break;
          }
      }

      let head = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n",
        content_length
      );
      socket.write_all(head.as_bytes()).await.unwrap();
      socket.write_all(body.as_bytes()).await.unwrap();
      socket.flush().await.unwrap();
      drop(socket);
    });

    format!("http://{}", addr)
}

fn request_complete(request: &[u8]) -> bool
{   let text = String::from_utf8_lossy(request);
    let Some(end) = text.find("\r\n\r\n")
    else
    {   return false;
    };
    let length = text[..end]
      .lines()
      .find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.trim().eq_ignore_ascii_case("content-length")
        {   value.trim().parse::<usize>().ok()
        } else
        {   None
        }
      })
      .unwrap_or(0);
    request.len() >= end + 4 + length
}
