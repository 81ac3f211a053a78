use std::sync::Arc;
use log::{debug, error, info};

use crate::error::Error;
use crate::persona::{RandomSelector, ReplySelector};
use crate::providers::DeepSeekClient;
use crate::request::{ChatRequest, ChatResponse};

/// Verbs the chat endpoint distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb
{   /// Business call
    Post
  , /// Pre-flight, answered with an empty body
    Options
  , /// Anything else
    Other
}

impl Verb
{   pub fn from_method(method: &str) -> Self
    {   match method
        {   "POST" => Verb::Post
          , "OPTIONS" => Verb::Options
          , _ => Verb::Other
        }
    }
}

/// Proxies one message to DeepSeek and normalizes the answer
///
/// Holds no per-request state; clone it freely into handlers
#[derive(Clone)]
pub struct ChatGateway
{   upstream: Option<DeepSeekClient>
  , selector: Arc<dyn ReplySelector>
}

impl ChatGateway
{   /// Create a gateway with uniform random development replies
    pub fn new(
      config: &crate::config::GatewayConfig
    ) -> Result<Self, Error>
    {   Self::with_selector(config, Arc::new(RandomSelector))
    }

    /// Create a gateway with an injected reply selector
    pub fn with_selector(
      config: &crate::config::GatewayConfig
    , selector: Arc<dyn ReplySelector>
    ) -> Result<Self, Error>
    {   let upstream = match &config.api_key
        {   Some(key) => Some(DeepSeekClient::new(key.clone(), config)?)
          , None => {
              info!("No DEEPSEEK_API_KEY configured, development mode");
              None
            }
        };
        Ok(ChatGateway
        {   upstream
          , selector
        })
    }

    /// Whether live calls are possible
    pub fn is_live(&self) -> bool
    {   self.upstream.is_some()
    }

    /// Validate verb and body, then answer
    ///
    /// `Ok(None)` is the empty pre-flight answer. Only client
    /// errors are returned as `Err`.
    pub async fn handle(
      &self
    , verb: Verb
    , body: &[u8]
    ) -> Result<Option<ChatResponse>, Error>
    {   match verb
        {   Verb::Options => {
              debug!("Pre-flight request");
              Ok(None)
            }
          , Verb::Other => Err(Error::MethodNotAllowed)
          , Verb::Post => {
              let message = ChatRequest::message_from_body(body)?;
              Ok(Some(self.reply(&message).await))
            }
        }
    }

    /// Answer a validated message; never fails
    pub async fn reply(&self, message: &str) -> ChatResponse
    {   info!("Message received: {}...", truncate(message, 50));

        let upstream = match &self.upstream
        {   Some(upstream) => upstream
          , None => {
              info!("Development mode, simulating reply");
              let reply = crate::persona::development_reply(
                self.selector.as_ref()
              );
              return ChatResponse::development(reply.to_string());
            }
        };

        info!("Connecting to DeepSeek");
        match upstream.complete(message).await
        {   Ok(completion) => {
              info!(
                "Reply received: {}...",
                truncate(&completion.text, 100)
              );
              ChatResponse::live(completion)
            }
          , Err(e) => {
              error!("Upstream failure, using fallback: {}", e);
              ChatResponse::fallback(&e)
            }
        }
    }
}

/// First `max` chars, never splitting a code point
fn truncate(text: &str, max: usize) -> &str
{   match text.char_indices().nth(max)
    {   Some((idx, _)) => &text[..idx]
      , None => text
    }
}

