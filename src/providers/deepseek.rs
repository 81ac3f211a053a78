use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   #[serde(default)]
    pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: &str) -> Self
    {   ChatMessage
        {   role: "system".to_string()
          , content: content.to_string()
        }
    }

    pub fn user(content: &str) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.to_string()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepSeekChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub max_tokens: usize
  , pub temperature: f32
  , pub stream: bool
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeepSeekChatResponse
{   #[serde(default)]
    pub choices: Vec<Choice>
  , #[serde(default)]
    pub usage: Option<Usage>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   #[serde(default)]
    pub message: Option<ChatMessage>
  , #[serde(default)]
    pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage
{   #[serde(default)]
    pub total_tokens: Option<u64>
}

impl DeepSeekChatResponse
{   /// First choice's message, or a shape error
    pub fn into_completion(self)
      -> Result<super::Completion, crate::error::Error>
    {   let tokens_used = self.usage.and_then(|u| u.total_tokens);
        self.choices.into_iter()
          .next()
          .and_then(|c| c.message)
          .map(|m| super::Completion
            {   text: m.content
              , tokens_used
            })
          .ok_or_else(|| {
            error!("No choices in response");
            crate::error::Error::NoChoicesInResponse
          })
    }
}

// ===== DeepSeek Client =====

/// Single-attempt client for the chat-completion endpoint
#[derive(Debug, Clone)]
pub struct DeepSeekClient
{   api_key: String
  , url: String
  , model: String
  , max_tokens: usize
  , temperature: f32
  , http_client: reqwest::Client
}

impl DeepSeekClient
{   pub fn new(
      api_key: String
    , config: &crate::config::GatewayConfig
    ) -> Result<Self, crate::error::Error>
    {   debug!("Creating DeepSeekClient for {}", config.api_base);
        let http_client = reqwest::Client::builder()
          .timeout(config.timeout())
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            crate::error::Error::InvalidConfiguration(e.to_string())
          })?;

        Ok(DeepSeekClient
        {   api_key
          , url: config.completions_url()
          , model: config.model.clone()
          , max_tokens: config.max_tokens
          , temperature: config.temperature
          , http_client
        })
    }

    /// Payload for one user message under the persona prompt
    pub fn build_request(&self, message: &str) -> DeepSeekChatRequest
    {   DeepSeekChatRequest
        {   model: self.model.clone()
          , messages: vec![
              ChatMessage::system(crate::persona::PERSONA_PROMPT)
            , ChatMessage::user(message)
            ]
          , max_tokens: self.max_tokens
          , temperature: self.temperature
          , stream: false
        }
    }

    /// One upstream attempt, no retry
    pub async fn complete(
      &self
    , message: &str
    ) -> Result<super::Completion, crate::error::Error>
    {   let request = self.build_request(message);
        trace!("DeepSeek request: {:?}", request);

        let response = self.http_client
          .post(&self.url)
          .header("Authorization", format!("Bearer {}", self.api_key))
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::from(e)
          })?;

        let status = response.status();
        trace!("DeepSeek response status: {}", status);

        if !status.is_success()
        {   error!("DeepSeek API error status: {}", status);
            return Err(crate::error::Error::UpstreamStatus(
              status.as_u16()
            ));
        }

        // Body read failures are transport errors, not shape errors
        let bytes = response.bytes().await.map_err(|e| {
          error!("Failed reading response body: {}", e);
          crate::error::Error::from(e)
        })?;

        let chat_response: DeepSeekChatResponse
          = serde_json::from_slice(&bytes).map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        chat_response.into_completion()
    }
}
