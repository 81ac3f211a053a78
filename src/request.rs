//! Inbound and outbound envelopes of the chat endpoint

use serde::{Deserialize, Serialize};

/// Business request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest
{   /// The user message
    #[serde(default)]
    pub mensagem: Option<String>
}

impl ChatRequest
{   /// Parse a raw body; anything without a non-empty
    /// string `mensagem` is a missing message
    pub fn message_from_body(body: &[u8])
      -> Result<String, crate::error::Error>
    {   let value: serde_json::Value = serde_json::from_slice(body)
          .map_err(|_| crate::error::Error::MissingMessage)?;
        if !value.is_object()
        {   return Err(crate::error::Error::MissingMessage);
        }
        let request: ChatRequest = serde_json::from_value(value)
          .map_err(|_| crate::error::Error::MissingMessage)?;
        request.mensagem
          .filter(|m| !m.is_empty())
          .ok_or(crate::error::Error::MissingMessage)
    }
}

/// Response body for every business outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse
{   /// Reply text, always present
    pub resposta: String
  , /// Which branch produced the reply
    pub modo: crate::Mode
  , /// Tokens used by the upstream call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<u64>
  , /// Failure description in fallback mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erro: Option<String>
}

impl ChatResponse
{   pub fn development(resposta: String) -> Self
    {   ChatResponse
        {   resposta
          , modo: crate::Mode::Development
          , tokens: None
          , erro: None
        }
    }

    pub fn live(completion: crate::providers::Completion) -> Self
    {   ChatResponse
        {   resposta: completion.text
          , modo: crate::Mode::Live
          , tokens: completion.tokens_used
          , erro: None
        }
    }

    pub fn fallback(error: &crate::error::Error) -> Self
    {   ChatResponse
        {   resposta: crate::persona::FALLBACK_REPLY.to_string()
          , modo: crate::Mode::Fallback
          , tokens: None
          , erro: Some(error.to_string())
        }
    }
}

/// Body of 400/405 responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody
{   pub error: String
}
