pub mod error;
pub mod config;
pub mod persona;
pub mod providers;
pub mod request;
pub mod client;
pub mod server;
use serde::{Deserialize, Serialize};

/*

lumi-gateway: the backend of the Lumi study mentor.
One endpoint takes a student's message, forwards it to
DeepSeek under the Lumi persona and always answers with
a reply the UI can show.

lumi-gateway/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and wire constants
│   ├── main.rs         # HTTP server binary
│   ├── error.rs        # Error taxonomy
│   ├── config.rs       # GatewayConfig, env loading
│   ├── client.rs       # ChatGateway: validation + fallback policy
│   ├── persona.rs      # Persona prompt, canned replies, selector
│   ├── request.rs      # Inbound/outbound envelopes
│   ├── server.rs       # axum router, CORS headers
│   └── providers/
│       ├── mod.rs
│       └── deepseek.rs # DeepSeek chat-completion client
└── tests/

*/

pub use client::{ChatGateway, Verb};
pub use config::GatewayConfig;
pub use error::Error;
pub use request::{ChatRequest, ChatResponse};

/// Which branch produced a reply; serialized as `modo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash)]
pub enum Mode
{   /// No credential configured, canned local reply
    #[serde(rename = "desenvolvimento")]
    Development
  , /// Reply from the live upstream
    #[serde(rename = "deepseek")]
    Live
  , /// Credential configured but the live call failed
    #[serde(rename = "fallback")]
    Fallback
}
