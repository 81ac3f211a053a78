//! Upstream provider implementations

pub mod deepseek;

// Re-export for convenience
pub use deepseek::DeepSeekClient;

/// Reply extracted from a well-formed upstream response
#[derive(Debug, Clone, PartialEq)]
pub struct Completion
{   pub text: String
  , pub tokens_used: Option<u64>
}
