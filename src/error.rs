use std::fmt;

/// Error type for gateway operations
/// Implements Clone so a failure can be logged and still
/// be carried into the fallback envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Request used a verb other than POST or OPTIONS
    MethodNotAllowed
  , /// Request body carried no usable `mensagem`
    MissingMessage
  , /// Upstream answered with a non-success status
    UpstreamStatus(u16)
  , /// Upstream body could not be decoded
    ParseError(String)
  , /// Upstream body had no choice with a message
    NoChoicesInResponse
  , /// Network failure reaching upstream
    HttpError(String)
  , /// Upstream did not answer within the wait budget
    Timeout
  , /// Invalid configuration
    InvalidConfiguration(String)
}

impl Error
{   /// Client errors are the only ones surfaced as a
    /// non-200 status; everything else is downgraded
    pub fn is_client_error(&self) -> bool
    {   matches!(self, Error::MethodNotAllowed | Error::MissingMessage)
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MethodNotAllowed => {
              write!(f, "Método não permitido")
            }
          , Error::MissingMessage => {
              write!(f, "Mensagem é obrigatória")
            }
          , Error::UpstreamStatus(status) => {
              write!(f, "Erro DeepSeek: {}", status)
            }
          , Error::ParseError(msg) => {
              write!(f, "Resposta inválida da API: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "Resposta inválida da API")
            }
          , Error::HttpError(msg) => {
              write!(f, "Falha de rede: {}", msg)
            }
          , Error::Timeout => {
              write!(f, "Tempo limite excedido")
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Configuração inválida: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   if e.is_timeout()
        {   Error::Timeout
        } else
        {   Error::HttpError(e.to_string())
        }
    }
}
