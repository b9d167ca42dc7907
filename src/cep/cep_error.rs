use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum CepError {
    /// Input did not contain exactly eight digits.
    InvalidLength(usize),
    Network(String),
    NotFound(u16),
    UnexpectedShape(String),
}

impl fmt::Display for CepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CepError::InvalidLength(_) => write!(f, "CEP deve ter 8 dígitos."),
            CepError::Network(msg) => write!(f, "Erro de rede ao buscar CEP: {msg}"),
            CepError::NotFound(_) => write!(f, "Erro ao buscar CEP."),
            CepError::UnexpectedShape(msg) => write!(f, "Resposta de CEP inesperada: {msg}"),
        }
    }
}

impl Error for CepError {}
