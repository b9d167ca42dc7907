// src/notice.rs
//
// One-shot messages carried across a redirect in the `notice` query
// parameter, shown by the page the user lands on.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ListingCreated,
    ListingUpdated,
    Registered,
    ListingLoadFailed,
    ConnectionFailed,
}

impl Notice {
    pub fn as_param(&self) -> &'static str {
        match self {
            Notice::ListingCreated => "listing-created",
            Notice::ListingUpdated => "listing-updated",
            Notice::Registered => "registered",
            Notice::ListingLoadFailed => "listing-load-failed",
            Notice::ConnectionFailed => "connection-failed",
        }
    }

    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "listing-created" => Some(Notice::ListingCreated),
            "listing-updated" => Some(Notice::ListingUpdated),
            "registered" => Some(Notice::Registered),
            "listing-load-failed" => Some(Notice::ListingLoadFailed),
            "connection-failed" => Some(Notice::ConnectionFailed),
            _ => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::ListingCreated => "Kitnet cadastrada com sucesso!",
            Notice::ListingUpdated => "Kitnet atualizada com sucesso!",
            Notice::Registered => "Conta criada com sucesso! Faça login para continuar.",
            Notice::ListingLoadFailed => "Erro ao buscar dados da kitnet.",
            Notice::ConnectionFailed => "Erro ao conectar com o servidor.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::ListingLoadFailed | Notice::ConnectionFailed)
    }

    /// `path` with this notice appended as the query string.
    pub fn location(&self, path: &str) -> String {
        format!("{path}?notice={}", self.as_param())
    }
}
