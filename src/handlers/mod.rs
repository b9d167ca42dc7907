// One module per page. Each handler gates on the session itself, does at
// most one backend call and renders the result or an inline error.
pub mod address;
pub mod auth;
pub mod dashboard;
pub mod edit;
pub mod listing;
pub mod new_listing;
pub mod search;

use crate::api::ApiError;
use crate::forms::Fields;
use crate::notice::Notice;

pub const CONNECTION_ERROR: &str = "Erro de conexão com o servidor.";

/// Status for a page re-rendered after the backend refused a request:
/// client errors are passed through, anything else is a bad gateway.
pub(crate) fn relay_status(err: &ApiError) -> u16 {
    match err.status() {
        Some(s) if (400..500).contains(&s) => s,
        _ => 502,
    }
}

pub(crate) fn notice_from(params: &Fields) -> Option<Notice> {
    params.get("notice").and_then(|n| Notice::from_param(n))
}
