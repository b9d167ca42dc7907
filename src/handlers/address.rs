use crate::app::App;
use crate::cep::{normalize_cep, CepError};
use crate::forms::{parse_query, AddressFields};
use crate::responses::{html_response, ResultResp};
use crate::templates::components::address_fields;
use astra::Request;

const NOT_FOUND: &str = "CEP não encontrado. Preencha o endereço manualmente.";

/// Partial: the address fieldset, filled from the CEP when it has exactly
/// eight digits. Always 200 so the page script swaps the fragment in.
pub fn lookup(req: &Request, app: &App) -> ResultResp {
    let mut addr = AddressFields::from_fields(&parse_query(req));

    let error = match normalize_cep(&addr.cep) {
        // Still typing: nothing to look up yet.
        Err(CepError::InvalidLength(_)) => None,
        Err(_) => Some(NOT_FOUND),
        Ok(digits) => match app.addresses.lookup(&digits) {
            Ok(found) => {
                addr.fill_from(&found);
                None
            }
            Err(err) => {
                tracing::info!(cep = %digits, error = %err, "address lookup failed");
                Some(NOT_FOUND)
            }
        },
    };

    html_response(address_fields(&addr, error))
}
