use crate::api::SearchQuery;
use crate::app::App;
use crate::forms::parse_query;
use crate::handlers::notice_from;
use crate::responses::{html_response_with_status, ResultResp};
use crate::session::Session;
use crate::templates::pages::{home_page, SearchVm};
use astra::Request;

const SEARCH_FAILED: &str = "Não foi possível buscar as kitnets. Verifique o servidor Backend.";

pub fn search(req: &Request, app: &App) -> ResultResp {
    let session = Session::from_headers(req.headers());
    let params = parse_query(req);

    let query = SearchQuery {
        cep: params.get("cep").cloned().unwrap_or_default(),
        min: params.get("min").cloned().unwrap_or_default(),
        max: params.get("max").cloned().unwrap_or_default(),
    };

    let found = app.api.search(&query);
    let (status, results) = match &found {
        Ok(listings) => (200, Ok(listings.as_slice())),
        Err(err) => {
            tracing::warn!(error = %err, "search failed");
            (502, Err(SEARCH_FAILED))
        }
    };

    let vm = SearchVm {
        query: &query,
        results,
        notice: notice_from(&params),
    };
    html_response_with_status(status, home_page(&session, &vm))
}
