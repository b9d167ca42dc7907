use crate::app::App;
use crate::domain::gallery::Lightbox;
use crate::forms::parse_query;
use crate::responses::{html_response, html_response_with_status, ResultResp};
use crate::session::Session;
use crate::templates::pages::{listing_error_page, listing_page, ListingVm};
use astra::Request;

const LOAD_FAILED: &str = "Não foi possível carregar os detalhes da kitnet.";

pub fn show(req: &Request, app: &App, id: &str) -> ResultResp {
    let session = Session::from_headers(req.headers());

    let listing = match app.api.get_listing(id) {
        Ok(listing) => listing,
        Err(err) => {
            tracing::warn!(id, error = %err, "listing detail failed");
            let status = if err.status() == Some(404) { 404 } else { 502 };
            return html_response_with_status(status, listing_error_page(&session, LOAD_FAILED));
        }
    };

    let lightbox = parse_query(req)
        .get("photo")
        .and_then(|p| p.parse::<usize>().ok())
        .and_then(|index| Lightbox::open(index, listing.photos.len()));

    let vm = ListingVm {
        listing: &listing,
        backend_base: &app.settings.backend_base,
        lightbox,
    };
    html_response(listing_page(&session, &vm))
}
