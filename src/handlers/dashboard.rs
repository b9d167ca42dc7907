use crate::api::Listing;
use crate::app::App;
use crate::domain::pagination::{parse_page, Page};
use crate::forms::parse_query;
use crate::guard::{Gate, DASHBOARD};
use crate::handlers::notice_from;
use crate::responses::{html_response_with_status, redirect, redirect_with_cookies, ResultResp};
use crate::session::{clear_cookie_headers, Session};
use crate::templates::pages::{my_listings_page, MyListingsVm};
use astra::Request;

const LOAD_FAILED: &str = "Erro ao carregar suas kitnets.";

pub fn my_listings(req: &Request, app: &App) -> ResultResp {
    let session = Session::from_headers(req.headers());
    let token = match DASHBOARD.check(&session) {
        Gate::Allow { token } => token,
        Gate::Redirect(to) => return redirect(to),
    };

    let params = parse_query(req);

    let (status, listings, error): (u16, Vec<Listing>, Option<&str>) =
        match app.api.my_listings(token) {
            Ok(listings) => (200, listings, None),
            Err(err) if matches!(err.status(), Some(401 | 403)) => {
                tracing::info!(status = ?err.status(), "stale session, logging out");
                return redirect_with_cookies("/login", &clear_cookie_headers());
            }
            Err(err) => {
                tracing::warn!(error = %err, "my listings failed");
                (502, Vec::new(), Some(LOAD_FAILED))
            }
        };

    let per_page = app.settings.page_size;
    let page = Page::of(&listings, parse_page(params.get("page").map(String::as_str)), per_page);

    let vm = MyListingsVm {
        page,
        total: listings.len(),
        per_page,
        error,
        notice: notice_from(&params),
        backend_base: &app.settings.backend_base,
    };
    html_response_with_status(status, my_listings_page(&session, &vm))
}
