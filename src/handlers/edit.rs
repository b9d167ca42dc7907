use crate::app::App;
use crate::forms::{read_form, ListingFields};
use crate::guard::{Gate, EDIT_LISTING};
use crate::handlers::{relay_status, CONNECTION_ERROR};
use crate::notice::Notice;
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::session::Session;
use crate::templates::pages::{edit_listing_page, EditListingVm};
use astra::Request;

const DASHBOARD_PATH: &str = "/dashboard/listings";

pub fn edit_form(req: &Request, app: &App, id: &str) -> ResultResp {
    let session = Session::from_headers(req.headers());
    if let Gate::Redirect(to) = EDIT_LISTING.check(&session) {
        return redirect(to);
    }

    let listing = match app.api.get_listing(id) {
        Ok(listing) => listing,
        Err(err) => {
            tracing::warn!(id, error = %err, "could not load listing for edit");
            let notice = if err.is_network() {
                Notice::ConnectionFailed
            } else {
                Notice::ListingLoadFailed
            };
            return redirect(&notice.location(DASHBOARD_PATH));
        }
    };

    let form = ListingFields::from_listing(&listing);
    let vm = EditListingVm {
        id,
        form: &form,
        error: None,
    };
    html_response(edit_listing_page(&session, &vm))
}

pub fn update(mut req: Request, app: &App, id: &str) -> ResultResp {
    let session = Session::from_headers(req.headers());
    let token = match EDIT_LISTING.check(&session) {
        Gate::Allow { token } => token.to_string(),
        Gate::Redirect(to) => return redirect(to),
    };

    let fields = read_form(&mut req, app.settings.max_form_bytes)?;
    let form = ListingFields::from_fields(&fields);
    let render_error = |status: u16, message: &str| {
        let vm = EditListingVm {
            id,
            form: &form,
            error: Some(message),
        };
        html_response_with_status(status, edit_listing_page(&session, &vm))
    };

    let update = match form.to_update() {
        Ok(update) => update,
        Err(message) => return render_error(422, &message),
    };

    match app.api.update_listing(&token, id, &update) {
        Ok(()) => {
            tracing::info!(id, "listing updated");
            redirect(&Notice::ListingUpdated.location(DASHBOARD_PATH))
        }
        Err(err) if err.is_network() => render_error(502, CONNECTION_ERROR),
        Err(err) => {
            tracing::warn!(id, error = %err, "update listing failed");
            let detail = match (err.backend_message(), &err) {
                (Some(m), _) => m.to_string(),
                (None, crate::api::ApiError::Status { reason, .. }) => reason.clone(),
                (None, other) => other.to_string(),
            };
            render_error(relay_status(&err), &format!("Erro ao atualizar: {detail}"))
        }
    }
}
