use crate::api::ApiError;
use crate::app::App;
use crate::errors::ServerError;
use crate::forms::{
    check_photo_sizes, into_uploads, multipart_boundary, parse_multipart, read_body,
    NewListingForm,
};
use crate::guard::{Gate, CREATE_LISTING};
use crate::handlers::{relay_status, CONNECTION_ERROR};
use crate::notice::Notice;
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::session::Session;
use crate::templates::pages::{new_listing_page, NewListingVm};
use astra::Request;

pub fn new_form(req: &Request, app: &App) -> ResultResp {
    let session = Session::from_headers(req.headers());
    if let Gate::Redirect(to) = CREATE_LISTING.check(&session) {
        return redirect(to);
    }

    let form = NewListingForm::default();
    let vm = NewListingVm {
        form: &form,
        error: None,
        max_photo_bytes: app.settings.max_photo_bytes,
    };
    html_response(new_listing_page(&session, &vm))
}

pub fn create(mut req: Request, app: &App) -> ResultResp {
    let session = Session::from_headers(req.headers());
    let token = match CREATE_LISTING.check(&session) {
        Gate::Allow { token } => token.to_string(),
        Gate::Redirect(to) => return redirect(to),
    };

    let boundary = multipart_boundary(&req)
        .ok_or_else(|| ServerError::BadRequest("expected multipart/form-data".into()))?;
    let body = read_body(&mut req, app.settings.max_request_bytes)?;
    let submitted = parse_multipart(&body, &boundary)?;

    let form = NewListingForm::from_fields(&submitted.fields);
    let render_error = |status: u16, message: &str| {
        let vm = NewListingVm {
            form: &form,
            error: Some(message),
            max_photo_bytes: app.settings.max_photo_bytes,
        };
        html_response_with_status(status, new_listing_page(&session, &vm))
    };

    if let Err(message) = check_photo_sizes(&submitted.files, app.settings.max_photo_bytes) {
        return render_error(413, &message);
    }

    let payload = match form.to_payload() {
        Ok(payload) => payload,
        Err(message) => return render_error(422, &message),
    };

    let photos = into_uploads(submitted.files);
    let photo_count = photos.len();

    match app.api.create_listing(&token, &payload, photos) {
        Ok(()) => {
            tracing::info!(name = %payload.name, photos = photo_count, "listing created");
            redirect(&Notice::ListingCreated.location("/"))
        }
        Err(err) => {
            tracing::warn!(error = %err, "create listing failed");
            render_error(relay_status(&err), &create_failure_message(&err))
        }
    }
}

fn create_failure_message(err: &ApiError) -> String {
    if err.is_network() {
        return CONNECTION_ERROR.to_string();
    }

    match err.status() {
        Some(413) => format!(
            "⚠️ Atenção: {}",
            err.backend_message().unwrap_or("Os arquivos são muito grandes.")
        ),
        Some(403) => "Erro: Você não tem permissão para realizar esta ação.".to_string(),
        _ => format!(
            "Erro: {}",
            err.backend_message()
                .unwrap_or("Erro ao cadastrar. Verifique os dados.")
        ),
    }
}
