use crate::api::ApiError;
use crate::app::App;
use crate::forms::{credentials, parse_query, read_form, RegisterForm};
use crate::handlers::{notice_from, relay_status, CONNECTION_ERROR};
use crate::notice::Notice;
use crate::responses::{
    html_response, html_response_with_cookies, html_response_with_status, redirect,
    redirect_with_cookies, ResultResp,
};
use crate::session::{clear_cookie_headers, Role, Session, SessionUser};
use crate::templates::pages::{login_page, register_page};
use astra::Request;

const LOGIN_FAILED: &str = "Login falhou! Verifique email e senha.";
const REGISTER_FAILED: &str = "Erro ao criar conta. Verifique os dados (Email já existe?).";

/// Showing the login form always drops whatever session the browser had.
pub fn login_form(req: &Request) -> ResultResp {
    let params = parse_query(req);
    html_response_with_cookies(
        login_page("", None, notice_from(&params)),
        &clear_cookie_headers(),
    )
}

pub fn login(mut req: Request, app: &App) -> ResultResp {
    let fields = read_form(&mut req, app.settings.max_form_bytes)?;
    let creds = credentials(&fields);

    match app.api.login(&creds) {
        Ok(resp) => {
            let session = Session::new(
                resp.token,
                SessionUser {
                    name: resp.name,
                    role: Role::parse(&resp.role),
                },
            );
            tracing::info!(email = %creds.email, "logged in");
            redirect_with_cookies("/", &session.set_cookie_headers())
        }
        Err(ApiError::Status { status, .. }) => {
            tracing::info!(email = %creds.email, status, "login rejected");
            html_response_with_status(401, login_page(&creds.email, Some(LOGIN_FAILED), None))
        }
        Err(err) => {
            tracing::warn!(error = %err, "login failed");
            html_response_with_status(502, login_page(&creds.email, Some(CONNECTION_ERROR), None))
        }
    }
}

pub fn register_form(req: &Request) -> ResultResp {
    let session = Session::from_headers(req.headers());
    html_response(register_page(&session, &RegisterForm::default(), None))
}

pub fn register(mut req: Request, app: &App) -> ResultResp {
    let session = Session::from_headers(req.headers());
    let fields = read_form(&mut req, app.settings.max_form_bytes)?;
    let form = RegisterForm::from_fields(&fields);

    match app.api.register(&form.to_account()) {
        Ok(()) => {
            tracing::info!(email = %form.email, role = %form.role, "account created");
            redirect(&Notice::Registered.location("/login"))
        }
        Err(err) if err.status().is_some() => {
            let message = err.backend_message().unwrap_or(REGISTER_FAILED).to_string();
            html_response_with_status(
                relay_status(&err),
                register_page(&session, &form, Some(&message)),
            )
        }
        Err(err) => {
            tracing::warn!(error = %err, "register failed");
            html_response_with_status(502, register_page(&session, &form, Some(CONNECTION_ERROR)))
        }
    }
}

pub fn logout() -> ResultResp {
    redirect_with_cookies("/login", &clear_cookie_headers())
}
