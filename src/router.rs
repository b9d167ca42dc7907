use crate::app::App;
use crate::errors::ServerError;
use crate::handlers::{address, auth, dashboard, edit, listing, new_listing, search};
use crate::responses::{script_response, stylesheet_response, ResultResp};
use astra::Request;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => search::search(&req, app),

        ("GET", ["listings", "new"]) => new_listing::new_form(&req, app),
        ("POST", ["listings", "new"]) => new_listing::create(req, app),
        ("GET", ["listings", id]) => listing::show(&req, app, id),

        ("GET", ["dashboard", "listings"]) => dashboard::my_listings(&req, app),
        ("GET", ["dashboard", "listings", id, "edit"]) => edit::edit_form(&req, app, id),
        ("POST", ["dashboard", "listings", id, "edit"]) => edit::update(req, app, id),

        ("GET", ["login"]) => auth::login_form(&req),
        ("POST", ["login"]) => auth::login(req, app),
        ("GET", ["register"]) => auth::register_form(&req),
        ("POST", ["register"]) => auth::register(req, app),
        ("POST", ["logout"]) => auth::logout(),

        ("GET", ["address-lookup"]) => address::lookup(&req, app),
        ("GET", ["static", "main.css"]) => stylesheet_response(),
        ("GET", ["static", "app.js"]) => script_response(),

        _ => Err(ServerError::NotFound),
    }
}
