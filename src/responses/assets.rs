use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const MAIN_CSS: &str = include_str!("../../static/main.css");
const APP_JS: &str = include_str!("../../static/app.js");

pub fn stylesheet_response() -> ResultResp {
    static_response(MAIN_CSS, "text/css; charset=utf-8")
}

pub fn script_response() -> ResultResp {
    static_response(APP_JS, "text/javascript; charset=utf-8")
}

fn static_response(body: &'static str, content_type: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(body))?;

    Ok(resp)
}
