use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_status(200, markup)
}

/// Used for forms rendered back with an error so the status still tells
/// the truth about the submission.
pub fn html_response_with_status(status: u16, markup: Markup) -> ResultResp {
    let body = markup.into_string();

    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))?;

    Ok(resp)
}

pub fn html_response_with_cookies(markup: Markup, cookies: &[String]) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8");

    for cookie in cookies {
        builder = builder.header("Set-Cookie", cookie.as_str());
    }

    Ok(builder.body(Body::from(markup.into_string()))?)
}
