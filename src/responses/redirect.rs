use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// 303 so a POST is never replayed by the browser.
pub fn redirect(location: &str) -> ResultResp {
    redirect_with_cookies(location, &[])
}

pub fn redirect_with_cookies(location: &str, cookies: &[String]) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(303)
        .header("Location", location);

    for cookie in cookies {
        builder = builder.header("Set-Cookie", cookie.as_str());
    }

    Ok(builder.body(Body::empty())?)
}
