pub mod errors;
pub mod html;
pub mod redirect;
pub mod assets;

pub use crate::errors::ResultResp;
pub use errors::html_error_response;

// Normal HTML response
pub use html::{html_response, html_response_with_cookies, html_response_with_status};
pub use redirect::{redirect, redirect_with_cookies};
pub use assets::{script_response, stylesheet_response};
