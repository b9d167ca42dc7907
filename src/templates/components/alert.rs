use crate::notice::Notice;
use maud::{html, Markup};

pub fn error_alert(message: &str) -> Markup {
    html! {
        div class="alert alert-error" role="alert" { (message) }
    }
}

pub fn notice_banner(notice: Option<Notice>) -> Markup {
    html! {
        @if let Some(n) = notice {
            @if n.is_error() {
                (error_alert(n.message()))
            } @else {
                div class="alert alert-success" role="status" { (n.message()) }
            }
        }
    }
}
