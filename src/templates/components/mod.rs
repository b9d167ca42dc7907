use maud::{html, Markup};

pub mod address_fields;
pub mod alert;
pub mod listing_card;
pub mod navbar;
pub mod pagination;
pub mod photo;

pub use address_fields::address_fields;
pub use alert::{error_alert, notice_banner};
pub use listing_card::{listing_card, owner_listing_card};
pub use navbar::navbar;
pub use pagination::pagination;
pub use photo::photo_img;

pub fn back_link(href: &str, label: &str) -> Markup {
    html! {
        a class="back-link" href=(href) { "← " (label) }
    }
}
