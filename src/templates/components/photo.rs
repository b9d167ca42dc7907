use crate::domain::photos::onerror_fallback;
use maud::{html, Markup};

/// `img` that swaps itself for the placeholder when the file fails to load.
pub fn photo_img(src: &str, alt: &str, class: &str) -> Markup {
    html! {
        img src=(src) alt=(alt) class=(class) loading="lazy" onerror=(onerror_fallback(alt));
    }
}
