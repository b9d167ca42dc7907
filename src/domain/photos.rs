// src/domain/photos.rs
use crate::api::Photo;
use base64::Engine;
use maud::html;

/// Turns a photo path from the backend into something an `img` can load.
/// Absolute URLs pass through, relative ones are served by the backend,
/// and a missing path falls back to the placeholder.
pub fn resolve_photo_url(backend_base: &str, path: Option<&str>, alt: &str) -> String {
    match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) if p.starts_with("http://") || p.starts_with("https://") => p.to_string(),
        Some(p) => {
            let base = backend_base.trim_end_matches('/');
            if p.starts_with('/') {
                format!("{base}{p}")
            } else {
                format!("{base}/{p}")
            }
        }
        None => placeholder_data_uri(alt),
    }
}

/// Thumbnail for grids: the thumbnail when present, else the full image.
pub fn thumbnail_url(backend_base: &str, photo: &Photo, alt: &str) -> String {
    let path = photo.thumbnail_url.as_deref().or(photo.url.as_deref());
    resolve_photo_url(backend_base, path, alt)
}

pub fn full_url(backend_base: &str, photo: &Photo, alt: &str) -> String {
    resolve_photo_url(backend_base, photo.url.as_deref(), alt)
}

/// Grey 600x400 SVG showing the first 20 characters of `alt`.
pub fn placeholder_data_uri(alt: &str) -> String {
    let label: String = if alt.trim().is_empty() {
        "Kitnet".to_string()
    } else {
        alt.chars().take(20).collect()
    };

    // Empty bodies instead of `;` so every element is closed for the XML parser.
    let svg = html! {
        svg width="600" height="400" viewBox="0 0 600 400" xmlns="http://www.w3.org/2000/svg" {
            rect width="600" height="400" fill="#e2e8f0" {}
            text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle"
                font-family="sans-serif" font-size="30" fill="#475569" { (label) }
        }
    }
    .into_string();

    let encoded = base64::engine::general_purpose::STANDARD.encode(svg);
    format!("data:image/svg+xml;base64,{encoded}")
}

/// Inline `onerror` handler that swaps a broken image for the placeholder once.
pub fn onerror_fallback(alt: &str) -> String {
    format!(
        "this.onerror=null;this.src='{}'",
        placeholder_data_uri(alt)
    )
}
