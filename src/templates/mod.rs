pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use layouts::desktop::desktop_layout;

/// Brazilian currency as the listing pages show it, e.g. "R$ 950.50".
pub fn brl(value: f64) -> String {
    format!("R$ {value:.2}")
}
