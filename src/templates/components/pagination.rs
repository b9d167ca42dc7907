use crate::domain::pagination::Page;
use maud::{html, Markup};

/// Prev / "Página X de Y" / next controls linking to `base?page=N`.
pub fn pagination<T>(page: &Page<'_, T>, base: &str) -> Markup {
    html! {
        nav class="pagination" aria-label="Paginação" {
            @if page.has_prev() {
                a class="btn btn-page" href=(format!("{base}?page={}", page.current - 1)) { "Anterior" }
            } @else {
                span class="btn btn-page disabled" aria-disabled="true" { "Anterior" }
            }

            span class="page-label" { "Página " (page.current) " de " (page.total_pages) }

            @if page.has_next() {
                a class="btn btn-page" href=(format!("{base}?page={}", page.current + 1)) { "Próxima" }
            } @else {
                span class="btn btn-page disabled" aria-disabled="true" { "Próxima" }
            }
        }
    }
}
