use crate::api::Listing;
use crate::domain::gallery::Lightbox;
use crate::domain::photos::{full_url, thumbnail_url};
use crate::session::Session;
use crate::templates::{
    brl,
    components::{back_link, error_alert, photo_img},
    desktop_layout,
};
use maud::{html, Markup};

pub struct ListingVm<'a> {
    pub listing: &'a Listing,
    pub backend_base: &'a str,
    pub lightbox: Option<Lightbox>,
}

pub fn listing_page(session: &Session, vm: &ListingVm) -> Markup {
    let l = vm.listing;
    let name = l.display_name();
    let base_href = format!("/listings/{}", l.id);

    desktop_layout(
        name,
        session,
        html! {
            main class="container" {
                (back_link("/", "Voltar para a lista"))

                article class="card detail" {
                    header class="detail-header" {
                        div {
                            h1 { (name) }
                            p class="muted" {
                                "📍 " (l.full_address().unwrap_or_else(|| "Endereço não informado".to_string()))
                            }
                        }
                        div class="detail-price" {
                            p class="price" { (brl(l.price_or_zero())) }
                            span class="fee" { "Taxa: " (brl(l.fee_or_zero())) }
                        }
                    }

                    section class="gallery" {
                        h2 { "Fotos" }
                        @if l.photos.is_empty() {
                            p class="muted" { "Nenhuma foto disponível." }
                        } @else {
                            div class="gallery-grid" {
                                @for (index, photo) in l.photos.iter().enumerate() {
                                    @let alt = format!("Foto {} de {}", index + 1, name);
                                    a class="thumb" href=(format!("{base_href}?photo={index}")) {
                                        (photo_img(&thumbnail_url(vm.backend_base, photo, name), &alt, "thumb-img"))
                                        span class="thumb-zoom" { "Ver Zoom" }
                                    }
                                }
                            }
                        }
                    }

                    section class="grid grid-3 detail-body" {
                        div class="span-2" {
                            h2 { "Descrição" }
                            div class="description pre" { (l.description.as_deref().unwrap_or("")) }
                        }
                        div class="info" {
                            h2 { "Informações" }
                            ul {
                                li { span { "Vagas:" } span { (l.parking_spaces.unwrap_or(0)) } }
                                li {
                                    span { "Tamanho:" }
                                    span {
                                        @match l.size {
                                            Some(m2) => (format!("{m2} m²")),
                                            None => "N/A",
                                        }
                                    }
                                }
                                @if !l.amenities.is_empty() {
                                    li { span { "Comodidades:" } span { (l.amenities.join(", ")) } }
                                }
                            }
                            button type="button" class="btn btn-green btn-block" { "Entrar em Contato" }
                        }
                    }
                }
            }

            @if let Some(lb) = vm.lightbox {
                (lightbox(l, vm.backend_base, &base_href, lb))
            }
        },
    )
}

fn lightbox(l: &Listing, backend_base: &str, base_href: &str, lb: Lightbox) -> Markup {
    let photo = &l.photos[lb.index];

    html! {
        div class="lightbox" role="dialog" aria-modal="true" {
            a class="lightbox-backdrop" href=(base_href) aria-label="Fechar" {}
            a class="lightbox-close" href=(base_href) aria-label="Fechar" aria-keyshortcuts="Escape" { "✕" }

            @if lb.can_navigate() {
                a class="lightbox-prev" href=(format!("{base_href}?photo={}", lb.prev())) aria-label="Anterior" aria-keyshortcuts="ArrowLeft" { "‹" }
            }

            figure class="lightbox-figure" {
                @let alt = format!("Visualização ampliada {}", lb.index + 1);
                (photo_img(&full_url(backend_base, photo, l.display_name()), &alt, "lightbox-img"))
                figcaption class="lightbox-counter" { (lb.counter()) }
            }

            @if lb.can_navigate() {
                a class="lightbox-next" href=(format!("{base_href}?photo={}", lb.next())) aria-label="Próxima" aria-keyshortcuts="ArrowRight" { "›" }
            }
        }
    }
}

pub fn listing_error_page(session: &Session, message: &str) -> Markup {
    desktop_layout(
        "Kitnet",
        session,
        html! {
            main class="container center" {
                (error_alert(message))
                a href="/" class="strong-link" { "Voltar para a busca" }
            }
        },
    )
}
