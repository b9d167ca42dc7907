use crate::api::Listing;
use crate::domain::photos::thumbnail_url;
use crate::templates::brl;
use crate::templates::components::photo_img;
use maud::{html, Markup};

/// Search result card.
pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="card listing-card" {
            h2 {
                @if listing.id.is_empty() {
                    (listing.display_name())
                } @else {
                    a href=(format!("/listings/{}", listing.id)) { (listing.display_name()) }
                }
            }
            p class="price" { (brl(listing.price_or_zero())) }
            p class="meta" {
                "Vagas: " (listing.parking_spaces.unwrap_or(0))
                " | Taxa: " (brl(listing.fee_or_zero()))
            }
            @if let Some(desc) = &listing.description {
                p class="description" { (desc) }
            }
        }
    }
}

/// Dashboard card with cover photo and view/edit links.
pub fn owner_listing_card(listing: &Listing, backend_base: &str) -> Markup {
    let spaces = listing.parking_spaces.unwrap_or(0);

    html! {
        article class="card owner-card" {
            div class="cover" {
                @if let Some(first) = listing.photos.first() {
                    (photo_img(&thumbnail_url(backend_base, first, listing.display_name()), listing.display_name(), "cover-img"))
                } @else {
                    div class="no-photo" { span { "Sem foto" } }
                }
                div class="price-badge" { (brl(listing.price_or_zero())) }
            }

            div class="owner-card-body" {
                h2 { (listing.display_name()) }
                p class="description clamp" { (listing.description.as_deref().unwrap_or("")) }
                div class="owner-card-footer" {
                    span class="spaces" {
                        (spaces) " " @if spaces == 1 { "vaga" } @else { "vagas" }
                    }
                    div class="actions" {
                        a class="btn btn-light" href=(format!("/listings/{}", listing.id)) { "Visualizar" }
                        a class="btn btn-blue" href=(format!("/dashboard/listings/{}/edit", listing.id)) { "Editar" }
                    }
                }
            }
        }
    }
}
