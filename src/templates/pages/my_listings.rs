use crate::api::Listing;
use crate::domain::pagination::Page;
use crate::notice::Notice;
use crate::session::Session;
use crate::templates::{
    components::{error_alert, notice_banner, owner_listing_card, pagination},
    desktop_layout,
};
use maud::{html, Markup};

pub struct MyListingsVm<'a> {
    pub page: Page<'a, Listing>,
    pub total: usize,
    pub per_page: usize,
    pub error: Option<&'a str>,
    pub notice: Option<Notice>,
    pub backend_base: &'a str,
}

pub fn my_listings_page(session: &Session, vm: &MyListingsVm) -> Markup {
    desktop_layout(
        "Minhas Kitnets",
        session,
        html! {
            main class="container wide" {
                div class="page-header" {
                    h1 { "Minhas Kitnets" }
                    a href="/listings/new" class="btn btn-blue" { "+ Nova Kitnet" }
                }

                (notice_banner(vm.notice))
                @if let Some(msg) = vm.error {
                    (error_alert(msg))
                }

                @if vm.total > vm.per_page {
                    (pagination(&vm.page, "/dashboard/listings"))
                }

                @if vm.total == 0 && vm.error.is_none() {
                    div class="card empty" {
                        p { "Você ainda não tem kitnets cadastradas." }
                        a href="/listings/new" class="strong-link" { "Comece anunciando agora!" }
                    }
                } @else {
                    div class="owner-grid" {
                        @for listing in vm.page.items {
                            (owner_listing_card(listing, vm.backend_base))
                        }
                    }
                }
            }
        },
    )
}
