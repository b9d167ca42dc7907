// templates/pages/home.rs

use crate::api::{Listing, SearchQuery};
use crate::notice::Notice;
use crate::session::Session;
use crate::templates::{
    components::{error_alert, listing_card, notice_banner},
    desktop_layout,
};
use maud::{html, Markup};

pub struct SearchVm<'a> {
    pub query: &'a SearchQuery,
    pub results: Result<&'a [Listing], &'a str>,
    pub notice: Option<Notice>,
}

pub fn home_page(session: &Session, vm: &SearchVm) -> Markup {
    desktop_layout(
        "Busca de Kitnets",
        session,
        html! {
            main class="container" {
                (notice_banner(vm.notice))

                h1 { "Busca de Kitnets" }

                form method="get" action="/" class="card search-form grid grid-4" {
                    div {
                        label for="cep" { "CEP (Busca na Descrição)" }
                        input type="text" id="cep" name="cep" value=(vm.query.cep) placeholder="Ex: 88050";
                    }
                    div {
                        label for="min" { "Preço Mín." }
                        input type="number" id="min" name="min" step="0.01" value=(vm.query.min) placeholder="0.00";
                    }
                    div {
                        label for="max" { "Preço Máx." }
                        input type="number" id="max" name="max" step="0.01" value=(vm.query.max) placeholder="2000.00";
                    }
                    div class="align-end" {
                        button type="submit" class="btn btn-blue btn-block" { "Buscar Kitnets" }
                    }
                }

                section class="results" {
                    @match vm.results {
                        Err(message) => (error_alert(message)),
                        Ok([]) => p class="muted" { "Nenhuma kitnet encontrada com os filtros atuais." },
                        Ok(listings) => {
                            @for listing in listings {
                                (listing_card(listing))
                            }
                        }
                    }
                }
            }
        },
    )
}
