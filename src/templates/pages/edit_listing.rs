use crate::forms::ListingFields;
use crate::session::Session;
use crate::templates::{components::error_alert, desktop_layout};
use maud::{html, Markup};

pub struct EditListingVm<'a> {
    pub id: &'a str,
    pub form: &'a ListingFields,
    pub error: Option<&'a str>,
}

pub fn edit_listing_page(session: &Session, vm: &EditListingVm) -> Markup {
    let f = vm.form;

    desktop_layout(
        "Editar Kitnet",
        session,
        html! {
            main class="container" {
                div class="page-header" {
                    h1 { "Editar Kitnet" }
                    a href="/dashboard/listings" class="back-link" { "⬅ Cancelar" }
                }

                @if let Some(msg) = vm.error {
                    (error_alert(msg))
                }

                form method="post" action=(format!("/dashboard/listings/{}/edit", vm.id)) class="stack" {
                    section class="card form-section" {
                        h2 { "✏️ Editar Informações" }

                        div class="grid grid-2" {
                            div {
                                label for="nome" { "Nome do Anúncio" }
                                input type="text" id="nome" name="nome" required value=(f.name);
                            }
                            div {
                                label for="valor" { "Valor (R$)" }
                                input type="number" id="valor" name="valor" step="0.01" required value=(f.price);
                            }
                        }
                        div class="grid grid-2" {
                            div {
                                label for="vagas" { "Vagas" }
                                input type="number" id="vagas" name="vagas" required value=(f.parking_spaces);
                            }
                            div {
                                label for="taxa" { "Taxa de Condomínio (R$)" }
                                input type="number" id="taxa" name="taxa" step="0.01" required value=(f.fee);
                            }
                        }
                        div {
                            label for="descricao" { "Descrição" }
                            textarea id="descricao" name="descricao" rows="4" { (f.description) }
                        }
                    }

                    div class="alert alert-warning" {
                        strong { "Nota:" }
                        " A edição de fotos ainda não está disponível. Caso precise alterar as imagens, exclua o anúncio e crie um novo."
                    }

                    button type="submit" class="btn btn-green btn-block" { "Salvar Alterações" }
                }
            }
        },
    )
}
