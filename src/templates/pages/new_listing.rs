use crate::forms::NewListingForm;
use crate::session::Session;
use crate::templates::{
    components::{address_fields, back_link, error_alert},
    desktop_layout,
};
use maud::{html, Markup};

pub struct NewListingVm<'a> {
    pub form: &'a NewListingForm,
    pub error: Option<&'a str>,
    pub max_photo_bytes: u64,
}

pub fn new_listing_page(session: &Session, vm: &NewListingVm) -> Markup {
    let f = &vm.form.listing;
    let max_photo_mb = vm.max_photo_bytes / (1024 * 1024);

    desktop_layout(
        "Anunciar Kitnet",
        session,
        html! {
            main class="container" {
                (back_link("/", "Voltar"))

                @if let Some(msg) = vm.error {
                    (error_alert(msg))
                }

                form method="post" action="/listings/new" enctype="multipart/form-data" class="stack" {
                    section class="card form-section" {
                        h2 { "🏠 Dados do Imóvel" }

                        div class="grid grid-2" {
                            div {
                                label for="nome" { "Nome do Anúncio" }
                                input type="text" id="nome" name="nome" required value=(f.name)
                                    placeholder="Ex: Kitnet na Trindade";
                            }
                            div {
                                label for="valor" { "Valor (R$)" }
                                input type="number" id="valor" name="valor" step="0.01" required
                                    value=(f.price) placeholder="0,00";
                            }
                        }
                        div class="grid grid-2" {
                            div {
                                label for="vagas" { "Vagas" }
                                input type="number" id="vagas" name="vagas" required
                                    value=(f.parking_spaces) placeholder="1";
                            }
                            div {
                                label for="taxa" { "Taxa de Condomínio (R$)" }
                                input type="number" id="taxa" name="taxa" step="0.01" required
                                    value=(f.fee) placeholder="0,00";
                            }
                        }
                        div {
                            label for="descricao" { "Descrição" }
                            textarea id="descricao" name="descricao" rows="4"
                                placeholder="Descreva os detalhes do imóvel..." { (f.description) }
                        }
                    }

                    (address_fields(&vm.form.address, None))

                    section class="card form-section" {
                        h2 { "📷 Galeria de Fotos" }
                        label for="files" class="dropzone" {
                            span { "Clique para selecionar as fotos" }
                            span class="small muted" { "Até " (max_photo_mb) "MB por arquivo" }
                            input type="file" id="files" name="files" multiple accept="image/*"
                                data-max-bytes=(vm.max_photo_bytes)
                                data-summary="files-summary"
                                data-previews="files-preview";
                        }
                        p id="files-summary" class="small files-summary" aria-live="polite" {}
                        div id="files-preview" class="preview-strip" {}
                    }

                    button type="submit" class="btn btn-blue btn-block" { "Cadastrar Kitnet" }
                }
            }
        },
    )
}
