use crate::forms::AddressFields;
use maud::{html, Markup};

/// Address section of the new listing form. Once the CEP is complete the
/// page script asks `data-lookup` for this same fragment, filled in, and
/// swaps it in.
pub fn address_fields(addr: &AddressFields, lookup_error: Option<&str>) -> Markup {
    html! {
        section id="address-fields" class="card form-section" data-lookup="/address-lookup" {
            h2 { "📍 Endereço" }

            div class="grid grid-3" {
                div {
                    label for="cep" { "CEP" }
                    input type="text" id="cep" name="cep" required
                        value=(addr.cep)
                        placeholder="00000-000"
                        maxlength="9"
                        inputmode="numeric";
                }
                div class="span-2" {
                    label for="logradouro" { "Logradouro" }
                    input type="text" id="logradouro" name="logradouro" required
                        value=(addr.street) placeholder="Rua, Avenida...";
                }
            }

            @if let Some(msg) = lookup_error {
                p class="inline-error" { (msg) }
            }

            div class="grid grid-3" {
                div {
                    label for="number" { "Número" }
                    input type="text" id="number" name="number" value=(addr.number) placeholder="123";
                }
                div class="span-2" {
                    label for="complement" { "Complemento" }
                    input type="text" id="complement" name="complement"
                        value=(addr.complement) placeholder="Apto 101, Bloco B...";
                }
            }

            div class="grid grid-3" {
                div {
                    label for="neighborhood" { "Bairro" }
                    input type="text" id="neighborhood" name="neighborhood" required
                        value=(addr.neighborhood) placeholder="Centro";
                }
                div {
                    label for="city" { "Cidade" }
                    input type="text" id="city" name="city" required
                        value=(addr.city) placeholder="Florianópolis";
                }
                div {
                    label for="state" { "UF" }
                    input type="text" id="state" name="state" required maxlength="2"
                        value=(addr.state) placeholder="SC";
                }
            }
        }
    }
}
