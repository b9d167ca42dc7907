use crate::forms::RegisterForm;
use crate::session::Session;
use crate::templates::{components::error_alert, desktop_layout};
use maud::{html, Markup};

pub fn register_page(session: &Session, form: &RegisterForm, error: Option<&str>) -> Markup {
    desktop_layout(
        "Crie sua Conta",
        session,
        html! {
            main class="container narrow auth" {
                div class="card" {
                    h2 class="center" { "Crie sua Conta" }

                    @if let Some(msg) = error {
                        (error_alert(msg))
                    }

                    form method="post" action="/register" class="stack" {
                        div {
                            label for="name" { "Nome Completo" }
                            input type="text" id="name" name="name" value=(form.name) placeholder="Seu Nome" required;
                        }

                        div class="grid grid-2" {
                            div {
                                label for="email" { "Email" }
                                input type="email" id="email" name="email" value=(form.email)
                                    placeholder="email@exemplo.com" required;
                            }
                            div {
                                label for="password" { "Senha" }
                                input type="password" id="password" name="password" placeholder="******" required;
                            }
                        }

                        div class="grid grid-2" {
                            div {
                                label for="cpf" { "CPF" }
                                input type="text" id="cpf" name="cpf" value=(form.cpf) placeholder="000.000.000-00" required;
                            }
                            div {
                                label for="phone" { "Telefone" }
                                input type="text" id="phone" name="phone" value=(form.phone) placeholder="(00) 00000-0000" required;
                            }
                        }

                        fieldset class="roles" {
                            legend { "Eu sou:" }
                            label class="role-option" {
                                input type="radio" name="role" value="TENANT" checked[form.role == "TENANT"];
                                span { "Inquilino (Quero alugar)" }
                            }
                            label class="role-option" {
                                input type="radio" name="role" value="LANDLORD" checked[form.role == "LANDLORD"];
                                span { "Proprietário (Quero anunciar)" }
                            }
                        }

                        button type="submit" class="btn btn-green btn-block" { "Cadastrar" }
                    }

                    p class="center small" {
                        "Já tem uma conta? "
                        a href="/login" class="strong-link" { "Faça Login" }
                    }
                }
            }
        },
    )
}
