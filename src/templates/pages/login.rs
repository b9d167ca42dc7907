use crate::notice::Notice;
use crate::session::Session;
use crate::templates::{
    components::{error_alert, notice_banner},
    desktop_layout,
};
use maud::{html, Markup};

pub fn login_page(email: &str, error: Option<&str>, notice: Option<Notice>) -> Markup {
    // The login page always starts from a cleared session.
    desktop_layout(
        "Entrar",
        &Session::default(),
        html! {
            main class="container narrow auth" {
                div class="card" {
                    h2 class="center" { "Acesse sua Conta" }

                    (notice_banner(notice))
                    @if let Some(msg) = error {
                        (error_alert(msg))
                    }

                    form method="post" action="/login" class="stack" {
                        div {
                            label for="email" { "Email" }
                            input type="email" id="email" name="email" value=(email)
                                placeholder="seu@email.com" autocomplete="email" required;
                        }
                        div {
                            label for="password" { "Senha" }
                            input type="password" id="password" name="password"
                                placeholder="********" autocomplete="current-password" required;
                        }
                        button type="submit" class="btn btn-blue btn-block" { "Entrar" }
                    }

                    p class="center small" {
                        "Não tem uma conta? "
                        a href="/register" class="strong-link" { "Cadastre-se" }
                    }
                }
            }
        },
    )
}
