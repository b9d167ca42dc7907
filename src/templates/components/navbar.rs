use crate::session::Session;
use maud::{html, Markup};

pub fn navbar(session: &Session) -> Markup {
    html! {
        header class="navbar" {
            div class="navbar-inner" {
                a href="/" class="brand" { "Kitnets" }

                nav class="navbar-menu" {
                    @if let Some(user) = &session.user {
                        span class="greeting" { "Olá, " strong { (user.name) } }

                        @if user.is_landlord() {
                            a href="/dashboard/listings" class="nav-link" { "Minhas Kitnets" }
                            a href="/listings/new" class="btn btn-green btn-pill" {
                                svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24"
                                    stroke-width="2" stroke="currentColor" class="icon" {
                                    path stroke-linecap="round" stroke-linejoin="round" d="M12 4.5v15m7.5-7.5h-15" {}
                                }
                                span { "Anunciar Kitnet" }
                            }
                        }

                        form method="post" action="/logout" class="inline" {
                            button type="submit" class="btn-logout" { "Sair" }
                        }
                    } @else {
                        a href="/login" class="nav-link" { "Entrar / Cadastrar" }
                    }
                }
            }
        }
    }
}
