use crate::session::Session;
use crate::templates::components::navbar;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, session: &Session, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Kitnets" }
                meta name="description" content="Busca de Kitnets";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/app.js" defer {}
            }
            body {
                (navbar(session))
                (content)
            }
        }
    }
}
