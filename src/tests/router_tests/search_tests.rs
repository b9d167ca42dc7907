use crate::api::SearchQuery;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::*;

#[test]
fn home_lists_search_results() {
    let api = FakeApi::new(vec![
        listing(1, "Kitnet Trindade", 950.0),
        listing(2, "Kitnet Centro", 1200.5),
    ]);
    let resp = handle(get("/", None), &app_with(&api)).unwrap();
    assert_eq!(resp.status(), 200);

    let html = body_string(resp);
    assert_eq!(count(&html, "article.listing-card"), 2);
    assert_eq!(
        attr(&html, "article.listing-card a", "href").as_deref(),
        Some("/listings/1")
    );
    assert!(texts(&html, ".listing-card .price").contains(&"R$ 1200.50".to_string()));
    assert_eq!(api.calls(), vec![Call::Search(SearchQuery::default())]);
}

#[test]
fn filters_are_forwarded_and_echoed_back() {
    let api = FakeApi::new(vec![]);
    let resp = handle(get("/?cep=88050&min=500&max=", None), &app_with(&api)).unwrap();
    let html = body_string(resp);

    assert_eq!(
        api.calls(),
        vec![Call::Search(SearchQuery {
            cep: "88050".into(),
            min: "500".into(),
            max: String::new(),
        })]
    );
    assert_eq!(attr(&html, "input#cep", "value").as_deref(), Some("88050"));
    assert_eq!(attr(&html, "input#min", "value").as_deref(), Some("500"));
    assert!(texts(&html, ".results p.muted")
        .contains(&"Nenhuma kitnet encontrada com os filtros atuais.".to_string()));
}

#[test]
fn backend_down_shows_error_and_no_results() {
    let api = FakeApi::with_outcome(vec![listing(1, "x", 1.0)], Outcome::Network);
    let resp = handle(get("/", None), &app_with(&api)).unwrap();
    assert_eq!(resp.status(), 502);

    let html = body_string(resp);
    assert_eq!(count(&html, "article.listing-card"), 0);
    assert_eq!(
        texts(&html, ".alert-error"),
        vec!["Não foi possível buscar as kitnets. Verifique o servidor Backend.".to_string()]
    );
}

#[test]
fn notice_param_shows_banner() {
    let api = FakeApi::new(vec![]);
    let resp = handle(get("/?notice=listing-created", None), &app_with(&api)).unwrap();
    let html = body_string(resp);
    assert_eq!(
        texts(&html, ".alert-success"),
        vec!["Kitnet cadastrada com sucesso!".to_string()]
    );
}

#[test]
fn navbar_reflects_session() {
    let api = FakeApi::new(vec![]);
    let app = app_with(&api);

    let anon = body_string(handle(get("/", None), &app).unwrap());
    assert_eq!(count(&anon, "a[href='/login']"), 1);
    assert_eq!(count(&anon, "form[action='/logout']"), 0);

    let tenant = body_string(handle(get("/", Some(&tenant_cookie())), &app).unwrap());
    assert_eq!(count(&tenant, "form[action='/logout']"), 1);
    assert_eq!(count(&tenant, ".navbar a[href='/listings/new']"), 0);

    let landlord = body_string(handle(get("/", Some(&landlord_cookie())), &app).unwrap());
    assert_eq!(texts(&landlord, ".greeting strong"), vec!["Maria".to_string()]);
    assert_eq!(count(&landlord, ".navbar a[href='/listings/new']"), 1);
    assert_eq!(count(&landlord, ".navbar a[href='/dashboard/listings']"), 1);
}

#[test]
fn stylesheet_is_served() {
    let api = FakeApi::new(vec![]);
    let resp = handle(get("/static/main.css", None), &app_with(&api)).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("text/css; charset=utf-8")
    );
}

#[test]
fn page_script_is_served_locally() {
    let api = FakeApi::new(vec![]);
    let app = app_with(&api);

    let html = body_string(handle(get("/", None), &app).unwrap());
    let scripts: Vec<String> = {
        let doc = scraper::Html::parse_document(&html);
        let sel = scraper::Selector::parse("script[src]").unwrap();
        doc.select(&sel)
            .filter_map(|el| el.value().attr("src"))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(scripts, vec!["/static/app.js".to_string()]);

    let resp = handle(get("/static/app.js", None), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("text/javascript; charset=utf-8")
    );
    assert!(body_string(resp).contains("data-max-bytes"));
}

#[test]
fn unknown_route_is_not_found() {
    let api = FakeApi::new(vec![]);
    let result = handle(get("/nope", None), &app_with(&api));
    assert!(matches!(result, Err(ServerError::NotFound)));
}
