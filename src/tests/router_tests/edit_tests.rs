use crate::api::ListingUpdate;
use crate::router::handle;
use crate::tests::utils::*;

const FORM: &str = "nome=Kitnet+Nova&valor=1000.5&vagas=2&taxa=90&descricao=Reformada";

#[test]
fn edit_form_is_prefilled() {
    let api = FakeApi::new(vec![listing(3, "Kitnet Centro", 950.0)]);
    let resp = handle(
        get("/dashboard/listings/3/edit", Some(&landlord_cookie())),
        &app_with(&api),
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let html = body_string(resp);
    assert_eq!(attr(&html, "input#nome", "value").as_deref(), Some("Kitnet Centro"));
    assert_eq!(attr(&html, "input#valor", "value").as_deref(), Some("950"));
    assert_eq!(attr(&html, "input#vagas", "value").as_deref(), Some("1"));
    assert_eq!(
        texts(&html, "textarea#descricao"),
        vec!["Descrição de Kitnet Centro".to_string()]
    );
    assert_eq!(
        attr(&html, "form.stack", "action").as_deref(),
        Some("/dashboard/listings/3/edit")
    );
}

#[test]
fn anything_short_of_landlord_goes_to_login() {
    let api = FakeApi::new(vec![listing(3, "x", 1.0)]);
    let app = app_with(&api);

    for cookie in [None, Some(tenant_cookie())] {
        let resp = handle(get("/dashboard/listings/3/edit", cookie.as_deref()), &app).unwrap();
        assert_eq!(location(&resp), "/login");

        let resp = handle(
            post_form("/dashboard/listings/3/edit", FORM, cookie.as_deref()),
            &app,
        )
        .unwrap();
        assert_eq!(location(&resp), "/login");
    }
    assert!(api.calls().is_empty());
}

#[test]
fn load_failure_returns_to_dashboard_with_notice() {
    let api = FakeApi::new(vec![]);
    let resp = handle(
        get("/dashboard/listings/3/edit", Some(&landlord_cookie())),
        &app_with(&api),
    )
    .unwrap();
    assert_eq!(location(&resp), "/dashboard/listings?notice=listing-load-failed");

    let api = FakeApi::with_outcome(vec![], Outcome::Network);
    let resp = handle(
        get("/dashboard/listings/3/edit", Some(&landlord_cookie())),
        &app_with(&api),
    )
    .unwrap();
    assert_eq!(location(&resp), "/dashboard/listings?notice=connection-failed");
}

#[test]
fn update_sends_changes_and_redirects() {
    let api = FakeApi::new(vec![]);
    let resp = handle(
        post_form("/dashboard/listings/3/edit", FORM, Some(&landlord_cookie())),
        &app_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/dashboard/listings?notice=listing-updated");
    assert_eq!(
        api.calls(),
        vec![Call::Update {
            token: "jwt-abc".into(),
            id: "3".into(),
            update: ListingUpdate {
                name: "Kitnet Nova".into(),
                price: 1000.5,
                parking_spaces: 2,
                fee: 90.0,
                description: "Reformada".into(),
            },
        }]
    );
}

#[test]
fn invalid_price_rerenders_form() {
    let api = FakeApi::new(vec![]);
    let resp = handle(
        post_form(
            "/dashboard/listings/3/edit",
            "nome=X&valor=abc&vagas=1&taxa=0&descricao=",
            Some(&landlord_cookie()),
        ),
        &app_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 422);
    assert!(api.calls().is_empty());
    let html = body_string(resp);
    assert_eq!(
        texts(&html, ".alert-error"),
        vec!["Informe um número válido em \"Valor\".".to_string()]
    );
    assert_eq!(attr(&html, "input#nome", "value").as_deref(), Some("X"));
}

#[test]
fn update_failures_are_explained() {
    let api = FakeApi::with_outcome(vec![], Outcome::Status(400, r#"{"mensagem":"Valor inválido"}"#));
    let resp = handle(
        post_form("/dashboard/listings/3/edit", FORM, Some(&landlord_cookie())),
        &app_with(&api),
    )
    .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(
        texts(&body_string(resp), ".alert-error"),
        vec!["Erro ao atualizar: Valor inválido".to_string()]
    );

    let api = FakeApi::with_outcome(vec![], Outcome::Status(500, ""));
    let resp = handle(
        post_form("/dashboard/listings/3/edit", FORM, Some(&landlord_cookie())),
        &app_with(&api),
    )
    .unwrap();
    assert_eq!(resp.status(), 502);
    assert_eq!(
        texts(&body_string(resp), ".alert-error"),
        vec!["Erro ao atualizar: Internal Server Error".to_string()]
    );

    let api = FakeApi::with_outcome(vec![], Outcome::Network);
    let resp = handle(
        post_form("/dashboard/listings/3/edit", FORM, Some(&landlord_cookie())),
        &app_with(&api),
    )
    .unwrap();
    assert_eq!(resp.status(), 502);
    assert_eq!(
        texts(&body_string(resp), ".alert-error"),
        vec!["Erro de conexão com o servidor.".to_string()]
    );
}
