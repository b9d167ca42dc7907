use crate::api::{Credentials, NewAccount};
use crate::router::handle;
use crate::session::{Role, Session};
use crate::tests::utils::*;

fn session_from(set_cookies: &[String]) -> Session {
    let pairs: Vec<&str> = set_cookies
        .iter()
        .filter_map(|c| c.split(';').next())
        .collect();
    let req = get("/", Some(&pairs.join("; ")));
    Session::from_headers(req.headers())
}

#[test]
fn login_page_clears_existing_session() {
    let api = FakeApi::new(vec![]);
    let resp = handle(get("/login", Some(&landlord_cookie())), &app_with(&api)).unwrap();
    assert_eq!(resp.status(), 200);

    let cookies = set_cookies(&resp);
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));

    // The page itself is rendered logged out.
    let html = body_string(resp);
    assert_eq!(count(&html, "form[action='/logout']"), 0);
    assert_eq!(count(&html, "form[action='/login']"), 1);
}

#[test]
fn successful_login_stores_session_and_goes_home() {
    let api = FakeApi::new(vec![]);
    let resp = handle(
        post_form("/login", "email=maria%40ex.com&password=s3cret", None),
        &app_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");

    let session = session_from(&set_cookies(&resp));
    assert_eq!(session.token.as_deref(), Some("jwt-abc"));
    let user = session.user.unwrap();
    assert_eq!(user.name, "Maria");
    assert_eq!(user.role, Role::Landlord);

    assert_eq!(
        api.calls(),
        vec![Call::Login(Credentials {
            email: "maria@ex.com".into(),
            password: "s3cret".into(),
        })]
    );
}

#[test]
fn rejected_login_rerenders_with_message() {
    let api = FakeApi::with_outcome(vec![], Outcome::Status(401, ""));
    let resp = handle(
        post_form("/login", "email=maria%40ex.com&password=bad", None),
        &app_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 401);
    assert!(set_cookies(&resp).is_empty());
    let html = body_string(resp);
    assert_eq!(
        texts(&html, ".alert-error"),
        vec!["Login falhou! Verifique email e senha.".to_string()]
    );
    assert_eq!(attr(&html, "input#email", "value").as_deref(), Some("maria@ex.com"));
}

#[test]
fn unreachable_backend_on_login_is_connection_error() {
    let api = FakeApi::with_outcome(vec![], Outcome::Network);
    let resp = handle(post_form("/login", "email=a&password=b", None), &app_with(&api)).unwrap();
    assert_eq!(resp.status(), 502);
    assert_eq!(
        texts(&body_string(resp), ".alert-error"),
        vec!["Erro de conexão com o servidor.".to_string()]
    );
}

#[test]
fn register_sends_account_and_redirects_to_login() {
    let api = FakeApi::new(vec![]);
    let body = "name=Jo%C3%A3o&email=joao%40ex.com&password=pw&cpf=123&phone=4899&role=LANDLORD";
    let resp = handle(post_form("/register", body, None), &app_with(&api)).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login?notice=registered");
    assert_eq!(
        api.calls(),
        vec![Call::Register(NewAccount {
            name: "João".into(),
            email: "joao@ex.com".into(),
            password: "pw".into(),
            cpf: "123".into(),
            phone: "4899".into(),
            role: "LANDLORD".into(),
        })]
    );
}

#[test]
fn unknown_role_registers_as_tenant() {
    let api = FakeApi::new(vec![]);
    handle(
        post_form("/register", "name=A&email=a%40b&password=p&role=ADMIN", None),
        &app_with(&api),
    )
    .unwrap();

    match api.calls().as_slice() {
        [Call::Register(account)] => assert_eq!(account.role, "TENANT"),
        other => panic!("unexpected calls: {other:?}"),
    }
}

#[test]
fn register_failure_shows_backend_message_or_fallback() {
    let api = FakeApi::with_outcome(vec![], Outcome::Status(400, r#"{"mensagem":"CPF inválido"}"#));
    let resp = handle(post_form("/register", "name=A&email=a%40b", None), &app_with(&api)).unwrap();
    assert_eq!(resp.status(), 400);
    let html = body_string(resp);
    assert_eq!(texts(&html, ".alert-error"), vec!["CPF inválido".to_string()]);

    let api = FakeApi::with_outcome(vec![], Outcome::Status(409, ""));
    let resp = handle(post_form("/register", "name=A&email=a%40b", None), &app_with(&api)).unwrap();
    assert_eq!(resp.status(), 409);
    assert_eq!(
        texts(&body_string(resp), ".alert-error"),
        vec!["Erro ao criar conta. Verifique os dados (Email já existe?).".to_string()]
    );
}

#[test]
fn login_page_shows_registered_notice() {
    let api = FakeApi::new(vec![]);
    let html = body_string(handle(get("/login?notice=registered", None), &app_with(&api)).unwrap());
    assert_eq!(
        texts(&html, ".alert-success"),
        vec!["Conta criada com sucesso! Faça login para continuar.".to_string()]
    );
}

#[test]
fn logout_clears_cookies_and_redirects_to_login() {
    let api = FakeApi::new(vec![]);
    let resp = handle(
        post_form("/logout", "", Some(&landlord_cookie())),
        &app_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login");
    let cookies = set_cookies(&resp);
    assert!(cookies.iter().any(|c| c.starts_with("token=;")));
    assert!(cookies.iter().any(|c| c.starts_with("user=;")));
    assert!(api.calls().is_empty());
}
