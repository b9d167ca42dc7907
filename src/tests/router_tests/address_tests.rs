use crate::cep::Address;
use crate::router::handle;
use crate::tests::utils::*;

fn trindade() -> Address {
    Address {
        cep: "88036000".into(),
        state: "SC".into(),
        city: "Florianópolis".into(),
        neighborhood: "Trindade".into(),
        street: "Rua Lauro Linhares".into(),
    }
}

#[test]
fn full_cep_fills_address_fields() {
    let api = FakeApi::new(vec![]);
    let lookup = FakeLookup::new(Some(trindade()));
    let resp = handle(
        get("/address-lookup?cep=88036-000&number=10&logradouro=", None),
        &test_app(&api, &lookup),
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(lookup.lookups(), vec!["88036000".to_string()]);

    let html = body_string(resp);
    assert_eq!(count(&html, "section#address-fields"), 1);
    assert_eq!(attr(&html, "input#cep", "value").as_deref(), Some("88036-000"));
    assert_eq!(
        attr(&html, "input#logradouro", "value").as_deref(),
        Some("Rua Lauro Linhares")
    );
    assert_eq!(attr(&html, "input#city", "value").as_deref(), Some("Florianópolis"));
    assert_eq!(attr(&html, "input#state", "value").as_deref(), Some("SC"));
    // Typed fields the lookup does not know about are kept.
    assert_eq!(attr(&html, "input#number", "value").as_deref(), Some("10"));
    assert_eq!(count(&html, ".inline-error"), 0);
}

#[test]
fn partial_cep_does_not_look_up() {
    let api = FakeApi::new(vec![]);
    let lookup = FakeLookup::new(Some(trindade()));
    let resp = handle(
        get("/address-lookup?cep=8803&city=Palho%C3%A7a", None),
        &test_app(&api, &lookup),
    )
    .unwrap();

    assert!(lookup.lookups().is_empty());
    let html = body_string(resp);
    assert_eq!(attr(&html, "input#cep", "value").as_deref(), Some("8803"));
    assert_eq!(attr(&html, "input#city", "value").as_deref(), Some("Palhoça"));
    assert_eq!(count(&html, ".inline-error"), 0);
}

#[test]
fn unknown_cep_asks_for_manual_entry() {
    let api = FakeApi::new(vec![]);
    let lookup = FakeLookup::new(None);
    let resp = handle(
        get("/address-lookup?cep=00000000&city=Joinville", None),
        &test_app(&api, &lookup),
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let html = body_string(resp);
    assert_eq!(
        texts(&html, ".inline-error"),
        vec!["CEP não encontrado. Preencha o endereço manualmente.".to_string()]
    );
    assert_eq!(attr(&html, "input#city", "value").as_deref(), Some("Joinville"));
}
