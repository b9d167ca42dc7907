use crate::router::handle;
use crate::tests::utils::*;

fn with_photos(n: u32) -> crate::api::Listing {
    let mut l = listing(7, "Kitnet Trindade", 950.0);
    l.photos = (1..=n).map(photo).collect();
    l
}

#[test]
fn detail_page_renders_listing() {
    let api = FakeApi::new(vec![with_photos(2)]);
    let resp = handle(get("/listings/7", None), &app_with(&api)).unwrap();
    assert_eq!(resp.status(), 200);

    let html = body_string(resp);
    assert_eq!(texts(&html, "h1"), vec!["Kitnet Trindade".to_string()]);
    assert_eq!(texts(&html, ".detail-price .price"), vec!["R$ 950.00".to_string()]);
    assert_eq!(count(&html, "a.thumb"), 2);
    assert_eq!(
        attr(&html, "a.thumb img", "src").as_deref(),
        Some("http://localhost:8080/uploads/1_thumb.jpg")
    );
    assert_eq!(count(&html, ".lightbox"), 0);
    assert_eq!(api.calls(), vec![Call::Get("7".into())]);
}

#[test]
fn listing_without_photos_says_so() {
    let api = FakeApi::new(vec![with_photos(0)]);
    let html = body_string(handle(get("/listings/7", None), &app_with(&api)).unwrap());
    assert!(texts(&html, ".gallery p").contains(&"Nenhuma foto disponível.".to_string()));
}

#[test]
fn photo_param_opens_lightbox_with_wrapping_links() {
    let api = FakeApi::new(vec![with_photos(3)]);
    let html = body_string(handle(get("/listings/7?photo=0", None), &app_with(&api)).unwrap());

    assert_eq!(texts(&html, ".lightbox-counter"), vec!["1 / 3".to_string()]);
    assert_eq!(
        attr(&html, ".lightbox-img", "src").as_deref(),
        Some("http://localhost:8080/uploads/1.jpg")
    );
    assert_eq!(
        attr(&html, "a.lightbox-prev", "href").as_deref(),
        Some("/listings/7?photo=2")
    );
    assert_eq!(
        attr(&html, "a.lightbox-next", "href").as_deref(),
        Some("/listings/7?photo=1")
    );
    assert_eq!(
        attr(&html, "a.lightbox-close", "href").as_deref(),
        Some("/listings/7")
    );
}

#[test]
fn lightbox_links_declare_keyboard_shortcuts() {
    let api = FakeApi::new(vec![with_photos(3)]);
    let html = body_string(handle(get("/listings/7?photo=1", None), &app_with(&api)).unwrap());

    assert_eq!(
        attr(&html, "a[aria-keyshortcuts='Escape']", "href").as_deref(),
        Some("/listings/7")
    );
    assert_eq!(
        attr(&html, "a[aria-keyshortcuts='ArrowLeft']", "href").as_deref(),
        Some("/listings/7?photo=0")
    );
    assert_eq!(
        attr(&html, "a[aria-keyshortcuts='ArrowRight']", "href").as_deref(),
        Some("/listings/7?photo=2")
    );
}

#[test]
fn single_photo_lightbox_has_no_arrows() {
    let api = FakeApi::new(vec![with_photos(1)]);
    let html = body_string(handle(get("/listings/7?photo=0", None), &app_with(&api)).unwrap());
    assert_eq!(count(&html, ".lightbox"), 1);
    assert_eq!(count(&html, ".lightbox-prev, .lightbox-next"), 0);
}

#[test]
fn out_of_range_photo_is_ignored() {
    let api = FakeApi::new(vec![with_photos(2)]);
    let html = body_string(handle(get("/listings/7?photo=9", None), &app_with(&api)).unwrap());
    assert_eq!(count(&html, ".lightbox"), 0);
}

#[test]
fn missing_listing_is_404_with_message() {
    let api = FakeApi::new(vec![]);
    let resp = handle(get("/listings/99", None), &app_with(&api)).unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(
        texts(&body_string(resp), ".alert-error"),
        vec!["Não foi possível carregar os detalhes da kitnet.".to_string()]
    );
}

#[test]
fn backend_failure_is_bad_gateway() {
    let api = FakeApi::with_outcome(vec![with_photos(1)], Outcome::Network);
    let resp = handle(get("/listings/7", None), &app_with(&api)).unwrap();
    assert_eq!(resp.status(), 502);
}
