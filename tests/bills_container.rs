mod support;

use std::sync::Arc;

use billed_employee::{
    containers::{BillsContainer, BillsEvent},
    document::Document,
    entities::{Bill, Navigator as _, Route},
    errors::StoreRequestFailed,
    format::{format_date, format_status},
    store::{KeyValueStorage as _, MemoryBillsStore, MemoryStorage},
    views::bills_view::{self, BillsViewState},
};
use regex::Regex;

use support::{
    as_store, capture_logs, employee_storage, fixture_bills, fixture_store, router_with,
    RecordingModal, RecordingNavigator,
};

fn container(
    document: Arc<Document>,
    navigator: Arc<RecordingNavigator>,
    store: Option<Arc<MemoryBillsStore>>,
    modal: Arc<RecordingModal>,
) -> BillsContainer {
    BillsContainer::new(
        document,
        navigator,
        employee_storage(),
        store.as_ref().and_then(as_store),
        modal,
    )
}

fn detached(store: Option<Arc<MemoryBillsStore>>) -> BillsContainer {
    container(
        Arc::new(Document::new()),
        Arc::new(RecordingNavigator::default()),
        store,
        Arc::new(RecordingModal::default()),
    )
}

#[tokio::test]
async fn bill_icon_is_highlighted_on_bills_page() {
    let (router, document, _) = router_with(employee_storage(), as_store(&fixture_store()));
    router.start().await.unwrap();
    router.on_navigate(Route::Bills.path()).await.unwrap();

    assert!(document.has_test_id("icon-window"));
    assert!(document
        .body()
        .contains(r#"data-testid="icon-window" class="active-icon""#));
    assert!(!document
        .body()
        .contains(r#"data-testid="icon-mail" class="active-icon""#));
}

#[test]
fn raw_bills_are_sorted_from_latest_to_earliest() {
    let mut bills = fixture_bills();
    bills_view::sort_for_display(&mut bills);
    let html = bills_view::render(BillsViewState::Loaded(&bills));
    let date_cell =
        Regex::new(r"<td>((19|20)\d\d[- /.](0[1-9]|1[012])[- /.](0[1-9]|[12][0-9]|3[01]))</td>")
            .unwrap();
    let dates: Vec<String> = date_cell
        .captures_iter(&html)
        .map(|c| c[1].to_string())
        .collect();

    let mut anti_chrono = dates.clone();
    anti_chrono.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates.len(), bills.len());
    assert_eq!(dates, anti_chrono);
}

#[tokio::test]
async fn bills_page_lists_formatted_dates_from_latest_to_earliest() {
    let (router, document, _) = router_with(employee_storage(), as_store(&fixture_store()));

    router.on_navigate(Route::Bills.path()).await.unwrap();

    let body = document.body();
    let dates: Vec<&str> = ["4 Avr. 04", "3 Mar. 03", "2 Fév. 02", "1 Jan. 01"]
        .into_iter()
        .filter(|date| body.contains(&format!("<td>{date}</td>")))
        .collect();
    assert_eq!(dates.len(), 4, "{body}");
    let positions: Vec<usize> = dates
        .iter()
        .map(|date| body.find(&format!("<td>{date}</td>")).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[tokio::test]
async fn get_bills_for_display_sorts_before_formatting() {
    let res = detached(Some(fixture_store()))
        .get_bills_for_display()
        .await
        .unwrap();

    let dates: Vec<_> = res.iter().map(|b| b.date.as_str()).collect();
    assert_eq!(dates, vec!["4 Avr. 04", "3 Mar. 03", "2 Fév. 02", "1 Jan. 01"]);
}

#[tokio::test]
async fn clicking_an_eye_icon_opens_the_receipt_modal() {
    let (router, _, modal) = router_with(employee_storage(), as_store(&fixture_store()));
    router.on_navigate(Route::Bills.path()).await.unwrap();
    let bills_container = router.bills_container().unwrap();

    let urls = bills_container.eye_icon_urls();
    assert_eq!(urls.len(), fixture_bills().len());
    bills_container
        .dispatch(BillsEvent::IconEyeClicked {
            bill_url: urls[0].clone(),
        })
        .await
        .unwrap();

    let shown = modal.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].0, "Justificatif");
    // Most recent bill is displayed first.
    assert!(urls[0].contains("token=c1640e12"));
    assert!(shown[0].1.contains("token=c1640e12"));
}

#[tokio::test]
async fn new_bill_button_navigates_to_the_form() {
    let navigator = Arc::new(RecordingNavigator::default());
    let bills_container = container(
        Arc::new(Document::new()),
        navigator.clone(),
        None,
        Arc::new(RecordingModal::default()),
    );

    bills_container
        .dispatch(BillsEvent::NewBillClicked)
        .await
        .unwrap();

    assert_eq!(navigator.paths(), vec!["#employee/bill/new".to_string()]);
}

#[tokio::test]
async fn get_bills_formats_every_record() {
    let bills = fixture_bills();
    let res = detached(Some(fixture_store())).get_bills().await.unwrap();

    assert_eq!(res.len(), bills.len());
    assert_eq!(res[0].date, format_date(&bills[0].date).unwrap());
    assert_eq!(res[0].status, format_status(&bills[0].status));
    for (formatted, raw) in res.iter().zip(&bills) {
        assert_eq!(formatted.status, format_status(&raw.status));
        assert_eq!(formatted.id, raw.id);
        assert_eq!(formatted.file_url, raw.file_url);
    }
}

#[tokio::test]
async fn get_bills_keeps_store_order() {
    let bills = fixture_bills();
    let res = detached(Some(fixture_store())).get_bills().await.unwrap();

    let ids: Vec<_> = res.iter().map(|b| b.id.clone()).collect();
    let expected: Vec<_> = bills.iter().map(|b| b.id.clone()).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn get_bills_logs_and_keeps_corrupted_dates() {
    let store = Arc::new(MemoryBillsStore::with_bills(vec![Bill {
        date: "corrupted_date".into(),
        status: "Pending".into(),
        ..Default::default()
    }]));
    let (logs, _guard) = capture_logs();

    let res = detached(Some(store)).get_bills().await.unwrap();

    assert_eq!(res.len(), 1);
    assert_eq!(res[0].date, "corrupted_date");
    assert_eq!(res[0].status, "Pending");
    let text = logs.text();
    assert!(text.contains("could not format bill date"), "logs: {text}");
    assert!(text.contains("corrupted_date"), "logs: {text}");
}

#[tokio::test]
async fn get_bills_without_store_is_empty() {
    let res = detached(None).get_bills().await.unwrap();
    assert!(res.is_empty());
}

#[tokio::test]
async fn get_bills_surfaces_404() {
    let store = fixture_store();
    store.fail_with("Erreur 404");

    let err = detached(Some(store)).get_bills().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        StoreRequestFailed::new("Erreur 404").to_string()
    );
    assert!(err.to_string().starts_with("Erreur 404"), "{err}");
}

#[tokio::test]
async fn get_bills_surfaces_500() {
    let store = fixture_store();
    store.fail_with("Erreur 500");

    let err = detached(Some(store)).get_bills().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        StoreRequestFailed::new("Erreur 500").to_string()
    );
    assert!(err.to_string().starts_with("Erreur 500"), "{err}");
}

#[tokio::test]
async fn calls_are_independent() {
    let store = fixture_store();
    let bills_container = detached(Some(store.clone()));

    let (first, second) =
        futures::future::join(bills_container.get_bills(), bills_container.get_bills()).await;

    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(store.list_calls(), 2);
}

#[tokio::test]
async fn bills_page_shows_formatted_bills() {
    let (router, document, _) = router_with(employee_storage(), as_store(&fixture_store()));
    router.on_navigate("#employee/bills").await.unwrap();

    let body = document.body();
    assert!(body.contains("4 Avr. 04"));
    assert!(body.contains("En attente"));
    assert!(body.contains("Accepté"));
    assert_eq!(document.count_test_id("icon-eye"), 4);
    assert!(document.has_test_id("btn-new-bill"));
}

#[tokio::test]
async fn bills_page_renders_store_errors() {
    let store = fixture_store();
    store.fail_with("Erreur 404");
    let (router, document, _) = router_with(employee_storage(), as_store(&store));

    router.on_navigate(Route::Bills.path()).await.unwrap();

    assert_eq!(
        error_message(&document),
        Some(StoreRequestFailed::new("Erreur 404").to_string())
    );
    assert!(!document.has_test_id("icon-eye"));
}

#[tokio::test]
async fn dashboard_lists_bills_from_the_store() {
    let (router, document, _) = router_with(
        Arc::new(MemoryStorage::new()),
        as_store(&fixture_store()),
    );

    router.on_navigate(Route::Dashboard.path()).await.unwrap();

    let body = document.body();
    assert!(body.contains("Transports"));
    assert!(body.contains("Hôtel et logement"));
    assert!(body.contains("En attente (1)"));
    assert!(body.contains("Validé (1)"));
    assert!(body.contains("Refusé (2)"));
    assert_eq!(document.count_test_id("open-billBeKy5Mo4jkmdfPGYpTxZ"), 1);
}

#[tokio::test]
async fn dashboard_renders_store_errors() {
    let store = fixture_store();
    store.fail_with("Erreur 500");
    let (router, document, _) = router_with(Arc::new(MemoryStorage::new()), as_store(&store));

    router.on_navigate(Route::Dashboard.path()).await.unwrap();

    assert_eq!(
        error_message(&document),
        Some(StoreRequestFailed::new("Erreur 500").to_string())
    );
}

#[tokio::test]
async fn bills_page_recovers_once_the_store_does() {
    let store = fixture_store();
    store.fail_with("Erreur 500");
    let (router, document, _) = router_with(employee_storage(), as_store(&store));
    router.on_navigate(Route::Bills.path()).await.unwrap();
    assert!(document.has_test_id("error-message"));

    store.recover();
    router.on_navigate(Route::Bills.path()).await.unwrap();

    assert!(!document.has_test_id("error-message"));
    assert_eq!(document.count_test_id("icon-eye"), 4);
}

#[tokio::test]
async fn dashboard_logs_and_keeps_corrupted_dates() {
    let store = Arc::new(MemoryBillsStore::with_bills(vec![Bill {
        id: Some("b1".into()),
        date: "corrupted_date".into(),
        status: "pending".into(),
        ..Default::default()
    }]));
    let (router, document, _) = router_with(Arc::new(MemoryStorage::new()), as_store(&store));
    let (logs, _guard) = capture_logs();

    router.on_navigate(Route::Dashboard.path()).await.unwrap();

    assert!(document.body().contains("<span>corrupted_date</span>"));
    let text = logs.text();
    assert!(text.contains("could not format dashboard card date"), "logs: {text}");
    assert!(text.contains("corrupted_date"), "logs: {text}");
}

#[tokio::test]
async fn malformed_session_is_logged_and_bills_still_load() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set_item("user", "{not json");
    let bills_container = BillsContainer::new(
        Arc::new(Document::new()),
        Arc::new(RecordingNavigator::default()),
        storage,
        as_store(&fixture_store()),
        Arc::new(RecordingModal::default()),
    );
    let (logs, _guard) = capture_logs();

    let res = bills_container.get_bills().await.unwrap();

    assert_eq!(res.len(), 4);
    let text = logs.text();
    assert!(text.contains("could not read session user"), "logs: {text}");
}

fn error_message(document: &Document) -> Option<String> {
    let message = Regex::new(r#"(?s)<div data-testid="error-message">(.*?)</div>"#).unwrap();
    message
        .captures(&document.body())
        .map(|c| unescape(&c[1]))
}

fn unescape(raw: &str) -> String {
    raw.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
