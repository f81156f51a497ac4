use std::sync::{Arc, LazyLock};

use fractic_server_error::ServerError;
use regex::Regex;

use crate::{
    domain::{
        logic::{bills_formatter::BillsFormatter, session::load_user},
        repositories::{bills_store::BillsStore, key_value_storage::KeyValueStorage},
        usecases::get_bills_usecase::{GetBillsUsecase, GetBillsUsecaseImpl},
    },
    entities::{Bill, Modal, Navigator, Route},
    presentation::{document::Document, utils::escape_html, views::bills_view},
};

static EYE_ICON_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-testid="icon-eye" data-bill-url="([^"]*)""#).expect("valid regex")
});

/// User actions available on the bills page.
#[derive(Debug, Clone, PartialEq)]
pub enum BillsEvent {
    NewBillClicked,
    IconEyeClicked { bill_url: String },
}

pub struct BillsContainer {
    document: Arc<Document>,
    navigator: Arc<dyn Navigator>,
    storage: Arc<dyn KeyValueStorage>,
    modal: Arc<dyn Modal>,
    get_bills_usecase: GetBillsUsecaseImpl,
}

impl BillsContainer {
    pub fn new(
        document: Arc<Document>,
        navigator: Arc<dyn Navigator>,
        storage: Arc<dyn KeyValueStorage>,
        store: Option<Arc<dyn BillsStore>>,
        modal: Arc<dyn Modal>,
    ) -> Self {
        Self {
            document,
            navigator,
            storage,
            modal,
            get_bills_usecase: GetBillsUsecaseImpl::new(store),
        }
    }

    pub async fn dispatch(&self, event: BillsEvent) -> Result<(), ServerError> {
        match event {
            BillsEvent::NewBillClicked => self.handle_click_new_bill().await,
            BillsEvent::IconEyeClicked { bill_url } => {
                self.handle_click_icon_eye(&bill_url);
                Ok(())
            }
        }
    }

    pub async fn handle_click_new_bill(&self) -> Result<(), ServerError> {
        self.navigator.on_navigate(Route::NewBill.path()).await
    }

    /// Opens the receipt preview for the clicked row.
    pub fn handle_click_icon_eye(&self, bill_url: &str) {
        let body = format!(
            r#"<div style="text-align: center;" class="bill-proof-container"><img width="100%" src="{}" alt="Bill" /></div>"#,
            escape_html(bill_url)
        );
        self.modal.show("Justificatif", &body);
    }

    /// Receipt URLs of the eye icons currently rendered, top to bottom.
    pub fn eye_icon_urls(&self) -> Vec<String> {
        EYE_ICON_URL
            .captures_iter(&self.document.body())
            .map(|c| unescape_attr(&c[1]))
            .collect()
    }

    /// Bills formatted for display, in store order.
    pub async fn get_bills(&self) -> Result<Vec<Bill>, ServerError> {
        tracing::debug!(user = ?self.session_email(), "listing bills");
        self.get_bills_usecase.get_bills().await
    }

    /// Bills as the page lists them: sorted on their raw dates, then
    /// formatted.
    pub async fn get_bills_for_display(&self) -> Result<Vec<Bill>, ServerError> {
        tracing::debug!(user = ?self.session_email(), "listing bills for display");
        let mut bills = self.get_bills_usecase.get_raw_bills().await?;
        bills_view::sort_for_display(&mut bills);
        Ok(BillsFormatter::new(bills).process())
    }

    fn session_email(&self) -> Option<String> {
        match load_user(self.storage.as_ref()) {
            Ok(user) => user.and_then(|user| user.email),
            Err(e) => {
                tracing::warn!(error = ?e, "could not read session user");
                None
            }
        }
    }
}

fn unescape_attr(raw: &str) -> String {
    raw.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
