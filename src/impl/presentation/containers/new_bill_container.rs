use std::sync::{Arc, Mutex, MutexGuard};

use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::session::load_user,
        repositories::{bills_store::BillsStore, key_value_storage::KeyValueStorage},
        usecases::create_bill_usecase::{CreateBillUsecase as _, CreateBillUsecaseImpl},
    },
    entities::{Bill, BillStatus, Navigator, NewBillForm, ReceiptFile, Route},
};

const DEFAULT_PCT: u32 = 20;

/// Receipt remembered between file selection and form submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingReceipt {
    pub key: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
}

pub struct NewBillContainer {
    navigator: Arc<dyn Navigator>,
    storage: Arc<dyn KeyValueStorage>,
    create_bill_usecase: CreateBillUsecaseImpl,
    receipt: Mutex<PendingReceipt>,
}

impl NewBillContainer {
    pub fn new(
        navigator: Arc<dyn Navigator>,
        storage: Arc<dyn KeyValueStorage>,
        store: Option<Arc<dyn BillsStore>>,
        accepted_extensions: &[String],
    ) -> Self {
        Self {
            navigator,
            storage,
            create_bill_usecase: CreateBillUsecaseImpl::new(store, accepted_extensions),
            receipt: Mutex::new(PendingReceipt::default()),
        }
    }

    pub fn receipt(&self) -> PendingReceipt {
        lock(&self.receipt).clone()
    }

    /// Handles a file picked in the receipt input.
    ///
    /// A rejected file clears whatever was picked before.
    pub async fn handle_change_file(&self, file: ReceiptFile) -> Result<(), ServerError> {
        let file_name = file.name.clone();
        if let Err(e) = self.create_bill_usecase.validate_receipt(&file) {
            tracing::warn!(file_name = %file_name, "rejected receipt file");
            *lock(&self.receipt) = PendingReceipt::default();
            return Err(e);
        }
        let created = self
            .create_bill_usecase
            .upload_receipt(file, self.user_email())
            .await?;
        *lock(&self.receipt) = PendingReceipt {
            key: created.as_ref().map(|c| c.key.clone()),
            file_url: created.map(|c| c.file_url),
            file_name: Some(file_name),
        };
        Ok(())
    }

    /// Sends the completed bill, then returns to the bills page.
    pub async fn handle_submit(&self, form: NewBillForm) -> Result<(), ServerError> {
        let receipt = self.receipt();
        let bill = Bill {
            id: receipt.key.clone(),
            email: self.user_email(),
            expense_type: Some(form.expense_type),
            name: Some(form.name),
            amount: form.amount,
            date: form.date,
            vat: Some(form.vat),
            pct: Some(form.pct.unwrap_or(DEFAULT_PCT)),
            commentary: Some(form.commentary),
            file_url: receipt.file_url,
            file_name: receipt.file_name,
            status: BillStatus::Pending.code().into(),
            ..Default::default()
        };
        self.create_bill_usecase
            .submit(receipt.key.as_deref(), bill)
            .await?;
        self.navigator.on_navigate(Route::Bills.path()).await
    }

    fn user_email(&self) -> Option<String> {
        load_user(self.storage.as_ref())
            .ok()
            .flatten()
            .and_then(|user| user.email)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
