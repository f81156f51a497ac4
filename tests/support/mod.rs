#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use billed_employee::{
    document::Document,
    entities::{Bill, Modal, Navigator, SessionUser},
    router::Router,
    session::store_user,
    store::{BillsStore, KeyValueStorage, MemoryBillsStore, MemoryStorage},
};
use fractic_server_error::ServerError;
use tracing_subscriber::fmt::MakeWriter;

pub const BILLS_JSON: &str = include_str!("../fixtures/bills.json");

pub fn fixture_store() -> Arc<MemoryBillsStore> {
    Arc::new(MemoryBillsStore::from_json(BILLS_JSON).expect("fixture bills"))
}

pub fn as_store(store: &Arc<MemoryBillsStore>) -> Option<Arc<dyn BillsStore>> {
    let store: Arc<dyn BillsStore> = store.clone();
    Some(store)
}

pub fn fixture_bills() -> Vec<Bill> {
    fixture_store().snapshot()
}

pub fn employee_storage() -> Arc<MemoryStorage> {
    let storage = Arc::new(MemoryStorage::new());
    store_user(storage.as_ref(), &SessionUser::employee("a@a")).expect("store user");
    storage
}

pub fn accepted_extensions() -> Vec<String> {
    vec!["jpg".into(), "jpeg".into(), "png".into()]
}

pub fn router_with(
    storage: Arc<dyn KeyValueStorage>,
    store: Option<Arc<dyn BillsStore>>,
) -> (Arc<Router>, Arc<Document>, Arc<RecordingModal>) {
    let document = Arc::new(Document::new());
    let modal = Arc::new(RecordingModal::default());
    let router = Router::new(
        document.clone(),
        storage,
        store,
        modal.clone(),
        accepted_extensions(),
    );
    (router, document, modal)
}

/// Navigator that only remembers where it was sent.
#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().expect("lock paths").clone()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn on_navigate(&self, path: &str) -> Result<(), ServerError> {
        self.paths.lock().expect("lock paths").push(path.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingModal {
    shown: Mutex<Vec<(String, String)>>,
}

impl RecordingModal {
    pub fn shown(&self) -> Vec<(String, String)> {
        self.shown.lock().expect("lock modal").clone()
    }
}

impl Modal for RecordingModal {
    fn show(&self, title: &str, body: &str) {
        self.shown
            .lock()
            .expect("lock modal")
            .push((title.to_string(), body.to_string()));
    }

    fn hide(&self) {}
}

/// In-memory sink for `tracing_subscriber::fmt`.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

pub struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().expect("lock output").clone()).expect("utf8 log output")
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(Arc::clone(&self.0))
    }
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Routes this thread's logs into a buffer until the guard is dropped.
pub fn capture_logs() -> (SharedBuffer, tracing::subscriber::DefaultGuard) {
    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (sink, guard)
}
