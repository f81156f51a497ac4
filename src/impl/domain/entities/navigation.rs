use async_trait::async_trait;
use fractic_server_error::ServerError;

/// Navigation context handed to containers at construction.
///
/// Rendering a route may need to await the store, hence async.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn on_navigate(&self, path: &str) -> Result<(), ServerError>;
}

/// Overlay capability used to preview receipts.
pub trait Modal: Send + Sync {
    fn show(&self, title: &str, body: &str);
    fn hide(&self);
}
