use crate::{entities::Route, presentation::utils::escape_html};

use super::vertical_layout;

pub fn render(active: Route, error: &str) -> String {
    format!(
        r#"<div class="layout">
{}
  <div class="content">
    <div class="content-header"><div class="content-title">Erreur</div></div>
    <div data-testid="error-message">{}</div>
  </div>
</div>"#,
        vertical_layout::render(active),
        escape_html(error)
    )
}
