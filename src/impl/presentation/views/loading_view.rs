use crate::entities::Route;

use super::vertical_layout;

pub fn render(active: Route) -> String {
    format!(
        r#"<div class="layout">
{}
  <div class="content" id="loading" data-testid="loading">Loading...</div>
</div>"#,
        vertical_layout::render(active)
    )
}
