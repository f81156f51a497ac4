use crate::entities::Route;

/// Side navigation bar. The icon for `active` gets `active-icon`.
pub(crate) fn render(active: Route) -> String {
    let class = |route: Route| if route == active { r#" class="active-icon""# } else { "" };
    format!(
        r#"<div class="vertical-navbar">
  <div class="layout-title"><span>Billed</span></div>
  <div id="layout-icon1" data-testid="icon-window"{}></div>
  <div id="layout-icon2" data-testid="icon-mail"{}></div>
  <div id="layout-disconnect" data-testid="layout-disconnect"></div>
</div>"#,
        class(Route::Bills),
        class(Route::NewBill),
    )
}
