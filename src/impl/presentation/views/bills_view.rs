use std::{cmp::Reverse, str::FromStr as _};

use crate::{
    data::models::iso_date_model::ISODateModel,
    entities::{Bill, Route},
    presentation::utils::{escape_html, format_amount},
};

use super::{error_view, loading_view, vertical_layout};

pub enum BillsViewState<'a> {
    Loading,
    Error(&'a str),
    Loaded(&'a [Bill]),
}

pub fn render(state: BillsViewState<'_>) -> String {
    match state {
        BillsViewState::Loading => loading_view::render(Route::Bills),
        BillsViewState::Error(error) => error_view::render(Route::Bills, error),
        BillsViewState::Loaded(bills) => render_table(bills),
    }
}

/// Puts raw bills in page order: most recent first. Bills whose date is not
/// an ISO date go last, keeping their relative order.
///
/// Must run before formatting, since formatted dates no longer parse.
pub fn sort_for_display(bills: &mut [Bill]) {
    bills.sort_by_cached_key(|bill| Reverse(ISODateModel::from_str(&bill.date).ok()));
}

/// Rows are rendered in the order given.
fn render_table(bills: &[Bill]) -> String {
    let rows: String = bills.iter().map(render_row).collect();
    format!(
        r#"<div class="layout">
{}
  <div class="content">
    <div class="content-header">
      <div class="content-title">Mes notes de frais</div>
      <button type="button" data-testid="btn-new-bill" class="btn btn-primary">Nouvelle note de frais</button>
    </div>
    <div id="data-table">
      <table id="example" class="table table-striped">
        <thead>
          <tr><th>Type</th><th>Nom</th><th>Date</th><th>Montant</th><th>Statut</th><th>Actions</th></tr>
        </thead>
        <tbody data-testid="tbody">
{}        </tbody>
      </table>
    </div>
  </div>
</div>"#,
        vertical_layout::render(Route::Bills),
        rows
    )
}

fn render_row(bill: &Bill) -> String {
    let text = |v: &Option<String>| escape_html(v.as_deref().unwrap_or_default());
    format!(
        r#"          <tr>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td><div class="icon-actions"><div id="eye" data-testid="icon-eye" data-bill-url="{}"></div></div></td>
          </tr>
"#,
        text(&bill.expense_type),
        text(&bill.name),
        escape_html(&bill.date),
        format_amount(bill.amount),
        escape_html(&bill.status),
        text(&bill.file_url),
    )
}
