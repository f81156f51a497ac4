use crate::{
    domain::logic::format::format_date,
    entities::{Bill, BillStatus, Route},
    presentation::utils::{escape_html, format_amount},
};

use super::vertical_layout;

/// Admin dashboard: one collapsible section per status.
pub fn render(sections: &[(BillStatus, Vec<Bill>)]) -> String {
    let body: String = sections
        .iter()
        .enumerate()
        .map(|(i, (status, bills))| render_section(i + 1, *status, bills))
        .collect();
    format!(
        r#"<div class="layout">
{}
  <div class="dashboard-content">
{}  </div>
</div>"#,
        vertical_layout::render(Route::Dashboard),
        body
    )
}

fn section_title(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Validé",
        BillStatus::Refused => "Refusé",
    }
}

fn render_section(index: usize, status: BillStatus, bills: &[Bill]) -> String {
    let cards: String = bills.iter().map(render_card).collect();
    format!(
        r#"    <div class="status-bills-header" id="arrow-icon{index}" data-testid="status-bills-header{index}">
      <h3>{} ({})</h3>
    </div>
    <div class="status-bills-container" id="status-bills-container{index}">
{}    </div>
"#,
        section_title(status),
        bills.len(),
        cards
    )
}

fn render_card(bill: &Bill) -> String {
    let text = |v: &Option<String>| escape_html(v.as_deref().unwrap_or_default());
    let date = format_date(&bill.date).unwrap_or_else(|e| {
        tracing::warn!(
            bill_id = ?bill.id,
            date = %bill.date,
            error = ?e,
            "could not format dashboard card date, keeping raw value"
        );
        bill.date.clone()
    });
    format!(
        r#"      <div class="bill-card" id="open-bill{id}" data-testid="open-bill{id}">
        <div class="bill-card-name-container"><span class="bill-card-grey">{}</span><span>{}</span></div>
        <div class="name-price-container"><span>{}</span><span>{}</span></div>
        <div class="date-type-container"><span>{}</span><span>{}</span></div>
      </div>
"#,
        text(&bill.email),
        text(&bill.id),
        text(&bill.name),
        format_amount(bill.amount),
        escape_html(&date),
        text(&bill.expense_type),
        id = text(&bill.id),
    )
}
