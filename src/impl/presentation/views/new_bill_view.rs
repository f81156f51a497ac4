use crate::{entities::Route, presentation::utils::escape_html};

use super::vertical_layout;

pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

pub fn render() -> String {
    let options: String = EXPENSE_TYPES
        .iter()
        .map(|t| format!("<option>{}</option>", escape_html(t)))
        .collect();
    format!(
        r#"<div class="layout">
{}
  <div class="content">
    <div class="content-header"><div class="content-title">Envoyer une note de frais</div></div>
    <form data-testid="form-new-bill">
      <label for="expense-type">Type de dépense</label>
      <select required data-testid="expense-type">{}</select>
      <label for="expense-name">Nom de la dépense</label>
      <input type="text" data-testid="expense-name" placeholder="Vol Paris Londres">
      <label for="datepicker">Date</label>
      <input required type="date" data-testid="datepicker">
      <label for="amount">Montant TTC</label>
      <input required type="number" data-testid="amount" placeholder="348">
      <label for="vat">TVA</label>
      <input type="number" data-testid="vat" placeholder="70">
      <input required type="number" data-testid="pct" placeholder="20"> %
      <label for="commentary">Commentaire</label>
      <textarea data-testid="commentary"></textarea>
      <label for="file">Justificatif</label>
      <input required type="file" accept=".jpg,.jpeg,.png" data-testid="file">
      <button type="submit" id="btn-send-bill">Envoyer</button>
    </form>
  </div>
</div>"#,
        vertical_layout::render(Route::NewBill),
        options
    )
}
