use std::str::FromStr as _;

use chrono::{Datelike as _, NaiveDate};
use fractic_server_error::ServerError;

use crate::{data::models::iso_date_model::ISODateModel, entities::BillStatus};

/// French short month names, capitalised and cut to three letters.
const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Formats a `YYYY-MM-DD` date for display, e.g. `2004-04-04` becomes
/// `4 Avr. 04`.
///
/// Fails on anything that is not a valid calendar date. Callers that must
/// not fail fall back to the raw string themselves.
pub fn format_date(raw: &str) -> Result<String, ServerError> {
    let date: NaiveDate = ISODateModel::from_str(raw)?.into();
    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year().rem_euclid(100)
    ))
}

/// Display label for a status code. Unknown codes are returned as-is.
pub fn format_status(code: &str) -> String {
    match BillStatus::from_code(code) {
        Some(status) => status.label().into(),
        None => code.into(),
    }
}

impl BillStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refused",
        }
    }
}
