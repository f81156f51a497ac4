use fractic_server_error::ServerError;

use crate::{
    domain::logic::format::{format_date, format_status},
    entities::Bill,
};

/// Turns store records into display records, one at a time.
///
/// A record whose date cannot be formatted is logged and kept with its raw
/// date. The output always has the input's length and order.
pub(crate) struct BillsFormatter {
    bills: Vec<Bill>,
}

impl BillsFormatter {
    pub(crate) fn new(bills: Vec<Bill>) -> Self {
        Self { bills }
    }

    pub(crate) fn process(self) -> Vec<Bill> {
        self.bills
            .into_iter()
            .map(|bill| match format_bill(&bill) {
                Ok(formatted) => formatted,
                Err(e) => {
                    tracing::warn!(
                        bill_id = ?bill.id,
                        date = %bill.date,
                        error = ?e,
                        "could not format bill date, keeping raw value"
                    );
                    Bill {
                        status: format_status(&bill.status),
                        ..bill
                    }
                }
            })
            .collect()
    }
}

fn format_bill(bill: &Bill) -> Result<Bill, ServerError> {
    Ok(Bill {
        date: format_date(&bill.date)?,
        status: format_status(&bill.status),
        ..bill.clone()
    })
}
