use serde_derive::{Deserialize, Serialize};

use crate::entities::Bill;

/// Wire form of a bill, as exchanged with the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct BillModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub expense_type: Option<String>,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub status: String,
}

impl Into<Bill> for BillModel {
    fn into(self) -> Bill {
        Bill {
            id: self.id,
            name: self.name,
            expense_type: self.expense_type,
            date: self.date,
            amount: self.amount,
            vat: self.vat,
            pct: self.pct,
            commentary: self.commentary,
            comment_admin: self.comment_admin,
            file_url: self.file_url,
            file_name: self.file_name,
            email: self.email,
            status: self.status,
        }
    }
}

impl From<Bill> for BillModel {
    fn from(bill: Bill) -> Self {
        BillModel {
            id: bill.id,
            name: bill.name,
            expense_type: bill.expense_type,
            date: bill.date,
            amount: bill.amount,
            vat: bill.vat,
            pct: bill.pct,
            commentary: bill.commentary,
            comment_admin: bill.comment_admin,
            file_url: bill.file_url,
            file_name: bill.file_name,
            email: bill.email,
            status: bill.status,
        }
    }
}
