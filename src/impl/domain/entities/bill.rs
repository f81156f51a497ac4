/// Expense record as held by the store.
///
/// Once passed through the retrieval pipeline, `date` and `status` hold
/// display strings instead of raw values. All other fields are carried
/// through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bill {
    pub id: Option<String>,
    pub name: Option<String>,
    pub expense_type: Option<String>,
    pub date: String,
    pub amount: Option<f64>,
    pub vat: Option<String>,
    pub pct: Option<u32>,
    pub commentary: Option<String>,
    pub comment_admin: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub email: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub const ALL: [BillStatus; 3] = [BillStatus::Pending, BillStatus::Accepted, BillStatus::Refused];

    /// Parses a raw status code. Codes are case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(BillStatus::Pending),
            "accepted" => Some(BillStatus::Accepted),
            "refused" => Some(BillStatus::Refused),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }
}

/// Receipt picked in the new bill form's file input.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Payload of the store's create call: the receipt and its owner.
#[derive(Debug, Clone)]
pub struct CreateBillRequest {
    pub file: ReceiptFile,
    pub email: Option<String>,
}

/// Store response once a receipt has been uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedBill {
    pub key: String,
    pub file_url: String,
}

/// Values entered in the new bill form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: Option<f64>,
    pub vat: String,
    pub pct: Option<u32>,
    pub commentary: String,
}
