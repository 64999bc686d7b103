use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Paid,
    Unpaid,
    Overdue,
}

impl BillStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BillStatus::Paid => "paid",
            BillStatus::Unpaid => "unpaid",
            BillStatus::Overdue => "overdue",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BillStatus::Paid => "Paid",
            BillStatus::Unpaid => "Unpaid",
            BillStatus::Overdue => "Overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillFilter {
    #[default]
    All,
    Only(BillStatus),
}

impl BillFilter {
    /// Parse the value of the bills filter select; unknown values show everything
    pub fn from_code(code: &str) -> Self {
        match code {
            "paid" => BillFilter::Only(BillStatus::Paid),
            "unpaid" => BillFilter::Only(BillStatus::Unpaid),
            "overdue" => BillFilter::Only(BillStatus::Overdue),
            _ => BillFilter::All,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BillFilter::All => "all",
            BillFilter::Only(status) => status.code(),
        }
    }

    pub fn matches(&self, bill: &Bill) -> bool {
        match self {
            BillFilter::All => true,
            BillFilter::Only(status) => bill.status == *status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    pub utility: String,
    pub period: String,
    pub amount: f64,
    pub due_date: String,
    pub status: BillStatus,
}

pub fn filter_bills<'a>(bills: &'a [Bill], filter: BillFilter) -> Vec<&'a Bill> {
    bills.iter().filter(|b| filter.matches(b)).collect()
}

pub fn sample_bills() -> Vec<Bill> {
    let bill = |id: &str, utility: &str, period: &str, amount, due: &str, status| Bill {
        id: id.to_string(),
        utility: utility.to_string(),
        period: period.to_string(),
        amount,
        due_date: due.to_string(),
        status,
    };
    vec![
        bill("INV-2024-0312", "Electricity", "March 2024", 45.75, "2024-04-15", BillStatus::Unpaid),
        bill("INV-2024-0311", "Water", "March 2024", 12.30, "2024-04-15", BillStatus::Unpaid),
        bill("INV-2024-0212", "Electricity", "February 2024", 41.20, "2024-03-15", BillStatus::Overdue),
        bill("INV-2024-0211", "Water", "February 2024", 11.85, "2024-03-15", BillStatus::Paid),
        bill("INV-2024-0112", "Electricity", "January 2024", 39.60, "2024-02-15", BillStatus::Paid),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_by_status() {
        let bills = sample_bills();
        assert_eq!(filter_bills(&bills, BillFilter::All).len(), 5);
        assert_eq!(filter_bills(&bills, BillFilter::from_code("paid")).len(), 2);
        assert_eq!(filter_bills(&bills, BillFilter::from_code("unpaid")).len(), 2);
        let overdue = filter_bills(&bills, BillFilter::from_code("overdue"));
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].id, "INV-2024-0212");
    }

    #[test]
    fn unknown_filter_shows_all() {
        assert_eq!(BillFilter::from_code("cancelled"), BillFilter::All);
        assert_eq!(BillFilter::from_code("all").code(), "all");
    }
}
