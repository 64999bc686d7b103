use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
}

impl RequestStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Completed => "Completed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "status-pending",
            RequestStatus::InProgress => "status-in-progress",
            RequestStatus::Completed => "status-completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequestItem {
    pub id: String,
    pub title: String,
    pub location: String,
    pub submitted: String,
    pub status: RequestStatus,
}

impl ServiceRequestItem {
    /// Everything a user can see on the card, as searched by the filter
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.id,
            self.title,
            self.location,
            self.submitted,
            self.status.display_name()
        )
        .to_lowercase()
    }

    pub fn matches(&self, term: &str) -> bool {
        self.search_text().contains(&term.to_lowercase())
    }
}

/// Case-insensitive substring search; an empty term keeps every item
pub fn search_requests<'a>(
    items: &'a [ServiceRequestItem],
    term: &str,
) -> Vec<&'a ServiceRequestItem> {
    items.iter().filter(|item| item.matches(term)).collect()
}

pub fn sample_requests() -> Vec<ServiceRequestItem> {
    let item = |id: &str, title: &str, location: &str, submitted: &str, status| {
        ServiceRequestItem {
            id: id.to_string(),
            title: title.to_string(),
            location: location.to_string(),
            submitted: submitted.to_string(),
            status,
        }
    };
    vec![
        item("SR-2024-121", "Water Leakage", "Al Khuwair, Muscat", "Mar 18, 2024", RequestStatus::InProgress),
        item("SR-2024-119", "Power Outage", "Ruwi, Muscat", "Mar 12, 2024", RequestStatus::Pending),
        item("SR-2024-118", "Meter Replacement", "Seeb, Muscat", "Mar 02, 2024", RequestStatus::Completed),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive() {
        let items = sample_requests();
        assert_eq!(search_requests(&items, "").len(), 3);
        assert_eq!(search_requests(&items, "WATER").len(), 1);
        assert_eq!(search_requests(&items, "muscat").len(), 3);
        assert_eq!(search_requests(&items, "in progress")[0].id, "SR-2024-121");
        assert!(search_requests(&items, "sohar").is_empty());
    }
}
