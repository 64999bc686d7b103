use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level content panes of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Dashboard,
    ServiceRequest,
    MeterReading,
    Bills,
    Notifications,
    TrackRequests,
}

impl Section {
    /// Stable lookup key shared by the content pane and its nav entry
    pub fn code(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::ServiceRequest => "service-request",
            Section::MeterReading => "meter-reading",
            Section::Bills => "bills",
            Section::Notifications => "notifications",
            Section::TrackRequests => "track-requests",
        }
    }

    /// Label shown on the nav entry
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::ServiceRequest => "Service Request",
            Section::MeterReading => "Meter Reading",
            Section::Bills => "Bills & Reports",
            Section::Notifications => "Notifications",
            Section::TrackRequests => "Track Requests",
        }
    }

    /// Icon name for the nav entry
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "layout-dashboard",
            Section::ServiceRequest => "wrench",
            Section::MeterReading => "gauge",
            Section::Bills => "file-text",
            Section::Notifications => "bell",
            Section::TrackRequests => "list",
        }
    }

    pub fn all() -> [Section; 6] {
        [
            Section::Dashboard,
            Section::ServiceRequest,
            Section::MeterReading,
            Section::Bills,
            Section::Notifications,
            Section::TrackRequests,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dashboard" => Some(Section::Dashboard),
            "service-request" => Some(Section::ServiceRequest),
            "meter-reading" => Some(Section::MeterReading),
            "bills" => Some(Section::Bills),
            "notifications" => Some(Section::Notifications),
            "track-requests" => Some(Section::TrackRequests),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_back() {
        for section in Section::all() {
            assert_eq!(Section::from_code(section.code()), Some(section));
        }
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(Section::from_code("settings"), None);
        assert_eq!(Section::from_code(""), None);
        assert_eq!(Section::from_code("Dashboard"), None);
    }

    #[test]
    fn serde_uses_codes() {
        let json = serde_json::to_string(&Section::MeterReading).unwrap();
        assert_eq!(json, "\"meter-reading\"");
    }
}
