use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Alert,
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxItem {
    pub id: u32,
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
    pub received: String,
    pub unread: bool,
}

/// Notifications listed in the notifications section and counted on the bell badge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inbox {
    items: Vec<InboxItem>,
}

impl Inbox {
    pub fn new(items: Vec<InboxItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[InboxItem] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|i| i.unread).count()
    }

    /// Returns false when the id is unknown
    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.unread = false;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in self.items.iter_mut() {
            item.unread = false;
        }
    }

    /// Sample inbox shown until a backend exists
    pub fn sample() -> Self {
        let item = |id, level, title: &str, body: &str, received: &str, unread| InboxItem {
            id,
            level,
            title: title.to_string(),
            body: body.to_string(),
            received: received.to_string(),
            unread,
        };
        Self::new(vec![
            item(
                1,
                NotificationLevel::Alert,
                "Scheduled Maintenance",
                "Water supply will be interrupted in Al Khuwair on Friday from 9 AM to 1 PM.",
                "2 hours ago",
                true,
            ),
            item(
                2,
                NotificationLevel::Info,
                "New Bill Available",
                "Your electricity bill for this month is ready to view.",
                "1 day ago",
                true,
            ),
            item(
                3,
                NotificationLevel::Success,
                "Request Completed",
                "Service request SR-2024-118 has been resolved.",
                "3 days ago",
                true,
            ),
            item(
                4,
                NotificationLevel::Info,
                "Meter Reading Reminder",
                "Submit your monthly meter readings before the 25th.",
                "1 week ago",
                false,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_read_single_and_all() {
        let mut inbox = Inbox::sample();
        assert_eq!(inbox.unread_count(), 3);

        assert!(inbox.mark_read(1));
        assert_eq!(inbox.unread_count(), 2);
        assert!(!inbox.mark_read(99));

        inbox.mark_all_read();
        assert_eq!(inbox.unread_count(), 0);
        assert_eq!(inbox.items().len(), 4);
    }
}
