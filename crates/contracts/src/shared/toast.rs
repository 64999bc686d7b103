use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "info-circle",
            ToastKind::Success => "check-circle",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast-notification toast-info",
            ToastKind::Success => "toast-notification toast-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    /// Set once the exit animation has started
    pub leaving: bool,
}

/// Stack of visible toasts, newest last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            message: message.into(),
            kind,
            leaving: false,
        });
        id
    }

    pub fn begin_exit(&mut self, id: u64) {
        if let Some(toast) = self.items.iter_mut().find(|t| t.id == id) {
            toast.leaving = true;
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_lifecycle() {
        let mut queue = ToastQueue::new();
        let first = queue.push("Welcome to NAMA Services Portal!", ToastKind::Success);
        let second = queue.push("Language switching feature coming soon!", ToastKind::Info);
        assert_ne!(first, second);
        assert_eq!(queue.len(), 2);

        queue.begin_exit(first);
        assert!(queue.items()[0].leaving);
        assert!(!queue.items()[1].leaving);

        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.items()[0].id, second);

        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn kind_icons() {
        assert_eq!(ToastKind::Success.icon(), "check-circle");
        assert_eq!(ToastKind::Info.icon(), "info-circle");
        assert_eq!(ToastKind::default(), ToastKind::Info);
    }
}
