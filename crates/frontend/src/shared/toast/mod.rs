//! Toast notifications: fire-and-forget messages stacked in the top right
//! corner that dismiss themselves.

use crate::shared::icons::icon;
use contracts::shared::toast::{ToastKind, ToastQueue};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
    exit_ms: u32,
}

impl ToastService {
    pub fn new(duration_ms: u32, exit_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
            duration_ms,
            exit_ms,
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        log::debug!("toast ({:?}): {}", kind, message);

        let mut id = 0;
        self.queue.update(|q| id = q.push(message, kind));

        let queue = self.queue;
        let (duration_ms, exit_ms) = (self.duration_ms, self.exit_ms);
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            queue.update(|q| q.begin_exit(id));
            TimeoutFuture::new(exit_ms).await;
            queue.update(|q| q.dismiss(id));
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.queue.get().items().to_vec()
                key=|toast| (toast.id, toast.leaving)
                children=move |toast| {
                    view! {
                        <div
                            class=toast.kind.css_class()
                            class:toast-leaving=toast.leaving
                            role="status"
                        >
                            {icon(toast.kind.icon())}
                            <span>{toast.message.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
