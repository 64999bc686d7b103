use crate::layout::global_context::use_portal;
use crate::shared::a11y::on_activation_key;
use crate::shared::icons::icon;
use contracts::shared::inbox::{InboxItem, NotificationLevel};
use leptos::prelude::*;
use thaw::*;

fn level_icon(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Alert => "alert-triangle",
        NotificationLevel::Info => "info-circle",
        NotificationLevel::Success => "check-circle",
    }
}

fn level_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Alert => "notification-icon alert",
        NotificationLevel::Info => "notification-icon info",
        NotificationLevel::Success => "notification-icon success",
    }
}

#[component]
pub fn NotificationsSection() -> impl IntoView {
    let ctx = use_portal();

    let mark_all = move |_| {
        ctx.inbox.update(|inbox| inbox.mark_all_read());
        ctx.toasts.success("All notifications marked as read");
    };

    view! {
        <div class="section-toolbar">
            <Button
                appearance=ButtonAppearance::Secondary
                size=ButtonSize::Small
                attr:id="markAllRead"
                on_click=mark_all
            >
                "Mark all as read"
            </Button>
        </div>

        <div class="notifications-list">
            <For
                each=move || ctx.inbox.with(|inbox| inbox.items().to_vec())
                key=|item: &InboxItem| (item.id, item.unread)
                children=move |item: InboxItem| {
                    let id = item.id;
                    let mark_read = move || {
                        ctx.inbox.update(|inbox| {
                            if !inbox.mark_read(id) {
                                log::warn!("notification {} no longer exists", id);
                            }
                        });
                    };
                    view! {
                        <div
                            class="notification-item"
                            class:unread=item.unread
                            tabindex="0"
                            on:click=move |_| mark_read()
                            on:keydown=on_activation_key(mark_read)
                        >
                            <div class=level_class(item.level)>{icon(level_icon(item.level))}</div>
                            <div class="notification-content">
                                <h4>{item.title}</h4>
                                <p>{item.body}</p>
                                <span class="notification-time">{item.received}</span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
