//! TopHeader component - page title bar.
//!
//! Contains:
//! - Mobile menu toggle
//! - Title/subtitle of the current section
//! - Language toggle placeholder
//! - Notification bell with unread badge

use crate::layout::global_context::use_portal;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_portal();

    let title = move || ctx.nav.with(|nav| nav.title().to_string());
    let subtitle = move || ctx.nav.with(|nav| nav.subtitle().to_string());
    let unread = move || ctx.inbox.with(|inbox| inbox.unread_count());

    view! {
        <header class="top-header">
            <Button
                appearance=ButtonAppearance::Subtle
                class="top-header__icon-btn top-header__menu-toggle"
                attr:id="mobileMenuToggle"
                attr:title="Open menu"
                on_click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    ctx.open_side_menu();
                }
            >
                {icon("menu")}
            </Button>

            <div class="top-header__brand">
                <h1 class="page-title">{title}</h1>
                <p class="page-subtitle">{subtitle}</p>
            </div>

            <div class="top-header__actions">
                // i18n hook: no translations yet
                <Button
                    appearance=ButtonAppearance::Subtle
                    class="top-header__icon-btn"
                    attr:id="languageToggle"
                    attr:title="العربية"
                    on_click=move |_| ctx.toasts.info("Language switching feature coming soon!")
                >
                    {icon("globe")}
                </Button>

                <Button
                    appearance=ButtonAppearance::Subtle
                    class="top-header__icon-btn"
                    attr:id="notificationIcon"
                    attr:title="Notifications"
                    on_click=move |_| ctx.open_notifications()
                >
                    {icon("bell")}
                    <Show when=move || unread() != 0>
                        <Badge
                            appearance=BadgeAppearance::Filled
                            color=BadgeColor::Danger
                            size=BadgeSize::Small
                            class="notification-badge"
                        >
                            {unread}
                        </Badge>
                    </Show>
                </Button>
            </div>
        </header>
    }
}
