//! Application shell: layout plus the page-wide behaviours that are not
//! owned by any single section (resize handling, welcome toast, overlays).

use crate::layout::center::center::Center;
use crate::layout::global_context::use_portal;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::loading::LoadingOverlayView;
use crate::shared::toast::ToastHost;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Re-evaluate layout once the viewport has stopped changing size.
fn install_resize_debounce() {
    let ctx = use_portal();
    let delay = ctx.config.with_value(|c| c.timings.resize_debounce_ms);
    let pending = StoredValue::new_local(None::<Timeout>);

    let _ = window_event_listener(leptos::ev::resize, move |_| {
        // replacing the pending timeout drops and cancels it
        pending.set_value(Some(Timeout::new(delay, move || ctx.on_resize_settled())));
    });
}

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_portal();

    install_resize_debounce();

    // Canvases register while rendering; instances are created once mounted.
    Effect::new(move |_| {
        ctx.charts.initialize_charts();
    });

    let welcome_delay = ctx.config.with_value(|c| c.timings.welcome_delay_ms);
    spawn_local(async move {
        TimeoutFuture::new(welcome_delay).await;
        ctx.toasts.success("Welcome to NAMA Services Portal!");
    });

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Center /> }.into_any()
        />
        <ToastHost />
        <LoadingOverlayView />
    }
}
