use crate::app_shell::AppShell;
use crate::layout::global_context::PortalContext;
use crate::shared::charts::ChartService;
use crate::shared::loading::LoadingService;
use crate::shared::storage::get_config_override;
use crate::shared::toast::ToastService;
use contracts::shared::config::PortalConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = PortalConfig::resolve(get_config_override().as_deref()).unwrap_or_else(|e| {
        log::error!("Failed to load portal config: {}", e);
        PortalConfig::default()
    });

    let charts = ChartService::new();
    let toasts = ToastService::new(config.timings.toast_duration_ms, config.timings.toast_exit_ms);
    let loading = LoadingService::new();

    provide_context(charts);
    provide_context(toasts);
    provide_context(loading);
    provide_context(PortalContext::new(config, charts, toasts, loading));

    view! { <AppShell /> }
}
