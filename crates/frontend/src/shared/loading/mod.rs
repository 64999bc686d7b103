use contracts::shared::submission::LoadingOverlay;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::Spinner;

/// Global "working..." overlay shown while a simulated request is pending
#[derive(Clone, Copy)]
pub struct LoadingService {
    overlay: RwSignal<LoadingOverlay>,
}

impl LoadingService {
    pub fn new() -> Self {
        Self {
            overlay: RwSignal::new(LoadingOverlay::default()),
        }
    }

    pub fn show(&self) {
        self.overlay.update(|o| o.show());
    }

    pub fn hide(&self) {
        self.overlay.update(|o| o.hide());
    }

    pub fn is_visible(&self) -> bool {
        self.overlay.get().is_visible()
    }

    /// Stand-in for a network round trip: overlay on, wait, overlay off
    pub async fn simulate(&self, delay_ms: u32) {
        self.show();
        TimeoutFuture::new(delay_ms).await;
        self.hide();
    }
}

pub fn use_loading() -> LoadingService {
    use_context::<LoadingService>().expect("LoadingService not provided in context")
}

#[component]
pub fn LoadingOverlayView() -> impl IntoView {
    let loading = use_loading();

    view! {
        <div id="loadingOverlay" class="loading-overlay" class:active=move || loading.is_visible()>
            <Spinner />
        </div>
    }
}
