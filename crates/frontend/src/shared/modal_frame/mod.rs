use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Modal frame container (overlay + positioned surface).
///
/// Closes on a click that both starts and ends on the overlay itself, so a
/// text selection dragged out of the dialog does not dismiss it.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close (overlay click or close button).
    on_close: Callback<()>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Next tick: the overlay must not be removed during its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay active"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=modal_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

/// Confirmation shown after a service request was accepted
#[component]
pub fn SuccessModal(
    #[prop(into)] request_id: Signal<Option<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || request_id.get().is_some()>
            <ModalFrame on_close=on_close modal_class="modal--success".to_string()>
                <div class="modal-icon">{icon("check-circle")}</div>
                <h2>"Request Submitted Successfully!"</h2>
                <p>
                    "Your service request has been received. Reference: "
                    <strong id="requestId">{move || request_id.get().unwrap_or_default()}</strong>
                </p>
                <Button
                    appearance=ButtonAppearance::Primary
                    attr:id="closeModal"
                    on_click=move |_| on_close.run(())
                >
                    "Close"
                </Button>
            </ModalFrame>
        </Show>
    }
}
