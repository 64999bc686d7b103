use contracts::shared::a11y::is_activation_key;
use leptos::ev::KeyboardEvent;

/// Keyboard shim for focusable cards: Enter or Space acts like a click
pub fn on_activation_key<F>(activate: F) -> impl Fn(KeyboardEvent) + 'static
where
    F: Fn() + 'static,
{
    move |ev: KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            activate();
        }
    }
}
