use crate::layout::global_context::use_portal;
use leptos::prelude::*;

/// Slide-in container for the sidebar; on narrow viewports a backdrop
/// catches clicks outside the menu.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_portal();
    let is_open = move || ctx.nav.with(|nav| nav.side_menu_open());

    view! {
        <Show when=is_open>
            <div class="sidebar-backdrop" on:click=move |_| ctx.handle_outside_click()></div>
        </Show>
        <aside id="sidebar" data-zone="left" class="sidebar left" class:active=is_open>
            {children()}
        </aside>
    }
}
