//! Sidebar navigation: one nav entry per mounted section

use crate::layout::global_context::use_portal;
use crate::shared::icons::icon;
use contracts::enums::Section;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_portal();
    let sections: Vec<Section> = ctx.nav.with_untracked(|nav| nav.sections().collect());

    view! {
        <div class="app-sidebar__header">
            <span class="app-sidebar__brand">"NAMA Services"</span>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                class="app-sidebar__close"
                attr:id="closeSidebar"
                attr:title="Close menu"
                on_click=move |_| ctx.close_side_menu()
            >
                {icon("x")}
            </Button>
        </div>
        <nav class="app-sidebar__content">
            {sections
                .into_iter()
                .map(|section| {
                    let code = section.code();
                    view! {
                        <a
                            href="#"
                            class="nav-item app-sidebar__item"
                            class:active=move || ctx.nav.with(|nav| nav.is_nav_highlighted(section))
                            data-section=code
                            on:click=move |ev| {
                                ev.prevent_default();
                                ctx.activate_nav_entry(code);
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(section.icon())}
                                <span>{section.nav_label()}</span>
                            </div>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
