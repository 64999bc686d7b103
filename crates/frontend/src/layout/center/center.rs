use crate::layout::global_context::use_portal;
use crate::sections::{
    BillsSection, DashboardSection, MeterReadingSection, NotificationsSection,
    ServiceRequestSection, TrackRequestsSection,
};
use contracts::enums::Section;
use leptos::prelude::*;

fn section_view(section: Section) -> AnyView {
    match section {
        Section::Dashboard => view! { <DashboardSection /> }.into_any(),
        Section::ServiceRequest => view! { <ServiceRequestSection /> }.into_any(),
        Section::MeterReading => view! { <MeterReadingSection /> }.into_any(),
        Section::Bills => view! { <BillsSection /> }.into_any(),
        Section::Notifications => view! { <NotificationsSection /> }.into_any(),
        Section::TrackRequests => view! { <TrackRequestsSection /> }.into_any(),
    }
}

/// Content panes. Every pane stays mounted; only the active one is shown.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_portal();
    let sections: Vec<Section> = ctx.nav.with_untracked(|nav| nav.sections().collect());

    view! {
        <div data-zone="center" class="content">
            {sections
                .into_iter()
                .map(|section| {
                    view! {
                        <section
                            id=section.code()
                            class="section"
                            class:active=move || ctx.nav.with(|nav| nav.is_pane_active(section))
                        >
                            {section_view(section)}
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
