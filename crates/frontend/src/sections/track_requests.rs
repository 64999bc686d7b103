use crate::shared::icons::icon;
use contracts::shared::requests::{sample_requests, search_requests};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TrackRequestsSection() -> impl IntoView {
    let requests = StoredValue::new(sample_requests());
    let term = RwSignal::new(String::new());

    let visible = move || {
        let term = term.get();
        requests.with_value(|items| {
            search_requests(items, &term)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="search-box">
            {icon("search")}
            <Input
                value=term
                id="searchRequests"
                input_type=InputType::Search
                placeholder="Search requests..."
            />
        </div>

        <div class="requests-list">
            <For
                each=visible
                key=|item| item.id.clone()
                children=|item| {
                    view! {
                        <div class="request-item">
                            <div class="request-item__header">
                                <span class="request-id">{item.id}</span>
                                <span class=item.status.css_class()>{item.status.display_name()}</span>
                            </div>
                            <h4>{item.title}</h4>
                            <div class="request-item__meta">
                                <span>{item.location}</span>
                                <span>"Submitted " {item.submitted}</span>
                            </div>
                        </div>
                    }
                }
            />
            <Show when=move || visible().is_empty()>
                <p class="empty-state">"No requests match your search"</p>
            </Show>
        </div>
    }
}
