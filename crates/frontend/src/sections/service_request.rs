use super::draft_form::DraftForm;
use crate::layout::global_context::use_portal;
use crate::shared::browser::random_sequence;
use crate::shared::components::form_field::FormField;
use crate::shared::icons::icon;
use crate::shared::modal_frame::SuccessModal;
use chrono::{Datelike, Utc};
use contracts::shared::form::service_request_form;
use contracts::shared::format::{format_file_size, format_request_id};
use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
struct Attachment {
    name: String,
    size: u64,
}

#[component]
pub fn ServiceRequestSection() -> impl IntoView {
    let ctx = use_portal();
    let draft = DraftForm::new(&ctx, service_request_form());
    let form = draft.form;
    let attachments = RwSignal::new(Vec::<Attachment>::new());
    let request_id = RwSignal::new(None::<String>);
    let file_input = NodeRef::<Input>::new();

    let save_draft = Callback::new(move |_| draft.save_draft());

    let clear_attachments = move || {
        attachments.set(Vec::new());
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let on_files = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(files) = input.files() else {
            return;
        };
        let list = (0..files.length())
            .filter_map(|i| files.get(i))
            .map(|f| Attachment {
                name: f.name(),
                size: f.size() as u64,
            })
            .collect();
        attachments.set(list);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        draft.submit(ctx, move || {
            clear_attachments();
            let id = format_request_id(Utc::now().year(), random_sequence());
            log::info!("service request reference {}", id);
            request_id.set(Some(id));
        });
    };

    let on_reset = move |_| {
        draft.reset();
        clear_attachments();
    };

    view! {
        <div class="form-card">
            <form id="serviceRequestForm" novalidate=true on:submit=on_submit>
                <div class="form-grid">
                    {draft
                        .text_fields()
                        .into_iter()
                        .map(|id| view! { <FormField form=form field_id=id on_change=save_draft /> })
                        .collect_view()}
                </div>

                <div class="form-group">
                    <label for="attachments">"Attachments"</label>
                    <label class="file-upload">
                        {icon("file")}
                        <span>"Click to upload photos or documents"</span>
                        <input
                            type="file"
                            id="attachments"
                            multiple=true
                            node_ref=file_input
                            on:change=on_files
                        />
                    </label>
                    <ul class="file-list">
                        {move || {
                            attachments
                                .get()
                                .into_iter()
                                .map(|a| {
                                    view! {
                                        <li class="file-item">
                                            {icon("file")}
                                            <span class="file-name">{a.name}</span>
                                            <span class="file-size">{format_file_size(a.size)}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>

                <div class="form-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        button_type=ButtonType::Button
                        attr:id="resetForm"
                        on_click=on_reset
                    >
                        "Reset"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=Signal::derive(move || draft.is_submitting(&ctx))
                    >
                        "Submit Request"
                    </Button>
                </div>
            </form>
        </div>

        <SuccessModal request_id=request_id on_close=Callback::new(move |_| request_id.set(None)) />
    }
}
