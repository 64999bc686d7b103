use super::draft_form::DraftForm;
use crate::layout::global_context::use_portal;
use crate::shared::components::form_field::FormField;
use contracts::shared::form::meter_reading_form;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MeterReadingSection() -> impl IntoView {
    let ctx = use_portal();
    let meter = ctx.config.with_value(|c| c.meter.clone());
    let draft = DraftForm::new(&ctx, meter_reading_form(&meter));
    let form = draft.form;

    let save_draft = Callback::new(move |_| draft.save_draft());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        draft.submit(ctx, move || {
            ctx.toasts.success("Meter readings submitted successfully!");
        });
    };

    view! {
        <div class="form-card">
            <div class="previous-readings">
                <span>"Previous electricity reading: " <strong>{format!("{} kWh", meter.previous_electricity)}</strong></span>
                <span>"Previous water reading: " <strong>{format!("{} m³", meter.previous_water)}</strong></span>
            </div>
            <form id="meterReadingForm" novalidate=true on:submit=on_submit>
                <div class="form-grid">
                    {draft
                        .text_fields()
                        .into_iter()
                        .map(|id| view! { <FormField form=form field_id=id on_change=save_draft /> })
                        .collect_view()}
                </div>
                <div class="form-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        button_type=ButtonType::Button
                        attr:id="resetMeterForm"
                        on_click=move |_| draft.reset()
                    >
                        "Reset"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=Signal::derive(move || draft.is_submitting(&ctx))
                    >
                        "Submit Readings"
                    </Button>
                </div>
            </form>
        </div>
    }
}
