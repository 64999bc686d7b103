use contracts::shared::form::FormState;
use contracts::shared::validation::InputKind;
use leptos::prelude::*;
use thaw::*;

fn input_type(kind: InputKind) -> InputType {
    match kind {
        InputKind::Tel => InputType::Tel,
        InputKind::Number => InputType::Number,
        InputKind::Date => InputType::Date,
        _ => InputType::Text,
    }
}

/// One labelled control bound to a field of `form`.
///
/// The thaw control owns a local string; edits flow into `FormState::input`
/// and the stored (possibly reformatted) value flows back. Focus loss runs
/// `FormState::blur`. File fields are rendered by the owning section since
/// they carry no text value.
#[component]
pub fn FormField(
    form: RwSignal<FormState>,
    field_id: &'static str,
    /// Fired on the control's `change` event (used for autosave)
    #[prop(optional)]
    on_change: Option<Callback<()>>,
) -> impl IntoView {
    let Some(field) = form.with_untracked(|f| f.field(field_id).cloned()) else {
        log::error!("FormField: unknown field '{}'", field_id);
        return ().into_any();
    };

    let value = RwSignal::new(form.with_untracked(|f| f.value(field_id).to_string()));

    // Sync form -> control (formatting, reset, restored drafts)
    Effect::new(move |_| {
        let stored = form.with(|f| f.value(field_id).to_string());
        if value.get_untracked() != stored {
            value.set(stored);
        }
    });

    // Sync control -> form
    Effect::new(move |prev: Option<String>| {
        let current = value.get();
        if prev.is_some() && prev.as_ref() != Some(&current) {
            form.update(|f| f.input(field_id, &current));
        }
        current
    });

    let error = move || form.with(|f| f.error(field_id).map(str::to_string));
    let has_error = move || form.with(|f| f.error(field_id).is_some());

    // `change` fires before the sync effect runs, so apply the value first
    let handle_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        form.update(|f| f.input(field_id, &raw));
        if let Some(cb) = on_change {
            cb.run(());
        }
    };

    let control = match field.kind {
        InputKind::Select => view! {
            <Select value=value id=field_id name=field_id>
                {field
                    .options
                    .iter()
                    .map(|&(v, label)| view! { <option value=v>{label}</option> })
                    .collect_view()}
            </Select>
        }
        .into_any(),
        InputKind::TextArea => view! {
            <Textarea
                value=value
                id=field_id
                name=field_id
                placeholder=field.placeholder
                attr:rows=4
            />
        }
        .into_any(),
        kind => view! {
            <Input
                value=value
                id=field_id
                name=field_id
                input_type=input_type(kind)
                placeholder=field.placeholder
            />
        }
        .into_any(),
    };

    view! {
        <div
            class="form-group"
            class:error=has_error
            on:change=handle_change
            on:focusout=move |_| form.update(|f| f.blur(field_id))
        >
            <label for=field_id>{field.label}</label>
            {control}
            <span class="error-message">{error}</span>
        </div>
    }
    .into_any()
}
