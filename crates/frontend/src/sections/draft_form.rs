use crate::layout::global_context::PortalContext;
use crate::shared::storage::{form_autosave, LocalStorageStore};
use contracts::shared::autosave::FormAutosave;
use contracts::shared::form::FormState;
use contracts::shared::submission::{complete_submission, start_submission};
use contracts::shared::validation::InputKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// A form whose values survive reloads until it is submitted.
#[derive(Clone, Copy)]
pub struct DraftForm {
    pub form: RwSignal<FormState>,
    autosave: StoredValue<FormAutosave<LocalStorageStore>>,
}

impl DraftForm {
    pub fn new(ctx: &PortalContext, mut state: FormState) -> Self {
        let autosave = form_autosave(ctx.config.with_value(|c| c.autosave.forms.clone()));
        let draft = autosave.restore(state.form_id());
        if !draft.is_empty() {
            log::debug!("restored draft of '{}' ({} fields)", state.form_id(), draft.len());
            state.restore(&draft);
        }
        Self {
            form: RwSignal::new(state),
            autosave: StoredValue::new(autosave),
        }
    }

    pub fn form_id(&self) -> String {
        self.form.with_untracked(|f| f.form_id().to_string())
    }

    /// Ids of the fields rendered through `FormField`
    pub fn text_fields(&self) -> Vec<&'static str> {
        self.form.with_untracked(|f| {
            f.fields()
                .iter()
                .filter(|d| d.kind != InputKind::File)
                .map(|d| d.id)
                .collect()
        })
    }

    pub fn save_draft(&self) {
        let form_id = self.form_id();
        let draft = self.form.with_untracked(|f| f.snapshot());
        self.autosave.with_value(|a| a.save(&form_id, &draft));
    }

    pub fn reset(&self) {
        self.form.update(|f| f.reset());
    }

    pub fn is_submitting(&self, ctx: &PortalContext) -> bool {
        let form_id = self.form_id();
        ctx.submissions.with(|s| s.is_in_flight(&form_id))
    }

    /// Validate, take the in-flight slot and run the simulated round trip.
    /// On success the form is reset, its draft dropped, then `on_success` runs.
    pub fn submit<F>(&self, ctx: PortalContext, on_success: F)
    where
        F: FnOnce() + 'static,
    {
        let started = self
            .form
            .try_update(|form| {
                ctx.submissions
                    .try_update(|tracker| start_submission(form, tracker))
            })
            .flatten();
        match started {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                log::debug!("submit ignored: {}", e);
                return;
            }
            None => {
                log::error!("form state disposed before submit");
                return;
            }
        }

        let delay = ctx.config.with_value(|c| c.timings.submit_delay_ms);
        let this = *self;
        spawn_local(async move {
            ctx.loading.simulate(delay).await;
            this.form.update(|form| {
                this.autosave.with_value(|autosave| {
                    ctx.submissions
                        .update(|tracker| complete_submission(form, autosave, tracker));
                });
            });
            on_success();
        });
    }
}
