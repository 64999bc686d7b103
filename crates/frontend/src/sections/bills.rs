//! Bills: filterable bill cards with download and pay actions.

use crate::layout::global_context::{use_portal, PortalContext};
use crate::shared::a11y::on_activation_key;
use crate::shared::icons::icon;
use contracts::shared::bills::{sample_bills, Bill, BillFilter, BillStatus};
use contracts::shared::format::format_currency;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const EXPORT_FORMATS: [&str; 2] = ["PDF", "Excel"];

fn download(ctx: PortalContext, bill_id: String) {
    let delay = ctx.config.with_value(|c| c.timings.download_delay_ms);
    spawn_local(async move {
        ctx.loading.simulate(delay).await;
        ctx.toasts
            .success(format!("Bill {} downloaded successfully!", bill_id));
    });
}

fn export_report(ctx: PortalContext, format: &'static str) {
    let delay = ctx.config.with_value(|c| c.timings.download_delay_ms);
    spawn_local(async move {
        ctx.loading.simulate(delay).await;
        ctx.toasts.success(format!("Report exported as {}", format));
    });
}

fn status_color(status: BillStatus) -> BadgeColor {
    match status {
        BillStatus::Paid => BadgeColor::Success,
        BillStatus::Unpaid => BadgeColor::Warning,
        BillStatus::Overdue => BadgeColor::Danger,
    }
}

#[component]
fn BillCard(
    bill: Bill,
    #[prop(into)] visible: Signal<bool>,
    selected: RwSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_portal();
    let currency = ctx.config.with_value(|c| c.billing.currency.clone());
    let status = bill.status;
    let card_class = format!("bill-card {}", status.code());
    let id = StoredValue::new(bill.id.clone());
    let select = move || selected.set(Some(id.get_value()));
    let is_selected = move || selected.with(|s| s.as_deref() == Some(id.get_value().as_str()));

    view! {
        <div
            class=card_class
            class:selected=is_selected
            tabindex="0"
            style:display=move || if visible.get() { "block" } else { "none" }
            on:click=move |_| select()
            on:keydown=on_activation_key(select)
        >
            <div class="bill-card__header">
                <span class="bill-card__utility">{bill.utility}</span>
                <Badge
                    appearance=BadgeAppearance::Tint
                    color=status_color(status)
                    class=format!("status-badge {}", status.code())
                >
                    {status.display_name()}
                </Badge>
            </div>
            <div class="bill-card__amount">{format_currency(bill.amount, &currency)}</div>
            <div class="bill-card__meta">
                <span>{bill.id.clone()}</span>
                <span>{bill.period}</span>
                <span>"Due " {bill.due_date}</span>
            </div>
            <div class="bill-card__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        download(ctx, id.get_value());
                    }
                >
                    {icon("download")}
                    "Download"
                </Button>
                <Show when=move || status != BillStatus::Paid>
                    <Button
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Small
                        on_click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            ctx.toasts.info("Payment gateway integration coming soon!");
                        }
                    >
                        "Pay Now"
                    </Button>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn BillsSection() -> impl IntoView {
    let ctx = use_portal();
    let filter = RwSignal::new(BillFilter::All);
    let selected = RwSignal::new(None::<String>);
    let bills = sample_bills();

    let filter_value = RwSignal::new(BillFilter::All.code().to_string());

    Effect::new(move |prev: Option<String>| {
        let code = filter_value.get();
        if prev.is_some() && prev.as_ref() != Some(&code) {
            filter.set(BillFilter::from_code(&code));
            ctx.toasts.info(format!("Showing {} bills", code));
        }
        code
    });

    view! {
        <div class="section-toolbar">
            <Select value=filter_value class="filter-select">
                <option value="all">"All Bills"</option>
                <option value="paid">"Paid"</option>
                <option value="unpaid">"Unpaid"</option>
                <option value="overdue">"Overdue"</option>
            </Select>
            <div class="section-toolbar__actions">
                {EXPORT_FORMATS
                    .into_iter()
                    .map(|format| {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                size=ButtonSize::Small
                                on_click=move |_| export_report(ctx, format)
                            >
                                {icon("download")}
                                {format!("Export {}", format)}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>

        <div class="bills-grid">
            {bills
                .into_iter()
                .map(|bill| {
                    let candidate = bill.clone();
                    let visible = Signal::derive(move || filter.get().matches(&candidate));
                    view! { <BillCard bill=bill visible=visible selected=selected /> }
                })
                .collect_view()}
        </div>
    }
}
