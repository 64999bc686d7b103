//! Dashboard: headline figures, usage charts and service alerts.

use crate::layout::global_context::use_portal;
use crate::shared::charts::ChartCanvas;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use contracts::enums::Section;
use contracts::shared::charts::{ChartPeriod, ChartTarget};
use contracts::shared::format::format_currency;
use contracts::shared::requests::{sample_requests, RequestStatus};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
struct ServiceAlert {
    id: u32,
    level: &'static str,
    title: &'static str,
    text: &'static str,
    leaving: bool,
}

fn initial_alerts() -> Vec<ServiceAlert> {
    vec![
        ServiceAlert {
            id: 1,
            level: "warning",
            title: "Scheduled maintenance",
            text: "Water supply in Al Khuwair will be interrupted on Mar 25, 2024 from 9:00 to 13:00.",
            leaving: false,
        },
        ServiceAlert {
            id: 2,
            level: "info",
            title: "Bill due soon",
            text: "Your electricity bill INV-2024-0312 is due on Apr 15, 2024.",
            leaving: false,
        },
    ]
}

#[component]
fn PeriodSelect(target: ChartTarget) -> impl IntoView {
    let ctx = use_portal();
    let select_value = RwSignal::new(ChartPeriod::ThisMonth.code().to_string());

    Effect::new(move |prev: Option<String>| {
        let current = select_value.get();
        if prev.is_some() && prev.as_ref() != Some(&current) {
            match ChartPeriod::from_code(&current) {
                Some(period) => {
                    let delay = ctx.config.with_value(|c| c.timings.chart_period_delay_ms);
                    spawn_local(async move {
                        ctx.loading.simulate(delay).await;
                        ctx.toasts
                            .success(format!("Chart updated to show {}", period.label()));
                    });
                }
                None => log::warn!("unknown chart period '{}' for {:?}", current, target),
            }
        }
        current
    });

    view! {
        <Select value=select_value size=SelectSize::Small class="chart-period">
            {ChartPeriod::all()
                .into_iter()
                .map(|p| view! { <option value=p.code()>{p.label()}</option> })
                .collect_view()}
        </Select>
    }
}

#[component]
fn ChartCard(title: &'static str, target: ChartTarget) -> impl IntoView {
    view! {
        <div class="chart-card">
            <div class="chart-card__header">
                <h3>{title}</h3>
                <PeriodSelect target=target />
            </div>
            <ChartCanvas target=target />
        </div>
    }
}

#[component]
pub fn DashboardSection() -> impl IntoView {
    let ctx = use_portal();
    let alerts = RwSignal::new(initial_alerts());
    let currency = ctx.config.with_value(|c| c.billing.currency.clone());

    let dismiss = move |id: u32| {
        alerts.update(|list| {
            if let Some(alert) = list.iter_mut().find(|a| a.id == id) {
                alert.leaving = true;
            }
        });
        let exit_ms = ctx.config.with_value(|c| c.timings.alert_exit_ms);
        spawn_local(async move {
            TimeoutFuture::new(exit_ms).await;
            alerts.update(|list| list.retain(|a| a.id != id));
        });
    };

    let open_requests = sample_requests()
        .iter()
        .filter(|r| r.status != RequestStatus::Completed)
        .count();

    view! {
        <div class="stats-grid">
            <StatCard
                label="Electricity Usage"
                icon_name="zap"
                value=Signal::derive(|| "1,245 kWh".to_string())
                change_percent=-8.2
                subtitle="This month"
            />
            <StatCard
                label="Water Usage"
                icon_name="droplet"
                value=Signal::derive(|| "18.5 m³".to_string())
                change_percent=3.1
                subtitle="This month"
            />
            <StatCard
                label="Current Bill"
                icon_name="credit-card"
                value=Signal::derive(move || format_currency(45.75, &currency))
                subtitle="Due Apr 15, 2024"
                on_activate=Callback::new(move |_| ctx.switch_section(Section::Bills))
            />
            <StatCard
                label="Open Requests"
                icon_name="wrench"
                value=Signal::derive(move || open_requests.to_string())
                subtitle="1 in progress"
                on_activate=Callback::new(move |_| ctx.switch_section(Section::TrackRequests))
            />
        </div>

        <div class="alerts">
            <For
                each=move || alerts.get()
                key=|alert| (alert.id, alert.leaving)
                children=move |alert| {
                    let id = alert.id;
                    view! {
                        <div class=format!("alert alert-{}", alert.level) class:alert-leaving=alert.leaving>
                            {icon("alert-triangle")}
                            <div class="alert-content">
                                <strong>{alert.title}</strong>
                                <p>{alert.text}</p>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Transparent
                                size=ButtonSize::Small
                                class="btn-close-alert"
                                attr:title="Dismiss"
                                on_click=move |_| dismiss(id)
                            >
                                {icon("x")}
                            </Button>
                        </div>
                    }
                }
            />
        </div>

        <div class="charts-grid">
            <ChartCard title="Electricity Consumption" target=ChartTarget::Electricity />
            <ChartCard title="Water Consumption" target=ChartTarget::Water />
            <ChartCard title="Annual Usage" target=ChartTarget::AnnualUsage />
        </div>
    }
}
