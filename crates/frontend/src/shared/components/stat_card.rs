use crate::shared::a11y::on_activation_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Change % relative to previous period
    #[prop(optional)]
    change_percent: Option<f64>,
    /// Optional line below the value
    #[prop(optional)]
    subtitle: Option<&'static str>,
    /// Click / Enter / Space on the card
    #[prop(optional)]
    on_activate: Option<Callback<()>>,
) -> impl IntoView {
    let activate = move || {
        if let Some(cb) = on_activate {
            cb.run(());
        }
    };

    let change_view = change_percent.map(|pct| {
        let (arrow, cls) = if pct > 0.5 {
            ("\u{2191}", "stat-card__change stat-card__change--up")
        } else if pct < -0.5 {
            ("\u{2193}", "stat-card__change stat-card__change--down")
        } else {
            ("", "stat-card__change stat-card__change--flat")
        };
        let text = format!("{}{:.1}%", arrow, pct.abs());
        view! { <span class=cls>{text}</span> }
    });

    let subtitle_view = subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> });

    view! {
        <div
            class="stat-card"
            class:stat-card--link=on_activate.is_some()
            tabindex="0"
            on:click=move |_| activate()
            on:keydown=on_activation_key(activate)
        >
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {value}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}
