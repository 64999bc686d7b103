use crate::shared::browser::{scroll_to_top, viewport_width};
use crate::shared::charts::ChartService;
use crate::shared::loading::LoadingService;
use crate::shared::toast::ToastService;
use contracts::enums::Section;
use contracts::shared::config::PortalConfig;
use contracts::shared::inbox::Inbox;
use contracts::shared::navigation::{
    NavigationController, NavigationError, ResizeOutcome, Transition,
};
use contracts::shared::submission::SubmissionTracker;
use leptos::prelude::*;

/// Page-wide state owned by the portal shell and shared through context.
///
/// Navigation state lives in exactly one [`NavigationController`]; views read
/// it reactively and request changes through the methods below.
#[derive(Clone, Copy)]
pub struct PortalContext {
    pub nav: RwSignal<NavigationController>,
    pub inbox: RwSignal<Inbox>,
    pub submissions: RwSignal<SubmissionTracker>,
    pub config: StoredValue<PortalConfig>,
    pub charts: ChartService,
    pub toasts: ToastService,
    pub loading: LoadingService,
}

impl PortalContext {
    pub fn new(
        config: PortalConfig,
        charts: ChartService,
        toasts: ToastService,
        loading: LoadingService,
    ) -> Self {
        let nav = NavigationController::with_defaults(config.layout.mobile_breakpoint_px);
        Self {
            nav: RwSignal::new(nav),
            inbox: RwSignal::new(Inbox::sample()),
            submissions: RwSignal::new(SubmissionTracker::new()),
            config: StoredValue::new(config),
            charts,
            toasts,
            loading,
        }
    }

    pub fn switch_section(&self, target: Section) {
        let result = self.nav.try_update(|nav| nav.switch_section(target));
        self.apply(result);
    }

    /// Nav entry click/keypress; `code` is the entry's `data-section`
    pub fn activate_nav_entry(&self, code: &str) {
        let width = viewport_width();
        let result = self
            .nav
            .try_update(|nav| nav.activate_nav_entry(code, width));
        self.apply(result);
    }

    pub fn open_notifications(&self) {
        let result = self.nav.try_update(|nav| nav.open_notifications());
        self.apply(result);
    }

    pub fn on_resize_settled(&self) {
        let width = viewport_width();
        let mut outcome = ResizeOutcome::default();
        // only a closed side menu is a visible change
        self.nav.maybe_update(|nav| {
            outcome = nav.on_resize_settled(width);
            outcome.close_side_menu
        });
        if outcome.initialize_charts {
            self.charts.initialize_charts();
        }
    }

    pub fn open_side_menu(&self) {
        self.nav.update(|nav| nav.open_side_menu());
    }

    pub fn close_side_menu(&self) {
        self.nav.update(|nav| nav.close_side_menu());
    }

    pub fn handle_outside_click(&self) {
        let width = viewport_width();
        self.nav.maybe_update(|nav| nav.handle_outside_click(width));
    }

    fn apply(&self, result: Option<Result<Transition, NavigationError>>) {
        match result {
            Some(Ok(transition)) => {
                log::debug!("navigated {} -> {}", transition.from, transition.to);
                if transition.scroll_to_top {
                    scroll_to_top();
                }
                if transition.initialize_charts {
                    self.charts.initialize_charts();
                }
            }
            Some(Err(e)) => log::warn!("navigation rejected: {}", e),
            None => log::error!("navigation controller disposed"),
        }
    }
}

pub fn use_portal() -> PortalContext {
    use_context::<PortalContext>().expect("PortalContext not found")
}
