//! Section navigation and page-state controller.
//!
//! Owns which content pane is visible, which nav entry is highlighted, the
//! title/subtitle pair and the slide-in side menu flag. The controller is pure
//! state: every operation returns the side effects it wants the view layer to
//! perform (scroll reset, chart initialisation) instead of performing them.
//!
//! Invariant: exactly one pane is active and exactly one nav entry is
//! highlighted, both for [`NavigationState::current_section`].

use crate::enums::Section;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

/// Work a section asks for every time it is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterHook {
    None,
    InitializeCharts,
}

/// One row of the declarative section table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRoute {
    pub section: Section,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub on_enter: EnterHook,
}

impl SectionRoute {
    const fn new(
        section: Section,
        title: &'static str,
        subtitle: &'static str,
        on_enter: EnterHook,
    ) -> Self {
        Self {
            section,
            title,
            subtitle,
            on_enter,
        }
    }
}

/// Static title/subtitle table for the portal
pub fn default_routes() -> Vec<SectionRoute> {
    vec![
        SectionRoute::new(
            Section::Dashboard,
            "Dashboard",
            "Welcome back! Here's your usage overview",
            EnterHook::InitializeCharts,
        ),
        SectionRoute::new(
            Section::ServiceRequest,
            "Service Requests",
            "Submit new service requests or report issues",
            EnterHook::None,
        ),
        SectionRoute::new(
            Section::MeterReading,
            "Meter Reading",
            "Submit your monthly meter readings",
            EnterHook::None,
        ),
        SectionRoute::new(
            Section::Bills,
            "Bills & Reports",
            "View and download your invoices",
            EnterHook::None,
        ),
        SectionRoute::new(
            Section::Notifications,
            "Notifications",
            "Stay updated with important alerts",
            EnterHook::None,
        ),
        SectionRoute::new(
            Section::TrackRequests,
            "Track Requests",
            "Monitor your service request status",
            EnterHook::None,
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_section: Section,
}

/// Side effects requested by a successful section switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Section,
    pub to: Section,
    pub scroll_to_top: bool,
    pub initialize_charts: bool,
    pub close_side_menu: bool,
}

/// Side effects requested once a window resize has settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeOutcome {
    pub initialize_charts: bool,
    pub close_side_menu: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PaneSlot {
    section: Section,
    pane_active: bool,
    nav_highlighted: bool,
}

fn route_labels(routes: &[SectionRoute], section: Section) -> (String, String) {
    routes
        .iter()
        .find(|r| r.section == section)
        .map(|r| (r.title.to_string(), r.subtitle.to_string()))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController {
    routes: Vec<SectionRoute>,
    slots: Vec<PaneSlot>,
    state: NavigationState,
    title: String,
    subtitle: String,
    side_menu_open: bool,
    mobile_breakpoint_px: f64,
}

impl NavigationController {
    /// Build a controller over the mounted panes.
    ///
    /// `initial` is the pane marked visible in the initial markup and must be
    /// one of `panes`.
    pub fn new(
        panes: &[Section],
        routes: Vec<SectionRoute>,
        initial: Section,
        mobile_breakpoint_px: f64,
    ) -> Result<Self, NavigationError> {
        let mut slots: Vec<PaneSlot> = Vec::with_capacity(panes.len());
        for &section in panes {
            if slots.iter().any(|s| s.section == section) {
                continue;
            }
            slots.push(PaneSlot {
                section,
                pane_active: section == initial,
                nav_highlighted: section == initial,
            });
        }

        if !slots.iter().any(|s| s.section == initial) {
            return Err(NavigationError::UnknownSection(initial.code().to_string()));
        }

        let (title, subtitle) = route_labels(&routes, initial);

        Ok(Self {
            routes,
            slots,
            state: NavigationState {
                current_section: initial,
            },
            title,
            subtitle,
            side_menu_open: false,
            mobile_breakpoint_px,
        })
    }

    /// Every section mounted, default table, dashboard visible first
    pub fn with_defaults(mobile_breakpoint_px: f64) -> Self {
        let routes = default_routes();
        let (title, subtitle) = route_labels(&routes, Section::Dashboard);
        Self {
            routes,
            slots: Section::all()
                .into_iter()
                .map(|section| PaneSlot {
                    section,
                    pane_active: section == Section::Dashboard,
                    nav_highlighted: section == Section::Dashboard,
                })
                .collect(),
            state: NavigationState {
                current_section: Section::Dashboard,
            },
            title,
            subtitle,
            side_menu_open: false,
            mobile_breakpoint_px,
        }
    }

    pub fn switch_section(&mut self, target: Section) -> Result<Transition, NavigationError> {
        if !self.slots.iter().any(|s| s.section == target) {
            log::warn!("switch_section: no pane registered for '{}'", target);
            return Err(NavigationError::UnknownSection(target.code().to_string()));
        }

        for slot in self.slots.iter_mut() {
            slot.pane_active = false;
            slot.nav_highlighted = false;
        }
        for slot in self.slots.iter_mut().filter(|s| s.section == target) {
            slot.pane_active = true;
            slot.nav_highlighted = true;
        }

        let route = self.routes.iter().find(|r| r.section == target);
        if let Some(route) = route {
            self.title = route.title.to_string();
            self.subtitle = route.subtitle.to_string();
        }

        let from = self.state.current_section;
        self.state.current_section = target;

        log::debug!("section switched: {} -> {}", from, target);

        Ok(Transition {
            from,
            to: target,
            scroll_to_top: true,
            initialize_charts: matches!(route.map(|r| r.on_enter), Some(EnterHook::InitializeCharts)),
            close_side_menu: false,
        })
    }

    /// Switch by the code carried on a nav entry or link
    pub fn switch_to_code(&mut self, code: &str) -> Result<Transition, NavigationError> {
        let target =
            Section::from_code(code).ok_or_else(|| NavigationError::UnknownSection(code.to_string()))?;
        self.switch_section(target)
    }

    /// Pointer or keyboard activation of a nav entry
    pub fn activate_nav_entry(
        &mut self,
        code: &str,
        viewport_width: f64,
    ) -> Result<Transition, NavigationError> {
        let mut transition = self.switch_to_code(code)?;
        if self.is_narrow(viewport_width) {
            self.side_menu_open = false;
            transition.close_side_menu = true;
        }
        Ok(transition)
    }

    /// Header bell shortcut
    pub fn open_notifications(&mut self) -> Result<Transition, NavigationError> {
        self.switch_section(Section::Notifications)
    }

    pub fn on_resize_settled(&mut self, viewport_width: f64) -> ResizeOutcome {
        let mut outcome = ResizeOutcome::default();
        if !self.is_narrow(viewport_width) && self.side_menu_open {
            self.side_menu_open = false;
            outcome.close_side_menu = true;
        }
        outcome.initialize_charts = self
            .routes
            .iter()
            .find(|r| r.section == self.state.current_section)
            .map(|r| r.on_enter == EnterHook::InitializeCharts)
            .unwrap_or(false);
        outcome
    }

    pub fn open_side_menu(&mut self) {
        self.side_menu_open = true;
    }

    pub fn close_side_menu(&mut self) {
        self.side_menu_open = false;
    }

    /// Click that landed outside both the menu and its toggle.
    ///
    /// Returns true when the menu was closed.
    pub fn handle_outside_click(&mut self, viewport_width: f64) -> bool {
        if self.is_narrow(viewport_width) && self.side_menu_open {
            self.side_menu_open = false;
            return true;
        }
        false
    }

    pub fn is_narrow(&self, viewport_width: f64) -> bool {
        viewport_width <= self.mobile_breakpoint_px
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current_section(&self) -> Section {
        self.state.current_section
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn side_menu_open(&self) -> bool {
        self.side_menu_open
    }

    pub fn is_pane_active(&self, section: Section) -> bool {
        self.slots
            .iter()
            .any(|s| s.section == section && s.pane_active)
    }

    pub fn is_nav_highlighted(&self, section: Section) -> bool {
        self.slots
            .iter()
            .any(|s| s.section == section && s.nav_highlighted)
    }

    pub fn active_pane_count(&self) -> usize {
        self.slots.iter().filter(|s| s.pane_active).count()
    }

    pub fn highlighted_nav_count(&self) -> usize {
        self.slots.iter().filter(|s| s.nav_highlighted).count()
    }

    /// Sections that have a mounted pane, in nav order
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.slots.iter().map(|s| s.section)
    }

    pub fn route(&self, section: Section) -> Option<&SectionRoute> {
        self.routes.iter().find(|r| r.section == section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> NavigationController {
        NavigationController::with_defaults(768.0)
    }

    #[test]
    fn exactly_one_pane_and_entry_after_every_switch() {
        let mut nav = controller();
        for target in Section::all() {
            nav.switch_section(target).unwrap();
            assert_eq!(nav.active_pane_count(), 1);
            assert_eq!(nav.highlighted_nav_count(), 1);
            assert!(nav.is_pane_active(target));
            assert!(nav.is_nav_highlighted(target));
            assert_eq!(nav.current_section(), target);
        }
    }

    #[test]
    fn title_matches_table_for_every_section() {
        let mut nav = controller();
        for route in default_routes() {
            nav.switch_section(route.section).unwrap();
            assert_eq!(nav.title(), route.title);
            assert_eq!(nav.subtitle(), route.subtitle);
        }
    }

    #[test]
    fn switch_is_idempotent() {
        let mut once = controller();
        once.switch_section(Section::MeterReading).unwrap();

        let mut twice = controller();
        twice.switch_section(Section::MeterReading).unwrap();
        twice.switch_section(Section::MeterReading).unwrap();

        assert_eq!(once.title(), twice.title());
        assert_eq!(once.subtitle(), twice.subtitle());
        for s in Section::all() {
            assert_eq!(once.is_pane_active(s), twice.is_pane_active(s));
            assert_eq!(once.is_nav_highlighted(s), twice.is_nav_highlighted(s));
        }
    }

    #[test]
    fn dashboard_to_bills_scenario() {
        let mut nav = controller();
        assert!(nav.is_pane_active(Section::Dashboard));

        let t = nav.activate_nav_entry("bills", 1280.0).unwrap();

        assert!(!nav.is_pane_active(Section::Dashboard));
        assert!(!nav.is_nav_highlighted(Section::Dashboard));
        assert!(nav.is_pane_active(Section::Bills));
        assert!(nav.is_nav_highlighted(Section::Bills));
        assert_eq!(nav.title(), "Bills & Reports");
        assert_eq!(nav.subtitle(), "View and download your invoices");
        assert_eq!(t.from, Section::Dashboard);
        assert_eq!(t.to, Section::Bills);
        assert!(t.scroll_to_top);
        assert!(!t.initialize_charts);
    }

    #[test]
    fn entering_dashboard_requests_charts() {
        let mut nav = controller();
        nav.switch_section(Section::Bills).unwrap();
        let t = nav.switch_section(Section::Dashboard).unwrap();
        assert!(t.initialize_charts);
    }

    #[test]
    fn unknown_code_fails_and_keeps_state() {
        let mut nav = controller();
        nav.switch_section(Section::Bills).unwrap();
        let before = nav.clone();

        let err = nav.switch_to_code("settings").unwrap_err();
        assert_eq!(err, NavigationError::UnknownSection("settings".to_string()));
        assert_eq!(nav, before);
    }

    #[test]
    fn unmounted_pane_is_unknown() {
        let mut nav = NavigationController::new(
            &[Section::Dashboard, Section::Bills],
            default_routes(),
            Section::Dashboard,
            768.0,
        )
        .unwrap();
        let err = nav.switch_section(Section::TrackRequests).unwrap_err();
        assert_eq!(
            err,
            NavigationError::UnknownSection("track-requests".to_string())
        );
        assert!(nav.is_pane_active(Section::Dashboard));
    }

    #[test]
    fn initial_section_must_be_mounted() {
        let result =
            NavigationController::new(&[Section::Bills], default_routes(), Section::Dashboard, 768.0);
        assert!(result.is_err());
    }

    #[test]
    fn initial_section_follows_markup() {
        let nav = NavigationController::new(
            &Section::all(),
            default_routes(),
            Section::MeterReading,
            768.0,
        )
        .unwrap();
        assert_eq!(nav.current_section(), Section::MeterReading);
        assert_eq!(nav.title(), "Meter Reading");
        assert_eq!(nav.active_pane_count(), 1);
    }

    #[test]
    fn missing_route_keeps_previous_title() {
        let routes: Vec<SectionRoute> = default_routes()
            .into_iter()
            .filter(|r| r.section != Section::Bills)
            .collect();
        let mut nav =
            NavigationController::new(&Section::all(), routes, Section::Dashboard, 768.0).unwrap();
        nav.switch_section(Section::Bills).unwrap();
        assert!(nav.is_pane_active(Section::Bills));
        assert_eq!(nav.title(), "Dashboard");
    }

    #[test]
    fn narrow_navigation_closes_side_menu() {
        let mut nav = controller();
        nav.open_side_menu();
        let t = nav.activate_nav_entry("meter-reading", 600.0).unwrap();
        assert!(t.close_side_menu);
        assert!(!nav.side_menu_open());
    }

    #[test]
    fn wide_navigation_leaves_side_menu() {
        let mut nav = controller();
        nav.open_side_menu();
        let t = nav.activate_nav_entry("meter-reading", 1024.0).unwrap();
        assert!(!t.close_side_menu);
        assert!(nav.side_menu_open());
    }

    #[test]
    fn notification_shortcut() {
        let mut nav = controller();
        let t = nav.open_notifications().unwrap();
        assert_eq!(t.to, Section::Notifications);
        assert_eq!(nav.title(), "Notifications");
    }

    #[test]
    fn resize_only_reinitialises_charts_on_dashboard() {
        let mut nav = controller();
        assert!(nav.on_resize_settled(1280.0).initialize_charts);

        nav.switch_section(Section::Bills).unwrap();
        let outcome = nav.on_resize_settled(1280.0);
        assert!(!outcome.initialize_charts);
        assert_eq!(nav.current_section(), Section::Bills);
    }

    #[test]
    fn resize_to_desktop_closes_menu() {
        let mut nav = controller();
        nav.open_side_menu();
        assert!(!nav.on_resize_settled(500.0).close_side_menu);
        assert!(nav.side_menu_open());
        assert!(nav.on_resize_settled(900.0).close_side_menu);
        assert!(!nav.side_menu_open());
    }

    #[test]
    fn outside_click_closes_only_on_narrow() {
        let mut nav = controller();
        nav.open_side_menu();
        assert!(!nav.handle_outside_click(1200.0));
        assert!(nav.handle_outside_click(400.0));
        assert!(!nav.handle_outside_click(400.0));
    }

    #[test]
    fn default_labels_come_from_route_table() {
        let nav = controller();
        let built = NavigationController::new(
            &Section::all(),
            default_routes(),
            Section::Dashboard,
            768.0,
        )
        .unwrap();
        assert_eq!(nav, built);
        let dashboard = default_routes()
            .into_iter()
            .find(|r| r.section == Section::Dashboard)
            .unwrap();
        assert_eq!(nav.title(), dashboard.title);
        assert_eq!(nav.subtitle(), dashboard.subtitle);
    }

    #[test]
    fn settled_resize_without_menu_change_leaves_state_equal() {
        let mut nav = controller();
        let before = nav.clone();
        let outcome = nav.on_resize_settled(1280.0);
        assert!(!outcome.close_side_menu);
        assert!(outcome.initialize_charts);
        assert_eq!(nav, before);

        nav.open_side_menu();
        let before = nav.clone();
        let outcome = nav.on_resize_settled(1280.0);
        assert!(outcome.close_side_menu);
        assert_ne!(nav, before);
    }
}
