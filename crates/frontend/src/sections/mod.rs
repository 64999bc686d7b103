pub mod bills;
pub mod dashboard;
mod draft_form;
pub mod meter_reading;
pub mod notifications;
pub mod service_request;
pub mod track_requests;

pub use bills::BillsSection;
pub use dashboard::DashboardSection;
pub use meter_reading::MeterReadingSection;
pub use notifications::NotificationsSection;
pub use service_request::ServiceRequestSection;
pub use track_requests::TrackRequestsSection;
