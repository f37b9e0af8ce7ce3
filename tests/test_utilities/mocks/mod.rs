/// Mock implementations for testing
mod mock_lead_repository;
mod mock_mailer;
mod mock_page_speed_client;
mod mock_progress_reporter;
mod mock_web_client;

#[allow(unused_imports)]
pub use mock_lead_repository::FailingLeadRepository;
#[allow(unused_imports)]
pub use mock_mailer::MockMailer;
#[allow(unused_imports)]
pub use mock_page_speed_client::MockPageSpeedClient;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
#[allow(unused_imports)]
pub use mock_web_client::MockWebClient;
