/// Network adapters for the audited site and external APIs
mod page_speed_insights_client;
mod resend_mailer;
mod reqwest_web_client;

pub use page_speed_insights_client::PageSpeedInsightsClient;
pub use resend_mailer::{MailerSettings, ResendMailer};
pub use reqwest_web_client::ReqwestWebClient;
