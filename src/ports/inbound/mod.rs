/// Inbound ports (Driving ports) - Application API
pub mod site_audit_port;

pub use site_audit_port::SiteAuditPort;
