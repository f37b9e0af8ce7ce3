/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the audited site, Google
/// PageSpeed Insights, Resend and the local lead store.
pub mod outbound;
