use crate::types::HealthRes;

/// Simple health service used by the REST API
///
/// This service provides a standardised way to check the health status of the EchoRoom mood
/// service. Upstream availability is not checked.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "EchoRoom mood service is alive".into(),
        }
    }
}
