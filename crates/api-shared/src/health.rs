use crate::HealthRes;

/// Health check shared by the server binaries.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Report the service as alive together with the number of registry entries.
    pub fn check_health(records: usize) -> HealthRes {
        HealthRes {
            ok: true,
            message: "Folio is alive".into(),
            records: records as u64,
        }
    }
}
