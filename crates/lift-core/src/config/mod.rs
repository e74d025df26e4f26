pub mod defaults;
pub mod input_config;
pub mod lift_config;
pub mod observability_config;
pub mod privacy_config;
pub mod session_config;

pub use input_config::InputConfig;
pub use lift_config::LiftConfig;
pub use observability_config::ObservabilityConfig;
pub use privacy_config::PrivacyConfig;
pub use session_config::SessionConfig;
