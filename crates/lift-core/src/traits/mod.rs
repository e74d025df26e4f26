pub mod anonymizer;
pub mod detector;
pub mod generator;
pub mod sanitizer;
pub mod session_store;

pub use anonymizer::IAnonymizer;
pub use detector::IEntityDetector;
pub use generator::IGenerator;
pub use sanitizer::ISanitizer;
pub use session_store::ISessionStore;
