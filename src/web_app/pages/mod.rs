// web_app/pages/mod.rs - Page components module
//
// - HomePage: service index
// - ServicePage: per-service (and per-city/industry) landing page
// - GeneratorPage: content generation tool

pub mod home;
pub mod service;
pub mod generator;

// Re-export page components
pub use home::HomePage;
pub use service::ServicePage;
pub use generator::GeneratorPage;
