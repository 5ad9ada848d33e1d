// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Button, Card, Badge, TextArea, Select
// - toast.rs: Toast context and renderer
// - generator.rs: AI content generator form
// - layout.rs: Header, Footer, ContactSection
// - service.rs: Service page skeleton and body

pub mod common;
pub mod toast;
pub mod generator;
pub mod layout;
pub mod service;

// Re-export commonly used components for convenience
pub use common::*;
pub use toast::*;
pub use generator::*;
pub use layout::*;
pub use service::*;
