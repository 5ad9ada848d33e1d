// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between frontend and backend.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which SEO field a generation request targets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    MetaDescription,
    MetaTitle,
    #[default]
    Description,
    Schema,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::MetaDescription,
        ContentKind::MetaTitle,
        ContentKind::Description,
        ContentKind::Schema,
    ];

    /// Tag sent to the generation backend
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::MetaDescription => "meta-description",
            ContentKind::MetaTitle => "meta-title",
            ContentKind::Description => "description",
            ContentKind::Schema => "schema",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::MetaDescription => write!(f, "Meta Description"),
            ContentKind::MetaTitle => write!(f, "Meta Title"),
            ContentKind::Description => write!(f, "Description"),
            ContentKind::Schema => write!(f, "Schema Markup"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content kind: {0}")]
pub struct UnknownContentKind(pub String);

impl FromStr for ContentKind {
    type Err = UnknownContentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownContentKind(s.to_string()))
    }
}

/// Body of a `generate-content` call
///
/// Only built through `generation::validate_prompt`, so the prompt is
/// never blank. The prompt is sent exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
}

/// Response of a `generate-content` call
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(rename = "generatedText", default, skip_serializing_if = "Option::is_none")]
    pub generated_text: Option<String>,
}

impl GenerationResponse {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            generated_text: Some(text.into()),
        }
    }

    /// Generated text, if any was produced; empty text counts as none
    pub fn text(&self) -> Option<&str> {
        self.generated_text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Configuration of a content generator form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Content-kind tag sent to the backend (default: description)
    pub kind: ContentKind,
    /// Initial prompt text (default: empty)
    pub default_prompt: String,
}

/// Route parameters selecting a service page
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceRouteParams {
    pub service: String,
    pub city: Option<String>,
    pub industry: Option<String>,
}

impl ServiceRouteParams {
    /// Builds params, folding blank optional segments into `None`
    pub fn new(service: impl Into<String>, city: Option<String>, industry: Option<String>) -> Self {
        Self {
            service: service.into(),
            city: non_blank(city),
            industry: non_blank(industry),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A single FAQ entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Content of a service page
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceContent {
    pub meta_title: String,
    pub meta_description: String,
    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_description: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub updated_at: Option<chrono::NaiveDateTime>,
}

impl ServiceContent {
    pub fn has_meta_description(&self) -> bool {
        !self.meta_description.trim().is_empty()
    }
}

/// Visual variant of a toast
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient user-facing notification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind_default() {
        assert_eq!(ContentKind::default(), ContentKind::Description);
    }

    #[test]
    fn test_content_kind_wire_tags() {
        let json = serde_json::to_string(&ContentKind::MetaDescription).unwrap();
        assert_eq!(json, "\"meta-description\"");

        for kind in ContentKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(kind.as_str().parse::<ContentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_content_kind_parse_unknown() {
        let err = "headline".parse::<ContentKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown content kind: headline");
    }

    #[test]
    fn test_generation_request_body_shape() {
        let request = GenerationRequest {
            prompt: "Write a tagline".to_string(),
            kind: ContentKind::MetaTitle,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "prompt": "Write a tagline", "type": "meta-title" })
        );
    }

    #[test]
    fn test_generation_response_missing_text() {
        let response: GenerationResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.generated_text, None);
        assert_eq!(response.text(), None);

        let response: GenerationResponse =
            serde_json::from_str(r#"{"generatedText":""}"#).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_route_params_blank_segments() {
        let params = ServiceRouteParams::new("plumbing", Some("  ".to_string()), Some(String::new()));
        assert_eq!(params.service, "plumbing");
        assert!(params.city.is_none());
        assert!(params.industry.is_none());
    }

    #[test]
    fn test_has_meta_description() {
        let mut content = ServiceContent::default();
        assert!(!content.has_meta_description());
        content.meta_description = "   ".to_string();
        assert!(!content.has_meta_description());
        content.meta_description = "Top plumbing services in Austin".to_string();
        assert!(content.has_meta_description());
    }
}
