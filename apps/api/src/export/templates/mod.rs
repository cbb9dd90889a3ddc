//! Template Renderer — `CanonicalRenderModel` + template key → resume markup.
//!
//! Renderers are pure: they borrow the model and return a fresh string.
//! A section whose list is empty is omitted entirely; only the header is
//! always present. Unknown keys render with the default template.

mod classic;
mod modern;

use serde::Serialize;
use tracing::debug;

use crate::export::dates::{format_date, DateStyle, DateValue};
use crate::export::model::{CanonicalRenderModel, PersonalInfo};

pub const DEFAULT_TEMPLATE: &str = "modern";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKey {
    #[default]
    Modern,
    Classic,
}

impl TemplateKey {
    pub fn all() -> &'static [TemplateKey] {
        &[TemplateKey::Modern, TemplateKey::Classic]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKey::Modern => "modern",
            TemplateKey::Classic => "classic",
        }
    }

    /// Exact, case-insensitive registry lookup.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(key.trim()))
    }

    /// Registry lookup with the default as fallback.
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            debug!("Unknown template '{key}', falling back to '{DEFAULT_TEMPLATE}'");
            TemplateKey::default()
        })
    }
}

pub fn render_template(model: &CanonicalRenderModel, key: &str) -> String {
    match TemplateKey::resolve(key) {
        TemplateKey::Modern => modern::render(model),
        TemplateKey::Classic => classic::render(model),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared markup helpers
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `MM/YYYY – MM/YYYY`, `MM/YYYY – Present`, or empty when nothing is known.
fn date_range(start: Option<&str>, end: Option<&str>, is_current: bool) -> String {
    let display = |raw: &str| format_date(&DateValue::from(raw), DateStyle::Display);
    let start = start.filter(|s| !s.is_empty()).map(display);
    let end = if is_current {
        Some("Present".to_string())
    } else {
        end.filter(|s| !s.is_empty()).map(display)
    };

    match (start, end) {
        (Some(s), Some(e)) => escape_html(&format!("{s} – {e}")),
        (Some(s), None) => escape_html(&s),
        (None, Some(e)) => escape_html(&e),
        (None, None) => String::new(),
    }
}

/// Escaped, non-empty contact lines in display order.
fn contact_items(info: &PersonalInfo) -> Vec<String> {
    let location = [info.city.as_str(), info.state.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    [
        info.email.as_str(),
        info.phone.as_str(),
        location.as_str(),
        info.website.as_str(),
        info.linkedin.as_str(),
        info.github.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .map(escape_html)
    .collect()
}

/// `Rust (9/10)`
fn skill_label(skill_name: &str, rating: u8) -> String {
    format!("{} ({rating}/10)", escape_html(skill_name))
}

/// GPA exactly as stored: `3.7` stays `3.7`, `4` prints as `4`.
fn gpa_label(gpa: Option<f64>) -> Option<String> {
    gpa.map(|g| format!("GPA: {g}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::model::{
        CourseEntry, EducationEntry, PersonalInfo, Strength, WorkEntry,
    };

    pub(super) fn sample_model() -> CanonicalRenderModel {
        CanonicalRenderModel {
            title: "Platform Resume".to_string(),
            job_title: "Staff Engineer".to_string(),
            profile_picture: Some("https://host/uploads/me.png".to_string()),
            personal_info: PersonalInfo {
                name: "Jane <Doe>".to_string(),
                email: "jane@example.com".to_string(),
                city: "Austin".to_string(),
                state: "TX".to_string(),
                summary: "Builds reliable systems.".to_string(),
                ..Default::default()
            },
            strengths: vec![Strength {
                skill_name: "Rust".to_string(),
                rating: 9,
            }],
            work_experiences: vec![WorkEntry {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                start_date: "2020-03-01".to_string(),
                end_date: None,
                is_current: true,
                description: vec!["Cut p99 latency by 40%".to_string()],
            }],
            educations: vec![EducationEntry {
                institution: "State University".to_string(),
                degree: "BSc".to_string(),
                field_of_study: "Computer Science".to_string(),
                start_date: Some("2015-09-01".to_string()),
                end_date: Some("2019-06-01".to_string()),
                is_current: false,
                gpa: Some(3.7),
            }],
            courses: vec![CourseEntry {
                title: "Distributed Systems".to_string(),
                provider: "MIT OCW".to_string(),
                link: Some("https://ocw.mit.edu".to_string()),
            }],
            interests: vec!["Climbing".to_string()],
        }
    }

    pub(super) fn empty_model() -> CanonicalRenderModel {
        CanonicalRenderModel {
            title: "Blank".to_string(),
            job_title: String::new(),
            profile_picture: None,
            personal_info: PersonalInfo::default(),
            strengths: vec![],
            work_experiences: vec![],
            educations: vec![],
            courses: vec![],
            interests: vec![],
        }
    }

    #[test]
    fn test_registry_lookup() {
        assert_eq!(TemplateKey::from_key("modern"), Some(TemplateKey::Modern));
        assert_eq!(TemplateKey::from_key("Classic"), Some(TemplateKey::Classic));
        assert_eq!(TemplateKey::from_key("neon"), None);
        assert_eq!(TemplateKey::resolve("neon"), TemplateKey::Modern);
        assert_eq!(TemplateKey::default().as_str(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_unknown_key_renders_like_default() {
        let model = sample_model();
        assert_eq!(
            render_template(&model, "does-not-exist"),
            render_template(&model, DEFAULT_TEMPLATE)
        );
        assert_eq!(render_template(&model, ""), render_template(&model, "modern"));
    }

    #[test]
    fn test_render_does_not_mutate_model() {
        let model = sample_model();
        let before = model.clone();
        for key in TemplateKey::all() {
            let _ = render_template(&model, key.as_str());
        }
        assert_eq!(model, before);
    }

    #[test]
    fn test_every_template_omits_empty_sections() {
        let model = empty_model();
        for key in TemplateKey::all() {
            let html = render_template(&model, key.as_str());
            for heading in ["Work Experience", "Education", "Courses", "Skills", "Interests"] {
                assert!(
                    !html.contains(heading),
                    "{} rendered empty section {heading}",
                    key.as_str()
                );
            }
            assert!(!html.contains("<img"));
        }
    }

    #[test]
    fn test_every_template_escapes_user_text() {
        let model = sample_model();
        for key in TemplateKey::all() {
            let html = render_template(&model, key.as_str());
            assert!(html.contains("Jane &lt;Doe&gt;"));
            assert!(!html.contains("Jane <Doe>"));
        }
    }

    #[test]
    fn test_date_range_forms() {
        assert_eq!(
            date_range(Some("2020-03-01"), None, true),
            "03/2020 – Present"
        );
        assert_eq!(
            date_range(Some("2015-09-01"), Some("2019-06-01"), false),
            "09/2015 – 06/2019"
        );
        assert_eq!(date_range(Some("fall"), None, false), "fall");
        assert_eq!(date_range(None, None, false), "");
    }

    #[test]
    fn test_contact_items_join_location() {
        let items = contact_items(&sample_model().personal_info);
        assert_eq!(items, vec!["jane@example.com", "Austin, TX"]);
    }

    #[test]
    fn test_gpa_label_is_not_padded() {
        assert_eq!(gpa_label(Some(3.7)).as_deref(), Some("GPA: 3.7"));
        assert_eq!(gpa_label(Some(3.85)).as_deref(), Some("GPA: 3.85"));
        assert_eq!(gpa_label(Some(4.0)).as_deref(), Some("GPA: 4"));
        assert_eq!(gpa_label(None), None);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }
}
