//! Resume Data Normalizer — persisted rows + owner profile → `CanonicalRenderModel`.
//!
//! Malformed stored data is never an error here. Partially filled resumes are
//! the common case, so every field has a defined default:
//! - unparsable `content` / `personalInfo` → no overrides
//! - absent or non-list bullet descriptions → empty list
//! - unparsable dates → original text

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::export::dates::{format_date, DateStyle, DateValue};
use crate::export::model::{
    CanonicalRenderModel, CourseEntry, EducationEntry, PersonalInfo, Strength, WorkEntry,
};
use crate::export::picture::resolve_profile_picture;
use crate::export::templates::DEFAULT_TEMPLATE;
use crate::models::resume::{EducationRow, PersistedResume, WorkExperienceRow};
use crate::models::user::UserProfileRow;

const MAX_RATING: i32 = 10;

/// Personal info embedded in the resume's `content` blob.
/// Only non-blank strings count as set; any other JSON type is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoOverrides {
    #[serde(default, deserialize_with = "non_blank_string", alias = "fullName")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_blank_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "non_blank_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "non_blank_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "non_blank_string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "non_blank_string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "non_blank_string")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "non_blank_string")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "non_blank_string")]
    pub github: Option<String>,
}

fn non_blank_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

impl PersonalInfoOverrides {
    /// Reads `content.personalInfo`. `content` may also be a JSON-encoded string;
    /// a NULL column yields no overrides.
    pub fn from_content(content: Option<&Value>) -> Self {
        let Some(content) = content else {
            return Self::default();
        };
        let decoded;
        let content = match content {
            Value::String(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(v) => {
                    decoded = v;
                    &decoded
                }
                Err(_) => return Self::default(),
            },
            other => other,
        };

        content
            .get("personalInfo")
            .and_then(|info| Self::deserialize(info).ok())
            .unwrap_or_default()
    }
}

impl PersonalInfo {
    /// Resume value → profile value → empty string.
    /// `state`, `summary` and `github` have no profile counterpart.
    pub fn merge(overrides: PersonalInfoOverrides, profile: &UserProfileRow) -> Self {
        PersonalInfo {
            name: prefer(overrides.name, profile.name.as_deref()),
            email: prefer(overrides.email, profile.email.as_deref()),
            phone: prefer(overrides.phone, profile.phone.as_deref()),
            city: prefer(overrides.city, profile.location.as_deref()),
            state: overrides.state.unwrap_or_default(),
            summary: overrides.summary.unwrap_or_default(),
            website: prefer(overrides.website, profile.portfolio_url.as_deref()),
            linkedin: prefer(overrides.linkedin, profile.linkedin_url.as_deref()),
            github: overrides.github.unwrap_or_default(),
        }
    }
}

fn prefer(own: Option<String>, fallback: Option<&str>) -> String {
    own.or_else(|| {
        fallback
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
    .unwrap_or_default()
}

/// Builds the render model for one export request.
pub fn normalize_resume(
    persisted: &PersistedResume,
    profile: &UserProfileRow,
    origin: &str,
) -> CanonicalRenderModel {
    let resume = &persisted.resume;
    let overrides = PersonalInfoOverrides::from_content(resume.content.as_ref());

    CanonicalRenderModel {
        title: resume.title.clone(),
        job_title: resume.job_title.clone().unwrap_or_default(),
        profile_picture: resolve_profile_picture(resume.profile_picture.as_deref(), origin),
        personal_info: PersonalInfo::merge(overrides, profile),
        strengths: persisted
            .strengths
            .iter()
            .map(|s| Strength {
                skill_name: s.skill_name.clone(),
                rating: s.rating.clamp(0, MAX_RATING) as u8,
            })
            .collect(),
        work_experiences: persisted
            .work_experiences
            .iter()
            .map(normalize_work)
            .collect(),
        educations: persisted.educations.iter().map(normalize_education).collect(),
        courses: persisted
            .courses
            .iter()
            .map(|c| CourseEntry {
                title: c.title.clone(),
                provider: c.provider.clone(),
                link: non_blank(c.link.as_deref()),
            })
            .collect(),
        interests: persisted
            .interests
            .iter()
            .filter_map(|i| non_blank(Some(i.name.as_str())))
            .collect(),
    }
}

fn normalize_work(row: &WorkExperienceRow) -> WorkEntry {
    WorkEntry {
        company: row.company.clone(),
        position: row.position.clone(),
        start_date: format_date(&row.start_date.into(), DateStyle::Canonical),
        end_date: row
            .end_date
            .map(|d| format_date(&d.into(), DateStyle::Canonical)),
        is_current: row.is_current,
        description: normalize_bullets(row.description.as_ref()),
    }
}

fn normalize_education(row: &EducationRow) -> EducationEntry {
    EducationEntry {
        institution: row.institution.clone(),
        degree: row.degree.clone(),
        field_of_study: row.field_of_study.clone().unwrap_or_default(),
        start_date: canonical_text_date(row.start_date.as_deref()),
        end_date: canonical_text_date(row.end_date.as_deref()),
        is_current: row.is_current,
        gpa: row.gpa,
    }
}

fn canonical_text_date(raw: Option<&str>) -> Option<String> {
    non_blank(raw).map(|text| format_date(&DateValue::Text(text), DateStyle::Canonical))
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Bullet descriptions must be a JSON list of strings; anything else is empty.
pub fn normalize_bullets(description: Option<&Value>) -> Vec<String> {
    match description {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter_map(|s| non_blank(Some(s)))
            .collect(),
        _ => Vec::new(),
    }
}

/// Query parameter → stored resume template → `"modern"`. Blank values are skipped.
/// Unknown keys are returned as-is; the renderer falls back for them.
pub fn select_template(requested: Option<&str>, stored: Option<&str>) -> String {
    requested
        .and_then(|k| non_blank(Some(k)))
        .or_else(|| stored.and_then(|k| non_blank(Some(k))))
        .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{CourseRow, InterestRow, ResumeRow, StrengthRow};
    use chrono::{NaiveDate, Utc};
    use serde_json::json;
    use uuid::Uuid;

    fn make_profile(name: Option<&str>) -> UserProfileRow {
        UserProfileRow {
            id: Uuid::new_v4(),
            name: name.map(str::to_string),
            ..Default::default()
        }
    }

    fn make_resume(content: Option<Value>) -> PersistedResume {
        let resume_id = Uuid::new_v4();
        PersistedResume {
            resume: ResumeRow {
                id: resume_id,
                user_id: Uuid::new_v4(),
                title: "Backend Resume".to_string(),
                job_title: None,
                profile_picture: Some("/uploads/me.png".to_string()),
                template: None,
                content,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            work_experiences: vec![WorkExperienceRow {
                id: Uuid::new_v4(),
                resume_id,
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                start_date: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
                end_date: None,
                is_current: true,
                description: Some(json!(["Built things", 42, "  ", "Shipped things"])),
                sort_order: 0,
            }],
            educations: vec![EducationRow {
                id: Uuid::new_v4(),
                resume_id,
                institution: "State University".to_string(),
                degree: "BSc".to_string(),
                field_of_study: None,
                start_date: Some("09/2015".to_string()),
                end_date: Some("spring term".to_string()),
                is_current: false,
                gpa: Some(3.7),
                sort_order: 0,
            }],
            courses: vec![CourseRow {
                id: Uuid::new_v4(),
                resume_id,
                title: "Distributed Systems".to_string(),
                provider: "Online".to_string(),
                link: Some("".to_string()),
                sort_order: 0,
            }],
            strengths: vec![StrengthRow {
                id: Uuid::new_v4(),
                resume_id,
                skill_name: "Rust".to_string(),
                rating: 14,
                sort_order: 0,
            }],
            interests: vec![
                InterestRow {
                    id: Uuid::new_v4(),
                    resume_id,
                    name: "Climbing".to_string(),
                    sort_order: 0,
                },
                InterestRow {
                    id: Uuid::new_v4(),
                    resume_id,
                    name: " ".to_string(),
                    sort_order: 1,
                },
            ],
        }
    }

    #[test]
    fn test_resume_value_beats_profile() {
        let overrides = PersonalInfoOverrides::from_content(Some(&json!({
            "personalInfo": { "name": "Jane" }
        })));
        let info = PersonalInfo::merge(overrides, &make_profile(Some("John")));
        assert_eq!(info.name, "Jane");
    }

    #[test]
    fn test_profile_fills_missing_resume_value() {
        let overrides = PersonalInfoOverrides::from_content(Some(&json!({})));
        let info = PersonalInfo::merge(overrides, &make_profile(Some("John")));
        assert_eq!(info.name, "John");
    }

    #[test]
    fn test_both_absent_yields_empty_string() {
        let overrides = PersonalInfoOverrides::from_content(Some(&json!({})));
        let info = PersonalInfo::merge(overrides, &make_profile(None));
        assert_eq!(info.name, "");
        assert_eq!(info, PersonalInfo::default());
    }

    #[test]
    fn test_profile_only_fields_map_to_render_fields() {
        let profile = UserProfileRow {
            id: Uuid::new_v4(),
            name: None,
            email: Some("john@example.com".into()),
            phone: Some("555-0100".into()),
            location: Some("Austin".into()),
            portfolio_url: Some("https://john.dev".into()),
            linkedin_url: Some("https://linkedin.com/in/john".into()),
        };
        let info = PersonalInfo::merge(PersonalInfoOverrides::default(), &profile);
        assert_eq!(info.email, "john@example.com");
        assert_eq!(info.phone, "555-0100");
        assert_eq!(info.city, "Austin");
        assert_eq!(info.website, "https://john.dev");
        assert_eq!(info.linkedin, "https://linkedin.com/in/john");
        assert_eq!(info.state, "");
        assert_eq!(info.github, "");
    }

    #[test]
    fn test_blank_and_non_string_overrides_are_ignored() {
        let overrides = PersonalInfoOverrides::from_content(Some(&json!({
            "personalInfo": { "name": "   ", "phone": 5550100, "summary": "Hi" }
        })));
        assert_eq!(overrides.name, None);
        assert_eq!(overrides.phone, None);
        assert_eq!(overrides.summary.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_malformed_content_means_no_overrides() {
        for content in [
            json!(null),
            json!([1, 2, 3]),
            json!({ "personalInfo": "not an object" }),
            json!("{not json"),
        ] {
            assert_eq!(
                PersonalInfoOverrides::from_content(Some(&content)),
                PersonalInfoOverrides::default()
            );
        }
    }

    #[test]
    fn test_json_encoded_content_string_is_decoded() {
        let content = Value::String(r#"{"personalInfo":{"github":"gh/jane"}}"#.to_string());
        let overrides = PersonalInfoOverrides::from_content(Some(&content));
        assert_eq!(overrides.github.as_deref(), Some("gh/jane"));
    }

    #[test]
    fn test_null_content_falls_back_to_profile() {
        assert_eq!(
            PersonalInfoOverrides::from_content(None),
            PersonalInfoOverrides::default()
        );
        let model = normalize_resume(&make_resume(None), &make_profile(Some("John")), "https://host");
        assert_eq!(model.personal_info.name, "John");
        assert_eq!(model.personal_info.summary, "");
    }

    #[test]
    fn test_normalize_resume_shapes_children() {
        let resume = make_resume(Some(json!({ "personalInfo": { "name": "Jane" } })));
        let model = normalize_resume(&resume, &make_profile(None), "https://host");

        assert_eq!(model.job_title, "");
        assert_eq!(
            model.profile_picture.as_deref(),
            Some("https://host/uploads/me.png")
        );

        let work = &model.work_experiences[0];
        assert_eq!(work.start_date, "2020-03-01");
        assert_eq!(work.end_date, None);
        assert_eq!(work.description, vec!["Built things", "Shipped things"]);

        let edu = &model.educations[0];
        assert_eq!(edu.start_date.as_deref(), Some("2015-09-01"));
        assert_eq!(edu.end_date.as_deref(), Some("spring term"));
        assert_eq!(edu.field_of_study, "");

        assert_eq!(model.courses[0].link, None);
        assert_eq!(model.strengths[0].rating, 10);
        assert_eq!(model.interests, vec!["Climbing"]);
    }

    #[test]
    fn test_non_list_bullets_are_empty() {
        assert!(normalize_bullets(Some(&json!("-5% churn\nLed team"))).is_empty());
        assert!(normalize_bullets(Some(&json!(null))).is_empty());
        assert!(normalize_bullets(Some(&json!({ "a": 1 }))).is_empty());
        assert!(normalize_bullets(Some(&json!(7))).is_empty());
        assert!(normalize_bullets(None).is_empty());
    }

    #[test]
    fn test_template_selection_priority() {
        assert_eq!(select_template(Some("classic"), Some("modern")), "classic");
        assert_eq!(select_template(None, Some("classic")), "classic");
        assert_eq!(select_template(Some("  "), Some("classic")), "classic");
        assert_eq!(select_template(None, None), "modern");
        assert_eq!(select_template(Some("unknown"), None), "unknown");
    }
}
