#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub job_title: Option<String>,
    /// Data URI, absolute URL, legacy path or a browser-local storage id.
    pub profile_picture: Option<String>,
    pub template: Option<String>,
    /// Free-form editor state; may embed a `personalInfo` object. Nullable column.
    pub content: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkExperienceRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    /// Usually a JSON array of bullet strings, but not enforced by the editor.
    pub description: Option<Value>,
    pub sort_order: i32,
}

/// Education dates are stored as the editor submitted them (`2019-09`, `09/2019`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EducationRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub gpa: Option<f64>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub title: String,
    pub provider: String,
    pub link: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StrengthRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub skill_name: String,
    pub rating: i32,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterestRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub name: String,
    pub sort_order: i32,
}

/// A resume with every child collection loaded, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedResume {
    pub resume: ResumeRow,
    pub work_experiences: Vec<WorkExperienceRow>,
    pub educations: Vec<EducationRow>,
    pub courses: Vec<CourseRow>,
    pub strengths: Vec<StrengthRow>,
    pub interests: Vec<InterestRow>,
}
