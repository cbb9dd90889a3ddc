use serde::{Deserialize, Serialize};

/// Template-agnostic view of one resume, rebuilt for every export.
/// Dates are `YYYY-MM-DD` whenever the stored value could be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRenderModel {
    pub title: String,
    pub job_title: String,
    pub profile_picture: Option<String>,
    pub personal_info: PersonalInfo,
    pub strengths: Vec<Strength>,
    pub work_experiences: Vec<WorkEntry>,
    pub educations: Vec<EducationEntry>,
    pub courses: Vec<CourseEntry>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub summary: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    pub skill_name: String,
    /// 0..=10
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub title: String,
    pub provider: String,
    pub link: Option<String>,
}
