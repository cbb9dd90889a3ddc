//! Resume store — the single read path the export pipeline uses.
//!
//! Ownership is enforced in the query itself: a resume owned by another user
//! is indistinguishable from one that does not exist.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{
    CourseRow, EducationRow, InterestRow, PersistedResume, ResumeRow, StrengthRow,
    WorkExperienceRow,
};
use crate::models::user::UserProfileRow;

/// A resume plus the owner's profile, as handed to the export pipeline.
#[derive(Debug, Clone)]
pub struct ResumeBundle {
    pub resume: PersistedResume,
    pub profile: UserProfileRow,
}

/// Carried in `AppState` as `Arc<dyn ResumeStore>` so handlers can be tested
/// without a database.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn fetch_for_owner(
        &self,
        resume_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ResumeBundle>, AppError>;
}

/// Postgres-backed store.
#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn fetch_for_owner(
        &self,
        resume_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ResumeBundle>, AppError> {
        let resume = sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes WHERE id = $1 AND user_id = $2",
        )
        .bind(resume_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(resume) = resume else {
            debug!("Resume {resume_id} not found for user {user_id}");
            return Ok(None);
        };

        let profile = sqlx::query_as::<_, UserProfileRow>(
            r#"
            SELECT id, name, email, phone, location, portfolio_url, linkedin_url
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .unwrap_or_else(|| UserProfileRow {
            id: user_id,
            ..Default::default()
        });

        let work_experiences = sqlx::query_as::<_, WorkExperienceRow>(
            "SELECT * FROM work_experiences WHERE resume_id = $1 ORDER BY sort_order, id",
        )
        .bind(resume_id)
        .fetch_all(&self.pool)
        .await?;

        let educations = sqlx::query_as::<_, EducationRow>(
            "SELECT * FROM educations WHERE resume_id = $1 ORDER BY sort_order, id",
        )
        .bind(resume_id)
        .fetch_all(&self.pool)
        .await?;

        let courses = sqlx::query_as::<_, CourseRow>(
            "SELECT * FROM courses WHERE resume_id = $1 ORDER BY sort_order, id",
        )
        .bind(resume_id)
        .fetch_all(&self.pool)
        .await?;

        let strengths = sqlx::query_as::<_, StrengthRow>(
            "SELECT * FROM strengths WHERE resume_id = $1 ORDER BY sort_order, id",
        )
        .bind(resume_id)
        .fetch_all(&self.pool)
        .await?;

        let interests = sqlx::query_as::<_, InterestRow>(
            "SELECT * FROM interests WHERE resume_id = $1 ORDER BY sort_order, id",
        )
        .bind(resume_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(ResumeBundle {
            resume: PersistedResume {
                resume,
                work_experiences,
                educations,
                courses,
                strengths,
                interests,
            },
            profile,
        }))
    }
}
