//! Two-column layout: navy sidebar for skills and interests, main column for history.

use super::{contact_items, date_range, escape_html, gpa_label, skill_label};
use crate::export::model::CanonicalRenderModel;

const BRAND_PRIMARY: &str = "#1e3a5f";
const BRAND_ACCENT: &str = "#3b82f6";
const BRAND_MUTED: &str = "#64748b";

pub(super) fn render(model: &CanonicalRenderModel) -> String {
    let mut html = String::new();
    html.push_str(&styles());
    html.push_str(r#"<div class="resume modern">"#);
    html.push_str(&header(model));
    html.push_str(r#"<div class="columns"><aside class="sidebar">"#);
    html.push_str(&skills(model));
    html.push_str(&interests(model));
    html.push_str(r#"</aside><main class="main">"#);
    html.push_str(&summary(model));
    html.push_str(&work(model));
    html.push_str(&education(model));
    html.push_str(&courses(model));
    html.push_str("</main></div></div>");
    html
}

fn styles() -> String {
    format!(
        r#"<style>
.modern {{ font-family: 'Helvetica Neue', Arial, sans-serif; color: #1f2937; width: 210mm; min-height: 297mm; margin: 0 auto; background: #fff; }}
.modern .header {{ display: flex; align-items: center; gap: 24px; padding: 32px 40px; background: {BRAND_PRIMARY}; color: #fff; }}
.modern .header img {{ width: 110px; height: 110px; border-radius: 50%; object-fit: cover; border: 3px solid #fff; }}
.modern .header h1 {{ margin: 0; font-size: 30px; letter-spacing: 0.5px; }}
.modern .header .job-title {{ margin: 4px 0 10px; font-size: 16px; color: #cbd5e1; }}
.modern .contact {{ display: flex; flex-wrap: wrap; gap: 6px 16px; font-size: 12px; }}
.modern .columns {{ display: flex; }}
.modern .sidebar {{ width: 32%; padding: 24px 20px; background: #f1f5f9; }}
.modern .main {{ width: 68%; padding: 24px 32px; }}
.modern h2 {{ font-size: 14px; text-transform: uppercase; letter-spacing: 1.5px; color: {BRAND_PRIMARY}; border-bottom: 2px solid {BRAND_ACCENT}; padding-bottom: 4px; margin: 0 0 12px; }}
.modern .section {{ margin-bottom: 20px; }}
.modern .skill {{ margin-bottom: 8px; font-size: 12px; }}
.modern .bar {{ height: 6px; background: #cbd5e1; border-radius: 3px; margin-top: 3px; }}
.modern .bar-fill {{ height: 6px; background: {BRAND_ACCENT}; border-radius: 3px; }}
.modern .entry {{ margin-bottom: 14px; }}
.modern .entry-head {{ display: flex; justify-content: space-between; font-weight: 600; font-size: 13px; }}
.modern .entry-sub {{ font-size: 12px; color: {BRAND_MUTED}; margin: 2px 0 4px; }}
.modern ul {{ margin: 4px 0 0 18px; padding: 0; font-size: 12px; }}
.modern .tags span {{ display: inline-block; margin: 0 6px 6px 0; padding: 2px 8px; border-radius: 10px; background: {BRAND_PRIMARY}; color: #fff; font-size: 11px; }}
</style>"#
    )
}

fn header(model: &CanonicalRenderModel) -> String {
    let info = &model.personal_info;
    let mut html = String::from(r#"<header class="header">"#);

    if let Some(src) = &model.profile_picture {
        html.push_str(&format!(
            r#"<img src="{}" alt="Profile picture">"#,
            escape_html(src)
        ));
    }

    html.push_str("<div>");
    html.push_str(&format!("<h1>{}</h1>", escape_html(&info.name)));
    if !model.job_title.is_empty() {
        html.push_str(&format!(
            r#"<div class="job-title">{}</div>"#,
            escape_html(&model.job_title)
        ));
    }
    let contacts = contact_items(info);
    if !contacts.is_empty() {
        html.push_str(r#"<div class="contact">"#);
        for item in contacts {
            html.push_str(&format!("<span>{item}</span>"));
        }
        html.push_str("</div>");
    }
    html.push_str("</div></header>");
    html
}

fn summary(model: &CanonicalRenderModel) -> String {
    let summary = &model.personal_info.summary;
    if summary.is_empty() {
        return String::new();
    }
    format!(
        r#"<section class="section"><h2>Profile</h2><p style="font-size: 12px; line-height: 1.5;">{}</p></section>"#,
        escape_html(summary)
    )
}

fn skills(model: &CanonicalRenderModel) -> String {
    if model.strengths.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<section class="section"><h2>Skills</h2>"#);
    for s in &model.strengths {
        html.push_str(&format!(
            r#"<div class="skill">{}<div class="bar"><div class="bar-fill" style="width: {}%;"></div></div></div>"#,
            skill_label(&s.skill_name, s.rating),
            u32::from(s.rating) * 10
        ));
    }
    html.push_str("</section>");
    html
}

fn interests(model: &CanonicalRenderModel) -> String {
    if model.interests.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<section class="section"><h2>Interests</h2><div class="tags">"#);
    for interest in &model.interests {
        html.push_str(&format!("<span>{}</span>", escape_html(interest)));
    }
    html.push_str("</div></section>");
    html
}

fn work(model: &CanonicalRenderModel) -> String {
    if model.work_experiences.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<section class="section"><h2>Work Experience</h2>"#);
    for w in &model.work_experiences {
        html.push_str(r#"<div class="entry">"#);
        html.push_str(&format!(
            r#"<div class="entry-head"><span>{}</span><span>{}</span></div>"#,
            escape_html(&w.position),
            date_range(Some(&w.start_date), w.end_date.as_deref(), w.is_current)
        ));
        html.push_str(&format!(
            r#"<div class="entry-sub">{}</div>"#,
            escape_html(&w.company)
        ));
        if !w.description.is_empty() {
            html.push_str("<ul>");
            for bullet in &w.description {
                html.push_str(&format!("<li>{}</li>", escape_html(bullet)));
            }
            html.push_str("</ul>");
        }
        html.push_str("</div>");
    }
    html.push_str("</section>");
    html
}

fn education(model: &CanonicalRenderModel) -> String {
    if model.educations.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<section class="section"><h2>Education</h2>"#);
    for e in &model.educations {
        let degree = if e.field_of_study.is_empty() {
            escape_html(&e.degree)
        } else {
            format!(
                "{} in {}",
                escape_html(&e.degree),
                escape_html(&e.field_of_study)
            )
        };
        html.push_str(r#"<div class="entry">"#);
        html.push_str(&format!(
            r#"<div class="entry-head"><span>{degree}</span><span>{}</span></div>"#,
            date_range(e.start_date.as_deref(), e.end_date.as_deref(), e.is_current)
        ));
        html.push_str(&format!(
            r#"<div class="entry-sub">{}</div>"#,
            escape_html(&e.institution)
        ));
        if let Some(gpa) = gpa_label(e.gpa) {
            html.push_str(&format!(r#"<div class="entry-sub">{gpa}</div>"#));
        }
        html.push_str("</div>");
    }
    html.push_str("</section>");
    html
}

fn courses(model: &CanonicalRenderModel) -> String {
    if model.courses.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<section class="section"><h2>Courses</h2>"#);
    for c in &model.courses {
        let title = match &c.link {
            Some(link) => format!(
                r#"<a href="{}" style="color: {BRAND_ACCENT}; text-decoration: none;">{}</a>"#,
                escape_html(link),
                escape_html(&c.title)
            ),
            None => escape_html(&c.title),
        };
        html.push_str(&format!(
            r#"<div class="entry"><div class="entry-head"><span>{title}</span></div><div class="entry-sub">{}</div></div>"#,
            escape_html(&c.provider)
        ));
    }
    html.push_str("</section>");
    html
}
