//! Single-column serif layout with a centred header.

use super::{contact_items, date_range, escape_html, gpa_label, skill_label};
use crate::export::model::CanonicalRenderModel;

const INK: &str = "#111827";
const RULE: &str = "#7c2d12";

pub(super) fn render(model: &CanonicalRenderModel) -> String {
    let info = &model.personal_info;
    let mut html = format!(
        r#"<style>
.classic {{ font-family: Georgia, 'Times New Roman', serif; color: {INK}; width: 210mm; min-height: 297mm; margin: 0 auto; padding: 36px 48px; box-sizing: border-box; background: #fff; }}
.classic header {{ text-align: center; border-bottom: 2px solid {RULE}; padding-bottom: 14px; margin-bottom: 18px; }}
.classic header img {{ width: 96px; height: 96px; border-radius: 4px; object-fit: cover; margin-bottom: 8px; }}
.classic h1 {{ margin: 0; font-size: 28px; font-variant: small-caps; }}
.classic .job-title {{ font-style: italic; margin-top: 4px; }}
.classic .contact {{ font-size: 12px; margin-top: 8px; }}
.classic h2 {{ font-size: 15px; font-variant: small-caps; color: {RULE}; border-bottom: 1px solid {RULE}; margin: 18px 0 8px; }}
.classic .entry {{ margin-bottom: 10px; font-size: 13px; }}
.classic .when {{ float: right; font-style: italic; }}
.classic .skill-bar {{ display: inline-block; width: 60px; height: 5px; background: #e5e7eb; margin-left: 8px; vertical-align: middle; }}
.classic .skill-bar span {{ display: block; height: 5px; background: {RULE}; }}
.classic ul {{ margin: 4px 0 0 20px; padding: 0; }}
</style><div class="resume classic"><header>"#
    );

    if let Some(src) = &model.profile_picture {
        html.push_str(&format!(
            r#"<img src="{}" alt="Profile picture"><br>"#,
            escape_html(src)
        ));
    }
    html.push_str(&format!("<h1>{}</h1>", escape_html(&info.name)));
    if !model.job_title.is_empty() {
        html.push_str(&format!(
            r#"<div class="job-title">{}</div>"#,
            escape_html(&model.job_title)
        ));
    }
    let contacts = contact_items(info);
    if !contacts.is_empty() {
        html.push_str(&format!(
            r#"<div class="contact">{}</div>"#,
            contacts.join(" &middot; ")
        ));
    }
    html.push_str("</header>");

    if !info.summary.is_empty() {
        html.push_str(&format!(
            "<h2>Summary</h2><p>{}</p>",
            escape_html(&info.summary)
        ));
    }

    if !model.work_experiences.is_empty() {
        html.push_str("<h2>Work Experience</h2>");
        for w in &model.work_experiences {
            html.push_str(&format!(
                r#"<div class="entry"><span class="when">{}</span><strong>{}</strong>, {}"#,
                date_range(Some(&w.start_date), w.end_date.as_deref(), w.is_current),
                escape_html(&w.position),
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
    }

    if !model.educations.is_empty() {
        html.push_str("<h2>Education</h2>");
        for e in &model.educations {
            let mut line = escape_html(&e.degree);
            if !e.field_of_study.is_empty() {
                line.push_str(&format!(", {}", escape_html(&e.field_of_study)));
            }
            if let Some(gpa) = gpa_label(e.gpa) {
                line.push_str(&format!(" ({gpa})"));
            }
            html.push_str(&format!(
                r#"<div class="entry"><span class="when">{}</span><strong>{}</strong><br>{line}</div>"#,
                date_range(e.start_date.as_deref(), e.end_date.as_deref(), e.is_current),
                escape_html(&e.institution)
            ));
        }
    }

    if !model.strengths.is_empty() {
        html.push_str("<h2>Skills</h2>");
        for s in &model.strengths {
            html.push_str(&format!(
                r#"<div class="entry">{}<span class="skill-bar"><span style="width: {}%;"></span></span></div>"#,
                skill_label(&s.skill_name, s.rating),
                u32::from(s.rating) * 10
            ));
        }
    }

    if !model.courses.is_empty() {
        html.push_str("<h2>Courses</h2>");
        for c in &model.courses {
            let link = c
                .link
                .as_deref()
                .map(|l| format!(r#" <a href="{0}">{0}</a>"#, escape_html(l)))
                .unwrap_or_default();
            html.push_str(&format!(
                r#"<div class="entry"><strong>{}</strong>, {}{link}</div>"#,
                escape_html(&c.title),
                escape_html(&c.provider)
            ));
        }
    }

    if !model.interests.is_empty() {
        let interests: Vec<String> = model.interests.iter().map(|i| escape_html(i)).collect();
        html.push_str(&format!(
            "<h2>Interests</h2><p>{}</p>",
            interests.join(", ")
        ));
    }

    html.push_str("</div>");
    html
}
