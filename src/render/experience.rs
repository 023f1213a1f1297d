use crate::domain::model::ExperienceRecord;

/// Builds the timeline entry markup for one experience record.
pub fn render_experience(experience: &ExperienceRecord) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"experience-entry\">");

    // Timeline marker
    html.push_str("<div class=\"experience-marker\"></div>");

    html.push_str("<div class=\"experience-content\">");
    html.push_str("<div class=\"experience-header\">");

    // Left side: logo (if available) and title/company
    html.push_str("<div class=\"experience-title-section\">");

    if let Some(logo) = &experience.logo {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{} logo\" class=\"experience-logo\">",
            logo, experience.company
        ));
    }

    html.push_str("<div class=\"experience-title-info\">");
    html.push_str(&format!(
        "<h3 class=\"experience-title\">{}</h3>",
        experience.title
    ));

    if let Some(url) = &experience.company_url {
        html.push_str(&format!(
            "<p class=\"experience-company\"><a href=\"{}\" target=\"_blank\">{}</a></p>",
            url, experience.company
        ));
    } else {
        html.push_str(&format!(
            "<p class=\"experience-company\">{}</p>",
            experience.company
        ));
    }

    html.push_str(&format!(
        "<p class=\"experience-location\">{}</p>",
        experience.location
    ));

    // GPA on its own line (if available)
    if let Some(gpa) = &experience.gpa {
        html.push_str(&format!("<p class=\"experience-gpa\">GPA: {}</p>", gpa));
    }

    html.push_str("</div>"); // experience-title-info
    html.push_str("</div>"); // experience-title-section

    // Right side: duration
    html.push_str("<div class=\"experience-duration\">");
    html.push_str(&format!(
        "<span class=\"experience-dates\">{} - {}</span>",
        experience.start_date, experience.end_date
    ));
    html.push_str("</div>");

    html.push_str("</div>"); // experience-header

    if let Some(highlights) = &experience.description {
        if !highlights.is_empty() {
            html.push_str("<ul class=\"experience-highlights\">");
            for highlight in highlights {
                html.push_str(&format!("<li>{}</li>", highlight));
            }
            html.push_str("</ul>");
        }
    }

    html.push_str("</div>"); // experience-content
    html.push_str("</div>"); // experience-entry

    html
}
