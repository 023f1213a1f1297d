use crate::domain::model::{ProjectDescription, ProjectRecord};

/// Builds the card markup for one project record. The card carries its
/// category in `data-type` so the filter controller can match against it.
pub fn render_project(project: &ProjectRecord) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<div class=\"project-card\" data-type=\"{}\">",
        project.kind
    ));

    if let Some(image) = &project.image {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"project-image\">",
            image, project.title
        ));
    }

    html.push_str("<div class=\"project-content\">");
    html.push_str(&format!("<span class=\"project-type\">{}</span>", project.kind));
    html.push_str(&format!("<h3>{}</h3>", project.title));

    match &project.description {
        ProjectDescription::Bullets(points) => {
            html.push_str("<ul class=\"project-description\">");
            for point in points {
                html.push_str(&format!("<li>{}</li>", point));
            }
            html.push_str("</ul>");
        }
        ProjectDescription::Text(text) => {
            html.push_str(&format!("<p>{}</p>", text));
        }
    }

    if let Some(technologies) = &project.technologies {
        if !technologies.is_empty() {
            html.push_str("<div class=\"project-tech\">");
            for tech in technologies {
                html.push_str(&format!("<span>{}</span>", tech));
            }
            html.push_str("</div>");
        }
    }

    html.push_str("<div class=\"project-links\">");

    if let Some(github) = &project.github {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"project-link\">View on GitHub →</a>",
            github
        ));
    }

    if let Some(live_url) = &project.live_url {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"project-link\">Live Demo →</a>",
            live_url
        ));
    }

    html.push_str("</div>"); // project-links
    html.push_str("</div>"); // project-content
    html.push_str("</div>"); // project-card

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_project() -> ProjectRecord {
        ProjectRecord {
            title: "Tracker".to_string(),
            kind: "Personal".to_string(),
            image: None,
            description: ProjectDescription::Text("A habit tracker.".to_string()),
            technologies: None,
            github: None,
            live_url: None,
        }
    }

    #[test]
    fn test_string_description_renders_one_paragraph() {
        let html = render_project(&base_project());

        assert!(html.contains("<p>A habit tracker.</p>"));
        assert!(!html.contains("project-description"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_list_description_renders_items_in_order() {
        let project = ProjectRecord {
            description: ProjectDescription::Bullets(vec![
                "one".to_string(),
                "two".to_string(),
                "three".to_string(),
            ]),
            ..base_project()
        };
        let html = render_project(&project);

        assert_eq!(html.matches("<li>").count(), 3);
        let one = html.find("<li>one</li>").unwrap();
        let two = html.find("<li>two</li>").unwrap();
        let three = html.find("<li>three</li>").unwrap();
        assert!(one < two && two < three);
    }

    #[test]
    fn test_missing_technologies_renders_no_tech_block() {
        let html = render_project(&base_project());
        assert!(!html.contains("project-tech"));

        let project = ProjectRecord {
            technologies: Some(vec![]),
            ..base_project()
        };
        assert!(!render_project(&project).contains("project-tech"));
    }

    #[test]
    fn test_technologies_render_as_spans() {
        let project = ProjectRecord {
            technologies: Some(vec!["Rust".to_string(), "SQLite".to_string()]),
            ..base_project()
        };
        let html = render_project(&project);

        assert!(html.contains("<div class=\"project-tech\"><span>Rust</span><span>SQLite</span></div>"));
    }

    #[test]
    fn test_links_and_image_are_conditional() {
        let plain = render_project(&base_project());
        assert!(plain.contains("<div class=\"project-links\"></div>"));
        assert!(!plain.contains("project-image"));

        let project = ProjectRecord {
            image: Some("images/tracker.png".to_string()),
            github: Some("https://github.com/x/tracker".to_string()),
            live_url: Some("https://tracker.example".to_string()),
            ..base_project()
        };
        let html = render_project(&project);

        assert!(html.contains("alt=\"Tracker\""));
        assert!(html.contains("View on GitHub →"));
        assert!(html.contains("Live Demo →"));
    }

    #[test]
    fn test_card_carries_category_attribute() {
        let html = render_project(&base_project());
        assert!(html.starts_with("<div class=\"project-card\" data-type=\"Personal\">"));
    }
}
