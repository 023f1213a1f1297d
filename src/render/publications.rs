use crate::domain::model::PublicationRecord;

/// Builds the entry markup for one publication. `author_name` is the display
/// name loaded from the document; author strings equal to it are bolded.
pub fn render_publication(publication: &PublicationRecord, author_name: &str) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<div class=\"publication-entry\" data-type=\"{}\">",
        publication.kind
    ));
    html.push_str("<div class=\"publication-details\">");

    // Type badge (Book or Research)
    html.push_str(&format!(
        "<span class=\"publication-type publication-type-{}\">{}</span>",
        publication.kind.to_lowercase(),
        publication.kind
    ));

    // Title, linked when a URL or DOI exists
    match publication.url.as_ref().or(publication.doi.as_ref()) {
        Some(link) => html.push_str(&format!(
            "<h3 class=\"publication-title\"><a href=\"{}\" target=\"_blank\">{}</a></h3>",
            link, publication.title
        )),
        None => html.push_str(&format!(
            "<h3 class=\"publication-title\">{}</h3>",
            publication.title
        )),
    }

    html.push_str("<p class=\"publication-authors\">");
    let authors: Vec<String> = publication
        .authors
        .iter()
        .map(|author| {
            if author == author_name {
                format!("<strong>{}</strong>", author)
            } else {
                author.clone()
            }
        })
        .collect();
    html.push_str(&authors.join(", "));
    html.push_str("</p>");

    html.push_str("<p class=\"publication-venue\">");
    html.push_str(&venue_line(publication));
    html.push_str(&format!(" · {}", publication.year));
    html.push_str("</p>");

    html.push_str(&format!(
        "<p class=\"publication-description\">{}</p>",
        publication.description
    ));

    html.push_str("<div class=\"publication-links\">");
    if let Some(pdf) = &publication.pdf {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"publication-link\">PDF →</a>",
            pdf
        ));
    }
    if let Some(doi) = &publication.doi {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"publication-link\">DOI →</a>",
            doi
        ));
    }
    if let Some(url) = &publication.url {
        if publication.kind == "Book" {
            html.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" class=\"publication-link\">Get the Book →</a>",
                url
            ));
        }
    }
    html.push_str("</div>");

    html.push_str("</div>"); // publication-details
    html.push_str("</div>"); // publication-entry

    html
}

/// Venue markup from the mutually exclusive field groups:
/// publisher[+isbn] | journal[+volume][+issue][+pages] | conference[+pages].
fn venue_line(publication: &PublicationRecord) -> String {
    let mut venue = String::new();

    if let Some(publisher) = &publication.publisher {
        venue.push_str(publisher);
        if let Some(isbn) = &publication.isbn {
            venue.push_str(&format!(" · ISBN: {}", isbn));
        }
    } else if let Some(journal) = &publication.journal {
        venue.push_str(&format!("<em>{}</em>", journal));
        if let Some(volume) = &publication.volume {
            venue.push_str(&format!(", Vol. {}", volume));
        }
        if let Some(issue) = &publication.issue {
            venue.push_str(&format!("({})", issue));
        }
        if let Some(pages) = &publication.pages {
            venue.push_str(&format!(", pp. {}", pages));
        }
    } else if let Some(conference) = &publication.conference {
        venue.push_str(&format!("<em>{}</em>", conference));
        if let Some(pages) = &publication.pages {
            venue.push_str(&format!(", pp. {}", pages));
        }
    }

    venue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_publication() -> PublicationRecord {
        PublicationRecord {
            kind: "Research".to_string(),
            title: "On Rendering".to_string(),
            authors: vec!["A. Author".to_string(), "B. Writer".to_string()],
            year: 2021,
            url: None,
            doi: None,
            pdf: None,
            publisher: None,
            isbn: None,
            journal: None,
            volume: None,
            issue: None,
            pages: None,
            conference: None,
            description: "A study.".to_string(),
        }
    }

    #[test]
    fn test_matching_author_alone_is_emphasized() {
        let html = render_publication(&base_publication(), "B. Writer");

        assert!(html.contains("A. Author, <strong>B. Writer</strong>"));
        assert!(!html.contains("<strong>A. Author</strong>"));
    }

    #[test]
    fn test_no_author_emphasized_without_a_match() {
        let html = render_publication(&base_publication(), "");
        assert!(!html.contains("<strong>"));
        assert!(html.contains("A. Author, B. Writer"));
    }

    #[test]
    fn test_journal_venue_composition() {
        let publication = PublicationRecord {
            journal: Some("Journal of Sites".to_string()),
            volume: Some("12".to_string()),
            issue: Some("3".to_string()),
            pages: Some("45-67".to_string()),
            ..base_publication()
        };
        let html = render_publication(&publication, "");

        assert!(html.contains(
            "<p class=\"publication-venue\"><em>Journal of Sites</em>, Vol. 12(3), pp. 45-67 · 2021</p>"
        ));
    }

    #[test]
    fn test_publisher_venue_with_isbn() {
        let publication = PublicationRecord {
            kind: "Book".to_string(),
            publisher: Some("Big House".to_string()),
            isbn: Some("978-1".to_string()),
            ..base_publication()
        };
        let html = render_publication(&publication, "");

        assert!(html.contains("<p class=\"publication-venue\">Big House · ISBN: 978-1 · 2021</p>"));
    }

    #[test]
    fn test_conference_venue_with_pages() {
        let publication = PublicationRecord {
            conference: Some("SiteConf".to_string()),
            pages: Some("1-9".to_string()),
            ..base_publication()
        };
        let html = render_publication(&publication, "");

        assert!(html.contains("<p class=\"publication-venue\"><em>SiteConf</em>, pp. 1-9 · 2021</p>"));
    }

    #[test]
    fn test_year_is_always_appended_to_venue() {
        let html = render_publication(&base_publication(), "");
        assert!(html.contains("<p class=\"publication-venue\"> · 2021</p>"));
    }

    #[test]
    fn test_title_link_prefers_url_over_doi() {
        let publication = PublicationRecord {
            url: Some("https://a.example".to_string()),
            doi: Some("https://doi.org/10.1/x".to_string()),
            ..base_publication()
        };
        let html = render_publication(&publication, "");

        assert!(html.contains("<a href=\"https://a.example\" target=\"_blank\">On Rendering</a>"));
    }

    #[test]
    fn test_unlinked_title_without_url_or_doi() {
        let html = render_publication(&base_publication(), "");
        assert!(html.contains("<h3 class=\"publication-title\">On Rendering</h3>"));
    }

    #[test]
    fn test_link_row_composition() {
        let publication = PublicationRecord {
            kind: "Book".to_string(),
            url: Some("https://buy.example".to_string()),
            pdf: Some("papers/x.pdf".to_string()),
            doi: Some("https://doi.org/10.1/x".to_string()),
            ..base_publication()
        };
        let html = render_publication(&publication, "");

        assert!(html.contains("PDF →"));
        assert!(html.contains("DOI →"));
        assert!(html.contains("Get the Book →"));

        // "Get the Book" is reserved for books
        let research = PublicationRecord {
            kind: "Research".to_string(),
            url: Some("https://buy.example".to_string()),
            ..base_publication()
        };
        assert!(!render_publication(&research, "").contains("Get the Book"));
    }

    #[test]
    fn test_type_badge_class_is_lowercased() {
        let html = render_publication(&base_publication(), "");
        assert!(html.contains("publication-type publication-type-research"));
        assert!(html.starts_with("<div class=\"publication-entry\" data-type=\"Research\">"));
    }
}
