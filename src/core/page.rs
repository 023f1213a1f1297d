pub const EXPERIENCE_CONTAINER: &str = "experience-container";
pub const PROJECTS_CONTAINER: &str = "projects-container";
pub const PUBLICATIONS_CONTAINER: &str = "publications-container";

/// The markup produced for exactly one record, together with the category
/// the filter controller matches against and the current visibility flag.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub category: Option<String>,
    pub html: String,
    pub hidden: bool,
}

impl Fragment {
    pub fn new(html: String) -> Self {
        Self {
            category: None,
            html,
            hidden: false,
        }
    }

    pub fn with_category(html: String, category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            html,
            hidden: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ContainerState {
    Loading,
    Rendered(Vec<Fragment>),
    Failed(String),
}

/// The single element a page designates to receive a section's fragments.
/// Content is replaced wholesale: once with the full fragment sequence on
/// success, or once with a static error paragraph on failure.
#[derive(Debug, Clone)]
pub struct Container {
    pub id: String,
    state: ContainerState,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: ContainerState::Loading,
        }
    }

    /// Replaces the placeholder with the full ordered fragment sequence in
    /// one assignment.
    pub fn assign(&mut self, fragments: Vec<Fragment>) {
        self.state = ContainerState::Rendered(fragments);
    }

    /// Replaces the content with a single static error message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = ContainerState::Failed(message.into());
    }

    pub fn state(&self) -> &ContainerState {
        &self.state
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, ContainerState::Failed(_))
    }

    /// A failed or still-loading container holds zero fragments.
    pub fn fragments(&self) -> &[Fragment] {
        match &self.state {
            ContainerState::Rendered(fragments) => fragments,
            _ => &[],
        }
    }

    pub fn fragments_mut(&mut self) -> &mut [Fragment] {
        match &mut self.state {
            ContainerState::Rendered(fragments) => fragments,
            _ => &mut [],
        }
    }

    pub fn html(&self) -> String {
        match &self.state {
            ContainerState::Loading => {
                "<p class=\"loading-message\">Loading...</p>".to_string()
            }
            ContainerState::Rendered(fragments) => {
                fragments.iter().map(|f| f.html.as_str()).collect()
            }
            ContainerState::Failed(message) => {
                format!("<p class=\"loading-message\">{}</p>", message)
            }
        }
    }
}
