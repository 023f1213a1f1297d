use crate::core::page::{
    Fragment, EXPERIENCE_CONTAINER, PROJECTS_CONTAINER, PUBLICATIONS_CONTAINER,
};
use crate::domain::model::{ExperienceDoc, ProjectsDoc, PublicationsDoc};
use crate::domain::ports::DataSource;
use crate::render;
use crate::utils::error::Result;
use async_trait::async_trait;

/// One data-driven page section: a fixed resource path, a designated
/// container, and a pure record-to-fragment renderer.
#[async_trait]
pub trait Section: Send + Sync {
    type Doc: Send;

    fn container_id(&self) -> &'static str;
    fn resource_path(&self) -> &'static str;
    fn error_message(&self) -> &'static str;

    async fn fetch(&self) -> Result<Self::Doc>;
    fn render(&self, doc: Self::Doc) -> Vec<Fragment>;
}

pub struct ExperienceSection<D: DataSource> {
    source: D,
}

impl<D: DataSource> ExperienceSection<D> {
    pub fn new(source: D) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<D: DataSource> Section for ExperienceSection<D> {
    type Doc = ExperienceDoc;

    fn container_id(&self) -> &'static str {
        EXPERIENCE_CONTAINER
    }

    fn resource_path(&self) -> &'static str {
        "data/experience.json"
    }

    fn error_message(&self) -> &'static str {
        "Error loading experiences. Please check that data/experience.json exists and is valid JSON."
    }

    async fn fetch(&self) -> Result<ExperienceDoc> {
        self.source.fetch(self.resource_path()).await
    }

    fn render(&self, doc: ExperienceDoc) -> Vec<Fragment> {
        // Timeline entries keep their source order
        doc.experiences
            .iter()
            .map(|experience| Fragment::new(render::render_experience(experience)))
            .collect()
    }
}

pub struct ProjectsSection<D: DataSource> {
    source: D,
}

impl<D: DataSource> ProjectsSection<D> {
    pub fn new(source: D) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<D: DataSource> Section for ProjectsSection<D> {
    type Doc = ProjectsDoc;

    fn container_id(&self) -> &'static str {
        PROJECTS_CONTAINER
    }

    fn resource_path(&self) -> &'static str {
        "data/projects.json"
    }

    fn error_message(&self) -> &'static str {
        "Error loading projects. Please check that data/projects.json exists and is valid JSON."
    }

    async fn fetch(&self) -> Result<ProjectsDoc> {
        self.source.fetch(self.resource_path()).await
    }

    fn render(&self, doc: ProjectsDoc) -> Vec<Fragment> {
        doc.projects
            .iter()
            .map(|project| {
                Fragment::with_category(render::render_project(project), project.kind.clone())
            })
            .collect()
    }
}

pub struct PublicationsSection<D: DataSource> {
    source: D,
}

impl<D: DataSource> PublicationsSection<D> {
    pub fn new(source: D) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<D: DataSource> Section for PublicationsSection<D> {
    type Doc = PublicationsDoc;

    fn container_id(&self) -> &'static str {
        PUBLICATIONS_CONTAINER
    }

    fn resource_path(&self) -> &'static str {
        "data/publications.json"
    }

    fn error_message(&self) -> &'static str {
        "Error loading publications. Please check that data/publications.json exists and is valid JSON."
    }

    async fn fetch(&self) -> Result<PublicationsDoc> {
        self.source.fetch(self.resource_path()).await
    }

    fn render(&self, doc: PublicationsDoc) -> Vec<Fragment> {
        let author_name = doc.author_name().to_string();
        let mut publications = doc.publications;

        // Newest first; the sort is stable, so equal years keep source order
        publications.sort_by(|a, b| b.year.cmp(&a.year));

        publications
            .iter()
            .map(|publication| {
                Fragment::with_category(
                    render::render_publication(publication, &author_name),
                    publication.kind.clone(),
                )
            })
            .collect()
    }
}
