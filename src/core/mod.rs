pub mod engine;
pub mod filter;
pub mod nav;
pub mod page;
pub mod section;

pub use crate::domain::model::{
    ExperienceDoc, ExperienceRecord, ProjectDescription, ProjectRecord, ProjectsDoc,
    PublicationRecord, PublicationsDoc,
};
pub use crate::domain::ports::{ConfigProvider, DataSource, Storage};
pub use crate::utils::error::Result;
pub use page::{Container, Fragment};
