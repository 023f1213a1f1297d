pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{HttpSource, LocalSource, LocalStorage};
pub use crate::config::SiteConfig;
pub use crate::core::engine::SiteEngine;
pub use crate::core::filter::{FilterGroup, FILTER_ALL};
pub use crate::core::nav::MobileNav;
pub use crate::core::page::{Container, Fragment};
pub use crate::core::section::{
    ExperienceSection, ProjectsSection, PublicationsSection, Section,
};
pub use crate::utils::error::{Result, SiteError};
