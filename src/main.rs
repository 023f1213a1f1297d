use anyhow::Result;
use clap::Parser;
use folio::core::page::Container;
use folio::core::section::{ExperienceSection, ProjectsSection, PublicationsSection, Section};
use folio::domain::ports::{ConfigProvider, DataSource, Storage};
use folio::utils::{logger, validation::Validate};
use folio::{CliConfig, HttpSource, LocalSource, LocalStorage, SiteConfig, SiteEngine};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting folio");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let (base_url, site_root, output_path) = match &cli.config {
        Some(path) => {
            let site = SiteConfig::from_file(path)?;
            exit_on_invalid(&site);
            tracing::info!("Using site config from {}", path);
            resolve(&site)
        }
        None => {
            exit_on_invalid(&cli);
            resolve(&cli)
        }
    };

    let storage = LocalStorage::new(output_path.clone());

    match base_url {
        Some(url) => render_site(HttpSource::new(url), &storage).await?,
        None => render_site(LocalSource::new(site_root), &storage).await?,
    }

    tracing::info!("Site rendered to {}", output_path);
    println!("Site rendered to {}", output_path);

    Ok(())
}

fn exit_on_invalid<C: Validate>(config: &C) {
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn resolve<C: ConfigProvider>(config: &C) -> (Option<String>, String, String) {
    (
        config.base_url().map(str::to_string),
        config.site_root().to_string(),
        config.output_path().to_string(),
    )
}

async fn render_site<D: DataSource + Clone>(source: D, storage: &LocalStorage) -> Result<()> {
    let engine = SiteEngine::new();

    let experience = ExperienceSection::new(source.clone());
    write_section(&engine, &experience, "experience.html", storage).await?;

    let projects = ProjectsSection::new(source.clone());
    write_section(&engine, &projects, "projects.html", storage).await?;

    let publications = PublicationsSection::new(source);
    write_section(&engine, &publications, "publications.html", storage).await?;

    Ok(())
}

async fn write_section<S: Section>(
    engine: &SiteEngine,
    section: &S,
    file_name: &str,
    storage: &LocalStorage,
) -> Result<()> {
    let mut container = Container::new(section.container_id());
    engine.render_section(section, Some(&mut container)).await;

    storage
        .write_file(file_name, container.html().as_bytes())
        .await?;
    tracing::info!("Wrote {}", file_name);

    Ok(())
}
