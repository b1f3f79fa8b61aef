use anyhow::Context;
use folio_content::{
    ContentSource, get_all_projects, get_blog_posts, get_contact_info, get_featured_projects,
    get_learned_items, get_profile, get_tech_logos,
};
use folio_core::entities::{ContactInfo, Profile, Project, TechLogo};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::output::output;

/// A content category the CLI can print.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Section {
    Profile,
    Contact,
    Projects { featured: bool },
    Skills,
    Learned,
    Blog,
    Home,
}

/// What the home page renders above the fold.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub profile: Option<Profile>,
    pub contact: Option<ContactInfo>,
    pub featured_projects: Vec<Project>,
    pub tech_logos: Vec<TechLogo>,
}

/// Handle `folio profile|contact|projects|skills|learned|blog|home`.
pub async fn handle<S: ContentSource>(
    section: Section,
    source: &S,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let value = fetch(section, source).await?;
    output(&value, format)
}

/// Run the mapping function(s) behind `section`.
pub async fn fetch<S: ContentSource>(section: Section, source: &S) -> anyhow::Result<Value> {
    let value = match section {
        Section::Profile => {
            serde_json::to_value(get_profile(source).await.context("failed to fetch profile")?)?
        }
        Section::Contact => serde_json::to_value(
            get_contact_info(source)
                .await
                .context("failed to fetch contact info")?,
        )?,
        Section::Projects { featured: true } => serde_json::to_value(
            get_featured_projects(source)
                .await
                .context("failed to fetch featured projects")?,
        )?,
        Section::Projects { featured: false } => serde_json::to_value(
            get_all_projects(source)
                .await
                .context("failed to fetch projects")?,
        )?,
        Section::Skills => serde_json::to_value(
            get_tech_logos(source)
                .await
                .context("failed to fetch tech logos")?,
        )?,
        Section::Learned => serde_json::to_value(
            get_learned_items(source)
                .await
                .context("failed to fetch learned items")?,
        )?,
        Section::Blog => serde_json::to_value(
            get_blog_posts(source)
                .await
                .context("failed to fetch blog posts")?,
        )?,
        Section::Home => serde_json::to_value(home_page(source).await?)?,
    };
    Ok(value)
}

async fn home_page<S: ContentSource>(source: &S) -> anyhow::Result<HomePage> {
    let (profile, contact, featured_projects, tech_logos) = tokio::try_join!(
        get_profile(source),
        get_contact_info(source),
        get_featured_projects(source),
        get_tech_logos(source),
    )
    .context("failed to fetch home page content")?;

    Ok(HomePage {
        profile,
        contact,
        featured_projects,
        tech_logos,
    })
}
