use anyhow::Context;
use folio_config::FolioConfig;
use folio_content::ContentClient;

use crate::bootstrap;
use crate::cli::{Commands, GlobalFlags};
use crate::commands::content::{self, Section};
use crate::commands::{image_url, schema};

/// Route a parsed command to its handler.
///
/// Content commands read from `--fixture` when given, otherwise from the
/// configured Sanity project.
pub async fn dispatch(
    command: Commands,
    config: &FolioConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let format = flags.output_format(&config.general);

    let section = match command {
        Commands::Profile => Section::Profile,
        Commands::Contact => Section::Contact,
        Commands::Projects(args) => Section::Projects {
            featured: args.featured,
        },
        Commands::Skills => Section::Skills,
        Commands::Learned => Section::Learned,
        Commands::Blog => Section::Blog,
        Commands::Home => Section::Home,
        Commands::ImageUrl(args) => return image_url::handle(&args, &config.sanity, format),
        Commands::Schema(args) => return schema::handle(&args, format),
    };

    if let Some(path) = &flags.fixture {
        let store = bootstrap::open_fixture(path, &config.sanity)?;
        return content::handle(section, &store, format).await;
    }

    let client =
        ContentClient::new(&config.sanity).context("failed to create Sanity content client")?;
    content::handle(section, &client, format).await
}
