use clap::{Args, Subcommand};
use folio_content::{Fit, ImageFormat};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Hero section: headline, subheadline, description and image.
    Profile,
    /// Contact details.
    Contact,
    /// Project cards, newest first.
    Projects(ProjectsArgs),
    /// Technology logos.
    Skills,
    /// "Things I learned" entries, newest first.
    Learned,
    /// Blog posts, newest first.
    Blog,
    /// Everything the home page renders, fetched concurrently.
    Home,
    /// Build a CDN image URL from an asset reference or URL.
    ImageUrl(ImageUrlArgs),
    /// Print the JSON Schema of a view model.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProjectsArgs {
    /// Only projects flagged as featured.
    #[arg(long)]
    pub featured: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ImageUrlArgs {
    /// Asset reference (`image-<id>-<W>x<H>-<ext>`, `file-<id>-<ext>`) or URL.
    pub source: String,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Output format: jpg, pjpg, png, webp
    #[arg(long = "image-format")]
    pub image_format: Option<ImageFormat>,

    /// Quality 0-100.
    #[arg(long)]
    pub quality: Option<u8>,

    /// Resize mode: clip, crop, fill, fillmax, max, scale, min
    #[arg(long)]
    pub fit: Option<Fit>,

    /// Let the CDN choose the best format.
    #[arg(long)]
    pub auto_format: bool,

    /// Device pixel ratio (1-3).
    #[arg(long)]
    pub dpr: Option<u8>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// View model name: profile, contact, project, learned, blog, tech-logo
    pub entity: String,
}
