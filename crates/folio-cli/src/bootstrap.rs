use std::path::Path;

use anyhow::Context;
use folio_config::{FolioConfig, SanityConfig};
use folio_content::{AssetResolver, MemoryStore};

pub fn load_config() -> anyhow::Result<FolioConfig> {
    FolioConfig::load_with_dotenv().context("failed to load folio configuration")
}

/// Open a JSON document dump as an in-memory content source.
pub fn open_fixture(path: &Path, sanity: &SanityConfig) -> anyhow::Result<MemoryStore> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture {}", path.display()))?;
    let store = MemoryStore::from_json(AssetResolver::from_config(sanity), &text)
        .with_context(|| format!("invalid fixture {}", path.display()))?;
    tracing::debug!(path = %path.display(), documents = store.len(), "loaded fixture");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::commands::content::{Section, fetch};

    fn fixture_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/site.json")
    }

    fn sanity() -> SanityConfig {
        SanityConfig {
            project_id: "w9fhrrqx".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn sample_fixture_serves_every_section() {
        let store = open_fixture(&fixture_path(), &sanity()).unwrap();

        let profile = fetch(Section::Profile, &store).await.unwrap();
        assert_eq!(
            profile["imageUrl"],
            json!("https://cdn.sanity.io/images/w9fhrrqx/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg")
        );

        let featured = fetch(Section::Projects { featured: true }, &store).await.unwrap();
        assert_eq!(featured.as_array().map(Vec::len), Some(1));

        let all = fetch(Section::Projects { featured: false }, &store).await.unwrap();
        assert_eq!(all[0]["title"], "Folio");
        assert_eq!(all[1]["github"], "#");

        let blog = fetch(Section::Blog, &store).await.unwrap();
        assert_eq!(blog[0]["content"][0]["children"][0]["text"], "First post.");

        let learned = fetch(Section::Learned, &store).await.unwrap();
        assert_eq!(learned[0]["date"], "2024-02-10");
    }

    #[test]
    fn missing_fixture_names_the_path() {
        let err = open_fixture(Path::new("/nonexistent/site.json"), &sanity()).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/site.json"));
    }
}
