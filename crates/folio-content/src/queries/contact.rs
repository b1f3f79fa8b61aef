//! Contact page details.

use folio_core::entities::ContactInfo;
use serde::Deserialize;

use super::{fetch_one, non_empty};
use crate::error::ContentError;
use crate::groq::{DocumentType, Query};
use crate::ContentSource;

#[derive(Deserialize)]
struct RawContact {
    email: Option<String>,
    location: Option<String>,
    linkedin: Option<String>,
    github: Option<String>,
}

/// `*[_type == "contact"][0] {email, location, linkedin, github}`
#[must_use]
pub fn contact_query() -> Query {
    Query::first(DocumentType::Contact).fields(&["email", "location", "linkedin", "github"])
}

/// Fetch the contact details, or `None` if they have not been created yet.
///
/// # Errors
///
/// Returns [`ContentError`] if the fetch fails or the document has an
/// unexpected shape.
pub async fn get_contact_info<S: ContentSource>(
    source: &S,
) -> Result<Option<ContactInfo>, ContentError> {
    let raw: Option<RawContact> = fetch_one(source, &contact_query()).await?;
    Ok(raw.map(map_contact))
}

fn map_contact(raw: RawContact) -> ContactInfo {
    ContactInfo {
        email: raw.email.unwrap_or_default(),
        location: raw.location.unwrap_or_default(),
        linkedin: non_empty(raw.linkedin),
        github: non_empty(raw.github),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn maps_contact_with_socials() {
        let raw: RawContact = serde_json::from_str(
            r#"{
                "email": "hello@example.com",
                "location": "Lagos, Nigeria",
                "linkedin": "https://linkedin.com/in/hant",
                "github": "https://github.com/hant"
            }"#,
        )
        .unwrap();
        let contact = map_contact(raw);
        assert_eq!(contact.email, "hello@example.com");
        assert_eq!(contact.location, "Lagos, Nigeria");
        assert_eq!(contact.github.as_deref(), Some("https://github.com/hant"));
    }

    #[test]
    fn blank_socials_are_absent() {
        let raw: RawContact =
            serde_json::from_str(r#"{"email": "a@b.c", "location": "", "linkedin": "", "github": null}"#)
                .unwrap();
        let contact = map_contact(raw);
        assert!(contact.linkedin.is_none());
        assert!(contact.github.is_none());
    }
}
