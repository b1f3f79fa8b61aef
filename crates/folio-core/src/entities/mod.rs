//! View-model structs for every content category the site renders.
//!
//! Each struct is built by the mapping layer from one projected store
//! document. Optional content is `None`, optional lists are empty, and every
//! URL field already points at a loadable asset.

mod blog;
mod contact;
mod learned;
mod profile;
mod project;
mod tech_logo;

pub use blog::BlogPost;
pub use contact::ContactInfo;
pub use learned::LearnedItem;
pub use profile::Profile;
pub use project::Project;
pub use tech_logo::TechLogo;
