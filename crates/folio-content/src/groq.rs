//! Typed GROQ query construction.
//!
//! Every query the site issues is a type filter, optional boolean filters,
//! an optional ordering, an optional `[0]` slice and a projection. [`Query`]
//! captures exactly that, so queries can only target the document types in
//! [`DocumentType`] and can be rendered to GROQ text or evaluated in memory
//! by [`crate::memory::MemoryStore`].

use std::fmt;

/// Document types defined by the site's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    Profile,
    Contact,
    Project,
    Learned,
    Blog,
    TechLogo,
}

impl DocumentType {
    pub const ALL: [Self; 6] = [
        Self::Profile,
        Self::Contact,
        Self::Project,
        Self::Learned,
        Self::Blog,
        Self::TechLogo,
    ];

    /// The `_type` value stored on documents of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Contact => "contact",
            Self::Project => "project",
            Self::Learned => "learned",
            Self::Blog => "blog",
            Self::TechLogo => "techLogo",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A boolean filter on a document attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `field == true`
    IsTrue(&'static str),
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IsTrue(field) => write!(f, "{field} == true"),
        }
    }
}

/// Server-side ordering on one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub field: &'static str,
    pub descending: bool,
}

/// One entry of a projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// A plain attribute, kept under its own name.
    Field(&'static str),
    /// `"alias": field.asset->url`
    AssetUrl {
        alias: &'static str,
        field: &'static str,
    },
    /// `"alias": field[].asset->url`
    AssetUrls {
        alias: &'static str,
        field: &'static str,
    },
}

impl Projection {
    /// Key under which the projected value appears in the result.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Field(name) => name,
            Self::AssetUrl { alias, .. } | Self::AssetUrls { alias, .. } => alias,
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::AssetUrl { alias, field } => write!(f, "\"{alias}\": {field}.asset->url"),
            Self::AssetUrls { alias, field } => write!(f, "\"{alias}\": {field}[].asset->url"),
        }
    }
}

/// A read query over one document type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    document_type: DocumentType,
    filters: Vec<Filter>,
    order: Option<Order>,
    first_only: bool,
    projection: Vec<Projection>,
}

impl Query {
    /// Every document of `document_type`.
    #[must_use]
    pub fn all(document_type: DocumentType) -> Self {
        Self {
            document_type,
            filters: Vec::new(),
            order: None,
            first_only: false,
            projection: Vec::new(),
        }
    }

    /// The first matching document of `document_type`, or null.
    #[must_use]
    pub fn first(document_type: DocumentType) -> Self {
        Self {
            first_only: true,
            ..Self::all(document_type)
        }
    }

    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn order_desc(mut self, field: &'static str) -> Self {
        self.order = Some(Order {
            field,
            descending: true,
        });
        self
    }

    #[must_use]
    pub fn order_asc(mut self, field: &'static str) -> Self {
        self.order = Some(Order {
            field,
            descending: false,
        });
        self
    }

    #[must_use]
    pub fn field(mut self, name: &'static str) -> Self {
        self.projection.push(Projection::Field(name));
        self
    }

    #[must_use]
    pub fn fields(mut self, names: &[&'static str]) -> Self {
        self.projection
            .extend(names.iter().copied().map(Projection::Field));
        self
    }

    /// Project `field.asset->url` as `alias`.
    #[must_use]
    pub fn asset_url(mut self, alias: &'static str, field: &'static str) -> Self {
        self.projection.push(Projection::AssetUrl { alias, field });
        self
    }

    /// Project `field[].asset->url` as `alias`.
    #[must_use]
    pub fn asset_urls(mut self, alias: &'static str, field: &'static str) -> Self {
        self.projection.push(Projection::AssetUrls { alias, field });
        self
    }

    #[must_use]
    pub const fn document_type(&self) -> DocumentType {
        self.document_type
    }

    #[must_use]
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    #[must_use]
    pub const fn order(&self) -> Option<Order> {
        self.order
    }

    /// Whether the query yields a single document (or null) rather than a list.
    #[must_use]
    pub const fn is_first_only(&self) -> bool {
        self.first_only
    }

    #[must_use]
    pub fn projection(&self) -> &[Projection] {
        &self.projection
    }

    /// Render as GROQ text.
    #[must_use]
    pub fn to_groq(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*[_type == \"{}\"", self.document_type)?;
        for filter in &self.filters {
            write!(f, " && {filter}")?;
        }
        f.write_str("]")?;

        if let Some(order) = self.order {
            let direction = if order.descending { "desc" } else { "asc" };
            write!(f, " | order({} {direction})", order.field)?;
        }
        if self.first_only {
            f.write_str("[0]")?;
        }

        if !self.projection.is_empty() {
            f.write_str(" {")?;
            for (idx, entry) in self.projection.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{entry}")?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}
