// src/types.rs
//! Record shapes shared across the compiler.
//!
//! Entities and pages overlap loosely (both are addressable, both may carry a
//! numeric id) but diverge everywhere else, so they are modeled as a tagged
//! union with a minimal shared surface (`Record`) rather than one struct with
//! a pile of options.

use serde::{Deserialize, Serialize};

/// Discriminated record kind. Open set: unknown tags survive a round trip
/// through `Other` instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Kind {
    Risk,
    Organization,
    Person,
    Policy,
    Concept,
    /// A page with no backing entity.
    Page,
    Other(String),
}

impl From<String> for Kind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "risk" => Kind::Risk,
            "organization" => Kind::Organization,
            "person" => Kind::Person,
            "policy" => Kind::Policy,
            "concept" => Kind::Concept,
            "page" => Kind::Page,
            _ => Kind::Other(s),
        }
    }
}

impl From<Kind> for String {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Risk => "risk".to_string(),
            Kind::Organization => "organization".to_string(),
            Kind::Person => "person".to_string(),
            Kind::Policy => "policy".to_string(),
            Kind::Concept => "concept".to_string(),
            Kind::Page => "page".to_string(),
            Kind::Other(s) => s,
        }
    }
}

/// An explicit relation asserted by an entity's author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclaredRelation {
    /// Target slug.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

/// A typed knowledge-base record with identity independent of any page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub slug: String,
    /// Opaque stable id (`E<n>`). Assigned once, never changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Kind,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub declared_relations: Vec<DeclaredRelation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// A publishable document. Usually backs an entity, but either may exist alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Editorial rating 0-100; absent means unrated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Raw body, consumed only by the in-body reference collector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Shared minimal view over entities and pages, so signal collectors never
/// need to inspect the variant.
#[derive(Debug, Clone, Copy)]
pub enum Record<'a> {
    Entity(&'a Entity),
    Page(&'a Page),
}

impl<'a> Record<'a> {
    #[must_use]
    pub fn slug(&self) -> &'a str {
        match self {
            Record::Entity(e) => &e.slug,
            Record::Page(p) => &p.slug,
        }
    }

    #[must_use]
    pub fn numeric_id(&self) -> Option<&'a str> {
        match self {
            Record::Entity(e) => e.numeric_id.as_deref(),
            Record::Page(p) => p.numeric_id.as_deref(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Record::Entity(e) => e.kind.clone(),
            Record::Page(_) => Kind::Page,
        }
    }
}

/// One entry in a record's related-items list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedNeighbor {
    /// Numeric id of the neighbor (`E<n>`).
    pub id: String,
    pub kind: Kind,
    pub title: String,
    /// Boosted score, rounded to two decimals.
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One backlink entry: who points at this record, and how.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Backlink {
    pub source_id: String,
    pub kind: Kind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_label: Option<String>,
}
