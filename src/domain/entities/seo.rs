use std::{borrow::Cow, collections::BTreeMap};

use serde::{Deserialize, Serialize};

use crate::entities::project::{Project, ProjectStatus};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

// ───── Inputs ────────────────────────────────────────────────────────

/// Which structured-data document a page describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    #[default]
    Website,
    Article,
    Profile,
}

impl PageType {
    pub fn schema_type(self) -> &'static str {
        match self {
            PageType::Website => "WebSite",
            PageType::Article => "CreativeWork",
            PageType::Profile => "ProfilePage",
        }
    }
}

/// Everything a page may pass to the deriver. Unset fields fall back to site defaults.
#[derive(Debug, Clone, Default)]
pub struct SeoInput<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub url: Option<Cow<'a, str>>,
    pub image: Option<&'a str>,
    pub page_type: PageType,
    pub projects: Option<&'a [&'a Project]>,
    pub project: Option<&'a Project>,
    pub keywords: Option<&'a [String]>,
    pub author: Option<&'a str>,
    pub published_time: Option<&'a str>,
    pub modified_time: Option<&'a str>,
}

// ───── Page Metadata ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<AuthorName>,
    pub creator: String,
    pub publisher: String,
    pub robots: &'static str,
    pub metadata_base: String,
    pub alternates: Alternates,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub other: BTreeMap<&'static str, String>,
}

impl PageMetadata {
    pub fn canonical(&self) -> &str {
        &self.alternates.canonical
    }

    /// The social-preview image shared by Open Graph and Twitter.
    pub fn preview_image(&self) -> Option<&str> {
        self.open_graph.images.first().map(|image| image.url.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternates {
    pub canonical: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: String,
    pub description: String,
    pub url: String,
    pub images: Vec<OpenGraphImage>,
    pub site_name: String,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraphImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub creator: String,
    pub site: String,
}

// ───── Structured Data (schema.org JSON-LD) ──────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

impl PersonRef {
    pub fn new(name: impl Into<String>) -> Self {
        PersonRef { kind: "Person", name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteAuthor {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub job_title: String,
    pub url: String,
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseDocument {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    pub description: String,
    pub author: SiteAuthor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemListEntry {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    pub description: String,
    pub url: String,
    pub creator: PersonRef,
    pub genre: String,
    pub keywords: String,
    pub creative_work_status: ProjectStatus,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemList {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub number_of_items: usize,
    pub item_list_element: Vec<ItemListEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url_template: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub target: EntryPoint,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSiteDocument {
    #[serde(flatten)]
    pub base: BaseDocument,
    pub main_entity: ItemList,
    pub potential_action: SearchAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareApplication {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub application_category: String,
    pub operating_system: &'static str,
    pub author: PersonRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkExample {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeWorkDocument {
    #[serde(flatten)]
    pub base: BaseDocument,
    pub headline: String,
    pub genre: String,
    pub keywords: String,
    pub creative_work_status: ProjectStatus,
    pub thumbnail_url: String,
    pub image: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    pub main_entity: SoftwareApplication,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_example: Option<WorkExample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_repository: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub programming_language: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub runtime_platform: Vec<String>,
}

/// Machine-readable description of a page, shaped by its [`PageType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StructuredData {
    WebSite(WebSiteDocument),
    CreativeWork(CreativeWorkDocument),
    Base(BaseDocument),
}

impl StructuredData {
    pub fn base(&self) -> &BaseDocument {
        match self {
            StructuredData::WebSite(doc) => &doc.base,
            StructuredData::CreativeWork(doc) => &doc.base,
            StructuredData::Base(doc) => doc,
        }
    }

    pub fn schema_type(&self) -> &'static str {
        self.base().kind
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Renders the document as an embeddable `<script type="application/ld+json">` element.
    pub fn to_script_tag(&self) -> serde_json::Result<String> {
        Ok(json_ld_script(&self.to_json()?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedEntity {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupation {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub occupation_location: NamedEntity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub job_title: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub same_as: Vec<String>,
    pub knows_about: Vec<String>,
    pub alumni_of: NamedEntity,
    pub has_occupation: Occupation,
}

/// Everything a page needs for its `<head>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoBundle {
    pub metadata: PageMetadata,
    pub structured_data: StructuredData,
    pub person: PersonSchema,
}

/// `</` is escaped so the payload can never close the surrounding element.
pub fn json_ld_script(json: &str) -> String {
    format!(
        r#"<script type="application/ld+json">{}</script>"#,
        json.replace("</", "<\\/")
    )
}
