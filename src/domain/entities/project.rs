use std::{convert::Infallible, fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::seo::SeoBundle;

// ───── Constants ──────────────────────────────────────────────────────
/// Catalog dates are authored as `YYYY-M-D`; chrono accepts one or two digits per field.
const DATE_FORMAT: &str = "%Y-%m-%d";

// ───── Status ─────────────────────────────────────────────────────────

/// Lifecycle of a project as shown on the showcase.
///
/// Anything outside the three known values is kept verbatim in
/// `Unrecognized` and rendered as-is instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
    Unrecognized(String),
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Planned => "planned",
            ProjectStatus::Unrecognized(raw) => raw,
        }
    }

    /// Human readable badge text.
    pub fn label(&self) -> &str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planned => "Planned",
            ProjectStatus::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ProjectStatus::Unrecognized(_))
    }
}

impl From<&str> for ProjectStatus {
    fn from(value: &str) -> Self {
        match value {
            "completed" => ProjectStatus::Completed,
            "in-progress" => ProjectStatus::InProgress,
            "planned" => ProjectStatus::Planned,
            other => ProjectStatus::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "completed" | "in-progress" | "planned" => ProjectStatus::from(value.as_str()),
            _ => ProjectStatus::Unrecognized(value),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ProjectStatus::from(s))
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ───── Domain Model ───────────────────────────────────────────────────

/// Outbound links of a project. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl ProjectLinks {
    pub fn is_empty(&self) -> bool {
        self.github.is_none()
            && self.live.is_none()
            && self.demo.is_none()
            && self.discord.is_none()
            && self.documentation.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub status: ProjectStatus,
    pub images: Vec<String>,
    pub thumbnail_image: String,
    pub links: ProjectLinks,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
    pub date_created: String,
    pub date_updated: String,
}

impl Project {
    /// Site-relative path of the detail page.
    pub fn path(&self) -> String {
        format!("/projects/{}", self.id)
    }

    /// Full description, or the short one when no long form was written.
    pub fn long_description(&self) -> &str {
        if self.full_description.is_empty() {
            &self.description
        } else {
            &self.full_description
        }
    }

    pub fn created_on(&self) -> Option<NaiveDate> {
        parse_catalog_date(&self.date_created)
    }

    pub fn updated_on(&self) -> Option<NaiveDate> {
        parse_catalog_date(&self.date_updated)
    }

    /// `false` when either date is unparseable or the update predates creation.
    pub fn has_chronological_dates(&self) -> bool {
        match (self.created_on(), self.updated_on()) {
            (Some(created), Some(updated)) => updated >= created,
            _ => false,
        }
    }

    pub fn to_summary(&self) -> ProjectSummary<'_> {
        ProjectSummary {
            id: &self.id,
            title: &self.title,
            description: &self.description,
            category: &self.category,
            status: &self.status,
            status_label: self.status.label(),
            technologies: &self.technologies,
            thumbnail_image: &self.thumbnail_image,
            path: self.path(),
        }
    }
}

pub fn parse_catalog_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

// ───── Input Models ──────────────────────────────────────────────────

/// Listing filters taken from the query string. Both set means both must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectFilter {
    pub category: Option<String>,
    pub status: Option<ProjectStatus>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub status: &'a ProjectStatus,
    pub status_label: &'a str,
    pub technologies: &'a [String],
    pub thumbnail_image: &'a str,
    pub path: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub completed: usize,
    pub in_progress: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount<'a> {
    pub name: &'a str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListResponse<'a> {
    pub projects: Vec<ProjectSummary<'a>>,
    pub count: usize,
    pub stats: CatalogStats,
    pub seo: SeoBundle,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetailResponse<'a> {
    pub project: &'a Project,
    pub status_label: &'a str,
    pub seo: SeoBundle,
}
