use std::{borrow::Cow, collections::BTreeMap};

use crate::{
    entities::{
        project::Project,
        seo::{
            Alternates, AuthorName, BaseDocument, CreativeWorkDocument, EntryPoint, ItemList,
            ItemListEntry, NamedEntity, Occupation, OpenGraph, OpenGraphImage, PageMetadata,
            PageType, PersonRef, PersonSchema, SearchAction, SeoBundle, SeoInput, SiteAuthor,
            SoftwareApplication, StructuredData, TwitterCard, WebSiteDocument, WorkExample,
            SCHEMA_CONTEXT,
        },
    },
    settings::SiteConfig,
};

// ───── Constants ──────────────────────────────────────────────────────
/// Any value starting with this is treated as already absolute.
const ABSOLUTE_URL_PREFIX: &str = "http";
const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;
const ROBOTS: &str = "index, follow";
const FEATURED_LIST_NAME: &str = "Featured Projects";
const PROJECTS_PAGE_TITLE: &str = "Projects";
const PROJECTS_PATH: &str = "/projects";

const KNOWN_LANGUAGES: &[&str] = &[
    "JavaScript", "TypeScript", "Python", "Java", "C#", "C++", "PHP", "Ruby", "Go", "Rust",
];
const KNOWN_PLATFORMS: &[&str] = &[
    "Node.js", "React", "Next.js", "Vue.js", "Angular", "Express", "Django", "Flask",
];

/// Prefixes `base` onto `value` unless `value` already starts with `http`.
///
/// Protocol-relative (`//cdn...`) and non-http schemes are prefixed like any path.
pub fn resolve_url(base: &str, value: &str) -> String {
    if value.starts_with(ABSOLUTE_URL_PREFIX) {
        value.to_string()
    } else {
        format!("{base}{value}")
    }
}

/// Derives page metadata and schema.org documents from site defaults and projects.
///
/// Stateless: the same input always yields the same output.
#[derive(Debug, Clone)]
pub struct MetadataDeriver {
    site: SiteConfig,
}

impl MetadataDeriver {
    pub fn new(site: SiteConfig) -> Self {
        MetadataDeriver { site }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn resolve_url(&self, value: &str) -> String {
        resolve_url(&self.site.base_url, value)
    }

    /// An empty title counts as no title.
    pub fn site_title(&self, title: Option<&str>) -> String {
        match title {
            Some(title) if !title.is_empty() => format!("{}{}", title, self.site.title_suffix),
            _ => self.site.title.clone(),
        }
    }

    /// Page-level input for a project detail view.
    pub fn project_input(project: &Project) -> SeoInput<'_> {
        SeoInput {
            title: Some(&project.title),
            description: Some(project.long_description()),
            url: Some(Cow::Owned(project.path())),
            image: Some(&project.thumbnail_image),
            page_type: PageType::Article,
            project: Some(project),
            keywords: Some(&project.technologies),
            published_time: Some(&project.date_created),
            modified_time: Some(&project.date_updated),
            ..SeoInput::default()
        }
    }

    pub fn page_metadata(&self, input: &SeoInput<'_>) -> PageMetadata {
        let site = &self.site;
        let title = self.site_title(input.title);
        let description = input.description.unwrap_or(&site.description).to_string();
        let url = self.resolve_url(input.url.as_deref().unwrap_or(&site.base_url));
        let image = self.resolve_url(input.image.unwrap_or(&site.image));
        let author = input.author.unwrap_or(&site.author).to_string();
        let keywords = input.keywords.unwrap_or(&site.keywords).to_vec();

        let mut other = BTreeMap::new();
        other.insert("theme-color", site.theme_color.clone());
        other.insert("msapplication-TileColor", site.theme_color.clone());
        other.insert("format-detection", "telephone=no".to_string());

        PageMetadata {
            keywords,
            authors: vec![AuthorName { name: author.clone() }],
            creator: author.clone(),
            publisher: author,
            robots: ROBOTS,
            metadata_base: site.base_url.clone(),
            alternates: Alternates { canonical: url.clone() },
            open_graph: OpenGraph {
                kind: "website",
                title: title.clone(),
                description: description.clone(),
                url,
                images: vec![OpenGraphImage {
                    url: image.clone(),
                    width: OG_IMAGE_WIDTH,
                    height: OG_IMAGE_HEIGHT,
                    alt: format!("{} - {}", title, description),
                }],
                site_name: site.site_name.clone(),
                locale: site.locale.clone(),
                published_time: input.published_time.map(str::to_string),
                modified_time: input.modified_time.map(str::to_string),
            },
            twitter: TwitterCard {
                card: "summary_large_image",
                title: title.clone(),
                description: description.clone(),
                images: vec![image],
                creator: site.twitter_handle.clone(),
                site: site.twitter_handle.clone(),
            },
            other,
            title,
            description,
        }
    }

    pub fn project_metadata(&self, project: &Project) -> PageMetadata {
        self.page_metadata(&Self::project_input(project))
    }

    /// Builds the JSON-LD document for a page.
    ///
    /// A `website` page with a project collection becomes an item list; an
    /// `article` page with a project becomes a creative work. Anything else
    /// yields only the base document.
    pub fn structured_data(&self, input: &SeoInput<'_>) -> StructuredData {
        let author = input.author.unwrap_or(&self.site.author);
        let base = BaseDocument {
            context: SCHEMA_CONTEXT,
            kind: input.page_type.schema_type(),
            name: self.site_title(input.title),
            url: self.resolve_url(input.url.as_deref().unwrap_or(&self.site.base_url)),
            description: input.description.unwrap_or(&self.site.description).to_string(),
            author: SiteAuthor {
                kind: "Person",
                name: author.to_string(),
                job_title: self.site.job_title.clone(),
                url: self.site.base_url.clone(),
                same_as: self.site.same_as.clone(),
            },
        };

        match (input.page_type, input.projects, input.project) {
            (PageType::Website, Some(projects), _) => {
                StructuredData::WebSite(self.website_document(base, projects, author))
            }
            (PageType::Article, _, Some(project)) => {
                StructuredData::CreativeWork(self.creative_work_document(base, project, input, author))
            }
            _ => StructuredData::Base(base),
        }
    }

    fn website_document(&self, base: BaseDocument, projects: &[&Project], author: &str) -> WebSiteDocument {
        let item_list_element = projects
            .iter()
            .enumerate()
            .map(|(index, project)| ItemListEntry {
                kind: "CreativeWork",
                position: index + 1,
                name: project.title.clone(),
                description: project.description.clone(),
                url: format!("{}{}", self.site.base_url, project.path()),
                creator: PersonRef::new(author),
                genre: project.category.clone(),
                keywords: project.technologies.join(", "),
                creative_work_status: project.status.clone(),
                image: self.resolve_url(&project.thumbnail_image),
            })
            .collect();

        WebSiteDocument {
            base: BaseDocument { kind: PageType::Website.schema_type(), ..base },
            main_entity: ItemList {
                kind: "ItemList",
                name: FEATURED_LIST_NAME.to_string(),
                number_of_items: projects.len(),
                item_list_element,
            },
            potential_action: SearchAction {
                kind: "SearchAction",
                target: EntryPoint {
                    kind: "EntryPoint",
                    url_template: format!(
                        "{}{}?search={{search_term_string}}",
                        self.site.base_url, PROJECTS_PATH
                    ),
                },
                query_input: "required name=search_term_string",
            },
        }
    }

    fn creative_work_document(
        &self,
        base: BaseDocument,
        project: &Project,
        input: &SeoInput<'_>,
        author: &str,
    ) -> CreativeWorkDocument {
        let date_published = input.published_time.unwrap_or(&project.date_created);
        let date_modified = input.modified_time.unwrap_or(&project.date_updated);

        CreativeWorkDocument {
            base: BaseDocument { kind: PageType::Article.schema_type(), ..base },
            headline: project.title.clone(),
            genre: project.category.clone(),
            keywords: project.technologies.join(", "),
            creative_work_status: project.status.clone(),
            thumbnail_url: self.resolve_url(&project.thumbnail_image),
            image: project.images.iter().map(|image| self.resolve_url(image)).collect(),
            date_published: non_empty(date_published),
            date_modified: non_empty(date_modified),
            main_entity: SoftwareApplication {
                kind: "SoftwareApplication",
                name: project.title.clone(),
                description: project.long_description().to_string(),
                application_category: project.category.clone(),
                operating_system: "Web Browser",
                author: PersonRef::new(author),
            },
            work_example: project.links.live.as_ref().map(|live| WorkExample {
                kind: "WebSite",
                url: live.clone(),
            }),
            code_repository: project.links.github.clone(),
            programming_language: technologies_in(project, KNOWN_LANGUAGES),
            runtime_platform: technologies_in(project, KNOWN_PLATFORMS),
        }
    }

    pub fn project_structured_data(&self, project: &Project) -> StructuredData {
        self.structured_data(&Self::project_input(project))
    }

    pub fn person_schema(&self, image: Option<&str>) -> PersonSchema {
        let site = &self.site;

        PersonSchema {
            context: SCHEMA_CONTEXT,
            kind: "Person",
            name: site.author.clone(),
            job_title: site.job_title.clone(),
            description: site.author_description.clone(),
            url: site.base_url.clone(),
            image: self.resolve_url(image.unwrap_or(&site.image)),
            same_as: site.same_as.clone(),
            knows_about: site.knows_about.clone(),
            alumni_of: NamedEntity {
                kind: "EducationalOrganization",
                name: site.alumni_of.clone(),
            },
            has_occupation: Occupation {
                kind: "Occupation",
                name: site.job_title.clone(),
                occupation_location: NamedEntity {
                    kind: "Place",
                    name: site.work_location.clone(),
                },
            },
        }
    }

    pub fn bundle(&self, input: &SeoInput<'_>) -> SeoBundle {
        SeoBundle {
            metadata: self.page_metadata(input),
            structured_data: self.structured_data(input),
            person: self.person_schema(input.image),
        }
    }

    /// Home page: default title, item list over the featured projects.
    pub fn home_seo(&self, featured: &[&Project]) -> SeoBundle {
        self.bundle(&SeoInput {
            page_type: PageType::Website,
            projects: Some(featured),
            ..SeoInput::default()
        })
    }

    /// Projects listing page: item list over whatever the listing shows.
    pub fn catalog_seo(&self, projects: &[&Project]) -> SeoBundle {
        self.bundle(&SeoInput {
            title: Some(PROJECTS_PAGE_TITLE),
            description: Some(&self.site.listing_description),
            url: Some(Cow::Borrowed(PROJECTS_PATH)),
            page_type: PageType::Website,
            projects: Some(projects),
            ..SeoInput::default()
        })
    }

    pub fn project_seo(&self, project: &Project) -> SeoBundle {
        self.bundle(&Self::project_input(project))
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn technologies_in(project: &Project, known: &[&str]) -> Vec<String> {
    project
        .technologies
        .iter()
        .filter(|tech| known.contains(&tech.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::seed_projects, entities::project::{ProjectLinks, ProjectStatus}};

    const BASE: &str = "https://showcase.republicofgaming.xyz";

    fn deriver() -> MetadataDeriver {
        MetadataDeriver::new(SiteConfig::default())
    }

    fn sam() -> Project {
        seed_projects().into_iter().find(|p| p.id == "sam").unwrap()
    }

    #[test]
    fn resolve_url_prefixes_relative_values() {
        assert_eq!(resolve_url(BASE, "/img/projects/sam/1.png"), format!("{BASE}/img/projects/sam/1.png"));
        assert_eq!(resolve_url(BASE, ""), BASE);
    }

    #[test]
    fn resolve_url_passes_absolute_values_through() {
        assert_eq!(resolve_url(BASE, "https://cdn.example/a.png"), "https://cdn.example/a.png");
        assert_eq!(resolve_url(BASE, "http://cdn.example/a.png"), "http://cdn.example/a.png");
    }

    #[test]
    fn resolve_url_only_checks_the_http_marker() {
        assert_eq!(resolve_url(BASE, "//cdn.example/a.png"), format!("{BASE}//cdn.example/a.png"));
        assert_eq!(resolve_url(BASE, "ftp://files/a.png"), format!("{BASE}ftp://files/a.png"));
        assert_eq!(resolve_url(BASE, "httpdocs/a.png"), "httpdocs/a.png");
    }

    #[test]
    fn title_uses_suffix_or_default() {
        let deriver = deriver();
        assert_eq!(deriver.site_title(Some("SAM")), "SAM | Kaine's Showcase");
        assert_eq!(
            deriver.site_title(None),
            "Kaine's Project Showcase - Full Stack Developer Portfolio"
        );
    }

    #[test]
    fn default_image_follows_overridden_base_url() {
        let deriver = MetadataDeriver::new(SiteConfig {
            base_url: "https://portfolio.example".into(),
            ..SiteConfig::default()
        });

        let metadata = deriver.page_metadata(&SeoInput::default());
        assert_eq!(metadata.preview_image(), Some("https://portfolio.example/img/projects/rog/site.png"));
        assert_eq!(deriver.person_schema(None).image, "https://portfolio.example/img/projects/rog/site.png");
    }

    #[test]
    fn empty_title_falls_back_to_site_title() {
        let deriver = deriver();
        assert_eq!(deriver.site_title(Some("")), deriver.site().title);

        let input = SeoInput { title: Some(""), ..SeoInput::default() };
        assert_eq!(deriver.page_metadata(&input).title, SiteConfig::default().title);
    }

    #[test]
    fn default_page_metadata_uses_site_defaults() {
        let metadata = deriver().page_metadata(&SeoInput::default());
        let site = SiteConfig::default();

        assert_eq!(metadata.title, site.title);
        assert_eq!(metadata.canonical(), BASE);
        assert_eq!(metadata.preview_image(), Some(format!("{BASE}/img/projects/rog/site.png").as_str()));
        assert_eq!(metadata.keywords, site.keywords);
        assert_eq!(metadata.robots, "index, follow");
        assert!(metadata.open_graph.published_time.is_none());
    }

    #[test]
    fn project_metadata_resolves_relative_fields() {
        let project = sam();
        let metadata = deriver().project_metadata(&project);

        assert_eq!(metadata.title, "SAM - Server Administration Tool | Kaine's Showcase");
        assert_eq!(metadata.canonical(), format!("{BASE}/projects/sam"));
        assert_eq!(metadata.preview_image(), Some(format!("{BASE}/img/projects/sam/1.png").as_str()));
        assert_eq!(metadata.twitter.images, vec![format!("{BASE}/img/projects/sam/1.png")]);
        assert_eq!(metadata.keywords, vec!["Lua", "PHP", "MySQL"]);
        assert_eq!(metadata.description, project.full_description);
        assert_eq!(metadata.open_graph.modified_time.as_deref(), Some("2025-3-22"));
    }

    #[test]
    fn derivation_is_idempotent() {
        let deriver = deriver();
        let project = sam();
        assert_eq!(deriver.project_metadata(&project), deriver.project_metadata(&project));
        assert_eq!(deriver.project_seo(&project), deriver.project_seo(&project));
    }

    #[test]
    fn website_document_lists_projects_in_order() {
        let projects = seed_projects();
        let refs: Vec<&Project> = projects.iter().collect();
        let data = deriver().structured_data(&SeoInput {
            page_type: PageType::Website,
            projects: Some(&refs),
            ..SeoInput::default()
        });

        let StructuredData::WebSite(doc) = data else {
            panic!("expected WebSite document");
        };
        assert_eq!(doc.base.kind, "WebSite");
        assert_eq!(doc.main_entity.number_of_items, 3);
        let positions: Vec<usize> = doc.main_entity.item_list_element.iter().map(|e| e.position).collect();
        assert_eq!(positions, [1, 2, 3]);
        assert_eq!(doc.main_entity.item_list_element[1].url, format!("{BASE}/projects/sam"));
        assert_eq!(doc.main_entity.item_list_element[1].image, format!("{BASE}/img/projects/sam/1.png"));
        assert_eq!(doc.main_entity.item_list_element[1].keywords, "Lua, PHP, MySQL");
        assert_eq!(
            doc.potential_action.target.url_template,
            format!("{BASE}/projects?search={{search_term_string}}")
        );
    }

    #[test]
    fn article_document_describes_one_project() {
        let project = sam();
        let data = deriver().project_structured_data(&project);

        let StructuredData::CreativeWork(doc) = data else {
            panic!("expected CreativeWork document");
        };
        assert_eq!(doc.headline, project.title);
        assert_eq!(doc.genre, "Game Development");
        assert_eq!(doc.creative_work_status, ProjectStatus::Completed);
        assert_eq!(doc.date_published.as_deref(), Some("2023-11-11"));
        assert_eq!(doc.main_entity.kind, "SoftwareApplication");
        assert_eq!(doc.code_repository.as_deref(), Some("https://github.com/xdkaine"));
        assert_eq!(doc.work_example.unwrap().url, "https://sam.republicofgaming.xyz/v2");
        assert_eq!(doc.programming_language, vec!["PHP"]);
        assert!(doc.runtime_platform.is_empty());
        assert_eq!(doc.image.len(), 12);
    }

    #[test]
    fn article_without_links_omits_link_fields() {
        let mut project = sam();
        project.links = ProjectLinks::default();
        project.technologies = vec!["Lua".into()];

        let json = serde_json::to_value(deriver().project_structured_data(&project)).unwrap();
        let doc = json.as_object().unwrap();

        assert_eq!(doc["@type"], "CreativeWork");
        assert!(!doc.contains_key("workExample"));
        assert!(!doc.contains_key("codeRepository"));
        assert!(!doc.contains_key("programmingLanguage"));
        assert!(!doc.contains_key("runtimePlatform"));
        assert_eq!(doc["mainEntity"]["@type"], "SoftwareApplication");
    }

    #[test]
    fn mismatched_type_falls_back_to_base_document() {
        let deriver = deriver();

        let website_without_projects = deriver.structured_data(&SeoInput::default());
        assert!(matches!(website_without_projects, StructuredData::Base(_)));
        assert_eq!(website_without_projects.schema_type(), "WebSite");

        let article_without_project = deriver.structured_data(&SeoInput {
            page_type: PageType::Article,
            ..SeoInput::default()
        });
        assert!(matches!(article_without_project, StructuredData::Base(_)));

        let profile = deriver.structured_data(&SeoInput {
            page_type: PageType::Profile,
            ..SeoInput::default()
        });
        assert_eq!(profile.schema_type(), "ProfilePage");
    }

    #[test]
    fn serialized_documents_use_schema_keys() {
        let json = serde_json::to_value(deriver().home_seo(&[])).unwrap();
        let data = &json["structuredData"];

        assert_eq!(data["@context"], "https://schema.org");
        assert_eq!(data["@type"], "WebSite");
        assert_eq!(data["mainEntity"]["numberOfItems"], 0);
        assert_eq!(data["potentialAction"]["query-input"], "required name=search_term_string");
        assert_eq!(json["person"]["hasOccupation"]["occupationLocation"]["@type"], "Place");
    }

    #[test]
    fn script_tag_embeds_project_document() {
        let tag = deriver().project_structured_data(&sam()).to_script_tag().unwrap();
        assert!(tag.starts_with(r#"<script type="application/ld+json">{"@context":"https://schema.org""#));
        assert!(tag.contains(r#""headline":"SAM - Server Administration Tool""#));
    }

    #[test]
    fn person_schema_resolves_image() {
        let person = deriver().person_schema(Some("/img/me.png"));
        assert_eq!(person.image, format!("{BASE}/img/me.png"));
        assert_eq!(person.alumni_of.kind, "EducationalOrganization");
    }
}
