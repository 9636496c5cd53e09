//! Sitemap generation.
//!
//! Lists the home page, the projects listing and every project detail page
//! for search engine indexing.

use crate::entities::project::Project;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const LASTMOD_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// Single URL entry in the sitemap
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub loc: String,
    /// `YYYY-MM-DD`, omitted when the source date does not parse
    pub lastmod: Option<String>,
    pub changefreq: ChangeFrequency,
    pub priority: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sitemap {
    pub urls: Vec<UrlEntry>,
}

impl Sitemap {
    /// `base_url` must not carry a trailing slash.
    pub fn from_catalog(base_url: &str, projects: &[Project]) -> Self {
        let mut urls = vec![
            UrlEntry {
                loc: format!("{base_url}/"),
                lastmod: None,
                changefreq: ChangeFrequency::Monthly,
                priority: 1.0,
            },
            UrlEntry {
                loc: format!("{base_url}/projects"),
                lastmod: None,
                changefreq: ChangeFrequency::Weekly,
                priority: 0.8,
            },
        ];

        urls.extend(projects.iter().map(|project| UrlEntry {
            loc: format!("{base_url}{}", project.path()),
            lastmod: project
                .updated_on()
                .map(|date| date.format(LASTMOD_FORMAT).to_string()),
            changefreq: ChangeFrequency::Monthly,
            priority: 0.6,
        }));

        Self { urls }
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str(&format!("    <changefreq>{}</changefreq>\n", entry.changefreq.as_str()));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_projects;

    const BASE: &str = "https://showcase.republicofgaming.xyz";

    #[test]
    fn escapes_xml_special_chars() {
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<it's>"), "&lt;it&apos;s&gt;");
    }

    #[test]
    fn static_pages_come_first() {
        let sitemap = Sitemap::from_catalog(BASE, &[]);
        let locs: Vec<&str> = sitemap.urls.iter().map(|u| u.loc.as_str()).collect();
        assert_eq!(locs, [format!("{BASE}/"), format!("{BASE}/projects")]);
        assert_eq!(sitemap.urls[1].changefreq, ChangeFrequency::Weekly);
    }

    #[test]
    fn project_pages_carry_normalized_lastmod() {
        let projects = seed_projects();
        let sitemap = Sitemap::from_catalog(BASE, &projects);

        assert_eq!(sitemap.urls.len(), 2 + projects.len());
        let sam = sitemap.urls.iter().find(|u| u.loc.ends_with("/projects/sam")).unwrap();
        assert_eq!(sam.lastmod.as_deref(), Some("2025-03-22"));
        assert_eq!(sam.priority, 0.6);
    }

    #[test]
    fn xml_structure() {
        let xml = Sitemap::from_catalog(BASE, &seed_projects()).into_xml();
        let lines: Vec<&str> = xml.lines().collect();

        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().map(|l| l.trim()), Some("</urlset>"));
        assert_eq!(xml.matches("<url>").count(), 5);
        assert!(xml.contains("<loc>https://showcase.republicofgaming.xyz/projects/republic-of-gaming</loc>"));
        assert!(xml.contains("<lastmod>2025-04-03</lastmod>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(!xml.contains("//projects"));
    }
}
