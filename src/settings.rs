use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr};
use url::Url;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl AppEnvironment {
    /// Reads `APP_ENV`, defaulting to development when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))
    }
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

/// Identity of the showcase site used by every derived title, URL and schema document.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, rename_all = "snake_case")]
pub struct SiteConfig {
    pub base_url: String,
    pub title: String,
    pub title_suffix: String,
    pub description: String,
    pub image: String,
    pub author: String,
    pub keywords: Vec<String>,
    pub site_name: String,
    pub locale: String,
    pub twitter_handle: String,
    pub theme_color: String,
    pub job_title: String,
    pub author_description: String,
    pub same_as: Vec<String>,
    pub knows_about: Vec<String>,
    pub alumni_of: String,
    pub work_location: String,
    pub listing_description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: "https://showcase.republicofgaming.xyz".into(),
            // Site-relative so it follows an overridden base URL.
            image: "/img/projects/rog/site.png".into(),
            title: "Kaine's Project Showcase - Full Stack Developer Portfolio".into(),
            title_suffix: " | Kaine's Showcase".into(),
            description: "Developer portfolio showcasing creative projects and digital experiences by Kaine. \
                Explore web development, game modifications, and innovative digital solutions."
                .into(),
            author: "Kaine".into(),
            keywords: strings(&[
                "full stack developer",
                "web development",
                "portfolio",
                "react",
                "next.js",
                "typescript",
                "game development",
            ]),
            site_name: "Kaine's Project Showcase".into(),
            locale: "en_US".into(),
            twitter_handle: "@xdkaine".into(),
            theme_color: "#000000".into(),
            job_title: "Full Stack Developer".into(),
            author_description: "Passionate full stack developer creating innovative web applications \
                and digital experiences"
                .into(),
            same_as: strings(&["https://github.com/xdkaine"]),
            knows_about: strings(&[
                "JavaScript",
                "TypeScript",
                "React",
                "Next.js",
                "Node.js",
                "Web Development",
                "Full Stack Development",
                "Game Development",
            ]),
            alumni_of: "Self-taught Developer".into(),
            work_location: "Remote".into(),
            listing_description: "Explore my collection of creative projects and digital experiences.".into(),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default = "default_featured_count")]
    pub featured_count: usize,

    #[serde(default)]
    pub site: SiteConfig,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Showcase-API".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_featured_count() -> usize {
    3
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let env_name = AppEnvironment::from_env()?;

        // `__` nests (APP_SITE__BASE_URL -> site.base_url) so snake_case keys survive.
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .with_list_parse_key("site.keywords")
                    .with_list_parse_key("site.same_as")
                    .with_list_parse_key("site.knows_about"),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        match Url::parse(&self.site.base_url) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
            Ok(_) => errors.push("SITE_BASE_URL must start with http:// or https://".into()),
            Err(e) => errors.push(format!("SITE_BASE_URL is invalid: {e}")),
        }
        if self.site.base_url.ends_with('/') {
            errors.push("SITE_BASE_URL must not end with '/'".into());
        }
        if self.featured_count == 0 {
            errors.push("FEATURED_COUNT must be at least 1".into());
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production".into());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}
