pub mod metadata;
pub mod projects;
pub mod sitemap;
