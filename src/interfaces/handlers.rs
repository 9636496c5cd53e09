pub mod home;
pub mod projects;
pub mod sitemap;
pub mod system;
