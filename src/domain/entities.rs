pub mod project;
pub mod seo;
