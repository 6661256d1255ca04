pub mod api;
pub mod catalog;
pub mod database_ops;
pub mod dates;
pub mod domain;
pub mod i18n;
pub mod normalization;
pub mod seo;
pub mod sitemap;

pub mod util {
    pub mod env;
    pub mod tracing;
}
