//! The Hojeza site: pages, chrome and the route table that ties them together.
//!
//! Everything here is content. Routing, navigation and menu behavior come
//! from [`hojeza_pages`]; this module only decides what each page shows.

pub mod chrome;
pub mod pages;
pub mod routes;
pub mod services;

pub use chrome::{COMPANY_CONTACT, CompanyContact, SiteFooter, SiteNavbar};
pub use routes::site_routes;
pub use services::{SERVICES, Service};
