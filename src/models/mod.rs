//! Data models owned by the web layer.
//!
//! Domain types (content, filters, form state) live in `folio-core`;
//! this module only holds browser-facing types such as [`AppRoute`].

mod route;

pub use route::AppRoute;
