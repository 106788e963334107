//! `invoicedesk-app` — application facade.
//!
//! Owns one instance of each store and exposes the operation surface the
//! presentation layer calls. Constructed explicitly at process start and
//! passed by handle; there is no global singleton, so every test can build
//! its own isolated instance.

pub mod app;

pub use app::App;
