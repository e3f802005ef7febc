//! UI layer for the portal: app shell, page chrome, views and theme.

pub mod app;
pub mod chrome;
pub mod theme;
pub mod views;

pub use app::PortalApp;
