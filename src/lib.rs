// ============================================================================
// WANDERLUST - travel booking storefront (Yew + WebAssembly)
// ============================================================================
// - Views: one per route, render only
// - Hooks: remote data, paging, lookups, session context
// - Services: backend calls and the flows built on them
// - Models: backend payloads
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;
pub mod utils;
pub mod views;

pub use app::App;
