//! # dcmeta - Dublin Core meta tag settings
//!
//! A host-agnostic Rust library implementing the admin side of a Dublin Core
//! meta-tags plugin for content-management systems: one persisted settings
//! record controlling which of the fifteen Dublin Core elements get emitted
//! on pages, plus the sanitization, version gating, and admin-menu plumbing
//! around it.
//!
//! ## Features
//!
//! - **Settings Record**: per-element toggles, output format, rights URL,
//!   and per-content-type labels in a single wholesale-replaced record
//! - **Default Seeding**: idempotent first-run initialization that never
//!   overwrites user edits
//! - **Form Validation**: exact-sentinel checkbox coercion and markup
//!   stripping; never rejects a submission
//! - **Version Gate**: deactivates the plugin and produces a remediation
//!   page when the host platform is too old
//! - **Host Seam**: option store, content-type directory, and platform
//!   handle are traits the embedding host implements
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dcmeta::{AdminManager, ContentType, FormSubmission, PluginInfo};
//!
//! let plugin = PluginInfo::new("DC Meta Tags", "0.2.0", "dc-meta-tags/plugin", "4.5");
//! let manager = AdminManager::builder(plugin)
//!     .config_dir("~/.config/dcmeta")
//!     .content_types(vec![
//!         ContentType::public("post", "Posts"),
//!         ContentType::public("page", "Pages"),
//!     ])
//!     .build()
//!     .unwrap();
//!
//! // First run: seed the defaults (no-op afterwards)
//! manager.initialize_defaults().unwrap();
//!
//! // Form submission: coerce, sanitize, persist
//! let submission = FormSubmission::new()
//!     .field("elem_title", "1")
//!     .field("elem_creator", "1")
//!     .field("output_html", "xhtml");
//! manager.apply_submission(&submission).unwrap();
//! ```
//!
//! ## Embedding in a host
//!
//! The host admin framework constructs one [`AdminManager`] at startup with
//! its dependencies injected explicitly, then wires the manager's methods to
//! its own hook points:
//!
//! - on admin init: [`AdminManager::check_host_compatibility`] and
//!   [`AdminManager::initialize_defaults`]
//! - on admin menu build: mount [`AdminManager::settings_page`]
//! - on settings form post: [`AdminManager::validate`] (the host persists
//!   the returned record verbatim), or [`AdminManager::apply_submission`]
//! - while rendering the plugin list: [`AdminManager::settings_action_links`]
//!   per row
//!
//! Hosts with their own option table implement [`OptionStore`] and use
//! [`AdminManager::new`]; the bundled [`JsonFileStore`] covers standalone
//! use and [`MemoryStore`] covers tests.

// Core modules
pub mod compat;
mod error;
mod form;
mod host;
mod links;
mod manager;
mod menu;
pub mod sanitize;
pub mod settings;
pub mod store;

// Re-exports from core
pub use compat::IncompatibleHost;
pub use error::{Error, Result};
pub use form::{CHECKBOX_ON, FormSubmission};
pub use host::{ContentType, ContentTypeDirectory, PluginHost, PluginInfo, StaticContentTypes};
pub use links::ActionLink;
pub use manager::{AdminManager, AdminManagerBuilder, OPTION_KEY};
pub use menu::{REQUIRED_CAPABILITY, SETTINGS_PAGE_ID, SettingsPage};
pub use settings::{Element, MetaSettings, OutputFormat};
pub use store::{JsonFileStore, MemoryStore, OptionStore};
