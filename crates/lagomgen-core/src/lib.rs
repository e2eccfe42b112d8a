//! Lagomgen Core - Library for scaffolding Lagom projects from templates
//!
//! This library materializes a template directory into a destination project,
//! rendering every file's content - and every file or directory name - through
//! a mustache-style templating engine fed by a [`TemplateContext`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure helpers (`ident`, `context`) and the
//!   template tree copier (`templates`)
//! - **Layer 2: Filesystem Seam** - The [`TemplateIo`] trait decouples the
//!   copier from the real filesystem so it can be tested against a fake
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use lagomgen_core::{copy_tree, DiskIo, Renderer, TemplateContext};
//!
//! let context = TemplateContext::new()
//!     .with("name", "hello")
//!     .with("organization", "com.example");
//!
//! let renderer = Renderer::new();
//! let report = copy_tree(&DiskIo, &renderer, &source, &dest, &context).await?;
//! ```

pub mod context;
pub mod ident;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use context::{ContextError, TemplateContext};
pub use templates::{
    copy_tree, write_one_file, CopyReport, DiskIo, Renderer, TemplateIo, TreeEntry,
};

#[cfg(feature = "tui")]
pub use tui::run;
