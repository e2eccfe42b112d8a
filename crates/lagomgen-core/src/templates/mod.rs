//! Template rendering and tree copying
//!
//! This module provides:
//! - The [`TemplateIo`] filesystem seam with its disk implementation
//! - The mustache-style [`Renderer`] for content and path placeholders
//! - The tree copier that materializes a rendered project

pub mod copier;
pub mod io;
pub mod render;

pub use copier::{copy_tree, is_fragment_file, write_one_file, CopyReport};
pub use io::{DiskIo, TemplateIo, TreeEntry};
pub use render::Renderer;
