//! # txtsearch Core Library
//!
//! This crate provides the listing, matching, and copying functionality for
//! the txtsearch tool. A search is a single sequential, read-only pass over
//! the files directly inside one directory.
//!
//! ## Architecture
//!
//! - **Types** (`types`): Search request and result
//! - **Lister** (`lister`): Flat, sorted directory listing
//! - **Matcher** (`matcher`): Line-by-line multi-word substring matching
//! - **Search** (`search`): Runs the matcher over every listed file
//! - **Copier** (`copier`): Output directory setup and file copying
//! - **Config** (`config`): Configuration management
//!
//! ## Example
//!
//! ```rust,ignore
//! use txtsearch_core::{copy_files, prepare_output_dir, search, OutputDirPolicy, SearchRequest};
//!
//! let request = SearchRequest::new("notes", vec!["todo".to_string()], false)?;
//! let result = search(&request)?;
//!
//! prepare_output_dir(Path::new("todo"), OutputDirPolicy::CreateNew)?;
//! copy_files(&result.matched_paths, Path::new("todo"))?;
//! ```

pub mod config;
pub mod copier;
pub mod error;
pub mod lister;
pub mod matcher;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use copier::{copy_files, prepare_output_dir, OutputDirPolicy};
pub use error::{Result, TxtSearchError};
pub use lister::list_files;
pub use matcher::LineMatcher;
pub use search::search;
pub use types::{SearchRequest, SearchResult};
