//! PhotoShelf Core Library
//!
//! This crate provides the core business logic for PhotoShelf, a mobile
//! photo-album application. It is designed to be frontend-agnostic: the
//! UI shell (screens, dialogs, image decoding, file pickers) talks to the
//! core through plain data only — album names, photo locators, and tag
//! category/value pairs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: The User → Album → Photo → Tag aggregate
//! - `store`: Whole-aggregate JSON snapshot persistence (UserStore)
//! - `services`: Library session (mutations) and the tag search engine
//! - `paths`: Path provider abstraction (PathProvider trait)
//! - `resolver`: Photo locator validation (ResourceResolver trait)
//! - `utils`: Error handling
//!
//! # Persistence model
//!
//! The entire user aggregate is one local JSON snapshot, rewritten after
//! every mutation. Load failures of any kind fall back to a fresh default
//! user; save failures are logged and swallowed. Two sessions over the
//! same snapshot race last-writer-wins — there is no locking or merging.
//!
//! # Example
//!
//! ```no_run
//! use photoshelf_core::{
//!     paths::HostPathProvider,
//!     resolver::FsResourceResolver,
//!     search::{TagPredicate, TagQuery},
//!     Library, Tag,
//! };
//! use std::sync::Arc;
//!
//! let provider = HostPathProvider::new();
//! let mut library = Library::open(&provider, Arc::new(FsResourceResolver)).unwrap();
//!
//! library.create_album("Vacation").unwrap();
//! library.import_photo("Vacation", "content://media/images/42").unwrap();
//! library
//!     .add_tag("Vacation", "content://media/images/42", Tag::new("Location", "New York"))
//!     .unwrap();
//!
//! let matches = library.search(&TagQuery::single(TagPredicate::new("Location", "New")));
//! assert_eq!(matches, vec!["content://media/images/42"]);
//! ```

pub mod models;
pub mod paths;
pub mod resolver;
pub mod services;
pub mod store;
pub mod utils;

pub use services::search;

// Re-export commonly used types
pub use models::{Album, Photo, Tag, User, DEFAULT_USERNAME};
pub use paths::{HostPathProvider, PathProvider, SharedPathProvider};
pub use resolver::{FsResourceResolver, ResourceResolver, SharedResourceResolver, TrustingResolver};
pub use services::{search_photos, Library, TagPredicate, TagQuery};
pub use store::UserStore;
pub use utils::{AppError, AppResult, CommandError};
