//! # gitdeck-core
//!
//! Core library for gitdeck: the persisted repositories root, discovery of
//! working copies under it, and the naming rules used when creating new ones.

pub mod config;
pub mod error;
pub mod locator;
pub mod remote;
pub mod repo_name;
pub mod template;
pub mod traits;

pub use config::ConfigFile;
pub use error::{Error, Result};
pub use locator::{RepoRef, RootStatus};
pub use remote::RemoteUrl;
pub use repo_name::RepoName;
pub use traits::ConfigStore;
