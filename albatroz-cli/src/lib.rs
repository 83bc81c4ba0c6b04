//! # albatroz-cli
//!
//! Command-line tool that copies Albatroz UI components into Expo projects.
//!
//! This crate provides the `albatroz` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `albatroz init` | Check the project, install `lucide-react-native`, write `albatroz.json` |
//! | `albatroz add [name]` | Download a component into `src/components/ui/` |
//!
//! ## Architecture
//!
//! - [`project`] — `package.json` parsing and Expo project validation
//! - [`config`] — the `albatroz.json` record and its store
//! - [`catalog`] — the fixed list of installable components
//! - [`installer`] — package managers, the install process and the prompt
//! - [`fetch`] — component download
//! - [`commands`] — `init` and `add`

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod installer;
pub mod logging;
pub mod project;

pub use error::{AlbatrozError, Result};
