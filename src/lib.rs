//! snix-launcher - massCode snippets for the Alfred launcher
//!
//! Queries a locally running massCode instance over its REST API, joins each
//! snippet with its folder chain and tag names, and prints the result as an
//! Alfred Script Filter feedback document.
//!
//! The pipeline is a straight run of plain functions:
//! - [`api`] fetches snippets, tags and folders (one request each, in order)
//! - [`enrich`] resolves folder paths and tag names
//! - [`launcher`] turns enriched snippets into launcher items
//! - [`search`] parses the query mode and filters the items
//! - [`cli`] wires it together and renders the output

pub mod api;
pub mod cli;
pub mod config;
pub mod enrich;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod models;
pub mod search;

pub use error::{Error, Result};
