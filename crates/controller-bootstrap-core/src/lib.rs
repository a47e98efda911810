//! Controller Bootstrap Core Library
//!
//! This library scaffolds a service controller repository from two inputs:
//! the service's `api-2.json` model and a directory of Tera templates. The
//! pipeline locates and loads the model, derives resource names from its
//! `Create*` operations, builds a single render context and renders every
//! template against it, then writes (or previews) the results.

pub mod config;
pub mod context;
pub mod error;
pub mod generate;
pub mod materialize;
pub mod model;
pub mod resources;
pub mod templates;
pub mod utils;

pub use crate::{
    config::Config,
    context::RenderContext,
    error::{Error, Result},
    generate::{generate, generate_to, GenerateReport},
    model::{locate, ModelLocation, ServiceModel},
    resources::derive_names,
    templates::{RenderMode, RenderedFile, TemplateDir, TemplateManager},
};
