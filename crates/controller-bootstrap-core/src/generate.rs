//! Repository generation entry point

use std::io::{self, Write};
use std::path::PathBuf;

use crate::{
    config::Config,
    context::RenderContext,
    error::Result,
    materialize,
    model::{locate, ServiceModel},
    resources::derive_names,
    templates::{RenderMode, RenderedFile, TemplateDir, TemplateManager},
};

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Output paths relative to the output root, in render order
    pub files: Vec<PathBuf>,
    /// Whether files were printed instead of written
    pub dry_run: bool,
}

/// Generate (or preview on stdout) the repository described by `config`
pub fn generate(config: &Config) -> Result<GenerateReport> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generate_to(config, &mut out)
}

/// Generate the repository described by `config`, sending dry-run previews to `out`.
///
/// Every template is rendered before anything is written, so a template
/// error leaves the output tree untouched.
pub fn generate_to<W: Write>(config: &Config, out: &mut W) -> Result<GenerateReport> {
    config.validate()?;

    // 1. Locate and load the service model
    let location = locate(
        &config.service_model_name(),
        &config.model_root,
        config.api_version.as_deref(),
    )?;
    let model = ServiceModel::extract(&location, &config.service_alias)?;

    // 2. Derive resource names and build the context
    let crd_names = derive_names(&model.operation_names);
    log::info!(
        "Service {} ({} {}): {} resources found",
        model.service_id,
        location.service,
        location.version,
        crd_names.len()
    );
    let context = RenderContext::build(model, crd_names, config)?;

    // 3. Render
    let mode = RenderMode::from_existing(config.existing_repo);
    let manager = TemplateManager::new(TemplateDir::open(&config.template_dir)?);
    let rendered: Vec<RenderedFile> = manager.render(&context, mode)?.collect::<Result<_>>()?;

    // 4. Preview or write
    if config.dry_run {
        for file in &rendered {
            preview(file, out)?;
        }
    } else {
        for file in &rendered {
            materialize::write(&file.output_path(&config.output_path), &file.content)?;
        }
        log::info!(
            "Wrote {} files to {}",
            rendered.len(),
            config.output_path.display()
        );
    }

    Ok(GenerateReport {
        files: rendered.into_iter().map(|f| f.destination).collect(),
        dry_run: config.dry_run,
    })
}

/// Print one rendered file under a header naming it
pub fn preview<W: Write>(file: &RenderedFile, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "============================= {} ======================================",
        file.destination.display()
    )?;
    writeln!(out, "{}", String::from_utf8_lossy(&file.content).trim())?;
    Ok(())
}
