//! Template rendering against a run's context

// Internal imports (std, crate)
use std::path::Path;

use crate::{context::RenderContext, error::Result, Error};

use super::{filters, RenderMode, RenderedFile, TemplateDir, TemplateFile, TemplatePath};

// External imports (alphabetized)
use tera::{Context, Tera};

/// Renders the templates of one template root
#[derive(Debug, Clone)]
pub struct TemplateManager {
    /// Template directory
    template_dir: TemplateDir,
}

impl TemplateManager {
    /// Create a new TemplateManager for the given template root
    pub fn new(template_dir: TemplateDir) -> Self {
        Self { template_dir }
    }

    /// Render the templates selected by `mode`, one per iteration.
    ///
    /// Template selection happens up front; each template is read and
    /// rendered only when the iterator reaches it. The first error ends the
    /// sequence.
    pub fn render(&self, context: &RenderContext, mode: RenderMode) -> Result<RenderedFiles> {
        let pending = self.template_dir.template_paths(mode)?;
        log::debug!(
            "Selected {} templates from {} ({:?})",
            pending.len(),
            self.template_dir.display(),
            mode
        );

        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        filters::register(&mut tera);

        Ok(RenderedFiles {
            pending: pending.into_iter(),
            tera,
            context: context.to_tera()?,
            failed: false,
        })
    }
}

/// Lazily rendered templates; yields `Err` at most once, then stops
pub struct RenderedFiles {
    pending: std::vec::IntoIter<TemplatePath>,
    tera: Tera,
    context: Context,
    failed: bool,
}

impl RenderedFiles {
    fn render_one(&mut self, template: TemplatePath) -> Result<RenderedFile> {
        let file = read_template(template)?;
        let name = template_name(&file.destination);
        log::debug!("Rendering template: {}", file.path.display());

        self.tera
            .add_raw_template(&name, &file.content)
            .map_err(|e| Error::template(&file.path, describe(&e)))?;
        let content = self
            .tera
            .render(&name, &self.context)
            .map_err(|e| Error::template(&file.path, describe(&e)))?;

        Ok(RenderedFile {
            destination: file.destination,
            content: content.into_bytes(),
        })
    }
}

impl Iterator for RenderedFiles {
    type Item = Result<RenderedFile>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let template = self.pending.next()?;
        let rendered = self.render_one(template);
        self.failed = rendered.is_err();
        Some(rendered)
    }
}

fn read_template(template: TemplatePath) -> Result<TemplateFile> {
    let content = std::fs::read_to_string(&template.path)
        .map_err(|e| Error::template(&template.path, format!("failed to read template: {}", e)))?;
    Ok(TemplateFile {
        path: template.path,
        destination: template.destination,
        content,
    })
}

fn template_name(destination: &Path) -> String {
    destination.to_string_lossy().replace('\\', "/")
}

/// Tera keeps the useful part of a failure (e.g. the missing variable) in
/// the source chain
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, model::ServiceModel};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn context() -> RenderContext {
        let model = ServiceModel {
            service_id: "ECR".to_string(),
            abbreviation: "Amazon ECR".to_string(),
            full_name: "Amazon EC2 Container Registry".to_string(),
            package_alias: "ecr".to_string(),
            model_version: "2015-09-21".to_string(),
            operation_names: vec!["CreateRepository".to_string()],
        };
        let mut config = Config::new("ecr");
        config.dry_run = true;
        config.runtime_version = "v0.20.0".to_string();
        RenderContext::build(model, vec!["Repository".to_string()], &config).unwrap()
    }

    #[test]
    fn test_render_substitutes_context() -> Result<()> {
        let root = tempdir()?;
        fs::write(
            root.path().join("README.md.tpl"),
            "# {{ service_full_name }} ({{ service_package_name }})\n\
             {% for crd in crd_names %}- {{ crd | snake_case }}\n{% endfor %}",
        )?;
        fs::write(root.path().join("go.mod"), "require runtime {{ runtime_version }}")?;

        let manager = TemplateManager::new(TemplateDir::open(root.path())?);
        let rendered: Vec<RenderedFile> =
            manager.render(&context(), RenderMode::Fresh)?.collect::<Result<_>>()?;

        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].destination, PathBuf::from("README.md"));
        assert_eq!(
            String::from_utf8_lossy(&rendered[0].content),
            "# Amazon EC2 Container Registry (ecr)\n- repository\n"
        );
        assert_eq!(rendered[1].destination, PathBuf::from("go.mod"));
        assert_eq!(
            String::from_utf8_lossy(&rendered[1].content),
            "require runtime v0.20.0"
        );
        Ok(())
    }

    #[test]
    fn test_undefined_variable_names_file_and_stops() -> Result<()> {
        let root = tempdir()?;
        fs::write(root.path().join("a.txt.tpl"), "{{ no_such_field }}")?;
        fs::write(root.path().join("b.txt.tpl"), "{{ service_id }}")?;

        let manager = TemplateManager::new(TemplateDir::open(root.path())?);
        let mut files = manager.render(&context(), RenderMode::Fresh)?;

        let err = files.next().unwrap().unwrap_err();
        match &err {
            Error::Template { file, message } => {
                assert!(file.ends_with("a.txt.tpl"));
                assert!(message.contains("no_such_field"), "{}", message);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(files.next().is_none());
        Ok(())
    }

    #[test]
    fn test_malformed_template_is_template_error() -> Result<()> {
        let root = tempdir()?;
        fs::write(root.path().join("bad.tpl"), "{% if %}")?;

        let manager = TemplateManager::new(TemplateDir::open(root.path())?);
        let result: Result<Vec<RenderedFile>> =
            manager.render(&context(), RenderMode::Fresh)?.collect();
        assert!(matches!(result, Err(Error::Template { .. })));
        Ok(())
    }

    #[test]
    fn test_html_templates_are_not_escaped() -> Result<()> {
        let root = tempdir()?;
        fs::write(root.path().join("index.html"), "{{ service_abbreviation }} <b>")?;

        let manager = TemplateManager::new(TemplateDir::open(root.path())?);
        let rendered: Vec<RenderedFile> =
            manager.render(&context(), RenderMode::Fresh)?.collect::<Result<_>>()?;
        assert_eq!(
            String::from_utf8_lossy(&rendered[0].content),
            "Amazon ECR <b>"
        );
        Ok(())
    }
}
