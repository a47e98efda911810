//! controller-bootstrap CLI entrypoint
//! Parses command-line arguments, fetches the model repository when needed
//! and dispatches to the core generator.

mod sdk;

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use controller_bootstrap_core::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "controller-bootstrap")]
#[command(author, version, about = "controller-bootstrap initializes a new service controller repository", long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate template files in a service controller repository
    Generate(GenerateArgs),
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Service alias, used as the controller's package name
    #[arg(short = 's', long)]
    service_alias: Option<String>,
    /// Path to the service controller directory to bootstrap
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
    /// aws-sdk-go version embedded in the generated files
    #[arg(short = 'v', long)]
    aws_sdk_go_version: Option<String>,
    /// Controller runtime version embedded in the generated files
    #[arg(short = 'r', long)]
    runtime_version: Option<String>,
    /// Service model name of the supplied service alias
    #[arg(short = 'm', long)]
    model_name: Option<String>,
    /// Model version to use instead of the first one found
    #[arg(long)]
    api_version: Option<String>,
    /// Output files to stdout instead of writing them
    #[arg(short = 'd', long)]
    dry_run: bool,
    /// Only update the project description files of an existing controller
    #[arg(short = 'e', long)]
    existing_controller: bool,
    /// Directory of templates to render (default: ./template)
    #[arg(short = 't', long)]
    template_dir: Option<PathBuf>,
    /// Directory of service models; skips fetching the SDK repository
    #[arg(long)]
    model_root: Option<PathBuf>,
    /// YAML or JSON file with default options
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Options from `--config` (if any) overridden by explicit flags
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?,
            None => Config::new(String::new()),
        };

        if let Some(alias) = self.service_alias {
            config.service_alias = alias;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(version) = self.aws_sdk_go_version {
            config.sdk_version = version;
        }
        if let Some(version) = self.runtime_version {
            config.runtime_version = version;
        }
        if self.model_name.is_some() {
            config.model_name = self.model_name;
        }
        if self.api_version.is_some() {
            config.api_version = self.api_version;
        }
        if let Some(dir) = self.template_dir {
            config.template_dir = dir;
        }
        if let Some(root) = self.model_root {
            config.model_root = root;
        }
        config.dry_run |= self.dry_run;
        config.existing_repo |= self.existing_controller;

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so dry-run output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => {
            let mut config = args.into_config()?;

            if config.model_root.as_os_str().is_empty() {
                let cache_dir = sdk::default_cache_dir()?;
                let sdk_dir = sdk::ensure_sdk_repo(&cache_dir, sdk::DEFAULT_CLONE_TIMEOUT).await?;
                config.model_root = sdk::model_root(&sdk_dir);
            }

            tracing::debug!(
                "Generating {} from {} with templates in {}",
                config.service_alias,
                config.model_root.display(),
                config.template_dir.display()
            );

            let report =
                tokio::task::spawn_blocking(move || controller_bootstrap_core::generate(&config))
                    .await
                    .context("Generation task failed")??;

            if !report.dry_run {
                tracing::info!("Generated {} files", report.files.len());
            }
        }
    }
    Ok(())
}
