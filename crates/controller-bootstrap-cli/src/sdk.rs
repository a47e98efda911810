//! Fetches and caches the upstream SDK repository holding the API models.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Repository whose `models/apis` tree holds the service models
pub const SDK_REPO_URL: &str = "https://github.com/aws/aws-sdk-go";

/// Upper bound on the initial clone
pub const DEFAULT_CLONE_TIMEOUT: Duration = Duration::from_secs(180);

/// `$HOME/.cache/aws-controllers-k8s`
pub fn default_cache_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().context("unable to determine $HOME")?;
    Ok(home.join(".cache").join("aws-controllers-k8s"))
}

/// Model root inside an SDK checkout
pub fn model_root(sdk_dir: &Path) -> PathBuf {
    sdk_dir.join("models").join("apis")
}

/// Make sure a clone of the SDK exists below `cache_dir` and return its path.
///
/// A checkout is reused only when its model tree is present; anything else
/// in its place is removed and cloned again. A failed or cancelled clone is
/// removed so the next run starts over.
pub async fn ensure_sdk_repo(cache_dir: &Path, timeout: Duration) -> anyhow::Result<PathBuf> {
    ensure_sdk_repo_with(Path::new("git"), cache_dir, timeout).await
}

async fn ensure_sdk_repo_with(
    git: &Path,
    cache_dir: &Path,
    timeout: Duration,
) -> anyhow::Result<PathBuf> {
    let src_dir = cache_dir.join("src");
    tokio::fs::create_dir_all(&src_dir)
        .await
        .with_context(|| format!("Failed to create cache directory {}", src_dir.display()))?;

    let sdk_dir = src_dir.join("aws-sdk-go");
    if tokio::fs::try_exists(model_root(&sdk_dir)).await? {
        debug!("Using cached SDK repository at {}", sdk_dir.display());
        return Ok(sdk_dir);
    }
    if tokio::fs::try_exists(&sdk_dir).await? {
        warn!("Removing incomplete SDK checkout at {}", sdk_dir.display());
        remove_checkout(&sdk_dir).await?;
    }

    info!("Cloning {} into {}", SDK_REPO_URL, sdk_dir.display());
    if let Err(err) = clone_repository(git, &sdk_dir, SDK_REPO_URL, timeout).await {
        if let Err(cleanup) = remove_checkout(&sdk_dir).await {
            warn!("{:#}", cleanup);
        }
        return Err(err.context("cannot clone repository"));
    }
    Ok(sdk_dir)
}

async fn remove_checkout(sdk_dir: &Path) -> anyhow::Result<()> {
    match tokio::fs::remove_dir_all(sdk_dir).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| {
            format!("Failed to remove partial checkout {}", sdk_dir.display())
        }),
    }
}

enum Interrupted {
    TimedOut,
    Cancelled,
}

/// Equivalent to `git clone <url> <path>`, bounded by `timeout` and
/// abandoned on Ctrl-C or SIGTERM
async fn clone_repository(
    git: &Path,
    path: &Path,
    url: &str,
    timeout: Duration,
) -> anyhow::Result<()> {
    let mut child = Command::new(git)
        .arg("clone")
        .arg("--quiet")
        .arg(url)
        .arg(path)
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("Failed to spawn {}", git.display()))?;

    let outcome = tokio::select! {
        status = child.wait() => Ok(status),
        _ = tokio::time::sleep(timeout) => Err(Interrupted::TimedOut),
        _ = shutdown_signal() => Err(Interrupted::Cancelled),
    };

    match outcome {
        Ok(status) => {
            let status = status.context("Failed to wait for git")?;
            if !status.success() {
                bail!("git clone of {} exited with {}", url, status);
            }
            Ok(())
        }
        Err(reason) => {
            // Reap the child before the caller removes its directory
            if let Err(e) = child.kill().await {
                warn!("Failed to stop git: {}", e);
            }
            match reason {
                Interrupted::TimedOut => {
                    bail!("git clone of {} timed out after {}s", url, timeout.as_secs())
                }
                Interrupted::Cancelled => {
                    debug!("Received shutdown signal, stopped clone.");
                    bail!("git clone of {} was cancelled", url)
                }
            }
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
