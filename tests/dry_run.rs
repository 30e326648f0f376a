use std::error::Error;
use std::fs;
use std::path::Path;
use std::time::Duration;

use tempfile::tempdir;

use dirpoll::cli::CliArgs;

type TestResult = Result<(), Box<dyn Error>>;

fn dry_run_args(root: &Path, config: &Path) -> CliArgs {
    CliArgs {
        path: root.to_path_buf(),
        recursive: false,
        interval_ms: Some(10),
        exclude: vec![],
        config: Some(config.to_path_buf()),
        log_level: None,
        dry_run: true,
    }
}

#[tokio::test]
async fn dry_run_returns_without_polling() -> TestResult {
    let dir = tempdir()?;
    let root = dir.path().join("watched");
    fs::create_dir(&root)?;
    fs::write(root.join("a.txt"), "a")?;

    let config = dir.path().join("Dirpoll.toml");
    fs::write(&config, "[watch]\ninterval_ms = 10\n")?;

    // Without the dry-run short-circuit this would sit in the poll loop
    // until a shutdown signal; the timeout distinguishes the two.
    tokio::time::timeout(
        Duration::from_secs(5),
        dirpoll::run(dry_run_args(&root, &config)),
    )
    .await??;
    Ok(())
}

#[tokio::test]
async fn dry_run_still_rejects_an_invalid_root() -> TestResult {
    let dir = tempdir()?;
    let config = dir.path().join("Dirpoll.toml");
    fs::write(&config, "")?;

    let missing = dir.path().join("never-created");
    let result = tokio::time::timeout(
        Duration::from_secs(5),
        dirpoll::run(dry_run_args(&missing, &config)),
    )
    .await?;
    assert!(result.is_err());
    Ok(())
}
