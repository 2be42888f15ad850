use crate::common::command::{
    COMMIT_DATE, get_head_commit_sha, get_parent_commit_id, init_repository_dir, metadata_path,
    read_object, repository_dir, run_twig_command, twig_commit,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use twig::areas::lock::RepositoryLock;

#[rstest]
fn root_commit_has_an_empty_parent(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_twig_command(dir, &["init"]).assert().success();

    let output = twig_commit(dir, "First commit").assert().success();

    let head = get_head_commit_sha(dir)?;
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert_eq!(stdout, format!("[(root-commit) {}] First commit\n", &head[..7]));
    assert_eq!(
        read_object(dir, &head)?,
        format!("timestamp: {}\nmessage: First commit\nparent: ", COMMIT_DATE)
    );

    Ok(())
}

#[rstest]
fn next_commit_points_at_the_previous_head(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let previous = get_head_commit_sha(dir)?;

    twig_commit(dir, "Second commit")
        .assert()
        .success()
        .stdout(predicate::str::contains("(root-commit)").not());

    let head = get_head_commit_sha(dir)?;
    assert_ne!(head, previous);
    assert_eq!(get_parent_commit_id(dir, &head)?, previous);

    Ok(())
}

#[rstest]
fn empty_message_is_rejected(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let previous = get_head_commit_sha(dir)?;

    twig_commit(dir, "   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty commit message"));

    assert_eq!(get_head_commit_sha(dir)?, previous);

    Ok(())
}

#[rstest]
fn held_lock_blocks_other_processes(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let previous = get_head_commit_sha(dir)?;

    let lock = RepositoryLock::acquire(&metadata_path(dir))?;

    twig_commit(dir, "Blocked commit")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "repository is locked by another twig process",
        ));
    run_twig_command(dir, &["branch", "create", "blocked"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("repository is locked"));
    assert_eq!(get_head_commit_sha(dir)?, previous);
    assert!(!metadata_path(dir).join("refs").join("heads").join("blocked").exists());

    // read-only commands do not take the lock
    run_twig_command(dir, &["log", "--oneline"]).assert().success();

    drop(lock);
    twig_commit(dir, "Unblocked commit").assert().success();
    assert_eq!(get_parent_commit_id(dir, &get_head_commit_sha(dir)?)?, previous);

    Ok(())
}
