use crate::common::command::{
    get_head_commit_sha, get_parent_commit_id, init_repository_dir, read_branch, repository_dir,
    run_twig_command, twig_commit,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn new_branch_points_at_head(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = get_head_commit_sha(dir)?;

    run_twig_command(dir, &["branch", "create", "feature"])
        .assert()
        .success()
        .stdout(format!(
            "Branch 'feature' created, pointing to commit {}\n",
            head
        ));

    assert_eq!(read_branch(dir, "feature")?, head);
    // creating a branch does not switch to it
    assert_eq!(
        std::fs::read_to_string(dir.join(".twig").join("HEAD"))?,
        "ref: refs/heads/main"
    );

    Ok(())
}

#[rstest]
fn branch_can_start_from_another_branch_or_a_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = get_head_commit_sha(dir)?;
    run_twig_command(dir, &["branch", "create", "old-main"])
        .assert()
        .success();
    twig_commit(dir, "Second commit").assert().success();
    let second = get_head_commit_sha(dir)?;
    assert_eq!(get_parent_commit_id(dir, &second)?, first);

    run_twig_command(dir, &["branch", "create", "from-branch", "old-main"])
        .assert()
        .success();
    run_twig_command(dir, &["branch", "create", "from-commit", &first])
        .assert()
        .success();

    assert_eq!(read_branch(dir, "from-branch")?, first);
    assert_eq!(read_branch(dir, "from-commit")?, first);

    Ok(())
}

#[rstest]
fn hierarchical_names_are_nested_ref_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_twig_command(dir, &["branch", "create", "feature/login"])
        .assert()
        .success();

    assert!(
        dir.join(".twig")
            .join("refs")
            .join("heads")
            .join("feature")
            .join("login")
            .is_file()
    );

    Ok(())
}

#[rstest]
fn duplicate_branch_is_rejected(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "create", "feature"])
        .assert()
        .success();
    let original = read_branch(dir, "feature")?;
    twig_commit(dir, "Second commit").assert().success();

    run_twig_command(dir, &["branch", "create", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(read_branch(dir, "feature")?, original);

    Ok(())
}

#[rstest]
#[case("..")]
#[case(".hidden")]
#[case("name.lock")]
#[case("with space")]
#[case("tilde~1")]
fn invalid_names_are_rejected(init_repository_dir: TempDir, #[case] name: &str) {
    run_twig_command(init_repository_dir.path(), &["branch", "create", name])
        .assert()
        .failure();
}

#[rstest]
fn unknown_start_point_is_rejected(init_repository_dir: TempDir) {
    run_twig_command(
        init_repository_dir.path(),
        &["branch", "create", "feature", "nonexistent"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("nonexistent"));
}

#[rstest]
fn branching_without_commits_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_twig_command(repository_dir.path(), &["branch", "create", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no current HEAD"));

    Ok(())
}
