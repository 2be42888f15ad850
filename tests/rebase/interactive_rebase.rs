use crate::common::command::{
    diverged_repository_dir, get_commit_field, get_parent_commit_id, init_repository_dir,
    metadata_path, object_count, read_branch, read_object, run_twig_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn dropping_every_commit_moves_source_to_the_target_tip(
    diverged_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_repository_dir.path();
    let main_tip = read_branch(dir, "main")?;

    run_twig_command(dir, &["rebase", "feature", "main"])
        .write_stdin("drop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Successfully rebased 'feature' onto 'main'. New tip: {}",
            main_tip
        )));

    assert_eq!(read_branch(dir, "feature")?, main_tip);
    assert_eq!(read_branch(dir, "main")?, main_tip);
    assert!(!metadata_path(dir).join("rebase").exists());

    Ok(())
}

#[rstest]
fn edited_commit_is_stored_on_top_of_the_target(
    diverged_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_repository_dir.path();
    let main_tip = read_branch(dir, "main")?;
    let feature_tip = read_branch(dir, "feature")?;
    let original = read_object(dir, &feature_tip)?;

    run_twig_command(dir, &["rebase", "feature", "main"])
        .write_stdin("edit\nmessage: Reworded feature\n")
        .assert()
        .success();

    let rewritten = read_branch(dir, "feature")?;
    assert_ne!(rewritten, feature_tip);
    assert_eq!(
        read_object(dir, &rewritten)?,
        format!("message: Reworded feature\nparent: {}", main_tip)
    );
    assert_eq!(get_parent_commit_id(dir, &rewritten)?, main_tip);
    // the original commit object is never rewritten
    assert_eq!(read_object(dir, &feature_tip)?, original);

    Ok(())
}

#[rstest]
fn empty_edit_reapplies_the_commit_unchanged(
    diverged_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_repository_dir.path();
    let main_tip = read_branch(dir, "main")?;

    run_twig_command(dir, &["rebase", "feature", "main"])
        .write_stdin("edit\n\n")
        .assert()
        .success();

    let rewritten = read_branch(dir, "feature")?;
    assert_eq!(get_parent_commit_id(dir, &rewritten)?, main_tip);
    assert_eq!(
        get_commit_field(dir, &rewritten, "message")?,
        Some("Feature work".to_string())
    );

    Ok(())
}

#[rstest]
fn squashing_the_first_commit_is_rejected_before_any_write(
    diverged_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_repository_dir.path();
    let feature_tip = read_branch(dir, "feature")?;
    let objects_before = object_count(dir);

    run_twig_command(dir, &["rebase", "feature", "main"])
        .write_stdin("squash\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid rebase plan"));

    assert_eq!(read_branch(dir, "feature")?, feature_tip);
    assert_eq!(object_count(dir), objects_before);
    assert!(!metadata_path(dir).join("rebase").exists());

    Ok(())
}

#[rstest]
fn unknown_actions_are_skipped(
    diverged_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_repository_dir.path();
    let main_tip = read_branch(dir, "main")?;
    let feature_tip = read_branch(dir, "feature")?;

    run_twig_command(dir, &["rebase", "feature", "main"])
        .write_stdin("reword\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Skipping commit '{}': unknown action 'reword'",
            feature_tip
        )));

    assert_eq!(read_branch(dir, "feature")?, main_tip);

    Ok(())
}

#[rstest]
fn rebasing_an_already_based_branch_is_a_no_op(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "create", "feature"])
        .assert()
        .success();
    let main_tip = read_branch(dir, "main")?;

    run_twig_command(dir, &["rebase", "feature", "main"])
        .assert()
        .success();

    assert_eq!(read_branch(dir, "feature")?, main_tip);

    Ok(())
}

#[rstest]
fn rebasing_an_unknown_branch_fails(diverged_repository_dir: TempDir) {
    run_twig_command(diverged_repository_dir.path(), &["rebase", "ghost", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch 'ghost' does not exist"));
}

#[rstest]
fn rebase_needs_a_target_branch(diverged_repository_dir: TempDir) {
    run_twig_command(diverged_repository_dir.path(), &["rebase", "feature"])
        .assert()
        .failure();
}
