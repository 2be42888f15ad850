use crate::common::command::{
    diverged_repository_dir, get_parent_commit_id, metadata_path, object_count, read_branch,
    read_object, run_twig_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// `feature` rebased onto `main` with a single `pick`, paused on the conflict
#[fixture]
fn paused_repository_dir(diverged_repository_dir: TempDir) -> TempDir {
    run_twig_command(diverged_repository_dir.path(), &["rebase", "feature", "main"])
        .write_stdin("pick\n")
        .assert()
        .success();

    diverged_repository_dir
}

#[rstest]
fn differing_pick_pauses_with_a_record_and_markers(
    diverged_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_repository_dir.path();
    let main_tip = read_branch(dir, "main")?;
    let feature_tip = read_branch(dir, "feature")?;
    let objects_before = object_count(dir);

    run_twig_command(dir, &["rebase", "feature", "main"])
        .write_stdin("pick\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Conflict detected while rebasing commit '{}' onto '{}'.",
            feature_tip, main_tip
        )));

    assert_eq!(
        std::fs::read_to_string(metadata_path(dir).join("rebase"))?,
        format!("{} {}", feature_tip, main_tip)
    );
    assert_eq!(
        std::fs::read_to_string(dir.join("conflicted_file.txt"))?,
        format!(
            "<<<<<<< {}\n{}\n=======\n{}\n>>>>>> {}\n",
            feature_tip,
            read_object(dir, &feature_tip)?,
            read_object(dir, &main_tip)?,
            main_tip
        )
    );
    assert_eq!(read_branch(dir, "feature")?, feature_tip);
    assert_eq!(object_count(dir), objects_before);

    Ok(())
}

#[rstest]
fn status_reports_the_paused_rebase(
    paused_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = paused_repository_dir.path();
    let main_tip = read_branch(dir, "main")?;
    let feature_tip = read_branch(dir, "feature")?;

    run_twig_command(dir, &["rebase", "--status"])
        .assert()
        .success()
        .stdout(format!(
            "Rebase paused: commit '{}' conflicts with '{}'.\n",
            feature_tip, main_tip
        ));

    Ok(())
}

#[rstest]
fn continue_reapplies_the_paused_commit(
    paused_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = paused_repository_dir.path();
    let main_tip = read_branch(dir, "main")?;
    let feature_tip = read_branch(dir, "feature")?;
    let objects_before = object_count(dir);

    let output = run_twig_command(dir, &["rebase", "--continue"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let new_oid = stdout
        .strip_prefix("Reapplied paused commit as '")
        .and_then(|rest| rest.split('\'').next())
        .ok_or("unexpected continue output")?;

    assert_eq!(get_parent_commit_id(dir, new_oid)?, main_tip);
    assert_eq!(object_count(dir), objects_before + 1);
    assert!(!metadata_path(dir).join("rebase").exists());
    // resuming moves no ref
    assert_eq!(read_branch(dir, "feature")?, feature_tip);

    run_twig_command(dir, &["rebase", "--status"])
        .assert()
        .success()
        .stdout("No rebase in progress.\n");

    Ok(())
}

#[rstest]
fn abort_discards_the_record_without_writing(
    paused_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = paused_repository_dir.path();
    let feature_tip = read_branch(dir, "feature")?;
    let objects_before = object_count(dir);

    run_twig_command(dir, &["rebase", "--abort"])
        .assert()
        .success()
        .stdout("Rebase aborted.\n");

    assert!(!metadata_path(dir).join("rebase").exists());
    assert_eq!(object_count(dir), objects_before);
    assert_eq!(read_branch(dir, "feature")?, feature_tip);

    Ok(())
}

#[rstest]
fn starting_another_rebase_while_paused_fails(paused_repository_dir: TempDir) {
    run_twig_command(paused_repository_dir.path(), &["rebase", "feature", "main"])
        .write_stdin("drop\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("a rebase is already in progress"));
}

#[rstest]
#[case("--continue")]
#[case("--abort")]
fn resolving_without_a_paused_rebase_fails(
    diverged_repository_dir: TempDir,
    #[case] flag: &str,
) {
    run_twig_command(diverged_repository_dir.path(), &["rebase", flag])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no rebase in progress"));
}

#[rstest]
fn status_command_mentions_the_paused_rebase(
    paused_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = paused_repository_dir.path();
    let feature_tip = read_branch(dir, "feature")?;

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Rebase paused on commit '{}'",
            feature_tip
        )));

    Ok(())
}
