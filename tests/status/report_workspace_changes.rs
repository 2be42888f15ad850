use crate::common::command::{init_repository_dir, run_twig_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn clean_repository_lists_only_staged_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_twig_command(init_repository_dir.path(), &["status"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert_eq!(
        stdout,
        "On branch main\n\nStaged files:\n    1.txt\n    a/2.txt\n    a/b/3.txt\n"
    );

    Ok(())
}

#[rstest]
fn modified_deleted_and_untracked_files_are_reported(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    std::fs::remove_file(dir.join("a").join("2.txt"))?;
    write_file(FileSpec::new(dir.join("new.txt"), "new".to_string()));

    let output = run_twig_command(dir, &["status"]).assert().success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert_eq!(
        stdout,
        "On branch main\n\
         \nStaged files:\n    a/b/3.txt\n\
         \nChanges not staged:\n    modified:   1.txt\n    deleted:    a/2.txt\n\
         \nUntracked files:\n    new.txt\n"
    );

    Ok(())
}

#[rstest]
fn restaging_a_modified_file_clears_it(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    run_twig_command(dir, &["add", "1.txt"]).assert().success();

    let output = run_twig_command(dir, &["status"]).assert().success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert!(!stdout.contains("modified:"), "unexpected output: {}", stdout);

    Ok(())
}
