use crate::common::command::{metadata_path, object_count, repository_dir, run_twig_command};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use sha1::{Digest, Sha1};

fn digest(content: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[rstest]
fn add_files_from_nested_directories(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_twig_command(dir, &["init"]).assert().success();

    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(dir.join("a").join("b").join("3.txt"), "three".to_string()));

    run_twig_command(dir, &["add", "."]).assert().success();

    let index = std::fs::read_to_string(metadata_path(dir).join("index"))?;
    assert_eq!(
        index,
        format!("{} 1.txt\n{} a/b/3.txt\n", digest("one"), digest("three"))
    );
    assert!(metadata_path(dir).join("objects").join(digest("three")).is_file());

    Ok(())
}

#[rstest]
fn identical_files_share_one_object(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_twig_command(dir, &["init"]).assert().success();

    write_file(FileSpec::new(dir.join("left.txt"), "same".to_string()));
    write_file(FileSpec::new(dir.join("right.txt"), "same".to_string()));

    run_twig_command(dir, &["add", "left.txt", "right.txt"])
        .assert()
        .success();

    assert_eq!(object_count(dir), 1);

    Ok(())
}

#[rstest]
fn adding_a_non_existent_file_is_reported_and_skipped(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_twig_command(dir, &["init"]).assert().success();
    let files = write_generated_files(dir, 3);

    let mut args = vec!["add", "ghost.txt"];
    let names = files
        .iter()
        .map(|file| file.path.file_name().unwrap().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    args.extend(names.iter().map(String::as_str));

    run_twig_command(dir, &args)
        .assert()
        .success()
        .stderr(predicate::str::contains("ghost.txt"));

    let index = std::fs::read_to_string(metadata_path(dir).join("index"))?;
    assert_eq!(index.lines().count(), 3);
    for name in &names {
        assert!(index.contains(name.as_str()), "{} missing from index", name);
    }

    Ok(())
}
