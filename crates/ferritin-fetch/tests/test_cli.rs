use assert_cmd::Command;
use ferritin_test_data::TestFile;
use std::fs;
use std::path::Path;

fn write_list(dir: &Path, contents: &str) -> String {
    let path = dir.join("ids.txt");
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

fn log_lines(out_folder: &Path) -> Vec<String> {
    fs::read_to_string(out_folder.join("fetching.log"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_cli_mirror_batch() {
    let mirror = tempfile::tempdir().unwrap();
    TestFile::two_chains().install(mirror.path(), "1FRT").unwrap();
    TestFile::nmr_ensemble().install(mirror.path(), "2frt").unwrap();

    let work = tempfile::tempdir().unwrap();
    let list = write_list(work.path(), "1FRT A\n\n2FRT\n1FRT Q\n3FRT\n1FRT\n");
    let out_folder = work.path().join("out");

    let mut cmd = Command::cargo_bin("ferritin-fetch").unwrap();
    cmd.arg("--pdbid-list-file")
        .arg(&list)
        .arg("--out-file-directory")
        .arg(&out_folder)
        .arg("--max-threads")
        .arg("2")
        .arg("--mirror")
        .arg(mirror.path());

    cmd.assert().success();

    let lines = log_lines(&out_folder);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "1FRT A 1FRT_A.pdb");
    assert_eq!(lines[1], "2FRT 2FRT.pdb");
    assert!(lines[2].starts_with("1FRT Q The expected chain ID (Q)"));
    assert!(lines[3].starts_with("3FRT "));
    assert!(lines[3].contains("(3FRT)"));
    assert_eq!(lines[4], "1FRT 1FRT.pdb");

    assert!(out_folder.join("1FRT_A.pdb").exists());
    assert!(out_folder.join("2FRT.pdb").exists());
    assert!(out_folder.join("1FRT.pdb").exists());
    assert!(!out_folder.join("1FRT_Q.pdb").exists());
    assert!(!out_folder.join("3FRT.pdb").exists());
}

#[test]
fn test_cli_unreachable_server() {
    let work = tempfile::tempdir().unwrap();
    let list = write_list(work.path(), "1ABC\n2DEF B\n");
    let out_folder = work.path().join("out");

    let mut cmd = Command::cargo_bin("ferritin-fetch").unwrap();
    cmd.arg("-i")
        .arg(&list)
        .arg("-o")
        .arg(&out_folder)
        .arg("-c")
        .arg("4")
        .arg("--base-url")
        .arg("http://127.0.0.1:1");

    // failed entries are logged, not fatal
    cmd.assert().success();

    let lines = log_lines(&out_folder);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("1ABC The structure (1ABC) was not able to be fetched."));
    assert!(lines[1].starts_with("2DEF B The structure (2DEF) was not able to be fetched."));
}

#[test]
fn test_cli_cif_output() {
    let mirror = tempfile::tempdir().unwrap();
    TestFile::two_chains().install(mirror.path(), "1FRT").unwrap();

    let work = tempfile::tempdir().unwrap();
    let list = write_list(work.path(), "1FRT B\n");
    let out_folder = work.path().join("out");

    let mut cmd = Command::cargo_bin("ferritin-fetch").unwrap();
    cmd.arg("-i")
        .arg(&list)
        .arg("-o")
        .arg(&out_folder)
        .arg("-c")
        .arg("1")
        .arg("--format")
        .arg("cif")
        .arg("--mirror")
        .arg(mirror.path());

    cmd.assert().success();
    assert_eq!(log_lines(&out_folder), vec!["1FRT B 1FRT_B.cif".to_string()]);
    assert!(out_folder.join("1FRT_B.cif").exists());
}

#[test]
fn test_cli_rejects_zero_threads() {
    let work = tempfile::tempdir().unwrap();
    let list = write_list(work.path(), "1ABC\n");

    let mut cmd = Command::cargo_bin("ferritin-fetch").unwrap();
    cmd.arg("-i")
        .arg(&list)
        .arg("-o")
        .arg(work.path())
        .arg("-c")
        .arg("0");

    cmd.assert().failure();
}

#[test]
fn test_cli_missing_list_file() {
    let work = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("ferritin-fetch").unwrap();
    cmd.arg("-i")
        .arg(work.path().join("nope.txt"))
        .arg("-o")
        .arg(work.path())
        .arg("-c")
        .arg("1");

    cmd.assert().failure();
    assert!(!work.path().join("fetching.log").exists());
}
