use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn huff() -> Command {
    Command::new(env!("CARGO_BIN_EXE_huff"))
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("huff-cli-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn usage_error_and_refusal_have_distinct_codes() {
    let dir = scratch_dir("codes");
    let source = dir.join("aaaa.txt");
    let destination = dir.join("aaaa.huff");
    fs::write(&source, b"aaaa").unwrap();

    let missing_destination = huff().arg("-huff").arg(&source).status().unwrap();
    assert_eq!(missing_destination.code(), Some(1));

    let refused = huff()
        .arg("-huff")
        .arg(&source)
        .arg(&destination)
        .status()
        .unwrap();
    assert_eq!(refused.code(), Some(2));
    assert!(!destination.exists());

    let not_encoded = huff()
        .arg("-unhuff")
        .arg(&source)
        .arg(&destination)
        .status()
        .unwrap();
    assert_eq!(not_encoded.code(), Some(3));
    assert!(!destination.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn help_exits_cleanly() {
    let help = huff().arg("--help").output().unwrap();
    assert_eq!(help.status.code(), Some(0));
    assert!(!help.stdout.is_empty());
}

#[test]
fn damaged_container_exits_with_4() {
    let dir = scratch_dir("damaged");
    let source = dir.join("cut.huff");
    let destination = dir.join("cut.out");
    let mut container = 312_341u32.to_le_bytes().to_vec();
    container.extend_from_slice(&50u32.to_le_bytes());
    fs::write(&source, &container).unwrap();

    let status = huff()
        .arg("-unhuff")
        .arg(&source)
        .arg(&destination)
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(4));
    assert!(!destination.exists());

    fs::remove_dir_all(&dir).unwrap();
}
