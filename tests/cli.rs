use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("alphashift").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn transliterates_stdin() {
    cmd()
        .write_stdin("Hello, World! 123")
        .assert()
        .success()
        .stdout("HELLOWORLDONETWOTHREE\n");
}

#[test]
fn encrypts_and_decrypts_stdin() {
    cmd()
        .args(["-e", "3"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("KHOOR\n");

    cmd()
        .args(["-d", "3"])
        .write_stdin("KHOOR")
        .assert()
        .success()
        .stdout("HELLO\n");
}

#[test]
fn reads_and_writes_files() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("plain.txt");
    let output = tmp.path().join("secret.txt");
    fs::write(&input, "xyz 1").unwrap();

    cmd()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--encrypt", "3"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "ABCRQH\n");
}

#[test]
fn input_file_can_be_rewritten_in_place() {
    let tmp = TempDir::new().unwrap();
    let text = tmp.path().join("text.txt");
    fs::write(&text, "hello1").unwrap();

    cmd().arg("-i").arg(&text).arg("-o").arg(&text).assert().success();
    assert_eq!(fs::read_to_string(&text).unwrap(), "HELLOONE\n");

    // a differently spelled path to the same file behaves the same way
    cmd()
        .current_dir(tmp.path())
        .args(["-i", "text.txt", "-o", "./text.txt", "-e", "1"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&text).unwrap(), "IFMMPPOF\n");
}

#[test]
fn non_utf8_input_is_accepted() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("binary.dat");
    fs::write(&input, [0xffu8, b'a', 0x80, b'7']).unwrap();

    cmd()
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout("ASEVEN\n");
}

#[test]
fn config_file_supplies_cipher() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("cipher.yaml");
    fs::write(&config, "cipher:\n  mode: encrypt\n  key: 1\n").unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin("abc")
        .assert()
        .success()
        .stdout("BCD\n");
}

#[test]
fn flags_override_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("cipher.toml");
    fs::write(&config, "[cipher]\nmode = \"encrypt\"\nkey = 1\n").unwrap();

    cmd()
        .arg("-c")
        .arg(&config)
        .args(["-d", "1"])
        .write_stdin("BCD")
        .assert()
        .success()
        .stdout("ABC\n");
}

#[test]
fn version_flag() {
    cmd().arg("--version").assert().success().stdout("0.1.0\n");
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage"))
        .stdout(contains("--encrypt"));
}

#[test]
fn conflicting_cipher_flags_fail() {
    cmd().args(["-e", "1", "-d", "1"]).assert().failure();
}

#[test]
fn malformed_key_fails() {
    cmd().args(["-e", "abc"]).assert().failure().stderr(contains("KEY"));
}

#[test]
fn missing_filename_fails() {
    cmd().arg("-i").assert().failure();
}

#[test]
fn unknown_argument_fails() {
    cmd().arg("--bogus").assert().failure().stderr(contains("--bogus"));
}

#[test]
fn missing_input_file_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.txt");

    cmd()
        .arg("-i")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(contains("failed to read input file"));
}

#[test]
fn invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("cipher.yaml");
    fs::write(&config, "cipher:\n  mode: sideways\n  key: 1\n").unwrap();

    cmd()
        .arg("-c")
        .arg(&config)
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(contains("invalid YAML"));
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    cmd()
        .args(["-vv", "-e", "3"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("KHOOR\n")
        .stderr(contains("caesar_cipher"));
}
