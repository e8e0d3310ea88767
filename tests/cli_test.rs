use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_to_sats() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("rpc-cli"));
    cmd.args(["--no-color", "to-sats", "0.5"]);

    cmd.assert()
        .success()
        .stdout(predicate::eq("amount: 0.50000000\nsatoshis: 50000000\n"));

    Ok(())
}

#[test]
fn test_cli_to_sats_exact_where_float_is_lossy() {
    let mut cmd = Command::new(cargo_bin!("rpc-cli"));
    cmd.args(["--no-color", "to-sats", "0.29"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("satoshis: 29000000"));
}

#[test]
fn test_cli_to_sats_rejects_extra_precision() {
    let mut cmd = Command::new(cargo_bin!("rpc-cli"));
    cmd.args(["--no-color", "to-sats", "0.123456789"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("more than 8 decimal places"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_to_btc() {
    let mut cmd = Command::new(cargo_bin!("rpc-cli"));
    cmd.args(["--no-color", "to-btc", "123456789"]);

    cmd.assert()
        .success()
        .stdout(predicate::eq("satoshis: 123456789\namount: 1.23456789\n"));
}

#[test]
fn test_cli_to_btc_negative() {
    let mut cmd = Command::new(cargo_bin!("rpc-cli"));
    cmd.args(["--no-color", "to-btc", "-1000"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("amount: -0.00001000"));
}

#[test]
fn test_cli_verify() {
    let mut cmd = Command::new(cargo_bin!("rpc-cli"));
    cmd.args(["--no-color", "verify", "0.00000001"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("valid: true"));

    let mut cmd = Command::new(cargo_bin!("rpc-cli"));
    cmd.args(["verify", "0.123456789", "--no-color"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("valid: false"));
}

#[test]
fn test_cli_requires_subcommand() {
    let mut cmd = Command::new(cargo_bin!("rpc-cli"));
    cmd.assert().failure();
}
