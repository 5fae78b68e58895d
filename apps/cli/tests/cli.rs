//! End-to-end tests for the `pixdoc` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `pixdoc` command isolated from the user's config and environment.
fn pixdoc(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pixdoc").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("PIXDOC_CONFIG")
        .env_remove("PIXDOC_OUTPUT")
        .env_remove("PIXDOC_LOG_LEVEL")
        .env_remove("PIXDOC_LOG_FORMAT");
    cmd
}

// ============================================================================
// VALIDATE
// ============================================================================

#[test]
fn validate_valid_cpf() {
    let home = TempDir::new().unwrap();
    pixdoc(&home)
        .args(["validate", "cpf", "123.456.789-09"])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn validate_invalid_cnpj_exits_with_one() {
    let home = TempDir::new().unwrap();
    pixdoc(&home)
        .args(["validate", "cnpj", "11.222.333/0001-82"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("invalid: Invalid CNPJ check digit"));
}

#[test]
fn validate_json_output() {
    let home = TempDir::new().unwrap();
    let output = pixdoc(&home)
        .args(["--output", "json", "validate", "email", "a@b"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["error"]["code"], "invalid_format");
}

#[test]
fn unknown_kind_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    pixdoc(&home)
        .args(["validate", "rg", "123"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

// ============================================================================
// FORMAT / CLASSIFY / MASK
// ============================================================================

#[test]
fn format_phone() {
    let home = TempDir::new().unwrap();
    pixdoc(&home)
        .args(["format", "phone", "11988887777"])
        .assert()
        .success()
        .stdout("(11) 98888-7777\n");
}

#[test]
fn format_auto_detects_cnpj() {
    let home = TempDir::new().unwrap();
    pixdoc(&home)
        .args(["format", "auto", "11222333000181"])
        .assert()
        .success()
        .stdout("11.222.333/0001-81\n");
}

#[test]
fn format_auto_rejects_unknown_document() {
    let home = TempDir::new().unwrap();
    pixdoc(&home)
        .args(["format", "auto", "123"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("could not detect"));
}

#[test]
fn classify_keys() {
    let home = TempDir::new().unwrap();
    for (key, expected) in [
        ("financeiro@loja.com.br", "email\n"),
        ("123e4567-e89b-12d3-a456-426614174000", "random\n"),
        ("minha-loja", "generic\n"),
    ] {
        pixdoc(&home)
            .args(["classify", key])
            .assert()
            .success()
            .stdout(expected);
    }

    pixdoc(&home)
        .args(["classify", "ab"])
        .assert()
        .code(1)
        .stdout("invalid\n");
}

#[test]
fn mask_rejects_extra_digit() {
    let home = TempDir::new().unwrap();
    pixdoc(&home)
        .args(["mask", "cpf", "123.456.789-09", "123.456.789-091"])
        .assert()
        .code(1)
        .stdout("123.456.789-09\n");

    pixdoc(&home)
        .args(["mask", "cpf", "1234567890", "12345678909"])
        .assert()
        .success()
        .stdout("123.456.789-09\n");
}

// ============================================================================
// FORMS
// ============================================================================

#[test]
fn check_profile_reports_every_error() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("profile.json");
    fs::write(
        &file,
        r#"{"displayName": "", "phone": "123", "pixKey": "ab", "cpf": "111.111.111-11"}"#,
    )
    .unwrap();

    pixdoc(&home)
        .arg("check-profile")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("display_name: This field is required [required]")
                .and(predicate::str::contains("phone: Phone number must have 10 or 11 digits"))
                .and(predicate::str::contains("[pix_key_too_short]"))
                .and(predicate::str::contains(
                    "cpf: CPF cannot have all digits equal [cpf_repeated_digits]",
                )),
        );
}

#[test]
fn check_profile_prints_normalized_record() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("profile.json");
    fs::write(
        &file,
        r#"{"displayName": " Loja ", "phone": "(11) 3333-4444", "pixKey": "loja@pix.com.br"}"#,
    )
    .unwrap();

    let output = pixdoc(&home)
        .args(["-o", "json", "check-profile"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["record"]["displayName"], "Loja");
    assert_eq!(report["record"]["phone"], "1133334444");
    assert!(report.get("errors").is_none());
}

#[test]
fn check_client_requires_name_and_phone() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("client.json");
    fs::write(&file, r#"{"email": "cliente@exemplo.com"}"#).unwrap();

    pixdoc(&home)
        .arg("check-client")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(
            "name: This field is required [required]\n\
             phone: This field is required [required]\n",
        );
}

#[test]
fn check_charge_rejects_installments_out_of_range() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("charge.json");
    fs::write(
        &file,
        r#"{"clientId": "c-1", "value": "120", "dueDate": "05/02/2027", "description": "Plano", "installments": "61"}"#,
    )
    .unwrap();

    pixdoc(&home)
        .arg("check-charge")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("installments: ")
                .and(predicate::str::contains("[installments_range]")),
        );
}

#[test]
fn check_charge_json_record() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("charge.json");
    fs::write(
        &file,
        r#"{"clientId": "c-1", "value": " 49.9 ", "dueDate": "05/02/2027", "description": " Plano ", "installments": "60"}"#,
    )
    .unwrap();

    let output = pixdoc(&home)
        .args(["--output", "json", "check-charge"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["record"]["value"], 49.9);
    assert_eq!(report["record"]["installments"], 60);
    assert_eq!(report["record"]["description"], "Plano");
}

#[test]
fn check_charge_reports_non_numeric_value() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("charge.json");
    fs::write(
        &file,
        r#"{"clientId": "c-1", "value": "R$ 10", "dueDate": "05/02/2027", "description": "Plano", "installments": "1"}"#,
    )
    .unwrap();

    pixdoc(&home)
        .arg("check-charge")
        .arg(&file)
        .assert()
        .code(1)
        .stdout("value: Must be a valid number [invalid_number]\n");
}

#[test]
fn malformed_form_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("broken.json");
    fs::write(&file, "{not json").unwrap();

    pixdoc(&home)
        .arg("check-profile")
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a valid form"));
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn output_format_from_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("pixdoc.toml");
    fs::write(&config, "output = \"json\"\n").unwrap();

    pixdoc(&home)
        .arg("--config")
        .arg(&config)
        .args(["classify", "minha-loja"])
        .assert()
        .success()
        .stdout("{\"key\":\"minha-loja\",\"valid\":true,\"kind\":\"generic\"}\n");
}

#[test]
fn default_config_location_is_read() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join("pixdoc")).unwrap();
    fs::write(home.path().join("pixdoc/config.toml"), "output = \"json\"\n").unwrap();

    pixdoc(&home)
        .args(["validate", "phone", "1133334444"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"kind\":\"phone\""));
}

#[test]
fn environment_overrides_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("pixdoc.toml");
    fs::write(&config, "output = \"json\"\n").unwrap();

    pixdoc(&home)
        .arg("--config")
        .arg(&config)
        .env("PIXDOC_OUTPUT", "text")
        .args(["classify", "minha-loja"])
        .assert()
        .success()
        .stdout("generic\n");
}

#[test]
fn missing_config_file() {
    let home = TempDir::new().unwrap();
    pixdoc(&home)
        .args(["--config", "/nonexistent/pixdoc.toml", "classify", "minha-loja"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn debug_logs_go_to_stderr() {
    let home = TempDir::new().unwrap();
    pixdoc(&home)
        .args(["--log-level", "debug", "validate", "cpf", "52998224725"])
        .assert()
        .success()
        .stdout("valid\n")
        .stderr(predicate::str::contains("validated value"));
}
