//! Subcommand implementations and result reporting.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Subcommand, ValueEnum};
use serde::Serialize;
use serde::de::DeserializeOwned;

use pixdoc_validator::foundation::{Validate, ValidationError, ValidationErrors};
use pixdoc_validator::validators::{
    BrPhone, Cnpj, Cpf, Email, PixKey, count_digits, is_valid_phone,
};
use pixdoc_validator::{
    ChargeForm, ClientForm, DocumentKind, PixKeyKind, ProfileForm, mask_input,
};

use crate::config::OutputFormat;
use crate::error::CliError;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a value with one validator (exit code 1 when invalid)
    Validate {
        kind: ValidateKind,
        value: String,
    },

    /// Apply a document's display mask
    Format {
        kind: FormatKind,
        value: String,
    },

    /// Print which rule accepts a PIX key
    Classify { key: String },

    /// Apply one keystroke to a masked input field
    Mask {
        /// cpf, cnpj or phone
        kind: DocumentKind,
        /// Value currently shown in the field
        previous: String,
        /// Raw field text after the edit
        typed: String,
    },

    /// Validate a profile form stored as JSON
    CheckProfile { file: PathBuf },

    /// Validate a client form stored as JSON
    CheckClient { file: PathBuf },

    /// Validate a charge form stored as JSON
    CheckCharge { file: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidateKind {
    Email,
    Phone,
    Cpf,
    Cnpj,
    Pix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatKind {
    Phone,
    Cpf,
    Cnpj,
    /// CPF or CNPJ by check digits, otherwise phone
    Auto,
}

// ============================================================================
// REPORTS
// ============================================================================

/// A command result, printable as text or JSON.
trait Report: Serialize {
    fn passed(&self) -> bool;

    fn text(&self) -> String;
}

#[derive(Serialize)]
struct ValidateReport<'a> {
    kind: &'static str,
    value: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ValidationError>,
}

impl Report for ValidateReport<'_> {
    fn passed(&self) -> bool {
        self.valid
    }

    fn text(&self) -> String {
        match &self.error {
            None => "valid".to_owned(),
            Some(error) => {
                let mut text = format!("invalid: {}", error.message);
                for alternative in &error.nested {
                    text.push_str("\n  - ");
                    text.push_str(&alternative.message);
                }
                text
            }
        }
    }
}

#[derive(Serialize)]
struct FormatReport<'a> {
    kind: DocumentKind,
    input: &'a str,
    formatted: String,
}

impl Report for FormatReport<'_> {
    fn passed(&self) -> bool {
        true
    }

    fn text(&self) -> String {
        self.formatted.clone()
    }
}

#[derive(Serialize)]
struct ClassifyReport<'a> {
    key: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<PixKeyKind>,
}

impl Report for ClassifyReport<'_> {
    fn passed(&self) -> bool {
        self.valid
    }

    fn text(&self) -> String {
        self.kind.map_or("invalid", PixKeyKind::as_str).to_owned()
    }
}

#[derive(Serialize)]
struct MaskReport {
    kind: DocumentKind,
    accepted: bool,
    shown: String,
}

impl Report for MaskReport {
    fn passed(&self) -> bool {
        self.accepted
    }

    fn text(&self) -> String {
        self.shown.clone()
    }
}

#[derive(Serialize)]
struct FormReport<T> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<T>,
    #[serde(skip_serializing_if = "ValidationErrors::is_empty")]
    errors: ValidationErrors,
}

impl<T: Serialize> Report for FormReport<T> {
    fn passed(&self) -> bool {
        self.valid
    }

    fn text(&self) -> String {
        if !self.valid {
            return self.errors.to_string();
        }

        let mut text = "valid".to_owned();
        if let Ok(serde_json::Value::Object(fields)) = serde_json::to_value(&self.record) {
            for (name, value) in fields {
                let value = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                text.push_str(&format!("\n{name}: {value}"));
            }
        }
        text
    }
}

impl<T> FormReport<T> {
    fn from_result(result: Result<T, ValidationErrors>) -> Self {
        match result {
            Ok(record) => Self {
                valid: true,
                record: Some(record),
                errors: ValidationErrors::new(),
            },
            Err(errors) => Self {
                valid: false,
                record: None,
                errors,
            },
        }
    }
}

fn emit<R: Report>(output: OutputFormat, report: &R) -> Result<ExitCode, CliError> {
    match output {
        OutputFormat::Text => println!("{}", report.text()),
        OutputFormat::Json => {
            let json = serde_json::to_string(report).map_err(CliError::Report)?;
            println!("{json}");
        }
    }

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

// ============================================================================
// DISPATCH
// ============================================================================

impl Command {
    /// Runs the command and prints its report.
    pub fn run(self, output: OutputFormat) -> Result<ExitCode, CliError> {
        match self {
            Command::Validate { kind, value } => emit(output, &validate(kind, &value)),
            Command::Format { kind, value } => emit(output, &format(kind, &value)?),
            Command::Classify { key } => {
                let kind = PixKey::new().classify(&key);
                let report = ClassifyReport {
                    key: &key,
                    valid: kind.is_some(),
                    kind,
                };
                emit(output, &report)
            }
            Command::Mask {
                kind,
                previous,
                typed,
            } => {
                let accepted = count_digits(&typed) <= kind.max_digits();
                let shown = mask_input(kind, &previous, &typed);
                emit(
                    output,
                    &MaskReport {
                        kind,
                        accepted,
                        shown,
                    },
                )
            }
            Command::CheckProfile { file } => {
                let form: ProfileForm = read_form(&file)?;
                emit(output, &FormReport::from_result(form.normalize()))
            }
            Command::CheckClient { file } => {
                let form: ClientForm = read_form(&file)?;
                emit(output, &FormReport::from_result(form.normalize()))
            }
            Command::CheckCharge { file } => {
                let form: ChargeForm = read_form(&file)?;
                emit(output, &FormReport::from_result(form.normalize()))
            }
        }
    }
}

fn validate(kind: ValidateKind, value: &str) -> ValidateReport<'_> {
    let pix = PixKey::new();
    let (name, validator): (&'static str, &dyn Validate<Input = str>) = match kind {
        ValidateKind::Email => ("email", &Email),
        ValidateKind::Phone => ("phone", &BrPhone),
        ValidateKind::Cpf => ("cpf", &Cpf),
        ValidateKind::Cnpj => ("cnpj", &Cnpj),
        ValidateKind::Pix => ("pix", &pix),
    };

    let error = validator.validate(value).err();
    tracing::debug!(kind = name, valid = error.is_none(), "validated value");
    ValidateReport {
        kind: name,
        value,
        valid: error.is_none(),
        error,
    }
}

fn format(kind: FormatKind, value: &str) -> Result<FormatReport<'_>, CliError> {
    let kind = match kind {
        FormatKind::Phone => DocumentKind::Phone,
        FormatKind::Cpf => DocumentKind::Cpf,
        FormatKind::Cnpj => DocumentKind::Cnpj,
        FormatKind::Auto => DocumentKind::detect(value)
            .or_else(|| is_valid_phone(value).then_some(DocumentKind::Phone))
            .ok_or_else(|| CliError::UnknownDocument(value.to_owned()))?,
    };

    Ok(FormatReport {
        kind,
        input: value,
        formatted: kind.format(value),
    })
}

fn read_form<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "read form");
    serde_json::from_str(&contents).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}
