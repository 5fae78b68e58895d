//! Profile, client and charge form checks.
//!
//! These run the document validators over whole forms the way the billing
//! app's save buttons do: required fields first, optional documents only
//! when filled in. Every failing field is reported, each error tagged with
//! its field name.
//!
//! "Filled in" differs per form. The profile form skips optional documents
//! that are blank after trimming; the client form only skips empty ones, so
//! a CPF of three spaces is an invalid CPF there.

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};
use crate::validators::{
    NumberRange, br_phone, cnpj, cpf, email, extract_digits, not_blank, numeric, parse_number,
    pix_key, trim_blank,
};

/// Adds the error of a required field: blank input is `required`, anything
/// else must pass `rule`.
fn require<V>(errors: &mut ValidationErrors, field: &'static str, value: &str, rule: V)
where
    V: Validate<Input = str>,
{
    let outcome = if trim_blank(value).is_empty() {
        Err(ValidationError::required(field))
    } else {
        rule.validate(value)
    };
    if let Err(e) = outcome {
        errors.add(e.with_field(field));
    }
}

/// Adds the error of an optional field: blank input is skipped.
fn optional<V>(errors: &mut ValidationErrors, field: &'static str, value: &str, rule: V)
where
    V: Validate<Input = str>,
{
    if let Err(e) = rule.optional().validate(value) {
        errors.add(e.with_field(field));
    }
}

/// Adds the error of an optional field: only the empty string is skipped.
fn when_filled<V>(errors: &mut ValidationErrors, field: &'static str, value: &str, rule: V)
where
    V: Validate<Input = str>,
{
    if value.is_empty() {
        return;
    }
    if let Err(e) = rule.validate(value) {
        errors.add(e.with_field(field));
    }
}

fn trimmed_or_none(value: &str) -> Option<String> {
    let value = trim_blank(value);
    (!value.is_empty()).then(|| value.to_owned())
}

fn digits_or_none(value: &str) -> Option<String> {
    let digits = extract_digits(value);
    (!digits.is_empty()).then_some(digits)
}

// ============================================================================
// PROFILE
// ============================================================================

/// The account owner's profile, as typed into the profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub display_name: String,
    /// WhatsApp number used to send charges.
    pub phone: String,
    /// Key the owner receives payments on.
    pub pix_key: String,
    pub cpf: String,
    pub cnpj: String,
}

/// A validated profile in storage form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProfile {
    pub display_name: String,
    /// Digits only.
    pub phone: String,
    pub pix_key: String,
    /// Digits only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    /// Digits only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
}

impl ProfileForm {
    /// Checks every field and reports all failures in form order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        require(&mut errors, "display_name", &self.display_name, not_blank());
        require(&mut errors, "phone", &self.phone, br_phone());
        require(&mut errors, "pix_key", &self.pix_key, pix_key());
        optional(&mut errors, "cpf", &self.cpf, cpf());
        optional(&mut errors, "cnpj", &self.cnpj, cnpj());

        tracing::debug!(errors = errors.len(), "checked profile form");
        errors.into_result(())
    }

    /// Validates the form and converts it to storage form.
    pub fn normalize(&self) -> Result<NormalizedProfile, ValidationErrors> {
        self.validate()?;
        Ok(NormalizedProfile {
            display_name: trim_blank(&self.display_name).to_owned(),
            phone: extract_digits(&self.phone),
            pix_key: trim_blank(&self.pix_key).to_owned(),
            cpf: digits_or_none(&self.cpf),
            cnpj: digits_or_none(&self.cnpj),
        })
    }
}

// ============================================================================
// CLIENT
// ============================================================================

/// A billed client, as typed into the client form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub cpf: String,
    pub cnpj: String,
    pub address: String,
    pub notes: String,
}

/// A validated client record: trimmed text, blank optional fields dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedClient {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ClientForm {
    /// Name and phone are required; the phone is only checked for presence.
    /// E-mail, CPF and CNPJ are validated unless empty.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        require(&mut errors, "name", &self.name, not_blank());
        require(&mut errors, "phone", &self.phone, not_blank());
        when_filled(&mut errors, "email", &self.email, email());
        when_filled(&mut errors, "cpf", &self.cpf, cpf());
        when_filled(&mut errors, "cnpj", &self.cnpj, cnpj());

        tracing::debug!(errors = errors.len(), "checked client form");
        errors.into_result(())
    }

    /// Validates the form and converts it to a client record.
    pub fn normalize(&self) -> Result<NormalizedClient, ValidationErrors> {
        self.validate()?;
        Ok(NormalizedClient {
            name: trim_blank(&self.name).to_owned(),
            phone: trim_blank(&self.phone).to_owned(),
            email: trimmed_or_none(&self.email),
            cpf: trimmed_or_none(&self.cpf),
            cnpj: trimmed_or_none(&self.cnpj),
            address: trimmed_or_none(&self.address),
            notes: trimmed_or_none(&self.notes),
        })
    }
}

// ============================================================================
// CHARGE
// ============================================================================

/// Fewest installments a charge can be split into.
pub const MIN_INSTALLMENTS: f64 = 1.0;
/// Most installments a charge can be split into.
pub const MAX_INSTALLMENTS: f64 = 60.0;

/// Installment count: a number in `MIN_INSTALLMENTS..=MAX_INSTALLMENTS`.
#[derive(Debug, Clone, Copy)]
struct Installments;

impl Validate for Installments {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        NumberRange::new(MIN_INSTALLMENTS, MAX_INSTALLMENTS)
            .validate(input)
            .map_err(|e| {
                if e.code == "out_of_range" {
                    ValidationError {
                        code: "installments_range".into(),
                        message: "Installments must be a number between 1 and 60".into(),
                        ..e
                    }
                } else {
                    e
                }
            })
    }
}

/// A recurring charge, as typed into the charge form.
///
/// Amount and installment count are free text, checked as numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChargeForm {
    /// Identifier of the client picked in the form.
    pub client_id: String,
    pub value: String,
    /// First due date, `dd/MM/yyyy`.
    pub due_date: String,
    pub description: String,
    pub installments: String,
}

/// A validated charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCharge {
    pub client_id: String,
    pub value: f64,
    pub due_date: String,
    pub description: String,
    /// Number of monthly charges to create. Fractional counts round up.
    pub installments: u32,
}

impl ChargeForm {
    /// Checks every field and reports all failures in form order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.client_id.is_empty() {
            errors.add(ValidationError::required("client_id"));
        }
        require(&mut errors, "value", &self.value, numeric());
        require(&mut errors, "due_date", &self.due_date, not_blank());
        require(&mut errors, "description", &self.description, not_blank());
        require(&mut errors, "installments", &self.installments, Installments);

        tracing::debug!(errors = errors.len(), "checked charge form");
        errors.into_result(())
    }

    /// Validates the form and converts its text fields to numbers.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn normalize(&self) -> Result<NormalizedCharge, ValidationErrors> {
        self.validate()?;
        // Both parse: validate() accepted them as numbers.
        let value = parse_number(&self.value).unwrap_or_default();
        let installments = parse_number(&self.installments).unwrap_or(MIN_INSTALLMENTS);
        Ok(NormalizedCharge {
            client_id: self.client_id.clone(),
            value,
            due_date: trim_blank(&self.due_date).to_owned(),
            description: trim_blank(&self.description).to_owned(),
            installments: installments.ceil() as u32,
        })
    }
}
