//! Validation engine for lead submissions.
//!
//! The single rule set shared by every boundary that accepts a raw lead:
//! required-ness, enumeration membership, the phone digit rule, the
//! passout-year bounds, plus normalization (trimming, email lower-casing,
//! default filling). Pure functions; all violated fields are reported
//! together so a form can render per-field errors in one pass.

use std::collections::BTreeMap;

use regex::Regex;

use crate::models::{
    Interest, LeadPayload, LeadSource, LeadStatus, NewLead, Qualification, DEFAULT_ASSIGNEE,
};

/// Field name -> human-readable message for every violated constraint.
pub type FieldErrors = BTreeMap<String, String>;

/// Inclusive bounds for `passoutYear`.
pub const PASSOUT_YEAR_MIN: i32 = 1950;
pub const PASSOUT_YEAR_MAX: i32 = 2030;

/// Validate and normalize a raw lead submission.
///
/// On success returns a [`NewLead`] with strings trimmed, the email
/// lower-cased, and defaults filled for absent fields. On failure returns
/// the complete set of field errors, never just the first one.
pub fn validate(payload: &LeadPayload) -> Result<NewLead, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = match trim_nonempty(&payload.name) {
        Some(name) => name,
        None => {
            errors.insert("name".to_string(), "Name is required".to_string());
            String::new()
        }
    };

    let email = match trim_nonempty(&payload.email) {
        Some(email) => {
            let email = email.to_lowercase();
            if !is_valid_email(&email) {
                errors.insert("email".to_string(), "Invalid email format".to_string());
            }
            email
        }
        None => {
            errors.insert("email".to_string(), "Email is required".to_string());
            String::new()
        }
    };

    let phone = trim_nonempty(&payload.phone);
    if let Some(ref phone) = phone {
        // Same rule as the submission form: digits only, 7 to 15 of them.
        let phone_regex = Regex::new(r"^\d{7,15}$").unwrap();
        if !phone_regex.is_match(phone) {
            errors.insert("phone".to_string(), "Phone must be 7-15 digits".to_string());
        }
    }

    // Enumeration membership is exact and case-sensitive.
    let source = match payload.source.as_deref() {
        None => LeadSource::default(),
        Some(value) => LeadSource::from_wire(value).unwrap_or_else(|| {
            errors.insert("source".to_string(), enum_error(value, "source", &LeadSource::ALL));
            LeadSource::default()
        }),
    };

    let status = match payload.status.as_deref() {
        None => LeadStatus::default(),
        Some(value) => LeadStatus::from_wire(value).unwrap_or_else(|| {
            errors.insert("status".to_string(), enum_error(value, "status", &LeadStatus::ALL));
            LeadStatus::default()
        }),
    };

    let qualification = match payload.qualification.as_deref() {
        None => Qualification::default(),
        Some(value) => Qualification::from_wire(value).unwrap_or_else(|| {
            errors.insert(
                "qualification".to_string(),
                enum_error(value, "qualification", &Qualification::ALL),
            );
            Qualification::default()
        }),
    };

    let interest = match payload.interest.as_deref() {
        None => Interest::default(),
        Some(value) => Interest::from_wire(value).unwrap_or_else(|| {
            errors.insert(
                "interest".to_string(),
                enum_error(value, "interest", &Interest::ALL),
            );
            Interest::default()
        }),
    };

    let passout_year = payload.passout_year;
    if let Some(year) = passout_year {
        if !(PASSOUT_YEAR_MIN..=PASSOUT_YEAR_MAX).contains(&year) {
            errors.insert("passoutYear".to_string(), "Invalid year".to_string());
        }
    }

    let assigned_to = trim_nonempty(&payload.assigned_to)
        .unwrap_or_else(|| DEFAULT_ASSIGNEE.to_string());

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewLead {
        name,
        email,
        phone,
        company: trim_nonempty(&payload.company),
        source,
        notes: trim_nonempty(&payload.notes),
        opt_in: payload.opt_in.unwrap_or(true),
        status,
        qualification,
        interest,
        assigned_to,
        city: trim_nonempty(&payload.city),
        passout_year,
        heard_from: trim_nonempty(&payload.heard_from),
    })
}

/// Trim an optional field; whitespace-only input counts as absent.
fn trim_nonempty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn enum_error(value: &str, field: &str, allowed: &[&str]) -> String {
    format!(
        "'{}' is not a valid {} (expected one of: {})",
        value,
        field,
        allowed.join(", ")
    )
}

/// Check email syntax with a simplified RFC 5322 pattern.
pub fn is_valid_email(email: &str) -> bool {
    let email_regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap();

    email_regex.is_match(email)
}
