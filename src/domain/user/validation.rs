//! User validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Editable fields of the user form, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Address,
    City,
    CompanyName,
    Website,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Address,
        FormField::City,
        FormField::CompanyName,
        FormField::Website,
    ];

    /// Human-readable label, also used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::City => "City",
            Self::CompanyName => "Company Name",
            Self::Website => "Website",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::CompanyName | Self::Website)
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User ID must be a positive integer, got '{0}'")]
    InvalidId(String),

    #[error("{0} is required")]
    Required(FormField),

    #[error("Company Name must be at least {0} characters")]
    CompanyNameTooShort(usize),

    #[error("Invalid URL")]
    InvalidWebsite,
}

const MIN_COMPANY_NAME_LENGTH: usize = 3;

static WEBSITE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(ftp|http|https)://[^ "]+$"#).expect("website pattern must compile")
});

/// Validate a required field
pub fn validate_required(field: FormField, value: &str) -> Result<(), UserValidationError> {
    if value.is_empty() {
        return Err(UserValidationError::Required(field));
    }

    Ok(())
}

/// Validate a company name
///
/// Rules:
/// - Empty is allowed (the company is optional)
/// - Otherwise at least 3 characters
pub fn validate_company_name(name: &str) -> Result<(), UserValidationError> {
    if !name.is_empty() && name.chars().count() < MIN_COMPANY_NAME_LENGTH {
        return Err(UserValidationError::CompanyNameTooShort(
            MIN_COMPANY_NAME_LENGTH,
        ));
    }

    Ok(())
}

/// Validate a website
///
/// Rules:
/// - Empty is allowed
/// - Otherwise `ftp://`, `http://` or `https://` followed by at least one
///   character that is neither a space nor a double quote
pub fn validate_website(website: &str) -> Result<(), UserValidationError> {
    if !website.is_empty() && !WEBSITE_PATTERN.is_match(website) {
        return Err(UserValidationError::InvalidWebsite);
    }

    Ok(())
}
