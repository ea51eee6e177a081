//! Create/edit form for a user record

use std::collections::BTreeMap;

use super::entity::{Address, Company, User, UserId, UserSubmission};
use super::validation::{
    validate_company_name, validate_required, validate_website, FormField, UserValidationError,
};

/// Field-level validation failures, ordered by field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<FormField, UserValidationError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&UserValidationError> {
        self.0.get(&field)
    }

    /// Message for a field, if it failed
    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &UserValidationError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    fn record(&mut self, field: FormField, result: Result<(), UserValidationError>) {
        if let Err(error) = result {
            self.0.insert(field, error);
        }
    }
}

/// Whether the form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(UserId),
}

/// Editable user form
///
/// Holds the raw field values and the errors from the last submit attempt.
#[derive(Debug, Clone)]
pub struct UserForm {
    mode: FormMode,
    values: BTreeMap<FormField, String>,
    errors: FieldErrors,
}

impl UserForm {
    /// Empty form for a new record
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            values: FormField::ALL
                .iter()
                .map(|field| (*field, String::new()))
                .collect(),
            errors: FieldErrors::default(),
        }
    }

    /// Form seeded from an existing record
    ///
    /// When the record carries a username it replaces the seeded name. The
    /// name stays editable afterwards.
    pub fn edit(user: &User) -> Self {
        let mut form = Self::create();
        form.mode = FormMode::Edit(user.id());

        form.set(FormField::Name, user.name());
        form.set(FormField::Email, user.email());
        form.set(FormField::Phone, user.phone());
        form.set(FormField::Address, &user.address().street);
        form.set(FormField::City, &user.address().city);
        form.set(
            FormField::CompanyName,
            user.company().map(|c| c.name.as_str()).unwrap_or_default(),
        );
        form.set(FormField::Website, user.website().unwrap_or_default());

        if let Some(username) = user.username().filter(|u| !u.is_empty()) {
            form.set(FormField::Name, username);
        }

        form
    }

    /// Create-mode form for `None`, edit-mode form otherwise
    pub fn new(seed: Option<&User>) -> Self {
        match seed {
            Some(user) => Self::edit(user),
            None => Self::create(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Dialog title
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create User",
            FormMode::Edit(_) => "Edit User",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create User",
            FormMode::Edit(_) => "Update User",
        }
    }

    /// Run every field rule against the current values
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        for field in FormField::ALL.iter().filter(|f| f.is_required()) {
            errors.record(*field, validate_required(*field, self.value(*field)));
        }

        errors.record(
            FormField::CompanyName,
            validate_company_name(self.value(FormField::CompanyName)),
        );
        errors.record(
            FormField::Website,
            validate_website(self.value(FormField::Website)),
        );

        errors
    }

    /// Validate and, when every rule passes, produce the normalized record
    ///
    /// On failure the errors are kept on the form and returned; nothing is
    /// produced.
    pub fn submit(&mut self) -> Result<UserSubmission, FieldErrors> {
        let errors = self.validate();

        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        self.errors = FieldErrors::default();

        let company_name = self.value(FormField::CompanyName);
        let website = self.value(FormField::Website);

        Ok(UserSubmission {
            id: match self.mode {
                FormMode::Create => None,
                FormMode::Edit(id) => Some(id),
            },
            name: self.value(FormField::Name).to_string(),
            email: self.value(FormField::Email).to_string(),
            phone: self.value(FormField::Phone).to_string(),
            address: Address::new(self.value(FormField::Address), self.value(FormField::City)),
            company: (!company_name.is_empty()).then(|| Company::new(company_name)),
            website: (!website.is_empty()).then(|| website.to_string()),
        })
    }
}
