//! New-user draft and its client-side validation.
//!
//! Validation here is advisory: it gates the submit action and produces the
//! per-field messages, while the user service stays authoritative.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::user::NewUser;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*@([A-Za-z0-9_-]+\.)+[A-Za-z]{2,7}$")
        .expect("email pattern is a valid regex")
});

/// Form fields of the new-user draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Password];

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }
}

/// In-progress input for a new user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Which fields have lost focus at least once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touched {
    pub first_name: bool,
    pub last_name: bool,
    pub email: bool,
    pub password: bool,
}

impl Touched {
    pub fn mark(&mut self, field: Field) {
        *self.slot(field) = true;
    }

    pub fn is_touched(&self, field: Field) -> bool {
        match field {
            Field::FirstName => self.first_name,
            Field::LastName => self.last_name,
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    fn slot(&mut self, field: Field) -> &mut bool {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}

/// Why a field fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    PasswordTooShort,
}

impl FieldError {
    pub fn message(self, field: Field) -> String {
        match self {
            FieldError::Required => format!("{} is required.", field.label()),
            FieldError::InvalidEmail => "Invalid email format.".to_string(),
            FieldError::PasswordTooShort => {
                format!("Password min of {} characters required", MIN_PASSWORD_LEN)
            }
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl Draft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        };
        *slot = value.into();
    }

    /// Check a single field, regardless of whether it was touched.
    pub fn check(&self, field: Field) -> Option<FieldError> {
        let value = self.value(field);
        if value.is_empty() {
            return Some(FieldError::Required);
        }
        match field {
            Field::Password if value.chars().count() < MIN_PASSWORD_LEN => {
                Some(FieldError::PasswordTooShort)
            }
            Field::Email if !is_valid_email(value) => Some(FieldError::InvalidEmail),
            _ => None,
        }
    }

    /// Every failing field, in form order.
    pub fn validate(&self) -> Vec<(Field, FieldError)> {
        Field::ALL
            .iter()
            .filter_map(|&field| self.check(field).map(|err| (field, err)))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|&field| self.check(field).is_none())
    }

    /// The message to display for `field`, only once it has been touched.
    pub fn error_message(&self, field: Field, touched: &Touched) -> Option<String> {
        if !touched.is_touched(field) {
            return None;
        }
        self.check(field).map(|err| err.message(field))
    }

    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}
