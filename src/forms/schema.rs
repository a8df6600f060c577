//! Field sets and value structs for the contact, login and register forms.

use super::form::{Field, FormValues};
use super::validation::{
    validate_city, validate_confirm_password, validate_email, validate_mobile,
    validate_password, validate_person_name, validate_pincode, validate_state, Validation,
};
use serde::Serialize;

/// Fields of the contact enquiry form.
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ContactField {
    FullName,
    Email,
    Mobile,
    State,
    City,
    Pincode,
}

impl Field for ContactField {
    const ALL: &'static [Self] = &[
        ContactField::FullName,
        ContactField::Email,
        ContactField::Mobile,
        ContactField::State,
        ContactField::City,
        ContactField::Pincode,
    ];

    fn label(self) -> &'static str {
        match self {
            ContactField::FullName => "Full name",
            ContactField::Email => "Email",
            ContactField::Mobile => "Mobile number",
            ContactField::State => "State",
            ContactField::City => "City",
            ContactField::Pincode => "Pincode",
        }
    }

    fn digits_only(self) -> bool {
        matches!(self, ContactField::Mobile | ContactField::Pincode)
    }

    fn max_len(self) -> Option<usize> {
        match self {
            ContactField::Mobile => Some(10),
            ContactField::Pincode => Some(6),
            _ => None,
        }
    }

    fn picker(self) -> bool {
        self == ContactField::State
    }
}

impl ContactField {
    /// Apply this field's rule to `value`.
    ///
    pub fn validate(self, value: &str) -> Validation {
        match self {
            ContactField::FullName => validate_person_name(value, self.label()),
            ContactField::Email => validate_email(value),
            ContactField::Mobile => validate_mobile(value, self.label()),
            ContactField::State => validate_state(value),
            ContactField::City => validate_city(value),
            ContactField::Pincode => validate_pincode(value),
        }
    }
}

/// Values of the contact enquiry form.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactValues {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub state: String,
    pub city: String,
    pub pincode: String,
}

impl FormValues for ContactValues {
    type Field = ContactField;

    fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Email => &self.email,
            ContactField::Mobile => &self.mobile,
            ContactField::State => &self.state,
            ContactField::City => &self.city,
            ContactField::Pincode => &self.pincode,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FullName => &mut self.full_name,
            ContactField::Email => &mut self.email,
            ContactField::Mobile => &mut self.mobile,
            ContactField::State => &mut self.state,
            ContactField::City => &mut self.city,
            ContactField::Pincode => &mut self.pincode,
        }
    }

    fn validate_field(&self, field: ContactField) -> Validation {
        field.validate(self.get(field))
    }
}

/// Fields of the login form.
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum LoginField {
    Email,
    Password,
}

impl Field for LoginField {
    const ALL: &'static [Self] = &[LoginField::Email, LoginField::Password];

    fn label(self) -> &'static str {
        match self {
            LoginField::Email => "Email",
            LoginField::Password => "Password",
        }
    }

    fn secret(self) -> bool {
        self == LoginField::Password
    }
}

impl LoginField {
    /// Apply this field's rule to `value`.
    ///
    pub fn validate(self, value: &str) -> Validation {
        match self {
            LoginField::Email => validate_email(value),
            LoginField::Password => validate_password(value),
        }
    }
}

/// Values of the login form.
///
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginValues {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginValues")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl FormValues for LoginValues {
    type Field = LoginField;

    fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    fn get_mut(&mut self, field: LoginField) -> &mut String {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    fn validate_field(&self, field: LoginField) -> Validation {
        field.validate(self.get(field))
    }
}

/// Fields of the registration form.
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum RegisterField {
    FirstName,
    LastName,
    Email,
    Mobile,
    ParentName,
    ParentMobile,
    State,
    City,
    Password,
    ConfirmPassword,
}

impl Field for RegisterField {
    const ALL: &'static [Self] = &[
        RegisterField::FirstName,
        RegisterField::LastName,
        RegisterField::Email,
        RegisterField::Mobile,
        RegisterField::ParentName,
        RegisterField::ParentMobile,
        RegisterField::State,
        RegisterField::City,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
    ];

    fn label(self) -> &'static str {
        match self {
            RegisterField::FirstName => "First name",
            RegisterField::LastName => "Last name",
            RegisterField::Email => "Email",
            RegisterField::Mobile => "Mobile number",
            RegisterField::ParentName => "Parent name",
            RegisterField::ParentMobile => "Parent mobile number",
            RegisterField::State => "State",
            RegisterField::City => "City",
            RegisterField::Password => "Password",
            RegisterField::ConfirmPassword => "Confirm password",
        }
    }

    fn digits_only(self) -> bool {
        matches!(self, RegisterField::Mobile | RegisterField::ParentMobile)
    }

    fn max_len(self) -> Option<usize> {
        self.digits_only().then_some(10)
    }

    fn picker(self) -> bool {
        self == RegisterField::State
    }

    fn secret(self) -> bool {
        matches!(self, RegisterField::Password | RegisterField::ConfirmPassword)
    }

    fn dependents(self) -> &'static [Self] {
        match self {
            RegisterField::Password => &[RegisterField::ConfirmPassword],
            _ => &[],
        }
    }
}

impl RegisterField {
    /// Apply this field's rule to `value`. Confirmation is checked against
    /// the password held in `siblings`.
    ///
    pub fn validate(self, value: &str, siblings: &RegisterValues) -> Validation {
        match self {
            RegisterField::FirstName
            | RegisterField::LastName
            | RegisterField::ParentName => validate_person_name(value, self.label()),
            RegisterField::Email => validate_email(value),
            RegisterField::Mobile | RegisterField::ParentMobile => {
                validate_mobile(value, self.label())
            }
            RegisterField::State => validate_state(value),
            RegisterField::City => validate_city(value),
            RegisterField::Password => validate_password(value),
            RegisterField::ConfirmPassword => validate_confirm_password(&siblings.password, value),
        }
    }
}

/// Values of the registration form.
///
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub parent_name: String,
    pub parent_mobile: String,
    pub state: String,
    pub city: String,
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

impl std::fmt::Debug for RegisterValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterValues")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("mobile", &self.mobile)
            .field("parent_name", &self.parent_name)
            .field("parent_mobile", &self.parent_mobile)
            .field("state", &self.state)
            .field("city", &self.city)
            .finish_non_exhaustive()
    }
}

impl FormValues for RegisterValues {
    type Field = RegisterField;

    fn get(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::FirstName => &self.first_name,
            RegisterField::LastName => &self.last_name,
            RegisterField::Email => &self.email,
            RegisterField::Mobile => &self.mobile,
            RegisterField::ParentName => &self.parent_name,
            RegisterField::ParentMobile => &self.parent_mobile,
            RegisterField::State => &self.state,
            RegisterField::City => &self.city,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn get_mut(&mut self, field: RegisterField) -> &mut String {
        match field {
            RegisterField::FirstName => &mut self.first_name,
            RegisterField::LastName => &mut self.last_name,
            RegisterField::Email => &mut self.email,
            RegisterField::Mobile => &mut self.mobile,
            RegisterField::ParentName => &mut self.parent_name,
            RegisterField::ParentMobile => &mut self.parent_mobile,
            RegisterField::State => &mut self.state,
            RegisterField::City => &mut self.city,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    fn validate_field(&self, field: RegisterField) -> Validation {
        field.validate(self.get(field), self)
    }
}
