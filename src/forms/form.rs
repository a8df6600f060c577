//! Generic per-form state: values, cached field errors and touched fields.
//!
//! A form is described by a closed field enum implementing [`Field`] and a
//! values struct implementing [`FormValues`]. [`FormState`] then provides the
//! change/blur/validate mechanics shared by every form in the application.

use super::validation::{is_digits_only, Validation, ValidationError};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// A closed set of named form fields.
///
pub trait Field: Copy + Eq + Hash + Debug + 'static {
    /// Every field in display order.
    const ALL: &'static [Self];

    /// Human readable label.
    fn label(self) -> &'static str;

    /// Whether keystrokes other than ASCII digits are rejected.
    fn digits_only(self) -> bool {
        false
    }

    /// Longest accepted value, in characters.
    fn max_len(self) -> Option<usize> {
        None
    }

    /// Whether the value is picked from the list of states instead of typed.
    fn picker(self) -> bool {
        false
    }

    /// Whether the value should be masked when displayed.
    fn secret(self) -> bool {
        false
    }

    /// Fields whose rule reads this field's value.
    fn dependents(self) -> &'static [Self] {
        &[]
    }
}

/// Typed storage for the values of one form.
///
pub trait FormValues: Default + Clone + Debug {
    type Field: Field;

    fn get(&self, field: Self::Field) -> &str;

    fn get_mut(&mut self, field: Self::Field) -> &mut String;

    /// Apply the rule for `field` to its current value.
    fn validate_field(&self, field: Self::Field) -> Validation;

    /// Apply every rule and collect the failures.
    ///
    fn validate_all(&self) -> FieldErrors<Self::Field> {
        let mut errors = FieldErrors::new();
        for field in Self::Field::ALL {
            errors.set(*field, self.validate_field(*field));
        }
        errors
    }

    /// Return a copy with surrounding whitespace removed from every field
    /// that is not secret.
    ///
    fn sanitized(&self) -> Self {
        let mut sanitized = self.clone();
        for field in Self::Field::ALL {
            if !field.secret() {
                let value = sanitized.get_mut(*field);
                *value = value.trim().to_string();
            }
        }
        sanitized
    }
}

/// Mapping from field to its current validation error. Absent means valid.
///
#[derive(Debug, Clone, PartialEq)]
pub struct FieldErrors<F: Field> {
    errors: HashMap<F, ValidationError>,
}

impl<F: Field> Default for FieldErrors<F> {
    fn default() -> Self {
        FieldErrors {
            errors: HashMap::new(),
        }
    }
}

impl<F: Field> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the outcome of a rule, clearing the entry when it passed.
    ///
    pub fn set(&mut self, field: F, outcome: Validation) -> &mut Self {
        match outcome {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(error) => {
                self.errors.insert(field, error);
            }
        }
        self
    }

    pub fn get(&self, field: F) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Returns true if any field carries an error.
    ///
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over failing fields in display order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (F, &ValidationError)> {
        F::ALL
            .iter()
            .filter_map(move |field| self.errors.get(field).map(|error| (*field, error)))
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// Values, errors and touched fields of one mounted form.
///
#[derive(Debug, Clone)]
pub struct FormState<V: FormValues> {
    values: V,
    errors: FieldErrors<V::Field>,
    touched: HashSet<V::Field>,
}

impl<V: FormValues> Default for FormState<V> {
    fn default() -> Self {
        FormState {
            values: V::default(),
            errors: FieldErrors::new(),
            touched: HashSet::new(),
        }
    }
}

impl<V: FormValues> FormState<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &V {
        &self.values
    }

    pub fn value(&self, field: V::Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors<V::Field> {
        &self.errors
    }

    pub fn is_touched(&self, field: V::Field) -> bool {
        self.touched.contains(&field)
    }

    /// Store a new value for `field`. Returns false when the value was
    /// rejected by the field's input filter.
    ///
    pub fn change(&mut self, field: V::Field, value: impl Into<String>) -> bool {
        let value = value.into();
        if field.digits_only() && !is_digits_only(&value) {
            return false;
        }
        if field.max_len().is_some_and(|max| value.chars().count() > max) {
            return false;
        }
        *self.values.get_mut(field) = value;
        if self.is_touched(field) {
            self.revalidate(field);
        }
        for dependent in field.dependents() {
            if self.is_touched(*dependent) {
                self.revalidate(*dependent);
            }
        }
        true
    }

    /// Mark `field` as visited and validate it.
    ///
    pub fn blur(&mut self, field: V::Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// Mark every field touched and validate the whole form. Returns true if
    /// the form is valid.
    ///
    pub fn validate_all(&mut self) -> bool {
        self.touched.extend(V::Field::ALL.iter().copied());
        self.errors = self.values.validate_all();
        !self.errors.has_errors()
    }

    /// The error to display beneath `field`, if any.
    ///
    pub fn visible_error(&self, field: V::Field) -> Option<&ValidationError> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Return to empty values with no errors and nothing touched.
    ///
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn revalidate(&mut self, field: V::Field) {
        let outcome = self.values.validate_field(field);
        self.errors.set(field, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::schema::{ContactField, ContactValues, RegisterField, RegisterValues};

    #[test]
    fn change_without_touch_does_not_validate() {
        let mut form = FormState::<ContactValues>::new();
        assert!(form.change(ContactField::Email, "nope"));
        assert_eq!(form.value(ContactField::Email), "nope");
        assert!(form.errors().is_empty());
        assert!(form.visible_error(ContactField::Email).is_none());
    }

    #[test]
    fn blur_marks_touched_and_validates() {
        let mut form = FormState::<ContactValues>::new();
        form.blur(ContactField::FullName);
        assert!(form.is_touched(ContactField::FullName));
        assert_eq!(
            form.visible_error(ContactField::FullName),
            Some(&ValidationError::Required { label: "Full name" })
        );
    }

    #[test]
    fn touched_field_revalidates_on_change() {
        let mut form = FormState::<ContactValues>::new();
        form.change(ContactField::City, "P");
        form.blur(ContactField::City);
        assert!(form.visible_error(ContactField::City).is_some());
        form.change(ContactField::City, "Pune");
        assert!(form.visible_error(ContactField::City).is_none());
    }

    #[test]
    fn values_longer_than_max_len_are_rejected() {
        let mut form = FormState::<ContactValues>::new();
        assert!(form.change(ContactField::Pincode, "411001"));
        assert!(!form.change(ContactField::Pincode, "4110012"));
        assert_eq!(form.value(ContactField::Pincode), "411001");
    }

    #[test]
    fn digits_only_fields_reject_other_input() {
        let mut form = FormState::<ContactValues>::new();
        assert!(form.change(ContactField::Mobile, "98"));
        assert!(!form.change(ContactField::Mobile, "98a"));
        assert_eq!(form.value(ContactField::Mobile), "98");
        assert!(!form.change(ContactField::Pincode, "41 1"));
        assert_eq!(form.value(ContactField::Pincode), "");
        assert!(form.change(ContactField::Mobile, ""));
        assert_eq!(form.value(ContactField::Mobile), "");
    }

    #[test]
    fn rejected_change_leaves_error_untouched() {
        let mut form = FormState::<ContactValues>::new();
        form.blur(ContactField::Mobile);
        let before = form.errors().clone();
        assert!(!form.change(ContactField::Mobile, "x"));
        assert_eq!(form.errors(), &before);
    }

    #[test]
    fn validate_all_touches_everything() {
        let mut form = FormState::<ContactValues>::new();
        assert!(!form.validate_all());
        for field in ContactField::ALL {
            assert!(form.is_touched(*field));
        }
        // Pincode is optional.
        assert_eq!(form.errors().len(), ContactField::ALL.len() - 1);
        assert!(form.visible_error(ContactField::Pincode).is_none());
    }

    #[test]
    fn password_change_revalidates_touched_confirmation() {
        let mut form = FormState::<RegisterValues>::new();
        form.change(RegisterField::Password, "Abcd1234");
        form.change(RegisterField::ConfirmPassword, "Abcd1234");
        form.blur(RegisterField::ConfirmPassword);
        assert!(form.visible_error(RegisterField::ConfirmPassword).is_none());
        form.change(RegisterField::Password, "Abcd12345");
        assert_eq!(
            form.visible_error(RegisterField::ConfirmPassword),
            Some(&ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = FormState::<ContactValues>::new();
        form.change(ContactField::City, "Pune");
        form.validate_all();
        form.reset();
        assert_eq!(form.values(), &ContactValues::default());
        assert!(form.errors().is_empty());
        assert!(!form.is_touched(ContactField::City));
    }

    #[test]
    fn field_errors_iterate_in_display_order() {
        let values = ContactValues::default();
        let errors = values.validate_all();
        let fields: Vec<ContactField> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                ContactField::FullName,
                ContactField::Email,
                ContactField::Mobile,
                ContactField::State,
                ContactField::City,
            ]
        );
    }

    #[test]
    fn sanitized_trims_all_but_secrets() {
        let mut values = RegisterValues::default();
        values.first_name = "  Asha ".to_string();
        values.password = " Abcd1234 ".to_string();
        let sanitized = values.sanitized();
        assert_eq!(sanitized.first_name, "Asha");
        assert_eq!(sanitized.password, " Abcd1234 ");
    }
}
