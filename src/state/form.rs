//! Form editing state types.
//!
//! Keystrokes are turned into whole new field values here and then handed to
//! the form controllers, which own validation.

use crate::forms::{regions::cycle_state, Field, FormState, FormValues};
use std::marker::PhantomData;

/// Specifying edits applied to the focused field.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
    Clear,
    Cycle { forward: bool },
}

/// Return the value `field` would hold after `edit`, or `None` when the edit
/// does not apply to the field. Picker fields only accept cycling and
/// clearing; typed fields never cycle.
///
pub fn edited_value<V: FormValues>(
    form: &FormState<V>,
    field: V::Field,
    edit: FieldEdit,
) -> Option<String> {
    let current = form.value(field);
    match edit {
        FieldEdit::Cycle { forward } if field.picker() => {
            Some(cycle_state(current, forward).to_string())
        }
        FieldEdit::Cycle { .. } => None,
        FieldEdit::Clear => Some(String::new()),
        FieldEdit::Insert(_) | FieldEdit::Backspace if field.picker() => None,
        FieldEdit::Insert(c) => {
            let mut value = current.to_string();
            value.push(c);
            Some(value)
        }
        FieldEdit::Backspace => {
            let mut value = current.to_string();
            value.pop()?;
            Some(value)
        }
    }
}

/// Position of the focus within a form's fields.
///
#[derive(Debug, Clone, Copy)]
pub struct FieldCursor<F: Field> {
    index: usize,
    field: PhantomData<F>,
}

impl<F: Field> Default for FieldCursor<F> {
    fn default() -> Self {
        FieldCursor {
            index: 0,
            field: PhantomData,
        }
    }
}

impl<F: Field> FieldCursor<F> {
    pub fn current(&self) -> F {
        F::ALL[self.index]
    }

    /// Move to the next field, wrapping around. Returns the field that lost
    /// focus.
    ///
    pub fn next(&mut self) -> F {
        let left = self.current();
        self.index = (self.index + 1) % F::ALL.len();
        left
    }

    /// Move to the previous field, wrapping around. Returns the field that
    /// lost focus.
    ///
    pub fn previous(&mut self) -> F {
        let left = self.current();
        self.index = match self.index {
            0 => F::ALL.len() - 1,
            index => index - 1,
        };
        left
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
