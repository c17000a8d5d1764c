//! Builds a [`System`] from text fields, as typed into an input form.

use std::fmt;

use crate::{Error, System};

/// Position of a text field. Displayed from one, e.g. `A[2][3]` or `b[4]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Coefficient { row: usize, col: usize },
    Rhs { row: usize },
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Coefficient { row, col } => write!(f, "A[{}][{}]", row + 1, col + 1),
            Field::Rhs { row } => write!(f, "b[{}]", row + 1),
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum InputError {
    #[error("The field {field} is empty")]
    Empty { field: Field },

    #[error("The value \"{text}\" in {field} is not numeric")]
    NotNumeric { field: Field, text: String },

    #[error("The value \"{text}\" in {field} is not a finite number")]
    NotFinite { field: Field, text: String },
}

/// Parses `n` rows of `n` coefficient strings and `n` right-hand side strings.
///
/// Fields are trimmed and a comma is accepted as the decimal separator. The grid shape is checked
/// before any field is parsed, then fields are read row by row, each row's coefficients before
/// its right-hand side, and the first bad field is reported.
pub fn parse_system<S, R>(coefficients: &[R], rhs: &[S]) -> Result<System<f64>, Error>
where
    S: AsRef<str>,
    R: AsRef<[S]>,
{
    let n = elimination::validate_dimensions(coefficients, rhs)?;

    let mut a = Vec::with_capacity(n);
    let mut b = Vec::with_capacity(n);
    for (row, (fields, rhs)) in coefficients.iter().zip(rhs).enumerate() {
        let parsed = fields
            .as_ref()
            .iter()
            .enumerate()
            .map(|(col, text)| parse_field(text.as_ref(), Field::Coefficient { row, col }))
            .collect::<Result<Vec<_>, _>>()?;
        a.push(parsed);
        b.push(parse_field(rhs.as_ref(), Field::Rhs { row })?);
    }

    System::new(&a, &b)
}

/// Parses a single field.
pub fn parse_field(text: &str, field: Field) -> Result<f64, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty { field });
    }

    let text = text.replace(',', ".");
    let value: f64 = text.parse().map_err(|_| InputError::NotNumeric {
        field,
        text: text.clone(),
    })?;

    if !value.is_finite() {
        return Err(InputError::NotFinite { field, text });
    }
    Ok(value)
}
