//! UDISE code identifier.

use std::fmt;

use crate::server::error::submission::SubmissionError;

/// Minimum number of digits in a UDISE code.
pub const MIN_UDISE_DIGITS: usize = 6;

/// A validated UDISE code: at least six ASCII digits and nothing else.
///
/// Acts as the key into the user registry and as the natural key on inspection
/// records. The only way to obtain one is through [`UdiseCode::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UdiseCode(String);

impl UdiseCode {
    /// Validates a raw form value.
    ///
    /// # Arguments
    /// - `raw` - Value of the `udiseCode` form field, `None` if the field was absent
    ///
    /// # Returns
    /// - `Ok(UdiseCode)` - Value matches `^\d{6,}$`
    /// - `Err(SubmissionError::InvalidIdentifier)` - Field absent, too short, or containing
    ///   anything other than ASCII digits
    pub fn parse(raw: Option<&str>) -> Result<Self, SubmissionError> {
        match raw {
            Some(value)
                if value.len() >= MIN_UDISE_DIGITS
                    && value.bytes().all(|b| b.is_ascii_digit()) =>
            {
                Ok(Self(value.to_string()))
            }
            other => Err(SubmissionError::InvalidIdentifier(other.map(str::to_string))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UdiseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
