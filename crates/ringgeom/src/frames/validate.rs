//! Finiteness validation for points and polygons at ingestion boundaries.
//!
//! Every check reports all offending fields, not just the first.

use std::fmt;

use super::types::{EnginePoint, Er0Point, LegacyPoint, RingArc, RingPolar};

/// One non-finite field.
#[derive(Clone, Debug, PartialEq)]
pub struct InvalidField {
    /// Field path, e.g. `theta` or `holes[0][3].x`.
    pub name: String,
    pub value: f64,
}

/// Input rejected because one or more coordinates are NaN or ±∞.
#[derive(Clone, Debug, PartialEq)]
pub struct InvalidNumber {
    pub fields: Vec<InvalidField>,
}

impl fmt::Display for InvalidNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid number in {} field(s):", self.fields.len())?;
        for field in &self.fields {
            write!(f, " {}={}", field.name, field.value)?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidNumber {}

/// Finiteness check over every coordinate of a value.
pub trait Validate {
    /// Push every non-finite field onto `out`, with `prefix` prepended to names.
    fn collect_invalid(&self, prefix: &str, out: &mut Vec<InvalidField>);

    fn validate(&self) -> Result<(), InvalidNumber> {
        let mut fields = Vec::new();
        self.collect_invalid("", &mut fields);
        if fields.is_empty() {
            Ok(())
        } else {
            Err(InvalidNumber { fields })
        }
    }
}

pub(crate) fn check(prefix: &str, name: &str, value: f64, out: &mut Vec<InvalidField>) {
    if !value.is_finite() {
        out.push(InvalidField {
            name: format!("{prefix}{name}"),
            value,
        });
    }
}

macro_rules! impl_validate_xyz {
    ($ty:ty, $a:ident, $b:ident, $c:ident) => {
        impl Validate for $ty {
            fn collect_invalid(&self, prefix: &str, out: &mut Vec<InvalidField>) {
                check(prefix, stringify!($a), self.$a, out);
                check(prefix, stringify!($b), self.$b, out);
                check(prefix, stringify!($c), self.$c, out);
            }
        }
    };
}

impl_validate_xyz!(Er0Point, x, y, z);
impl_validate_xyz!(RingPolar, theta, r, z);
impl_validate_xyz!(RingArc, s, r, z);
impl_validate_xyz!(LegacyPoint, x, y, z);
impl_validate_xyz!(EnginePoint, x, y, z);

/// A floor height must be finite and strictly positive (it is a divisor).
pub fn validate_floor_height(floor_height: f64) -> Result<(), InvalidNumber> {
    if floor_height.is_finite() && floor_height > 0.0 {
        Ok(())
    } else {
        Err(InvalidNumber {
            fields: vec![InvalidField {
                name: "floor_height".to_string(),
                value: floor_height,
            }],
        })
    }
}
