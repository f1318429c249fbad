//! Answer oracle: which of the four attributes is currently largest.
//!
//! The host's shape backend exposes four numeric totals (`total_1` through
//! `total_4`). The correct button is the 1-based position of the largest
//! total; exact ties resolve to the lowest position.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::PALETTE_SIZE;
use crate::core::{Result, RoundError};

/// 1-based answer button index in `1..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ButtonIndex(u8);

impl ButtonIndex {
    /// Validate a raw 1-based index.
    pub fn new(index: u8) -> Result<Self> {
        if (1..=PALETTE_SIZE as u8).contains(&index) {
            Ok(Self(index))
        } else {
            Err(RoundError::invalid(format!(
                "button index {index} outside 1..={PALETTE_SIZE}"
            )))
        }
    }

    /// Build from a 0-based slot position.
    pub fn from_position(position: usize) -> Result<Self> {
        position
            .checked_add(1)
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| RoundError::invalid(format!("button position {position} out of range")))
            .and_then(Self::new)
    }

    /// The 1-based index.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The 0-based slot position.
    #[must_use]
    pub const fn position(self) -> usize {
        self.0 as usize - 1
    }

    /// All four buttons in order.
    pub fn all() -> impl Iterator<Item = ButtonIndex> {
        (1..=PALETTE_SIZE as u8).map(ButtonIndex)
    }
}

impl TryFrom<u8> for ButtonIndex {
    type Error = RoundError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ButtonIndex> for u8 {
    fn from(index: ButtonIndex) -> u8 {
        index.0
    }
}

impl fmt::Display for ButtonIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Attribute name for a 1-based index, as published by the shape backend.
#[must_use]
pub fn attribute_name(index: ButtonIndex) -> String {
    format!("total_{}", index.get())
}

/// The four attribute totals the player compares.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f32; PALETTE_SIZE]")]
pub struct AttributeVector([f32; PALETTE_SIZE]);

impl TryFrom<[f32; PALETTE_SIZE]> for AttributeVector {
    type Error = RoundError;

    fn try_from(values: [f32; PALETTE_SIZE]) -> Result<Self> {
        Self::new(values)
    }
}

impl AttributeVector {
    /// Validate four totals. NaN and negative values are rejected.
    pub fn new(values: [f32; PALETTE_SIZE]) -> Result<Self> {
        for (i, v) in values.iter().enumerate() {
            if v.is_nan() || *v < 0.0 {
                return Err(RoundError::invalid(format!(
                    "attribute {} must be a non-negative number, got {v}",
                    i + 1
                )));
            }
        }
        Ok(Self(values))
    }

    /// Validate a slice, which must hold exactly four totals.
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        let values: [f32; PALETTE_SIZE] = values.try_into().map_err(|_| {
            RoundError::invalid(format!(
                "attribute vector needs {PALETTE_SIZE} values, got {}",
                values.len()
            ))
        })?;
        Self::new(values)
    }

    /// Read `total_1` through `total_4` by name. A missing attribute reads as 0.
    pub fn from_named<F>(mut lookup: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<f32>,
    {
        let mut values = [0.0; PALETTE_SIZE];
        for (slot, index) in values.iter_mut().zip(ButtonIndex::all()) {
            *slot = lookup(&attribute_name(index)).unwrap_or(0.0);
        }
        Self::new(values)
    }

    #[must_use]
    pub fn values(&self) -> &[f32; PALETTE_SIZE] {
        &self.0
    }

    /// Total for a given button.
    #[must_use]
    pub fn get(&self, index: ButtonIndex) -> f32 {
        self.0[index.position()]
    }
}

/// Index of the largest total. Exact ties go to the lowest index.
#[must_use]
pub fn largest_index(attributes: &AttributeVector) -> ButtonIndex {
    let mut best = 0;
    for (i, v) in attributes.values().iter().enumerate().skip(1) {
        if *v > attributes.values()[best] {
            best = i;
        }
    }
    ButtonIndex(best as u8 + 1)
}

/// Validate a raw slice and return the index of its largest element.
pub fn largest_index_of(values: &[f32]) -> Result<ButtonIndex> {
    AttributeVector::from_slice(values).map(|attributes| largest_index(&attributes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(values: [f32; 4]) -> u8 {
        largest_index(&AttributeVector::new(values).unwrap()).get()
    }

    #[test]
    fn test_largest_index() {
        assert_eq!(idx([1.0, 2.0, 3.0, 4.0]), 4);
        assert_eq!(idx([9.0, 2.0, 3.0, 4.0]), 1);
        assert_eq!(idx([0.0, 0.5, 0.1, 0.2]), 2);
    }

    #[test]
    fn test_ties_resolve_to_lowest_index() {
        assert_eq!(idx([3.0, 3.0, 1.0, 2.0]), 1);
        assert_eq!(idx([1.0, 2.0, 5.0, 5.0]), 3);
        assert_eq!(idx([0.0, 0.0, 0.0, 0.0]), 1);
    }

    #[test]
    fn test_wrong_length_is_invalid() {
        assert!(matches!(largest_index_of(&[1.0, 2.0, 3.0]), Err(RoundError::InvalidInput(_))));
        assert!(matches!(
            largest_index_of(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            Err(RoundError::InvalidInput(_))
        ));
        assert_eq!(largest_index_of(&[1.0, 7.0, 3.0, 4.0]).unwrap().get(), 2);
    }

    #[test]
    fn test_nan_and_negative_rejected() {
        assert!(AttributeVector::new([1.0, f32::NAN, 0.0, 0.0]).is_err());
        assert!(AttributeVector::new([1.0, -0.1, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_from_named_missing_reads_zero() {
        let attributes = AttributeVector::from_named(|name| match name {
            "total_1" => Some(2.0),
            "total_3" => Some(4.5),
            _ => None,
        })
        .unwrap();

        assert_eq!(attributes.values(), &[2.0, 0.0, 4.5, 0.0]);
        assert_eq!(largest_index(&attributes).get(), 3);
    }

    #[test]
    fn test_button_index_bounds() {
        assert!(ButtonIndex::new(0).is_err());
        assert!(ButtonIndex::new(5).is_err());
        for i in 1..=4 {
            assert_eq!(ButtonIndex::new(i).unwrap().get(), i);
        }
        assert_eq!(ButtonIndex::from_position(2).unwrap().get(), 3);
        assert!(ButtonIndex::from_position(4).is_err());
        assert!(ButtonIndex::from_position(usize::MAX).is_err());
        assert_eq!(ButtonIndex::all().count(), 4);
    }

    #[test]
    fn test_button_index_serde() {
        let json = serde_json::to_string(&ButtonIndex::new(2).unwrap()).unwrap();
        assert_eq!(json, "2");
        assert!(serde_json::from_str::<ButtonIndex>("7").is_err());
    }

    #[test]
    fn test_attribute_vector_serde_validates() {
        let attributes: AttributeVector = serde_json::from_str("[1.0, 2.5, 0.0, 4.0]").unwrap();
        assert_eq!(attributes.values(), &[1.0, 2.5, 0.0, 4.0]);

        assert!(serde_json::from_str::<AttributeVector>("[1.0, -2.0, 0.0, 4.0]").is_err());
        assert!(serde_json::from_str::<AttributeVector>("[1.0, 2.0, 3.0]").is_err());
    }

    #[test]
    fn test_attribute_name() {
        assert_eq!(attribute_name(ButtonIndex::new(4).unwrap()), "total_4");
    }
}
