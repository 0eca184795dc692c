//! Rotor selection: which wirings to mount, where, and how notched.
//!
//! Grammar: `R1:P1:N1,R2:P2:N2,R3:P3:N3` with `R` in `1..=5` (pairwise
//! distinct, picking 3 of the 5 stored wirings by 1-based index) and `P`,
//! `N` in `1..=26` (starting position and notch, 1-based on the wire,
//! 0-based internally). Any violation rejects the whole configuration.

use std::str::FromStr;

use crate::error::EnigmaError;
use crate::{ALPHABET_LEN, MOUNTED_ROTORS, ROTOR_COUNT};

/// One mounted rotor slot, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSlot {
    /// Index into the definition's five wirings, `0..5`.
    pub rotor: usize,
    /// Starting rotational offset, `0..26`.
    pub position: u8,
    /// Notch position, `0..26`.
    pub notch: u8,
}

/// A parsed, validated selection of three rotor slots.
///
/// Slot 0 is the fastest rotor in the cascade, slot 2 the slowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSelection {
    slots: [RotorSlot; MOUNTED_ROTORS],
}

impl RotorSelection {
    /// Returns the three mounted slots, fastest first.
    pub fn slots(&self) -> [RotorSlot; MOUNTED_ROTORS] {
        self.slots
    }
}

impl FromStr for RotorSelection {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != MOUNTED_ROTORS {
            return Err(EnigmaError::MalformedRotorSelection(format!(
                "expected {} slots, found {}",
                MOUNTED_ROTORS,
                parts.len()
            )));
        }

        let mut slots = [RotorSlot {
            rotor: 0,
            position: 0,
            notch: 0,
        }; MOUNTED_ROTORS];
        for (i, part) in parts.iter().enumerate() {
            slots[i] = parse_slot(part)?;
        }

        for i in 0..MOUNTED_ROTORS {
            for j in i + 1..MOUNTED_ROTORS {
                if slots[i].rotor == slots[j].rotor {
                    return Err(EnigmaError::MalformedRotorSelection(format!(
                        "rotor {} mounted more than once",
                        slots[i].rotor + 1
                    )));
                }
            }
        }

        Ok(RotorSelection { slots })
    }
}

/// Parses one `R:P:N` triple into a 0-based slot.
fn parse_slot(part: &str) -> Result<RotorSlot, EnigmaError> {
    let fields: Vec<&str> = part.split(':').collect();
    if fields.len() != 3 {
        return Err(EnigmaError::MalformedRotorSelection(format!(
            "slot '{}' is not of the form rotor:position:notch",
            part
        )));
    }

    let rotor = parse_field(fields[0], "rotor", 1, ROTOR_COUNT)?;
    let position = parse_field(fields[1], "position", 1, ALPHABET_LEN)?;
    let notch = parse_field(fields[2], "notch", 1, ALPHABET_LEN)?;

    Ok(RotorSlot {
        rotor: rotor - 1,
        position: (position - 1) as u8,
        notch: (notch - 1) as u8,
    })
}

/// Parses a single 1-based numeric field within `min..=max`.
fn parse_field(field: &str, name: &str, min: usize, max: usize) -> Result<usize, EnigmaError> {
    let value: usize = field.parse().map_err(|_| {
        EnigmaError::MalformedRotorSelection(format!("{} '{}' is not a number", name, field))
    })?;
    if value < min || value > max {
        return Err(EnigmaError::MalformedRotorSelection(format!(
            "{} {} is outside {}..={}",
            name, value, min, max
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_selection_to_zero_based() {
        let selection: RotorSelection = "1:12:26,4:16:12,5:1:4".parse().unwrap();
        let slots = selection.slots();
        assert_eq!(slots[0], RotorSlot { rotor: 0, position: 11, notch: 25 });
        assert_eq!(slots[1], RotorSlot { rotor: 3, position: 15, notch: 11 });
        assert_eq!(slots[2], RotorSlot { rotor: 4, position: 0, notch: 3 });
    }

    #[test]
    fn test_rejects_wrong_slot_count() {
        let err = "1:1:1,2:1:1".parse::<RotorSelection>().unwrap_err();
        assert!(matches!(err, EnigmaError::MalformedRotorSelection(_)));
    }

    #[test]
    fn test_rejects_duplicate_rotor() {
        let err = "1:1:1,1:2:2,3:1:1".parse::<RotorSelection>().unwrap_err();
        assert_eq!(
            err,
            EnigmaError::MalformedRotorSelection("rotor 1 mounted more than once".into())
        );
    }

    #[test]
    fn test_rejects_rotor_out_of_range() {
        assert!("6:1:1,2:1:1,3:1:1".parse::<RotorSelection>().is_err());
        assert!("0:1:1,2:1:1,3:1:1".parse::<RotorSelection>().is_err());
    }

    #[test]
    fn test_rejects_position_and_notch_out_of_range() {
        assert!("1:27:1,2:1:1,3:1:1".parse::<RotorSelection>().is_err());
        assert!("1:0:1,2:1:1,3:1:1".parse::<RotorSelection>().is_err());
        assert!("1:1:27,2:1:1,3:1:1".parse::<RotorSelection>().is_err());
    }

    #[test]
    fn test_rejects_non_numeric_and_malformed_fields() {
        assert!("a:1:1,2:1:1,3:1:1".parse::<RotorSelection>().is_err());
        assert!("1:1,2:1:1,3:1:1".parse::<RotorSelection>().is_err());
        assert!("1:1:1:1,2:1:1,3:1:1".parse::<RotorSelection>().is_err());
        assert!("".parse::<RotorSelection>().is_err());
    }
}
