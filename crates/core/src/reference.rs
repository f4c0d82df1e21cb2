//! Reference objects photographed next to a window for scale.
//!
//! Customers tag each photo with the object they placed in frame. The tag is
//! stored verbatim; [`ReferenceObject::from_tag`] maps it onto a known size
//! for calibration.

use serde::Serialize;

/// Tag for an A4 sheet of paper.
pub const REF_A4: &str = "A4";

/// Tag for an ISO/IEC 7810 ID-1 card (credit card).
pub const REF_CREDIT_CARD: &str = "CREDIT_CARD";

/// A physical object of known size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceObject {
    A4,
    CreditCard,
}

impl ReferenceObject {
    /// All known reference objects.
    pub const ALL: [ReferenceObject; 2] = [ReferenceObject::A4, ReferenceObject::CreditCard];

    /// Resolve a stored tag. Unrecognized tags fall back to A4.
    pub fn from_tag(tag: &str) -> Self {
        Self::parse(tag).unwrap_or(ReferenceObject::A4)
    }

    /// Resolve a stored tag, returning `None` if it is not a known object.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim() {
            REF_A4 => Some(ReferenceObject::A4),
            REF_CREDIT_CARD => Some(ReferenceObject::CreditCard),
            _ => None,
        }
    }

    /// The tag as stored in the database.
    pub fn tag(self) -> &'static str {
        match self {
            ReferenceObject::A4 => REF_A4,
            ReferenceObject::CreditCard => REF_CREDIT_CARD,
        }
    }

    /// Length of the long side in millimetres.
    pub fn long_side_mm(self) -> f64 {
        match self {
            ReferenceObject::A4 => 297.0,
            ReferenceObject::CreditCard => 85.6,
        }
    }

    /// Length of the short side in millimetres.
    pub fn short_side_mm(self) -> f64 {
        match self {
            ReferenceObject::A4 => 210.0,
            ReferenceObject::CreditCard => 54.0,
        }
    }
}

/// Serializable description of a reference object for the admin page.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceSpec {
    pub tag: &'static str,
    pub long_side_mm: f64,
    pub short_side_mm: f64,
}

impl From<ReferenceObject> for ReferenceSpec {
    fn from(obj: ReferenceObject) -> Self {
        Self {
            tag: obj.tag(),
            long_side_mm: obj.long_side_mm(),
            short_side_mm: obj.short_side_mm(),
        }
    }
}

/// Specs for every known reference object.
pub fn reference_specs() -> Vec<ReferenceSpec> {
    ReferenceObject::ALL.into_iter().map(ReferenceSpec::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_parse() {
        assert_eq!(ReferenceObject::parse("A4"), Some(ReferenceObject::A4));
        assert_eq!(
            ReferenceObject::parse("CREDIT_CARD"),
            Some(ReferenceObject::CreditCard)
        );
    }

    #[test]
    fn unknown_tag_falls_back_to_a4() {
        assert_eq!(ReferenceObject::parse("RULER"), None);
        assert_eq!(ReferenceObject::from_tag("RULER"), ReferenceObject::A4);
    }

    #[test]
    fn tag_round_trips() {
        for obj in ReferenceObject::ALL {
            assert_eq!(ReferenceObject::parse(obj.tag()), Some(obj));
        }
    }

    #[test]
    fn long_side_is_longer() {
        for obj in ReferenceObject::ALL {
            assert!(obj.long_side_mm() > obj.short_side_mm());
        }
    }

    #[test]
    fn specs_cover_all_objects() {
        let specs = reference_specs();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[1].tag, "CREDIT_CARD");
        assert_eq!(specs[1].long_side_mm, 85.6);
    }
}
