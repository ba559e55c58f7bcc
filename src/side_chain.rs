use std::fmt;

use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum SideChainClass {
    Unknown = 0,
    Nonpolar = 1,
    Polar = 2,
    PositivelyCharged = 3,
    NegativelyCharged = 4,
    Hydrophobic = 5,
    Gap = 6,
}

const SIDE_CHAIN_CLASSES: [(char, SideChainClass); 21] = [
    ('A', SideChainClass::Nonpolar),
    ('R', SideChainClass::PositivelyCharged),
    ('N', SideChainClass::Polar),
    ('D', SideChainClass::NegativelyCharged),
    ('C', SideChainClass::Polar),
    ('Q', SideChainClass::Polar),
    ('E', SideChainClass::NegativelyCharged),
    ('G', SideChainClass::Nonpolar),
    ('H', SideChainClass::PositivelyCharged),
    ('I', SideChainClass::Hydrophobic),
    ('L', SideChainClass::Hydrophobic),
    ('K', SideChainClass::PositivelyCharged),
    ('M', SideChainClass::Nonpolar),
    ('F', SideChainClass::Hydrophobic),
    ('P', SideChainClass::Nonpolar),
    ('S', SideChainClass::Polar),
    ('T', SideChainClass::Polar),
    ('W', SideChainClass::Hydrophobic),
    ('Y', SideChainClass::Polar),
    ('V', SideChainClass::Hydrophobic),
    ('-', SideChainClass::Gap),
];

impl SideChainClass {
    /// Class of a one-letter residue; symbols outside the table are `Unknown`
    pub fn of(residue: char) -> Self {
        SIDE_CHAIN_CLASSES
            .iter()
            .find(|(symbol, _)| *symbol == residue)
            .map_or(Self::Unknown, |(_, class)| *class)
    }
}

impl fmt::Display for SideChainClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let string = match self {
            Self::Unknown => "Unknown",
            Self::Nonpolar => "Nonpolar",
            Self::Polar => "Polar",
            Self::PositivelyCharged => "Positively Charged",
            Self::NegativelyCharged => "Negatively Charged",
            Self::Hydrophobic => "Hydrophobic",
            Self::Gap => "Gap",
        };
        write!(f, "{}", string)
    }
}
