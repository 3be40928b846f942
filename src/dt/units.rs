/// Binary magnitude a looked-up value is divided by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum UnitScale {
    #[default]
    None,
    Kilo,
    Mega,
    Giga,
}

impl UnitScale {
    /// Parse a unit argument. Case-insensitive `k`, `m` or `g`; anything
    /// else, including an empty string, means no scaling.
    pub fn parse(unit: Option<&str>) -> Self {
        match unit {
            Some("k" | "K") => UnitScale::Kilo,
            Some("m" | "M") => UnitScale::Mega,
            Some("g" | "G") => UnitScale::Giga,
            _ => UnitScale::None,
        }
    }

    pub fn shift(self) -> u32 {
        match self {
            UnitScale::None => 0,
            UnitScale::Kilo => 10,
            UnitScale::Mega => 20,
            UnitScale::Giga => 30,
        }
    }

    #[inline]
    pub fn apply(
        self,
        value: i128,
    ) -> i128 {
        value >> self.shift()
    }
}
