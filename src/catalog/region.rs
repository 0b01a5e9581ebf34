use std::fmt;

/// Coffee-growing region a UN region string falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoffeeRegion {
    LatinAmerica,
    Africa,
    Asia,
}

impl CoffeeRegion {
    /// Classify by substring, checked in order America, Africa, Asia.
    /// Anything else (Europe, Oceania, "") is not a coffee region.
    pub fn from_un_region(region: &str) -> Option<Self> {
        if region.contains("America") {
            Some(Self::LatinAmerica)
        } else if region.contains("Africa") {
            Some(Self::Africa)
        } else if region.contains("Asia") {
            Some(Self::Asia)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::LatinAmerica => "Latin America",
            Self::Africa => "Africa",
            Self::Asia => "Asia",
        }
    }

    /// Typical cup profile for beans from this region.
    pub fn taste_profile(self) -> &'static str {
        match self {
            Self::LatinAmerica => "Chocolate, Nutty, Caramel",
            Self::Africa => "Fruity, Floral, Sweet",
            Self::Asia => "Dark Chocolate, Earthy, Herbal, Spice",
        }
    }
}

impl fmt::Display for CoffeeRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
