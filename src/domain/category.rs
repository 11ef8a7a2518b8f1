use std::str::FromStr;

use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// The marketplace department a brand sells into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr, EnumString, EnumIter)]
pub enum Category {
    Fashion,
    Beauty,
    Electronics,
    Home,
    Sports,
    Food,
    Other,
}

impl Category {
    pub fn parse(s: &str) -> Result<Self, String> {
        Self::from_str(s.trim()).map_err(|_| format!("{} is not a known category.", s))
    }
}
