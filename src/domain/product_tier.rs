use std::str::FromStr;

use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// How many products a brand intends to list on ATLAS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr, EnumString, EnumIter)]
pub enum ProductTier {
    #[strum(serialize = "1-5")]
    Starter,
    #[strum(serialize = "5-20")]
    Growing,
    #[strum(serialize = "20+")]
    Catalog,
}

impl ProductTier {
    pub fn parse(s: &str) -> Result<Self, String> {
        Self::from_str(s.trim()).map_err(|_| format!("{} is not a known product tier.", s))
    }
}
