use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// A region a brand can declare it ships to. The string form is the value
/// submitted by the form's `shippingRegions` checkboxes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
)]
pub enum ShippingRegion {
    #[strum(serialize = "United States")]
    UnitedStates,
    #[strum(serialize = "Europe")]
    Europe,
    #[strum(serialize = "Other regions")]
    Other,
}

impl ShippingRegion {
    /// Whether ATLAS currently onboards brands shipping to this region.
    pub fn is_supported(&self) -> bool {
        matches!(self, ShippingRegion::UnitedStates | ShippingRegion::Europe)
    }

    /// Text shown next to the checkbox. Only the unsupported option differs from
    /// its token.
    pub fn label(&self) -> &'static str {
        match self {
            ShippingRegion::Other => "Other regions (not currently supported)",
            supported => supported.into(),
        }
    }
}

/// The set of regions selected on a submission. Ordering follows the
/// declaration order of `ShippingRegion`, and repeated tokens collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingRegions(BTreeSet<ShippingRegion>);

impl ShippingRegions {
    /// Parses the raw `shippingRegions` values of a submission.
    ///
    /// Returns `Err` naming the first value that isn't one of the canonical region
    /// tokens. An empty list parses to an empty selection.
    pub fn parse<I, S>(values: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .map(|value| {
                let value = value.as_ref();
                ShippingRegion::from_str(value)
                    .map_err(|_| format!("{} is not a known shipping region.", value))
            })
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }

    pub fn contains(&self, region: ShippingRegion) -> bool {
        self.0.contains(&region)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShippingRegion> {
        self.0.iter()
    }
}

impl FromIterator<ShippingRegion> for ShippingRegions {
    fn from_iter<T: IntoIterator<Item = ShippingRegion>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Serialized as the tokens joined with `", "`, which is the column format the
/// onboarding spreadsheet expects.
impl Serialize for ShippingRegions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let joined = self
            .iter()
            .map(|region| region.as_ref())
            .collect::<Vec<_>>()
            .join(", ");
        serializer.serialize_str(&joined)
    }
}
