/// The name a brand applies under. The form only marks the field `required`, so
/// the one invariant here is that the name isn't blank.
///
/// # Examples
/// Use the `parse` function to build a `BrandName` from a string.
/// We can then get the name back out using the `AsRef<str>` implementation.
/// ```
/// use atlas_onboarding::domain::BrandName;
///
/// let name = BrandName::parse("Acme (Europe)".to_string()).unwrap();
/// assert_eq!("Acme (Europe)", name.as_ref());
/// ```
#[derive(Debug, Clone)]
pub struct BrandName(String);

impl BrandName {
    /// Returns `Ok` with the trimmed name, or `Err` when `s` is empty or all
    /// whitespace.
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err("A brand name is required.".to_string())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for BrandName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
