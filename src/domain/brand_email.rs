use validator::validate_email;

/// The contact address for a brand's application. Any instance of this is
/// guaranteed to hold a syntactically valid email address.
///
/// ```
/// use atlas_onboarding::domain::BrandEmail;
///
/// let email = BrandEmail::parse("hello@acme.com".to_string()).unwrap();
/// assert_eq!("hello@acme.com", email.as_ref());
/// ```
#[derive(Debug, Clone)]
pub struct BrandEmail(String);

impl BrandEmail {
    /// Return `Ok` with a valid `BrandEmail` when `s` is a valid email address.
    /// Otherwise, returns `Err` with an error message describing the problem.
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();
        if validate_email(trimmed) {
            Ok(BrandEmail(trimmed.to_string()))
        } else {
            Err(format!("{} is not a valid brand email.", s))
        }
    }
}

impl AsRef<str> for BrandEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
