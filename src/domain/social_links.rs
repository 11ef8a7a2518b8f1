/// Optional links to a brand's social profiles. Blank fields are kept as empty
/// strings, which is how the spreadsheet records a missing link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub x: String,
    pub facebook: String,
    pub instagram: String,
    pub tiktok: String,
    pub youtube: String,
}

impl SocialLinks {
    pub fn new(
        x: String,
        facebook: String,
        instagram: String,
        tiktok: String,
        youtube: String,
    ) -> Self {
        Self {
            x: x.trim().to_string(),
            facebook: facebook.trim().to_string(),
            instagram: instagram.trim().to_string(),
            tiktok: tiktok.trim().to_string(),
            youtube: youtube.trim().to_string(),
        }
    }
}
