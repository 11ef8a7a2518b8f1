use chrono::{DateTime, SecondsFormat, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, Serializer};

use super::{NewBrand, ShippingRegions};

/// The row forwarded to the onboarding spreadsheet webhook for an accepted brand.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    brand_name: String,
    email: String,
    product_tier: &'static str,
    category: &'static str,
    has_shopify_store: bool,
    shopify_domain: String,
    #[serde(serialize_with = "expose_token")]
    api_token: Secret<String>,
    shipping_regions: ShippingRegions,
    social_x: String,
    social_facebook: String,
    social_instagram: String,
    social_tiktok: String,
    social_youtube: String,
    #[serde(serialize_with = "iso_millis")]
    timestamp: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Builds the record for `brand`, stamped with `captured_at`.
    pub fn new(brand: NewBrand, captured_at: DateTime<Utc>) -> Self {
        let has_shopify_store = brand.shopify_store.is_some();
        let (shopify_domain, api_token) = match brand.shopify_store {
            Some(store) => store.into_parts(),
            None => (String::new(), Secret::new(String::new())),
        };
        let social = brand.social_links;

        Self {
            brand_name: brand.brand_name.as_ref().to_string(),
            email: brand.email.as_ref().to_string(),
            product_tier: brand.product_tier.into(),
            category: brand.category.into(),
            has_shopify_store,
            shopify_domain,
            api_token,
            shipping_regions: brand.shipping_regions,
            social_x: social.x,
            social_facebook: social.facebook,
            social_instagram: social.instagram,
            social_tiktok: social.tiktok,
            social_youtube: social.youtube,
            timestamp: captured_at,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

fn expose_token<S: Serializer>(token: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(token.expose_secret())
}

fn iso_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}
