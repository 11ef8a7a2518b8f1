use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse, ResponseError};
use chrono::Utc;
use secrecy::Secret;
use serde::Serialize;

use crate::domain::{
    BrandEmail, BrandName, Category, Eligibility, NewBrand, ProductTier, ShippingRegions,
    ShopifyStore, SocialLinks, SubmissionRecord,
};
use crate::webhook_client::WebhookClient;

pub const WELCOME_MESSAGE: &str =
    "Welcome to ATLAS! We'll review your application and be in touch within 24 hours.";
pub const WAITLIST_MESSAGE: &str =
    "We're currently only onboarding brands that ship to U.S. and Europe. Join our waitlist for future expansion!";

/// The raw data submitted from the onboarding form.
///
/// `shippingRegions` is repeated once per ticked checkbox, which is why this is
/// decoded by hand instead of through `web::Form`.
pub struct FormData {
    brand_name: String,
    email: String,
    product_tier: String,
    category: String,
    has_shopify_store: bool,
    shopify_domain: String,
    api_token: Secret<String>,
    shipping_regions: Vec<String>,
    social_x: String,
    social_facebook: String,
    social_instagram: String,
    social_tiktok: String,
    social_youtube: String,
}

impl FormData {
    /// Decodes an `application/x-www-form-urlencoded` body. Missing fields are left
    /// empty and unknown fields are ignored; `hasShopifyStore` is only set by the
    /// checkbox value `on`.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = FormData {
            brand_name: String::new(),
            email: String::new(),
            product_tier: String::new(),
            category: String::new(),
            has_shopify_store: false,
            shopify_domain: String::new(),
            api_token: Secret::new(String::new()),
            shipping_regions: Vec::new(),
            social_x: String::new(),
            social_facebook: String::new(),
            social_instagram: String::new(),
            social_tiktok: String::new(),
            social_youtube: String::new(),
        };

        for (key, value) in form_urlencoded::parse(body) {
            let value = value.into_owned();
            match &*key {
                "brandName" => form.brand_name = value,
                "email" => form.email = value,
                "productTier" => form.product_tier = value,
                "category" => form.category = value,
                "hasShopifyStore" => form.has_shopify_store = value == "on",
                "shopifyDomain" => form.shopify_domain = value,
                "apiToken" => form.api_token = Secret::new(value),
                "shippingRegions" => form.shipping_regions.push(value),
                "socialX" => form.social_x = value,
                "socialFacebook" => form.social_facebook = value,
                "socialInstagram" => form.social_instagram = value,
                "socialTiktok" => form.social_tiktok = value,
                "socialYoutube" => form.social_youtube = value,
                _ => {}
            }
        }

        form
    }
}

impl TryFrom<FormData> for NewBrand {
    type Error = String;

    fn try_from(form: FormData) -> Result<Self, Self::Error> {
        let brand_name = BrandName::parse(form.brand_name)?;
        let email = BrandEmail::parse(form.email)?;
        let product_tier = ProductTier::parse(&form.product_tier)?;
        let category = Category::parse(&form.category)?;
        let shopify_store =
            ShopifyStore::parse(form.has_shopify_store, form.shopify_domain, form.api_token)?;
        let shipping_regions = ShippingRegions::parse(&form.shipping_regions)?;
        let social_links = SocialLinks::new(
            form.social_x,
            form.social_facebook,
            form.social_instagram,
            form.social_tiktok,
            form.social_youtube,
        );

        Ok(Self {
            brand_name,
            email,
            product_tier,
            category,
            shopify_store,
            shipping_regions,
            social_links,
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum OnboardingError {
    #[error("{0}")]
    ValidationError(String),
}

impl ResponseError for OnboardingError {
    fn status_code(&self) -> StatusCode {
        match self {
            OnboardingError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Body returned for every well-formed submission, accepted or not.
#[derive(Serialize)]
struct OnboardingResponse {
    success: bool,
    message: &'static str,
}

/// Handles an onboarding form submission.
///
/// Eligibility is always re-derived from the submitted regions. Accepted brands are
/// forwarded to the webhook and welcomed; everyone else gets the waitlist message.
/// Both are 200s. Only a malformed form is answered with a 400.
#[tracing::instrument(
    name = "Processing a brand onboarding submission",
    skip(body, webhook_client),
    fields(
        brand_name = tracing::field::Empty,
        brand_email = tracing::field::Empty,
        shipping_regions = tracing::field::Empty
    )
)]
#[post("/onboarding")]
pub async fn onboard(
    body: web::Bytes,
    webhook_client: web::Data<WebhookClient>,
) -> Result<HttpResponse, OnboardingError> {
    let new_brand: NewBrand = FormData::from_urlencoded(&body)
        .try_into()
        .map_err(OnboardingError::ValidationError)?;

    let span = tracing::Span::current();
    span.record("brand_name", new_brand.brand_name.as_ref());
    span.record("brand_email", new_brand.email.as_ref());
    span.record(
        "shipping_regions",
        tracing::field::debug(&new_brand.shipping_regions),
    );

    let response = match Eligibility::of(&new_brand.shipping_regions) {
        Eligibility::Accepted => {
            let record = SubmissionRecord::new(new_brand, Utc::now());
            forward_submission(&webhook_client, &record).await;
            OnboardingResponse {
                success: true,
                message: WELCOME_MESSAGE,
            }
        }
        Eligibility::Waitlisted => {
            tracing::info!(
                "Brand does not ship to a supported region, pointing it at the waitlist"
            );
            OnboardingResponse {
                success: false,
                message: WAITLIST_MESSAGE,
            }
        }
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Best effort: the outcome is logged and never reaches the submitter.
#[tracing::instrument(
    name = "Forwarding submission to the onboarding webhook",
    skip(webhook_client, record),
    fields(captured_at = %record.timestamp())
)]
async fn forward_submission(webhook_client: &WebhookClient, record: &SubmissionRecord) {
    match webhook_client.forward(record).await {
        Ok(status) if status.is_success() => {
            tracing::info!(%status, "Webhook accepted the submission")
        }
        Ok(status) => tracing::warn!(%status, "Webhook responded with a non-success status"),
        Err(e) => tracing::error!(error = ?e, "Failed to forward submission to the webhook"),
    }
}
