use actix_web::http::header::{ContentType, LOCATION};
use actix_web::{get, HttpRequest, HttpResponse};
use askama::Template;
use strum::IntoEnumIterator;

use super::WAITLIST_MESSAGE;
use crate::domain::{Category, ProductTier, RegionSelectionView, ShippingRegion, ShippingRegions};

#[derive(Template)]
#[template(path = "onboarding.html")]
struct OnboardingPage {
    product_tiers: Vec<&'static str>,
    categories: Vec<&'static str>,
    regions: Vec<RegionOption>,
    view: RegionSelectionView,
    waitlist_message: &'static str,
}

struct RegionOption {
    value: &'static str,
    label: &'static str,
    supported: bool,
}

impl OnboardingPage {
    /// The form as first served, with nothing selected yet.
    fn blank() -> Self {
        Self {
            product_tiers: ProductTier::iter().map(<&'static str>::from).collect(),
            categories: Category::iter().map(<&'static str>::from).collect(),
            regions: ShippingRegion::iter()
                .map(|region| RegionOption {
                    value: region.into(),
                    label: region.label(),
                    supported: region.is_supported(),
                })
                .collect(),
            view: RegionSelectionView::from_selection(&ShippingRegions::default()),
            waitlist_message: WAITLIST_MESSAGE,
        }
    }
}

/// Serves the onboarding form.
///
/// Shopify opens the app with a `shop` query parameter; those requests are sent
/// on to the `/app` installation flow with the query string intact.
#[tracing::instrument(name = "Serving the onboarding page", skip(request))]
#[get("/")]
pub async fn home(request: HttpRequest) -> HttpResponse {
    let query = request.query_string();
    let from_shopify = form_urlencoded::parse(query.as_bytes())
        .any(|(key, value)| key == "shop" && !value.is_empty());
    if from_shopify {
        return HttpResponse::Found()
            .insert_header((LOCATION, format!("/app?{}", query)))
            .finish();
    }

    match OnboardingPage::blank().render() {
        Ok(html) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html),
        Err(e) => {
            tracing::error!(error = ?e, "Failed to render the onboarding page");
            HttpResponse::InternalServerError().finish()
        }
    }
}
