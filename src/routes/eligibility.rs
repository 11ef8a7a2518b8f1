use actix_web::{get, HttpRequest, HttpResponse};

use super::OnboardingError;
use crate::domain::{RegionSelectionView, ShippingRegions};

/// Returns the shipping-region view state for the regions currently ticked on the
/// form, passed as repeated `shippingRegions` query parameters. The form page
/// calls this on every checkbox toggle.
#[tracing::instrument(
    name = "Computing shipping region view state",
    skip(request),
    fields(query = %request.query_string())
)]
#[get("/onboarding/eligibility")]
pub async fn eligibility(request: HttpRequest) -> Result<HttpResponse, OnboardingError> {
    let values = form_urlencoded::parse(request.query_string().as_bytes())
        .filter(|(key, _)| key == "shippingRegions")
        .map(|(_, value)| value.into_owned());
    let regions = ShippingRegions::parse(values).map_err(OnboardingError::ValidationError)?;

    Ok(HttpResponse::Ok().json(RegionSelectionView::from_selection(&regions)))
}
