#[path = "routes/eligibility.rs"]
mod eligibility_route;
#[path = "routes/health_check.rs"]
mod health_check_route;
#[path = "routes/home.rs"]
mod home_route;
mod onboarding;

pub use eligibility_route::eligibility;
pub use health_check_route::health_check;
pub use home_route::home;
pub use onboarding::{onboard, FormData, OnboardingError, WAITLIST_MESSAGE, WELCOME_MESSAGE};
