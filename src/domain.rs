mod brand_email;
mod brand_name;
mod category;
mod eligibility;
mod new_brand;
mod product_tier;
mod shipping_region;
mod shopify_store;
mod social_links;
mod submission_record;

pub use brand_email::BrandEmail;
pub use brand_name::BrandName;
pub use category::Category;
pub use eligibility::{Eligibility, RegionSelectionView};
pub use new_brand::NewBrand;
pub use product_tier::ProductTier;
pub use shipping_region::{ShippingRegion, ShippingRegions};
pub use shopify_store::ShopifyStore;
pub use social_links::SocialLinks;
pub use submission_record::SubmissionRecord;
