use super::{
    BrandEmail, BrandName, Category, ProductTier, ShippingRegions, ShopifyStore, SocialLinks,
};

/// Captures everything a brand submitted on the onboarding form, parsed into
/// domain types.
#[derive(Debug)]
pub struct NewBrand {
    pub brand_name: BrandName,
    pub email: BrandEmail,
    pub product_tier: ProductTier,
    pub category: Category,
    pub shopify_store: Option<ShopifyStore>,
    pub shipping_regions: ShippingRegions,
    pub social_links: SocialLinks,
}
