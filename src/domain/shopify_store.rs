use secrecy::{ExposeSecret, Secret};

/// Credentials for syncing products from a brand's existing Shopify store.
///
/// The API token stays wrapped in a [`Secret`] so it is redacted from `Debug`
/// output and never ends up in logs.
#[derive(Debug)]
pub struct ShopifyStore {
    domain: String,
    api_token: Secret<String>,
}

impl ShopifyStore {
    /// Returns `Ok(None)` when the brand has no store, ignoring whatever was typed
    /// into the credential fields. When it does, both the domain and the token must
    /// be non-blank and the domain may not contain whitespace.
    pub fn parse(
        has_store: bool,
        domain: String,
        api_token: Secret<String>,
    ) -> Result<Option<Self>, String> {
        if !has_store {
            return Ok(None);
        }

        let domain = domain.trim();
        if domain.is_empty() || domain.chars().any(char::is_whitespace) {
            return Err(format!("{} is not a valid Shopify store domain.", domain));
        }
        if api_token.expose_secret().trim().is_empty() {
            return Err("A Shopify API token is required when a store is connected.".into());
        }

        Ok(Some(Self {
            domain: domain.to_string(),
            api_token: Secret::new(api_token.expose_secret().trim().to_string()),
        }))
    }

    pub fn into_parts(self) -> (String, Secret<String>) {
        (self.domain, self.api_token)
    }
}
