//! Storefront configuration.
//!
//! Everything here ends up in the client bundle, secrets included. That is
//! the point of the demo: the checkout page prints the `[bundle]` and
//! `[payment]` values back to whoever loads it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;

/// Top-level configuration file (`shop.toml` or `shop.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub payment: PaymentConfig,

    /// Values bundled into the client that should never have left a server.
    #[serde(default)]
    pub bundle: BundleConfig,
}

/// Public site identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Brand shown in the header and page titles.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Origin used for the document location and canonical URLs.
    #[serde(default = "default_site_url")]
    pub url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            url: default_site_url(),
        }
    }
}

fn default_site_name() -> String {
    "FakeShop".to_string()
}

fn default_site_url() -> String {
    "https://fakeshop.example.com".to_string()
}

/// Mock API location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:3001".to_string()
}

/// Third-party payment provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentConfig {
    #[serde(default = "default_payment_url")]
    pub base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publishable_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            base_url: default_payment_url(),
            publishable_key: None,
            secret_key: None,
        }
    }
}

fn default_payment_url() -> String {
    "https://api.stripe.com".to_string()
}

/// Server-side credentials that were bundled anyway.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BundleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sendgrid_api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_access_key_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_secret_access_key: Option<String>,
}

/// Environment variables read by [`StorefrontConfig::apply_env`].
pub const ENV_VARS: &[&str] = &[
    "SHOP_SITE_URL",
    "SHOP_API_URL",
    "SHOP_PAYMENT_URL",
    "SHOP_PAYMENT_PUBLISHABLE_KEY",
    "SHOP_PAYMENT_SECRET_KEY",
    "SHOP_DATABASE_URL",
    "SHOP_OPENAI_API_KEY",
    "SHOP_SENDGRID_API_KEY",
    "SHOP_AWS_ACCESS_KEY_ID",
    "SHOP_AWS_SECRET_ACCESS_KEY",
];

impl StorefrontConfig {
    /// Load config from a TOML or JSON file, chosen by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorefrontError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            StorefrontError::ConfigRead {
                path: path.display().to_string(),
                source,
            }
        })?;

        let parsed = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| StorefrontError::ConfigParse {
            path: path.display().to_string(),
            message,
        })
    }

    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Overlay values from `lookup`; empty values are ignored.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("SHOP_SITE_URL") {
            self.site.url = v;
        }
        if let Some(v) = get("SHOP_API_URL") {
            self.api.base_url = v;
        }
        if let Some(v) = get("SHOP_PAYMENT_URL") {
            self.payment.base_url = v;
        }
        if let Some(v) = get("SHOP_PAYMENT_PUBLISHABLE_KEY") {
            self.payment.publishable_key = Some(v);
        }
        if let Some(v) = get("SHOP_PAYMENT_SECRET_KEY") {
            self.payment.secret_key = Some(v);
        }
        if let Some(v) = get("SHOP_DATABASE_URL") {
            self.bundle.database_url = Some(v);
        }
        if let Some(v) = get("SHOP_OPENAI_API_KEY") {
            self.bundle.openai_api_key = Some(v);
        }
        if let Some(v) = get("SHOP_SENDGRID_API_KEY") {
            self.bundle.sendgrid_api_key = Some(v);
        }
        if let Some(v) = get("SHOP_AWS_ACCESS_KEY_ID") {
            self.bundle.aws_access_key_id = Some(v);
        }
        if let Some(v) = get("SHOP_AWS_SECRET_ACCESS_KEY") {
            self.bundle.aws_secret_access_key = Some(v);
        }
    }

    /// Every bundled credential as `(name, value)`, `undefined` when unset.
    pub fn exposed_values(&self) -> Vec<(&'static str, String)> {
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "undefined".to_string());
        vec![
            ("SHOP_PAYMENT_PUBLISHABLE_KEY", show(&self.payment.publishable_key)),
            ("SHOP_PAYMENT_SECRET_KEY", show(&self.payment.secret_key)),
            ("SHOP_DATABASE_URL", show(&self.bundle.database_url)),
            ("SHOP_OPENAI_API_KEY", show(&self.bundle.openai_api_key)),
            ("SHOP_SENDGRID_API_KEY", show(&self.bundle.sendgrid_api_key)),
            ("SHOP_AWS_ACCESS_KEY_ID", show(&self.bundle.aws_access_key_id)),
            ("SHOP_AWS_SECRET_ACCESS_KEY", show(&self.bundle.aws_secret_access_key)),
        ]
    }
}
