//! Outbound share links and URL query helpers
//!
//! The share targets are external services reached by URL navigation;
//! nothing here performs a request.

use std::collections::BTreeMap;

use urlencoding::{decode, encode};

/// Supported share targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Facebook,
    Twitter,
    WhatsApp,
    Email,
}

impl std::fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SharePlatform::Facebook => write!(f, "facebook"),
            SharePlatform::Twitter => write!(f, "twitter"),
            SharePlatform::WhatsApp => write!(f, "whatsapp"),
            SharePlatform::Email => write!(f, "email"),
        }
    }
}

impl std::str::FromStr for SharePlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "facebook" => Ok(SharePlatform::Facebook),
            "twitter" => Ok(SharePlatform::Twitter),
            "whatsapp" => Ok(SharePlatform::WhatsApp),
            "email" => Ok(SharePlatform::Email),
            _ => Err(format!(
                "Invalid platform: {}. Use: facebook, twitter, whatsapp, email",
                s
            )),
        }
    }
}

/// Build the outbound share URL for `platform`, sharing `url` with an
/// accompanying `text` (tweet text, WhatsApp message, email subject).
pub fn share_url(platform: SharePlatform, url: &str, text: &str) -> String {
    match platform {
        SharePlatform::Facebook => facebook_share_url(url),
        SharePlatform::Twitter => twitter_share_url(url, text),
        SharePlatform::WhatsApp => whatsapp_share_url(url, text),
        SharePlatform::Email => email_share_url(text, url),
    }
}

pub fn facebook_share_url(url: &str) -> String {
    format!(
        "https://www.facebook.com/sharer/sharer.php?u={}",
        encode(url)
    )
}

pub fn twitter_share_url(url: &str, text: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?url={}&text={}",
        encode(url),
        encode(text)
    )
}

/// WhatsApp takes a single text parameter; the link rides along in it.
pub fn whatsapp_share_url(url: &str, text: &str) -> String {
    format!("https://wa.me/?text={}", encode(&format!("{} {}", text, url)))
}

pub fn email_share_url(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        encode(subject),
        encode(body)
    )
}

/// Parse a query string (without the leading `?`) into key-value pairs.
/// Undecodable components are kept verbatim.
pub fn parse_query(query: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode(key).map(|k| k.into_owned()).unwrap_or_else(|_| key.to_string());
        let value = decode(value).map(|v| v.into_owned()).unwrap_or_else(|_| value.to_string());
        params.insert(key, value);
    }
    params
}

/// Rewrite the query of `url`: `Some(value)` sets a parameter, `None`
/// deletes it. Other parameters survive.
pub fn update_query(url: &str, updates: &[(&str, Option<&str>)]) -> String {
    let (base, query) = url.split_once('?').unwrap_or((url, ""));
    let mut params = parse_query(query);

    for (key, value) in updates {
        match value {
            Some(v) => {
                params.insert(key.to_string(), v.to_string());
            }
            None => {
                params.remove(*key);
            }
        }
    }

    if params.is_empty() {
        return base.to_string();
    }

    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect();
    format!("{}?{}", base, query.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_urls_encode_components() {
        assert_eq!(
            facebook_share_url("https://example.com/property/12"),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2Fproperty%2F12"
        );
        assert_eq!(
            twitter_share_url("https://example.com/p/1", "4 bed villa"),
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fexample.com%2Fp%2F1&text=4%20bed%20villa"
        );
        assert!(whatsapp_share_url("https://example.com/p/1", "Look at this")
            .starts_with("https://wa.me/?text=Look%20at%20this%20"));
        assert_eq!(
            email_share_url("A listing", "See https://example.com/p/1"),
            "mailto:?subject=A%20listing&body=See%20https%3A%2F%2Fexample.com%2Fp%2F1"
        );
    }

    #[test]
    fn query_round_trip() {
        let params = parse_query("min_price=1000&location=Accra%20East");
        assert_eq!(params["min_price"], "1000");
        assert_eq!(params["location"], "Accra East");
    }

    #[test]
    fn update_query_sets_and_deletes() {
        let url = "/properties?page=2&sort=price%20asc";
        let updated = update_query(url, &[("page", None), ("bedrooms", Some("3"))]);
        assert_eq!(updated, "/properties?bedrooms=3&sort=price%20asc");

        let emptied = update_query("/properties?page=2", &[("page", None)]);
        assert_eq!(emptied, "/properties");
    }
}
