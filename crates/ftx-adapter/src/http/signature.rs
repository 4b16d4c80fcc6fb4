/*
[INPUT]:  Request method, path with query, body bytes, credentials and a clock
[OUTPUT]: Signed request headers (FTX-KEY, FTX-SIGN, FTX-TS, FTX-SUBACCOUNT)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use std::fmt::Debug;
use std::sync::Arc;

use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderValue};
use sha2::Sha256;

use crate::http::client::Credentials;
use crate::http::Result;

type HmacSha256 = Hmac<Sha256>;

pub const HEADER_KEY: &str = "ftx-key";
pub const HEADER_SIGN: &str = "ftx-sign";
pub const HEADER_TS: &str = "ftx-ts";
pub const HEADER_SUBACCOUNT: &str = "ftx-subaccount";

/// Source of the wall-clock timestamp embedded in signatures
pub trait Clock: Send + Sync + Debug {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Authentication headers for one private request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub key: String,
    pub signature: String,
    pub timestamp: String,
    pub sub_account: Option<String>,
}

impl AuthHeaders {
    /// Insert the headers, replacing any existing values
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        headers.insert(HEADER_KEY, HeaderValue::from_str(&self.key)?);
        headers.insert(HEADER_SIGN, HeaderValue::from_str(&self.signature)?);
        headers.insert(HEADER_TS, HeaderValue::from_str(&self.timestamp)?);
        if let Some(sub_account) = &self.sub_account {
            headers.insert(HEADER_SUBACCOUNT, HeaderValue::from_str(sub_account)?);
        }
        Ok(())
    }
}

/// Signs private requests with HMAC-SHA256 over
/// `timestamp + method + path_with_query + body`
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
    clock: Arc<dyn Clock>,
}

impl RequestSigner {
    /// Create a signer reading the system clock
    pub fn new(credentials: Credentials) -> Self {
        Self::with_clock(credentials, Arc::new(SystemClock))
    }

    /// Create a signer with an explicit clock
    pub fn with_clock(credentials: Credentials, clock: Arc<dyn Clock>) -> Self {
        Self { credentials, clock }
    }

    /// Sign a request at the current clock reading
    pub fn sign(&self, method: &str, path_with_query: &str, body: Option<&[u8]>) -> AuthHeaders {
        let timestamp = self.clock.now_millis().to_string();
        self.sign_at(timestamp, method, path_with_query, body)
    }

    /// Sign a request at a caller-supplied timestamp
    pub fn sign_at(
        &self,
        timestamp: String,
        method: &str,
        path_with_query: &str,
        body: Option<&[u8]>,
    ) -> AuthHeaders {
        let payload = signature_payload(&timestamp, method, path_with_query, body);
        let signature = hmac_sha256_hex(self.credentials.secret(), &payload);

        AuthHeaders {
            key: self.credentials.api_key().to_string(),
            signature,
            timestamp,
            sub_account: self.credentials.sub_account().map(str::to_string),
        }
    }
}

/// Bytes covered by the signature, with no separators between parts
pub fn signature_payload(
    timestamp: &str,
    method: &str,
    path_with_query: &str,
    body: Option<&[u8]>,
) -> Vec<u8> {
    let mut payload = Vec::with_capacity(
        timestamp.len() + method.len() + path_with_query.len() + body.map_or(0, <[u8]>::len),
    );
    payload.extend_from_slice(timestamp.as_bytes());
    payload.extend_from_slice(method.as_bytes());
    payload.extend_from_slice(path_with_query.as_bytes());
    if let Some(body) = body {
        payload.extend_from_slice(body);
    }
    payload
}

fn hmac_sha256_hex(secret: &[u8], payload: &[u8]) -> String {
    // HMAC accepts keys of any length
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const API_KEY: &str = "LR0RQT6bKjrUNh38eCw9jYC89VDAbRkCogAc_XAm";
    const API_SECRET: &str = "T4lPid48QtjNxjLUFOcUZghD7CUJ7sTVsfuvQZF2";
    const TIMESTAMP: i64 = 1_588_591_511_721;

    fn signer(secret: &str) -> RequestSigner {
        RequestSigner::with_clock(
            Credentials::new(API_KEY, secret),
            Arc::new(FixedClock(TIMESTAMP)),
        )
    }

    #[test]
    fn test_known_get_signature() {
        // Published FTX REST authentication example
        let headers = signer(API_SECRET).sign("GET", "/api/markets", None);
        assert_eq!(
            headers.signature,
            "dbc62ec300b2624c580611858d94f2332ac636bb86eccfa1167a7777c496ee6f"
        );
        assert_eq!(headers.timestamp, "1588591511721");
        assert_eq!(headers.key, API_KEY);
        assert_eq!(headers.sub_account, None);
    }

    #[test]
    fn test_known_post_signature() {
        let body = br#"{"market": "BTC-PERP", "side": "buy", "price": 8500, "size": 1, "type": "limit", "reduceOnly": false, "ioc": false, "postOnly": false, "clientId": null}"#;
        let headers = signer(API_SECRET).sign_at(
            "1588591856950".to_string(),
            "POST",
            "/api/orders",
            Some(&body[..]),
        );
        assert_eq!(
            headers.signature,
            "c4fbabaf178658a59d7bbf57678d44c369382f3da29138f04cd46d3d582ba4ba"
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let signer = signer(API_SECRET);
        let first = signer.sign("POST", "/api/wallet/withdrawals", Some(&b"{\"coin\":\"USDT\"}"[..]));
        let second = signer.sign("POST", "/api/wallet/withdrawals", Some(&b"{\"coin\":\"USDT\"}"[..]));
        assert_eq!(first, second);
    }

    #[test]
    fn test_timestamp_header_matches_signed_timestamp() {
        let headers = signer(API_SECRET).sign("GET", "/api/wallet/balances", None);
        let payload = signature_payload(&headers.timestamp, "GET", "/api/wallet/balances", None);
        assert_eq!(hmac_sha256_hex(API_SECRET.as_bytes(), &payload), headers.signature);
    }

    #[rstest]
    #[case::timestamp("1588591511722", "GET", "/api/wallet/balances", None, API_SECRET)]
    #[case::method("1588591511721", "POST", "/api/wallet/balances", None, API_SECRET)]
    #[case::path("1588591511721", "GET", "/api/wallet/coins", None, API_SECRET)]
    #[case::query("1588591511721", "GET", "/api/wallet/balances?start_time=1", None, API_SECRET)]
    #[case::body("1588591511721", "GET", "/api/wallet/balances", Some(&b"{}"[..]), API_SECRET)]
    #[case::secret("1588591511721", "GET", "/api/wallet/balances", None, "other-secret")]
    fn test_any_single_change_alters_signature(
        #[case] timestamp: &str,
        #[case] method: &str,
        #[case] path: &str,
        #[case] body: Option<&[u8]>,
        #[case] secret: &str,
    ) {
        let baseline = signer(API_SECRET).sign_at(
            TIMESTAMP.to_string(),
            "GET",
            "/api/wallet/balances",
            None,
        );
        let changed = signer(secret).sign_at(timestamp.to_string(), method, path, body);
        assert_ne!(baseline.signature, changed.signature);
    }

    #[test]
    fn test_absent_body_adds_nothing_to_payload() {
        let payload = signature_payload("1", "GET", "/a", None);
        assert_eq!(payload, b"1GET/a");
        let payload = signature_payload("1", "POST", "/a", Some(&b"{}"[..]));
        assert_eq!(payload, b"1POST/a{}");
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let headers = signer(API_SECRET).sign("GET", "/api/wallet/coins", None);
        assert_eq!(headers.signature.len(), 64);
        assert!(
            headers
                .signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_sub_account_header_only_when_configured() {
        let mut headers = HeaderMap::new();
        signer(API_SECRET)
            .sign("GET", "/api/wallet/balances", None)
            .apply(&mut headers)
            .unwrap();
        assert!(headers.contains_key(HEADER_KEY));
        assert!(headers.contains_key(HEADER_SIGN));
        assert!(headers.contains_key(HEADER_TS));
        assert!(!headers.contains_key(HEADER_SUBACCOUNT));

        let credentials = Credentials::new(API_KEY, API_SECRET).with_sub_account("My Sub");
        let signer = RequestSigner::with_clock(credentials, Arc::new(FixedClock(TIMESTAMP)));
        let mut headers = HeaderMap::new();
        signer
            .sign("GET", "/api/wallet/balances", None)
            .apply(&mut headers)
            .unwrap();
        assert_eq!(headers.get(HEADER_SUBACCOUNT).unwrap(), "My+Sub");
    }
}
