//! Signature vectors cross-checked against an independent implementation of
//! the exchange's signing algorithm (key, secret, nonce, and URL fixed).

use cryptopia_rest::{Credentials, RequestParams, RequestSigner};

const API_KEY: &str = "8f3a41b2c6d94e0f";
const SECRET: &str = "Y3J5cHRvcGlhLXRlc3Qtc2VjcmV0LTAxMjM0NTY3ODk=";
const URL: &str = "https://www.cryptopia.co.nz/api/GetBalance";
const NONCE: u64 = 1503005742;

fn credentials() -> Credentials {
    Credentials::new(API_KEY, SECRET).unwrap()
}

#[test]
fn empty_params_envelope_matches_reference() {
    let body = RequestParams::new().to_json().unwrap();
    assert_eq!(body, "{}");

    let envelope = credentials().sign_request(URL, &body, NONCE);

    assert_eq!(envelope.nonce, NONCE);
    assert_eq!(envelope.content_digest, "mZFLkyvTelC5g8XnyQrpOw==");
    assert_eq!(
        envelope.signature,
        "Uea0Afm1r7EajjIhV87PGq6Zn3nbFwVPY0YKixWW0zM="
    );
    assert_eq!(
        envelope.authorization,
        "amx 8f3a41b2c6d94e0f:Uea0Afm1r7EajjIhV87PGq6Zn3nbFwVPY0YKixWW0zM=:1503005742"
    );
}

#[test]
fn trade_params_round_trip_matches_reference() {
    // Serialize -> hash -> sign, starting from the typed parameter mapping
    let body = RequestParams::new()
        .with("symbol", "btc_usd")
        .with("type", "buy")
        .with("amount", "1.5")
        .with("price", "42000")
        .to_json()
        .unwrap();

    assert_eq!(
        body,
        r#"{"symbol":"btc_usd","type":"buy","amount":"1.5","price":"42000"}"#
    );

    let envelope = credentials().sign_request(URL, &body, NONCE);

    assert_eq!(envelope.content_digest, "ORlku7ImG4aUrRDEsE7nkw==");
    assert_eq!(
        envelope.signature,
        "bsYaABfB9IaIoth7+PJMb+5hCiiPCKT4BHj1xMoZiTA="
    );
}

#[test]
fn distinct_params_produce_reference_distinct_signatures() {
    let creds = credentials();

    let buy = creds.sign_request(
        URL,
        r#"{"symbol":"btc_usd","type":"buy","amount":"1.5","price":"42000"}"#,
        NONCE,
    );
    let sell = creds.sign_request(
        URL,
        r#"{"symbol":"btc_usd","type":"sell","amount":"1.5","price":"42000"}"#,
        NONCE,
    );

    assert_eq!(buy.signature, "bsYaABfB9IaIoth7+PJMb+5hCiiPCKT4BHj1xMoZiTA=");
    assert_eq!(sell.signature, "P9BVFgmMusIttcpuPAjduixd/AtPBEfBYAMmkUfJLZo=");
}

#[test]
fn signer_with_fixed_nonce_is_deterministic() {
    let creds = credentials();

    let first = RequestSigner::with_nonce(&creds, URL, NONCE).sign("{}");
    let second = RequestSigner::with_nonce(&creds, URL, NONCE).sign("{}");

    assert_eq!(first.signature, second.signature);
    assert_eq!(first.authorization, second.authorization);
}
