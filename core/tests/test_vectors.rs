//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes raw user input, the expected request path,
//! a simulated response, and the expected outcome. Results are compared as
//! decoded `Address` values, not raw strings.

use cep_core::{
    validate_postal_code, validate_state_code, Address, CepClient, HttpResponse, LookupError,
};

const BASE_URL: &str = "http://localhost:3000/ws";

fn client() -> CepClient {
    CepClient::new(BASE_URL)
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn assert_error(name: &str, expected: &serde_json::Value, err: LookupError) {
    match expected.as_str().unwrap() {
        "NotFound" => assert!(matches!(err, LookupError::NotFound), "{name}: expected NotFound, got {err:?}"),
        "Connection" => assert!(
            matches!(err, LookupError::Connection(_)),
            "{name}: expected Connection, got {err:?}"
        ),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Postal code
// ---------------------------------------------------------------------------

#[test]
fn postal_code_test_vectors() {
    let raw = include_str!("../../test-vectors/postal_code.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let code = validate_postal_code(case["input"].as_str().unwrap()).unwrap();

        // Verify build
        let req = c.build_lookup_by_postal_code(&code);
        let path = case["expected_request"]["path"].as_str().unwrap();
        assert_eq!(req.url, format!("{BASE_URL}{path}"), "{name}: url");

        // Verify parse
        let result = c.parse_lookup_by_postal_code(simulated(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_error(name, expected_error, result.unwrap_err());
        } else {
            let expected: Address = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

#[test]
fn address_test_vectors() {
    let raw = include_str!("../../test-vectors/address.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let uf = validate_state_code(input["uf"].as_str().unwrap()).unwrap();
        let city = input["city"].as_str().unwrap();
        let street = input["street"].as_str().unwrap();

        // Verify build
        let req = c.build_lookup_by_address(&uf, city, street);
        let path = case["expected_request"]["path"].as_str().unwrap();
        assert_eq!(req.url, format!("{BASE_URL}{path}"), "{name}: url");

        // Verify parse
        let result = c.parse_lookup_by_address(simulated(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_error(name, expected_error, result.unwrap_err());
        } else {
            let expected: Vec<Address> =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}
