use serde_json::json;
use struk_core::error::CoreError;
use struk_core::models::batch::BatchRequest;
use struk_core::models::employee::{resolve_cashier, Employee, Identifier, CASHIER_PLACEHOLDER};
use struk_core::models::transaction::TimestampValue;

fn body(value: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&value).unwrap()
}

fn sample_transaction(receipt_id: &str) -> serde_json::Value {
    json!({
        "receiptId": receipt_id,
        "employeeId": 1,
        "timestamp": 1_760_868_305_123_i64,
        "items": [{ "name": "Kopi Susu", "quantity": 2, "price": 12000 }],
        "total": 24000,
        "payment": 50000,
        "change": 26000
    })
}

#[test]
fn parses_camel_case_batch() {
    let batch = BatchRequest::from_json(&body(json!({
        "transactions": [sample_transaction("TRX-1"), sample_transaction("TRX-2")],
        "employees": [{ "id": 1, "name": "Sari" }]
    })))
    .unwrap();

    assert_eq!(batch.len(), 2);
    assert_eq!(batch.transactions()[0].receipt_id, "TRX-1");
    assert_eq!(batch.transactions()[1].receipt_id, "TRX-2");
    assert_eq!(batch.transactions()[0].items[0].extended_price(), 24000.0);
    assert_eq!(
        batch.transactions()[0].timestamp,
        TimestampValue::Epoch(1_760_868_305_123.0)
    );
}

#[test]
fn textual_timestamp_and_string_ids_are_accepted() {
    let mut trx = sample_transaction("TRX-9");
    trx["timestamp"] = json!("19/10/2025 17.05");
    trx["employeeId"] = json!("emp-3");

    let batch = BatchRequest::from_json(&body(json!({
        "transactions": [trx],
        "employees": []
    })))
    .unwrap();

    let parsed = &batch.transactions()[0];
    assert_eq!(parsed.timestamp, TimestampValue::Text("19/10/2025 17.05".to_string()));
    assert_eq!(parsed.employee_id, Some(Identifier::Text("emp-3".to_string())));
}

#[test]
fn empty_transactions_are_incomplete() {
    let err = BatchRequest::from_json(&body(json!({ "transactions": [], "employees": [] })))
        .unwrap_err();
    assert!(matches!(err, CoreError::IncompleteData));
    assert_eq!(err.to_string(), "Data transaksi tidak lengkap.");
}

#[test]
fn missing_or_null_collections_are_incomplete() {
    let missing_employees =
        BatchRequest::from_json(&body(json!({ "transactions": [sample_transaction("A")] })));
    assert!(matches!(missing_employees, Err(CoreError::IncompleteData)));

    let null_transactions =
        BatchRequest::from_json(&body(json!({ "transactions": null, "employees": [] })));
    assert!(matches!(null_transactions, Err(CoreError::IncompleteData)));

    let empty_object = BatchRequest::from_json(b"{}");
    assert!(matches!(empty_object, Err(CoreError::IncompleteData)));
}

#[test]
fn unparsable_body_is_malformed() {
    let err = BatchRequest::from_json(b"{not json").unwrap_err();
    assert!(matches!(err, CoreError::MalformedPayload(_)));
    assert!(err.to_string().starts_with("Format data tidak valid: "));
}

#[test]
fn mistyped_transaction_is_malformed() {
    let mut trx = sample_transaction("TRX-1");
    trx["items"][0]["price"] = json!("dua belas ribu");
    let err = BatchRequest::from_json(&body(json!({
        "transactions": [trx],
        "employees": []
    })))
    .unwrap_err();
    assert!(matches!(err, CoreError::MalformedPayload(_)));
}

#[test]
fn identifiers_match_loosely() {
    assert!(Identifier::from(7).matches(&Identifier::from("7")));
    assert!(Identifier::from("7").matches(&Identifier::from(7)));
    assert!(Identifier::from("kasir-a").matches(&Identifier::from("kasir-a")));
    assert!(!Identifier::from(7).matches(&Identifier::from("8")));
    assert!(!Identifier::from("kasir-a").matches(&Identifier::from(0)));
}

#[test]
fn blank_text_identifier_matches_zero() {
    assert!(Identifier::from("").matches(&Identifier::from(0)));
    assert!(Identifier::from(0).matches(&Identifier::from("  ")));
    assert!(!Identifier::from("").matches(&Identifier::from(1)));
    assert!(!Identifier::from("").matches(&Identifier::from("0")));
}

#[test]
fn missing_or_null_employee_id_is_accepted() {
    let mut absent = sample_transaction("TRX-1");
    absent.as_object_mut().unwrap().remove("employeeId");
    let mut nulled = sample_transaction("TRX-2");
    nulled["employeeId"] = json!(null);

    let batch = BatchRequest::from_json(&body(json!({
        "transactions": [absent, nulled],
        "employees": [{ "id": 1, "name": "Sari" }]
    })))
    .unwrap();

    assert_eq!(batch.transactions()[0].employee_id, None);
    assert_eq!(batch.transactions()[1].employee_id, None);
    for trx in batch.transactions() {
        assert_eq!(
            resolve_cashier(batch.employees(), trx.employee_id.as_ref()),
            CASHIER_PLACEHOLDER
        );
    }
}

#[test]
fn cashier_resolution_falls_back_to_placeholder() {
    let employees = vec![
        Employee { id: Identifier::from(1), name: "Sari".to_string() },
        Employee { id: Identifier::from("2"), name: "Budi".to_string() },
    ];

    assert_eq!(resolve_cashier(&employees, Some(&Identifier::from(1))), "Sari");
    assert_eq!(resolve_cashier(&employees, Some(&Identifier::from(2))), "Budi");
    assert_eq!(
        resolve_cashier(&employees, Some(&Identifier::from(99))),
        CASHIER_PLACEHOLDER
    );
    assert_eq!(resolve_cashier(&employees, None), CASHIER_PLACEHOLDER);
    assert_eq!(resolve_cashier(&[], Some(&Identifier::from(1))), "N/A");
}
