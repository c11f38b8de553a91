use chrono::NaiveDate;
use fridgemate::{
    classify, BarcodeScanner, Classification, InventoryStore, ItemSource, MemoryStore,
    OpenFoodFactsClient, Rejection, ScanOutcome, ScanState,
};
use mockito::{Mock, ServerGuard};

const BEVERAGE: &str = r#"{
    "status": 1,
    "product": {
        "product_name": "Coca-Cola Original Taste",
        "generic_name": "",
        "brands": "Coca-Cola, The Coca-Cola Company",
        "categories": "Beverages, Carbonated drinks, Sodas",
        "categories_tags": ["en:beverages", "en:carbonated-drinks", "en:sodas"],
        "ingredients_text": "Carbonated water, sugar, <span>colour</span> (caramel E150d)"
    }
}"#;

const SHAMPOO: &str = r#"{
    "status": 1,
    "product": {
        "product_name": "Daily Shampoo",
        "categories_tags": ["en:hygiene", "en:hair-care"],
        "ingredients_text": null
    }
}"#;

const NOT_FOUND: &str = r#"{"status": 0, "status_verbose": "product not found"}"#;

async fn product_mock(server: &mut ServerGuard, code: &str, body: &str, hits: usize) -> Mock {
    server
        .mock("GET", format!("/{code}.json").as_str())
        .expect(hits)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

fn client(server: &ServerGuard) -> OpenFoodFactsClient {
    OpenFoodFactsClient::with_base_url(server.url(), None).unwrap()
}

fn expiry() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 11, 2).unwrap()
}

#[tokio::test]
async fn test_short_code_rejected_without_lookup() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result = classify("123", &client(&server)).await;
    assert_eq!(result, Classification::Rejected(Rejection::NotAProductCode));
    assert_eq!(
        Rejection::NotAProductCode.to_string(),
        "not a product code"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_url_payload_rejected_without_lookup() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result = classify("exp://192.168.1.20:8081", &client(&server)).await;
    assert_eq!(result, Classification::Rejected(Rejection::NotAProductCode));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unknown_product_rejected() {
    let mut server = mockito::Server::new_async().await;
    let mock = product_mock(&mut server, "012345678905", NOT_FOUND, 1).await;

    let result = classify("012345678905", &client(&server)).await;
    assert_eq!(result, Classification::Rejected(Rejection::NoProductDetails));
    assert_eq!(
        Rejection::NoProductDetails.to_string(),
        "no product details found"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_failure_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/12345678.json")
        .with_status(500)
        .create_async()
        .await;

    let result = classify("12345678", &client(&server)).await;
    assert_eq!(result, Classification::Rejected(Rejection::NoProductDetails));
}

#[tokio::test]
async fn test_beverage_accepted() {
    let mut server = mockito::Server::new_async().await;
    let mock = product_mock(&mut server, "5000112637922", BEVERAGE, 1).await;

    match classify("5000112637922", &client(&server)).await {
        Classification::Accepted(product) => {
            assert_eq!(product.barcode, "5000112637922");
            assert_eq!(product.name, "Coca-Cola Original Taste");
            assert_eq!(product.brand, "Coca-Cola");
            assert_eq!(
                product.details,
                "Coca-Cola • Beverages, Carbonated drinks • Carbonated water, sugar, colour (caramel E150d)"
            );
            assert!(product.is_edible);
        }
        other => panic!("Expected acceptance, got {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_food_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = product_mock(&mut server, "4005900036650", SHAMPOO, 1).await;

    let result = classify("4005900036650", &client(&server)).await;
    assert_eq!(result, Classification::Rejected(Rejection::NotEdible));
}

#[tokio::test]
async fn test_scanner_ignores_scans_while_product_pending() {
    let mut server = mockito::Server::new_async().await;
    let mock = product_mock(&mut server, "5000112637922", BEVERAGE, 1).await;

    let mut scanner = BarcodeScanner::new(Box::new(client(&server)));
    assert_eq!(scanner.state(), &ScanState::Idle);

    let first = scanner.on_scan("5000112637922").await;
    assert!(matches!(first, ScanOutcome::Accepted(_)));
    assert!(scanner.is_busy());

    // Same physical code seen again by the camera
    let second = scanner.on_scan("5000112637922").await;
    assert_eq!(second, ScanOutcome::Ignored);
    assert!(scanner.pending().is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_scanner_rearms_after_rejection() {
    let mut server = mockito::Server::new_async().await;
    let _mock = product_mock(&mut server, "5000112637922", BEVERAGE, 1).await;

    let mut scanner = BarcodeScanner::new(Box::new(client(&server)));

    let rejected = scanner.on_scan("https://example.com").await;
    assert_eq!(rejected, ScanOutcome::Rejected(Rejection::NotAProductCode));
    assert_eq!(
        scanner.state(),
        &ScanState::Rejected(Rejection::NotAProductCode)
    );
    assert!(!scanner.is_busy());

    let accepted = scanner.on_scan("5000112637922").await;
    assert!(matches!(accepted, ScanOutcome::Accepted(_)));
}

#[tokio::test]
async fn test_reset_allows_next_scan() {
    let mut server = mockito::Server::new_async().await;
    let mock = product_mock(&mut server, "5000112637922", BEVERAGE, 2).await;

    let mut scanner = BarcodeScanner::new(Box::new(client(&server)));
    scanner.on_scan("5000112637922").await;

    scanner.reset();
    assert_eq!(scanner.state(), &ScanState::Idle);
    assert!(scanner.pending().is_none());

    let again = scanner.on_scan("5000112637922").await;
    assert!(matches!(again, ScanOutcome::Accepted(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_save_persists_and_rearms() {
    let mut server = mockito::Server::new_async().await;
    let _mock = product_mock(&mut server, "5000112637922", BEVERAGE, 1).await;

    let store = MemoryStore::new();
    let mut scanner = BarcodeScanner::new(Box::new(client(&server)));
    scanner.on_scan("5000112637922").await;

    let item = scanner.save("user-1", expiry(), &store).await.unwrap();
    assert_eq!(item.name, "Coca-Cola Original Taste");
    assert_eq!(item.barcode.as_deref(), Some("5000112637922"));
    assert_eq!(item.brand.as_deref(), Some("Coca-Cola"));
    assert_eq!(item.unit, "pcs");
    assert_eq!(item.exact_amount, Some(1.0));
    assert_eq!(item.expiration, "11/02/26");
    assert_eq!(item.source, ItemSource::Barcode);

    assert!(!scanner.is_busy());
    assert_eq!(scanner.state(), &ScanState::Idle);
    assert_eq!(store.list("user-1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_save_without_pending_product() {
    let server = mockito::Server::new_async().await;
    let store = MemoryStore::new();
    let mut scanner = BarcodeScanner::new(Box::new(client(&server)));

    let result = scanner.save("user-1", expiry(), &store).await;
    assert!(matches!(result, Err(fridgemate::FridgeError::Validation(_))));
    assert!(store.list("user-1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_scanner_agrees_with_classify() {
    let mut server = mockito::Server::new_async().await;
    let _found = product_mock(&mut server, "5000112637922", BEVERAGE, 2).await;
    let _non_food = product_mock(&mut server, "4005900036650", SHAMPOO, 2).await;
    let _unknown = product_mock(&mut server, "012345678905", NOT_FOUND, 2).await;
    let _failing = server
        .mock("GET", "/12345678.json")
        .with_status(500)
        .expect(2)
        .create_async()
        .await;

    let mut scanner = BarcodeScanner::new(Box::new(client(&server)));
    for code in ["5000112637922", "4005900036650", "012345678905", "12345678", "tel:5000112637922"] {
        let expected = classify(code, &client(&server)).await;
        let outcome = scanner.on_scan(code).await;

        match expected {
            Classification::Accepted(product) => {
                assert_eq!(outcome, ScanOutcome::Accepted(product.clone()));
                assert_eq!(scanner.state(), &ScanState::Accepted(product));
            }
            Classification::Rejected(reason) => {
                assert_eq!(outcome, ScanOutcome::Rejected(reason));
                assert_eq!(scanner.state(), &ScanState::Rejected(reason));
            }
        }
        scanner.reset();
    }
}
