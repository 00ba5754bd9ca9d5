//! REST round-trip tests over the assembled router.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use vitrine::prelude::*;

fn test_server() -> TestServer {
    let bus = EventBus::new(64);
    let app = ServerBuilder::new()
        .with_config(AppConfig::default())
        .with_vehicle_store(InMemoryVehicleStore::new().with_event_bus(bus.clone()))
        .with_contact_store(InMemoryContactStore::new().with_event_bus(bus.clone()))
        .with_settings_store(InMemorySettingsStore::default().with_event_bus(bus.clone()))
        .with_event_bus(bus)
        .build()
        .expect("router should build");

    TestServer::try_new(app).expect("test server should start")
}

fn vehicle_payload(brand: &str, model: &str, plate: &str, category: &str, price: f64) -> Value {
    json!({
        "plate": plate,
        "brand": brand,
        "model": model,
        "manufacture_year": 2020,
        "model_year": 2021,
        "color": "Prata",
        "fuel": "Flex",
        "transmission": "Manual",
        "category": category,
        "doors": "4",
        "mileage_km": 35000,
        "price": price,
        "images": ["https://cdn.example.com/1.jpg"]
    })
}

fn contact_payload(name: &str) -> Value {
    json!({
        "name": name,
        "email": "maria@example.com",
        "phone": "(11) 99999-1234",
        "message": "Tenho interesse.",
        "source": "vehicle",
        "vehicle_info": "Fiat Uno 2020"
    })
}

#[tokio::test]
async fn health_check_responds() {
    let server = test_server();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn create_then_fetch_vehicle() {
    let server = test_server();

    let created = server
        .post("/api/vehicles")
        .json(&vehicle_payload("Fiat", "Uno", "AAA1111", "CARROS", 45000.0))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let id = created.json::<Value>()["id"].as_i64().unwrap();

    let detail = server.get(&format!("/api/vehicles/{id}")).await;
    assert_eq!(detail.status_code(), StatusCode::OK);
    let body = detail.json::<Value>();
    assert_eq!(body["brand"], "Fiat");
    assert_eq!(body["price_label"], "R$ 45.000,00");
    assert_eq!(body["slug"], "fiat-uno-2020-prata");
}

#[tokio::test]
async fn zero_price_renders_on_request() {
    let server = test_server();

    let created = server
        .post("/api/vehicles")
        .json(&vehicle_payload("Fiat", "Uno", "AAA1111", "CARROS", 0.0))
        .await;
    let id = created.json::<Value>()["id"].as_i64().unwrap();

    let detail = server.get(&format!("/api/vehicles/{id}")).await;
    assert_eq!(detail.json::<Value>()["price_label"], "Sob consulta");
}

#[tokio::test]
async fn invalid_vehicle_draft_is_rejected() {
    let server = test_server();

    let mut payload = vehicle_payload("Fiat", "Uno", "AAA1111", "CARROS", 45000.0);
    payload["images"] = json!([]);

    let response = server.post("/api/vehicles").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn missing_vehicle_is_404() {
    let server = test_server();

    let response = server.get("/api/vehicles/999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["code"], "VEHICLE_NOT_FOUND");
}

#[tokio::test]
async fn list_applies_search_category_and_sort() {
    let server = test_server();

    for (brand, model, plate, category, price) in [
        ("Fiat", "Uno", "AAA1111", "CARROS", 10_000.0),
        ("Honda", "CB", "BBB2222", "MOTOS", 5_000.0),
        ("Toyota", "Corolla", "ABC1234", "CARROS", 90_000.0),
    ] {
        let response = server
            .post("/api/vehicles")
            .json(&vehicle_payload(brand, model, plate, category, price))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    // category filter
    let motos = server
        .get("/api/vehicles")
        .add_query_param("category", "MOTOS")
        .await;
    let body = motos.json::<Value>();
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["brand"], "Honda");

    // price sort, descending
    let by_price = server
        .get("/api/vehicles")
        .add_query_param("sort", "price:desc")
        .await;
    let body = by_price.json::<Value>();
    assert_eq!(body["data"][0]["brand"], "Toyota");
    assert_eq!(body["data"][2]["brand"], "Honda");

    // case-insensitive search over brand/model/plate
    let search = server
        .get("/api/vehicles")
        .add_query_param("search", "abc1234")
        .await;
    let body = search.json::<Value>();
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["brand"], "Toyota");
}

#[tokio::test]
async fn unknown_sort_field_is_rejected() {
    let server = test_server();

    let response = server
        .get("/api/vehicles")
        .add_query_param("sort", "horsepower:asc")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "UNKNOWN_SORT_FIELD");
}

#[tokio::test]
async fn categories_include_all_sentinel_first() {
    let server = test_server();

    server
        .post("/api/vehicles")
        .json(&vehicle_payload("Fiat", "Uno", "AAA1111", "CARROS", 1.0))
        .await;
    server
        .post("/api/vehicles")
        .json(&vehicle_payload("Honda", "CB", "BBB2222", "MOTOS", 1.0))
        .await;

    let response = server.get("/api/vehicles/categories").await;
    let categories = response.json::<Vec<String>>();
    assert_eq!(categories[0], "ALL");
    assert!(categories.contains(&"CARROS".to_string()));
    assert!(categories.contains(&"MOTOS".to_string()));
}

#[tokio::test]
async fn list_paginates() {
    let server = test_server();

    for i in 0..5 {
        server
            .post("/api/vehicles")
            .json(&vehicle_payload(
                "Fiat",
                "Uno",
                &format!("AAA111{i}"),
                "CARROS",
                1_000.0,
            ))
            .await;
    }

    let page = server
        .get("/api/vehicles")
        .add_query_param("page", "2")
        .add_query_param("limit", "2")
        .await;
    let body = page.json::<Value>();
    assert_eq!(body["pagination"]["total"], 5);
    assert_eq!(body["pagination"]["total_pages"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["has_next"], true);
    assert_eq!(body["pagination"]["has_prev"], true);
}

#[tokio::test]
async fn contact_submission_and_triage() {
    let server = test_server();

    let created = server
        .post("/api/contacts")
        .json(&contact_payload("Maria Silva"))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let first_id = created.json::<Value>()["id"].as_i64().unwrap();

    server
        .post("/api/contacts")
        .json(&contact_payload("João Souza"))
        .await;

    // archive the first submission
    let archived = server
        .put(&format!("/api/contacts/{first_id}/archive"))
        .await;
    assert_eq!(archived.status_code(), StatusCode::OK);
    assert_eq!(archived.json::<Value>()["is_archived"], true);

    // default listing hides archived contacts
    let all = server.get("/api/contacts").await;
    let contacts = all.json::<Vec<Value>>();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["name"], "João Souza");

    // the archived view shows only the archived one
    let archived_view = server
        .get("/api/contacts")
        .add_query_param("status", "archived")
        .await;
    let contacts = archived_view.json::<Vec<Value>>();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["name"], "Maria Silva");
}

#[tokio::test]
async fn contact_with_unmasked_phone_is_rejected() {
    let server = test_server();

    let mut payload = contact_payload("Maria");
    payload["phone"] = json!("11999991234");

    let response = server.post("/api/contacts").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn toggling_a_missing_contact_is_404() {
    let server = test_server();

    let response = server.put("/api/contacts/42/read").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["code"], "CONTACT_NOT_FOUND");
}

#[tokio::test]
async fn settings_patch_merges_and_normalizes() {
    let server = test_server();

    let patch = json!({
        "contact": {
            "email": "loja@example.com",
            "whatsapp": "11999991234"
        }
    });
    let updated = server.put("/api/settings").json(&patch).await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    let body = updated.json::<Value>();
    assert_eq!(body["contact"]["email"], "loja@example.com");
    // the country prefix is added before storing
    assert_eq!(body["contact"]["whatsapp"], "5511999991234");

    let fetched = server.get("/api/settings").await;
    assert_eq!(
        fetched.json::<Value>()["contact"]["email"],
        "loja@example.com"
    );
}

#[tokio::test]
async fn settings_patch_with_bad_whatsapp_is_rejected() {
    let server = test_server();

    let patch = json!({
        "contact": { "whatsapp": "not-a-number" }
    });
    let response = server.put("/api/settings").json(&patch).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn vehicle_update_and_delete_round_trip() {
    let server = test_server();

    let created = server
        .post("/api/vehicles")
        .json(&vehicle_payload("Fiat", "Uno", "AAA1111", "CARROS", 45_000.0))
        .await;
    let id = created.json::<Value>()["id"].as_i64().unwrap();

    let mut payload = vehicle_payload("Fiat", "Uno", "AAA1111", "CARROS", 42_000.0);
    payload["notes"] = json!("Preço reduzido.");
    let updated = server.put(&format!("/api/vehicles/{id}")).json(&payload).await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    assert_eq!(updated.json::<Value>()["price"], 42_000.0);

    let deleted = server.delete(&format!("/api/vehicles/{id}")).await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);

    let gone = server.get(&format!("/api/vehicles/{id}")).await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}
