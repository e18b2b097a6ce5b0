//! End-to-end API flows against the real router
//!
//! Run: cargo test -p desk-server --test api_flows

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use desk_server::api;
use desk_server::core::{Config, ServerState};
use desk_server::db::{Store, seed};

fn empty_state() -> ServerState {
    ServerState::new(Config::with_overrides(0, "test"), Store::new())
}

fn seeded_state() -> ServerState {
    let store = Store::new();
    seed::seed_demo_data(&store);
    ServerState::new(Config::with_overrides(0, "test"), store)
}

fn app(state: &ServerState) -> Router {
    api::build_app(state.clone())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn put_settings_body() -> Value {
    json!({
        "hotelName": "Seaside Inn",
        "address": "1 Seaside Ave",
        "phoneNumber": "555-0100",
        "email": "desk@example.com",
        "checkInTime": "14:00",
        "checkOutTime": "11:00",
        "currency": "$",
        "taxRate": 10.0,
        "defaultRoomRate": 80.0,
        "maxOccupancyPerRoom": 4,
        "allowEarlyCheckIn": true,
        "allowLateCheckOut": false,
        "earlyCheckInFee": 20.0,
        "lateCheckOutFee": 30.0,
        "extraBedFee": 15.0,
        "roomTypes": [
            { "name": "Single", "weekdayRate": 100.0, "weekendRate": 140.0 }
        ]
    })
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn health_reports_version() {
    let state = empty_state();
    let (status, body) = send(&app(&state), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "test");
}

// ============================================================================
// Rooms CRUD
// ============================================================================

#[tokio::test]
async fn room_crud_flow() {
    let state = empty_state();
    let app = app(&state);

    // Create
    let (status, created) = send(
        &app,
        "POST",
        "/api/rooms",
        Some(json!({
            "number": "101",
            "type": "Single",
            "rate": 100.0,
            "capacity": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["number"], "101");
    assert_eq!(created["occupancy"], "available");
    assert_eq!(created["housekeeping"], "clean");
    let id = created["id"].as_i64().unwrap();

    // List envelope
    let (status, listed) = send(&app, "GET", "/api/rooms", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["rooms"].as_array().unwrap().len(), 1);

    // Full update flips occupancy and housekeeping independently
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/rooms/{id}"),
        Some(json!({
            "number": "101",
            "type": "Single",
            "occupancy": "occupied",
            "housekeeping": "dirty",
            "rate": 120.0,
            "capacity": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["occupancy"], "occupied");
    assert_eq!(updated["housekeeping"], "dirty");
    assert_eq!(updated["rate"], 120.0);

    // Delete, then the room is gone
    let (status, deleted) = send(&app, "DELETE", &format!("/api/rooms/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!(true));
    let (status, _) = send(&app, "GET", &format!("/api/rooms/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_room_number_conflicts() {
    let state = empty_state();
    let app = app(&state);

    let payload = json!({ "number": "101", "type": "Single", "rate": 100.0 });
    let (status, _) = send(&app, "POST", "/api/rooms", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, "POST", "/api/rooms", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0004");
}

#[tokio::test]
async fn invalid_room_payload_rejected() {
    let state = empty_state();
    let app = app(&state);

    let (status, body) = send(
        &app,
        "POST",
        "/api/rooms",
        Some(json!({ "number": "", "type": "Single", "rate": -5.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

// ============================================================================
// Guests
// ============================================================================

#[tokio::test]
async fn guest_create_and_search() {
    let state = empty_state();
    let app = app(&state);

    for (name, email) in [
        ("John Doe", "john@example.com"),
        ("Jane Roe", "jane@elsewhere.org"),
    ] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/guests",
            Some(json!({ "name": name, "email": email, "phone": "1234567890" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, all) = send(&app, "GET", "/api/guests", None).await;
    assert_eq!(all["guests"].as_array().unwrap().len(), 2);

    let (_, filtered) = send(&app, "GET", "/api/guests?q=jane", None).await;
    let guests = filtered["guests"].as_array().unwrap();
    assert_eq!(guests.len(), 1);
    assert_eq!(guests[0]["name"], "Jane Roe");
}

#[tokio::test]
async fn guest_summary_zeroes_for_fresh_guest() {
    let state = empty_state();
    let app = app(&state);

    let (_, guest) = send(
        &app,
        "POST",
        "/api/guests",
        Some(json!({ "name": "John Doe", "email": "john@example.com", "phone": "1" })),
    )
    .await;
    let id = guest["id"].as_i64().unwrap();

    let (status, summary) = send(&app, "GET", &format!("/api/guests/{id}/summary"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalVisits"], 0);
    assert_eq!(summary["totalNights"], 0);
    assert_eq!(summary["totalSpent"], 0.0);
}

#[tokio::test]
async fn guest_summary_counts_upcoming_reservations() {
    let state = seeded_state();
    let app = app(&state);

    // Seeded guest 1 has the 2023-06-01 → 2023-06-05 reservation for 400
    let (status, summary) = send(&app, "GET", "/api/guests/1/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalVisits"], 1);
    assert_eq!(summary["totalNights"], 4);
    assert_eq!(summary["totalSpent"], 400.0);
}

// ============================================================================
// Reservations
// ============================================================================

#[tokio::test]
async fn reservation_create_fills_display_fields() {
    let state = seeded_state();
    let app = app(&state);

    let (status, created) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({
            "guestId": 1,
            "roomId": 2,
            "checkIn": "2023-07-01",
            "checkOut": "2023-07-03",
            "totalAmount": 300.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "confirmed");
    assert_eq!(created["guestName"], "John Doe");
    assert_eq!(created["roomType"], "Double");
    assert_eq!(created["roomNumber"], "102");
    assert_eq!(created["guestsCount"], 1);
}

#[tokio::test]
async fn reservation_reversed_dates_rejected() {
    let state = seeded_state();
    let app = app(&state);

    let (status, _) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({
            "guestId": 1,
            "roomId": 1,
            "checkIn": "2023-07-03",
            "checkOut": "2023-07-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reservation_status_patch() {
    let state = seeded_state();
    let app = app(&state);

    let (status, updated) = send(
        &app,
        "PATCH",
        "/api/reservations/1",
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "cancelled");

    let (status, _) = send(
        &app,
        "PATCH",
        "/api/reservations/99",
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Invoices
// ============================================================================

#[tokio::test]
async fn invoice_create_defaults_unpaid_and_patches() {
    let state = empty_state();
    let app = app(&state);

    let (status, created) = send(
        &app,
        "POST",
        "/api/invoices",
        Some(json!({
            "reservationId": 1,
            "guestName": "John Doe",
            "roomNumber": "101",
            "checkInDate": "2023-06-01",
            "checkOutDate": "2023-06-05",
            "roomCharge": 100.0,
            "additionalCharges": 0.0,
            "totalAmount": 100.0,
            "paymentMethod": "cash"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "unpaid");
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/api/invoices/{id}"),
        Some(json!({ "status": "paid" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "paid");
}

// ============================================================================
// Settings
// ============================================================================

#[tokio::test]
async fn settings_upsert_roundtrip() {
    let state = empty_state();
    let app = app(&state);

    let (status, _) = send(&app, "GET", "/api/settings", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, stored) = send(&app, "PUT", "/api/settings", Some(put_settings_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["hotelName"], "Seaside Inn");

    let (status, fetched) = send(&app, "GET", "/api/settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["currency"], "$");
    assert_eq!(fetched["roomTypes"][0]["weekendRate"], 140.0);
}

// ============================================================================
// Billing
// ============================================================================

#[tokio::test]
async fn billing_requires_settings() {
    let state = seeded_state();
    let app = app(&state);

    let (status, body) = send(
        &app,
        "POST",
        "/api/billing/reservations/1/down-payment",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        body["message"].as_str().unwrap().contains("Settings not loaded"),
        "unexpected message: {body}"
    );
}

#[tokio::test]
async fn down_payment_invoice_carries_down_payment_amount() {
    let state = seeded_state();
    let app = app(&state);
    send(&app, "PUT", "/api/settings", Some(put_settings_body())).await;

    // Book with a down payment
    let (_, reservation) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({
            "guestId": 1,
            "roomId": 1,
            "checkIn": "2023-08-01",
            "checkOut": "2023-08-04",
            "totalAmount": 400.0,
            "downPaymentAmount": 100.0,
            "downPaymentMethod": "card"
        })),
    )
    .await;
    let id = reservation["id"].as_i64().unwrap();

    let (status, invoice) = send(
        &app,
        "POST",
        &format!("/api/billing/reservations/{id}/down-payment"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(invoice["roomCharge"], 100.0);
    assert_eq!(invoice["totalAmount"], 100.0);
    assert_eq!(invoice["additionalCharges"], 0.0);
    assert_eq!(invoice["status"], "unpaid");

    // Down payment leaves the reservation status untouched
    let (_, fetched) = send(&app, "GET", &format!("/api/reservations/{id}"), None).await;
    assert_eq!(fetched["status"], "confirmed");
}

#[tokio::test]
async fn full_payment_chain_marks_both_paid() {
    let state = seeded_state();
    let app = app(&state);
    send(&app, "PUT", "/api/settings", Some(put_settings_body())).await;

    let (_, reservation) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({
            "guestId": 1,
            "roomId": 1,
            "checkIn": "2023-08-01",
            "checkOut": "2023-08-04",
            "totalAmount": 400.0,
            "downPaymentAmount": 100.0
        })),
    )
    .await;
    let id = reservation["id"].as_i64().unwrap();

    let (status, outcome) = send(
        &app,
        "POST",
        &format!("/api/billing/reservations/{id}/full-payment"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // Invoice over the remaining balance, already marked paid
    assert_eq!(outcome["invoice"]["totalAmount"], 300.0);
    assert_eq!(outcome["invoice"]["status"], "paid");
    assert_eq!(outcome["reservation"]["status"], "paid");

    // A second full payment is refused — the reservation is settled
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/billing/reservations/{id}/full-payment"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].as_str().unwrap().contains("already paid"));
}

#[tokio::test]
async fn full_payment_preserves_negative_remaining() {
    let state = seeded_state();
    let app = app(&state);
    send(&app, "PUT", "/api/settings", Some(put_settings_body())).await;

    // Down payment exceeds the total: a data-entry error upstream that the
    // invoice must surface, not clamp away
    let (_, reservation) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({
            "guestId": 1,
            "roomId": 1,
            "checkIn": "2023-08-01",
            "checkOut": "2023-08-02",
            "totalAmount": 100.0,
            "downPaymentAmount": 150.0
        })),
    )
    .await;
    let id = reservation["id"].as_i64().unwrap();

    let (status, outcome) = send(
        &app,
        "POST",
        &format!("/api/billing/reservations/{id}/full-payment"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["invoice"]["totalAmount"], -50.0);
}

#[tokio::test]
async fn invoice_print_view_derives_balance() {
    let state = seeded_state();
    let app = app(&state);
    send(&app, "PUT", "/api/settings", Some(put_settings_body())).await;

    let (_, reservation) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({
            "guestId": 1,
            "roomId": 1,
            "checkIn": "2023-08-01",
            "checkOut": "2023-08-04",
            "totalAmount": 400.0,
            "downPaymentAmount": 100.0
        })),
    )
    .await;
    let reservation_id = reservation["id"].as_i64().unwrap();

    let (_, invoice) = send(
        &app,
        "POST",
        &format!("/api/billing/reservations/{reservation_id}/down-payment"),
        None,
    )
    .await;
    let id = invoice["id"].as_i64().unwrap();

    let (status, view) = send(&app, "GET", &format!("/api/billing/invoices/{id}/print"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["invoiceNumber"], format!("INV-{:06}", id));
    assert_eq!(view["hotelName"], "Seaside Inn");
    // Unpaid invoice prints its full amount as balance due
    assert_eq!(view["balanceDue"], 100.0);
    assert_eq!(view["totalAmount"], 100.0);

    send(
        &app,
        "PATCH",
        &format!("/api/invoices/{id}"),
        Some(json!({ "status": "paid" })),
    )
    .await;
    let (_, paid_view) = send(&app, "GET", &format!("/api/billing/invoices/{id}/print"), None).await;
    assert_eq!(paid_view["balanceDue"], 0.0);
}

// ============================================================================
// Dashboard views
// ============================================================================

#[tokio::test]
async fn availability_calendar_matches_seed() {
    let state = seeded_state();
    let app = app(&state);

    let (status, body) = send(&app, "GET", "/api/availability?year=2023&month=6", None).await;
    assert_eq!(status, StatusCode::OK);

    let room1 = &body["availability"]["1"];
    for day in ["2023-06-01", "2023-06-02", "2023-06-03", "2023-06-04"] {
        assert_eq!(room1[day], false, "{day} should be taken");
    }
    assert_eq!(room1["2023-06-05"], true, "check-out day stays free");

    // Room 2 has no reservations at all
    let room2 = body["availability"]["2"].as_object().unwrap();
    assert_eq!(room2.len(), 30);
    assert!(room2.values().all(|free| free == &json!(true)));
}

#[tokio::test]
async fn availability_rejects_invalid_month() {
    let state = seeded_state();
    let (status, _) = send(
        &app(&state),
        "GET",
        "/api/availability?year=2023&month=13",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn notifications_flag_outstanding_balance() {
    let state = seeded_state();
    let app = app(&state);

    // The seeded reservation has totalAmount 400 and no down payment
    let (status, body) = send(&app, "GET", "/api/notifications", None).await;
    assert_eq!(status, StatusCode::OK);
    let notifications = body["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["type"], "payment");
    assert_eq!(notifications[0]["id"], "payment-1");
}

#[tokio::test]
async fn loyalty_ranking_with_top() {
    let state = seeded_state();
    let app = app(&state);

    let (status, body) = send(&app, "GET", "/api/loyalty", None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["points"], 100);
    assert_eq!(entries[0]["reservationCount"], 1);

    let (_, top) = send(&app, "GET", "/api/loyalty?top=0", None).await;
    assert!(top["entries"].as_array().unwrap().is_empty());
}

// ============================================================================
// Quotes
// ============================================================================

#[tokio::test]
async fn quote_uses_schedule_and_fees() {
    let state = seeded_state();
    let app = app(&state);
    send(&app, "PUT", "/api/settings", Some(put_settings_body())).await;

    // Room 1 is a Single; 2023-06-01 is a Thursday → Thu+Fri weekday,
    // Sat+Sun weekend
    let (status, quote) = send(
        &app,
        "POST",
        "/api/quotes",
        Some(json!({
            "roomId": 1,
            "checkIn": "2023-06-01",
            "checkOut": "2023-06-05",
            "earlyCheckIn": true
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["nights"], 4);
    assert_eq!(quote["roomSubtotal"], 480.0);
    assert_eq!(quote["earlyCheckInFee"], 20.0);
    // (480 + 20) * 10% tax
    assert_eq!(quote["tax"], 50.0);
    assert_eq!(quote["total"], 550.0);
}

// ============================================================================
// Sync versions
// ============================================================================

#[tokio::test]
async fn mutations_bump_resource_versions() {
    let state = empty_state();
    let app = app(&state);

    let (_, before) = send(&app, "GET", "/api/sync/versions", None).await;
    assert!(before["versions"].as_object().unwrap().is_empty());

    send(
        &app,
        "POST",
        "/api/rooms",
        Some(json!({ "number": "101", "type": "Single", "rate": 100.0 })),
    )
    .await;
    send(&app, "PUT", "/api/settings", Some(put_settings_body())).await;

    let (_, after) = send(&app, "GET", "/api/sync/versions", None).await;
    assert_eq!(after["versions"]["room"], 1);
    assert_eq!(after["versions"]["settings"], 1);
}
