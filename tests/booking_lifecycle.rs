//! Tests de integración del engine de bookings sobre el store en memoria

use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use car_hire::dto::booking_dto::{CreateBookingRequest, UpdateBookingRequest};
use car_hire::models::auth::UserRole;
use car_hire::models::booking::BookingStatus;
use car_hire::models::client::Client;
use car_hire::models::vehicle::Vehicle;
use car_hire::repositories::memory::MemoryStore;
use car_hire::repositories::{BookingStore, ClientStore, VehicleStore};
use car_hire::services::access_policy::StaticAccessPolicy;
use car_hire::services::availability::ranges_overlap;
use car_hire::services::booking_service::BookingService;
use car_hire::utils::errors::AppError;

struct Fixture {
    service: Arc<BookingService>,
    store: MemoryStore,
    client_id: Uuid,
    vehicle_id: Uuid,
}

async fn fixture_with_rate(daily_rate: i64) -> Fixture {
    let store = MemoryStore::new();
    let service = Arc::new(BookingService::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(StaticAccessPolicy::new()),
    ));

    let client = Client {
        id: Uuid::new_v4(),
        full_name: "Grace Njeri".to_string(),
        id_or_passport: "B7654321".to_string(),
        phone: "+254711000002".to_string(),
        address: Some("Mombasa Road, Nairobi".to_string()),
        license_number: "DL-2044".to_string(),
        created_at: Utc::now(),
    };
    let vehicle = Vehicle {
        id: Uuid::new_v4(),
        make: "Mazda".to_string(),
        model: "Demio".to_string(),
        year: 2020,
        color: Some("White".to_string()),
        license_plate: "KDD 404D".to_string(),
        daily_rate: Decimal::from(daily_rate),
        created_at: Utc::now(),
    };
    ClientStore::insert(&store, &client).await.unwrap();
    VehicleStore::insert(&store, &vehicle).await.unwrap();

    Fixture {
        service,
        store,
        client_id: client.id,
        vehicle_id: vehicle.id,
    }
}

/// Fecha futura relativa a hoy, como string del layer HTTP
fn day(offset: i64) -> String {
    (Utc::now().date_naive() + Duration::days(offset))
        .format("%Y-%m-%d")
        .to_string()
}

fn request(fixture: &Fixture, start: i64, end: i64) -> CreateBookingRequest {
    CreateBookingRequest {
        client: Some(fixture.client_id.to_string()),
        vehicle: Some(fixture.vehicle_id.to_string()),
        start_date: Some(day(start)),
        end_date: Some(day(end)),
    }
}

fn empty_patch() -> UpdateBookingRequest {
    UpdateBookingRequest {
        client: None,
        vehicle: None,
        start_date: None,
        end_date: None,
    }
}

#[tokio::test]
async fn test_reference_scenario_pricing_and_overlaps() {
    let fixture = fixture_with_rate(5000).await;

    // Booking A del día 10 al 12: 3 días a 5000
    let a = fixture
        .service
        .create(UserRole::Staff, request(&fixture, 10, 12))
        .await
        .unwrap();
    assert_eq!(a.days, 3);
    assert_eq!(a.total_amount, Decimal::from(15000));
    assert_eq!(a.status, BookingStatus::Active);

    // Solapamiento parcial 11..13 falla
    let err = fixture
        .service
        .create(UserRole::Staff, request(&fixture, 11, 13))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::VehicleUnavailable(_)));

    // Empezar exactamente el día de devolución de A también falla:
    // la política de solapamiento es inclusiva en ambos extremos
    let err = fixture
        .service
        .create(UserRole::Staff, request(&fixture, 12, 15))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::VehicleUnavailable(_)));

    // El día siguiente a la devolución sí está libre
    let b = fixture
        .service
        .create(UserRole::Staff, request(&fixture, 13, 15))
        .await
        .unwrap();
    assert_eq!(b.days, 3);
}

#[tokio::test]
async fn test_validation_failures_create_nothing() {
    let fixture = fixture_with_rate(5000).await;

    // startDate > endDate
    let err = fixture
        .service
        .create(UserRole::Staff, request(&fixture, 12, 10))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidDateRange(_)));

    // startDate estrictamente antes de hoy
    let err = fixture
        .service
        .create(UserRole::Staff, request(&fixture, -1, 5))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::PastStartDate(_)));

    // Campo faltante
    let mut incomplete = request(&fixture, 10, 12);
    incomplete.vehicle = None;
    let err = fixture
        .service
        .create(UserRole::Staff, incomplete)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MissingField(_)));

    assert!(BookingStore::find_all(&fixture.store)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_same_day_booking_costs_one_daily_rate() {
    let fixture = fixture_with_rate(4200).await;

    let booking = fixture
        .service
        .create(UserRole::Staff, request(&fixture, 10, 10))
        .await
        .unwrap();
    assert_eq!(booking.days, 1);
    assert_eq!(booking.total_amount, Decimal::from(4200));
}

#[tokio::test]
async fn test_terminal_states_reject_any_transition() {
    let fixture = fixture_with_rate(5000).await;

    let booking = fixture
        .service
        .create(UserRole::Staff, request(&fixture, 10, 12))
        .await
        .unwrap();

    let completed = fixture
        .service
        .change_status(UserRole::Staff, booking.id, "Completed")
        .await
        .unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);

    // Completed -> Active
    let err = fixture
        .service
        .change_status(UserRole::Staff, booking.id, "Active")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::TerminalStateViolation(_)));

    // Completed -> Cancelled
    let err = fixture
        .service
        .change_status(UserRole::Staff, booking.id, "Cancelled")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::TerminalStateViolation(_)));
}

#[tokio::test]
async fn test_self_transition_is_invalid_not_terminal() {
    let fixture = fixture_with_rate(5000).await;

    let booking = fixture
        .service
        .create(UserRole::Staff, request(&fixture, 10, 12))
        .await
        .unwrap();

    let err = fixture
        .service
        .change_status(UserRole::Staff, booking.id, "Active")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));

    // Un estado desconocido tampoco es una transición válida
    let err = fixture
        .service
        .change_status(UserRole::Staff, booking.id, "Pending")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));
}

#[tokio::test]
async fn test_cancelling_frees_the_range_and_delete_keeps_it_free() {
    let fixture = fixture_with_rate(5000).await;

    let a = fixture
        .service
        .create(UserRole::Staff, request(&fixture, 10, 12))
        .await
        .unwrap();

    fixture
        .service
        .change_status(UserRole::Staff, a.id, "Cancelled")
        .await
        .unwrap();

    // Un booking Cancelled ya no bloquea el rango
    let start = Utc::now().date_naive() + Duration::days(10);
    let end = Utc::now().date_naive() + Duration::days(12);
    assert!(fixture
        .service
        .check_availability(fixture.vehicle_id, start, end)
        .await
        .unwrap());

    // Borrarlo (cualquier estado puede borrarse) mantiene el rango libre
    assert!(fixture
        .service
        .delete(UserRole::Director, a.id)
        .await
        .unwrap());
    let b = fixture
        .service
        .create(UserRole::Staff, request(&fixture, 10, 12))
        .await
        .unwrap();
    assert_eq!(b.status, BookingStatus::Active);
}

#[tokio::test]
async fn test_delete_is_permission_gated_and_reports_not_found() {
    let fixture = fixture_with_rate(5000).await;

    let booking = fixture
        .service
        .create(UserRole::Staff, request(&fixture, 10, 12))
        .await
        .unwrap();

    // Staff no tiene bookings/delete
    let err = fixture
        .service
        .delete(UserRole::Staff, booking.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));

    // Director sí; y el segundo intento es NotFound
    assert!(fixture
        .service
        .delete(UserRole::Director, booking.id)
        .await
        .unwrap());
    let err = fixture
        .service
        .delete(UserRole::Director, booking.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_update_excludes_its_own_range_from_the_overlap_scan() {
    let fixture = fixture_with_rate(5000).await;

    let a = fixture
        .service
        .create(UserRole::Staff, request(&fixture, 10, 12))
        .await
        .unwrap();

    // Correr el propio booking un día no choca consigo mismo
    let mut patch = empty_patch();
    patch.start_date = Some(day(11));
    patch.end_date = Some(day(13));
    let updated = fixture
        .service
        .update(UserRole::Staff, a.id, patch)
        .await
        .unwrap();
    assert_eq!(updated.days, 3);

    // Pero sí choca contra otro booking Active del mismo vehículo
    fixture
        .service
        .create(UserRole::Staff, request(&fixture, 20, 22))
        .await
        .unwrap();
    let mut patch = empty_patch();
    patch.start_date = Some(day(19));
    patch.end_date = Some(day(21));
    let err = fixture
        .service
        .update(UserRole::Staff, a.id, patch)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::VehicleUnavailable(_)));
}

#[tokio::test]
async fn test_update_of_unknown_booking_is_not_found() {
    let fixture = fixture_with_rate(5000).await;

    let err = fixture
        .service
        .update(UserRole::Staff, Uuid::new_v4(), empty_patch())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_availability_check_is_idempotent() {
    let fixture = fixture_with_rate(5000).await;

    fixture
        .service
        .create(UserRole::Staff, request(&fixture, 10, 12))
        .await
        .unwrap();

    let start = Utc::now().date_naive() + Duration::days(11);
    let end = Utc::now().date_naive() + Duration::days(13);

    let first = fixture
        .service
        .check_availability(fixture.vehicle_id, start, end)
        .await
        .unwrap();
    let second = fixture
        .service
        .check_availability(fixture.vehicle_id, start, end)
        .await
        .unwrap();
    assert_eq!(first, second);
    assert!(!first);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_never_double_book_a_vehicle() {
    let fixture = fixture_with_rate(5000).await;

    // Ocho requests simultáneas por el mismo vehículo y rango solapado
    let attempts = (0..8).map(|i| {
        let service = fixture.service.clone();
        let request = CreateBookingRequest {
            client: Some(fixture.client_id.to_string()),
            vehicle: Some(fixture.vehicle_id.to_string()),
            start_date: Some(day(10 + (i % 2))),
            end_date: Some(day(13)),
        };
        tokio::spawn(async move { service.create(UserRole::Staff, request).await })
    });

    let results = futures::future::join_all(attempts).await;
    let (ok, unavailable): (Vec<_>, Vec<_>) = results
        .into_iter()
        .map(|r| r.expect("task panicked"))
        .partition(|r| r.is_ok());

    assert_eq!(ok.len(), 1, "exactly one booking must win the range");
    assert!(unavailable
        .iter()
        .all(|r| matches!(r, Err(AppError::VehicleUnavailable(_)))));

    // Invariante central: ningún par de bookings Active del vehículo solapa
    let active = BookingStore::find_active_for_vehicle(&fixture.store, fixture.vehicle_id, None)
        .await
        .unwrap();
    for (i, a) in active.iter().enumerate() {
        for b in active.iter().skip(i + 1) {
            assert!(!ranges_overlap(
                a.start_date,
                a.end_date,
                b.start_date,
                b.end_date
            ));
        }
    }
}
