//! End-to-end flows through the event loop with a fake capture collaborator.

use async_trait::async_trait;
use radar_motu::app::{AppState, Event, Runtime, Screen};
use radar_motu::capture::{CaptureSource, PlateCapture, RecognitionResult};
use radar_motu::domain::{Field, ValidationError, VehicleDraft};
use radar_motu::registry::ListingStatus;
use radar_motu::storage::{JsonStorage, MemoryStorage};
use radar_motu::worker::RegistryWorker;
use radar_motu::{RadarMotuError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns a fixed outcome and counts calls.
struct FakeCapture {
    outcome: std::result::Result<Option<RecognitionResult>, String>,
    calls: AtomicUsize,
}

impl FakeCapture {
    fn returning(result: RecognitionResult) -> Self {
        Self {
            outcome: Ok(Some(result)),
            calls: AtomicUsize::new(0),
        }
    }

    fn cancelled() -> Self {
        Self {
            outcome: Ok(None),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PlateCapture for FakeCapture {
    async fn capture(&self, _source: CaptureSource) -> Result<Option<RecognitionResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
            .clone()
            .map_err(RadarMotuError::RemoteCapture)
    }
}

fn fill_form() -> Vec<Event> {
    [
        (Field::Plate, "ABC1D23"),
        (Field::Brand, "Honda"),
        (Field::Model, "CG 160 Fan"),
        (Field::Color, "Red"),
        (Field::ManufactureYear, "2022"),
        (Field::ModelYear, "2023"),
        (Field::Chassis, "9C2KC2200NR000001"),
    ]
    .into_iter()
    .map(|(field, value)| Event::FieldChanged {
        field,
        value: value.to_string(),
    })
    .collect()
}

async fn dispatch_all<C: PlateCapture>(
    runtime: &Runtime<impl radar_motu::storage::Storage + 'static, C>,
    state: &mut AppState,
    events: Vec<Event>,
) {
    for event in events {
        runtime.dispatch(state, event).await.unwrap();
    }
}

#[tokio::test]
async fn registered_vehicle_is_listed_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(dir.path().join("registry.json")).unwrap();
    let runtime = Runtime::new(RegistryWorker::new(storage), FakeCapture::cancelled());
    let mut state = AppState::default();

    dispatch_all(&runtime, &mut state, vec![Event::Navigate(Screen::Register)]).await;
    dispatch_all(&runtime, &mut state, fill_form()).await;

    let notices = runtime.dispatch(&mut state, Event::Submit).await.unwrap();
    assert_eq!(notices.len(), 1);
    assert!(!notices[0].is_error(), "{}", notices[0]);
    assert_eq!(state.form, VehicleDraft::default());

    runtime
        .dispatch(&mut state, Event::Navigate(Screen::List))
        .await
        .unwrap();
    assert_eq!(state.listing.status(), &ListingStatus::Loaded);
    let plates: Vec<&str> = state
        .listing
        .vehicles()
        .iter()
        .map(|v| v.plate.as_str())
        .collect();
    assert_eq!(plates, vec!["ABC1D23"]);
}

#[tokio::test]
async fn invalid_year_never_reaches_storage() {
    let runtime = Runtime::new(RegistryWorker::new(MemoryStorage::new()), FakeCapture::cancelled());
    let mut state = AppState::default();

    let mut events = fill_form();
    events.push(Event::FieldChanged {
        field: Field::ModelYear,
        value: "23".to_string(),
    });
    dispatch_all(&runtime, &mut state, events).await;

    let notices = runtime.dispatch(&mut state, Event::Submit).await.unwrap();
    assert!(notices[0].is_error());
    assert!(runtime.worker().store().load_all().unwrap().is_empty());
    assert_eq!(state.form.plate, "ABC1D23");
}

#[tokio::test]
async fn overlong_and_non_digit_years_are_rejected_as_typed() {
    let runtime = Runtime::new(RegistryWorker::new(MemoryStorage::new()), FakeCapture::cancelled());
    let mut state = AppState::default();

    let mut events = fill_form();
    events.push(Event::FieldChanged {
        field: Field::ManufactureYear,
        value: "20233".to_string(),
    });
    events.push(Event::FieldChanged {
        field: Field::ModelYear,
        value: "20ab23".to_string(),
    });
    dispatch_all(&runtime, &mut state, events).await;
    assert_eq!(state.form.manufacture_year, "20233");
    assert_eq!(state.form.model_year, "20ab23");

    let notices = runtime.dispatch(&mut state, Event::Submit).await.unwrap();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());
    assert_eq!(
        notices[0].message,
        ValidationError::InvalidYearFormat.to_string()
    );
    assert!(!state.submitting);
    assert!(runtime.worker().store().load_all().unwrap().is_empty());
}

#[tokio::test]
async fn storage_failure_keeps_the_form_for_retry() {
    let mut storage = MemoryStorage::new();
    storage.set_fail_writes(true);
    let runtime = Runtime::new(RegistryWorker::new(storage), FakeCapture::cancelled());
    let mut state = AppState::default();

    dispatch_all(&runtime, &mut state, fill_form()).await;
    let notices = runtime.dispatch(&mut state, Event::Submit).await.unwrap();
    assert!(notices[0].is_error());
    assert_eq!(state.form.brand, "Honda");
    assert!(!state.submitting);

    runtime
        .worker()
        .store()
        .with_storage(|s| s.set_fail_writes(false))
        .unwrap();
    let notices = runtime.dispatch(&mut state, Event::Submit).await.unwrap();
    assert!(!notices[0].is_error());
    assert_eq!(runtime.worker().store().load_all().unwrap().len(), 1);
}

#[tokio::test]
async fn recognized_plate_fills_the_form() {
    let capture = FakeCapture::returning(RecognitionResult::Recognized("abc1d23".to_string()));
    let runtime = Runtime::new(RegistryWorker::new(MemoryStorage::new()), capture);
    let mut state = AppState::default();

    runtime
        .dispatch(&mut state, Event::RequestCapture(CaptureSource::Camera))
        .await
        .unwrap();
    assert_eq!(state.form.plate, "ABC1D23");
    assert!(!state.capturing);
}

#[tokio::test]
async fn non_plate_text_leaves_the_form_alone() {
    let capture =
        FakeCapture::returning(RecognitionResult::Recognized("Plate not detected".to_string()));
    let runtime = Runtime::new(RegistryWorker::new(MemoryStorage::new()), capture);
    let mut state = AppState::default();
    state.form.plate = "typed by hand".to_string();

    let notices = runtime
        .dispatch(&mut state, Event::RequestCapture(CaptureSource::Gallery))
        .await
        .unwrap();
    assert!(notices[0].is_error());
    assert_eq!(state.form.plate, "typed by hand");
}

#[tokio::test]
async fn capture_errors_and_cancellation_are_recoverable() {
    let failing = Runtime::new(
        RegistryWorker::new(MemoryStorage::new()),
        FakeCapture::failing("connection refused"),
    );
    let mut state = AppState::default();

    let notices = failing
        .dispatch(&mut state, Event::RequestCapture(CaptureSource::Camera))
        .await
        .unwrap();
    assert!(notices[0].message.contains("connection refused"));
    assert!(!state.capturing);

    let cancelled = Runtime::new(RegistryWorker::new(MemoryStorage::new()), FakeCapture::cancelled());
    let notices = cancelled
        .dispatch(&mut state, Event::RequestCapture(CaptureSource::Camera))
        .await
        .unwrap();
    assert!(notices.is_empty());
    assert!(!state.capturing);
}

#[tokio::test]
async fn capture_in_flight_blocks_a_second_request() {
    let capture = FakeCapture::returning(RecognitionResult::Recognized("ABC1D23".to_string()));
    let runtime = Runtime::new(RegistryWorker::new(MemoryStorage::new()), capture);
    let mut state = AppState::default();
    state.capturing = true;

    runtime
        .dispatch(&mut state, Event::RequestCapture(CaptureSource::Camera))
        .await
        .unwrap();
    assert!(state.form.plate.is_empty());
}

#[tokio::test]
async fn list_reload_failure_keeps_previous_records() {
    let runtime = Runtime::new(RegistryWorker::new(MemoryStorage::new()), FakeCapture::cancelled());
    let mut state = AppState::default();

    dispatch_all(&runtime, &mut state, fill_form()).await;
    runtime.dispatch(&mut state, Event::Submit).await.unwrap();
    runtime
        .dispatch(&mut state, Event::Navigate(Screen::List))
        .await
        .unwrap();
    assert_eq!(state.listing.vehicles().len(), 1);

    runtime
        .worker()
        .store()
        .with_storage(|s| s.set_fail_reads(true))
        .unwrap();
    let notices = runtime
        .dispatch(&mut state, Event::Navigate(Screen::List))
        .await
        .unwrap();
    assert!(notices[0].is_error());
    assert!(matches!(state.listing.status(), ListingStatus::LoadFailed(_)));
    assert_eq!(state.listing.vehicles().len(), 1);
}
