use super::*;

/// Tests the first visit against an empty store.
///
/// Expected: New, and the current count is {current month, 1}
#[tokio::test]
async fn first_visit_is_new_and_counts_one() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let now = at(2025, 3, 10, 9);

    let service = VisitCounterService::new(db);
    let outcome = service.record_visit_at(false, now).await?;

    assert!(matches!(outcome, VisitOutcome::New(_)));
    assert_eq!(
        service.current_count_at(now).await?,
        VisitCounter {
            period: Period::new(2025, Month::March),
            views: 1,
        }
    );

    Ok(())
}

/// Tests that N marker-less visits in one month count N.
///
/// Expected: views == 12
#[tokio::test]
async fn counts_each_visit_without_marker() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = VisitCounterService::new(db);

    for day in 1..=12 {
        service.record_visit_at(false, at(2025, 3, day, 9)).await?;
    }

    let counter = service.current_count_at(at(2025, 3, 12, 9)).await?;
    assert_eq!(counter.views, 12);

    Ok(())
}

/// Tests that a visit presenting a valid marker never touches the counter.
///
/// Expected: Existing, views unchanged, no counter created on an empty store
#[tokio::test]
async fn visit_with_marker_is_existing_and_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let now = at(2025, 3, 10, 9);

    let service = VisitCounterService::new(db);

    let outcome = service.record_visit_at(true, now).await?;
    assert_eq!(outcome, VisitOutcome::Existing);
    assert_eq!(
        entity::prelude::VisitCounter::find().count(db).await?,
        0
    );

    service.record_visit_at(false, now).await?;
    for _ in 0..5 {
        assert_eq!(
            service.record_visit_at(true, now).await?,
            VisitOutcome::Existing
        );
    }

    assert_eq!(service.current_count_at(now).await?.views, 1);

    Ok(())
}

/// Tests the marker issued with a new visit.
///
/// Expected: expiry at 23:59:59.999 on the last day of the visit's month, identical
/// for every visit within that month
#[tokio::test]
async fn marker_expires_at_month_end() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = VisitCounterService::new(db);

    let VisitOutcome::New(early) = service.record_visit_at(false, at(2025, 3, 1, 0)).await? else {
        panic!("expected a new visit");
    };
    let VisitOutcome::New(late) = service.record_visit_at(false, at(2025, 3, 31, 23)).await?
    else {
        panic!("expected a new visit");
    };

    assert_eq!(
        early.expires_at,
        Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap()
            + chrono::TimeDelta::milliseconds(999)
    );
    assert_eq!(early.expires_at, late.expires_at);
    assert_ne!(early.token, late.token);

    Ok(())
}

/// Tests a visit arriving after the month-start trigger was missed.
///
/// The stale month must be archived before the visit is counted into the new month.
///
/// Expected: archive {March, 2025, 42}; counter {April, 1}
#[tokio::test]
async fn catches_up_missed_rollover() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_counter(db, "March", 2025, 42).await?;

    let service = VisitCounterService::new(db);
    let now = at(2025, 4, 3, 15);

    service.record_visit_at(false, now).await?;

    let history = service.history().await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].period, Period::new(2025, Month::March));
    assert_eq!(history[0].views, 42);

    assert_eq!(
        service.current_count_at(now).await?,
        VisitCounter {
            period: Period::new(2025, Month::April),
            views: 1,
        }
    );

    Ok(())
}

/// Tests a visit whose clock reads earlier than the stored month.
///
/// The counter must not move backwards or archive anything, and the marker must last
/// through the month the view was counted in.
///
/// Expected: counter stays {April, 6}; no archive rows; marker expires at end of April
#[tokio::test]
async fn clock_behind_counter_keeps_stored_month() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_counter(db, "April", 2025, 5).await?;

    let service = VisitCounterService::new(db);
    let VisitOutcome::New(marker) = service.record_visit_at(false, at(2025, 3, 31, 23)).await?
    else {
        panic!("expected a new visit");
    };

    assert_eq!(
        Some(marker.expires_at),
        Period::new(2025, Month::April).last_instant()
    );

    let counter = service.current_count_at(at(2025, 3, 31, 23)).await?;
    assert_eq!(counter.period, Period::new(2025, Month::April));
    assert_eq!(counter.views, 6);
    assert_eq!(archive_rows(db).await?, 0);

    Ok(())
}
