use super::*;

/// Tests rollover with nothing counted yet.
///
/// Expected: Skipped(NoRecord), no archive rows
#[tokio::test]
async fn skips_when_no_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = VisitCounterService::new(db)
        .rollover(at(2025, 4, 1, 0))
        .await?;

    assert_eq!(outcome, RolloverOutcome::Skipped(SkipReason::NoRecord));
    assert_eq!(archive_rows(db).await?, 0);

    Ok(())
}

/// Tests the regular month-start rollover.
///
/// Expected: archive {March, 2025, 42}; counter {April, 0}
#[tokio::test]
async fn archives_previous_month_and_resets() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_counter(db, "March", 2025, 42).await?;

    let service = VisitCounterService::new(db);
    let now = at(2025, 4, 1, 0);

    let outcome = service.rollover(now).await?;

    assert_eq!(
        outcome,
        RolloverOutcome::Archived {
            period: Period::new(2025, Month::March),
            views: 42,
        }
    );

    let history = service.history().await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].period, Period::new(2025, Month::March));
    assert_eq!(history[0].views, 42);
    assert_eq!(history[0].archived_at, now);

    assert_eq!(
        service.current_count_at(now).await?,
        VisitCounter {
            period: Period::new(2025, Month::April),
            views: 0,
        }
    );

    Ok(())
}

/// Tests the year boundary.
///
/// Expected: archive {December, 2024, 10}; counter {January 2025, 0}
#[tokio::test]
async fn january_archives_december_of_previous_year() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_counter(db, "December", 2024, 10).await?;

    let service = VisitCounterService::new(db);
    let now = at(2025, 1, 1, 0);

    service.rollover(now).await?;

    let history = service.history().await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].period, Period::new(2024, Month::December));
    assert_eq!(history[0].clone().into_dto().year, 2024);

    let counter = service.current_count_at(now).await?;
    assert_eq!(counter.period, Period::new(2025, Month::January));
    assert_eq!(counter.into_dto().month, "January");

    Ok(())
}

/// Tests two rollovers in immediate succession for the same transition.
///
/// Expected: first Archived, second Skipped(AlreadyCurrent); exactly one archive row
#[tokio::test]
async fn repeated_rollover_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_counter(db, "March", 2025, 42).await?;

    let service = VisitCounterService::new(db);
    let now = at(2025, 4, 1, 0);

    let first = service.rollover(now).await?;
    let second = service.rollover(now).await?;

    assert!(matches!(first, RolloverOutcome::Archived { .. }));
    assert_eq!(second, RolloverOutcome::Skipped(SkipReason::AlreadyCurrent));
    assert_eq!(archive_rows(db).await?, 1);

    Ok(())
}

/// Tests rollover when the counter already tracks the current month.
///
/// Expected: Skipped(AlreadyCurrent), counter untouched
#[tokio::test]
async fn skips_when_counter_is_current() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_counter(db, "April", 2025, 3).await?;

    let service = VisitCounterService::new(db);
    let outcome = service.rollover(at(2025, 4, 1, 0)).await?;

    assert_eq!(outcome, RolloverOutcome::Skipped(SkipReason::AlreadyCurrent));
    assert_eq!(service.current_count_at(at(2025, 4, 1, 0)).await?.views, 3);
    assert_eq!(archive_rows(db).await?, 0);

    Ok(())
}

/// Tests consecutive month transitions.
///
/// Expected: archive rows for March then April in that order
#[tokio::test]
async fn consecutive_months_append_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = VisitCounterService::new(db);

    service.record_visit_at(false, at(2025, 3, 5, 10)).await?;
    service.record_visit_at(false, at(2025, 3, 6, 10)).await?;
    service.rollover(at(2025, 4, 1, 0)).await?;
    service.record_visit_at(false, at(2025, 4, 9, 10)).await?;
    service.rollover(at(2025, 5, 1, 0)).await?;

    let history: Vec<(Period, i64)> = service
        .history()
        .await?
        .into_iter()
        .map(|a| (a.period, a.views))
        .collect();

    assert_eq!(
        history,
        vec![
            (Period::new(2025, Month::March), 2),
            (Period::new(2025, Month::April), 1),
        ]
    );
    assert_eq!(
        service.current_count_at(at(2025, 5, 1, 0)).await?,
        VisitCounter::empty(Period::new(2025, Month::May))
    );

    Ok(())
}

/// Tests scheduler, startup, and visit catch-up racing on one stale counter.
///
/// Rollovers that lose the compare-and-set roll back and re-read, then see the counter
/// already moved to the new month.
///
/// Expected: one archive row {March, 2025, 42}; no errors; April views == visit count
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_rollovers_archive_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_counter(db, "March", 2025, 42).await?;

    let now = at(2025, 4, 1, 0);
    let mut handles = Vec::new();
    let mut visits = 0;

    for i in 0..30 {
        let db = db.clone();
        let is_visit = i % 3 == 0;
        if is_visit {
            visits += 1;
        }

        handles.push(tokio::spawn(async move {
            let service = VisitCounterService::new(&db);

            if is_visit {
                service.record_visit_at(false, now).await.map(|_| ())
            } else {
                service.rollover(now).await.map(|_| ())
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap()?;
    }

    let service = VisitCounterService::new(db);

    let history = service.history().await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].period, Period::new(2025, Month::March));
    assert_eq!(history[0].views, 42);

    assert_eq!(
        service.current_count_at(now).await?,
        VisitCounter {
            period: Period::new(2025, Month::April),
            views: visits,
        }
    );

    Ok(())
}

/// Tests rollover after several missed month-start triggers.
///
/// Expected: the stale month is archived under its own label; counter moves to `now`'s month
#[tokio::test]
async fn stale_by_several_months_archives_stored_label() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_counter(db, "January", 2025, 12).await?;

    let service = VisitCounterService::new(db);
    let outcome = service.rollover(at(2025, 5, 3, 9)).await?;

    assert_eq!(
        outcome,
        RolloverOutcome::Archived {
            period: Period::new(2025, Month::January),
            views: 12,
        }
    );
    assert_eq!(
        service.current_count_at(at(2025, 5, 3, 9)).await?,
        VisitCounter::empty(Period::new(2025, Month::May))
    );

    Ok(())
}
