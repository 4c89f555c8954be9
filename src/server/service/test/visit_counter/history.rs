use super::*;

/// Tests history with an empty archive.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_history() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let history = VisitCounterService::new(db).history().await?;

    assert!(history.is_empty());

    Ok(())
}

/// Tests that history returns previously archived months oldest first.
///
/// Expected: January then February
#[tokio::test]
async fn returns_archived_months_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_archived_period(db, "January", 2025, 4).await?;
    factory::create_archived_period(db, "February", 2025, 9).await?;

    let history = VisitCounterService::new(db).history().await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].period, Period::new(2025, Month::January));
    assert_eq!(history[1].period, Period::new(2025, Month::February));
    assert_eq!(history[1].views, 9);

    Ok(())
}
