use connectors::store::{error::StoreError, session::StoreSession};
use model::{
    entities::InsertRecord,
    execution::failed_row::FailedRow,
    quality::{Counter, Entity, QualityTracker},
};
use tracing::{info, warn};

const ROW_SAVEPOINT: &str = "row_boundary";

/// Load cleaned records that each map to one insert. The whole entity batch
/// runs in one transaction; each row gets a savepoint so a constraint
/// rejection rolls back that row alone and the batch continues. Successful
/// rows commit as a unit at the end.
pub async fn load_batch<R: InsertRecord>(
    session: &mut dyn StoreSession,
    entity: Entity,
    records: &[R],
    tracker: &mut QualityTracker,
) -> Result<Vec<FailedRow>, StoreError> {
    let mut failures = Vec::new();

    session.begin().await?;
    for (idx, record) in records.iter().enumerate() {
        match insert_row(session, record).await {
            Ok(()) => tracker.record(entity, Counter::Loaded, 1),
            Err(err) if err.is_row_level() => {
                if let Err(fatal) = session.rollback_to_savepoint(ROW_SAVEPOINT).await {
                    session.rollback().await.ok();
                    return Err(fatal);
                }
                warn!(%entity, row = idx, error = %err, "Row rejected by store; skipping");
                failures.push(FailedRow::new(entity, R::TABLE, idx, err.to_string()));
            }
            Err(fatal) => {
                session.rollback().await.ok();
                return Err(fatal);
            }
        }
    }
    session.commit().await?;

    info!(
        %entity,
        attempted = records.len(),
        failed = failures.len(),
        "Batch load committed"
    );
    Ok(failures)
}

async fn insert_row<R: InsertRecord>(
    session: &mut dyn StoreSession,
    record: &R,
) -> Result<(), StoreError> {
    session.savepoint(ROW_SAVEPOINT).await?;
    session
        .insert(R::TABLE, R::COLUMNS, &record.insert_values())
        .await?;
    session.release_savepoint(ROW_SAVEPOINT).await?;
    Ok(())
}
