use connectors::store::{error::StoreError, session::StoreSession};
use model::{
    entities::{
        InsertRecord,
        order::{NewOrder, NewOrderItem},
        sale::SaleLine,
    },
    execution::failed_row::FailedRow,
    quality::{Counter, Entity, QualityTracker},
};
use tracing::{info, warn};

/// Load cleaned sales. Each sale expands into an order plus one line item
/// linked through the order's generated identity, inserted as a single
/// transactional unit: a failing item insert takes its order down with it.
/// `loaded` counts sales, not table rows.
pub async fn load_sales(
    session: &mut dyn StoreSession,
    sales: &[SaleLine],
    tracker: &mut QualityTracker,
) -> Result<Vec<FailedRow>, StoreError> {
    let mut failures = Vec::new();

    for (idx, sale) in sales.iter().enumerate() {
        match load_sale(session, sale).await {
            Ok(order_id) => {
                tracker.record(Entity::Sales, Counter::Loaded, 1);
                info!(row = idx, order_id, "Sale loaded");
            }
            Err(err) if err.is_row_level() => {
                session.rollback().await?;
                warn!(row = idx, error = %err, "Sale rejected by store; skipping");
                failures.push(FailedRow::new(Entity::Sales, NewOrder::TABLE, idx, err.to_string()));
            }
            Err(fatal) => {
                session.rollback().await.ok();
                return Err(fatal);
            }
        }
    }

    Ok(failures)
}

async fn load_sale(session: &mut dyn StoreSession, sale: &SaleLine) -> Result<u64, StoreError> {
    let total = sale.total_amount();

    session.begin().await?;

    let order = NewOrder {
        customer_id: sale.customer_id,
        order_date: sale.transaction_date,
        total_amount: total,
    };
    let order_id = session
        .insert(NewOrder::TABLE, NewOrder::COLUMNS, &order.insert_values())
        .await?;

    let item = NewOrderItem {
        order_id,
        product_id: sale.product_id,
        quantity: sale.quantity,
        unit_price: sale.unit_price,
        subtotal: total,
    };
    session
        .insert(
            NewOrderItem::TABLE,
            NewOrderItem::COLUMNS,
            &item.insert_values(),
        )
        .await?;

    session.commit().await?;
    Ok(order_id)
}
