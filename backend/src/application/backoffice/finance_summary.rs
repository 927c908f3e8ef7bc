use std::collections::BTreeMap;

use crate::application::errors::{self, CommandError};
use crate::application::ports::BackofficeData;

#[derive(Debug, serde::Serialize)]
pub struct FinanceSummary {
    pub total_revenue_vnd: i64,
    pub payment_count: u64,
    /// Buckets keyed `YYYY-MM`, oldest first.
    pub by_month: Vec<MonthBucket>,
}

#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct MonthBucket {
    pub month: String,
    pub revenue_vnd: i64,
    pub payment_count: u64,
}

pub async fn execute(data: &dyn BackofficeData) -> Result<FinanceSummary, CommandError> {
    let payments = data.payments().await.map_err(errors::internal)?;

    let mut months: BTreeMap<String, MonthBucket> = BTreeMap::new();
    let mut total = 0i64;
    for payment in &payments {
        total += payment.amount_vnd;
        let key = payment.paid_at.format("%Y-%m").to_string();
        let bucket = months.entry(key.clone()).or_insert(MonthBucket {
            month: key,
            revenue_vnd: 0,
            payment_count: 0,
        });
        bucket.revenue_vnd += payment.amount_vnd;
        bucket.payment_count += 1;
    }

    Ok(FinanceSummary {
        total_revenue_vnd: total,
        payment_count: payments.len() as u64,
        by_month: months.into_values().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::backoffice_data::{MockBackofficeData, Payment};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn payment(amount: i64, year: i32, month: u32) -> Payment {
        Payment {
            id: Uuid::new_v4(),
            wedding_slug: "an-va-binh".to_string(),
            package_name: "Cao cấp".to_string(),
            amount_vnd: amount,
            method: "vietqr".to_string(),
            paid_at: Utc.with_ymd_and_hms(year, month, 15, 9, 30, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_buckets_by_month_in_order() {
        let mut data = MockBackofficeData::new();
        data.expect_payments().returning(|| {
            Ok(vec![
                payment(590_000, 2026, 3),
                payment(290_000, 2026, 1),
                payment(590_000, 2026, 3),
            ])
        });

        let summary = execute(&data).await.unwrap();
        assert_eq!(summary.total_revenue_vnd, 1_470_000);
        assert_eq!(summary.payment_count, 3);
        assert_eq!(
            summary.by_month,
            vec![
                MonthBucket {
                    month: "2026-01".to_string(),
                    revenue_vnd: 290_000,
                    payment_count: 1,
                },
                MonthBucket {
                    month: "2026-03".to_string(),
                    revenue_vnd: 1_180_000,
                    payment_count: 2,
                },
            ]
        );
    }
}
