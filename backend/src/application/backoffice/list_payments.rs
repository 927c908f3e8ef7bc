use crate::application::errors::{self, CommandError};
use crate::application::pagination::{Page, PageParams};
use crate::application::ports::{BackofficeData, Payment};

/// Newest-first payment listing with an optional package-name filter.
pub async fn execute(
    data: &dyn BackofficeData,
    package: Option<&str>,
    page: PageParams,
) -> Result<Page<Payment>, CommandError> {
    let mut payments = data.payments().await.map_err(errors::internal)?;

    if let Some(package) = package {
        let needle = package.to_lowercase();
        payments.retain(|p| p.package_name.to_lowercase().contains(&needle));
    }
    payments.sort_by(|a, b| b.paid_at.cmp(&a.paid_at));

    Ok(Page::from_slice(&payments, page))
}
