use serde::Serialize;

const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 100;

/// 1-based page request, clamped to sane bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub page_size: u32,
}

impl PageParams {
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results plus the totals list views render.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub page_count: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, params: PageParams) -> Self {
        Self {
            items,
            total,
            page: params.page,
            page_size: params.page_size,
            page_count: total.div_ceil(u64::from(params.page_size)),
        }
    }

    /// Slice a fully materialized list (the back-office mock data path).
    pub fn from_slice(all: &[T], params: PageParams) -> Self
    where
        T: Clone,
    {
        let total = all.len() as u64;
        let start = (params.offset() as usize).min(all.len());
        let end = (start + params.page_size as usize).min(all.len());
        Self::new(all[start..end].to_vec(), total, params)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            page_count: self.page_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_page_count_is_ceiling_of_total_over_size() {
        let params = PageParams::new(Some(1), Some(20));
        assert_eq!(Page::<u32>::new(vec![], 0, params).page_count, 0);
        assert_eq!(Page::<u32>::new(vec![], 1, params).page_count, 1);
        assert_eq!(Page::<u32>::new(vec![], 20, params).page_count, 1);
        assert_eq!(Page::<u32>::new(vec![], 21, params).page_count, 2);
        assert_eq!(Page::<u32>::new(vec![], 100, params).page_count, 5);
    }

    #[test]
    fn test_params_are_clamped() {
        let params = PageParams::new(Some(0), Some(0));
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 1);

        let params = PageParams::new(None, Some(10_000));
        assert_eq!(params.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageParams::new(Some(1), Some(20)).offset(), 0);
        assert_eq!(PageParams::new(Some(3), Some(20)).offset(), 40);
    }

    #[test]
    fn test_from_slice_pages_past_the_end_are_empty() {
        let all: Vec<u32> = (0..45).collect();
        let page = Page::from_slice(&all, PageParams::new(Some(9), Some(10)));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 45);
        assert_eq!(page.page_count, 5);
    }

    proptest! {
        #[test]
        fn page_count_times_size_covers_total(total in 0u64..10_000, size in 1u32..=100) {
            let page = Page::<u32>::new(vec![], total, PageParams::new(Some(1), Some(size)));
            let covered = page.page_count * u64::from(size);
            prop_assert!(covered >= total);
            if page.page_count > 0 {
                prop_assert!(covered - total < u64::from(size));
            }
        }
    }
}
