use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    20
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

impl ListParams {
    /// Slices `rows` to the requested page, clamping page to >= 1 and
    /// per_page to 1..=100.
    pub fn paginate<R, T, F>(&self, rows: &[R], map: F) -> Page<T>
    where
        F: Fn(&R) -> T,
    {
        let page = self.page.max(1);
        let per_page = self.per_page.clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);

        let items = rows.iter().skip(offset).take(per_page).map(map).collect();

        Page {
            items,
            total: rows.len(),
            page,
            per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_page() {
        let rows: Vec<u32> = (1..=12).collect();
        let params = ListParams { page: 2, per_page: 5 };
        let page = params.paginate(&rows, |r| *r);

        assert_eq!(page.items, vec![6, 7, 8, 9, 10]);
        assert_eq!(page.total, 12);
    }

    #[test]
    fn test_clamps_bounds() {
        let rows: Vec<u32> = (1..=3).collect();
        let params = ListParams { page: 0, per_page: 0 };
        let page = params.paginate(&rows, |r| *r);

        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 1);
        assert_eq!(page.items, vec![1]);
    }

    #[test]
    fn test_past_end_is_empty() {
        let rows: Vec<u32> = (1..=3).collect();
        let params = ListParams { page: 9, per_page: 20 };
        assert!(params.paginate(&rows, |r| *r).items.is_empty());
    }
}
