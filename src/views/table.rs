use serde::{Deserialize, Serialize};

pub const PAGE_SIZES: [usize; 5] = [10, 20, 30, 40, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    pub fn flip(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// Active sort column and direction. Picking the active column again flips
/// the direction; a new column starts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState<K> {
    pub key: K,
    pub dir: SortDir,
}

impl<K: PartialEq + Copy> SortState<K> {
    pub fn toggle(self, key: K) -> Self {
        if key == self.key {
            Self {
                key,
                dir: self.dir.flip(),
            }
        } else {
            Self {
                key,
                dir: SortDir::Asc,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePage<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total: usize,
    pub page_sizes: [usize; 5],
    pub can_first: bool,
    pub can_prev: bool,
    pub can_next: bool,
    pub can_last: bool,
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if total == 0 || page_size == 0 {
        1
    } else {
        total.div_ceil(page_size)
    }
}

/// Slices `items` to the 1-based `page`, clamping out-of-range pages and
/// falling back to the default size for sizes not on offer.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> TablePage<T> {
    let page_size = if PAGE_SIZES.contains(&page_size) {
        page_size
    } else {
        DEFAULT_PAGE_SIZE
    };
    let total = items.len();
    let page_count = page_count(total, page_size);
    let page = page.clamp(1, page_count);

    let rows = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    TablePage {
        rows,
        page,
        page_size,
        page_count,
        total,
        page_sizes: PAGE_SIZES,
        can_first: page > 1,
        can_prev: page > 1,
        can_next: page < page_count,
        can_last: page < page_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_never_zero() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
    }

    #[test]
    fn navigation_enablement() {
        let first = paginate((1..=25).collect::<Vec<_>>(), 1, 10);
        assert_eq!(first.rows, (1..=10).collect::<Vec<_>>());
        assert!(!first.can_first && !first.can_prev && first.can_next && first.can_last);

        let last = paginate((1..=25).collect::<Vec<_>>(), 9, 10);
        assert_eq!(last.page, 3);
        assert_eq!(last.rows, vec![21, 22, 23, 24, 25]);
        assert!(last.can_prev && !last.can_next && !last.can_last);

        let odd_size = paginate(vec![1, 2, 3], 1, 7);
        assert_eq!(odd_size.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn toggling_sort() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        enum Col {
            A,
            B,
        }
        let state = SortState { key: Col::A, dir: SortDir::Desc };
        assert_eq!(state.toggle(Col::A).dir, SortDir::Asc);
        assert_eq!(state.toggle(Col::B), SortState { key: Col::B, dir: SortDir::Asc });
    }
}
