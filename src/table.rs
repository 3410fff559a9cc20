//! Campaign table view state
//!
//! Filtering, sorting and client-side pagination over the in-memory
//! campaign rows. The table never mutates its source rows; every view is a
//! list of borrowed rows recomputed from the current query, sort and page.

use crate::consts::cli_consts::table::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::data::CampaignTableRow;
use crate::search;
use std::cmp::Ordering;

/// Sortable columns, in display order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display, strum::EnumIter)]
pub enum SortColumn {
    Campaign,
    Status,
    Clicks,
    Cost,
    #[strum(to_string = "ROI (%)")]
    Roi,
}

impl SortColumn {
    /// Column for a 1-based position, as bound to the number keys.
    pub fn from_position(position: usize) -> Option<Self> {
        match position {
            1 => Some(Self::Campaign),
            2 => Some(Self::Status),
            3 => Some(Self::Clicks),
            4 => Some(Self::Cost),
            5 => Some(Self::Roi),
            _ => None,
        }
    }

    fn compare(self, a: &CampaignTableRow, b: &CampaignTableRow) -> Ordering {
        match self {
            Self::Campaign => a.campaign.cmp(b.campaign),
            Self::Status => a.status.as_ref().cmp(b.status.as_ref()),
            Self::Clicks => a.clicks.cmp(&b.clicks),
            Self::Cost => a.cost.total_cmp(&b.cost),
            Self::Roi => a.roi.total_cmp(&b.roi),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Sort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// Sort rows in place by `sort`. Equal keys keep their relative order.
pub fn sort_rows(rows: &mut [&CampaignTableRow], sort: Sort) {
    rows.sort_by(|a, b| {
        let ordering = sort.column.compare(a, b);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// One page of the filtered, sorted view.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// Zero-based page index.
    pub index: usize,
    pub total_pages: usize,
    /// Rows across all pages, after filtering.
    pub total_rows: usize,
    pub rows: Vec<&'a CampaignTableRow>,
}

impl Page<'_> {
    /// 1-based range of rows shown, or `None` for an empty page.
    pub fn row_range(&self, page_size: usize) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let first = self.index * page_size + 1;
        Some((first, first + self.rows.len() - 1))
    }
}

/// Number of pages needed for `total_rows`; an empty set still has one page.
pub fn page_count(total_rows: usize, page_size: usize) -> usize {
    total_rows.div_ceil(page_size.max(1)).max(1)
}

/// Slice `rows` into the page at `index`, clamping the index to the last page.
pub fn paginate<'a>(rows: &[&'a CampaignTableRow], page_size: usize, index: usize) -> Page<'a> {
    let page_size = page_size.max(1);
    let total_rows = rows.len();
    let total_pages = page_count(total_rows, page_size);
    let index = index.min(total_pages - 1);
    Page {
        index,
        total_pages,
        total_rows,
        rows: rows
            .iter()
            .skip(index * page_size)
            .take(page_size)
            .copied()
            .collect(),
    }
}

/// Interactive table state: query, sort and current page.
#[derive(Debug, Clone)]
pub struct CampaignTable {
    rows: &'static [CampaignTableRow],
    query: String,
    sort: Option<Sort>,
    page_size: usize,
    page: usize,
}

impl CampaignTable {
    pub fn new(rows: &'static [CampaignTableRow], page_size: usize) -> Self {
        let page_size = if PAGE_SIZE_OPTIONS.contains(&page_size) {
            page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self {
            rows,
            query: String::new(),
            sort: None,
            page_size,
            page: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 0;
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.page = 0;
    }

    pub fn pop_query_char(&mut self) {
        if self.query.pop().is_some() {
            self.page = 0;
        }
    }

    /// Sort by `column`. Re-selecting the active column flips its direction;
    /// a new column starts ascending.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort = Some(match self.sort {
            Some(current) if current.column == column => Sort {
                column,
                direction: current.direction.toggled(),
            },
            _ => Sort {
                column,
                direction: SortDirection::Ascending,
            },
        });
    }

    /// Switch to the next page-size option, wrapping around.
    pub fn cycle_page_size(&mut self) {
        let position = PAGE_SIZE_OPTIONS
            .iter()
            .position(|size| *size == self.page_size)
            .unwrap_or(0);
        self.page_size = PAGE_SIZE_OPTIONS[(position + 1) % PAGE_SIZE_OPTIONS.len()];
        self.page = 0;
    }

    pub fn next_page(&mut self) {
        let total_pages = page_count(self.filtered().len(), self.page_size);
        if self.page + 1 < total_pages {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Rows matching the current query, in source order.
    pub fn filtered(&self) -> Vec<&'static CampaignTableRow> {
        search::filter(self.rows, &self.query)
    }

    /// Rows matching the current query, sorted by the active sort.
    pub fn sorted(&self) -> Vec<&'static CampaignTableRow> {
        let mut rows = self.filtered();
        if let Some(sort) = self.sort {
            sort_rows(&mut rows, sort);
        }
        rows
    }

    /// The page currently on screen.
    pub fn current_page(&self) -> Page<'static> {
        paginate(&self.sorted(), self.page_size, self.page)
    }
}
