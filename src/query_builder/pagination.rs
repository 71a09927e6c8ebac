/// LIMIT/OFFSET state for a query.
///
/// Values are stored as given; only a value greater than zero is rendered,
/// so `limit(0)` or a negative offset simply leave the clause out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    /// Pagination from a 1-based page number and a page size
    pub fn new(page: i64, per_page: i64) -> Self {
        let offset = if page > 1 {
            (page - 1).saturating_mul(per_page)
        } else {
            0
        };
        Self {
            limit: per_page,
            offset,
        }
    }

    pub fn limit_only(limit: i64) -> Self {
        Self { limit, offset: 0 }
    }

    pub fn offset_only(offset: i64) -> Self {
        Self { limit: 0, offset }
    }

    pub fn limit_offset(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// Limit that will actually be rendered
    pub fn effective_limit(&self) -> Option<i64> {
        (self.limit > 0).then_some(self.limit)
    }

    /// Offset that will actually be rendered
    pub fn effective_offset(&self) -> Option<i64> {
        (self.offset > 0).then_some(self.offset)
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        let mut sql = String::new();

        if let Some(limit) = self.effective_limit() {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        if let Some(offset) = self.effective_offset() {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        sql
    }

    /// Calculate total pages given a total count
    pub fn total_pages(&self, total_count: i64) -> i64 {
        match self.effective_limit() {
            Some(limit) if total_count > 0 => (total_count - 1) / limit + 1,
            Some(_) => 0,
            None => 1,
        }
    }

    /// Current page number (1-indexed)
    pub fn current_page(&self) -> i64 {
        match self.effective_limit() {
            Some(limit) => self.offset.max(0) / limit + 1,
            None => 1,
        }
    }

    pub fn has_next_page(&self, total_count: i64) -> bool {
        match self.effective_limit() {
            Some(limit) => self.offset.max(0).saturating_add(limit) < total_count,
            None => false,
        }
    }

    pub fn has_previous_page(&self) -> bool {
        self.effective_offset().is_some()
    }
}
