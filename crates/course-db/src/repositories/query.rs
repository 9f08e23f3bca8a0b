//! Shared query-construction helpers
//!
//! `find` queries start from a base SELECT with a `deleted_at IS NULL`
//! guard; filter variants append conjunctive WHERE conditions, and
//! pagination/ordering is pushed last. Sort columns go through a per-entity
//! whitelist since ORDER BY cannot be parameterized.

use sqlx::{Postgres, QueryBuilder};

use course_core::query::PageInfo;

/// Append a case-sensitive substring condition on the given column
pub fn push_like(qb: &mut QueryBuilder<'_, Postgres>, column: &str, needle: &str) {
    qb.push(" AND ");
    qb.push(column);
    qb.push(" LIKE ");
    qb.push_bind(format!("%{needle}%"));
}

/// Append a set-membership condition on the status column.
///
/// An empty set matches no rows.
pub fn push_status_in(qb: &mut QueryBuilder<'_, Postgres>, statuses: &[i16]) {
    if statuses.is_empty() {
        qb.push(" AND FALSE");
        return;
    }

    qb.push(" AND status IN (");
    let mut separated = qb.separated(", ");
    for status in statuses {
        separated.push_bind(*status);
    }
    separated.push_unseparated(")");
}

/// Append ordering and pagination.
///
/// Unknown sort columns fall back to `id`; the direction comes from the
/// page info. Offset/limit follow the page normalization rules.
pub fn push_page(qb: &mut QueryBuilder<'_, Postgres>, page: &PageInfo, sortable: &[&str]) {
    let column = if sortable.contains(&page.sort.as_str()) {
        page.sort.as_str()
    } else {
        "id"
    };

    qb.push(" ORDER BY ");
    qb.push(column);
    qb.push(" ");
    qb.push(page.order.as_sql());
    qb.push(" OFFSET ");
    qb.push_bind(page.offset());
    qb.push(" LIMIT ");
    qb.push_bind(page.limit());
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::query::SortOrder;

    fn base_builder() -> QueryBuilder<'static, Postgres> {
        QueryBuilder::new("SELECT id FROM teacher WHERE deleted_at IS NULL")
    }

    #[test]
    fn test_push_like() {
        let mut qb = base_builder();
        push_like(&mut qb, "name", "Doe");
        assert_eq!(
            qb.sql(),
            "SELECT id FROM teacher WHERE deleted_at IS NULL AND name LIKE $1"
        );
    }

    #[test]
    fn test_push_status_in() {
        let mut qb = base_builder();
        push_status_in(&mut qb, &[0, 1]);
        assert_eq!(
            qb.sql(),
            "SELECT id FROM teacher WHERE deleted_at IS NULL AND status IN ($1, $2)"
        );
    }

    #[test]
    fn test_push_status_in_empty_matches_nothing() {
        let mut qb = base_builder();
        push_status_in(&mut qb, &[]);
        assert_eq!(
            qb.sql(),
            "SELECT id FROM teacher WHERE deleted_at IS NULL AND FALSE"
        );
    }

    #[test]
    fn test_push_page_defaults() {
        let mut qb = base_builder();
        push_page(&mut qb, &PageInfo::default(), &["id", "name"]);
        assert_eq!(
            qb.sql(),
            "SELECT id FROM teacher WHERE deleted_at IS NULL ORDER BY id DESC OFFSET $1 LIMIT $2"
        );
    }

    #[test]
    fn test_push_page_whitelists_sort_column() {
        let mut qb = base_builder();
        let page = PageInfo {
            sort: "phone; DROP TABLE teacher".to_string(),
            order: SortOrder::Asc,
            ..PageInfo::default()
        };
        push_page(&mut qb, &page, &["id", "name"]);
        assert_eq!(
            qb.sql(),
            "SELECT id FROM teacher WHERE deleted_at IS NULL ORDER BY id ASC OFFSET $1 LIMIT $2"
        );
    }

    #[test]
    fn test_push_page_accepts_known_column() {
        let mut qb = base_builder();
        let page = PageInfo {
            sort: "name".to_string(),
            ..PageInfo::default()
        };
        push_page(&mut qb, &page, &["id", "name"]);
        assert!(qb.sql().contains("ORDER BY name DESC"));
    }
}
