use little_orm::query_builder::Pagination;

#[test]
fn test_pagination_sql() {
    assert_eq!(Pagination::limit_only(10).to_sql(), " LIMIT 10");
    assert_eq!(Pagination::offset_only(5).to_sql(), " OFFSET 5");
    assert_eq!(Pagination::limit_offset(10, 20).to_sql(), " LIMIT 10 OFFSET 20");
    assert_eq!(Pagination::limit_offset(0, 0).to_sql(), "");
    assert_eq!(Pagination::new(1, 25).to_sql(), " LIMIT 25");
}

#[test]
fn test_pagination_navigation() {
    let pagination = Pagination::new(3, 10);
    assert_eq!(pagination.current_page(), 3);
    assert_eq!(pagination.total_pages(45), 5);
    assert!(pagination.has_next_page(45));
    assert!(!pagination.has_next_page(30));
    assert!(pagination.has_previous_page());
}
