use super::*;
use crate::Department;

fn depts() -> Vec<Department> {
    vec![
        Department {
            id: 1,
            name: "Kỹ thuật".to_string(),
        },
        Department {
            id: 2,
            name: "Kinh doanh".to_string(),
        },
    ]
}

#[test]
fn test_parse_bare_array() {
    let json = r#"[{"id":1,"name":"Kỹ thuật"},{"id":2,"name":"Kinh doanh"}]"#;
    let parsed: ListResponse<Department> = serde_json::from_str(json).unwrap();

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed.into_items(), depts());
}

#[test]
fn test_parse_paginated_envelope() {
    let json = r#"{
        "data": [{"id":1,"name":"Kỹ thuật"},{"id":2,"name":"Kinh doanh"}],
        "current_page": 2,
        "last_page": 5,
        "per_page": 2,
        "total": 10
    }"#;
    let parsed: ListResponse<Department> = serde_json::from_str(json).unwrap();

    let meta = parsed.page_meta();
    assert_eq!(meta.current_page, 2);
    assert_eq!(meta.last_page, 5);
    assert_eq!(meta.per_page, 2);
    assert_eq!(meta.total, 10);
    assert_eq!(parsed.into_items(), depts());
}

#[test]
fn test_both_shapes_yield_identical_items() {
    // Cùng nội dung thì mảng trần và phong bì phải cho cùng kết quả.
    let bare = r#"[{"id":1,"name":"Kỹ thuật"}]"#;
    let wrapped = r#"{"data":[{"id":1,"name":"Kỹ thuật"}]}"#;

    let a: ListResponse<Department> = serde_json::from_str(bare).unwrap();
    let b: ListResponse<Department> = serde_json::from_str(wrapped).unwrap();

    assert_eq!(a.into_items(), b.into_items());
}

#[test]
fn test_envelope_without_meta_defaults_to_single_page() {
    let json = r#"{"data":[{"id":1,"name":"Kỹ thuật"}]}"#;
    let parsed: ListResponse<Department> = serde_json::from_str(json).unwrap();

    let meta = parsed.page_meta();
    assert_eq!(meta.current_page, 1);
    assert_eq!(meta.last_page, 1);
    assert_eq!(meta.per_page, 1);
    assert_eq!(meta.total, 1);
}

#[test]
fn test_empty_list_both_shapes() {
    let a: ListResponse<Department> = serde_json::from_str("[]").unwrap();
    let b: ListResponse<Department> = serde_json::from_str(r#"{"data":[]}"#).unwrap();

    assert!(a.is_empty());
    assert!(b.is_empty());
}

#[test]
fn test_absolute_index_across_pages() {
    // Trang 3, mỗi trang 20 dòng: dòng thứ 5 (chỉ số cục bộ 4) là 45.
    assert_eq!(absolute_index(3, 20, 4), 45);
    // Trang đầu đánh số từ 1.
    assert_eq!(absolute_index(1, 20, 0), 1);
    // Trang 0 (giá trị bất thường) được kẹp về trang 1.
    assert_eq!(absolute_index(0, 20, 0), 1);
}
