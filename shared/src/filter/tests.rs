use super::*;

fn contract(number: &str, industry: Option<&str>, project: Option<&str>) -> PartnerContract {
    PartnerContract {
        contract_number: number.to_string(),
        industry: industry.map(str::to_string),
        project_name: project.map(str::to_string),
        ..PartnerContract::default()
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_empty_filter_matches_everything() {
    let f = ContractFilter::default();
    assert!(f.is_empty());
    assert!(f.matches(&contract("HD-001", None, None)));
}

#[test]
fn test_contract_number_substring_case_insensitive() {
    let f = ContractFilter {
        contract_number: "hd-00".to_string(),
        ..ContractFilter::default()
    };
    assert!(f.matches(&contract("HD-001/VTK", None, None)));
    assert!(!f.matches(&contract("PL-09", None, None)));
}

#[test]
fn test_industry_filter_rejects_missing_field() {
    let f = ContractFilter {
        industry: "viễn thông".to_string(),
        ..ContractFilter::default()
    };
    assert!(f.matches(&contract("HD-1", Some("Viễn thông"), None)));
    // Trường vắng mặt không thể khớp một từ khóa cụ thể.
    assert!(!f.matches(&contract("HD-1", None, None)));
}

#[test]
fn test_start_date_range() {
    let mut c = contract("HD-1", None, None);
    c.start_date = Some("2024-06-15".to_string());

    let f = ContractFilter {
        start_from: Some(date("2024-06-01")),
        start_to: Some(date("2024-06-30")),
        ..ContractFilter::default()
    };
    assert!(f.matches(&c));

    c.start_date = Some("2024-07-01".to_string());
    assert!(!f.matches(&c));
}

#[test]
fn test_missing_date_passes_range_filter() {
    // Hợp đồng chưa có ngày kết thúc không bị loại bởi khoảng kết thúc.
    let c = contract("HD-1", None, None);
    let f = ContractFilter {
        end_from: Some(date("2024-01-01")),
        ..ContractFilter::default()
    };
    assert!(f.matches(&c));
}

#[test]
fn test_combined_predicates_all_must_hold() {
    let mut c = contract("HD-7", Some("Xây lắp"), Some("Trạm BTS miền Bắc"));
    c.start_date = Some("2024-02-01".to_string());

    let f = ContractFilter {
        contract_number: "HD-7".to_string(),
        project_name: "bts".to_string(),
        start_from: Some(date("2024-01-01")),
        ..ContractFilter::default()
    };
    assert!(f.matches(&c));

    let f_wrong_project = ContractFilter {
        project_name: "cáp quang".to_string(),
        ..f
    };
    assert!(!f_wrong_project.matches(&c));
}
