use super::*;

#[test]
fn test_login_response_shape() {
    // Phản hồi đăng nhập chuẩn: {user: {...}, token: "..."}.
    let json = r#"{"user":{"name":"Admin","username":"admin"},"token":"abc"}"#;
    let parsed: LoginResponse = serde_json::from_str(json).unwrap();

    assert_eq!(parsed.user.name, "Admin");
    assert_eq!(parsed.token, "abc");
}

#[test]
fn test_login_request_serializes_credentials() {
    let req = LoginRequest {
        username: "admin".to_string(),
        password: "admin123".to_string(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["username"], "admin");
    assert_eq!(json["password"], "admin123");
}

#[test]
fn test_employee_detail_with_nested_relations() {
    let json = r#"{
        "id": 7,
        "employee_code": "NV007",
        "full_name": "Trần Thị B",
        "email": "b@vtk.vn",
        "status": "active",
        "department": {"id": 2, "name": "Kỹ thuật"},
        "certificates": [
            {"id": 1, "certificate_number": "PMP-123", "status": "Còn hạn"}
        ],
        "projects": [
            {
                "id": 3, "code": "DA01", "name": "Trạm BTS",
                "status": "Đang thực hiện",
                "pivot": {"role": "Kỹ sư", "joined_date": "2024-01-15"}
            }
        ],
        "contracts": [
            {"id": 5, "contract_number": "HDLD-05", "salary": 25000000.0}
        ]
    }"#;
    let emp: Employee = serde_json::from_str(json).unwrap();

    assert_eq!(emp.status, EmployeeStatus::Active);
    assert_eq!(emp.certificate_count(), 1);
    assert_eq!(
        emp.certificates.as_ref().unwrap()[0].status,
        CertificateStatus::Valid
    );

    let project = &emp.projects.as_ref().unwrap()[0];
    assert_eq!(project.pivot.as_ref().unwrap().role.as_deref(), Some("Kỹ sư"));

    let contract = &emp.contracts.as_ref().unwrap()[0];
    assert_eq!(contract.salary, Some(25_000_000.0));
}

#[test]
fn test_employee_list_row_without_relations() {
    // Danh sách không trả kèm quan hệ: số chứng chỉ hiển thị 0.
    let json = r#"{"id":1,"employee_code":"NV001","full_name":"A","status":"inactive"}"#;
    let emp: Employee = serde_json::from_str(json).unwrap();

    assert_eq!(emp.certificate_count(), 0);
    assert_eq!(emp.status, EmployeeStatus::Inactive);
    assert!(emp.department.is_none());
}

#[test]
fn test_certificate_unrecognized_status_does_not_fail() {
    let json = r#"{"id":9,"certificate_number":"X","status":"Chờ xác minh"}"#;
    let cert: Certificate = serde_json::from_str(json).unwrap();

    assert_eq!(cert.status.label(), "Chờ xác minh");
    assert_eq!(cert.status.badge_class(), "badge-ghost");
}

#[test]
fn test_certificate_draft_skips_empty_fields() {
    let draft = CertificateDraft {
        employee_id: "4".to_string(),
        certificate_type_id: "2".to_string(),
        certificate_number: "AWS-SAA-001".to_string(),
        issued_date: "2024-05-01".to_string(),
        ..CertificateDraft::default()
    };

    let fields = draft.multipart_fields();
    assert_eq!(
        fields,
        vec![
            ("employee_id", "4"),
            ("certificate_type_id", "2"),
            ("certificate_number", "AWS-SAA-001"),
            ("issued_date", "2024-05-01"),
        ]
    );
}

#[test]
fn test_payload_omits_absent_optionals() {
    let payload = ContractPayload {
        contract_number: "HD-01".to_string(),
        classification: None,
        industry: Some("Viễn thông".to_string()),
        project_name: None,
        signing_date: None,
        start_date: "2024-01-01".to_string(),
        end_date: None,
        contract_value: Some(1_000_000.0),
        adjusted_value: None,
        investor: None,
        contract_status: None,
        condition_status: None,
        notes: None,
    };
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["contract_number"], "HD-01");
    assert_eq!(json["industry"], "Viễn thông");
    // Trường None không được gửi lên, tránh ghi đè dữ liệu backend.
    assert!(json.get("classification").is_none());
    assert!(json.get("end_date").is_none());
}
