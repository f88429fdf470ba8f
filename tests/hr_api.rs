use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use entity::employee;
use hr_tests::HrApp;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{Value, json};

async fn create_it_department(app: &HrApp) -> Value {
    let (status, body) = app
        .post("/api/departments", json!({ "name": "IT Department" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    body
}

async fn create_john_doe(app: &HrApp, department_id: &Value) -> Value {
    let (status, body) = app
        .post(
            "/api/employees",
            json!({
                "firstName": "John",
                "lastName": "Doe",
                "position": "Developer",
                "salary": "1000.00",
                "department": { "id": department_id }
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn post_department_returns_generated_id() {
    let app = HrApp::new().await.unwrap();

    let body = create_it_department(&app).await;

    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["name"], "IT Department");
    let (status, fetched) = app.get(&format!("/api/departments/{}", body["id"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn post_employee_echoes_fields_with_generated_id() {
    let app = HrApp::new().await.unwrap();
    let department = create_it_department(&app).await;

    let body = create_john_doe(&app, &department["id"]).await;

    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["firstName"], "John");
    assert_eq!(body["lastName"], "Doe");
    assert_eq!(body["position"], "Developer");
    assert_eq!(body["salary"], "1000.00");
    assert_eq!(body["department"]["id"], department["id"]);
    assert_eq!(body["department"]["name"], "IT Department");
}

#[tokio::test]
async fn put_employee_replaces_every_field() {
    let app = HrApp::new().await.unwrap();
    let department = create_it_department(&app).await;
    let created = create_john_doe(&app, &department["id"]).await;
    let uri = format!("/api/employees/{}", created["id"]);

    let (status, updated) = app
        .put(
            &uri,
            json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "position": "Developer",
                "salary": "1000.00",
                "department": { "id": department["id"] }
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["firstName"], "Jane");
    assert_eq!(updated["lastName"], "Doe");
    assert_eq!(updated["department"]["name"], "IT Department");

    let (status, partial) = app.put(&uri, json!({ "firstName": "Janet" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(partial["firstName"], "Janet");
    assert_eq!(partial["lastName"], Value::Null);
    assert_eq!(partial["salary"], Value::Null);
    assert_eq!(partial["department"], Value::Null);

    let (_, stored) = app.get(&uri).await;
    assert_eq!(stored, partial);
}

#[tokio::test]
async fn by_lastname_returns_projection_with_department_name() {
    let app = HrApp::new().await.unwrap();
    let department = create_it_department(&app).await;
    create_john_doe(&app, &department["id"]).await;

    let (status, body) = app.get("/api/employees/by-lastname?lastName=Doe").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "firstName": "John",
            "lastName": "Doe",
            "position": "Developer",
            "departmentName": "IT Department"
        }])
    );
}

#[tokio::test]
async fn by_lastname_is_exact_and_case_sensitive() {
    let app = HrApp::new().await.unwrap();
    let department = create_it_department(&app).await;
    create_john_doe(&app, &department["id"]).await;

    let (status, lower) = app.get("/api/employees/by-lastname?lastName=doe").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(lower, json!([]));

    let (_, prefix) = app.get("/api/employees/by-lastname?lastName=Do").await;
    assert_eq!(prefix, json!([]));
}

#[tokio::test]
async fn by_lastname_requires_the_parameter() {
    let app = HrApp::new().await.unwrap();

    let (status, _) = app.get("/api/employees/by-lastname").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn put_missing_department_fails_without_writing() {
    let app = HrApp::new().await.unwrap();
    let existing = create_it_department(&app).await;

    let (status, body) = app
        .put("/api/departments/999", json!({ "name": "Ghost" }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "department 999 not found");
    let (_, all) = app.get("/api/departments").await;
    assert_eq!(all, json!([existing]));
}

#[tokio::test]
async fn put_missing_employee_is_not_found() {
    let app = HrApp::new().await.unwrap();

    let (status, _) = app
        .put("/api/employees/41", json!({ "firstName": "Nobody" }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let count = employee::Entity::find().count(&app.pool).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn put_department_overwrites_name() {
    let app = HrApp::new().await.unwrap();
    let created = create_it_department(&app).await;
    let uri = format!("/api/departments/{}", created["id"]);

    let (status, updated) = app.put(&uri, json!({ "name": "HR Department" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "id": created["id"], "name": "HR Department" }));
}

#[tokio::test]
async fn get_missing_rows_answer_null() {
    let app = HrApp::new().await.unwrap();

    let (status, department) = app.get("/api/departments/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(department, Value::Null);

    let (status, employee) = app.get("/api/employees/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(employee, Value::Null);
}

#[tokio::test]
async fn delete_then_get_is_empty_and_repeat_delete_succeeds() {
    let app = HrApp::new().await.unwrap();
    let department = create_it_department(&app).await;
    let employee = create_john_doe(&app, &department["id"]).await;
    let employee_uri = format!("/api/employees/{}", employee["id"]);
    let department_uri = format!("/api/departments/{}", department["id"]);

    let (status, body) = app.delete(&employee_uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
    assert_eq!(app.get(&employee_uri).await.1, Value::Null);
    assert_eq!(app.delete(&employee_uri).await.0, StatusCode::OK);

    assert_eq!(app.delete(&department_uri).await.0, StatusCode::OK);
    assert_eq!(app.get(&department_uri).await.1, Value::Null);
    assert_eq!(app.delete(&department_uri).await.0, StatusCode::OK);
}

#[tokio::test]
async fn lists_return_rows_in_id_order() {
    let app = HrApp::new().await.unwrap();
    let it = create_it_department(&app).await;
    let (_, finance) = app
        .post("/api/departments", json!({ "name": "Finance" }))
        .await;
    create_john_doe(&app, &it["id"]).await;
    app.post(
        "/api/employees",
        json!({ "firstName": "Ann", "lastName": "Lee", "salary": "2000" }),
    )
    .await;

    let (_, departments) = app.get("/api/departments").await;
    assert_eq!(departments, json!([it, finance]));

    let (status, employees) = app.get("/api/employees").await;
    assert_eq!(status, StatusCode::OK);
    let employees = employees.as_array().unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0]["firstName"], "John");
    assert_eq!(employees[1]["firstName"], "Ann");
    assert_eq!(employees[1]["department"], Value::Null);
}

#[tokio::test]
async fn employee_with_unknown_department_is_rejected() {
    let app = HrApp::new().await.unwrap();

    let (status, _) = app
        .post(
            "/api/employees",
            json!({ "firstName": "John", "lastName": "Doe", "department": { "id": 404 } }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    let count = employee::Entity::find().count(&app.pool).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn deleting_a_department_with_employees_conflicts() {
    let app = HrApp::new().await.unwrap();
    let department = create_it_department(&app).await;
    let employee = create_john_doe(&app, &department["id"]).await;
    let department_uri = format!("/api/departments/{}", department["id"]);

    let (status, body) = app.delete(&department_uri).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.as_str().unwrap().starts_with("conflict:"));
    assert_eq!(app.get(&department_uri).await.1, department);
    let (_, stored) = app.get(&format!("/api/employees/{}", employee["id"])).await;
    assert_eq!(stored["department"]["id"], department["id"]);

    app.delete(&format!("/api/employees/{}", employee["id"])).await;
    assert_eq!(app.delete(&department_uri).await.0, StatusCode::OK);
}

#[tokio::test]
async fn malformed_bodies_are_client_errors() {
    let app = HrApp::new().await.unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/departments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();
    let (status, _) = app.send_raw(request).await;
    assert!(status.is_client_error());

    let (status, _) = app
        .post("/api/employees", json!({ "salary": 1000 }))
        .await;
    assert!(status.is_client_error());

    let (status, _) = app.get("/api/employees/not-a-number").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
