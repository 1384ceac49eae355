use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use clinic_api::api::{
    ASO_TREND, CLIENT_EMPLOYEES, COMPANIES, EXAMS_BY_MONTH, FITNESS_TREND, RISKS_BY_CATEGORY,
};
use clinic_api::ApiClient;
use serde_json::{json, Value};
use shared_types::ApiConfig;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory stand-in for the clinic backend.
///
/// Every collection path serves a JSON array; POST appends the body with a
/// fresh id and answers 201. Individual paths can be forced to answer with a
/// fixed status and raw body.
#[derive(Clone, Default)]
pub struct StubBackend {
    inner: Arc<Mutex<StubState>>,
}

#[derive(Default)]
struct StubState {
    collections: HashMap<String, Vec<Value>>,
    overrides: HashMap<String, (StatusCode, String)>,
    /// `Content-Type` of every POST received, in order.
    content_types: Vec<String>,
    /// When set, created records come back with this id instead of a uuid.
    forced_id: Option<Value>,
}

impl StubBackend {
    pub async fn seed(&self, path: &str, rows: Vec<Value>) {
        self.inner.lock().await.collections.insert(path.to_string(), rows);
    }

    /// Answer `path` with `status` and `body` regardless of method.
    pub async fn fail_with(&self, path: &str, status: StatusCode, body: &str) {
        self.inner
            .lock()
            .await
            .overrides
            .insert(path.to_string(), (status, body.to_string()));
    }

    pub async fn force_created_id(&self, id: Value) {
        self.inner.lock().await.forced_id = Some(id);
    }

    pub async fn rows(&self, path: &str) -> Vec<Value> {
        self.inner
            .lock()
            .await
            .collections
            .get(path)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn content_types(&self) -> Vec<String> {
        self.inner.lock().await.content_types.clone()
    }

    async fn list(&self, path: &str) -> Response {
        let state = self.inner.lock().await;
        if let Some((status, body)) = state.overrides.get(path) {
            return json_response(*status, body.clone());
        }
        let rows = state.collections.get(path).cloned().unwrap_or_default();
        json_response(StatusCode::OK, Value::Array(rows).to_string())
    }

    async fn create(&self, path: &str, headers: HeaderMap, body: String) -> Response {
        let mut state = self.inner.lock().await;
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        state.content_types.push(content_type);

        if let Some((status, body)) = state.overrides.get(path) {
            return json_response(*status, body.clone());
        }

        let Ok(Value::Object(mut record)) = serde_json::from_str::<Value>(&body) else {
            return json_response(StatusCode::BAD_REQUEST, json!({"error": "invalid body"}).to_string());
        };
        let id = state
            .forced_id
            .clone()
            .unwrap_or_else(|| Value::String(uuid::Uuid::new_v4().to_string()));
        record.insert("id".to_string(), id);
        let record = Value::Object(record);
        state
            .collections
            .entry(path.to_string())
            .or_default()
            .push(record.clone());

        json_response(StatusCode::CREATED, record.to_string())
    }
}

fn json_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn collection_routes(router: Router<StubBackend>, path: &'static str) -> Router<StubBackend> {
    router.route(
        path,
        get(move |State(stub): State<StubBackend>| async move { stub.list(path).await }).post(
            move |State(stub): State<StubBackend>, headers: HeaderMap, body: String| async move {
                stub.create(path, headers, body).await
            },
        ),
    )
}

/// Start the stub on an ephemeral port and return a client pointed at it.
pub async fn spawn_backend() -> (ApiClient, StubBackend) {
    let stub = StubBackend::default();
    stub.seed(EXAMS_BY_MONTH.path, sample_exams_by_month()).await;
    stub.seed(ASO_TREND.path, sample_aso_trend()).await;
    stub.seed(RISKS_BY_CATEGORY.path, sample_risks_by_category()).await;
    stub.seed(FITNESS_TREND.path, sample_fitness_trend()).await;

    let mut router = Router::new();
    for endpoint in [
        COMPANIES,
        CLIENT_EMPLOYEES,
        EXAMS_BY_MONTH,
        ASO_TREND,
        RISKS_BY_CATEGORY,
        FITNESS_TREND,
    ] {
        router = collection_routes(router, endpoint.path);
    }
    let app = router.with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("Stub backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub backend crashed");
    });

    let client = ApiClient::new(ApiConfig {
        base_url: format!("http://{addr}"),
    });
    (client, stub)
}

/// A client pointed at a port nothing listens on.
pub async fn unreachable_client() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe port");
    let addr = listener.local_addr().expect("Probe port has no address");
    drop(listener);
    ApiClient::new(ApiConfig {
        base_url: format!("http://{addr}"),
    })
}

pub fn company_json(id: Value, name: &str, employee_count: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "cnpj": "12.345.678/0001-90",
        "address": "Av. Paulista, 1000 - São Paulo, SP",
        "phone": "(11) 3333-4444",
        "employeeCount": employee_count,
        "status": "active",
        "registrationDate": "2024-01-15"
    })
}

pub fn employee_json(id: Value, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "cpf": "123.456.789-00",
        "dateOfBirth": "1990-05-15",
        "company": "Tech Solutions Ltda",
        "position": "Software Developer",
        "department": "IT",
        "admissionDate": "2024-01-15",
        "status": "active"
    })
}

pub fn sample_exams_by_month() -> Vec<Value> {
    vec![
        json!({"month": "Jan", "admission": 12, "periodic": 30, "return_to_work": 4, "dismissal": 2}),
        json!({"month": "Feb", "admission": 8, "periodic": 25, "return_to_work": 3, "dismissal": 1}),
    ]
}

pub fn sample_aso_trend() -> Vec<Value> {
    vec![
        json!({"month": "Jan", "complete": 40, "issued": 38, "pending": 2}),
        json!({"month": "Feb", "complete": 35, "issued": 30, "pending": 5}),
    ]
}

pub fn sample_risks_by_category() -> Vec<Value> {
    vec![
        json!({"categoria": "physical", "quantidade": 6, "porcentagem": 50.0}),
        json!({"categoria": "chemical", "quantidade": 4, "porcentagem": 33.3}),
        json!({"categoria": "ergonomic", "quantidade": 2, "porcentagem": 16.7}),
    ]
}

pub fn sample_fitness_trend() -> Vec<Value> {
    vec![
        json!({"month": "Jan", "fit": 30, "fit_with_restrictions": 6, "unfit": 2}),
        json!({"month": "Feb", "fit": 25, "fit_with_restrictions": 4, "unfit": 1}),
    ]
}
