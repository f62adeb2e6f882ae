//! Shared utilities for router and end-to-end tests.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use employee_api::error::{EmployeeError, Result};
use employee_api::http::HttpServer;
use employee_api::lifecycle::Shutdown;
use employee_api::{CreateEmployeeInput, Employee, EmployeeClient, FacadeConfig};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

/// In-memory upstream stand-in that records every call.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeClient {
    pub employees: Mutex<Vec<Employee>>,
    pub calls: Mutex<Vec<String>>,
    pub unavailable: bool,
}

#[allow(dead_code)]
impl FakeClient {
    pub fn with(employees: Vec<Employee>) -> Arc<Self> {
        Arc::new(Self {
            employees: Mutex::new(employees),
            ..Default::default()
        })
    }

    pub fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            unavailable: true,
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.unavailable {
            return Err(EmployeeError::UpstreamUnavailable("upstream down".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeClient for FakeClient {
    async fn list_all(&self) -> Result<Vec<Employee>> {
        self.record("list_all".into())?;
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Employee> {
        self.record(format!("get_by_id:{id}"))?;
        self.employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| EmployeeError::NotFound(format!("Employee not found: {id}")))
    }

    async fn create(&self, input: &CreateEmployeeInput) -> Result<Employee> {
        self.record(format!("create:{}", input.name))?;
        let employee = Employee {
            id: format!("generated-{}", self.employees.lock().unwrap().len() + 1),
            name: input.name.clone(),
            salary: input.salary,
            age: input.age,
            title: input.title.clone(),
            email: None,
        };
        self.employees.lock().unwrap().push(employee.clone());
        Ok(employee)
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool> {
        self.record(format!("delete_by_name:{name}"))?;
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|e| e.name != name);
        Ok(employees.len() < before)
    }
}

#[allow(dead_code)]
pub fn emp(id: &str, name: &str, salary: i64) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        salary,
        age: 30,
        title: "Engineer".to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
    }
}

/// Send one request through a freshly built router.
#[allow(dead_code)]
pub async fn send(client: Arc<FakeClient>, request: Request<Body>) -> Response<Body> {
    let server = HttpServer::with_client(FacadeConfig::default(), client);
    server.router().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// Start the real server on an ephemeral port against `config`.
#[allow(dead_code)]
pub async fn start_server(config: FacadeConfig) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (addr, shutdown)
}
