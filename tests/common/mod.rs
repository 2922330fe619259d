//! Shared utilities for integration tests.

use std::net::SocketAddr;

use rota_certa::config::ServiceConfig;
use serde_json::json;
use rota_certa::dataset::{Dataset, Restriction, RestrictionKind, Severity, Vehicle};
use rota_certa::{HttpServer, RouteService, Shutdown};

pub const PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

fn restriction(id: &str, kind: RestrictionKind, severity: Severity) -> Restriction {
    Restriction {
        id: id.to_string(),
        name: id.to_string(),
        kind,
        severity,
        max_height_m: None,
        max_weight_ton: None,
        restricted_hours: None,
        restricted_days: Vec::new(),
        max_grade_percent: None,
        description: None,
        lat: Some(-23.55),
        lng: Some(-46.63),
        extra: Default::default(),
    }
}

/// Two vehicles and one restriction of each type. The carreta and the
/// viaduto carry descriptive fields outside the evaluated schema.
pub fn fixture_dataset() -> Dataset {
    let mut height = restriction("viaduto", RestrictionKind::Height, Severity::Danger);
    height.max_height_m = Some(4.0);
    height
        .extra
        .insert("address".to_string(), json!("Av. do Estado, 5000"));

    let mut weight = restriction("ponte", RestrictionKind::Weight, Severity::Danger);
    weight.max_weight_ton = Some(40.0);

    let mut zone = restriction("centro", RestrictionKind::TimeZone, Severity::Warning);
    zone.restricted_hours = Some("05-10,16-21".to_string());
    zone.restricted_days = vec!["seg".to_string(), "sex".to_string()];

    let mut grade = restriction("serra", RestrictionKind::Grade, Severity::Warning);
    grade.max_grade_percent = Some(9.0);

    let mut info = restriction("balanca", RestrictionKind::Info, Severity::Info);
    info.description = Some("Posto de pesagem".to_string());

    Dataset {
        vehicles: vec![
            Vehicle {
                id: "vuc".to_string(),
                name: "VUC".to_string(),
                height_m: 3.0,
                weight_ton: 8.0,
                extra: Default::default(),
            },
            Vehicle {
                id: "carreta".to_string(),
                name: "Carreta".to_string(),
                height_m: 4.2,
                weight_ton: 45.0,
                extra: [("axles".to_string(), json!(5))].into_iter().collect(),
            },
        ],
        restrictions: vec![
            info,
            grade,
            zone,
            restriction("paulista", RestrictionKind::Prohibited, Severity::Danger),
            weight,
            height,
        ],
    }
}

pub fn test_config(bind_address: &str) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = bind_address.to_string();
    config.static_files.public_dir = PUBLIC_DIR.to_string();
    config
}

/// Build a server over the fixture dataset without binding a socket.
pub fn test_server(config: ServiceConfig) -> HttpServer {
    HttpServer::new(config, RouteService::in_memory(fixture_dataset()))
}

/// Start a server on an ephemeral loopback port. The listener is bound
/// before this returns, so clients can connect right away.
#[allow(dead_code)]
pub async fn start_server() -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = test_server(test_config(&addr.to_string()));
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}
