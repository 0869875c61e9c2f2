//! Performance benchmarks for the Diversity Analytics Engine.
//!
//! This benchmark suite measures end-to-end request latency through the HTTP
//! router for rosters of increasing size, plus the engine in isolation.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use diversity_engine::api::{AppState, create_router};
use diversity_engine::config::ConfigLoader;
use diversity_engine::engine::DiversityEngine;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

const TITLES: [&str; 6] = [
    "Analista de Dados",
    "Assistente Administrativo",
    "Coordenador de Projetos",
    "Gerente de Vendas",
    "Diretor Comercial",
    "Estagiário de Engenharia",
];

const GENDERS: [&str; 4] = ["female", "male", "other", "undeclared"];
const ETHNICITIES: [&str; 6] = [
    "white",
    "black",
    "brown",
    "asian",
    "indigenous",
    "not_declared",
];

/// Creates a request body with a synthetic roster of the given size.
fn create_request_body(employee_count: usize) -> String {
    let positions: Vec<serde_json::Value> = TITLES
        .iter()
        .enumerate()
        .map(|(i, title)| {
            serde_json::json!({
                "id": format!("pos_{:02}", i),
                "title": title
            })
        })
        .collect();

    let employees: Vec<serde_json::Value> = (0..employee_count)
        .map(|i| {
            serde_json::json!({
                "id": format!("emp_{:05}", i),
                "full_name": format!("Employee {}", i),
                "gender": GENDERS[i % GENDERS.len()],
                "ethnicity": ETHNICITIES[i % ETHNICITIES.len()],
                "has_disability": i % 25 == 0,
                "department": format!("Department {}", i % 8),
                "compensation": format!("{}.00", 4000 + (i % 10) * 750),
                "status": "active",
                "position_id": format!("pos_{:02}", i % TITLES.len())
            })
        })
        .collect();

    serde_json::json!({
        "company_id": "bench_co",
        "period": {
            "start_date": "2025-01-01",
            "end_date": "2025-12-31"
        },
        "employees": employees,
        "positions": positions,
        "previous_snapshot": {
            "period_end": "2023-12-31",
            "women_percentage": "30.00",
            "disability_percentage": "3.00"
        }
    })
    .to_string()
}

/// Benchmark: full HTTP round trip for increasing roster sizes.
fn bench_http_roster_sizes(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());

    let mut group = c.benchmark_group("http_analytics");
    for size in [10usize, 100, 1000, 5000] {
        let body = create_request_body(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &body, |b, body| {
            b.to_async(&rt).iter(|| async {
                let router = router.clone();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/analytics/diversity")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            })
        });
    }
    group.finish();
}

/// Benchmark: engine computation without HTTP/JSON overhead.
fn bench_engine_direct(c: &mut Criterion) {
    let state = create_test_state();
    let config = state.config().clone();

    let body = create_request_body(1000);
    let request: diversity_engine::api::AnalyticsRequest = serde_json::from_str(&body).unwrap();
    let (company_id, period, dataset) = request.into_dataset();
    let engine = DiversityEngine::in_memory(config, dataset);

    c.bench_function("engine_1000_employees", |b| {
        b.iter(|| {
            let result = engine
                .compute_diversity_metrics(&company_id, &period)
                .unwrap();
            black_box(result)
        })
    });
}

criterion_group!(benches, bench_http_roster_sizes, bench_engine_direct);
criterion_main!(benches);
