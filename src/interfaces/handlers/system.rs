use actix_web::{web, HttpResponse, Responder};
use humantime::format_duration;
use chrono::Utc;
use std::{
    time::Duration,
    sync::{atomic::{AtomicI64, Ordering}, RwLock},
};
use sysinfo::System;
use serde::Serialize;
use tracing::instrument;

use crate::{constants::{HEALTH_CACHE_SECS, START_TIME}, AppState};

#[derive(Serialize, Clone, Default)]
struct SystemInfo {
    os: String,
    kernel: String,
    hostname: String,
    cpu_count: usize,
    memory_total: String,
}

#[derive(Serialize, Clone, Default)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: String,
    projects: usize,
    categories: usize,
    memory_usage: String,
    system: SystemInfo,
}

/// Last health report of one app instance, refreshed at most every
/// `HEALTH_CACHE_SECS`.
#[derive(Default)]
pub struct HealthCache {
    last_check: AtomicI64,
    cached: RwLock<HealthCheckResponse>,
}

fn build_health_response(state: &AppState) -> HealthCheckResponse {
    let now_utc = Utc::now();
    let uptime_secs = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

    let mut sys = System::new_all();
    sys.refresh_all();

    let system_info = SystemInfo {
        os: System::name().unwrap_or_else(|| "Unknown".to_string()),
        kernel: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        cpu_count: sys.cpus().len(),
        memory_total: format!("{:.2} GB", sys.total_memory() as f64 / 1024.0 / 1024.0 / 1024.0),
    };

    let memory_usage = sysinfo::get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or("Unknown".to_string(), |p| format!("{:.2} MB", p.memory() as f64 / 1024.0 / 1024.0));

    HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        projects: state.project_handler.all_projects().len(),
        categories: state.project_handler.categories().len(),
        memory_usage,
        system: system_info,
    }
}

#[instrument(skip(state))]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let cache = &state.health_cache;
    let now = Utc::now().timestamp();
    let last = cache.last_check.load(Ordering::Relaxed);

    if now - last > HEALTH_CACHE_SECS {
        let response = build_health_response(&state);

        if let Ok(mut cached) = cache.cached.write() {
            *cached = response.clone();
            cache.last_check.store(now, Ordering::Relaxed);
        }

        HttpResponse::Ok().json(response)
    } else {
        match cache.cached.read() {
            Ok(response) => HttpResponse::Ok().json(response.clone()),
            Err(e) => {
                tracing::warn!("HealthCheck cache lock poisoned: {}", e);
                HttpResponse::Ok().json(build_health_response(&state))
            }
        }
    }
}
