use std::path::PathBuf;

use trend_agent::{RuntimeSettings, run_http};

use crate::app_builder::{DEFAULT_GATEWAY_BIND, build_service};
use crate::resolve::resolve_string;

pub(crate) async fn run_gateway_mode(
    bind: Option<String>,
    store: Option<PathBuf>,
    runtime_settings: &RuntimeSettings,
) -> anyhow::Result<()> {
    let bind_addr = resolve_string(
        bind,
        "TREND_AGENT_GATEWAY_BIND",
        runtime_settings.gateway.bind.as_deref(),
        DEFAULT_GATEWAY_BIND,
    );
    let service = build_service(store, runtime_settings);
    run_http(service, &bind_addr).await
}
