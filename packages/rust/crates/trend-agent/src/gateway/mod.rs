//! Gateway namespace: HTTP entrypoint.

mod http;

pub use http::{
    CategoriesResponse, GATEWAY_NAME, GatewayState, RecommendQuery, RootResponse, ToolsResponse,
    router, run_http, validate_task,
};
