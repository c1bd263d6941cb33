#![allow(missing_docs)]

use std::path::PathBuf;

use tempfile::TempDir;
use trend_agent::load_runtime_settings_from_paths;

fn write_file(path: PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write yaml");
}

#[test]
fn merge_user_overrides_system() {
    let tmp = TempDir::new().expect("tempdir");
    let system = tmp.path().join("packages/conf/settings.yaml");
    let user = tmp.path().join(".config/tool-trends/settings.yaml");

    write_file(
        system.clone(),
        r#"
llm:
  inference_url: "https://api.groq.com/openai/v1/chat/completions"
  model: "llama-3.1-8b-instant"
  api_key_env: "GROQ_API_KEY"
  max_attempts: 3
  backoff_unit_ms: 3000
  request_timeout_secs: 60
  temperature: 0.2
sources:
  fetch_timeout_secs: 15
  min_live_yield: 10
pipeline:
  throttle_ms: 800
store:
  path: ".data/tool-trends/catalog.json"
gateway:
  bind: "0.0.0.0:8000"
"#,
    );
    write_file(
        user.clone(),
        r#"
llm:
  model: "llama-3.3-70b-versatile"
  max_attempts: 5
pipeline:
  max_tools: 12
gateway:
  bind: "127.0.0.1:9000"
"#,
    );

    let settings = load_runtime_settings_from_paths(&system, &user);

    assert_eq!(
        settings.llm.inference_url.as_deref(),
        Some("https://api.groq.com/openai/v1/chat/completions")
    );
    assert_eq!(settings.llm.model.as_deref(), Some("llama-3.3-70b-versatile"));
    assert_eq!(settings.llm.api_key_env.as_deref(), Some("GROQ_API_KEY"));
    assert_eq!(settings.llm.max_attempts, Some(5));
    assert_eq!(settings.llm.backoff_unit_ms, Some(3000));
    assert_eq!(settings.llm.temperature, Some(0.2));
    assert_eq!(settings.sources.fetch_timeout_secs, Some(15));
    assert_eq!(settings.sources.min_live_yield, Some(10));
    assert_eq!(settings.sources.github_awesome_url, None);
    assert_eq!(settings.pipeline.throttle_ms, Some(800));
    assert_eq!(settings.pipeline.max_tools, Some(12));
    assert_eq!(
        settings.store.path.as_deref(),
        Some(".data/tool-trends/catalog.json")
    );
    assert_eq!(settings.gateway.bind.as_deref(), Some("127.0.0.1:9000"));
}

#[test]
fn invalid_user_yaml_keeps_system_values() {
    let tmp = TempDir::new().expect("tempdir");
    let system = tmp.path().join("packages/conf/settings.yaml");
    let user = tmp.path().join(".config/tool-trends/settings.yaml");

    write_file(system.clone(), "pipeline:\n  throttle_ms: 250\n");
    write_file(user.clone(), "pipeline: [this is: not a mapping\n");

    let settings = load_runtime_settings_from_paths(&system, &user);

    assert_eq!(settings.pipeline.throttle_ms, Some(250));
    assert_eq!(settings.pipeline.max_tools, None);
}

#[test]
fn missing_and_empty_files_yield_defaults() {
    let tmp = TempDir::new().expect("tempdir");
    let system = tmp.path().join("packages/conf/settings.yaml");
    let user = tmp.path().join(".config/tool-trends/settings.yaml");
    write_file(system.clone(), "\n");

    let settings = load_runtime_settings_from_paths(&system, &user);

    assert!(settings.llm.model.is_none());
    assert!(settings.store.path.is_none());
    assert!(settings.gateway.bind.is_none());
}
