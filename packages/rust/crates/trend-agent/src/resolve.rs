//! Value resolution: CLI flag > environment variable > settings > default.

pub(crate) fn resolve_string(
    cli_value: Option<String>,
    env_name: &str,
    settings_value: Option<&str>,
    default: &str,
) -> String {
    if let Some(value) = cli_value
        && !value.trim().is_empty()
    {
        return value;
    }
    if let Ok(value) = std::env::var(env_name)
        && !value.trim().is_empty()
    {
        return value;
    }
    if let Some(value) = settings_value
        && !value.trim().is_empty()
    {
        return value.to_string();
    }
    default.to_string()
}

pub(crate) fn resolve_positive_u64(
    cli_value: Option<u64>,
    env_name: &str,
    settings_value: Option<u64>,
    default: u64,
) -> u64 {
    if let Some(value) = cli_value
        && value > 0
    {
        return value;
    }
    if let Some(value) = parse_env::<u64>(env_name).filter(|value| *value > 0) {
        return value;
    }
    if let Some(value) = settings_value
        && value > 0
    {
        return value;
    }
    default
}

pub(crate) fn resolve_positive_usize(
    cli_value: Option<usize>,
    env_name: &str,
    settings_value: Option<usize>,
    default: usize,
) -> usize {
    if let Some(value) = cli_value
        && value > 0
    {
        return value;
    }
    if let Some(value) = parse_env::<usize>(env_name).filter(|value| *value > 0) {
        return value;
    }
    if let Some(value) = settings_value
        && value > 0
    {
        return value;
    }
    default
}

/// Like [`resolve_positive_u64`] but zero is a valid value.
pub(crate) fn resolve_u64(
    cli_value: Option<u64>,
    env_name: &str,
    settings_value: Option<u64>,
    default: u64,
) -> u64 {
    cli_value
        .or_else(|| parse_env(env_name))
        .or(settings_value)
        .unwrap_or(default)
}

/// Optional positive cap; zero means "no cap".
pub(crate) fn resolve_optional_limit(
    cli_value: Option<usize>,
    env_name: &str,
    settings_value: Option<usize>,
) -> Option<usize> {
    cli_value
        .or_else(|| parse_env(env_name))
        .or(settings_value)
        .filter(|value| *value > 0)
}

pub(crate) fn resolve_f32(env_name: &str, settings_value: Option<f32>, default: f32) -> f32 {
    parse_env::<f32>(env_name)
        .or(settings_value)
        .filter(|value| value.is_finite())
        .unwrap_or(default)
}

fn parse_env<T: std::str::FromStr>(env_name: &str) -> Option<T> {
    let raw = std::env::var(env_name).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(
                env_var = %env_name,
                value = %trimmed,
                "invalid numeric environment value; using settings/default"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSET: &str = "TREND_AGENT_TEST_SURELY_UNSET_VARIABLE";

    #[test]
    fn cli_beats_settings_beats_default() {
        assert_eq!(
            resolve_string(Some("cli".into()), UNSET, Some("settings"), "default"),
            "cli"
        );
        assert_eq!(
            resolve_string(None, UNSET, Some("settings"), "default"),
            "settings"
        );
        assert_eq!(resolve_string(None, UNSET, None, "default"), "default");
        assert_eq!(
            resolve_string(Some("  ".into()), UNSET, None, "default"),
            "default"
        );
    }

    #[test]
    fn positive_resolvers_skip_zero() {
        assert_eq!(resolve_positive_u64(Some(0), UNSET, Some(7), 3), 7);
        assert_eq!(resolve_positive_u64(None, UNSET, Some(0), 3), 3);
        assert_eq!(resolve_positive_usize(Some(4), UNSET, Some(7), 3), 4);
    }

    #[test]
    fn throttle_may_be_zero_and_limit_zero_means_unbounded() {
        assert_eq!(resolve_u64(Some(0), UNSET, Some(800), 800), 0);
        assert_eq!(resolve_u64(None, UNSET, None, 800), 800);
        assert_eq!(resolve_optional_limit(None, UNSET, Some(0)), None);
        assert_eq!(resolve_optional_limit(Some(5), UNSET, Some(9)), Some(5));
        assert_eq!(resolve_optional_limit(None, UNSET, None), None);
    }
}
