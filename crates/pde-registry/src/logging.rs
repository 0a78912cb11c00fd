use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Directives used when `RUST_LOG` is unset or unparseable.
const DEFAULT_DIRECTIVES: &str = "info";

/// Install a tracing subscriber for binaries and tests embedding the
/// resolver.
///
/// Log levels come from `RUST_LOG`, defaulting to "info". Fails instead of
/// panicking when a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(directives.as_deref())?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).compact())
        .try_init()?;

    Ok(())
}

fn env_filter(directives: Option<&str>) -> Result<EnvFilter, ParseError> {
    match directives.map(EnvFilter::try_new) {
        Some(Ok(filter)) => Ok(filter),
        _ => EnvFilter::try_new(DEFAULT_DIRECTIVES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults_to_info() {
        assert_eq!(env_filter(None).unwrap().to_string(), "info");
    }

    #[test]
    fn test_filter_uses_given_directives() {
        let filter = env_filter(Some("pde_registry=debug")).unwrap();
        assert_eq!(filter.to_string(), "pde_registry=debug");
    }

    #[test]
    fn test_second_init_fails_without_panicking() {
        let _ = init();
        assert!(init().is_err());
    }
}
