use tracing_subscriber::{filter::LevelFilter, fmt};

/// Map `-v` / `-q` counts to a level. Warnings are shown by default.
pub fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global stderr subscriber. Returns `false` if one was already set.
pub fn init_tracing(level: LevelFilter) -> bool {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        // No subscriber of ours is active, so tracing macros would go nowhere
        eprintln!("Warning: tracing subscriber already set; skipping re-initialization.");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        assert_eq!(log_level(0, false), LevelFilter::WARN);
        assert_eq!(log_level(1, false), LevelFilter::INFO);
        assert_eq!(log_level(2, false), LevelFilter::DEBUG);
        assert_eq!(log_level(5, false), LevelFilter::TRACE);
        assert_eq!(log_level(0, true), LevelFilter::ERROR);
    }

    #[test]
    fn test_second_init_is_reported() {
        init_tracing(LevelFilter::WARN);
        assert!(!init_tracing(LevelFilter::DEBUG));
    }
}
