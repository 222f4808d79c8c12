#[cfg(test)]
mod common_tests {
    use crate::common::common::parse_log_level;
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("off"), Some(log::LevelFilter::Off));
        assert_eq!(parse_log_level("trace"), Some(log::LevelFilter::Trace));
        assert_eq!(parse_log_level("debug"), Some(log::LevelFilter::Debug));
        assert_eq!(parse_log_level("info"), Some(log::LevelFilter::Info));
        assert_eq!(parse_log_level("warn"), Some(log::LevelFilter::Warn));
        assert_eq!(parse_log_level("error"), Some(log::LevelFilter::Error));
        assert_eq!(parse_log_level("verbose"), None);
        assert_eq!(parse_log_level("INFO"), None);
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("could not create config.toml file");
        assert_eq!(format!("{}", error), "could not create config.toml file");
        assert_eq!(error.message(), "could not create config.toml file");
    }
}
