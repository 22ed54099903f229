//! Configuration parsing tests.
//!
//! These tests verify origin-list parsing and configuration value handling
//! without touching process environment variables.

use lectur_api::config::parse_origin_list;

mod origin_list_tests {
    use super::*;

    #[test]
    fn test_single_origin() {
        let origins = parse_origin_list("http://localhost:5173");
        assert_eq!(origins, vec!["http://localhost:5173"]);
    }

    #[test]
    fn test_multiple_origins() {
        let origins =
            parse_origin_list("http://localhost:5173,https://lectur-recommendation.vercel.app");
        assert_eq!(
            origins,
            vec![
                "http://localhost:5173",
                "https://lectur-recommendation.vercel.app"
            ]
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let origins = parse_origin_list(" http://localhost:5173 , https://example.com ");
        assert_eq!(origins, vec!["http://localhost:5173", "https://example.com"]);
    }

    #[test]
    fn test_empty_entries_are_dropped() {
        let origins = parse_origin_list("http://localhost:5173,,https://example.com,");
        assert_eq!(origins, vec!["http://localhost:5173", "https://example.com"]);
    }

    #[test]
    fn test_empty_string_yields_no_origins() {
        assert!(parse_origin_list("").is_empty());
        assert!(parse_origin_list(" , ").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let origins = parse_origin_list("https://b.example,https://a.example");
        assert_eq!(origins, vec!["https://b.example", "https://a.example"]);
    }
}

mod server_config_tests {
    #[test]
    fn test_default_port_is_valid() {
        let default_port: u16 = 8000;
        assert!(default_port > 1024);
    }

    #[test]
    fn test_port_parse_bounds() {
        assert!("8000".parse::<u16>().is_ok());
        assert!("0".parse::<u16>().is_ok());
        assert!("65536".parse::<u16>().is_err());
        assert!("not-a-port".parse::<u16>().is_err());
    }
}
