mod tests {
    use light_fader::config::fade_duration;
    use light_fader::{ConfigError, Duration, EventNames, FaderConfig, FaderOptions};

    #[test]
    fn test_parse_event_names() {
        let names = EventNames::parse(" on, lights_on ,,power,").unwrap();
        assert_eq!(names.len(), 3);
        assert!(names.contains("on"));
        assert!(names.contains("lights_on"));
        assert!(names.contains("power"));
        assert!(!names.contains(""));
    }

    #[test]
    fn test_parse_keeps_duplicates_once() {
        let names = EventNames::parse("on,on, on").unwrap();
        assert_eq!(names.iter().collect::<Vec<_>>(), ["on"]);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(EventNames::parse("").unwrap().is_empty());
        assert!(EventNames::parse(" , ,").unwrap().is_empty());
    }

    #[test]
    fn test_parse_capacity_errors() {
        assert_eq!(
            EventNames::parse("a,b,c,d,e,f,g,h,i"),
            Err(ConfigError::TooManyNames)
        );
        let long = "x".repeat(33);
        assert_eq!(EventNames::parse(&long), Err(ConfigError::NameTooLong));
    }

    #[test]
    fn test_fade_duration() {
        assert_eq!(fade_duration(0.1), Duration::from_millis(100));
        assert_eq!(fade_duration(2.5), Duration::from_millis(2500));
        assert_eq!(fade_duration(0.0), Duration::from_millis(0));
        assert_eq!(fade_duration(-1.0), Duration::from_millis(0));
        assert_eq!(fade_duration(f32::NAN), Duration::from_millis(0));
        assert_eq!(fade_duration(7.5), Duration::from_millis(5000));
    }

    #[test]
    fn test_defaults() {
        let config = FaderConfig::default();
        assert!(config.turn_on_events.contains("on"));
        assert!(config.turn_off_events.contains("off"));
        assert!(config.enable_events.contains("light_enable"));
        assert!(config.disable_events.contains("light_disable"));
        assert_eq!(config.turn_on_fade, Duration::from_millis(100));
        assert_eq!(config.turn_off_fade, Duration::from_millis(100));
        assert!(config.turn_off_at_start);
        assert!(config.start_enabled);
        assert!(config.has_fade_time());
    }

    #[test]
    fn test_has_fade_time() {
        let instant = FaderConfig::from_options(&FaderOptions {
            turn_on_fade_time: 0.0,
            turn_off_fade_time: 0.0,
            ..FaderOptions::default()
        })
        .unwrap();
        assert!(!instant.has_fade_time());

        let off_only = FaderConfig::from_options(&FaderOptions {
            turn_on_fade_time: 0.0,
            turn_off_fade_time: 1.0,
            ..FaderOptions::default()
        })
        .unwrap();
        assert!(off_only.has_fade_time());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::TooManyNames.to_string(),
            "event list has more than 8 names"
        );
    }
}
