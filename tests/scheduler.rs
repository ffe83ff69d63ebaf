mod tests {
    use light_fader::{Duration, Instant, InterpolationScheduler, TICK_PERIOD, TickResult};

    #[test]
    fn test_start_requires_fade_time() {
        let mut scheduler = InterpolationScheduler::new(false);
        assert!(!scheduler.start(Instant::from_millis(0)));
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.poll(Instant::from_millis(1000)), None);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut scheduler = InterpolationScheduler::new(true);
        assert!(scheduler.start(Instant::from_millis(0)));
        assert!(!scheduler.start(Instant::from_millis(50)));
        assert_eq!(scheduler.next_deadline(), Some(Instant::from_millis(100)));
        assert_eq!(scheduler.period(), TICK_PERIOD);
    }

    #[test]
    fn test_poll_reports_due_ticks() {
        let mut scheduler = InterpolationScheduler::new(true);
        scheduler.start(Instant::from_millis(0));

        assert_eq!(
            scheduler.poll(Instant::from_millis(50)),
            Some(TickResult {
                due: 0,
                sleep_duration: Duration::from_millis(50),
            })
        );
        assert_eq!(
            scheduler.poll(Instant::from_millis(100)),
            Some(TickResult {
                due: 1,
                sleep_duration: Duration::from_millis(100),
            })
        );
        // Within the drift window the backlog is caught up
        assert_eq!(
            scheduler.poll(Instant::from_millis(350)),
            Some(TickResult {
                due: 2,
                sleep_duration: Duration::from_millis(50),
            })
        );
    }

    #[test]
    fn test_long_idle_does_not_accumulate() {
        let mut scheduler = InterpolationScheduler::new(true);
        scheduler.start(Instant::from_millis(0));

        let result = scheduler.poll(Instant::from_secs(3600)).unwrap();
        assert_eq!(result.due, 1);
        assert_eq!(
            scheduler.next_deadline(),
            Some(Instant::from_secs(3600) + TICK_PERIOD)
        );
    }

    #[test]
    fn test_stop_cancels_immediately() {
        let mut scheduler = InterpolationScheduler::new(true);
        scheduler.start(Instant::from_millis(0));

        scheduler.stop();
        scheduler.stop();
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.poll(Instant::from_millis(500)), None);

        assert!(scheduler.start(Instant::from_millis(500)));
        assert_eq!(scheduler.next_deadline(), Some(Instant::from_millis(600)));
    }

    #[test]
    fn test_zero_period_is_bounded() {
        let mut scheduler = InterpolationScheduler::with_period(true, Duration::from_millis(0));
        scheduler.start(Instant::from_millis(0));

        let result = scheduler.poll(Instant::from_millis(10)).unwrap();
        assert!(result.due <= 3);
    }
}
