mod tests {
    use light_fader::{BusFull, EventBus, EventNames, EventRouter, Trigger, TriggerGate};

    #[test]
    fn test_route_by_name() {
        let mut router = EventRouter::<4>::new();
        let on = router.subscribe("on", Trigger::TurnOn).unwrap();
        router.subscribe("off", Trigger::TurnOff).unwrap();
        router.subscribe("toggle", Trigger::TurnOn).unwrap();
        router.subscribe("toggle", Trigger::TurnOff).unwrap();

        assert_eq!(router.route("on").as_slice(), [Trigger::TurnOn]);
        assert_eq!(
            router.route("toggle").as_slice(),
            [Trigger::TurnOn, Trigger::TurnOff]
        );
        assert!(router.route("unknown").is_empty());

        router.unsubscribe(on);
        assert!(router.route("on").is_empty());
        assert_eq!(router.len(), 3);

        // Unknown ids are ignored
        router.unsubscribe(on);
        assert_eq!(router.len(), 3);
    }

    #[test]
    fn test_router_full() {
        let mut router = EventRouter::<1>::new();
        router.subscribe("on", Trigger::TurnOn).unwrap();
        assert_eq!(router.subscribe("off", Trigger::TurnOff), Err(BusFull));
    }

    #[test]
    fn test_gate_enable_is_reentrant() {
        let mut router = EventRouter::<8>::new();
        let mut gate = TriggerGate::new();
        let on = EventNames::parse("on,power").unwrap();
        let off = EventNames::parse("off").unwrap();

        assert_eq!(gate.enable(&mut router, &on, &off), Ok(true));
        assert_eq!(gate.enable(&mut router, &on, &off), Ok(false));
        assert!(gate.is_enabled());
        assert_eq!(gate.subscription_count(), 3);
        assert_eq!(router.count(Trigger::TurnOn), 2);
        assert_eq!(router.count(Trigger::TurnOff), 1);
    }

    #[test]
    fn test_gate_disable_is_idempotent() {
        let mut router = EventRouter::<8>::new();
        let mut gate = TriggerGate::new();
        let on = EventNames::parse("on").unwrap();
        let off = EventNames::parse("off").unwrap();
        gate.enable(&mut router, &on, &off).unwrap();

        assert!(gate.disable(&mut router));
        assert!(!gate.disable(&mut router));
        assert!(!gate.is_enabled());
        assert!(router.is_empty());
    }

    #[test]
    fn test_gate_rolls_back_on_full_bus() {
        let mut router = EventRouter::<2>::new();
        let mut gate = TriggerGate::new();
        let on = EventNames::parse("on,power").unwrap();
        let off = EventNames::parse("off").unwrap();

        assert_eq!(gate.enable(&mut router, &on, &off), Err(BusFull));
        assert!(!gate.is_enabled());
        assert_eq!(gate.subscription_count(), 0);
        assert!(router.is_empty());
    }
}
