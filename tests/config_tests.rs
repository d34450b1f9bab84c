// Host-side tests for presets, validation and string overrides.

use portrait_particles::core::*;

#[test]
fn presets_are_valid() {
    assert!(SimulationConfig::portrait().validate().is_ok());
    assert!(SimulationConfig::constellation().validate().is_ok());
    assert_eq!(SimulationConfig::default(), SimulationConfig::portrait());
}

#[test]
fn presets_differ_where_the_designs_differ() {
    let p = SimulationConfig::portrait();
    let c = SimulationConfig::constellation();
    assert!(matches!(p.field, FieldStrategy::Image { .. }));
    assert!(matches!(c.field, FieldStrategy::Random { count: 80 }));
    assert_eq!(p.boundary, BoundaryPolicy::Open);
    assert_eq!(c.boundary, BoundaryPolicy::Bounce);
    assert!(p.stabilization.is_none() && c.stabilization.is_some());
    assert!(p.links.is_none() && c.links.is_some());
    assert_eq!(c.force, ForcePolicy::Radius { radius: 100.0 });
}

#[test]
fn variant_lookup() {
    assert_eq!(
        SimulationConfig::variant("").unwrap(),
        SimulationConfig::portrait()
    );
    assert_eq!(
        SimulationConfig::variant(" Constellation ").unwrap(),
        SimulationConfig::constellation()
    );
    assert!(matches!(
        SimulationConfig::variant("fireworks"),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn validation_rejects_unstable_or_degenerate_settings() {
    let base = SimulationConfig::portrait();
    let bad = [
        SimulationConfig {
            friction: 1.0,
            ..base.clone()
        },
        SimulationConfig {
            friction: 0.0,
            ..base.clone()
        },
        SimulationConfig {
            spring: -0.1,
            ..base.clone()
        },
        SimulationConfig {
            width: 0.0,
            ..base.clone()
        },
        SimulationConfig {
            trail_len: 99,
            ..base.clone()
        },
        SimulationConfig {
            force: ForcePolicy::ColliderBuffer {
                collider_radius: 80.0,
                radius: 50.0,
                buffer: 20.0,
            },
            ..base.clone()
        },
        SimulationConfig {
            force: ForcePolicy::Radius { radius: 0.0 },
            ..base.clone()
        },
        SimulationConfig {
            field: FieldStrategy::Image {
                sample_width: 100,
                stride: 0,
                alpha_threshold: 128,
                brightness_threshold: 240.0,
                jitter: 25.0,
            },
            ..base.clone()
        },
    ];
    for cfg in bad {
        assert!(cfg.validate().is_err(), "accepted {cfg:?}");
    }
}

#[test]
fn overrides_update_single_fields() {
    let mut cfg = SimulationConfig::portrait();
    cfg.apply_override("radius", "80").unwrap();
    cfg.apply_override("direction", "attract").unwrap();
    cfg.apply_override("boundary", "bounce").unwrap();
    cfg.apply_override("trail", "0").unwrap();
    cfg.apply_override("jitter", "5").unwrap();
    assert_eq!(cfg.force.outer_radius(), 80.0 + constants::PORTRAIT_BUFFER);
    assert_eq!(cfg.direction, ForceDirection::Attract);
    assert_eq!(cfg.boundary, BoundaryPolicy::Bounce);
    assert_eq!(cfg.trail_len, 0);
    let FieldStrategy::Image { jitter, .. } = cfg.field else {
        panic!("portrait samples an image");
    };
    assert_eq!(jitter, 5.0);
    assert!(cfg.validate().is_ok());

    assert_eq!(
        cfg.apply_override("gravity", "1"),
        Err(SimError::UnknownOverride("gravity".into()))
    );
    assert!(cfg.apply_override("radius", "wide").is_err());
    assert!(cfg.apply_override("count", "10").is_err());
}

#[test]
fn collider_override_converts_radius_policy() {
    let mut cfg = SimulationConfig::constellation();
    cfg.apply_override("collider", "15").unwrap();
    let expected = ForcePolicy::ColliderBuffer {
        collider_radius: 15.0,
        radius: 100.0,
        buffer: 0.0,
    };
    assert_eq!(cfg.force, expected);
    cfg.apply_override("links", "off").unwrap();
    assert!(cfg.links.is_none());
}

#[test]
fn variant_override_applies_before_the_rest() {
    let pairs = [
        ("radius", "60"),
        ("variant", "constellation"),
        ("count", "20"),
    ];
    let (cfg, errors) = SimulationConfig::with_overrides(SimulationConfig::portrait(), pairs);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(cfg.force, ForcePolicy::Radius { radius: 60.0 });
    assert!(matches!(cfg.field, FieldStrategy::Random { count: 20 }));
}

#[test]
fn invalid_result_falls_back_to_base() {
    let pairs = [("friction", "1.5"), ("bogus", "x")];
    let (cfg, errors) = SimulationConfig::with_overrides(SimulationConfig::portrait(), pairs);
    assert_eq!(cfg, SimulationConfig::portrait());
    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], SimError::UnknownOverride(_)));
    assert!(matches!(errors[1], SimError::InvalidConfig(_)));
}
