use super::*;

#[test]
fn test_constant_init_is_exact() {
    let mut init = Initializer::new(None);
    for _ in 0..5 {
        assert_eq!(init.sample::<f64>(&Init::Constant(0.1)).unwrap(), 0.1);
    }
    assert_eq!(init.sample::<f32>(&Init::Constant(0.0)).unwrap(), 0.0f32);
}

#[test]
fn test_uniform_init_stays_in_range() {
    let mut init = Initializer::new(Some(7));
    let dist = Init::Uniform {
        low: -0.5,
        high: 0.25,
    };
    for _ in 0..1000 {
        let v: f64 = init.sample(&dist).unwrap();
        assert!((-0.5..0.25).contains(&v), "{} out of range", v);
    }
}

#[test]
fn test_seeded_init_is_reproducible() {
    let dist = Init::Normal {
        mean: 0.0,
        std: 1.0,
    };
    let mut first = Initializer::new(Some(42));
    let mut second = Initializer::new(Some(42));
    let a: Vec<f64> = (0..16).map(|_| first.sample(&dist).unwrap()).collect();
    let b: Vec<f64> = (0..16).map(|_| second.sample(&dist).unwrap()).collect();
    assert_eq!(a, b);
    assert!(a.iter().any(|&v| v != a[0]));
}

#[test]
fn test_invalid_distributions_rejected() {
    let mut init = Initializer::new(Some(1));
    let empty = Init::Uniform { low: 1.0, high: 1.0 };
    assert!(matches!(empty.validate(), Err(NnError::InvalidInit(_))));
    assert!(matches!(init.sample::<f64>(&empty), Err(NnError::InvalidInit(_))));

    let negative_std = Init::Normal {
        mean: 0.0,
        std: -1.0,
    };
    assert!(matches!(negative_std.validate(), Err(NnError::InvalidInit(_))));
    assert!(matches!(
        init.sample::<f64>(&negative_std),
        Err(NnError::InvalidInit(_))
    ));

    assert!(Init::Constant(f64::NAN).validate().is_err());
    assert!(matches!(
        init.sample::<f64>(&Init::Constant(f64::INFINITY)),
        Err(NnError::InvalidInit(_))
    ));
    assert!(Init::Constant(0.1).validate().is_ok());
}
