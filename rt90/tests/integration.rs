//! Tests d'intégration sur des points connus du quadrillage RT90

use rt90::{gauss_kruger, wgs84_from_rt90, GridCoord};

/// Comparaison relative symétrique
fn nearly_equal(a: f64, b: f64, epsilon: f64) -> bool {
    let diff = (a - b).abs();

    if a == b {
        true
    } else if a == 0.0 || b == 0.0 || diff < f64::MIN_POSITIVE {
        diff < epsilon * f64::MIN_POSITIVE
    } else {
        diff / (a.abs() + b.abs()) < epsilon
    }
}

#[test]
fn test_known_points() {
    let cases = [
        // (x, y, lat, long)
        (6791723.0, 1405053.0, 61.229502, 14.037397),
        (7118097.0, 1575237.0, 64.161091, 17.351571),
    ];

    for (x, y, want_lat, want_long) in cases {
        let (lat, long) = wgs84_from_rt90(x, y);
        assert!(
            nearly_equal(want_lat, lat, 1e-6),
            "unexpected latitude: got = {}, want = {}",
            lat,
            want_lat
        );
        assert!(
            nearly_equal(want_long, long, 1e-6),
            "unexpected longitude: got = {}, want = {}",
            long,
            want_long
        );
    }
}

#[test]
fn test_deterministic() {
    let first = wgs84_from_rt90(6583052.0, 1628293.0);
    for _ in 0..100 {
        let again = wgs84_from_rt90(6583052.0, 1628293.0);
        assert_eq!(first.0.to_bits(), again.0.to_bits());
        assert_eq!(first.1.to_bits(), again.1.to_bits());
    }
}

#[test]
fn test_threads_agree() {
    let expected = wgs84_from_rt90(6791723.0, 1405053.0);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| wgs84_from_rt90(6791723.0, 1405053.0)))
        .collect();

    for h in handles {
        let got = h.join().unwrap();
        assert_eq!(got.0.to_bits(), expected.0.to_bits());
        assert_eq!(got.1.to_bits(), expected.1.to_bits());
    }
}

#[test]
fn test_continuity() {
    // Grille couvrant la Suède, pas de 100 km
    let mut x = 6_100_000.0;
    while x <= 7_700_000.0 {
        let mut y = 1_200_000.0;
        while y <= 1_900_000.0 {
            let (lat, long) = wgs84_from_rt90(x, y);

            for (dx, dy) in [(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)] {
                let (lat2, long2) = wgs84_from_rt90(x + dx, y + dy);
                // 1 m ≈ 9e-6° en latitude, < 3e-5° en longitude à 69°N
                assert!((lat2 - lat).abs() < 1e-4, "lat jump at ({}, {})", x, y);
                assert!((long2 - long).abs() < 1e-4, "long jump at ({}, {})", x, y);
                assert!(lat2 != lat || long2 != long, "no change at ({}, {})", x, y);
            }
            y += 100_000.0;
        }
        x += 100_000.0;
    }
}

#[test]
fn test_monotonic() {
    // Plus au nord → latitude plus grande ; plus à l'est → longitude plus grande
    let (lat_south, _) = wgs84_from_rt90(6_200_000.0, 1_500_000.0);
    let (lat_north, _) = wgs84_from_rt90(7_600_000.0, 1_500_000.0);
    assert!(lat_north > lat_south);

    let (_, long_west) = wgs84_from_rt90(6_600_000.0, 1_300_000.0);
    let (_, long_east) = wgs84_from_rt90(6_600_000.0, 1_800_000.0);
    assert!(long_east > long_west);
}

#[test]
fn test_nan_propagation() {
    let (lat, long) = wgs84_from_rt90(f64::NAN, 1405053.0);
    assert!(lat.is_nan());
    assert!(long.is_nan());

    // Très loin à l'est : les sinh/cosh débordent
    let geo = gauss_kruger(GridCoord::new(6_700_000.0, 1.0e9));
    assert!(geo.lat.is_nan(), "lat={}", geo.lat);
    assert!(!geo.is_finite());
}

#[test]
fn test_not_identity() {
    let (x, y) = (6791723.0, 1405053.0);
    let (lat, long) = wgs84_from_rt90(x, y);
    assert_ne!(lat, x);
    assert_ne!(long, y);
    assert!((-90.0..=90.0).contains(&lat));
    assert!((-180.0..=180.0).contains(&long));
}
