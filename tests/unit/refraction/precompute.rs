use super::*;

fn params(profile: SurfaceProfile, refractive_index: f64, sample_count: usize) -> RefractionParams {
    RefractionParams {
        thickness: 80.0,
        bezel_width: 25.0,
        profile,
        refractive_index,
        sample_count,
    }
}

#[test]
fn length_matches_requested_sample_count() {
    for n in [0usize, 1, 7, DEFAULT_SAMPLE_COUNT, 300] {
        let s = precompute_refraction(&params(SurfaceProfile::ConvexSquircle, 1.5, n));
        assert_eq!(s.len(), n);
    }
}

#[test]
fn samples_are_finite_for_physical_inputs() {
    for profile in SurfaceProfile::ALL {
        for ior in [1.0, 1.33, 1.5, 2.4] {
            let s = precompute_refraction(&params(profile, ior, 128));
            for (i, v) in s.as_slice().iter().enumerate() {
                assert!(v.is_finite(), "{profile} ior={ior} sample {i} = {v}");
            }
        }
    }
}

#[test]
fn index_of_one_does_not_bend_light() {
    let s = precompute_refraction(&params(SurfaceProfile::ConvexCircle, 1.0, 64));
    assert!(s.as_slice().iter().all(|v| v.abs() < 1e-9));
}

#[test]
fn convex_bezel_pushes_light_inwards_at_outer_edge() {
    let s = precompute_refraction(&params(SurfaceProfile::ConvexSquircle, 1.5, 128));
    assert!(s.get(0) > 0.0);
    assert!(s.max_abs() > 0.0);
    // The flat interior is approached with a vanishing slope.
    assert!(s.get(127).abs() < s.get(0).abs());
}

#[test]
fn total_internal_reflection_records_zero() {
    // An index below one makes eta > 1, so steep slopes have no transmitted ray.
    let s = precompute_refraction(&params(SurfaceProfile::ConvexCircle, 0.5, 128));
    assert_eq!(s.get(0), 0.0);
}

#[test]
fn out_of_range_lookups_default_to_zero() {
    let s = RefractionSamples::from_vec(vec![1.0, -3.0]);
    assert_eq!(s.get(1), -3.0);
    assert_eq!(s.get(2), 0.0);
    assert_eq!(s.max_abs(), 3.0);
    assert_eq!(RefractionSamples::default().max_abs(), 0.0);
}

#[test]
fn precompute_is_deterministic() {
    let p = params(SurfaceProfile::Lip, 1.5, 128);
    assert_eq!(precompute_refraction(&p), precompute_refraction(&p));
}
