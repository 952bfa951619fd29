use mandel_core::{ClipBound, Plane};
use mandel_dynamics::{Config, Error, MandelbrotDynamics, Unset};
use ndarray::{Array2, Ix2};
use num_complex::Complex64;

fn classic(resolution: [usize; 2]) -> MandelbrotDynamics {
    let plane = Plane::new([-2.1, 0.6], [-1.13, 1.13], resolution).unwrap();
    MandelbrotDynamics::new(
        Some(plane.origins()),
        Some(plane.offsets()),
        ClipBound::default(),
    )
}

#[test]
fn escape_map_matches_plane_shape() {
    let map = classic([40, 30])
        .divergence_iters(&Config::default())
        .unwrap();

    assert_eq!(map.dim(), (30, 40));
    assert!(map.iter().all(|&v| (0..=20).contains(&v)));
}

#[test]
fn known_points_inside_and_outside_the_set() {
    let c = Array2::from_shape_vec(
        (1, 4),
        vec![
            Complex64::new(0.0, 0.0),
            Complex64::new(-1.0, 0.0),
            Complex64::new(-0.1, 0.65),
            Complex64::new(2.0, 2.0),
        ],
    )
    .unwrap();
    let dynamics =
        MandelbrotDynamics::new(Some(Array2::zeros((1, 4))), Some(c), ClipBound::default());

    let map = dynamics.divergence_iters(&Config::default()).unwrap();

    assert_eq!(map[[0, 0]], 20);
    assert_eq!(map[[0, 1]], 20);
    assert_eq!(map[[0, 2]], 20);
    // |2 + 2i| is below 4 but the next iterate is 2 + 10i.
    assert_eq!(map[[0, 3]], 1);
}

#[test]
fn conjugate_offsets_give_the_same_map() {
    let plane = Plane::new([-2.0, 0.5], [0.0, 1.0], [25, 11]).unwrap();
    let c = plane.offsets();
    let conj = c.mapv(|c| c.conj());

    let upper = MandelbrotDynamics::new(Some(plane.origins()), Some(c), ClipBound::default());
    let lower = MandelbrotDynamics::new(Some(plane.origins()), Some(conj), ClipBound::default());

    assert_eq!(
        upper.divergence_iters(&Config::default()).unwrap(),
        lower.divergence_iters(&Config::default()).unwrap()
    );
}

#[test]
fn reassigning_grids_changes_result() {
    let mut dynamics: MandelbrotDynamics<Ix2> = MandelbrotDynamics::default();
    let c = Array2::from_elem((2, 2), Complex64::new(0.5, 0.0));

    assert!(matches!(
        dynamics.divergence_iters(&Config::default()),
        Err(Error::ParamsNotSet {
            missing: Unset::Both
        })
    ));

    dynamics.set_z0(&Array2::zeros((2, 2)));
    dynamics.set_c(&c);
    let escaped = dynamics.divergence_iters(&Config::default()).unwrap();
    assert!(escaped.iter().all(|&v| v == 5));

    dynamics.set_c(&Array2::from_elem((2, 2), Complex64::new(0.25, 0.0)));
    let bounded = dynamics.divergence_iters(&Config::default()).unwrap();
    assert!(bounded.iter().all(|&v| v == 20));
}

#[test]
fn out_of_bound_grids_are_clipped_before_iterating() {
    let dynamics = MandelbrotDynamics::new(
        Some(Array2::from_elem((1, 1), Complex64::new(50.0, -50.0))),
        Some(Array2::from_elem((1, 1), Complex64::new(-8.0, 0.0))),
        ClipBound::default(),
    );

    // (4 - 4i)² - 4 = -4 - 32i
    let z1 = dynamics.step(None, None).unwrap();
    assert_eq!(z1[[0, 0]], Complex64::new(-4.0, -32.0));
}
