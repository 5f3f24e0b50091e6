use pinverse::{
    fit_operator, greville, moore_penrose_limit, verify, GrevilleSettings, LimitSettings, Matrix,
};

const TOL: f64 = 1e-8;

fn assert_near(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64, msg: &str) {
    assert_eq!(a.shape(), b.shape(), "{}: shape", msg);
    assert!(
        a.max_abs_diff(b) < tol,
        "{}: matrices differ by {}",
        msg,
        a.max_abs_diff(b)
    );
}

// ── End-to-end: solve, verify, cross-check ──────────────────────────

#[test]
fn both_methods_verify_on_a_generic_matrix() {
    let a = Matrix::from_rows(
        4,
        3,
        &[1.0, 0.5, -2.0, 3.0, 1.0, 0.0, -1.0, 2.0, 2.0, 0.0, 1.0, 1.0],
    );

    let grev = greville(&a, &GrevilleSettings::default()).unwrap();
    let report = verify(&a, &grev.pinv, TOL).unwrap();
    assert!(report.reproduces_a);
    assert!(report.reproduces_pinv);
    assert!(report.ap_symmetric);
    assert!(report.pa_symmetric);

    let limit = moore_penrose_limit(&a, &LimitSettings::default()).unwrap();
    assert!(limit.converged);
    assert!(verify(&a, &limit.pinv, 1e-4).unwrap().all());

    assert_near(&grev.pinv, &limit.pinv, 1e-4, "methods agree");
}

#[test]
fn rank_one_matrix_end_to_end() {
    // Every row is a multiple of the first: rank 1
    let a = Matrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, -1.0, -2.0, -3.0]);

    let grev = greville(&a, &GrevilleSettings::default()).unwrap();
    assert_eq!(grev.degenerate_rows, &[1, 2]);
    assert!(verify(&a, &grev.pinv, TOL).unwrap().all());

    let limit = moore_penrose_limit(&a, &LimitSettings::default()).unwrap();
    assert!(limit.converged);
    assert_near(&grev.pinv, &limit.pinv, 1e-4, "rank-one pinv");
}

#[test]
fn verify_flags_a_wrong_candidate() {
    let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    // Right shape, wrong values
    let candidate = Matrix::from_rows(2, 2, &[1.0, 0.0, 0.0, 1.0]);
    let report = verify(&a, &candidate, TOL).unwrap();
    assert!(!report.reproduces_a);
    assert!(!report.all());
}

// ── Operator identification on top of the solvers ───────────────────

#[test]
fn operator_identification_reconstructs_consistent_data() {
    // X~ (3x3) is invertible, so the affine map W is recovered exactly
    let x = Matrix::from_rows(2, 3, &[1.0, 0.0, 2.0, 0.0, 1.0, 0.0]);
    let w = Matrix::from_rows(3, 3, &[2.0, 0.0, 1.0, -1.0, 1.0, 0.0, 0.0, 3.0, -2.0]);
    let x_aug_rows = {
        let mut m = x.clone();
        m.push_row(&[1.0, 1.0, 1.0]);
        m
    };
    let y = &w * &x_aug_rows;

    let fit = fit_operator(&x, &y, |m| {
        greville(m, &GrevilleSettings::default()).map(|r| r.pinv)
    })
    .unwrap();

    assert_near(&fit.operator, &w, TOL, "recovered operator");
    assert_near(&fit.predicted, &y, TOL, "reconstruction");
    assert!(fit.error.rmse < TOL);

    let fit_limit = fit_operator(&x, &y, |m| {
        moore_penrose_limit(m, &LimitSettings::default()).map(|r| r.pinv)
    })
    .unwrap();
    assert!(fit_limit.error.rmse < 1e-3);
}

#[test]
fn overdetermined_fit_minimizes_residual() {
    // One input row, five samples, outputs not exactly affine in the input
    let x: Matrix<f64> = Matrix::from_rows(1, 5, &[0.0, 1.0, 2.0, 3.0, 4.0]);
    let y: Matrix<f64> = Matrix::from_rows(1, 5, &[0.1, 1.9, 4.1, 5.9, 8.1]);

    let fit = fit_operator(&x, &y, |m| {
        greville(m, &GrevilleSettings::default()).map(|r| r.pinv)
    })
    .unwrap();

    // Least-squares slope/intercept of y ~= 2x + 0
    assert!((fit.operator[(0, 0)] - 2.0).abs() < 0.1);
    assert!(fit.operator[(0, 1)].abs() < 0.2);
    assert!(fit.error.rmse < 0.2);

    // The residual must beat any obviously worse operator
    let naive = Matrix::from_rows(1, 2, &[1.0, 0.0]);
    let naive_pred = &naive * &{
        let mut m = x.clone();
        m.push_row(&[1.0; 5]);
        m
    };
    let naive_sq = (&y - &naive_pred).frobenius_norm_squared();
    let fit_sq = (&y - &fit.predicted).frobenius_norm_squared();
    assert!(fit_sq < naive_sq);
}
