//! Interpolated Equal Error Rate
//!
//! The EER is the root of `g(x) = 1 - x - TPR(x)` on `[0, 1]`, where `TPR(x)`
//! linearly interpolates the ROC curve. `g(0) >= 0` and `g(1) = -1`, so the
//! root is always bracketed. Brent's method finds it.

use crate::metrics::RocCurve;
use crate::{Error, Result};

/// Absolute tolerance on the root.
pub const XTOL: f64 = 2e-12;

/// Relative tolerance on the root.
pub const RTOL: f64 = 4.0 * f64::EPSILON;

/// Iteration cap for Brent's method.
pub const MAX_ITER: usize = 100;

/// EER via root finding over the interpolated ROC curve.
///
/// # Errors
///
/// Returns `Error::RootNotFound` if the root cannot be bracketed or Brent's
/// method does not converge.
pub fn eer_interpolated(roc: &RocCurve) -> Result<f64> {
    let (fpr, tpr) = (roc.fpr(), roc.tpr());
    brent(|x| 1.0 - x - interpolate(fpr, tpr, x), 0.0, 1.0, XTOL, RTOL, MAX_ITER)
}

/// Piecewise-linear interpolation of `ys` over non-decreasing `xs`.
///
/// On a vertical segment (repeated x) the last, i.e. upper, value is used.
/// Outside the range the nearest endpoint value is returned.
#[must_use]
pub fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let below = xs.partition_point(|&v| v <= x);
    if below == 0 {
        return ys.first().copied().unwrap_or(f64::NAN);
    }

    let j = below - 1;
    if j + 1 == xs.len() || xs[j] == x {
        return ys[j];
    }

    let (x0, x1, y0, y1) = (xs[j], xs[j + 1], ys[j], ys[j + 1]);
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Brent's root finder on the bracket `[xa, xb]`.
///
/// Combines bisection, secant and inverse quadratic interpolation steps.
/// Converges when the bracket half-width drops below
/// `(xtol + rtol * |x|) / 2`.
///
/// # Errors
///
/// Returns `Error::RootNotFound` if `f(xa)` and `f(xb)` share a sign or the
/// iteration cap is hit.
#[allow(clippy::many_single_char_names, clippy::similar_names)]
pub fn brent<F>(f: F, xa: f64, xb: f64, xtol: f64, rtol: f64, max_iter: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let (mut xpre, mut xcur) = (xa, xb);
    let (mut fpre, mut fcur) = (f(xpre), f(xcur));
    let (mut xblk, mut fblk) = (0.0_f64, 0.0_f64);
    let (mut spre, mut scur) = (0.0_f64, 0.0_f64);

    if fpre.is_nan() || fcur.is_nan() {
        return Err(Error::RootNotFound(format!(
            "function is NaN at bracket endpoint (f({xa}) = {fpre}, f({xb}) = {fcur})"
        )));
    }
    if fpre == 0.0 {
        return Ok(xpre);
    }
    if fcur == 0.0 {
        return Ok(xcur);
    }
    if fpre.is_sign_negative() == fcur.is_sign_negative() {
        return Err(Error::RootNotFound(format!(
            "f({xa}) = {fpre} and f({xb}) = {fcur} do not bracket a root"
        )));
    }

    for _ in 0..max_iter {
        if fpre != 0.0 && fcur != 0.0 && fpre.is_sign_negative() != fcur.is_sign_negative() {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }
        if fblk.abs() < fcur.abs() {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;

            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        let delta = (xtol + rtol * xcur.abs()) / 2.0;
        let sbis = (xblk - xcur) / 2.0;
        if fcur == 0.0 || sbis.abs() < delta {
            return Ok(xcur);
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry = if xpre == xblk {
                // secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                // inverse quadratic
                let dpre = (fpre - fcur) / (xpre - xcur);
                let dblk = (fblk - fcur) / (xblk - xcur);
                -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
            };

            if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if scur.abs() > delta {
            xcur += scur;
        } else {
            xcur += if sbis > 0.0 { delta } else { -delta };
        }
        fcur = f(xcur);
    }

    Err(Error::RootNotFound(format!(
        "no convergence after {max_iter} iterations"
    )))
}
