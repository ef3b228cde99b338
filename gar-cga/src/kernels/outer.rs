//! Outer products of blocks of coefficients, one function per pair of nonzero grades whose
//! sum is at most 4.

pub(super) fn vector_vector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += a[0] * b[1] - a[1] * b[0];
    out[1] += a[0] * b[2] - a[2] * b[0];
    out[2] += a[0] * b[3] - a[3] * b[0];
    out[3] += a[1] * b[2] - a[2] * b[1];
    out[4] += a[1] * b[3] - a[3] * b[1];
    out[5] += a[2] * b[3] - a[3] * b[2];
}

pub(super) fn vector_bivector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += a[0] * b[3] - a[1] * b[1] + a[2] * b[0];
    out[1] += a[0] * b[4] - a[1] * b[2] + a[3] * b[0];
    out[2] += a[0] * b[5] - a[2] * b[2] + a[3] * b[1];
    out[3] += a[1] * b[5] - a[2] * b[4] + a[3] * b[3];
}

pub(super) fn vector_trivector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += a[0] * b[3] - a[1] * b[2] + a[2] * b[1] - a[3] * b[0];
}

pub(super) fn bivector_vector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += a[0] * b[2] - a[1] * b[1] + a[3] * b[0];
    out[1] += a[0] * b[3] - a[2] * b[1] + a[4] * b[0];
    out[2] += a[1] * b[3] - a[2] * b[2] + a[5] * b[0];
    out[3] += a[3] * b[3] - a[4] * b[2] + a[5] * b[1];
}

pub(super) fn bivector_bivector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += a[0] * b[5] - a[1] * b[4] + a[2] * b[3] + a[3] * b[2] - a[4] * b[1] + a[5] * b[0];
}

pub(super) fn trivector_vector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += a[0] * b[3] - a[1] * b[2] + a[2] * b[1] - a[3] * b[0];
}
