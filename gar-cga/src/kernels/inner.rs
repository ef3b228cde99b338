//! Inner products of blocks of coefficients. The result has grade `|g1 - g2|`.

pub(super) fn vector_vector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += -a[0] * b[3] + a[1] * b[1] + a[2] * b[2] - a[3] * b[0];
}

pub(super) fn vector_bivector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += a[0] * b[2] - a[1] * b[0] - a[2] * b[1];
    out[1] += a[0] * b[4] - a[2] * b[3] - a[3] * b[0];
    out[2] += a[0] * b[5] + a[1] * b[3] - a[3] * b[1];
    out[3] += a[1] * b[4] + a[2] * b[5] - a[3] * b[2];
}

pub(super) fn vector_trivector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += -a[0] * b[1] + a[2] * b[0];
    out[1] += -a[0] * b[2] - a[1] * b[0];
    out[2] += -a[1] * b[1] - a[2] * b[2];
    out[3] += -a[0] * b[3] - a[3] * b[0];
    out[4] += -a[2] * b[3] - a[3] * b[1];
    out[5] += a[1] * b[3] - a[3] * b[2];
}

pub(super) fn vector_quadvector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += a[0] * b[0];
    out[1] += a[2] * b[0];
    out[2] += -a[1] * b[0];
    out[3] += -a[3] * b[0];
}

pub(super) fn bivector_vector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += a[0] * b[1] + a[1] * b[2] - a[2] * b[0];
    out[1] += a[0] * b[3] + a[3] * b[2] - a[4] * b[0];
    out[2] += a[1] * b[3] - a[3] * b[1] - a[5] * b[0];
    out[3] += a[2] * b[3] - a[4] * b[1] - a[5] * b[2];
}

pub(super) fn bivector_bivector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += -a[0] * b[4] - a[1] * b[5] + a[2] * b[2] - a[3] * b[3] - a[4] * b[0] - a[5] * b[1];
}

pub(super) fn bivector_trivector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += -a[0] * b[1] - a[1] * b[2] - a[3] * b[0];
    out[1] += -a[1] * b[3] - a[2] * b[1] + a[5] * b[0];
    out[2] += a[0] * b[3] - a[2] * b[2] - a[4] * b[0];
    out[3] += -a[3] * b[3] - a[4] * b[1] - a[5] * b[2];
}

pub(super) fn bivector_quadvector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += -a[1] * b[0];
    out[1] += a[0] * b[0];
    out[2] += -a[3] * b[0];
    out[3] += a[2] * b[0];
    out[4] += a[5] * b[0];
    out[5] += -a[4] * b[0];
}

pub(super) fn trivector_vector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += a[0] * b[2] - a[1] * b[0];
    out[1] += -a[0] * b[1] - a[2] * b[0];
    out[2] += -a[1] * b[1] - a[2] * b[2];
    out[3] += -a[0] * b[3] - a[3] * b[0];
    out[4] += -a[1] * b[3] - a[3] * b[2];
    out[5] += -a[2] * b[3] + a[3] * b[1];
}

pub(super) fn trivector_bivector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += -a[0] * b[3] - a[1] * b[0] - a[2] * b[1];
    out[1] += a[0] * b[5] - a[1] * b[2] - a[3] * b[1];
    out[2] += -a[0] * b[4] - a[2] * b[2] + a[3] * b[0];
    out[3] += -a[1] * b[4] - a[2] * b[5] - a[3] * b[3];
}

pub(super) fn trivector_trivector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += a[0] * b[3] + a[1] * b[1] + a[2] * b[2] + a[3] * b[0];
}

pub(super) fn trivector_quadvector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += -a[0] * b[0];
    out[1] += a[2] * b[0];
    out[2] += -a[1] * b[0];
    out[3] += a[3] * b[0];
}

pub(super) fn quadvector_vector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += -a[0] * b[0];
    out[1] += -a[0] * b[2];
    out[2] += a[0] * b[1];
    out[3] += a[0] * b[3];
}

pub(super) fn quadvector_bivector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += -a[0] * b[1];
    out[1] += a[0] * b[0];
    out[2] += -a[0] * b[3];
    out[3] += a[0] * b[2];
    out[4] += a[0] * b[5];
    out[5] += -a[0] * b[4];
}

pub(super) fn quadvector_trivector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += a[0] * b[0];
    out[1] += -a[0] * b[2];
    out[2] += a[0] * b[1];
    out[3] += -a[0] * b[3];
}

pub(super) fn quadvector_quadvector(a: &[f64], b: &[f64], out: &mut [f64]) {
    out[0] += -a[0] * b[0];
}
