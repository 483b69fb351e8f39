//! Mutual eclipses of two projected disks
//!
//! The nearer star (smaller image depth) is never reduced; the farther one
//! loses whatever part of its disk the nearer one covers.

use std::f64::consts::PI;

pub fn disk_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Area shared by two disks of radii `ra`, `rb` whose centres are `d` apart
pub fn overlap_area(ra: f64, rb: f64, d: f64) -> f64 {
    if d >= ra + rb {
        return 0.0;
    }
    if d <= (ra - rb).abs() {
        return disk_area(ra.min(rb));
    }

    // half-angles subtended by the chord at each centre
    let (sq_ra, sq_rb, sq_d) = (ra * ra, rb * rb, d * d);
    let alpha = ((sq_ra - sq_rb + sq_d) / (2.0 * ra * d)).clamp(-1.0, 1.0).acos();
    let beta = ((sq_rb - sq_ra + sq_d) / (2.0 * rb * d)).clamp(-1.0, 1.0).acos();

    // sum of the two circular segments
    0.5 * (sq_ra * (2.0 * alpha - (2.0 * alpha).sin()) + sq_rb * (2.0 * beta - (2.0 * beta).sin()))
}

/// Whether disk a lies behind disk b. On an exact depth tie the larger disk
/// is behind, and with equal radii too disk b is.
pub fn is_behind(depth_a: f64, ra: f64, depth_b: f64, rb: f64) -> bool {
    depth_a > depth_b || (depth_a == depth_b && ra > rb)
}

/// Visible areas `(area_a, area_b)` of two disks `d` apart in the sky plane
/// with line-of-sight depths `depth_a`, `depth_b`. Depth ties follow
/// `is_behind`.
pub fn visible_areas(ra: f64, rb: f64, d: f64, depth_a: f64, depth_b: f64) -> (f64, f64) {
    let (area_a, area_b) = (disk_area(ra), disk_area(rb));
    if d >= ra + rb {
        return (area_a, area_b);
    }

    let a_in_front = !is_behind(depth_a, ra, depth_b, rb);
    let (r_near, r_far, area_far) = if a_in_front { (ra, rb, area_b) } else { (rb, ra, area_a) };

    let far_visible = if d <= (ra - rb).abs() {
        if r_near >= r_far {
            0.0
        } else {
            area_far - disk_area(r_near)
        }
    } else {
        area_far - overlap_area(ra, rb, d)
    };
    let far_visible = far_visible.max(0.0);

    if a_in_front {
        (area_a, far_visible)
    } else {
        (far_visible, area_b)
    }
}

/// Normalisation of the light curve, fixed per configuration
pub fn max_flux(lum1: f64, lum2: f64) -> f64 {
    0.25 * (lum1 + lum2)
}

/// (flux1 area1 + flux2 area2) / max_flux, 1 with both disks unobstructed
pub fn relative_flux(fluxes: [f64; 2], areas: [f64; 2], max_flux: f64) -> f64 {
    (fluxes[0] * areas[0] + fluxes[1] * areas[1]) / max_flux
}
