use crate::coord::{Coordinate, normalize_longitude};
use crate::error::OlcError;
use geo_types::Point;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// WGS-84 semi-major axis in meters.
pub(crate) const WGS84_A: f64 = 6_378_137.0;
/// WGS-84 flattening.
pub(crate) const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS-84 semi-minor axis in meters.
pub(crate) const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);

const CONVERGENCE_THRESHOLD: f64 = 1e-12;
const MAX_ITERATIONS: usize = 100;

/// Solution of the inverse geodesic problem between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodesicInverse {
    /// Ellipsoidal distance in meters.
    pub distance: f64,
    /// Bearing from the first point towards the second, at the first point, in `[0, 360)`.
    pub initial_azimuth: f64,
    /// Bearing from the second point back towards the first, at the second point, in `[0, 360)`.
    pub reverse_azimuth: f64,
}

impl GeodesicInverse {
    fn coincident() -> Self {
        Self {
            distance: 0.0,
            initial_azimuth: 0.0,
            reverse_azimuth: 0.0,
        }
    }
}

/// Vincenty's `A` and `B` series coefficients for a given `cos²α`.
fn series_coefficients(cos_sq_alpha: f64) -> (f64, f64) {
    let u_sq = cos_sq_alpha * (WGS84_A * WGS84_A - WGS84_B * WGS84_B) / (WGS84_B * WGS84_B);
    let a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    (a, b)
}

fn delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
    let cos_sq_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    b * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_sq_2sigma_m)
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_sq_2sigma_m)))
}

/// Vincenty's `C` term.
fn lambda_correction(cos_sq_alpha: f64) -> f64 {
    WGS84_F / 16.0 * cos_sq_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos_sq_alpha))
}

fn normalize_azimuth(degrees: f64) -> f64 {
    let azimuth = degrees.rem_euclid(360.0);
    if azimuth >= 360.0 { 0.0 } else { azimuth }
}

/// Solves the direct geodesic problem on WGS-84 using Vincenty's formula.
///
/// Starting at `start`, travels `distance` meters along the geodesic leaving at
/// `azimuth` degrees (clockwise from north) and returns the destination point.
/// The returned longitude is normalized to `[-180, 180)`.
///
/// # Example
/// ```
/// use olc_rs::calculate_destination;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let east = calculate_destination(&(0.0, 0.0), 90.0, 111_319.490_793)?;
/// assert!((east.x() - 1.0).abs() < 1e-6);
/// assert!(east.y().abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`OlcError::NoConvergence`] if σ does not settle within 100 iterations.
pub fn calculate_destination(
    start: &impl Coordinate,
    azimuth: f64,
    distance: f64,
) -> Result<Point<f64>, OlcError> {
    let (sin_alpha1, cos_alpha1) = azimuth.to_radians().sin_cos();

    let tan_u1 = (1.0 - WGS84_F) * start.lat().to_radians().tan();
    let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
    let sin_u1 = tan_u1 * cos_u1;

    let sigma1 = tan_u1.atan2(cos_alpha1);
    let sin_alpha = cos_u1 * sin_alpha1;
    let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
    let (a, b) = series_coefficients(cos_sq_alpha);

    let first_approximation = distance / (WGS84_B * a);
    let mut sigma = first_approximation;
    let mut iterations = 0;
    loop {
        let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
        let (sin_sigma, cos_sigma) = sigma.sin_cos();
        let next = first_approximation + delta_sigma(b, sin_sigma, cos_sigma, cos_2sigma_m);
        let converged = (next - sigma).abs() < CONVERGENCE_THRESHOLD;
        sigma = next;
        if converged {
            break;
        }
        iterations += 1;
        if iterations >= MAX_ITERATIONS {
            debug!(azimuth, distance, "vincenty direct did not converge");
            return Err(OlcError::NoConvergence);
        }
    }

    let (sin_sigma, cos_sigma) = sigma.sin_cos();
    let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();

    let x = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
    let phi2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
        .atan2((1.0 - WGS84_F) * (sin_alpha * sin_alpha + x * x).sqrt());
    let lambda =
        (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
    let c = lambda_correction(cos_sq_alpha);
    let l = lambda
        - (1.0 - c)
            * WGS84_F
            * sin_alpha
            * (sigma
                + c * sin_sigma
                    * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

    let lon = normalize_longitude(start.lon() + l.to_degrees());
    Ok(Point::new(lon, phi2.to_degrees()))
}

/// Solves the inverse geodesic problem on WGS-84 using Vincenty's formula.
///
/// Points whose latitude and longitude both differ by less than `1e-12` degrees are
/// treated as the same point (zero distance, zero azimuths).
///
/// # Example
/// ```
/// use olc_rs::calculate_inverse;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let inverse = calculate_inverse(&(0.0, 0.0), &(1.0, 0.0))?;
/// assert!((inverse.distance - 111_319.490_793).abs() < 1e-3);
/// assert!((inverse.initial_azimuth - 90.0).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`OlcError::NoConvergence`] if λ does not settle within 100 iterations, which
/// happens for nearly antipodal points. This is never reported as a zero distance.
pub fn calculate_inverse(
    p1: &impl Coordinate,
    p2: &impl Coordinate,
) -> Result<GeodesicInverse, OlcError> {
    if (p1.lat() - p2.lat()).abs() < CONVERGENCE_THRESHOLD
        && (p1.lon() - p2.lon()).abs() < CONVERGENCE_THRESHOLD
    {
        return Ok(GeodesicInverse::coincident());
    }

    let l = (p2.lon() - p1.lon()).to_radians();
    let u1 = ((1.0 - WGS84_F) * p1.lat().to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * p2.lat().to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut iterations = 0;
    let (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m) = loop {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let cross = cos_u2 * sin_lambda;
        let along = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        let sin_sigma = (cross * cross + along * along).sqrt();
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        if sin_sigma == 0.0 {
            if cos_sigma > 0.0 {
                return Ok(GeodesicInverse::coincident());
            }
            debug!("vincenty inverse hit exactly antipodal points");
            return Err(OlcError::NoConvergence);
        }

        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // equatorial line: cos²α = 0
        let cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };
        let c = lambda_correction(cos_sq_alpha);
        let next = l
            + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        let converged = (next - lambda).abs() < CONVERGENCE_THRESHOLD;
        lambda = next;
        if converged {
            break (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m);
        }
        iterations += 1;
        if iterations >= MAX_ITERATIONS {
            debug!(
                lat1 = p1.lat(),
                lon1 = p1.lon(),
                lat2 = p2.lat(),
                lon2 = p2.lon(),
                "vincenty inverse did not converge"
            );
            return Err(OlcError::NoConvergence);
        }
    };

    let (a, b) = series_coefficients(cos_sq_alpha);
    let distance = WGS84_B * a * (sigma - delta_sigma(b, sin_sigma, cos_sigma, cos_2sigma_m));

    let (sin_lambda, cos_lambda) = lambda.sin_cos();
    let initial = (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
    let final_bearing =
        (cos_u1 * sin_lambda).atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda);

    Ok(GeodesicInverse {
        distance,
        initial_azimuth: normalize_azimuth(initial.to_degrees()),
        reverse_azimuth: normalize_azimuth(final_bearing.to_degrees() + 180.0),
    })
}
