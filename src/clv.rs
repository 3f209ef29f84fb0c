use crate::{Error, Result};

/// Projects customer lifetime value with the closed-form retention model:
/// `revenue * frequency * retention / (1 - retention)`, rounded to cents.
///
/// A retention rate of 1 zeroes the denominator and the projection blows up
/// to a non-finite value, which is reported as an error rather than relayed.
pub fn project(revenue: f64, frequency: f64, retention_rate: f64) -> Result<f64> {
    let clv = revenue * frequency * retention_rate / (1.0 - retention_rate);

    if !clv.is_finite() {
        return Err(Error::internal(format!(
            "CLV projection diverged for retention_rate {}",
            retention_rate
        )));
    }

    Ok((clv * 100.0).round() / 100.0)
}
