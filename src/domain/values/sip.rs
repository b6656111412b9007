use crate::domain::values::valuation::round2;
use serde::Serialize;

/// Projected outcome of a monthly savings plan.
#[derive(Debug, Clone, Serialize)]
pub struct SipProjection {
    pub monthly_amount: f64,
    pub annual_return_pct: f64,
    pub years: u32,
    pub months: u32,
    pub invested: f64,
    pub future_value: f64,
    pub gain: f64,
}

/// Future value of investing `monthly_amount` at the start of each month
/// for `years` years at `annual_return_pct` percent per year:
/// `m * ((1+r)^n - 1) / r * (1+r)` with `r` the monthly rate.
pub fn project(
    monthly_amount: f64,
    annual_return_pct: f64,
    years: u32,
) -> Result<SipProjection, String> {
    if monthly_amount <= 0.0 {
        return Err(format!(
            "Monthly amount must be positive, got {monthly_amount}"
        ));
    }
    if years == 0 {
        return Err("Plan must run for at least one year".to_string());
    }
    if annual_return_pct < 0.0 {
        return Err(format!(
            "Annual return must be non-negative, got {annual_return_pct}"
        ));
    }

    let months = years * 12;
    let n = months as f64;
    let r = annual_return_pct / 12.0 / 100.0;

    let future_value = if r == 0.0 {
        monthly_amount * n
    } else {
        monthly_amount * (((1.0 + r).powf(n) - 1.0) / r) * (1.0 + r)
    };

    let invested = monthly_amount * n;

    Ok(SipProjection {
        monthly_amount,
        annual_return_pct,
        years,
        months,
        invested: round2(invested),
        future_value: round2(future_value),
        gain: round2(future_value - invested),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_accumulates_contributions() {
        let p = project(500.0, 0.0, 2).unwrap();
        assert_eq!(p.months, 24);
        assert_eq!(p.invested, 12000.0);
        assert_eq!(p.future_value, 12000.0);
        assert_eq!(p.gain, 0.0);
    }

    #[test]
    fn test_one_year_at_twelve_percent() {
        // r = 0.01, n = 12: 1000 * ((1.01^12 - 1) / 0.01) * 1.01 = 12809.33
        let p = project(1000.0, 12.0, 1).unwrap();
        assert_eq!(p.invested, 12000.0);
        assert_eq!(p.future_value, 12809.33);
        assert_eq!(p.gain, 809.33);
    }

    #[test]
    fn test_longer_horizon_compounds() {
        let one = project(1000.0, 12.0, 1).unwrap();
        let ten = project(1000.0, 12.0, 10).unwrap();
        assert!(ten.future_value > one.future_value * 10.0);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert!(project(0.0, 12.0, 1).is_err());
        assert!(project(-100.0, 12.0, 1).is_err());
        assert!(project(1000.0, 12.0, 0).is_err());
        assert!(project(1000.0, -1.0, 1).is_err());
    }
}
