use crate::domain::employee::Salary;

/// Social security contribution rate (CAS), applied to the gross salary.
pub const SOCIAL_CONTRIBUTION_RATE: f64 = 0.10;

/// Health insurance contribution rate (CASS), applied to the gross salary.
pub const HEALTH_CONTRIBUTION_RATE: f64 = 0.25;

/// Income tax rate, applied to the taxable amount.
pub const INCOME_TAX_RATE: f64 = 0.10;

/// Breakdown of a gross monthly salary into contributions, tax and net pay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payslip {
    /// Gross salary.
    pub gross: f64,
    /// Social security contribution.
    pub social_contribution: f64,
    /// Health insurance contribution.
    pub health_contribution: f64,
    /// Gross minus both contributions.
    pub taxable: f64,
    /// Tax on the taxable amount.
    pub income_tax: f64,
    /// Take-home pay.
    pub net: f64,
}

impl Payslip {
    /// Computes the payslip for a gross salary.
    #[must_use]
    pub fn from_gross(gross: Salary) -> Self {
        let gross = gross.get();
        let social_contribution = SOCIAL_CONTRIBUTION_RATE * gross;
        let health_contribution = HEALTH_CONTRIBUTION_RATE * gross;
        let taxable = gross - social_contribution - health_contribution;
        let income_tax = INCOME_TAX_RATE * taxable;
        let net = gross - social_contribution - health_contribution - income_tax;

        Self {
            gross,
            social_contribution,
            health_contribution,
            taxable,
            income_tax,
            net,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn breakdown_of_five_thousand() {
        let payslip = Payslip::from_gross("5000".parse().unwrap());

        assert_close(payslip.gross, 5000.0);
        assert_close(payslip.social_contribution, 500.0);
        assert_close(payslip.health_contribution, 1250.0);
        assert_close(payslip.taxable, 3250.0);
        assert_close(payslip.income_tax, 325.0);
        assert_close(payslip.net, 2925.0);
    }

    #[test_case(4050.0; "minimum wage")]
    #[test_case(7321.45; "fractional")]
    #[test_case(25_000.0; "large")]
    fn components_add_up_to_gross(gross: f64) {
        let payslip = Payslip::from_gross(Salary::try_from(gross).unwrap());

        assert_close(
            payslip.social_contribution
                + payslip.health_contribution
                + payslip.income_tax
                + payslip.net,
            gross,
        );
        assert_close(payslip.net, gross * 0.585);
    }
}
