//! Payroll calculation over heterogeneous employee kinds

use bigdecimal::BigDecimal;
use std::fmt;

/// Anything that can be paid a monthly amount
pub trait Payable: fmt::Display + Send + Sync {
    /// Monthly pay for this employee
    fn calculate_pay(&self) -> BigDecimal;
}

/// Employee paid a fixed annual salary, disbursed monthly
#[derive(Debug, Clone, PartialEq)]
pub struct SalariedEmployee {
    pub name: String,
    pub annual_salary: BigDecimal,
}

impl Payable for SalariedEmployee {
    fn calculate_pay(&self) -> BigDecimal {
        &self.annual_salary / BigDecimal::from(12)
    }
}

impl fmt::Display for SalariedEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salaried: {} (Annual: {})", self.name, self.annual_salary)
    }
}

/// Employee paid by the hour
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEmployee {
    pub name: String,
    pub hourly_rate: BigDecimal,
    pub hours_worked: BigDecimal,
}

impl Payable for HourlyEmployee {
    fn calculate_pay(&self) -> BigDecimal {
        &self.hourly_rate * &self.hours_worked
    }
}

impl fmt::Display for HourlyEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hourly: {} (Rate: {}/hr, Hours: {})",
            self.name, self.hourly_rate, self.hours_worked
        )
    }
}

/// Employee paid a base salary plus commission on sales
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionEmployee {
    pub name: String,
    pub base_salary: BigDecimal,
    /// Fractional rate, e.g. 0.10 = 10%
    pub commission_rate: BigDecimal,
    pub sales_amount: BigDecimal,
}

impl Payable for CommissionEmployee {
    fn calculate_pay(&self) -> BigDecimal {
        &self.base_salary + &self.commission_rate * &self.sales_amount
    }
}

impl fmt::Display for CommissionEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Commission: {} (Base: {}, Rate: {}, Sales: {})",
            self.name, self.base_salary, self.commission_rate, self.sales_amount
        )
    }
}

/// One processed payroll line
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollLine {
    /// Human-readable employee summary
    pub summary: String,
    /// Monthly pay
    pub pay: BigDecimal,
}

/// Result of one payroll run
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollRun {
    pub lines: Vec<PayrollLine>,
    pub total: BigDecimal,
}

/// Calculate pay for every employee and the payroll total
pub fn process_payroll(employees: &[Box<dyn Payable>]) -> PayrollRun {
    let mut lines = Vec::with_capacity(employees.len());
    let mut total = BigDecimal::from(0);

    for employee in employees {
        let pay = employee.calculate_pay();
        total += &pay;
        lines.push(PayrollLine {
            summary: employee.to_string(),
            pay,
        });
    }

    PayrollRun { lines, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_salaried_monthly_pay() {
        let employee = SalariedEmployee {
            name: "Alice Wonderland".to_string(),
            annual_salary: dec("72000.00"),
        };
        assert_eq!(employee.calculate_pay(), dec("6000.00"));
    }

    #[test]
    fn test_hourly_pay() {
        let employee = HourlyEmployee {
            name: "Bob The Builder".to_string(),
            hourly_rate: dec("25.00"),
            hours_worked: dec("160.0"),
        };
        assert_eq!(employee.calculate_pay(), dec("4000.00"));
    }

    #[test]
    fn test_commission_pay() {
        let employee = CommissionEmployee {
            name: "Charlie Chaplin".to_string(),
            base_salary: dec("2000.00"),
            commission_rate: dec("0.10"),
            sales_amount: dec("15000.00"),
        };
        assert_eq!(employee.calculate_pay(), dec("3500.00"));
    }

    #[test]
    fn test_process_payroll_totals() {
        let employees: Vec<Box<dyn Payable>> = vec![
            Box::new(SalariedEmployee {
                name: "Alice Wonderland".to_string(),
                annual_salary: dec("72000.00"),
            }),
            Box::new(HourlyEmployee {
                name: "Bob The Builder".to_string(),
                hourly_rate: dec("25.00"),
                hours_worked: dec("160.0"),
            }),
            Box::new(CommissionEmployee {
                name: "Charlie Chaplin".to_string(),
                base_salary: dec("2000.00"),
                commission_rate: dec("0.10"),
                sales_amount: dec("15000.00"),
            }),
        ];

        let run = process_payroll(&employees);
        assert_eq!(run.lines.len(), 3);
        assert_eq!(run.total, dec("13500.00"));
        assert!(run.lines[0].summary.starts_with("Salaried: Alice"));
    }

    #[test]
    fn test_empty_payroll() {
        let run = process_payroll(&[]);
        assert!(run.lines.is_empty());
        assert_eq!(run.total, BigDecimal::from(0));
    }
}
