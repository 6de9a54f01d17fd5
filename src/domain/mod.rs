use serde::{Deserialize, Serialize};

pub const LOWEST_SALARY: i64 = 100;
pub const HIGHEST_SALARY: i64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    UnavailableId,
    SalaryTooHigh { salary: i64 },
    SalaryTooLow { salary: i64 },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnavailableId => write!(f, "unavailable value of ID"),
            Self::SalaryTooHigh { salary } => {
                write!(f, "salary can't be higher than {HIGHEST_SALARY}, set {salary}")
            }
            Self::SalaryTooLow { salary } => {
                write!(f, "salary can't be lower than {LOWEST_SALARY}, set {salary}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Employee record. Zero-value fields stay off the wire on output and
/// default in on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub age: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub salary: i64,
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

impl Employee {
    /// Field-range check. Rule order is part of the contract: the first
    /// failing rule determines the error.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id <= 0 || self.id >= i64::MAX {
            return Err(DomainError::UnavailableId);
        }
        if self.salary > HIGHEST_SALARY {
            return Err(DomainError::SalaryTooHigh {
                salary: self.salary,
            });
        }
        if self.salary < LOWEST_SALARY {
            return Err(DomainError::SalaryTooLow {
                salary: self.salary,
            });
        }
        Ok(())
    }
}
