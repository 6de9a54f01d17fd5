use crate::{
    domain::{DomainError, Employee},
    store::{EmployeeStore, StoreError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    Validation {
        operation: &'static str,
        id: i64,
        source: DomainError,
    },
    Fetch {
        id: i64,
        source: StoreError,
    },
    Update {
        id: i64,
        source: StoreError,
    },
    Store(StoreError),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation {
                operation,
                id,
                source,
            } => {
                write!(
                    f,
                    "validation failure on {operation} employee with id {id}: {source}"
                )
            }
            Self::Fetch { id, source } => {
                write!(f, "couldn't get employee with id {id}: {source}")
            }
            Self::Update { id, source } => {
                write!(f, "couldn't update employee with id {id}: {source}")
            }
            Self::Store(source) => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation { source, .. } => Some(source),
            Self::Fetch { source, .. } | Self::Update { source, .. } | Self::Store(source) => {
                Some(source)
            }
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Business layer over an injected storage capability. Validates before
/// writes and wraps lower-layer failures with operation context; holds no
/// state of its own.
pub struct Service<S> {
    store: S,
}

impl<S: EmployeeStore> Service<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_employee(&mut self, employee: Employee) -> Result<Employee, ServiceError> {
        if let Err(source) = employee.validate() {
            return Err(ServiceError::Validation {
                operation: "create",
                id: employee.id,
                source,
            });
        }
        Ok(self.store.create(employee)?)
    }

    pub fn get_employee(&self, id: i64) -> Result<Employee, ServiceError> {
        Ok(self.store.by_id(id)?)
    }

    /// Read-modify-validate-write. The caller serializes access for the
    /// whole sequence; a validation failure leaves the store untouched.
    /// `amount` is signed, so cuts go through the same bounds check.
    pub fn raise_salary(&mut self, id: i64, amount: i64) -> Result<(), ServiceError> {
        let mut employee = self
            .store
            .by_id(id)
            .map_err(|source| ServiceError::Fetch { id, source })?;
        employee.salary = employee.salary.saturating_add(amount);
        if let Err(source) = employee.validate() {
            return Err(ServiceError::Validation {
                operation: "update",
                id,
                source,
            });
        }
        self.store
            .update(employee)
            .map_err(|source| ServiceError::Update { id, source })
    }

    pub fn delete_employee(&mut self, id: i64) -> Result<(), ServiceError> {
        Ok(self.store.delete(id)?)
    }
}
