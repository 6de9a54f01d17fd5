use std::collections::BTreeMap;

use crate::domain::Employee;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    AlreadyExists { id: i64 },
    NotFound { id: i64 },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExists { id } => write!(f, "employee with id {id} already exists"),
            Self::NotFound { id } => write!(f, "employee with id {id} doesn't exist"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Storage capability the service layer depends on. Any implementor is
/// substitutable, test doubles included.
pub trait EmployeeStore {
    fn create(&mut self, employee: Employee) -> Result<Employee, StoreError>;
    fn by_id(&self, id: i64) -> Result<Employee, StoreError>;
    fn update(&mut self, employee: Employee) -> Result<(), StoreError>;
    fn delete(&mut self, id: i64) -> Result<(), StoreError>;
}

/// In-memory employee collection keyed by id. Callers get clones; the map
/// keeps the canonical copies. Synchronization lives one layer up.
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: BTreeMap<i64, Employee>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            employees: BTreeMap::new(),
        }
    }
}

impl EmployeeStore for MemoryStore {
    fn create(&mut self, employee: Employee) -> Result<Employee, StoreError> {
        if self.employees.contains_key(&employee.id) {
            return Err(StoreError::AlreadyExists { id: employee.id });
        }
        self.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    fn by_id(&self, id: i64) -> Result<Employee, StoreError> {
        self.employees
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    // Overwrites the full record. No upsert: an absent key is an error.
    fn update(&mut self, employee: Employee) -> Result<(), StoreError> {
        match self.employees.get_mut(&employee.id) {
            Some(slot) => {
                *slot = employee;
                Ok(())
            }
            None => Err(StoreError::NotFound { id: employee.id }),
        }
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        match self.employees.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound { id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn employee(id: i64, salary: i64) -> Employee {
        Employee {
            id,
            first_name: format!("Name{id}"),
            last_name: format!("LastName{id}"),
            age: 33,
            salary,
        }
    }

    #[test]
    fn create_then_by_id_returns_identical_record() {
        let mut store = MemoryStore::new();
        let emp = employee(1, 100);

        let created = store.create(emp.clone()).unwrap();
        assert_eq!(created, emp);
        assert_eq!(store.by_id(1), Ok(emp));
    }

    #[test]
    fn create_rejects_present_id() {
        let mut store = MemoryStore::new();
        store.create(employee(1, 100)).unwrap();

        let err = store.create(employee(1, 200)).unwrap_err();
        assert_eq!(err, StoreError::AlreadyExists { id: 1 });
        assert_eq!(err.to_string(), "employee with id 1 already exists");
        // the original record is untouched
        assert_eq!(store.by_id(1).unwrap().salary, 100);
    }

    #[test]
    fn by_id_reports_absent_key() {
        let store = MemoryStore::new();
        let err = store.by_id(7).unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: 7 });
        assert_eq!(err.to_string(), "employee with id 7 doesn't exist");
    }

    #[test]
    fn update_overwrites_present_key_only() {
        let mut store = MemoryStore::new();
        store.create(employee(1, 100)).unwrap();

        let mut changed = employee(1, 100);
        changed.salary = 300;
        store.update(changed.clone()).unwrap();
        assert_eq!(store.by_id(1), Ok(changed));

        assert_eq!(
            store.update(employee(2, 100)),
            Err(StoreError::NotFound { id: 2 })
        );
    }

    #[test]
    fn delete_removes_key_and_fails_on_absent() {
        let mut store = MemoryStore::new();
        store.create(employee(1, 100)).unwrap();

        store.delete(1).unwrap();
        assert_eq!(store.by_id(1), Err(StoreError::NotFound { id: 1 }));
        assert_eq!(store.delete(1), Err(StoreError::NotFound { id: 1 }));
    }
}
