use crate::commands::{CmdMessage, CmdResult, NOT_FOUND};
use crate::error::Result;
use crate::model::EmployeeUpdate;
use crate::roster::Roster;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    roster: &mut Roster<S>,
    id: &str,
    changes: &EmployeeUpdate,
) -> Result<CmdResult> {
    if !roster.update(id, changes)? {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(NOT_FOUND)));
    }

    let affected = roster.find(id).cloned().into_iter().collect();
    Ok(CmdResult::default()
        .with_affected_employees(affected)
        .with_message(CmdMessage::success("Employee updated successfully!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Employee;
    use crate::store::memory::InMemoryStore;

    fn roster_with_ana() -> Roster<InMemoryStore> {
        Roster::open(InMemoryStore::with_employees(vec![Employee::new(
            "1", "Ana", "Eng", "50000", "a@x.com",
        )]))
        .unwrap()
    }

    #[test]
    fn updates_only_given_fields() {
        let mut roster = roster_with_ana();
        let result = run(&mut roster, "1", &EmployeeUpdate::new().salary("55000")).unwrap();

        assert!(!result.is_not_found());
        let emp = &result.affected_employees[0];
        assert_eq!(emp.salary(), "55000");
        assert_eq!(emp.name(), "Ana");
        assert_eq!(roster.store().persisted()[0].salary(), "55000");
    }

    #[test]
    fn reports_missing_id() {
        let mut roster = roster_with_ana();
        let result = run(&mut roster, "2", &EmployeeUpdate::new().name("Bo")).unwrap();

        assert!(result.is_not_found());
        assert!(result.affected_employees.is_empty());
        assert_eq!(roster.store().saves(), 0);
    }
}
