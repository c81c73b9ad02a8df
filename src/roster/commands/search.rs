use crate::commands::{CmdMessage, CmdResult, NOT_FOUND};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::DataStore;

/// Look up a single employee by exact id.
pub fn run<S: DataStore>(roster: &Roster<S>, id: &str) -> Result<CmdResult> {
    match roster.find(id) {
        Some(employee) => Ok(CmdResult::default().with_listed_employees(vec![employee.clone()])),
        None => Ok(CmdResult::default().with_message(CmdMessage::warning(NOT_FOUND))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Employee;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn returns_first_match() {
        let roster = Roster::open(InMemoryStore::with_employees(vec![
            Employee::new("1", "Ana", "Eng", "50000", "a@x.com"),
            Employee::new("1", "Shadow", "Eng", "1", "s@x.com"),
        ]))
        .unwrap();

        let result = run(&roster, "1").unwrap();
        assert_eq!(result.listed_employees.len(), 1);
        assert_eq!(result.listed_employees[0].name(), "Ana");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn id_match_is_exact() {
        let roster = Roster::open(InMemoryStore::with_employees(vec![Employee::new(
            "10", "Ana", "Eng", "50000", "a@x.com",
        )]))
        .unwrap();

        assert!(run(&roster, "1").unwrap().is_not_found());
        assert!(run(&roster, " 10").unwrap().is_not_found());
    }

    #[test]
    fn empty_roster_finds_nothing() {
        let roster = Roster::open(InMemoryStore::new()).unwrap();
        let result = run(&roster, "anything").unwrap();

        assert!(result.listed_employees.is_empty());
        assert!(result.is_not_found());
    }
}
