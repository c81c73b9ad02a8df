use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Employee;
use crate::roster::Roster;
use crate::store::DataStore;

pub fn run<S: DataStore>(roster: &mut Roster<S>, employee: Employee) -> Result<CmdResult> {
    roster.add(employee.clone())?;
    Ok(CmdResult::default()
        .with_affected_employees(vec![employee])
        .with_message(CmdMessage::success("Employee added successfully!")))
}
