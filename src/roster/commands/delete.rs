use crate::commands::{CmdMessage, CmdResult, NOT_FOUND};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::DataStore;

pub fn run<S: DataStore>(roster: &mut Roster<S>, id: &str) -> Result<CmdResult> {
    let removed = roster.find(id).cloned();
    if !roster.delete(id)? {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(NOT_FOUND)));
    }

    Ok(CmdResult::default()
        .with_affected_employees(removed.into_iter().collect())
        .with_message(CmdMessage::success("Employee deleted successfully!")))
}
