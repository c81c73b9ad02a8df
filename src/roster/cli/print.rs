use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::model::Employee;
use std::io::{self, Write};

const MENU_TITLE: &str = "Employee Data Management System";
const MENU_ITEMS: [&str; 6] = [
    "1. Add Employee",
    "2. Update Employee",
    "3. Delete Employee",
    "4. Search Employee",
    "5. List All Employees",
    "6. Exit",
];

pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", MENU_TITLE.bold())?;
    for item in MENU_ITEMS {
        writeln!(out, "{}", item)?;
    }
    Ok(())
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_employees<W: Write>(out: &mut W, employees: &[Employee]) -> io::Result<()> {
    for employee in employees {
        writeln!(out, "{}", employee)?;
    }
    Ok(())
}
