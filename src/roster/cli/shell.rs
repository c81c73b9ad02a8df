use super::print::{print_employees, print_menu, print_messages};
use roster::api::{CmdMessage, RosterApi};
use roster::error::Result;
use roster::model::{Employee, EmployeeUpdate};
use roster::store::DataStore;
use std::io::{BufRead, Write};
use std::str::FromStr;

const INVALID_CHOICE: &str = "Invalid choice! Please try again.";
const GOODBYE: &str = "Exiting the system. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Delete,
    Search,
    List,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::Update),
            "3" => Ok(MenuChoice::Delete),
            "4" => Ok(MenuChoice::Search),
            "5" => Ok(MenuChoice::List),
            "6" => Ok(MenuChoice::Exit),
            other => Err(format!("Unknown menu choice: {}", other)),
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// The interactive menu loop. Reads one line per prompt from `input` and writes
/// everything to `output`. End of input at any prompt exits like choice 6.
pub struct Shell<S: DataStore, R: BufRead, W: Write> {
    api: RosterApi<S>,
    input: R,
    output: W,
}

impl<S: DataStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: RosterApi<S>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    #[cfg(test)]
    pub fn api(&self) -> &RosterApi<S> {
        &self.api
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            print_menu(&mut self.output)?;

            let flow = match self.prompt("Enter your choice: ")? {
                None => Flow::Exit,
                Some(line) => match line.parse::<MenuChoice>() {
                    Ok(choice) => self.dispatch(choice)?,
                    Err(_) => {
                        let invalid = CmdMessage::error(INVALID_CHOICE);
                        print_messages(&mut self.output, &[invalid])?;
                        Flow::Continue
                    }
                },
            };

            if let Flow::Exit = flow {
                writeln!(self.output, "{}", GOODBYE)?;
                self.output.flush()?;
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.handle_add(),
            MenuChoice::Update => self.handle_update(),
            MenuChoice::Delete => self.handle_delete(),
            MenuChoice::Search => self.handle_search(),
            MenuChoice::List => self.handle_list(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn handle_add(&mut self) -> Result<Flow> {
        let Some([id, name, position, salary, email]) = self.prompt_fields([
            "Enter Employee ID: ",
            "Enter Name: ",
            "Enter Position: ",
            "Enter Salary: ",
            "Enter Email: ",
        ])?
        else {
            return Ok(Flow::Exit);
        };

        let result = self
            .api
            .add_employee(Employee::new(id, name, position, salary, email))?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn handle_update(&mut self) -> Result<Flow> {
        let Some([id, name, position, salary, email]) = self.prompt_fields([
            "Enter Employee ID to update: ",
            "Enter New Name (leave blank to skip): ",
            "Enter New Position (leave blank to skip): ",
            "Enter New Salary (leave blank to skip): ",
            "Enter New Email (leave blank to skip): ",
        ])?
        else {
            return Ok(Flow::Exit);
        };

        let changes = EmployeeUpdate {
            name: non_blank(name),
            position: non_blank(position),
            salary: non_blank(salary),
            email: non_blank(email),
        };
        let result = self.api.update_employee(&id, &changes)?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn handle_delete(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt("Enter Employee ID to delete: ")? else {
            return Ok(Flow::Exit);
        };
        let result = self.api.delete_employee(&id)?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn handle_search(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt("Enter Employee ID to search: ")? else {
            return Ok(Flow::Exit);
        };
        let result = self.api.search_employee(&id)?;
        if !result.listed_employees.is_empty() {
            writeln!(self.output, "Employee found:")?;
            print_employees(&mut self.output, &result.listed_employees)?;
        }
        print_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn handle_list(&mut self) -> Result<Flow> {
        let result = self.api.list_employees()?;
        if !result.listed_employees.is_empty() {
            writeln!(self.output)?;
            writeln!(self.output, "List of Employees:")?;
            print_employees(&mut self.output, &result.listed_employees)?;
        }
        print_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    /// Prompt for each label in turn. `None` if input runs out before the last one.
    fn prompt_fields<const N: usize>(
        &mut self,
        labels: [&str; N],
    ) -> Result<Option<[String; N]>> {
        let mut values: [String; N] = std::array::from_fn(|_| String::new());
        for (slot, label) in values.iter_mut().zip(labels) {
            match self.prompt(label)? {
                Some(value) => *slot = value,
                None => return Ok(None),
            }
        }
        Ok(Some(values))
    }

    /// Show `label` and read one line. `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line.as_str());
        Ok(Some(trimmed.to_string()))
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
