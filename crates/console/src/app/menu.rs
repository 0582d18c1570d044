//! Main menu options.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Collect,
    Discard,
    Find,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::Collect,
        MenuChoice::Discard,
        MenuChoice::Find,
        MenuChoice::Quit,
    ];

    pub fn code(self) -> i32 {
        match self {
            MenuChoice::Collect => 1,
            MenuChoice::Discard => 2,
            MenuChoice::Find => 3,
            MenuChoice::Quit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Collect => "Collect new item",
            MenuChoice::Discard => "Discard item",
            MenuChoice::Find => "Find item by name",
            MenuChoice::Quit => "Quit",
        }
    }

    /// `None` for anything that is not one of the listed option numbers.
    pub fn parse(input: &str) -> Option<Self> {
        let code = input.trim().parse::<i32>().ok()?;
        Self::ALL.into_iter().find(|choice| choice.code() == code)
    }
}
