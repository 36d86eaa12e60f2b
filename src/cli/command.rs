/// One parsed line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add { name: Option<String> },
    Select { query: String },
    Update,
    Delete,
    Find { query: String },
    Show,
    Deselect,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Command {
        let (command, args) = split_command(input);
        let args = args.to_string();

        match command.to_lowercase().as_str() {
            "" => Command::Empty,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "list" | "ls" => Command::List,
            "add" => Command::Add {
                name: Some(args).filter(|a| !a.is_empty()),
            },
            "select" | "sel" => Command::Select { query: args },
            "update" | "edit" => Command::Update,
            "delete" | "rm" => Command::Delete,
            "find" | "search" => Command::Find { query: args },
            "show" => Command::Show,
            "deselect" | "clear" => Command::Deselect,
            _ => Command::Unknown(command.to_string()),
        }
    }
}

/// Split input into command and args.
fn split_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}
