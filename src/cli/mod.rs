pub mod command;
pub mod context;
pub mod contact_commands;

use crate::config::Config;
use crate::db::ContactStore;
use command::Command;
use context::CLIContext;

/// Run the interactive REPL.
pub fn run(config: &Config) {
    println!("Contact Book");
    println!("Type 'help' for commands, 'exit' to quit.");

    let (store, warning) = ContactStore::load(&config.file_path);
    if let Some(w) = warning {
        println!("Warning: {}", w);
        println!("Starting with empty contact book.");
    }

    let mut ctx = CLIContext::new(store);
    contact_commands::list(&ctx);
    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        if !dispatch(ctx, Command::parse(&input)) {
            break;
        }
    }
}

/// Runs one command. Returns false when the session should end.
fn dispatch(ctx: &mut CLIContext, command: Command) -> bool {
    match command {
        Command::Empty => {}
        Command::Help => print_help(),
        Command::Quit => return false,

        Command::List => contact_commands::list(ctx),
        Command::Add { name } => contact_commands::add(ctx, name.as_deref()),
        Command::Select { query } => contact_commands::select(ctx, &query),
        Command::Update => contact_commands::update(ctx),
        Command::Delete => contact_commands::delete(ctx),
        Command::Find { query } => contact_commands::find(ctx, &query),
        Command::Show => contact_commands::show(ctx),
        Command::Deselect => contact_commands::deselect(ctx),

        Command::Unknown(cmd) => println!("Unknown command: {}. Type 'help' for commands.", cmd),
    }
    true
}

fn print_help() {
    println!(r#"
COMMANDS:

  Contacts:
    list                    List all contacts
    add [name]              Add a new contact (prompts for phone and email)
    find <query>            Search names, phones and emails

  Selection:
    select <name>           Select a contact to update or delete
    show                    Show the selected contact
    update                  Update the selected contact
    delete                  Delete the selected contact
    deselect                Clear the selection

  Other:
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Names are case-insensitive and partial matches work for 'select'
  - During 'update', press Enter to keep a field's current value"#);
}
