use crate::cli::context::CLIContext;
use crate::ops::contact_ops;
use crate::queries::contact_queries;

pub fn list(ctx: &CLIContext) {
    println!();
    ctx.print_table();
    println!();
}

pub fn add(ctx: &mut CLIContext, name_arg: Option<&str>) {
    let name = match name_arg {
        Some(n) => n.to_string(),
        None => match ctx.prompt("Name (required): ") {
            Some(s) => s,
            None => return,
        },
    };
    let Some(phone) = ctx.prompt("Phone: ") else { return };
    let Some(email) = ctx.prompt("Email: ") else { return };

    match contact_ops::add_contact(&mut ctx.store, &name, &phone, &email) {
        Ok(contact) => {
            list(ctx);
            println!("Contact {} added successfully.", contact.name);
        }
        Err(e) => {
            ctx.print_error(&e);
            if !e.is_validation() {
                list(ctx);
            }
        }
    }
}

pub fn select(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: select <name>");
        return;
    }

    if let Some(contact) = ctx.find_contact(args) {
        println!("Selected:");
        CLIContext::print_contact(&contact);
        ctx.selected = Some(contact);
    }
}

pub fn show(ctx: &CLIContext) {
    match &ctx.selected {
        Some(contact) => CLIContext::print_contact(contact),
        None => println!("No contact selected. Use 'select <name>' first."),
    }
}

pub fn deselect(ctx: &mut CLIContext) {
    ctx.selected = None;
    println!("Selection cleared.");
}

pub fn update(ctx: &mut CLIContext) {
    let selected = match contact_ops::resolve_target(&ctx.store, ctx.selected.as_ref(), "update") {
        Ok(c) => c,
        Err(e) => {
            ctx.print_error(&e);
            ctx.selected = None;
            return;
        }
    };

    println!("Updating {} (press Enter to keep the current value)", selected.name);
    let Some(name) = ctx.prompt(&format!("Name [{}]: ", selected.name)) else { return };
    let Some(phone) = ctx.prompt(&format!("Phone [{}]: ", selected.phone)) else { return };
    let Some(email) = ctx.prompt(&format!("Email [{}]: ", selected.email)) else { return };

    match contact_ops::update_contact(&mut ctx.store, Some(&selected), &name, &phone, &email) {
        Ok(_) => {
            ctx.selected = None;
            list(ctx);
            println!("Contact updated successfully.");
        }
        Err(e) => {
            ctx.print_error(&e);
            if !e.is_validation() {
                ctx.selected = None;
                list(ctx);
            }
        }
    }
}

pub fn delete(ctx: &mut CLIContext) {
    let selected = ctx.selected.take();

    match contact_ops::delete_contact(&mut ctx.store, selected.as_ref()) {
        Ok(_) => {
            list(ctx);
            println!("Contact deleted successfully.");
        }
        Err(e) => {
            ctx.print_error(&e);
            if !e.is_validation() {
                list(ctx);
            }
        }
    }
}

pub fn find(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: find <query>");
        return;
    }

    let results = contact_queries::search(&ctx.store, args);
    if results.is_empty() {
        println!("No contacts match '{}'", args);
        return;
    }

    println!("Matches ({}):", results.len());
    for c in results {
        println!("  {} | {} | {}", c.name, c.phone, c.email);
    }
}
