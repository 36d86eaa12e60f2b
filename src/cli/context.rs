use std::io::{self, Write};

use crate::db::ContactStore;
use crate::error::ContactError;
use crate::model::Contact;
use crate::queries::contact_queries;

/// Application state for one REPL session: the store plus the user's current selection.
pub struct CLIContext {
    pub store: ContactStore,
    pub selected: Option<Contact>,
}

impl CLIContext {
    pub fn new(store: ContactStore) -> Self {
        Self { store, selected: None }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Find a contact by name query. Prints a message if not found or ambiguous.
    pub fn find_contact(&self, args: &str) -> Option<Contact> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(exact) = contact_queries::find_by_name(&self.store, query) {
            return Some(exact.clone());
        }

        let lower = query.to_lowercase();
        let matches: Vec<&Contact> = contact_queries::list_sorted(&self.store)
            .filter(|c| c.name.to_lowercase().contains(&lower))
            .collect();

        match matches.len() {
            0 => {
                println!("No contact found matching '{}'", query);
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                println!("Multiple matches found:");
                for c in &matches {
                    println!("  {}", c.name);
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    /// Render the contact table in name order.
    pub fn print_table(&self) {
        if self.store.is_empty() {
            println!("No contacts yet. Use 'add' to add someone.");
            return;
        }

        let rows: Vec<&Contact> = contact_queries::list_sorted(&self.store).collect();
        let name_w = column_width("Name", rows.iter().map(|c| c.name.as_str()));
        let phone_w = column_width("Phone", rows.iter().map(|c| c.phone.as_str()));

        println!("{:<name_w$}  {:<phone_w$}  Email", "Name", "Phone");
        println!("{:-<name_w$}  {:-<phone_w$}  {:-<5}", "", "", "");
        for c in rows {
            println!("{:<name_w$}  {:<phone_w$}  {}", c.name, c.phone, c.email);
        }
    }

    pub fn print_contact(contact: &Contact) {
        println!("Name:  {}", contact.name);
        println!("Phone: {}", display_or_none(&contact.phone));
        println!("Email: {}", display_or_none(&contact.email));
    }

    /// Print an error.
    pub fn print_error(&self, e: &ContactError) {
        println!("Error: {}", e);
        if matches!(e, ContactError::Save { .. }) {
            println!("The change is kept in memory for this session.");
        }
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

fn display_or_none(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::contact_ops;

    fn setup(names: &[&str]) -> (tempfile::TempDir, CLIContext) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ContactStore::new(dir.path().join("contacts.json"));
        for name in names {
            contact_ops::add_contact(&mut store, name, "", "").unwrap();
        }
        (dir, CLIContext::new(store))
    }

    #[test]
    fn find_contact_prefers_exact_match() {
        let (_dir, ctx) = setup(&["Alice", "Al"]);
        assert_eq!(ctx.find_contact("al").unwrap().name, "Al");
    }

    #[test]
    fn find_contact_accepts_unique_partial_match() {
        let (_dir, ctx) = setup(&["Alice", "Bob"]);
        assert_eq!(ctx.find_contact("lic").unwrap().name, "Alice");
    }

    #[test]
    fn find_contact_rejects_ambiguous_match() {
        let (_dir, ctx) = setup(&["Alice", "Alicia"]);
        assert!(ctx.find_contact("Ali").is_none());
    }

    #[test]
    fn find_contact_without_match() {
        let (_dir, ctx) = setup(&["Alice"]);
        assert!(ctx.find_contact("Zed").is_none());
        assert!(ctx.find_contact("   ").is_none());
    }
}
