//! Contact directory with a name index
//!
//! The directory is an explicit repository object owned by the caller; there
//! is no process-wide registry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single contact entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Identifier assigned by the directory, starting at 1
    pub id: u32,
    /// Contact name, unique within a directory
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Errors that can occur in the contact directory
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Contact already exists: {0}")]
    DuplicateName(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// In-memory contact repository with O(1) lookup by name
#[derive(Debug, Clone)]
pub struct ContactDirectory {
    contacts: Vec<Contact>,
    index_by_name: HashMap<String, usize>,
    next_id: u32,
}

impl Default for ContactDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            index_by_name: HashMap::new(),
            next_id: 1,
        }
    }

    /// Add a contact, rejecting duplicate names and empty fields
    pub fn add(
        &mut self,
        name: String,
        email: String,
        phone: String,
    ) -> Result<&Contact, DirectoryError> {
        require_field(&name, "name")?;
        require_field(&email, "email")?;
        require_field(&phone, "phone")?;

        if self.index_by_name.contains_key(&name) {
            return Err(DirectoryError::DuplicateName(name));
        }

        let contact = Contact {
            id: self.next_id,
            name: name.clone(),
            email,
            phone,
        };
        self.next_id += 1;

        self.contacts.push(contact);
        self.index_by_name.insert(name, self.contacts.len() - 1);

        Ok(&self.contacts[self.contacts.len() - 1])
    }

    /// Find a contact by name
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.index_by_name
            .get(name)
            .map(|&index| &self.contacts[index])
    }

    /// All contacts in insertion order
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// Validate that a contact field carries a non-blank value
fn require_field(value: &str, field: &str) -> Result<(), DirectoryError> {
    if value.trim().is_empty() {
        return Err(DirectoryError::Validation(format!(
            "Contact {} cannot be empty",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_directory() -> ContactDirectory {
        let mut directory = ContactDirectory::new();
        directory
            .add(
                "Max".to_string(),
                "max@gmail.com".to_string(),
                "111-2222".to_string(),
            )
            .unwrap();
        directory
            .add(
                "Carol".to_string(),
                "carol@gmail.com".to_string(),
                "222-3333".to_string(),
            )
            .unwrap();
        directory
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let directory = seeded_directory();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.list()[0].id, 1);
        assert_eq!(directory.list()[1].id, 2);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut directory = seeded_directory();
        let err = directory
            .add(
                "Max".to_string(),
                "other@gmail.com".to_string(),
                "999-9999".to_string(),
            )
            .unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateName(_)));
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut directory = ContactDirectory::new();
        let err = directory
            .add(
                "  ".to_string(),
                "max@gmail.com".to_string(),
                "111-2222".to_string(),
            )
            .unwrap_err();
        assert!(matches!(err, DirectoryError::Validation(_)));
    }

    #[test]
    fn test_empty_email_and_phone_rejected() {
        let mut directory = ContactDirectory::new();

        let err = directory
            .add("Max".to_string(), String::new(), String::new())
            .unwrap_err();
        assert!(matches!(err, DirectoryError::Validation(_)));

        let err = directory
            .add(
                "Max".to_string(),
                "max@gmail.com".to_string(),
                " ".to_string(),
            )
            .unwrap_err();
        assert!(matches!(err, DirectoryError::Validation(_)));

        assert!(directory.is_empty());
    }

    #[test]
    fn test_find_by_name() {
        let directory = seeded_directory();

        let carol = directory.find("Carol").unwrap();
        assert_eq!(carol.email, "carol@gmail.com");

        assert!(directory.find("Bob").is_none());
    }
}
