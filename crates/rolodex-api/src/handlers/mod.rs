//! HTTP request handlers.

pub mod contacts;

pub use contacts::{
    create_contact, delete_contact, get_contact, health, list_contacts, update_contact,
};
