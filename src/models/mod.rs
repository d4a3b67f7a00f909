//! Data structures for the address book.

pub mod contact;

pub use contact::Contact;
