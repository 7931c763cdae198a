pub mod derive_section;
