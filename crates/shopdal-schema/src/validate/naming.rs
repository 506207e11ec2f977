use crate::{MAX_ENTITY_NAME_LEN, MAX_FIELD_NAME_LEN};
use convert_case::{Case, Casing};

/// Derive the conventional property name for a storage column.
#[must_use]
pub fn storage_to_property(storage: &str) -> String {
    storage.to_case(Case::Camel)
}

/// Ensure entity names are non-empty, ASCII snake_case, and within the maximum length.
pub(crate) fn validate_entity_name(name: &str) -> Result<(), String> {
    if name.len() > MAX_ENTITY_NAME_LEN {
        return Err(format!(
            "entity name '{name}' exceeds max length {MAX_ENTITY_NAME_LEN}"
        ));
    }

    validate_snake("entity name", name)
}

/// Ensure column names are snake_case and within the maximum length.
pub(crate) fn validate_storage_name(storage: &str) -> Result<(), String> {
    if storage.len() > MAX_FIELD_NAME_LEN {
        return Err(format!(
            "storage name '{storage}' exceeds max length {MAX_FIELD_NAME_LEN}"
        ));
    }

    validate_snake("storage name", storage)
}

/// Ensure property names are lowerCamelCase and within the maximum length.
pub(crate) fn validate_property_name(property: &str) -> Result<(), String> {
    if property.is_empty() {
        return Err("property name is empty".to_string());
    }
    if property.len() > MAX_FIELD_NAME_LEN {
        return Err(format!(
            "property name '{property}' exceeds max length {MAX_FIELD_NAME_LEN}"
        ));
    }
    if !property.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err(format!(
            "property name '{property}' must start with a lowercase letter"
        ));
    }
    if !property.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!("property name '{property}' must be lowerCamelCase"));
    }

    Ok(())
}

fn validate_snake(what: &str, ident: &str) -> Result<(), String> {
    if ident.is_empty() {
        return Err(format!("{what} is empty"));
    }
    if !ident.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err(format!(
            "{what} '{ident}' must start with a lowercase letter"
        ));
    }

    let valid_chars = ident
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if !valid_chars || ident.ends_with('_') || ident.contains("__") {
        return Err(format!("{what} '{ident}' must be snake_case"));
    }

    Ok(())
}
