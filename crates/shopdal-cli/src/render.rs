use serde::Serialize;
use shopdal::schema::{
    node::{EntitySchema, Field, Flag, Schema},
    types::DefinitionKind,
};
use std::fmt::Write;

///
/// EntitySummary
///

#[derive(Debug, Serialize)]
pub struct EntitySummary<'a> {
    pub name: &'a str,
    pub kind: DefinitionKind,
    pub fields: usize,
    pub associations: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<&'a str>,
}

pub fn summaries(schema: &Schema) -> Vec<EntitySummary<'_>> {
    schema
        .entities()
        .map(|(name, entity)| EntitySummary {
            name,
            kind: entity.kind(),
            fields: entity.fields().len(),
            associations: entity.fields().associations().count(),
            translation: entity.translation_definition(),
        })
        .collect()
}

pub fn entity_table(schema: &Schema) -> String {
    let rows: Vec<[String; 4]> = summaries(schema)
        .into_iter()
        .map(|s| {
            [
                s.name.to_string(),
                s.kind.to_string(),
                s.fields.to_string(),
                s.translation.unwrap_or("-").to_string(),
            ]
        })
        .collect();

    table(["ENTITY", "KIND", "FIELDS", "TRANSLATION"], &rows)
}

pub fn field_table(entity: &EntitySchema) -> String {
    let rows: Vec<[String; 4]> = entity
        .fields()
        .iter()
        .map(|field| {
            [
                field.property_name().to_string(),
                field.storage_name().unwrap_or("-").to_string(),
                field.kind().label(),
                flags(field),
            ]
        })
        .collect();

    let mut out = format!("{} ({})\n", entity.name(), entity.kind());
    out.push_str(&table(["PROPERTY", "STORAGE", "KIND", "FLAGS"], &rows));

    out
}

fn flags(field: &Field) -> String {
    let flags: Vec<String> = field
        .flags()
        .iter()
        .map(|flag| match flag {
            Flag::SearchRanking(weight) => format!("SearchRanking({weight})"),
            other => other.kind().to_string(),
        })
        .collect();

    if flags.is_empty() {
        "-".to_string()
    } else {
        flags.join(", ")
    }
}

// table
// left-aligned columns, two spaces apart
fn table<const N: usize>(header: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = header.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let mut line = |cells: &[&str]| {
        let mut text = String::new();
        for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
            if i > 0 {
                text.push_str("  ");
            }
            let _ = write!(text, "{cell:<width$}");
        }
        out.push_str(text.trim_end());
        out.push('\n');
    };

    line(&header);
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        line(&cells);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aligns_columns() {
        let rows = vec![
            ["category".to_string(), "entity".to_string()],
            ["seo_url".to_string(), "entity".to_string()],
        ];

        assert_eq!(
            table(["NAME", "KIND"], &rows),
            "NAME      KIND\ncategory  entity\nseo_url   entity\n"
        );
    }

    #[test]
    fn category_summary() {
        let schema = shopdal::catalog::schema().unwrap();
        let category = summaries(&schema)
            .into_iter()
            .find(|s| s.name == "category")
            .unwrap();

        assert_eq!(category.fields, 40);
        assert_eq!(category.associations, 9);
        assert_eq!(category.translation, Some("category_translation"));
    }

    #[test]
    fn field_table_lists_flags() {
        let schema = shopdal::catalog::schema().unwrap();
        let text = field_table(schema.get("listing_sorting").unwrap());

        assert!(text.starts_with("listing_sorting (Entity)\n"));
        assert!(text.contains("PrimaryKey, Required"));
        assert!(text.contains("Translated(String)"));
    }
}
