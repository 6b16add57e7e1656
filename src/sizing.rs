use crate::config::NodeSizeConfig;
use crate::ir::{DisplayMode, TableDefinition};

const MIN_EXTENT: f32 = 1.0;

/// Node width; the same for every display mode.
pub fn node_width(_mode: DisplayMode, sizing: &NodeSizeConfig) -> f32 {
    sizing.width.max(MIN_EXTENT)
}

/// Node height for `table` in `mode`. Fields mode grows one row per field so
/// no row is clipped.
pub fn node_height(mode: DisplayMode, table: &TableDefinition, sizing: &NodeSizeConfig) -> f32 {
    match mode {
        DisplayMode::Fields => {
            sizing.fields_base_height.max(MIN_EXTENT)
                + table.fields.len() as f32 * sizing.field_row_height.max(MIN_EXTENT)
        }
        DisplayMode::Summary => sizing.summary_height.max(MIN_EXTENT),
        DisplayMode::Simple => sizing.simple_height.max(MIN_EXTENT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_fields(count: usize) -> TableDefinition {
        (0..count).fold(TableDefinition::new("t"), |table, idx| {
            table.with_field(&format!("f{idx}"), "string")
        })
    }

    #[test]
    fn fields_mode_grows_per_field() {
        let sizing = NodeSizeConfig::default();
        let mut prev = node_height(DisplayMode::Fields, &table_with_fields(0), &sizing);
        assert_eq!(prev, sizing.fields_base_height);
        for count in 1..12 {
            let height = node_height(DisplayMode::Fields, &table_with_fields(count), &sizing);
            assert!(height > prev);
            prev = height;
        }
        assert_eq!(
            node_height(DisplayMode::Fields, &table_with_fields(3), &sizing),
            60.0 + 3.0 * 28.0
        );
    }

    #[test]
    fn summary_and_simple_ignore_field_count() {
        let sizing = NodeSizeConfig::default();
        for mode in [DisplayMode::Summary, DisplayMode::Simple] {
            let small = node_height(mode, &table_with_fields(0), &sizing);
            let large = node_height(mode, &table_with_fields(40), &sizing);
            assert_eq!(small, large);
            assert!(small > 0.0);
        }
        assert!(
            node_height(DisplayMode::Simple, &table_with_fields(0), &sizing)
                < node_height(DisplayMode::Summary, &table_with_fields(0), &sizing)
        );
    }

    #[test]
    fn width_is_constant_and_positive() {
        let mut sizing = NodeSizeConfig::default();
        assert_eq!(node_width(DisplayMode::Fields, &sizing), 250.0);
        assert_eq!(node_width(DisplayMode::Simple, &sizing), 250.0);
        sizing.width = -5.0;
        sizing.simple_height = 0.0;
        assert_eq!(node_width(DisplayMode::Summary, &sizing), 1.0);
        assert_eq!(node_height(DisplayMode::Simple, &TableDefinition::new("t"), &sizing), 1.0);
    }
}
