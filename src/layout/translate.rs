use std::collections::HashMap;

use super::types::{LayoutResult, Point, Position};

/// Converts an engine center into the top-left position drawn on the canvas.
pub fn translate_center(center: Point, width: f32, height: f32, margin: f32) -> Position {
    Position {
        x: margin + center.x - width / 2.0,
        y: margin + center.y - height / 2.0,
    }
}

/// Translates every node in `sizes` that has a center in `result`.
pub fn translate<'a, I>(result: &LayoutResult, sizes: I, margin: f32) -> HashMap<String, Position>
where
    I: IntoIterator<Item = (&'a str, f32, f32)>,
{
    sizes
        .into_iter()
        .filter_map(|(id, width, height)| {
            let center = result.center(id)?;
            Some((id.to_string(), translate_center(center, width, height, margin)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_top_left_with_margin() {
        let pos = translate_center(Point::new(100.0, 100.0), 50.0, 30.0, 50.0);
        assert_eq!(pos, Position::new(125.0, 135.0));
    }

    #[test]
    fn translates_only_known_nodes() {
        let mut result = LayoutResult::default();
        result.centers.insert("a".to_string(), Point::new(10.0, 20.0));
        let positions = translate(&result, [("a", 20.0, 40.0), ("b", 1.0, 1.0)], 0.0);
        assert_eq!(positions.len(), 1);
        assert_eq!(positions["a"], Position::new(0.0, 0.0));
    }
}
