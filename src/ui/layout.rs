use ratatui::layout::Rect;

/// Splits the frame into header, input field, list body, and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(1);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let input_height = 3.min(
        area.height
            .saturating_sub(header_height + footer_height),
    );

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let input = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: input_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + input_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + input_height + footer_height),
    };
    (header, input, body, footer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_full_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let (header, input, body, footer) = layout_regions(area);
        assert_eq!(header.height + input.height + body.height + footer.height, 24);
        assert_eq!(body.y, header.height + input.height);
        assert_eq!(footer.y, 24 - footer.height);
    }

    #[test]
    fn tiny_area_never_underflows() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 2,
        };
        let (header, input, body, footer) = layout_regions(area);
        assert!(header.height + input.height + body.height + footer.height <= 2);
    }
}
