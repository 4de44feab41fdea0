//! Tests for page rasterisation, join mark drawing and PNG export

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use shadecut::PatternOutline;
    use shadecut::geometry::{ShadeDimensions, Unit, compute};
    use shadecut::io::configuration::{
        JOIN_MARK_COLOR, LABEL_COLOR, LABEL_INSET_PX, LABEL_SCALE_PX, OUTLINE_COLOR,
        PAGE_BACKGROUND,
    };
    use shadecut::io::image::{
        export_pages, join_label_position, page_file_name, page_pixels, render_page,
    };
    use shadecut::io::label::{draw_text, text_size};
    use shadecut::io::progress::ExportProgress;
    use shadecut::tiling::layout::{Edge, PageLayout, PageSpec, TilingConfig, tile};

    fn drum_layout(diameter: f64, page_width: f64, page_height: f64) -> (PatternOutline, PageLayout) {
        let outline = compute(&ShadeDimensions::cylinder(diameter, 3.0, Unit::Centimeters))
            .expect("drum should unroll");
        let page = PageSpec::new(page_width, page_height).expect("positive page");
        let layout = tile(&outline, &page, &TilingConfig::default()).expect("fits");
        (outline, layout)
    }

    // Label pixels inside the text box must match a reference rendering exactly
    fn assert_text(page: &RgbaImage, x: u32, y: u32, text: &str) {
        let mut expected = RgbaImage::from_pixel(page.width(), page.height(), Rgba(PAGE_BACKGROUND));
        draw_text(&mut expected, x, y, text, LABEL_SCALE_PX, Rgba(LABEL_COLOR));
        let (width, height) = text_size(text, LABEL_SCALE_PX);

        for py in y..y + height {
            for px in x..x + width {
                assert_eq!(
                    page.get_pixel(px, py) == &Rgba(LABEL_COLOR),
                    expected.get_pixel(px, py) == &Rgba(LABEL_COLOR),
                    "label {text:?} differs at ({px}, {py})"
                );
            }
        }
    }

    // Tests page raster size and resolution validation
    // Verified by flooring the pixel size
    #[test]
    fn test_page_pixels() {
        let (_, layout) = drum_layout(2.0, 10.0, 5.0);

        assert_eq!(page_pixels(&layout, 10.0).expect("valid"), (100, 50));
        assert!(page_pixels(&layout, 0.0).is_err());
        assert!(page_pixels(&layout, 1e6).is_err());
    }

    // Tests outline pixels are inked and the interior and margin are blank
    // Verified by drawing the page without the bounding box shift
    #[test]
    fn test_render_single_page() {
        let (outline, layout) = drum_layout(2.0, 10.0, 5.0);
        let tile = layout.tile_at(0, 0).expect("single page");
        let page = render_page(&outline, &layout, tile, 10.0).expect("renders");

        assert_eq!(page.dimensions(), (100, 50));
        assert_eq!(page.get_pixel(0, 0), &Rgba(OUTLINE_COLOR));
        assert_eq!(page.get_pixel(30, 25), &Rgba(PAGE_BACKGROUND));
        assert_eq!(page.get_pixel(90, 40), &Rgba(PAGE_BACKGROUND));
    }

    // Tests second page shows the shifted window and both pages carry join marks
    // Verified by ignoring the tile offset
    #[test]
    fn test_render_shifted_page_with_join_marks() {
        let (outline, layout) = drum_layout(4.0, 10.0, 8.0);
        assert_eq!((layout.columns(), layout.rows()), (2, 1));

        let first = layout.tile_at(0, 0).expect("first page");
        let second = layout.tile_at(0, 1).expect("second page");
        let left = render_page(&outline, &layout, first, 10.0).expect("renders");
        let right = render_page(&outline, &layout, second, 10.0).expect("renders");

        // Right edge of the rectangle at x = 4π lands 2.566 into the second page
        assert_eq!(right.get_pixel(25, 25), &Rgba(OUTLINE_COLOR));
        assert_eq!(right.get_pixel(60, 25), &Rgba(PAGE_BACKGROUND));

        assert_eq!(left.get_pixel(99, 40), &Rgba(JOIN_MARK_COLOR));
        assert_eq!(right.get_pixel(0, 40), &Rgba(JOIN_MARK_COLOR));
        assert_ne!(left.get_pixel(0, 40), &Rgba(JOIN_MARK_COLOR));
        assert_ne!(left.get_pixel(50, 0), &Rgba(JOIN_MARK_COLOR));
    }

    // Tests each page of a 2x2 grid names itself and the pages it joins
    // Verified by numbering join labels with this page instead of the neighbour
    #[test]
    fn test_render_page_labels() {
        let outline = compute(&ShadeDimensions::cylinder(8.0, 24.0, Unit::Centimeters))
            .expect("drum should unroll");
        let page = PageSpec::new(20.0, 16.0).expect("positive page");
        let layout = tile(&outline, &page, &TilingConfig::default()).expect("fits");
        assert_eq!((layout.columns(), layout.rows()), (2, 2));

        let expected_joins = [
            ((0, 0), vec![(Edge::Right, "2"), (Edge::Bottom, "3")]),
            ((0, 1), vec![(Edge::Left, "1"), (Edge::Bottom, "4")]),
            ((1, 0), vec![(Edge::Top, "1"), (Edge::Right, "4")]),
            ((1, 1), vec![(Edge::Top, "2"), (Edge::Left, "3")]),
        ];

        for (number, ((row, col), joins)) in (1..).zip(expected_joins) {
            let tile = layout.tile_at(row, col).expect("page exists");
            let image = render_page(&outline, &layout, tile, 10.0).expect("renders");
            assert_eq!(image.dimensions(), (200, 160));

            assert_text(&image, LABEL_INSET_PX, LABEL_INSET_PX, &format!("PAGE {number} OF 4"));
            for (edge, target) in joins {
                let (x, y) = join_label_position(image.dimensions(), edge, target);
                assert_text(&image, x, y, target);
            }
        }
    }

    // Tests join labels sit inside the page next to their bar
    // Verified by placing Right labels from the left edge
    #[test]
    fn test_join_label_position() {
        assert_eq!(join_label_position((200, 160), Edge::Top, "2"), (97, 10));
        assert_eq!(join_label_position((200, 160), Edge::Bottom, "3"), (97, 140));
        assert_eq!(join_label_position((200, 160), Edge::Left, "1"), (10, 75));
        assert_eq!(join_label_position((200, 160), Edge::Right, "12"), (176, 75));
    }

    // Tests every page is written with its grid position in the name
    // Verified by writing all pages to the same file
    #[test]
    fn test_export_pages_writes_every_page() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (outline, layout) = drum_layout(4.0, 10.0, 2.0);
        let progress = ExportProgress::hidden(layout.page_count());

        let written = export_pages(&outline, &layout, dir.path(), 5.0, Some(&progress))
            .expect("export succeeds");

        assert_eq!(written.len(), layout.page_count());
        assert_eq!(progress.position(), layout.page_count() as u64);
        for (path, tile) in written.iter().zip(layout.tiles()) {
            assert!(path.exists());
            assert!(path.ends_with(page_file_name(tile)));
        }
        assert_eq!(page_file_name(layout.tiles().last().expect("pages")), "page_1_1.png");
    }
}
