mod tests {
    use segment_stage::color;
    use segment_stage::{ChaseCursor, MemoryStrips, Segment, SegmentTable, Span, StripId};

    const SEGMENTS: &[Segment] = &[
        Segment { name: "UP", strip: StripId::Body, start: 10, end: 13, color: color::RED },
        Segment { name: "DOWN", strip: StripId::Body, start: 8, end: 5, color: color::PURPLE },
        Segment { name: "DOT", strip: StripId::Body, start: 3, end: 3, color: color::BLUE },
    ];

    fn table() -> SegmentTable<'static> {
        SegmentTable::new(SEGMENTS)
    }

    fn lit_indices(strips: &MemoryStrips, span: Span) -> Vec<usize> {
        span.iter()
            .filter(|&i| strips.staged(StripId::Body)[i] != color::OFF)
            .collect()
    }

    #[test]
    fn test_unknown_name_refuses_construction() {
        assert!(ChaseCursor::new(&table(), "NOT_A_SEGMENT").is_err());
    }

    #[test]
    fn test_single_moving_pixel() {
        let table = table();
        let mut strips = MemoryStrips::new();
        let mut cursor = ChaseCursor::new(&table, "UP").unwrap();
        let span = cursor.span();

        let mut seen = Vec::new();
        for _ in 0..span.len() {
            let advance = cursor.advance(&mut strips);
            assert!(advance.changed);
            let lit = lit_indices(&strips, span);
            assert_eq!(lit.len(), 1);
            seen.push(lit[0]);
        }
        assert_eq!(seen, vec![10, 11, 12, 13]);
    }

    #[test]
    fn test_descending_chase_order() {
        let table = table();
        let mut strips = MemoryStrips::new();
        let mut cursor = ChaseCursor::new(&table, "DOWN").unwrap();

        let mut seen = Vec::new();
        for _ in 0..cursor.span().len() {
            cursor.advance(&mut strips);
            seen.push(lit_indices(&strips, cursor.span())[0]);
        }
        assert_eq!(seen, vec![8, 7, 6, 5]);
    }

    #[test]
    fn test_wraps_exactly_every_len_advances() {
        let table = table();
        let mut strips = MemoryStrips::new();
        let mut cursor = ChaseCursor::new(&table, "UP").unwrap();
        let len = cursor.span().len();

        for round in 0..3 {
            for step in 0..len {
                let advance = cursor.advance(&mut strips);
                let expect_wrap = step == len - 1;
                assert_eq!(advance.wrapped, expect_wrap, "round {round} step {step}");
            }
        }
    }

    #[test]
    fn test_single_pixel_segment_wraps_every_tick() {
        let table = table();
        let mut strips = MemoryStrips::new();
        let mut cursor = ChaseCursor::new(&table, "DOT").unwrap();

        for _ in 0..3 {
            let advance = cursor.advance(&mut strips);
            assert!(advance.wrapped);
            assert_eq!(lit_indices(&strips, cursor.span()), vec![3]);
        }
    }

    #[test]
    fn test_frozen_cursor_is_a_no_op() {
        let table = table();
        let mut strips = MemoryStrips::new();
        let mut cursor = ChaseCursor::new(&table, "UP").unwrap();

        cursor.advance(&mut strips);
        let before = strips.staged(StripId::Body).to_vec();
        cursor.freeze();

        let advance = cursor.advance(&mut strips);
        assert!(!advance.changed);
        assert!(!advance.wrapped);
        assert_eq!(strips.staged(StripId::Body), &before[..]);
    }

    #[test]
    fn test_reset_darkens_and_rewinds() {
        let table = table();
        let mut strips = MemoryStrips::new();
        let mut cursor = ChaseCursor::new(&table, "UP").unwrap();

        cursor.advance(&mut strips);
        cursor.advance(&mut strips);
        cursor.freeze();
        cursor.reset(&mut strips);

        assert!(lit_indices(&strips, cursor.span()).is_empty());
        assert_eq!(cursor.offset(), 0);
        assert!(!cursor.is_frozen());

        // The next advance starts over from the span start.
        cursor.advance(&mut strips);
        assert_eq!(lit_indices(&strips, cursor.span()), vec![10]);
    }
}
