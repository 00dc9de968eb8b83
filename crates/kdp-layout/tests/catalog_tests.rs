use kdp_layout::*;
use rstest::rstest;

#[rstest]
#[case("5x8", 5.0, 8.0)]
#[case("5.5x8.5", 5.5, 8.5)]
#[case("6x6", 6.0, 6.0)]
#[case("6x9", 6.0, 9.0)]
#[case("7x7", 7.0, 7.0)]
#[case("8x8", 8.0, 8.0)]
#[case("8x10", 8.0, 10.0)]
#[case("8.5x8.5", 8.5, 8.5)]
#[case("8.5x11", 8.5, 11.0)]
fn test_resolve_known_trims(#[case] id: &str, #[case] width: f64, #[case] height: f64) {
    let dims = resolve_trim(id).unwrap();
    assert_eq!(dims.width, width);
    assert_eq!(dims.height, height);
}

#[rstest]
#[case("bogus")]
#[case("")]
#[case("8.5X8.5")]
#[case(" 6x9")]
#[case("A4")]
fn test_resolve_unknown_trim(#[case] id: &str) {
    assert_eq!(
        resolve_trim(id),
        Err(LayoutError::UnknownTrimSize(id.to_string()))
    );
}

#[test]
fn test_catalog_ids_round_trip_and_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for trim in TrimSize::ALL {
        assert!(seen.insert(trim.id()), "duplicate id {}", trim.id());
        assert_eq!(trim.id().parse::<TrimSize>(), Ok(trim));
        assert_eq!(trim.to_string(), trim.id());
    }
    assert_eq!(seen.len(), 9);
}

#[test]
fn test_catalog_dimensions_positive() {
    for trim in TrimSize::ALL {
        let dims = trim.dimensions_in();
        assert!(dims.width > 0.0 && dims.height > 0.0, "{}", trim);
        assert!(dims.width <= dims.height, "{} should be portrait or square", trim);
    }
}

#[test]
fn test_trim_labels() {
    assert_eq!(TrimSize::In8_5x8_5.label(), "8.5\" x 8.5\" Square");
}

#[test]
fn test_print_spec_constants() {
    let kdp = PrintSpec::KDP;
    assert_eq!(kdp.bleed, 0.125);
    assert_eq!(kdp.safe_margin, 0.25);
    assert_eq!(kdp.min_spine_gutter, 0.375);
    assert_eq!(kdp.thickness_per_page(PaperType::White), 0.002252);
    assert_eq!(kdp.thickness_per_page(PaperType::Cream), 0.0025);
    assert_eq!(kdp.max_page_count, 828);
    assert_eq!(PrintSpec::default(), PrintSpec::KDP);
}

#[test]
fn test_cream_is_thicker_than_white() {
    let kdp = PrintSpec::KDP;
    for paper in PaperType::ALL {
        assert!(kdp.thickness_per_page(paper) > 0.0);
    }
    assert!(kdp.thickness_per_page(PaperType::Cream) >= kdp.thickness_per_page(PaperType::White));
}

#[test]
fn test_paper_and_color_parsing() {
    assert_eq!("white".parse::<PaperType>(), Ok(PaperType::White));
    assert_eq!("cream".parse::<PaperType>(), Ok(PaperType::Cream));
    assert_eq!(
        "glossy".parse::<PaperType>(),
        Err(LayoutError::InvalidPaperType("glossy".to_string()))
    );

    assert_eq!("color".parse::<ColorMode>(), Ok(ColorMode::Color));
    assert_eq!("bw".parse::<ColorMode>(), Ok(ColorMode::Bw));
    assert_eq!(
        "cmyk".parse::<ColorMode>(),
        Err(LayoutError::InvalidColorMode("cmyk".to_string()))
    );
}
