use image::RgbaImage;
use pdf_paginate::layout::resolve_geometry;
use pdf_paginate::*;

// A4, 10mm margins, scale 1.0: 277mm of content height is 1046.93px
const A4_PORTRAIT_CAPACITY: u32 = 1046;
// A4 landscape: 190mm of content height is 718.11px
const A4_LANDSCAPE_CAPACITY: u32 = 718;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Start(PageSize),
    Draw(SubRegion, PlacementResult),
}

#[derive(Default)]
struct RecordingWriter {
    events: Vec<Event>,
}

impl PageWriter for RecordingWriter {
    fn start_page(&mut self, page: PageSize) -> Result<()> {
        self.events.push(Event::Start(page));
        Ok(())
    }

    fn draw_segment(
        &mut self,
        _bitmap: &SourceBitmap,
        subregion: SubRegion,
        placement: PlacementResult,
    ) -> Result<()> {
        self.events.push(Event::Draw(subregion, placement));
        Ok(())
    }
}

/// Fails on the second page
struct FailingWriter {
    pages: usize,
}

impl PageWriter for FailingWriter {
    fn start_page(&mut self, _page: PageSize) -> Result<()> {
        self.pages += 1;
        if self.pages > 1 {
            return Err(PaginateError::Io(std::io::Error::other("disk full")));
        }
        Ok(())
    }

    fn draw_segment(
        &mut self,
        _bitmap: &SourceBitmap,
        _subregion: SubRegion,
        _placement: PlacementResult,
    ) -> Result<()> {
        Ok(())
    }
}

fn bitmap(width: u32, height: u32) -> SourceBitmap {
    SourceBitmap::new(RgbaImage::new(width, height))
}

fn paginator(options: PaginationOptions) -> Paginator {
    Paginator::new(options).unwrap()
}

fn heights(plan: &PaginationPlan) -> Vec<u32> {
    plan.segments().map(|s| s.height_px).collect()
}

#[test]
fn test_uniform_plan() {
    let plan = paginator(PaginationOptions::default())
        .plan(200, 2500, &[])
        .unwrap();

    assert_eq!(plan.orientation, Orientation::Portrait);
    assert_eq!(plan.strategy, SegmentationStrategy::Uniform);
    assert_eq!(plan.geometry.content_height_whole_px(), A4_PORTRAIT_CAPACITY);
    assert_eq!(heights(&plan), vec![1046, 1046, 408]);
    assert_eq!(
        plan.page_size,
        PageSize {
            width_mm: 210.0,
            height_mm: 297.0,
        }
    );
}

#[test]
fn test_marker_plan() {
    let plan = paginator(PaginationOptions::default())
        .plan(200, 2500, &[BreakMarker::new(500)])
        .unwrap();

    assert_eq!(plan.strategy, SegmentationStrategy::MarkerAware);
    assert_eq!(heights(&plan), vec![500, 1046, 954]);
    assert!(matches!(
        plan.decisions[0],
        SegmentDecision::MarkerBreak {
            position_px: 500,
            ..
        }
    ));
}

#[test]
fn test_markers_ignored_when_disabled() {
    let options = PaginationOptions {
        use_marker_pagination: false,
        ..Default::default()
    };
    let plan = paginator(options)
        .plan(200, 2500, &[BreakMarker::new(500)])
        .unwrap();

    assert_eq!(plan.strategy, SegmentationStrategy::Uniform);
    assert_eq!(heights(&plan), vec![1046, 1046, 408]);
}

#[test]
fn test_wide_content_is_landscape() {
    let plan = paginator(PaginationOptions::default())
        .plan(3000, 1000, &[])
        .unwrap();

    assert_eq!(plan.orientation, Orientation::Landscape);
    assert_eq!(plan.geometry.content_height_whole_px(), A4_LANDSCAPE_CAPACITY);
    assert_eq!(heights(&plan), vec![718, 282]);
    assert_eq!(plan.page_size.width_mm, 297.0);
}

#[test]
fn test_force_landscape() {
    let options = PaginationOptions {
        force_landscape: true,
        ..Default::default()
    };
    let plan = paginator(options).plan(200, 2500, &[]).unwrap();

    assert_eq!(plan.orientation, Orientation::Landscape);
    assert_eq!(heights(&plan), vec![718, 718, 718, 346]);
}

#[test]
fn test_paginate_drives_writer_in_order() {
    let paginator = paginator(PaginationOptions::default());
    let source = bitmap(200, 2500);
    let mut writer = RecordingWriter::default();

    let outcome = paginator.paginate(&source, &[], &mut writer).unwrap();
    assert_eq!(outcome, PaginationOutcome::Paginated { pages: 3 });
    assert_eq!(writer.events.len(), 6);

    let plan = paginator.plan(200, 2500, &[]).unwrap();
    for (index, page) in plan.pages.iter().enumerate() {
        assert_eq!(writer.events[index * 2], Event::Start(plan.page_size));
        assert_eq!(
            writer.events[index * 2 + 1],
            Event::Draw(page.subregion, page.placement)
        );
    }
}

#[test]
fn test_subregions_cover_bitmap() {
    let plan = paginator(PaginationOptions::default())
        .plan(200, 2500, &[BreakMarker::new(10), BreakMarker::new(1500)])
        .unwrap();

    let mut cursor = 0;
    for page in &plan.pages {
        assert_eq!(page.subregion.x, 0);
        assert_eq!(page.subregion.width, 200);
        assert_eq!(page.subregion.y, cursor);
        cursor += page.subregion.height;
    }
    assert_eq!(cursor, 2500);
}

#[test]
fn test_placements_are_centered() {
    let options = PaginationOptions {
        page_format: PageFormat::Letter,
        margin_mm: 15.0,
        ..Default::default()
    };
    let plan = paginator(options)
        .plan(900, 5000, &[BreakMarker::new(4990)])
        .unwrap();

    let (width_mm, _) = PageFormat::Letter.dimensions_mm();
    let content_width_mm = width_mm - 30.0;
    for page in &plan.pages {
        let center = page.placement.x_mm + page.placement.width_mm / 2.0;
        assert!((center - (15.0 + content_width_mm / 2.0)).abs() < 0.001);
        assert_eq!(page.placement.y_mm, 15.0);
        assert!(page.placement.width_mm <= content_width_mm + 0.001);
    }
}

#[test]
fn test_empty_bitmap_is_nothing_to_paginate() {
    let paginator = paginator(PaginationOptions::default());
    let mut writer = RecordingWriter::default();

    let outcome = paginator
        .paginate(&bitmap(200, 0), &[BreakMarker::new(5)], &mut writer)
        .unwrap();

    assert_eq!(outcome, PaginationOutcome::NothingToPaginate);
    assert!(writer.events.is_empty());
}

#[test]
fn test_zero_width_bitmap_fails_before_any_page() {
    let paginator = paginator(PaginationOptions::default());
    assert!(matches!(
        paginator.plan(0, 2500, &[]),
        Err(PaginateError::Config(_))
    ));

    let mut writer = RecordingWriter::default();
    let result = paginator.paginate(&bitmap(0, 2500), &[], &mut writer);
    assert!(matches!(result, Err(PaginateError::Config(_))));
    assert!(writer.events.is_empty());
}

#[test]
fn test_zero_size_bitmap_is_still_empty() {
    let plan = paginator(PaginationOptions::default())
        .plan(0, 0, &[])
        .unwrap();
    assert!(plan.is_empty());
}

#[test]
fn test_configuration_error_before_any_page() {
    let options = PaginationOptions {
        margin_mm: 200.0,
        ..Default::default()
    };
    assert!(matches!(
        Paginator::new(options),
        Err(PaginateError::Config(_))
    ));
}

#[test]
fn test_tiny_scale_is_configuration_error() {
    let options = PaginationOptions {
        margin_mm: 104.9,
        scale: 0.01,
        ..Default::default()
    };
    let paginator = paginator(options);
    assert!(matches!(
        paginator.plan(200, 2500, &[]),
        Err(PaginateError::Config(_))
    ));
}

#[test]
fn test_writer_error_propagates() {
    let paginator = paginator(PaginationOptions::default());
    let mut writer = FailingWriter { pages: 0 };

    let result = paginator.paginate(&bitmap(200, 2500), &[], &mut writer);
    assert!(matches!(result, Err(PaginateError::Io(_))));
    assert_eq!(writer.pages, 2);
}

#[test]
fn test_geometry_is_idempotent() {
    let first = resolve_geometry(PageFormat::Letter, 12.0, 1.5, Orientation::Portrait).unwrap();
    let second = resolve_geometry(PageFormat::Letter, 12.0, 1.5, Orientation::Portrait).unwrap();

    assert_eq!(first.page_width_px.to_bits(), second.page_width_px.to_bits());
    assert_eq!(
        first.content_height_px.to_bits(),
        second.content_height_px.to_bits()
    );
    assert_eq!(first, second);
}
