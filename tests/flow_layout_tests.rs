mod common;

use common::fixtures::tag_cloud;
use common::{TestResult, init_logger, layout_pairs};
use flowkit::{AlignItems, FlowConfig, FlowLayout, JustifyContent, Rect, Size};

const ALL_JUSTIFY: [JustifyContent; 6] = [
    JustifyContent::Start,
    JustifyContent::End,
    JustifyContent::Center,
    JustifyContent::SpaceBetween,
    JustifyContent::SpaceAround,
    JustifyContent::SpaceEvenly,
];

const ALL_ALIGN: [AlignItems; 4] = [
    AlignItems::Start,
    AlignItems::End,
    AlignItems::Center,
    AlignItems::Stretch,
];

#[test]
fn test_every_item_gets_one_frame_in_order() -> TestResult {
    init_logger();
    let items = tag_cloud(50);
    for justify in ALL_JUSTIFY {
        for align in ALL_ALIGN {
            let config = FlowConfig::with_spacing(3.0)
                .justify_content(justify)
                .align_items(align)
                .align_content(justify);
            let result = FlowLayout::new(config).layout(&items, Size::new(240.0, 600.0));
            assert_eq!(result.frames.len(), items.len());
            assert_eq!(result.nodes, items);
            let counted: usize = result.lines.iter().map(|l| l.count).sum();
            assert_eq!(counted, items.len());

            // Within a line frames advance left to right, and lines go down.
            for (i, line) in result.lines.iter().enumerate() {
                let frames = result.line_frames(i).ok_or("missing line frames")?;
                assert!(frames.windows(2).all(|w| w[0].max_x() <= w[1].min_x() + 1e-3));
                if i > 0 {
                    let prev = result.line_frames(i - 1).ok_or("missing line frames")?;
                    assert!(prev[0].min_y() < frames[0].min_y() || line.size.height == 0.0);
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_widths_are_never_changed_and_heights_only_by_stretch() -> TestResult {
    let items = tag_cloud(20);
    for align in ALL_ALIGN {
        let result = FlowLayout::new(FlowConfig::new().align_items(align))
            .layout(&items, Size::new(150.0, 150.0));
        for (i, (frame, item)) in result.frames.iter().zip(&items).enumerate() {
            assert_eq!(frame.width(), item.width);
            if align != AlignItems::Stretch {
                assert_eq!(frame.height(), item.height, "item {}", i);
            }
            assert!(frame.width() >= 0.0 && frame.height() >= 0.0);
        }
    }
    Ok(())
}

#[test]
fn test_space_between_three_items() -> TestResult {
    let config = FlowConfig::new().justify_content(JustifyContent::SpaceBetween);
    let result = layout_pairs(&[(10.0, 10.0); 3], (50.0, 10.0), config);
    let xs: Vec<f32> = result.frames.iter().map(Rect::min_x).collect();
    assert_eq!(xs, vec![0.0, 20.0, 40.0]);
    Ok(())
}

#[test]
fn test_center_one_line_in_container() -> TestResult {
    let config = FlowConfig::new().align_content(JustifyContent::Center);
    let result = layout_pairs(&[(10.0, 20.0), (30.0, 5.0)], (100.0, 100.0), config);
    assert_eq!(result.frames[0].min_y(), 40.0);
    assert_eq!(result.frames[1].min_y(), 40.0);
    Ok(())
}

#[test]
fn test_stretch_fills_line_height() -> TestResult {
    let config = FlowConfig::new().align_items(AlignItems::Stretch);
    let result = layout_pairs(
        &[(40.0, 5.0), (40.0, 30.0), (40.0, 8.0), (40.0, 2.0)],
        (90.0, 100.0),
        config,
    );
    let heights: Vec<f32> = result.frames.iter().map(Rect::height).collect();
    assert_eq!(heights, vec![30.0, 30.0, 8.0, 8.0]);
    assert_eq!(result.frames[2].min_y(), 30.0);
    Ok(())
}

#[test]
fn test_align_items_within_tall_line() -> TestResult {
    let pairs = [(10.0, 40.0), (10.0, 10.0)];
    let end = layout_pairs(&pairs, (100.0, 100.0), FlowConfig::new().align_items(AlignItems::End));
    let center = layout_pairs(
        &pairs,
        (100.0, 100.0),
        FlowConfig::new().align_items(AlignItems::Center),
    );
    assert_eq!(end.frames[1].min_y(), 30.0);
    assert_eq!(center.frames[1].min_y(), 15.0);
    Ok(())
}

#[test]
fn test_oversized_item_is_alone_and_overflows() -> TestResult {
    let config = FlowConfig::new().justify_content(JustifyContent::Center);
    let result = layout_pairs(&[(20.0, 10.0), (300.0, 10.0), (20.0, 10.0)], (100.0, 100.0), config);
    assert_eq!(result.line_count(), 3);
    assert_eq!(result.frames[1], Rect::new(0.0, 10.0, 300.0, 10.0));
    assert_eq!(result.content_size.width, 300.0);
    Ok(())
}

#[test]
fn test_lines_distributed_with_space_evenly() -> TestResult {
    // Two lines of height 10 in a 100 high container: 80 of slack in 3 gaps.
    let config = FlowConfig::new().align_content(JustifyContent::SpaceEvenly);
    let result = layout_pairs(&[(60.0, 10.0), (60.0, 10.0)], (100.0, 100.0), config);
    let slack = 80.0 / 3.0;
    assert!((result.frames[0].min_y() - slack).abs() < 1e-4);
    assert!((result.frames[1].min_y() - (2.0 * slack + 10.0)).abs() < 1e-4);
    Ok(())
}

#[test]
fn test_lines_overflowing_container_start_at_top() -> TestResult {
    let config = FlowConfig::new()
        .line_spacing(5.0)
        .align_content(JustifyContent::End);
    let result = layout_pairs(&[(60.0, 40.0); 3], (100.0, 100.0), config);
    let ys: Vec<f32> = result.frames.iter().map(Rect::min_y).collect();
    assert_eq!(ys, vec![0.0, 45.0, 90.0]);
    assert_eq!(result.content_size.height, 130.0);
    Ok(())
}

#[test]
fn test_empty_input() -> TestResult {
    let result = layout_pairs(&[], (100.0, 100.0), FlowConfig::with_spacing(10.0));
    assert!(result.frames.is_empty());
    assert_eq!(result.line_count(), 0);
    assert_eq!(result.content_size, Size::zero());
    assert_eq!(FlowLayout::default().measure_content(&[], 100.0), Size::zero());
    Ok(())
}

#[test]
fn test_zero_container_stacks_items() -> TestResult {
    let config = FlowConfig::new().line_spacing(1.0);
    let result = layout_pairs(&[(5.0, 5.0); 3], (0.0, 0.0), config);
    let ys: Vec<f32> = result.frames.iter().map(Rect::min_y).collect();
    assert_eq!(ys, vec![0.0, 6.0, 12.0]);
    assert!(result.frames.iter().all(|f| f.min_x() == 0.0));
    Ok(())
}

#[test]
fn test_spacing_wider_than_container() -> TestResult {
    let config = FlowConfig::new().interitem_spacing(500.0);
    let result = layout_pairs(&[(10.0, 10.0); 2], (100.0, 100.0), config);
    assert_eq!(result.line_count(), 2);
    assert!(result.frames.iter().all(|f| f.min_x() == 0.0));
    Ok(())
}

#[test]
fn test_identical_inputs_give_identical_outputs() -> TestResult {
    let items = tag_cloud(64);
    let config = FlowConfig::with_spacing(2.5)
        .justify_content(JustifyContent::SpaceEvenly)
        .align_items(AlignItems::Center)
        .align_content(JustifyContent::Center);
    let first = FlowLayout::new(config).layout(&items, Size::new(333.0, 999.0));
    let second = FlowLayout::new(config).layout(&items, Size::new(333.0, 999.0));
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_layout_sizes_matches_layout() -> TestResult {
    let items = tag_cloud(30);
    let flow = FlowLayout::new(FlowConfig::with_spacing(4.0).justify_content(JustifyContent::SpaceAround));
    let measured = flow.layout(&items, Size::new(200.0, 400.0));
    let presized = flow.layout_sizes(&items, Size::new(200.0, 400.0));
    assert_eq!(measured.frames, presized.frames);
    assert_eq!(measured.lines, presized.lines);
    Ok(())
}
