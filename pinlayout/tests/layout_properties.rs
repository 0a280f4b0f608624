//! Property tests for the masonry layout pass.

use pinlayout::{
    ContainerMetrics, LayoutContext, LayoutError, PinterestLayout, PinterestLayoutArgs,
    PrepareOutcome, geometry::EdgeInsets,
};
use proptest::prelude::*;

fn arb_heights() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.0f64..500.0, 0..64)
}

fn arb_args() -> impl Strategy<Value = PinterestLayoutArgs> {
    (1usize..8, 0.0f64..24.0).prop_map(|(columns, padding)| {
        PinterestLayoutArgs::default()
            .columns(columns)
            .cell_padding(padding)
    })
}

fn computed(args: &PinterestLayoutArgs, width: f64, heights: &[f64]) -> PinterestLayout {
    let heights = heights.to_vec();
    let container = ContainerMetrics::new(width, heights.len());
    let mut layout = PinterestLayout::new(args.clone()).unwrap();
    layout
        .prepare(&LayoutContext::new(&container, &heights))
        .unwrap();
    layout
}

proptest! {
    #[test]
    fn layout_is_deterministic(args in arb_args(), width in 0.0f64..2_000.0, heights in arb_heights()) {
        let container = ContainerMetrics::new(width, heights.len());
        let context = LayoutContext::new(&container, &heights);
        let mut layout = PinterestLayout::new(args).unwrap();

        layout.prepare(&context).unwrap();
        let first = layout.attributes().to_vec();
        let first_extent = layout.content_extent(&context);

        layout.invalidate();
        layout.prepare(&context).unwrap();
        prop_assert_eq!(layout.attributes(), first.as_slice());
        prop_assert_eq!(layout.content_extent(&context), first_extent);
    }

    #[test]
    fn columns_rotate_round_robin(args in arb_args(), heights in arb_heights()) {
        let layout = computed(&args, 900.0, &heights);
        for attributes in layout.attributes() {
            prop_assert_eq!(attributes.column, attributes.index % args.columns);
        }
    }

    #[test]
    fn content_width_ignores_items(
        bounds in 0.0f64..2_000.0,
        left in 0.0f64..100.0,
        right in 0.0f64..100.0,
        heights in arb_heights(),
    ) {
        let container = ContainerMetrics::new(bounds, heights.len())
            .with_insets(EdgeInsets::horizontal(left, right));
        let context = LayoutContext::new(&container, &heights);
        let mut layout = PinterestLayout::default();
        let expected = bounds - (left + right);

        prop_assert_eq!(layout.content_extent(&context).width, expected);
        layout.prepare(&context).unwrap();
        prop_assert_eq!(layout.content_extent(&context).width, expected);
    }

    #[test]
    fn content_height_grows_with_prefixes(args in arb_args(), heights in arb_heights()) {
        let mut previous = 0.0;
        for len in 0..=heights.len() {
            let layout = computed(&args, 600.0, &heights[..len]);
            let height = layout.content_extent(&LayoutContext::detached()).height;
            prop_assert!(height >= previous);
            previous = height;
        }
    }

    #[test]
    fn content_height_covers_every_cell(args in arb_args(), heights in arb_heights()) {
        let layout = computed(&args, 600.0, &heights);
        let content_height = layout.content_extent(&LayoutContext::detached()).height;
        for attributes in layout.attributes() {
            prop_assert!(attributes.frame.max_y() + args.cell_padding <= content_height + 1e-9);
        }
    }

    #[test]
    fn every_item_is_cached(args in arb_args(), heights in arb_heights()) {
        let layout = computed(&args, 600.0, &heights);
        let n = heights.len();
        prop_assert_eq!(layout.len(), n);
        for index in 0..n {
            prop_assert_eq!(layout.attributes_for_item(index).unwrap().index, index);
        }
        prop_assert_eq!(
            layout.attributes_for_item(n),
            Err(LayoutError::IndexOutOfRange { index: n, len: n })
        );
    }

    #[test]
    fn second_prepare_is_a_no_op(args in arb_args(), heights in arb_heights(), other in arb_heights()) {
        let mut layout = computed(&args, 600.0, &heights);
        let before = layout.attributes().to_vec();

        let container = ContainerMetrics::new(1_200.0, other.len());
        let outcome = layout.prepare(&LayoutContext::new(&container, &other)).unwrap();
        prop_assert_eq!(outcome, PrepareOutcome::Cached);
        prop_assert_eq!(layout.attributes(), before.as_slice());
    }
}
