//! Proportional "stack of letters" layout for queue counters.

/// Pixels of bar height per counted item.
pub const PX_PER_ITEM: u32 = 8;
/// Height cap of the bar.
pub const MAX_HEIGHT_PX: u32 = 400;
/// Maximum number of drawn sheets.
pub const MAX_ITEMS: u32 = 20;
/// Vertical distance between sheets.
pub const ITEM_STEP_PX: u32 = 4;
/// Horizontal jitter step; sheets cycle through three offsets.
pub const SHIFT_STEP_PX: u32 = 2;

/// One drawn sheet in the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackItem {
    pub bottom_px: u32,
    pub shift_px: u32,
}

/// Layout of a stack for a given count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackLayout {
    pub count: u32,
    pub height_px: u32,
    pub items: Vec<StackItem>,
}

impl StackLayout {
    #[must_use]
    pub fn new(count: u32) -> Self {
        let height_px = count.saturating_mul(PX_PER_ITEM).min(MAX_HEIGHT_PX);
        let items = (0..count.min(MAX_ITEMS))
            .map(|i| StackItem { bottom_px: i * ITEM_STEP_PX, shift_px: (i % 3) * SHIFT_STEP_PX })
            .collect();
        Self { count, height_px, items }
    }

    /// Text rendition of the bar, `width` cells wide.
    #[must_use]
    pub fn text_bar(&self, width: usize) -> String {
        let height = usize::try_from(self.height_px).unwrap_or(usize::MAX);
        let max = usize::try_from(MAX_HEIGHT_PX).unwrap_or(1);
        let filled = height.saturating_mul(width).div_ceil(max).min(width);
        format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
    }
}
