use serde::{Deserialize, Serialize};

/// The direction a [`StatBar`](crate::stat_bar::StatBar) fills in, from its
/// minimum to its maximum value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillDirection {
    /// From the left to the right.
    #[default]
    LeftToRight,
    /// From the right to the left.
    RightToLeft,
    /// From the bottom to the top.
    BottomToTop,
    /// From the top to the bottom.
    TopToBottom,
}

impl FillDirection {
    pub const ALL: [FillDirection; 4] = [
        FillDirection::LeftToRight,
        FillDirection::RightToLeft,
        FillDirection::BottomToTop,
        FillDirection::TopToBottom,
    ];

    /// The layout axis the fill grows along.
    pub fn axis(self) -> Axis {
        match self {
            FillDirection::LeftToRight | FillDirection::RightToLeft => Axis::Horizontal,
            FillDirection::BottomToTop | FillDirection::TopToBottom => Axis::Vertical,
        }
    }

    /// True when the fill grows from the far edge of its axis.
    pub fn is_reversed(self) -> bool {
        matches!(self, FillDirection::RightToLeft | FillDirection::TopToBottom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Component index into a `Vec2`.
    pub fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }
}

/// A request for the host layout to mirror the bar's boxes after a direction
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFlip {
    /// Swap the horizontal and vertical layout of the bar and its children.
    Axes,
    /// Mirror the layout along a single axis.
    OnAxis(Axis),
}

impl LayoutFlip {
    /// The flips needed to turn a layout built for `old` into one for `new`.
    ///
    /// An axis change flips both axes first, then a reversal change mirrors
    /// the new axis.
    pub fn between(old: FillDirection, new: FillDirection) -> Vec<LayoutFlip> {
        let mut flips = Vec::new();
        if old.axis() != new.axis() {
            flips.push(LayoutFlip::Axes);
        }
        if old.is_reversed() != new.is_reversed() {
            flips.push(LayoutFlip::OnAxis(new.axis()));
        }
        flips
    }
}
