/// Gap between the toggle and each item, in px.
pub const ITEM_SPACING_PX: u32 = 44;
/// Extra entrance delay per item, in ms.
pub const STAGGER_MS: u32 = 50;
/// Duration of one item's entrance animation, in ms.
pub const ENTRANCE_MS: u32 = 280;
/// Fade of the blur overlay behind the open menu, both ways, in ms.
pub const OVERLAY_FADE_MS: u32 = 250;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Select(&'static str),
    Dismiss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: MenuState,
    /// Region to scroll to, set only for a selection made while open.
    pub navigate_to: Option<&'static str>,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn apply(self, action: MenuAction) -> Transition {
        let (state, navigate_to) = match (self, action) {
            (MenuState::Closed, MenuAction::Toggle) => (MenuState::Open, None),
            (MenuState::Open, MenuAction::Toggle) => (MenuState::Closed, None),
            (MenuState::Open, MenuAction::Select(id)) => (MenuState::Closed, Some(id)),
            (MenuState::Open, MenuAction::Dismiss) => (MenuState::Closed, None),
            (MenuState::Closed, MenuAction::Select(_) | MenuAction::Dismiss) => (MenuState::Closed, None),
        };
        Transition { state, navigate_to }
    }
}

/// Resting position and entrance timing of the `index`th item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemLayout {
    pub offset_px: u32,
    pub delay_ms: u32,
}

impl ItemLayout {
    pub fn for_index(index: usize) -> Self {
        let index = index as u32;
        Self {
            offset_px: (index + 1) * ITEM_SPACING_PX,
            delay_ms: index * STAGGER_MS,
        }
    }

    #[cfg(test)]
    pub fn settled_after_ms(self) -> u32 {
        self.delay_ms + ENTRANCE_MS
    }

    pub fn style(self) -> String {
        format!(
            "--item-offset: {}px; animation-delay: {}ms; animation-duration: {}ms;",
            self.offset_px, self.delay_ms, ENTRANCE_MS
        )
    }
}
