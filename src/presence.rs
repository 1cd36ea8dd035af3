/// Where an element is in its show/hide animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Presence {
    #[default]
    Hidden,
    Entering,
    Shown,
    Exiting,
}

impl Presence {
    /// Retargets the animation. Returns `true` when a transition started and
    /// needs a [`Presence::settle`] once the animation has run.
    pub fn set_target(&mut self, visible: bool) -> bool {
        let next = match (*self, visible) {
            (Presence::Hidden | Presence::Exiting, true) => Presence::Entering,
            (Presence::Shown | Presence::Entering, false) => Presence::Exiting,
            _ => return false,
        };
        *self = next;
        true
    }

    pub fn settle(&mut self) {
        *self = match *self {
            Presence::Entering => Presence::Shown,
            Presence::Exiting => Presence::Hidden,
            settled => settled,
        };
    }

    pub fn is_mounted(self) -> bool {
        self != Presence::Hidden
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Presence::Hidden => "hidden",
            Presence::Entering => "entering",
            Presence::Shown => "shown",
            Presence::Exiting => "exiting",
        }
    }
}
