#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Home,
    Laptop,
    Wrench,
    Info,
    Phone,
}

impl IconKind {
    pub fn glyph(self) -> &'static str {
        match self {
            IconKind::Home => "⌂",
            IconKind::Laptop => "💻",
            IconKind::Wrench => "🔧",
            IconKind::Info => "ℹ",
            IconKind::Phone => "☎",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavTarget {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: IconKind,
}

/// Header and floating menu share this order.
pub const NAV_TARGETS: &[NavTarget] = &[
    NavTarget { id: "hero", label: "Home", icon: IconKind::Home },
    NavTarget { id: "laptops", label: "Laptops", icon: IconKind::Laptop },
    NavTarget { id: "services", label: "Services", icon: IconKind::Wrench },
    NavTarget { id: "about", label: "About", icon: IconKind::Info },
    NavTarget { id: "contact", label: "Contact", icon: IconKind::Phone },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_fixed() {
        let ids: Vec<_> = NAV_TARGETS.iter().map(|t| t.id).collect();
        assert_eq!(ids, ["hero", "laptops", "services", "about", "contact"]);
    }
}
