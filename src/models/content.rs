//! Fixed marketing copy rendered around the dynamic sections.

pub const HERO_HEADLINE: &str = "Unlimited car washes. One membership.";
pub const HERO_SUBHEADLINE: &str = "Join Mintly Wash and cruise through our modern, touchless tunnels. Scan, wash, and go at any of our franchise locations.";

/// Perks listed on every plan card under the wash allowance.
pub const PLAN_PERKS: [&str; 2] = ["Access to all franchise locations", "Member-only fast lanes"];

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    /// SVG path data drawn on a 24x24 viewbox
    pub icon_path: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Touchless Shine",
        description: "Modern tunnels with foam cannons and microfiber finish.",
        icon_path: "M12 3l1.9 5.8L20 10l-6.1 1.2L12 17l-1.9-5.8L4 10l6.1-1.2z",
    },
    Feature {
        title: "Eco Smart",
        description: "80% less water with recycled systems and safe soaps.",
        icon_path: "M12 2.7C9 6.5 6 9.6 6 13a6 6 0 0 0 12 0c0-3.4-3-6.5-6-10.3z",
    },
    Feature {
        title: "Protected",
        description: "Ceramic coat and UV protection in premium tiers.",
        icon_path: "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
    },
    Feature {
        title: "Anytime Access",
        description: "Scan-and-wash in under 5 minutes at any location.",
        icon_path: "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 4v6l4 2",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "200k+", label: "Happy Members" },
    Stat { value: "120+", label: "Locations" },
    Stat { value: "5 min", label: "Avg. Wash Time" },
    Stat { value: "24/7", label: "Access" },
];
