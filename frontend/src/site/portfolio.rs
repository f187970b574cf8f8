//! Portfolio projects, their filter buttons and the FAQ accordion state.

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub categories: &'static [&'static str],
    pub icon: &'static str,
    pub tags: &'static [&'static str],
}

pub const PORTFOLIO_FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("ios", "iOS"),
    ("android", "Android"),
    ("cross-platform", "Cross-platform"),
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "ShopEase",
        summary: "E-commerce app with one-tap checkout and live order tracking.",
        categories: &["ios", "android"],
        icon: "fas fa-shopping-bag",
        tags: &["Swift", "Kotlin", "Stripe"],
    },
    Project {
        title: "MediCare Connect",
        summary: "Telehealth appointments with secure video consultations.",
        categories: &["cross-platform"],
        icon: "fas fa-heartbeat",
        tags: &["Flutter", "WebRTC"],
    },
    Project {
        title: "FitPulse",
        summary: "Workout tracker syncing with Apple Health and wearables.",
        categories: &["ios"],
        icon: "fas fa-running",
        tags: &["SwiftUI", "HealthKit"],
    },
    Project {
        title: "FoodieHub",
        summary: "Restaurant discovery and delivery ordering for a regional chain.",
        categories: &["android"],
        icon: "fas fa-hamburger",
        tags: &["Kotlin", "Jetpack Compose"],
    },
    Project {
        title: "EduLearn",
        summary: "Interactive courses with offline lessons and progress sync.",
        categories: &["cross-platform"],
        icon: "fas fa-graduation-cap",
        tags: &["React Native", "Firebase"],
    },
    Project {
        title: "TravelMate",
        summary: "Trip planner with shared itineraries and offline maps.",
        categories: &["ios", "android"],
        icon: "fas fa-plane",
        tags: &["Swift", "Kotlin", "Mapbox"],
    },
];

pub fn project_matches(project: &Project, filter: &str) -> bool {
    filter == "all" || project.categories.contains(&filter)
}

/// At most one answer open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_match_any_category() {
        let travel = &PROJECTS[5];
        assert!(project_matches(travel, "all"));
        assert!(project_matches(travel, "ios"));
        assert!(project_matches(travel, "android"));
        assert!(!project_matches(travel, "cross-platform"));
    }

    #[test]
    fn every_filter_shows_something() {
        for (filter, _) in PORTFOLIO_FILTERS {
            assert!(PROJECTS.iter().any(|p| project_matches(p, filter)));
        }
    }

    #[test]
    fn only_one_answer_is_open() {
        let mut faq = Accordion::default();
        faq.toggle(1);
        assert!(faq.is_open(1));

        faq.toggle(3);
        assert!(faq.is_open(3));
        assert!(!faq.is_open(1));

        faq.toggle(3);
        assert!(!faq.is_open(3));
    }
}
