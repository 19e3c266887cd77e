// SPDX-License-Identifier: MPL-2.0
//! Static catalogue of the landing page content.
//!
//! Everything user-visible is referenced by Fluent key so copy stays in the
//! `.ftl` files; this module only fixes the structure: which sections exist,
//! in what order, with which accent colors and metrics. Display order is
//! declaration order throughout.

use iced::Color;

/// Accent gradient endpoints for a card or badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accent {
    pub start: Color,
    pub end: Color,
}

impl Accent {
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// Midpoint of the gradient, used where a single color is needed.
    pub fn mid(&self) -> Color {
        Color::from_rgb(
            (self.start.r + self.end.r) / 2.0,
            (self.start.g + self.end.g) / 2.0,
            (self.start.b + self.end.b) / 2.0,
        )
    }
}

/// One industry solution card.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub id: &'static str,
    pub title_key: &'static str,
    pub industry_key: &'static str,
    pub description_key: &'static str,
    pub benefit_keys: [&'static str; 4],
    pub use_case_key: &'static str,
    /// Headline metric counted up on hover.
    pub metric: u32,
    pub metric_suffix_key: &'static str,
    pub demo_title_key: &'static str,
    pub demo_feature_keys: [&'static str; 3],
    pub accent: Accent,
}

/// One AI personalization mode in the interactive QR demo.
#[derive(Debug, Clone, PartialEq)]
pub struct Personalization {
    pub id: &'static str,
    pub name_key: &'static str,
    pub description_key: &'static str,
    pub accent: Accent,
}

/// A company milestone (year + event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub event_key: &'static str,
}

/// Landing page anchors targeted by the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Platform,
    Solutions,
    Company,
    Developers,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Platform,
        Section::Solutions,
        Section::Company,
        Section::Developers,
        Section::Contact,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            Section::Platform => "nav-platform",
            Section::Solutions => "nav-solutions",
            Section::Company => "nav-company",
            Section::Developers => "nav-developers",
            Section::Contact => "nav-contact",
        }
    }

    /// Approximate vertical position of the section within the page,
    /// as a fraction of the full scroll range.
    pub fn scroll_target(self) -> f32 {
        match self {
            Section::Platform => 0.0,
            Section::Solutions => 0.30,
            Section::Company => 0.55,
            Section::Developers => 0.72,
            Section::Contact => 0.85,
        }
    }
}

/// A footer link column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title_key: &'static str,
    pub link_keys: [&'static str; 4],
}

pub fn solutions() -> Vec<Solution> {
    vec![
        Solution {
            id: "business-cards",
            title_key: "solution-cards-title",
            industry_key: "solution-cards-industry",
            description_key: "solution-cards-description",
            benefit_keys: [
                "solution-cards-benefit-1",
                "solution-cards-benefit-2",
                "solution-cards-benefit-3",
                "solution-cards-benefit-4",
            ],
            use_case_key: "solution-cards-use-case",
            metric: 400,
            metric_suffix_key: "solution-cards-metric-suffix",
            demo_title_key: "solution-cards-demo-title",
            demo_feature_keys: [
                "solution-cards-demo-feature-1",
                "solution-cards-demo-feature-2",
                "solution-cards-demo-feature-3",
            ],
            accent: Accent::new(
                Color::from_rgb(0.23, 0.51, 0.96),
                Color::from_rgb(0.03, 0.57, 0.70),
            ),
        },
        Solution {
            id: "intelligent-menus",
            title_key: "solution-menus-title",
            industry_key: "solution-menus-industry",
            description_key: "solution-menus-description",
            benefit_keys: [
                "solution-menus-benefit-1",
                "solution-menus-benefit-2",
                "solution-menus-benefit-3",
                "solution-menus-benefit-4",
            ],
            use_case_key: "solution-menus-use-case",
            metric: 35,
            metric_suffix_key: "solution-menus-metric-suffix",
            demo_title_key: "solution-menus-demo-title",
            demo_feature_keys: [
                "solution-menus-demo-feature-1",
                "solution-menus-demo-feature-2",
                "solution-menus-demo-feature-3",
            ],
            accent: Accent::new(
                Color::from_rgb(0.06, 0.73, 0.51),
                Color::from_rgb(0.09, 0.64, 0.29),
            ),
        },
        Solution {
            id: "contextual-advertising",
            title_key: "solution-ads-title",
            industry_key: "solution-ads-industry",
            description_key: "solution-ads-description",
            benefit_keys: [
                "solution-ads-benefit-1",
                "solution-ads-benefit-2",
                "solution-ads-benefit-3",
                "solution-ads-benefit-4",
            ],
            use_case_key: "solution-ads-use-case",
            metric: 250,
            metric_suffix_key: "solution-ads-metric-suffix",
            demo_title_key: "solution-ads-demo-title",
            demo_feature_keys: [
                "solution-ads-demo-feature-1",
                "solution-ads-demo-feature-2",
                "solution-ads-demo-feature-3",
            ],
            accent: Accent::new(
                Color::from_rgb(0.66, 0.33, 0.97),
                Color::from_rgb(0.49, 0.23, 0.93),
            ),
        },
    ]
}

pub fn personalizations() -> Vec<Personalization> {
    vec![
        Personalization {
            id: "performance",
            name_key: "demo-performance-name",
            description_key: "demo-performance-description",
            accent: Accent::new(
                Color::from_rgb(0.98, 0.80, 0.08),
                Color::from_rgb(0.98, 0.45, 0.09),
            ),
        },
        Personalization {
            id: "demographic",
            name_key: "demo-demographic-name",
            description_key: "demo-demographic-description",
            accent: Accent::new(
                Color::from_rgb(0.38, 0.65, 0.98),
                Color::from_rgb(0.02, 0.71, 0.83),
            ),
        },
        Personalization {
            id: "location",
            name_key: "demo-location-name",
            description_key: "demo-location-description",
            accent: Accent::new(
                Color::from_rgb(0.29, 0.87, 0.50),
                Color::from_rgb(0.06, 0.73, 0.51),
            ),
        },
        Personalization {
            id: "security",
            name_key: "demo-security-name",
            description_key: "demo-security-description",
            accent: Accent::new(
                Color::from_rgb(0.75, 0.52, 0.99),
                Color::from_rgb(0.55, 0.36, 0.96),
            ),
        },
    ]
}

pub fn milestones() -> [Milestone; 4] {
    [
        Milestone { year: "2021", event_key: "milestone-2021" },
        Milestone { year: "2022", event_key: "milestone-2022" },
        Milestone { year: "2023", event_key: "milestone-2023" },
        Milestone { year: "2024", event_key: "milestone-2024" },
    ]
}

pub fn credential_keys() -> [&'static str; 4] {
    [
        "credential-founders",
        "credential-patents",
        "credential-funding",
        "credential-gartner",
    ]
}

pub fn trust_indicator_keys() -> [&'static str; 3] {
    [
        "contact-trust-security",
        "contact-trust-support",
        "contact-trust-compliance",
    ]
}

pub fn footer_columns() -> [FooterColumn; 4] {
    [
        FooterColumn {
            title_key: "footer-products-title",
            link_keys: [
                "footer-products-cards",
                "footer-products-dining",
                "footer-products-ads",
                "footer-products-overview",
            ],
        },
        FooterColumn {
            title_key: "footer-company-title",
            link_keys: [
                "footer-company-about",
                "footer-company-story",
                "footer-company-careers",
                "footer-company-blog",
            ],
        },
        FooterColumn {
            title_key: "footer-support-title",
            link_keys: [
                "footer-support-help",
                "footer-support-contact",
                "footer-support-docs",
                "footer-support-status",
            ],
        },
        FooterColumn {
            title_key: "footer-legal-title",
            link_keys: [
                "footer-legal-privacy",
                "footer-legal-terms",
                "footer-legal-cookies",
                "footer-legal-security",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn solution_ids_are_unique() {
        let ids: HashSet<_> = solutions().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), solutions().len());
    }

    #[test]
    fn personalization_ids_are_unique() {
        let ids: HashSet<_> = personalizations().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), personalizations().len());
    }

    #[test]
    fn section_scroll_targets_are_ordered() {
        let targets: Vec<f32> = Section::ALL.iter().map(|s| s.scroll_target()).collect();
        assert!(targets.windows(2).all(|w| w[0] < w[1]));
        assert!(targets.iter().all(|t| (0.0..=1.0).contains(t)));
    }

    #[test]
    fn accent_mid_is_between_endpoints() {
        let accent = Accent::new(Color::from_rgb(0.0, 0.2, 1.0), Color::from_rgb(1.0, 0.4, 0.0));
        let mid = accent.mid();
        assert!((mid.r - 0.5).abs() < f32::EPSILON);
        assert!((mid.g - 0.3).abs() < f32::EPSILON);
        assert!((mid.b - 0.5).abs() < f32::EPSILON);
    }
}
