// SPDX-License-Identifier: MIT OR Apache-2.0

//! The page's navigable sections, top to bottom.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Anchor id of the `<section>` element.
    pub id: &'static str,
    pub label: &'static str,
}

pub const HERO: &str = "hero";
pub const PROBLEM: &str = "problem";
pub const SOLUTION: &str = "solution";
pub const PRODUCT: &str = "product";
pub const MARKET: &str = "market";
pub const COMPETITION: &str = "competition";
pub const BUSINESS: &str = "business";
pub const TEAM: &str = "team";
pub const ROADMAP: &str = "roadmap";
pub const FUNDING: &str = "funding";
pub const CONTACT: &str = "contact";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: HERO, label: "首页" },
    NavItem { id: PROBLEM, label: "问题分析" },
    NavItem { id: SOLUTION, label: "解决方案" },
    NavItem { id: PRODUCT, label: "产品详解" },
    NavItem { id: MARKET, label: "市场机会" },
    NavItem { id: COMPETITION, label: "竞争分析" },
    NavItem { id: BUSINESS, label: "商业模式" },
    NavItem { id: TEAM, label: "团队介绍" },
    NavItem { id: ROADMAP, label: "发展规划" },
    NavItem { id: FUNDING, label: "融资需求" },
    NavItem { id: CONTACT, label: "联系我们" },
];

pub const SECTION_IDS: &[&str] = &[
    HERO, PROBLEM, SOLUTION, PRODUCT, MARKET, COMPETITION, BUSINESS, TEAM, ROADMAP, FUNDING,
    CONTACT,
];
