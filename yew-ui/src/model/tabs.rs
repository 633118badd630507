// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tab and view switches used by the content sections.

use std::fmt::Display;

use enum_display::EnumDisplay;

/// A closed set of tabs rendered by `TabBar`.
///
/// `Display` gives the stable key written to `data-tab`; `label` is the
/// visible caption.
pub trait Tab: Copy + PartialEq + Display + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn key(self) -> String {
        self.to_string().to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumDisplay)]
pub enum ProductTab {
    #[default]
    Hardware,
    Software,
}

impl Tab for ProductTab {
    const ALL: &'static [Self] = &[Self::Hardware, Self::Software];

    fn label(self) -> &'static str {
        match self {
            Self::Hardware => "硬件特性",
            Self::Software => "软件生态",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumDisplay)]
pub enum BusinessTab {
    #[default]
    Revenue,
    Channels,
    Funding,
    Projections,
}

impl Tab for BusinessTab {
    const ALL: &'static [Self] = &[
        Self::Revenue,
        Self::Channels,
        Self::Funding,
        Self::Projections,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Revenue => "收入模式",
            Self::Channels => "销售渠道",
            Self::Funding => "资金规划",
            Self::Projections => "财务预测",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumDisplay)]
pub enum TeamView {
    #[default]
    Grid,
    Org,
}

impl Tab for TeamView {
    const ALL: &'static [Self] = &[Self::Grid, Self::Org];

    fn label(self) -> &'static str {
        match self {
            Self::Grid => "团队成员",
            Self::Org => "组织架构",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumDisplay)]
pub enum RoadmapView {
    #[default]
    Timeline,
    Phases,
}

impl Tab for RoadmapView {
    const ALL: &'static [Self] = &[Self::Timeline, Self::Phases];

    fn label(self) -> &'static str {
        match self {
            Self::Timeline => "时间线视图",
            Self::Phases => "阶段视图",
        }
    }
}
