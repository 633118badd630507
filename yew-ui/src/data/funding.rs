// SPDX-License-Identifier: MIT OR Apache-2.0

//! Financing rounds, investment highlights and risk controls.

use crate::components::icons::IconKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Current,
    Planned,
    Future,
}

impl RoundStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Current => "进行中",
            Self::Planned => "计划中",
            Self::Future => "未来规划",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Planned => "planned",
            Self::Future => "future",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundingRound {
    pub round: &'static str,
    pub amount: &'static str,
    pub timeline: &'static str,
    pub status: RoundStatus,
    pub description: &'static str,
    pub valuation: &'static str,
    pub equity: &'static str,
    pub investors: &'static [&'static str],
    pub milestones: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "低风险",
            Self::Medium => "中风险",
            Self::High => "高风险",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Risk {
    pub risk: &'static str,
    pub mitigation: &'static str,
    pub level: RiskLevel,
}

/// The round shown when the section first renders.
pub const DEFAULT_ROUND: &str = "A轮";

pub const FUNDING_ROUNDS: &[FundingRound] = &[
    FundingRound {
        round: "A轮",
        amount: "500万美元",
        timeline: "2024年Q2",
        status: RoundStatus::Current,
        description: "产品开发和市场验证",
        valuation: "2000万美元",
        equity: "25%",
        investors: &["知名VC", "产业基金", "天使投资人"],
        milestones: &[
            "完成MVP产品开发",
            "获得1000+种子用户",
            "建立核心团队",
            "申请核心技术专利",
        ],
    },
    FundingRound {
        round: "B轮",
        amount: "1500万美元",
        timeline: "2025年Q2",
        status: RoundStatus::Planned,
        description: "规模化运营和市场扩张",
        valuation: "8000万美元",
        equity: "18%",
        investors: &["头部VC", "战略投资者", "国际基金"],
        milestones: &[
            "用户规模达到10万+",
            "月收入突破100万",
            "进入3个新市场",
            "建立合作伙伴网络",
        ],
    },
    FundingRound {
        round: "C轮",
        amount: "3000万美元",
        timeline: "2026年Q4",
        status: RoundStatus::Future,
        description: "全球化布局和生态建设",
        valuation: "3亿美元",
        equity: "10%",
        investors: &["顶级VC", "主权基金", "科技巨头"],
        milestones: &[
            "全球用户超过100万",
            "年收入达到5000万",
            "完成IPO准备",
            "建立行业标准",
        ],
    },
];

pub const INVESTMENT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: IconKind::TrendingUp,
        title: "巨大市场机会",
        description: "全球AI伴侣市场预计2025年达到85亿美元，年复合增长率35%",
    },
    Highlight {
        icon: IconKind::Zap,
        title: "技术壁垒",
        description: "拥有多项核心AI技术专利，建立了强大的技术护城河",
    },
    Highlight {
        icon: IconKind::Users,
        title: "明星团队",
        description: "核心团队来自顶级科技公司，拥有丰富的AI和硬件开发经验",
    },
    Highlight {
        icon: IconKind::Target,
        title: "清晰商业模式",
        description: "多元化收入来源，已验证的商业模式和盈利路径",
    },
];

pub const RISK_MITIGATION: &[Risk] = &[
    Risk {
        risk: "技术风险",
        mitigation: "建立多重技术方案，与顶级AI研究机构合作",
        level: RiskLevel::Low,
    },
    Risk {
        risk: "市场风险",
        mitigation: "深度用户调研，灵活的产品迭代策略",
        level: RiskLevel::Medium,
    },
    Risk {
        risk: "竞争风险",
        mitigation: "专利保护，快速产品迭代，建立用户粘性",
        level: RiskLevel::Medium,
    },
    Risk {
        risk: "监管风险",
        mitigation: "积极参与行业标准制定，合规优先策略",
        level: RiskLevel::Low,
    },
];

pub const INVESTOR_PROTECTIONS: &[Highlight] = &[
    Highlight {
        icon: IconKind::Shield,
        title: "法律保护",
        description: "完善的法律文件和投资者保护条款",
    },
    Highlight {
        icon: IconKind::Globe,
        title: "信息透明",
        description: "定期财务报告和业务进展更新",
    },
    Highlight {
        icon: IconKind::Award,
        title: "优先权利",
        description: "后续融资的优先认购权和反稀释保护",
    },
    Highlight {
        icon: IconKind::Users,
        title: "治理参与",
        description: "董事会席位和重大决策参与权",
    },
];

/// Projected valuation, (year, 百万美元).
pub const VALUATION_FORECAST: &[(&str, f64)] = &[
    ("2024", 20.0),
    ("2025", 80.0),
    ("2026", 300.0),
    ("2027", 800.0),
    ("2028", 2000.0),
];

pub fn find_round(name: &str) -> Option<&'static FundingRound> {
    FUNDING_ROUNDS.iter().find(|r| r.round == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_is_the_current_one() {
        let round = find_round(DEFAULT_ROUND).unwrap();
        assert_eq!(round.status, RoundStatus::Current);
        assert_eq!(round.amount, "500万美元");
    }

    #[test]
    fn unknown_round() {
        assert!(find_round("D轮").is_none());
    }
}
