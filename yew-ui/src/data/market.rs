// SPDX-License-Identifier: MIT OR Apache-2.0

//! Market sizing, audience and pain-point figures.

use crate::components::icons::IconKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSegment {
    pub segment: &'static str,
    /// 亿元
    pub size: u32,
    /// Yearly growth in percent.
    pub growth: f64,
    pub opportunity: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserSegment {
    pub name: &'static str,
    pub percentage: u32,
    pub description: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketTrend {
    pub year: u32,
    pub pet_market: u32,
    pub mental_health: u32,
    pub ai_companion: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PainPoint {
    pub title: &'static str,
    pub description: &'static str,
    pub statistic: &'static str,
    pub icon: IconKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetMarket {
    pub title: &'static str,
    pub description: &'static str,
    pub size: &'static str,
    pub characteristics: &'static [&'static str],
}

pub const MARKET_SEGMENTS: &[MarketSegment] = &[
    MarketSegment {
        segment: "宠物经济市场",
        size: 4936,
        growth: 18.5,
        opportunity: "传统宠物市场向智能化转型，AI宠物成为新增长点",
    },
    MarketSegment {
        segment: "心理健康市场",
        size: 1200,
        growth: 25.3,
        opportunity: "疫情后心理健康需求激增，情感陪伴产品需求旺盛",
    },
    MarketSegment {
        segment: "AI伴侣市场",
        size: 156,
        growth: 45.2,
        opportunity: "新兴市场，技术成熟度提升，用户接受度快速增长",
    },
];

pub const USER_SEGMENTS: &[UserSegment] = &[
    UserSegment {
        name: "都市白领",
        percentage: 35,
        description: "25-35岁，高收入，工作压力大，需要情感支持",
        color: "#FF6B35",
    },
    UserSegment {
        name: "空巢老人",
        percentage: 25,
        description: "55岁以上，子女不在身边，渴望陪伴和关怀",
        color: "#1E3A8A",
    },
    UserSegment {
        name: "青少年群体",
        percentage: 20,
        description: "12-18岁，社交需求强，喜欢新科技产品",
        color: "#10B981",
    },
    UserSegment {
        name: "特殊需求人群",
        percentage: 20,
        description: "自闭症、抑郁症等群体，需要专业情感支持",
        color: "#8B5CF6",
    },
];

pub const MARKET_TRENDS: &[MarketTrend] = &[
    MarketTrend { year: 2020, pet_market: 2953, mental_health: 680, ai_companion: 45 },
    MarketTrend { year: 2021, pet_market: 3490, mental_health: 850, ai_companion: 68 },
    MarketTrend { year: 2022, pet_market: 4136, mental_health: 1065, ai_companion: 98 },
    MarketTrend { year: 2023, pet_market: 4936, mental_health: 1200, ai_companion: 156 },
    MarketTrend { year: 2024, pet_market: 5850, mental_health: 1500, ai_companion: 226 },
    MarketTrend { year: 2025, pet_market: 6930, mental_health: 1875, ai_companion: 328 },
];

pub const PAIN_POINTS: &[PainPoint] = &[
    PainPoint {
        title: "现代社会孤独感加剧",
        description: "快节奏生活导致人际关系疏离，情感需求无法得到满足",
        statistic: "68%的都市人群感到孤独",
        icon: IconKind::Users,
    },
    PainPoint {
        title: "传统宠物养护成本高",
        description: "宠物养护需要大量时间、金钱投入，且存在过敏、卫生等问题",
        statistic: "年均养宠成本超过8000元",
        icon: IconKind::DollarSign,
    },
    PainPoint {
        title: "心理健康服务供给不足",
        description: "专业心理咨询师稀缺，服务费用昂贵，获取渠道有限",
        statistic: "心理咨询师缺口达130万",
        icon: IconKind::Brain,
    },
];

pub const TARGET_MARKETS: &[TargetMarket] = &[
    TargetMarket {
        title: "年轻专业人士",
        description: "25-35岁，高收入，工作繁忙，情感需求强烈",
        size: "8500万人",
        characteristics: &["高收入", "工作压力大", "社交时间少", "接受新技术"],
    },
    TargetMarket {
        title: "空巢老人",
        description: "55-75岁，子女不在身边，需要情感陪伴",
        size: "1.2亿人",
        characteristics: &["情感孤独", "健康关注", "时间充裕", "消费能力强"],
    },
    TargetMarket {
        title: "单身群体",
        description: "20-40岁，单身生活，寻求情感支持",
        size: "2.4亿人",
        characteristics: &["独立生活", "情感需求", "消费意愿强", "科技敏感"],
    },
    TargetMarket {
        title: "特殊需求群体",
        description: "自闭症、抑郁症等需要特殊陪伴的人群",
        size: "3000万人",
        characteristics: &["特殊需求", "专业支持", "长期陪伴", "家庭支持"],
    },
];

/// Sum of the three segment sizes, in 亿元.
pub fn total_addressable_market() -> u32 {
    MARKET_SEGMENTS.iter().map(|s| s.size).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audience_shares_add_up_to_the_whole() {
        let total: u32 = USER_SEGMENTS.iter().map(|s| s.percentage).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn trends_are_chronological() {
        assert!(MARKET_TRENDS.windows(2).all(|w| w[0].year < w[1].year));
    }

    #[test]
    fn total_market_matches_segments() {
        assert_eq!(total_addressable_market(), 4936 + 1200 + 156);
    }
}
