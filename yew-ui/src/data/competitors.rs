// SPDX-License-Identifier: MIT OR Apache-2.0

//! Competitive landscape: the intelligence/price map and our advantages.

use crate::components::icons::IconKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Competitor {
    pub name: &'static str,
    /// Degree of intelligence, 1-10.
    pub intelligence: u8,
    /// Price level, 1-10.
    pub price: u8,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
}

impl Competitor {
    pub fn is_us(&self) -> bool {
        self.name == OUR_PRODUCT
    }

    /// Quadrant of the 2x2 positioning map (midpoint 5).
    pub fn quadrant(&self) -> &'static str {
        match (self.intelligence > 5, self.price > 5) {
            (true, true) => "高智能 · 高价格",
            (true, false) => "高智能 · 低价格",
            (false, true) => "低智能 · 高价格",
            (false, false) => "低智能 · 低价格",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompetitiveAdvantage {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketPositioning {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

pub const OUR_PRODUCT: &str = "Mulfin";

pub const COMPETITORS: &[Competitor] = &[
    Competitor {
        name: OUR_PRODUCT,
        intelligence: 9,
        price: 6,
        description: "我们的产品 - 高智能化，中等价位，最佳性价比",
        strengths: &["多模态AI交互", "情感计算技术", "个性化成长", "触感反馈"],
        weaknesses: &["新品牌知名度待提升"],
    },
    Competitor {
        name: "传统毛绒玩具",
        intelligence: 1,
        price: 2,
        description: "传统玩具厂商，价格低廉但无智能功能",
        strengths: &["价格便宜", "品牌知名度高", "渠道成熟"],
        weaknesses: &["无智能交互", "功能单一", "缺乏个性化"],
    },
    Competitor {
        name: "Replika AI",
        intelligence: 8,
        price: 3,
        description: "纯软件AI伴侣，智能化程度高但缺乏物理交互",
        strengths: &["AI对话能力强", "个性化学习", "价格较低"],
        weaknesses: &["纯软件形态", "缺乏触感", "情感连接有限"],
    },
    Competitor {
        name: "Sony Aibo",
        intelligence: 7,
        price: 9,
        description: "高端机器宠物，技术先进但价格昂贵",
        strengths: &["技术成熟", "品牌影响力", "硬件质量高"],
        weaknesses: &["价格极高", "目标用户有限", "情感交互较弱"],
    },
    Competitor {
        name: "Amazon Alexa",
        intelligence: 6,
        price: 4,
        description: "智能音箱，语音交互能力强但形态固定",
        strengths: &["语音识别准确", "生态系统完善", "价格适中"],
        weaknesses: &["形态单一", "缺乏移动性", "情感表达有限"],
    },
    Competitor {
        name: "Furby",
        intelligence: 3,
        price: 3,
        description: "电子宠物玩具，有一定交互但智能化程度低",
        strengths: &["品牌知名度", "儿童市场认知", "价格合理"],
        weaknesses: &["智能化程度低", "交互方式简单", "成长性有限"],
    },
];

pub const COMPETITIVE_ADVANTAGES: &[CompetitiveAdvantage] = &[
    CompetitiveAdvantage {
        title: "多模态AI交互",
        description: "结合语音、触觉、视觉多种交互方式，提供更自然的沟通体验",
        icon: IconKind::Zap,
    },
    CompetitiveAdvantage {
        title: "情感计算引擎",
        description: "基于深度学习的情感识别和响应系统，真正理解用户情感状态",
        icon: IconKind::Heart,
    },
    CompetitiveAdvantage {
        title: "个性化成长",
        description: "每个Mulfin都会根据用户互动习惯形成独特的性格和记忆",
        icon: IconKind::TrendingUp,
    },
    CompetitiveAdvantage {
        title: "触感反馈技术",
        description: "先进的触觉传感器和反馈系统，提供真实的拥抱和抚摸体验",
        icon: IconKind::Hand,
    },
    CompetitiveAdvantage {
        title: "生态系统整合",
        description: "配套App、社区、增值服务形成完整的产品生态",
        icon: IconKind::Globe,
    },
    CompetitiveAdvantage {
        title: "性价比优势",
        description: "在保证高品质的前提下，提供更具竞争力的价格",
        icon: IconKind::Award,
    },
];

pub const MARKET_POSITIONING: MarketPositioning = MarketPositioning {
    title: "Mulfin市场定位",
    subtitle: "高智能化 × 合理价格 = 最佳选择",
    description: "在智能化程度和价格之间找到最佳平衡点，为用户提供高性价比的AI情感伴侣产品。",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_entry_is_ours() {
        let ours: Vec<_> = COMPETITORS.iter().filter(|c| c.is_us()).collect();
        assert_eq!(ours.len(), 1);
        assert_eq!(ours[0].quadrant(), "高智能 · 高价格");
    }

    #[test]
    fn scores_stay_on_the_map() {
        for c in COMPETITORS {
            assert!((1..=10).contains(&c.intelligence), "{}", c.name);
            assert!((1..=10).contains(&c.price), "{}", c.name);
        }
    }
}
