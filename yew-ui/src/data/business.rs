// SPDX-License-Identifier: MIT OR Apache-2.0

//! Revenue model, go-to-market channels, use of funds and projections.
//! Amounts are in 万元 unless noted.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueStream {
    pub name: &'static str,
    pub description: &'static str,
    pub percentage: u32,
    pub color: &'static str,
    pub expected_revenue: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Online,
    Offline,
    Partnership,
}

impl ChannelKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "线上",
            Self::Offline => "线下",
            Self::Partnership => "合作",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    pub name: &'static str,
    pub kind: ChannelKind,
    pub description: &'static str,
    /// Target share of sales, percent.
    pub target_share: u32,
    pub timeline: &'static str,
    /// Expected conversion rate, percent.
    pub conversion_rate: u32,
    pub cost: &'static str,
    pub roi: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundingAllocation {
    pub category: &'static str,
    pub amount: u32,
    pub percentage: u32,
    pub description: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialProjection {
    pub year: u32,
    pub revenue: u32,
    pub profit: u32,
    pub users: u32,
    /// Percent.
    pub market_share: f64,
}

/// Unit economics. Money in 元.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessMetrics {
    pub target_price: u32,
    pub gross_margin: u32,
    pub customer_acquisition_cost: u32,
    pub customer_lifetime_value: u32,
    pub monthly_churn_rate: u32,
    pub average_order_value: u32,
    pub payback_period_months: u32,
}

impl BusinessMetrics {
    /// LTV / CAC, one decimal.
    pub fn ltv_to_cac(&self) -> f64 {
        let ratio = f64::from(self.customer_lifetime_value)
            / f64::from(self.customer_acquisition_cost.max(1));
        (ratio * 10.0).round() / 10.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessAdvantage {
    pub category: &'static str,
    pub description: &'static str,
    pub impact: Impact,
}

pub const REVENUE_STREAMS: &[RevenueStream] = &[
    RevenueStream {
        name: "硬件销售",
        description: "Mulfin智能伴侣硬件产品销售收入",
        percentage: 60,
        color: "#FF6B35",
        expected_revenue: 12000,
    },
    RevenueStream {
        name: "订阅服务",
        description: "高级AI功能、个性化内容、云端服务月费",
        percentage: 25,
        color: "#1E3A8A",
        expected_revenue: 5000,
    },
    RevenueStream {
        name: "增值服务",
        description: "定制化服务、配件销售、企业合作",
        percentage: 10,
        color: "#10B981",
        expected_revenue: 2000,
    },
    RevenueStream {
        name: "数据服务",
        description: "匿名化情感数据分析服务（B端）",
        percentage: 5,
        color: "#8B5CF6",
        expected_revenue: 1000,
    },
];

pub const CHANNELS: &[Channel] = &[
    Channel {
        name: "官方电商平台",
        kind: ChannelKind::Online,
        description: "官网直销、天猫旗舰店、京东自营",
        target_share: 40,
        timeline: "2024年Q3启动",
        conversion_rate: 5,
        cost: "低",
        roi: "高",
    },
    Channel {
        name: "线下零售渠道",
        kind: ChannelKind::Offline,
        description: "苏宁、国美等3C卖场，玩具专营店",
        target_share: 30,
        timeline: "2024年Q4启动",
        conversion_rate: 3,
        cost: "高",
        roi: "中",
    },
    Channel {
        name: "合作伙伴渠道",
        kind: ChannelKind::Partnership,
        description: "心理咨询机构、养老院、特殊教育机构",
        target_share: 20,
        timeline: "2025年Q1启动",
        conversion_rate: 10,
        cost: "中",
        roi: "高",
    },
    Channel {
        name: "社交电商",
        kind: ChannelKind::Online,
        description: "小红书、抖音等社交平台直播带货",
        target_share: 10,
        timeline: "2025年Q2启动",
        conversion_rate: 8,
        cost: "中",
        roi: "高",
    },
];

pub const FUNDING_ALLOCATION: &[FundingAllocation] = &[
    FundingAllocation {
        category: "产品研发",
        amount: 200,
        percentage: 40,
        description: "AI算法优化、硬件迭代、软件开发",
        color: "#FF6B35",
    },
    FundingAllocation {
        category: "供应链建设",
        amount: 125,
        percentage: 25,
        description: "生产设备、供应商合作、质量控制体系",
        color: "#1E3A8A",
    },
    FundingAllocation {
        category: "市场推广",
        amount: 100,
        percentage: 20,
        description: "品牌建设、渠道拓展、用户获取",
        color: "#10B981",
    },
    FundingAllocation {
        category: "团队扩张",
        amount: 50,
        percentage: 10,
        description: "核心人才招聘、团队建设",
        color: "#8B5CF6",
    },
    FundingAllocation {
        category: "运营资金",
        amount: 25,
        percentage: 5,
        description: "日常运营、风险储备",
        color: "#F59E0B",
    },
];

pub const FINANCIAL_PROJECTIONS: &[FinancialProjection] = &[
    FinancialProjection { year: 2024, revenue: 500, profit: 50, users: 1000, market_share: 0.1 },
    FinancialProjection { year: 2025, revenue: 5000, profit: 1000, users: 15000, market_share: 1.2 },
    FinancialProjection { year: 2026, revenue: 20000, profit: 5000, users: 60000, market_share: 4.8 },
    FinancialProjection { year: 2027, revenue: 50000, profit: 15000, users: 150000, market_share: 12.0 },
    FinancialProjection { year: 2028, revenue: 100000, profit: 30000, users: 300000, market_share: 24.0 },
];

pub const BUSINESS_METRICS: BusinessMetrics = BusinessMetrics {
    target_price: 1299,
    gross_margin: 45,
    customer_acquisition_cost: 150,
    customer_lifetime_value: 2500,
    monthly_churn_rate: 3,
    average_order_value: 1450,
    payback_period_months: 8,
};

pub const BUSINESS_ADVANTAGES: &[BusinessAdvantage] = &[
    BusinessAdvantage {
        category: "技术壁垒",
        description: "自主研发的情感计算引擎和多模态交互技术",
        impact: Impact::High,
    },
    BusinessAdvantage {
        category: "先发优势",
        description: "在AI情感伴侣细分市场的早期布局",
        impact: Impact::High,
    },
    BusinessAdvantage {
        category: "用户粘性",
        description: "个性化成长机制形成强用户粘性",
        impact: Impact::Medium,
    },
    BusinessAdvantage {
        category: "生态协同",
        description: "硬件+软件+服务的完整生态体系",
        impact: Impact::Medium,
    },
];

/// Sum of the use-of-funds lines, 万元.
pub fn total_allocation() -> u32 {
    FUNDING_ALLOCATION.iter().map(|a| a.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_add_up_to_the_whole() {
        let revenue: u32 = REVENUE_STREAMS.iter().map(|s| s.percentage).sum();
        let channels: u32 = CHANNELS.iter().map(|c| c.target_share).sum();
        let funding: u32 = FUNDING_ALLOCATION.iter().map(|a| a.percentage).sum();
        assert_eq!((revenue, channels, funding), (100, 100, 100));
    }

    #[test]
    fn allocation_percentages_match_amounts() {
        let total = total_allocation();
        assert_eq!(total, 500);
        for line in FUNDING_ALLOCATION {
            assert_eq!(line.amount * 100 / total, line.percentage, "{}", line.category);
        }
    }

    #[test]
    fn unit_economics() {
        assert_eq!(BUSINESS_METRICS.ltv_to_cac(), 16.7);
    }
}
