// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::card::{Card, SectionHeading, StatCard, Trend};
use crate::components::chart::{BarChart, ChartConfig, ChartSeries, DonutChart, LineChart, Slice};
use crate::components::icons::{Icon, IconKind};
use crate::data::market::{MarketTrend, MARKET_TRENDS, TARGET_MARKETS, USER_SEGMENTS};
use crate::data::nav::MARKET;

const STATS: &[(&str, &str, Trend)] = &[
    ("1200亿", "全球宠物市场规模", Trend::up(8.2)),
    ("850亿", "AI伴侣预期市场", Trend::up(45.6)),
    ("2.8亿", "中国目标用户", Trend::up(12.3)),
    ("68%", "市场渗透潜力", Trend::up(15.8)),
];

const OUTLOOK: &[(IconKind, &str, &str)] = &[
    (IconKind::Globe, "全球化机遇", "从中国市场起步，逐步扩展到全球市场"),
    (IconKind::Target, "精准定位", "聚焦高价值用户群体，实现快速增长"),
    (IconKind::TrendingUp, "高速增长", "预计年复合增长率超过45%"),
];

fn growth_trend() -> ChartConfig {
    let column = |pick: fn(&MarketTrend) -> u32| -> Vec<f64> {
        MARKET_TRENDS.iter().map(|t| f64::from(pick(t))).collect()
    };
    ChartConfig {
        title: "相关市场增长趋势 (2020-2025)",
        y_axis_label: "市场规模 (亿元)",
        labels: MARKET_TRENDS.iter().map(|t| t.year.to_string()).collect(),
        series: vec![
            ChartSeries {
                label: "宠物市场",
                color: "#f97316",
                data_points: column(|t| t.pet_market),
            },
            ChartSeries {
                label: "心理健康市场",
                color: "#3b82f6",
                data_points: column(|t| t.mental_health),
            },
            ChartSeries {
                label: "AI伴侣市场",
                color: "#10b981",
                data_points: column(|t| t.ai_companion),
            },
        ],
    }
}

fn size_comparison() -> ChartConfig {
    ChartConfig {
        title: "AI伴侣市场 vs 传统宠物市场规模对比",
        y_axis_label: "市场规模 (亿元)",
        labels: (2023..=2027).map(|year| format!("{year}年")).collect(),
        series: vec![
            ChartSeries {
                label: "AI伴侣市场",
                color: "#f97316",
                data_points: vec![50.0, 120.0, 280.0, 520.0, 850.0],
            },
            ChartSeries {
                label: "传统宠物市场",
                color: "#3b82f6",
                data_points: vec![2400.0, 2520.0, 2650.0, 2780.0, 2920.0],
            },
        ],
    }
}

#[function_component(Market)]
pub fn market() -> Html {
    let audience: Vec<Slice> = USER_SEGMENTS
        .iter()
        .map(|segment| Slice {
            label: segment.name,
            value: f64::from(segment.percentage),
            color: segment.color,
        })
        .collect();

    html! {
        <section id={MARKET} class="section">
            <div class="container">
                <SectionHeading
                    badge={Some("市场机会分析")}
                    icon={IconKind::BarChart}
                    title="巨大的"
                    highlight="市场潜力"
                    subtitle={Some("AI情感陪伴市场正处于爆发式增长期，传统宠物市场的数字化转型为我们提供了前所未有的机遇。")}
                />

                <div class="grid grid-4">
                    { for STATS.iter().map(|(value, title, trend)| html! {
                        <StatCard title={*title} value={*value} trend={Some(*trend)} />
                    }) }
                </div>

                <div class="grid grid-2">
                    <Card><LineChart config={growth_trend()} /></Card>
                    <Card><DonutChart title="目标用户群体分布" slices={audience} hole={0.0} /></Card>
                </div>

                <Card><BarChart config={size_comparison()} width={960} /></Card>

                <h3 class="subheading">
                    { "核心" }
                    <span class="highlight">{ "目标市场" }</span>
                </h3>
                <div class="grid grid-4">
                    { for TARGET_MARKETS.iter().map(|target| html! {
                        <Card class="target-market">
                            <h4>{ target.title }</h4>
                            <div class="target-size">{ target.size }</div>
                            <p>{ target.description }</p>
                            <div class="target-traits">
                                <span>{ "核心特征:" }</span>
                                { for target.characteristics.iter().map(|c| html! { <span class="chip">{ *c }</span> }) }
                            </div>
                        </Card>
                    }) }
                </div>

                <div class="summary-banner">
                    <h3>{ "千亿级市场机遇" }</h3>
                    <p>{ "AI情感陪伴市场正处于爆发前夜，预计未来5年将达到850亿元规模。Mulfin有望成为这个新兴市场的领导者。" }</p>
                    <div class="grid grid-3">
                        { for OUTLOOK.iter().map(|(icon, title, text)| html! {
                            <div class="outlook">
                                <Icon kind={*icon} class="icon-lg" />
                                <h4>{ *title }</h4>
                                <p>{ *text }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
