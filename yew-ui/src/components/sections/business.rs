// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::card::{Card, SectionHeading, StatCard};
use crate::components::chart::{BarChart, ChartConfig, ChartSeries, DonutChart, LineChart, Slice};
use crate::components::icons::{Icon, IconKind};
use crate::components::tab_bar::TabBar;
use crate::data::business::{
    BusinessMetrics, Impact, BUSINESS_ADVANTAGES, BUSINESS_METRICS, CHANNELS,
    FINANCIAL_PROJECTIONS, FUNDING_ALLOCATION, REVENUE_STREAMS,
};
use crate::data::nav::BUSINESS;
use crate::model::tabs::{BusinessTab, Tab};

/// (title, value, subtitle) for the unit-economics row.
fn metric_cards(m: &BusinessMetrics) -> Vec<(&'static str, String, &'static str)> {
    vec![
        ("目标售价", format!("¥{}", m.target_price), "产品定价策略"),
        ("毛利率", format!("{}%", m.gross_margin), "盈利能力指标"),
        ("获客成本", format!("¥{}", m.customer_acquisition_cost), "营销效率"),
        ("客户生命周期价值", format!("¥{}", m.customer_lifetime_value), "用户价值"),
        ("月流失率", format!("{}%", m.monthly_churn_rate), "用户留存"),
        ("平均订单价值", format!("¥{}", m.average_order_value), "销售效率"),
        ("投资回收期", format!("{}个月", m.payback_period_months), "资金回收"),
        ("LTV/CAC", format!("{:.1}", m.ltv_to_cac()), "单位经济模型"),
    ]
}

fn revenue_panel() -> Html {
    let slices: Vec<Slice> = REVENUE_STREAMS
        .iter()
        .map(|s| Slice {
            label: s.name,
            value: f64::from(s.percentage),
            color: s.color,
        })
        .collect();

    html! {
        <div class="grid grid-2">
            <Card>
                <h3 class="panel-title"><Icon kind={IconKind::DollarSign} class="icon-sm" />{ "收入结构分析" }</h3>
                <DonutChart title="收入来源分布" slices={slices} />
            </Card>
            <div class="detail-list">
                <h3 class="panel-title">{ "收入模式详解" }</h3>
                { for REVENUE_STREAMS.iter().map(|stream| html! {
                    <Card class="detail">
                        <div class="detail-header">
                            <span class="swatch" style={format!("background-color: {}", stream.color)}></span>
                            <h4>{ stream.name }</h4>
                            <span class="detail-share">{ format!("{}%", stream.percentage) }</span>
                        </div>
                        <p>{ stream.description }</p>
                        <div class="detail-row">
                            <span>{ "预期年收入" }</span>
                            <strong>{ format!("{}万元", stream.expected_revenue) }</strong>
                        </div>
                    </Card>
                }) }
            </div>
        </div>
    }
}

fn channels_panel() -> Html {
    let config = ChartConfig {
        title: "各渠道预期转化率",
        y_axis_label: "转化率 (%)",
        labels: CHANNELS.iter().map(|c| c.name.to_string()).collect(),
        series: vec![ChartSeries {
            label: "预期转化率 (%)",
            color: "#10b981",
            data_points: CHANNELS.iter().map(|c| f64::from(c.conversion_rate)).collect(),
        }],
    };

    html! {
        <div class="grid grid-2">
            <Card>
                <h3 class="panel-title"><Icon kind={IconKind::Target} class="icon-sm" />{ "渠道转化率对比" }</h3>
                <BarChart config={config} />
            </Card>
            <div class="detail-list">
                <h3 class="panel-title">{ "销售渠道策略" }</h3>
                { for CHANNELS.iter().map(|channel| html! {
                    <Card class="detail">
                        <div class="detail-header">
                            <h4>{ channel.name }</h4>
                            <span class="chip">{ channel.kind.label() }</span>
                            <span class="detail-share">{ format!("{}%", channel.target_share) }</span>
                        </div>
                        <p>{ channel.description }</p>
                        <div class="detail-row"><span>{ channel.timeline }</span></div>
                        <div class="detail-row">
                            <span>{ "投入成本" }</span><strong>{ channel.cost }</strong>
                            <span>{ "预期ROI" }</span><strong>{ channel.roi }</strong>
                        </div>
                    </Card>
                }) }
            </div>
        </div>
    }
}

fn funding_panel() -> Html {
    let config = ChartConfig {
        title: "资金使用分配",
        y_axis_label: "金额 (万元)",
        labels: FUNDING_ALLOCATION.iter().map(|f| f.category.to_string()).collect(),
        series: vec![ChartSeries {
            label: "资金分配 (万元)",
            color: "#3b82f6",
            data_points: FUNDING_ALLOCATION.iter().map(|f| f64::from(f.amount)).collect(),
        }],
    };

    html! {
        <div class="grid grid-2">
            <Card>
                <h3 class="panel-title"><Icon kind={IconKind::BarChart} class="icon-sm" />{ "资金分配计划" }</h3>
                <BarChart config={config} />
            </Card>
            <div class="detail-list">
                <h3 class="panel-title">{ "资金使用详情" }</h3>
                { for FUNDING_ALLOCATION.iter().map(|item| html! {
                    <Card class="detail">
                        <div class="detail-header">
                            <span class="swatch" style={format!("background-color: {}", item.color)}></span>
                            <h4>{ item.category }</h4>
                            <strong>{ format!("{}万元", item.amount) }</strong>
                        </div>
                        <p>{ item.description }</p>
                        <div class="detail-row">
                            <span>{ "占比" }</span>
                            <div class="progress"><div class="progress-bar" style={format!("width: {}%", item.percentage)}></div></div>
                            <strong>{ format!("{}%", item.percentage) }</strong>
                        </div>
                    </Card>
                }) }
            </div>
        </div>
    }
}

fn projections_panel() -> Html {
    let config = ChartConfig {
        title: "收入与利润预测 (2024-2028)",
        y_axis_label: "金额 (万元)",
        labels: FINANCIAL_PROJECTIONS.iter().map(|p| p.year.to_string()).collect(),
        series: vec![
            ChartSeries {
                label: "收入 (万元)",
                color: "#10b981",
                data_points: FINANCIAL_PROJECTIONS.iter().map(|p| f64::from(p.revenue)).collect(),
            },
            ChartSeries {
                label: "利润 (万元)",
                color: "#f97316",
                data_points: FINANCIAL_PROJECTIONS.iter().map(|p| f64::from(p.profit)).collect(),
            },
        ],
    };

    html! {
        <div class="grid grid-2">
            <Card>
                <h3 class="panel-title"><Icon kind={IconKind::TrendingUp} class="icon-sm" />{ "财务增长预测" }</h3>
                <LineChart config={config} />
            </Card>
            <div class="detail-list">
                { for FINANCIAL_PROJECTIONS.iter().map(|projection| html! {
                    <Card class="detail projection">
                        <h4>{ format!("{}年", projection.year) }</h4>
                        <div class="grid grid-3">
                            <div><p>{ "预期收入" }</p><strong>{ format!("{}万元", projection.revenue) }</strong></div>
                            <div><p>{ "预期利润" }</p><strong>{ format!("{}万元", projection.profit) }</strong></div>
                            <div><p>{ "用户规模" }</p><strong>{ format!("{}万人", projection.users) }</strong></div>
                        </div>
                        <div class="detail-row">
                            <span>{ "市场份额" }</span>
                            <strong>{ format!("{}%", projection.market_share) }</strong>
                        </div>
                    </Card>
                }) }
            </div>
        </div>
    }
}

#[function_component(Business)]
pub fn business() -> Html {
    let tab = use_state_eq(BusinessTab::default);
    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |next: BusinessTab| tab.set(next))
    };

    let panel = match *tab {
        BusinessTab::Revenue => revenue_panel(),
        BusinessTab::Channels => channels_panel(),
        BusinessTab::Funding => funding_panel(),
        BusinessTab::Projections => projections_panel(),
    };

    html! {
        <section id={BUSINESS} class="section">
            <div class="container">
                <SectionHeading
                    badge={Some("商业模式")}
                    icon={IconKind::DollarSign}
                    title="可持续的"
                    highlight="商业模式"
                    subtitle={Some("基于多元化收入结构和精准市场定位，构建可持续增长的商业生态系统。")}
                />

                <div class="grid grid-4">
                    { for metric_cards(&BUSINESS_METRICS).into_iter().map(|(title, value, subtitle)| html! {
                        <StatCard title={title} value={value} subtitle={Some(AttrValue::from(subtitle))} />
                    }) }
                </div>

                <TabBar<BusinessTab> active={*tab} on_select={on_tab} />
                <div class="tab-panel" data-tab={tab.key()}>
                    { panel }
                </div>

                <h3 class="subheading">
                    { "核心" }
                    <span class="highlight">{ "商业优势" }</span>
                </h3>
                <div class="grid grid-4">
                    { for BUSINESS_ADVANTAGES.iter().map(|advantage| html! {
                        <Card class="advantage">
                            <h4>{ advantage.category }</h4>
                            <p>{ advantage.description }</p>
                            <span class={classes!("impact", match advantage.impact {
                                Impact::High => "impact-high",
                                Impact::Medium => "impact-medium",
                            })}>
                                { match advantage.impact {
                                    Impact::High => "高影响",
                                    Impact::Medium => "中影响",
                                } }
                            </span>
                        </Card>
                    }) }
                </div>
                <p class="closing-note">{ "通过多元化收入模式和精准市场策略，实现可持续的商业增长" }</p>
            </div>
        </section>
    }
}
