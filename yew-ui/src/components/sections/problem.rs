// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::card::{Card, SectionHeading, StatCard, Trend};
use crate::components::chart::{BarChart, ChartConfig, ChartSeries, DonutChart, Slice};
use crate::components::icons::Icon;
use crate::data::market::PAIN_POINTS;
use crate::data::nav::PROBLEM;

const STATS: &[(&str, &str, Option<Trend>)] = &[
    ("73%", "成年人感到孤独", Some(Trend::down(15.0))),
    ("2.8亿", "中国单身人群", Some(Trend::up(8.0))),
    ("¥3000+", "月均宠物支出", Some(Trend::up(12.0))),
    ("24/7", "情感需求时间", None),
];

const SUMMARY_FIGURES: &[(&str, &str)] =
    &[("60%", "市场缺口"), ("1000亿+", "潜在市场规模"), ("85%", "用户需求强度")];

fn affected_population() -> ChartConfig {
    ChartConfig {
        title: "各类痛点影响人群分布",
        y_axis_label: "影响人群(百万人)",
        labels: PAIN_POINTS.iter().map(|p| p.title.to_string()).collect(),
        series: vec![ChartSeries {
            label: "影响人群(百万人)",
            color: "#f97316",
            data_points: vec![68.0, 85.0, 130.0],
        }],
    }
}

fn market_gap() -> Vec<Slice> {
    vec![
        Slice { label: "情感陪伴需求", value: 85.0, color: "#f97316" },
        Slice { label: "现有解决方案", value: 25.0, color: "#3b82f6" },
        Slice { label: "市场缺口", value: 60.0, color: "#e5e7eb" },
    ]
}

#[function_component(Problem)]
pub fn problem() -> Html {
    html! {
        <section id={PROBLEM} class="section section-muted">
            <div class="container">
                <SectionHeading
                    title="现代社会的"
                    highlight="情感困境"
                    subtitle={Some("在快节奏的现代生活中，越来越多的人面临着情感孤独、心理压力和缺乏陪伴的问题。传统的解决方案已经无法满足人们日益增长的情感需求。")}
                />

                <div class="grid grid-4">
                    { for STATS.iter().map(|(value, title, trend)| html! {
                        <StatCard title={*title} value={*value} trend={*trend} />
                    }) }
                </div>

                <h3 class="subheading">{ "核心痛点分析" }</h3>
                <div class="grid grid-3">
                    { for PAIN_POINTS.iter().map(|point| html! {
                        <Card class="pain-point">
                            <div class="pain-icon"><Icon kind={point.icon} class="icon-lg" /></div>
                            <h3>{ point.title }</h3>
                            <p>{ point.description }</p>
                            <div class="pain-statistic">{ point.statistic }</div>
                        </Card>
                    }) }
                </div>

                <div class="grid grid-2">
                    <Card><BarChart config={affected_population()} /></Card>
                    <Card>
                        <DonutChart title="情感陪伴市场缺口分析" slices={market_gap()} center_label={Some(AttrValue::from("60%"))} />
                    </Card>
                </div>

                <div class="summary-banner">
                    <h3>{ "市场急需创新解决方案" }</h3>
                    <p>{ "传统的情感支持方式存在时间限制、成本高昂、可及性差等问题。市场迫切需要一种全天候、智能化、可负担的情感陪伴解决方案。" }</p>
                    <div class="summary-figures">
                        { for SUMMARY_FIGURES.iter().map(|(value, caption)| html! {
                            <div>
                                <div class="figure-value">{ *value }</div>
                                <div class="figure-caption">{ *caption }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
