// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::card::{Card, SectionHeading};
use crate::components::chart::{ScatterChart, ScatterPoint};
use crate::components::icons::{Icon, IconKind};
use crate::data::competitors::{
    Competitor, COMPETITIVE_ADVANTAGES, COMPETITORS, MARKET_POSITIONING,
};
use crate::data::nav::COMPETITION;
use crate::model::selection::toggle;

const QUADRANTS: &[(&str, &str, &str)] = &[
    ("高智能 + 高价格", "专业级AI伴侣，面向高端用户", "tone-purple"),
    ("高智能 + 低价格", "Mulfin的目标定位，高性价比", "tone-orange"),
    ("低智能 + 高价格", "传统宠物机器人，功能有限", "tone-red"),
    ("低智能 + 低价格", "基础陪伴产品，功能简单", "tone-gray"),
];

const RIVALS: [&str; 3] = ["竞品A", "竞品B", "竞品C"];

/// Feature, then support by Mulfin and by each rival.
const FEATURE_MATRIX: &[(&str, [bool; 4])] = &[
    ("AI情感识别", [true, false, true, false]),
    ("硬件交互", [true, false, false, true]),
    ("24/7陪伴", [true, true, true, false]),
    ("个性化学习", [true, false, true, false]),
    ("隐私保护", [true, false, false, true]),
    ("多模态交互", [true, false, false, false]),
    ("情感数据分析", [true, false, true, false]),
    ("社区功能", [true, true, false, false]),
];

/// Five marks for a 1-10 score.
fn rating(score: u8, filled: &'static str, render: fn(&'static str) -> Html) -> Html {
    html! {
        <span class="rating">
            { for (0..5u8).map(|i| render(if i * 2 < score { filled } else { "empty" })) }
        </span>
    }
}

fn star(class: &'static str) -> Html {
    html! { <span class={classes!("star", class)}><Icon kind={IconKind::Star} class="icon-xs" /></span> }
}

fn yen(class: &'static str) -> Html {
    html! { <span class={classes!("yen", class)}>{ "¥" }</span> }
}

fn support_mark(supported: bool) -> Html {
    if supported {
        html! { <Icon kind={IconKind::CheckCircle} class="icon-sm yes" /> }
    } else {
        html! { <Icon kind={IconKind::X} class="icon-sm no" /> }
    }
}

#[derive(Properties, PartialEq)]
struct CompetitorCardProps {
    competitor: &'static Competitor,
    selected: bool,
    on_toggle: Callback<&'static str>,
}

#[function_component(CompetitorCard)]
fn competitor_card(props: &CompetitorCardProps) -> Html {
    let competitor = props.competitor;
    let onclick = {
        let name = competitor.name;
        props.on_toggle.reform(move |_: MouseEvent| name)
    };
    let class = classes!(
        "competitor-card",
        competitor.is_us().then_some("ours"),
        props.selected.then_some("selected"),
    );

    html! {
        <Card class={class} onclick={onclick}>
            <div class="competitor-header">
                <h4>{ competitor.name }</h4>
                if competitor.is_us() {
                    <Icon kind={IconKind::Award} class="icon-sm" />
                }
            </div>
            <p>{ competitor.description }</p>
            <div class="competitor-score">
                <span>{ "智能化程度" }</span>
                { rating(competitor.intelligence, "filled", star) }
            </div>
            <div class="competitor-score">
                <span>{ "价格水平" }</span>
                { rating(competitor.price, "filled", yen) }
            </div>
            if props.selected {
                <div class="competitor-details">
                    <span class="strengths-title">{ "优势:" }</span>
                    <ul>
                        { for competitor.strengths.iter().map(|s| html! {
                            <li><Icon kind={IconKind::CheckCircle} class="icon-xs yes" />{ *s }</li>
                        }) }
                    </ul>
                    <span class="weaknesses-title">{ "劣势:" }</span>
                    <ul>
                        { for competitor.weaknesses.iter().map(|w| html! {
                            <li><Icon kind={IconKind::X} class="icon-xs no" />{ *w }</li>
                        }) }
                    </ul>
                </div>
            }
        </Card>
    }
}

#[function_component(Competition)]
pub fn competition() -> Html {
    let selected = use_state_eq(|| None::<&'static str>);
    let on_toggle = {
        let selected = selected.clone();
        Callback::from(move |name: &'static str| selected.set(toggle(*selected, name)))
    };

    let points: Vec<ScatterPoint> = COMPETITORS
        .iter()
        .map(|c| ScatterPoint {
            label: c.name,
            x: f64::from(c.intelligence),
            y: f64::from(c.price),
            highlight: c.is_us(),
        })
        .collect();

    html! {
        <section id={COMPETITION} class="section section-muted">
            <div class="container">
                <SectionHeading
                    badge={Some("竞争分析")}
                    icon={IconKind::Target}
                    title="市场"
                    highlight="竞争格局"
                    subtitle={Some("通过深入的竞争分析，我们明确了Mulfin在AI情感陪伴市场中的独特定位和竞争优势。")}
                />

                <h3 class="subheading">{ "市场定位分析" }</h3>
                <Card>
                    <ScatterChart
                        title="智能化程度 vs 价格定位"
                        x_label="智能化程度 →"
                        y_label="价格水平 →"
                        points={points}
                    />
                    <div class="grid grid-2 quadrants">
                        { for QUADRANTS.iter().map(|(title, description, tone)| html! {
                            <div class={classes!("quadrant", *tone)}>
                                <h4>{ *title }</h4>
                                <p>{ *description }</p>
                            </div>
                        }) }
                    </div>
                </Card>

                <h3 class="subheading">{ "主要竞争对手分析" }</h3>
                <div class="grid grid-4">
                    { for COMPETITORS.iter().map(|competitor| html! {
                        <CompetitorCard
                            competitor={competitor}
                            selected={*selected == Some(competitor.name)}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </div>

                <h3 class="subheading">{ "核心功能对比" }</h3>
                <div class="table-wrap">
                    <table class="comparison-table">
                        <thead>
                            <tr>
                                <th>{ "功能特性" }</th>
                                <th class="ours">{ "Mulfin" }</th>
                                { for RIVALS.iter().map(|rival| html! { <th>{ *rival }</th> }) }
                            </tr>
                        </thead>
                        <tbody>
                            { for FEATURE_MATRIX.iter().map(|(feature, support)| html! {
                                <tr>
                                    <td>{ *feature }</td>
                                    { for support.iter().map(|s| html! { <td class="mark">{ support_mark(*s) }</td> }) }
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>

                <h3 class="subheading">
                    { "核心" }
                    <span class="highlight">{ "竞争优势" }</span>
                </h3>
                <div class="grid grid-3">
                    { for COMPETITIVE_ADVANTAGES.iter().map(|advantage| html! {
                        <Card class="advantage">
                            <div class="advantage-icon"><Icon kind={advantage.icon} class="icon-lg" /></div>
                            <h4>{ advantage.title }</h4>
                            <p>{ advantage.description }</p>
                        </Card>
                    }) }
                </div>

                <div class="summary-banner">
                    <h3>{ MARKET_POSITIONING.title }</h3>
                    <div class="positioning-subtitle">{ MARKET_POSITIONING.subtitle }</div>
                    <p>{ MARKET_POSITIONING.description }</p>
                </div>
            </div>
        </section>
    }
}
