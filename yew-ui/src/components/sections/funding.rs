// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::card::{Card, SectionHeading};
use crate::components::chart::{ChartConfig, ChartSeries, DonutChart, LineChart, Slice};
use crate::components::icons::{Icon, IconKind};
use crate::data::business::FUNDING_ALLOCATION;
use crate::data::funding::{
    find_round, FundingRound, RoundStatus, DEFAULT_ROUND, FUNDING_ROUNDS, INVESTMENT_HIGHLIGHTS,
    INVESTOR_PROTECTIONS, RISK_MITIGATION, VALUATION_FORECAST,
};
use crate::data::nav::{CONTACT, FUNDING};
use crate::hooks::use_scroll_to;

fn valuation_chart() -> ChartConfig {
    ChartConfig {
        title: "投资回报预测",
        y_axis_label: "估值 (百万美元)",
        labels: VALUATION_FORECAST.iter().map(|(year, _)| year.to_string()).collect(),
        series: vec![ChartSeries {
            label: "估值 (百万美元)",
            color: "#10b981",
            data_points: VALUATION_FORECAST.iter().map(|(_, value)| *value).collect(),
        }],
    }
}

fn round_detail(round: &FundingRound, on_contact: Callback<MouseEvent>) -> Html {
    let terms = [
        ("融资金额:", round.amount),
        ("预计时间:", round.timeline),
        ("公司估值:", round.valuation),
        ("出让股权:", round.equity),
    ];
    html! {
        <Card class="round-detail">
            <div class="round-header">
                <div>
                    <h3>{ format!("{}融资", round.round) }</h3>
                    <p>{ round.description }</p>
                </div>
                <span class={classes!("status-badge", round.status.class())}>{ round.status.label() }</span>
            </div>
            <div class="grid grid-2">
                <div>
                    <dl class="round-terms">
                        { for terms.iter().map(|(name, value)| html! {
                            <div class="detail-row"><dt>{ *name }</dt><dd>{ *value }</dd></div>
                        }) }
                    </dl>
                    <h4>{ "目标投资者类型" }</h4>
                    <div class="chip-list">
                        { for round.investors.iter().map(|i| html! { <span class="chip">{ *i }</span> }) }
                    </div>
                </div>
                <div>
                    <h4>{ "关键里程碑" }</h4>
                    <ul class="check-list">
                        { for round.milestones.iter().map(|m| html! {
                            <li><Icon kind={IconKind::CheckCircle} class="icon-xs check" />{ *m }</li>
                        }) }
                    </ul>
                    if round.status == RoundStatus::Current {
                        <button type="button" class="btn btn-primary round-cta" onclick={on_contact}>
                            { "联系我们讨论投资机会" }
                        </button>
                    }
                </div>
            </div>
        </Card>
    }
}

#[function_component(Funding)]
pub fn funding() -> Html {
    let active_round = use_state_eq(|| DEFAULT_ROUND);
    let scroll_to = use_scroll_to();
    let to_contact = scroll_to.reform(|_: MouseEvent| CONTACT);

    let allocation: Vec<Slice> = FUNDING_ALLOCATION
        .iter()
        .map(|item| Slice {
            label: item.category,
            value: f64::from(item.percentage),
            color: item.color,
        })
        .collect();

    html! {
        <section id={FUNDING} class="section section-muted">
            <div class="container">
                <SectionHeading
                    badge={Some("融资需求")}
                    icon={IconKind::DollarSign}
                    title="寻求"
                    highlight="战略投资"
                    subtitle={Some("与优秀的投资伙伴携手，共同打造AI情感陪伴领域的领导品牌。")}
                />

                <h3 class="subheading">{ "投资" }<span class="highlight">{ "亮点" }</span></h3>
                <div class="grid grid-4">
                    { for INVESTMENT_HIGHLIGHTS.iter().map(|h| html! {
                        <Card class="highlight-card">
                            <div class="advantage-icon"><Icon kind={h.icon} class="icon-lg" /></div>
                            <h4>{ h.title }</h4>
                            <p>{ h.description }</p>
                        </Card>
                    }) }
                </div>

                <h3 class="subheading">{ "融资" }<span class="highlight">{ "计划" }</span></h3>
                <div class="round-selector">
                    { for FUNDING_ROUNDS.iter().map(|round| {
                        let is_active = *active_round == round.round;
                        let onclick = {
                            let active_round = active_round.clone();
                            let name = round.round;
                            Callback::from(move |_: MouseEvent| active_round.set(name))
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("round-button", is_active.then_some("active"))}
                                data-round={round.round}
                                {onclick}
                            >
                                <span class="round-name">{ round.round }</span>
                                <span class="round-amount">{ round.amount }</span>
                            </button>
                        }
                    }) }
                </div>
                { for find_round(*active_round).map(|round| round_detail(round, to_contact.clone())) }

                <div class="grid grid-2">
                    <Card>
                        <h3 class="panel-title">{ "资金使用计划" }</h3>
                        <DonutChart title="资金使用计划" slices={allocation} />
                    </Card>
                    <Card>
                        <LineChart config={valuation_chart()} />
                        <div class="roi-note">
                            <h4>{ "预期回报" }</h4>
                            <p>{ "基于保守估计，A轮投资者在5年内可获得100倍回报" }</p>
                        </div>
                    </Card>
                </div>

                <h3 class="subheading">{ "风险" }<span class="highlight">{ "控制" }</span></h3>
                <div class="grid grid-2">
                    { for RISK_MITIGATION.iter().map(|item| html! {
                        <Card class="risk">
                            <div class="risk-header">
                                <Icon kind={IconKind::Shield} class="icon-sm" />
                                <h4>{ item.risk }</h4>
                                <span class={classes!("status-badge", item.level.class())}>{ item.level.label() }</span>
                            </div>
                            <p>{ item.mitigation }</p>
                        </Card>
                    }) }
                </div>

                <h3 class="subheading">{ "投资者" }<span class="highlight">{ "权益保障" }</span></h3>
                <div class="grid grid-4">
                    { for INVESTOR_PROTECTIONS.iter().map(|p| html! {
                        <div class="advantage">
                            <Icon kind={p.icon} class="icon-lg" />
                            <h4>{ p.title }</h4>
                            <p>{ p.description }</p>
                        </div>
                    }) }
                </div>

                <div class="cta-banner">
                    <h3>{ "与Mulfin一起，共创AI情感陪伴的美好未来" }</h3>
                    <button type="button" class="btn btn-light btn-lg" onclick={to_contact}>
                        { "立即联系投资团队" }
                        <Icon kind={IconKind::ArrowRight} class="icon-sm" />
                    </button>
                </div>
            </div>
        </section>
    }
}
