// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::card::{Card, SectionHeading, StatCard};
use crate::components::icons::{Icon, IconKind};
use crate::components::tab_bar::TabBar;
use crate::data::milestones::{
    milestone_stats, DevelopmentPhase, Milestone, MilestoneStatus, DEVELOPMENT_PHASES,
    FUTURE_VISION, MILESTONES,
};
use crate::data::nav::ROADMAP;
use crate::model::tabs::{RoadmapView, Tab};

fn status_icon(status: MilestoneStatus) -> IconKind {
    match status {
        MilestoneStatus::Completed => IconKind::CheckCircle,
        MilestoneStatus::InProgress => IconKind::Clock,
        MilestoneStatus::Planned => IconKind::Calendar,
    }
}

fn format_budget(yuan: u64) -> String {
    format!("¥{}万", yuan / 10_000)
}

fn timeline_entry(milestone: &Milestone) -> Html {
    let status = milestone.status;
    html! {
        <li class={classes!("timeline-entry", status.class())}>
            <div class="timeline-node"><Icon kind={status_icon(status)} class="icon-sm" /></div>
            <Card class="timeline-card">
                <div class="timeline-header">
                    <h4>{ milestone.title }</h4>
                    <span class={classes!("status-badge", status.class())}>{ status.label() }</span>
                </div>
                <div class="timeline-meta">
                    <span><Icon kind={IconKind::Calendar} class="icon-xs" />{ milestone.date }</span>
                    if let Some(budget) = milestone.budget {
                        <span><Icon kind={IconKind::DollarSign} class="icon-xs" />{ format_budget(budget) }</span>
                    }
                </div>
                <p>{ milestone.description }</p>
                if status == MilestoneStatus::InProgress {
                    <div class="progress">
                        <div class="progress-bar" style={format!("width: {}%", milestone.progress)}></div>
                    </div>
                    <div class="progress-label">{ format!("{}%", milestone.progress) }</div>
                }
                if !milestone.deliverables.is_empty() {
                    <div class="deliverables">
                        <span>{ "主要交付物:" }</span>
                        <div class="chip-list">
                            { for milestone.deliverables.iter().map(|d| html! { <span class="chip">{ *d }</span> }) }
                        </div>
                    </div>
                }
            </Card>
        </li>
    }
}

fn phase_detail(phase: &DevelopmentPhase) -> Html {
    let progress = phase.progress();
    html! {
        <Card class="phase-detail">
            <div class="phase-header">
                <div>
                    <h3>{ phase.name }</h3>
                    <p>{ phase.description }</p>
                </div>
                <div class="phase-meta">
                    <span><Icon kind={IconKind::Clock} class="icon-xs" />{ phase.duration }</span>
                    <span><Icon kind={IconKind::DollarSign} class="icon-xs" />{ format_budget(phase.budget) }</span>
                </div>
            </div>
            <div class="progress">
                <div class="progress-bar" style={format!("width: {progress}%")}></div>
            </div>
            <div class="progress-label">{ format!("阶段进度 {progress}%") }</div>
            <div class="grid grid-2">
                <div>
                    <h4>{ "核心目标" }</h4>
                    <ul class="check-list">
                        { for phase.key_objectives.iter().map(|o| html! {
                            <li><Icon kind={IconKind::Target} class="icon-xs" />{ *o }</li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{ "关键里程碑" }</h4>
                    <ul class="phase-milestones">
                        { for phase.milestones().map(|m| html! {
                            <li class={m.status.class()}>
                                <Icon kind={status_icon(m.status)} class="icon-xs" />
                                <span>{ m.title }</span>
                                <span class="status-badge">{ m.status.label() }</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </Card>
    }
}

#[function_component(Roadmap)]
pub fn roadmap() -> Html {
    let view = use_state_eq(RoadmapView::default);
    let active_phase = use_state_eq(|| DEVELOPMENT_PHASES.first().map(|p| p.id));

    let on_view = {
        let view = view.clone();
        Callback::from(move |next: RoadmapView| view.set(next))
    };

    let stats = milestone_stats();
    let stat_cards = [
        ("已完成", stats.completed.to_string(), format!("共 {} 项", stats.total)),
        ("进行中", stats.in_progress.to_string(), format!("共 {} 项", stats.total)),
        ("计划中", stats.planned.to_string(), format!("共 {} 项", stats.total)),
        ("总进度", format!("{}%", stats.completion_rate), format!("总预算 {}", format_budget(stats.total_budget))),
    ];

    let phases = html! {
        <div class="phases">
            <div class="phase-selector">
                { for DEVELOPMENT_PHASES.iter().map(|phase| {
                    let is_active = *active_phase == Some(phase.id);
                    let onclick = {
                        let active_phase = active_phase.clone();
                        let id = phase.id;
                        Callback::from(move |_: MouseEvent| active_phase.set(Some(id)))
                    };
                    html! {
                        <button type="button" class={classes!("phase-button", is_active.then_some("active"))} {onclick}>
                            <span class="phase-name">{ phase.name }</span>
                            <span class="phase-duration">{ phase.duration }</span>
                        </button>
                    }
                }) }
            </div>
            { for DEVELOPMENT_PHASES
                .iter()
                .filter(|phase| *active_phase == Some(phase.id))
                .map(phase_detail) }
        </div>
    };

    html! {
        <section id={ROADMAP} class="section">
            <div class="container">
                <SectionHeading
                    badge={Some("发展规划")}
                    icon={IconKind::Calendar}
                    title="清晰的"
                    highlight="发展路线"
                    subtitle={Some("基于市场需求和技术发展，制定了明确的产品发展路线图和里程碑计划。")}
                />

                <div class="grid grid-4">
                    { for stat_cards.into_iter().map(|(title, value, subtitle)| html! {
                        <StatCard title={title} value={value} subtitle={Some(AttrValue::from(subtitle))} />
                    }) }
                </div>

                <TabBar<RoadmapView> active={*view} on_select={on_view} />
                <div class="tab-panel" data-tab={view.key()}>
                    { match *view {
                        RoadmapView::Timeline => html! {
                            <ol class="timeline">
                                { for MILESTONES.iter().map(timeline_entry) }
                            </ol>
                        },
                        RoadmapView::Phases => phases,
                    } }
                </div>

                <div class="summary-banner">
                    <h3>{ FUTURE_VISION.title }</h3>
                    <p>{ FUTURE_VISION.description }</p>
                    <div class="grid grid-4">
                        { for FUTURE_VISION.goals.iter().map(|goal| html! {
                            <div class="vision-goal">
                                <div class="figure-value">{ goal.target }</div>
                                <h4>{ goal.title }</h4>
                                <p>{ goal.description }</p>
                            </div>
                        }) }
                    </div>
                    <div class="vision-timeline">{ FUTURE_VISION.timeline }</div>
                </div>
                <p class="closing-note">{ "通过清晰的发展路线图，Mulfin将成为AI情感陪伴领域的领导者" }</p>
            </div>
        </section>
    }
}
